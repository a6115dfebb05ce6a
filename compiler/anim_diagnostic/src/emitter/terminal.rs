//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and a
//! source snippet under the primary label.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::{DiagnosticEmitter, SourceInfo};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceInfo>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the script that diagnostics point into, enabling
    /// `path:line:col` locations and source snippets.
    #[must_use]
    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &crate::Label) {
        let Some(source) = self.source.clone() else {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let position = source.position_of(label.span.start);
        let _ = writeln!(self.writer, "  --> {}:{position}", source.path);

        let Some(line_text) = source.line_text(position.line) else {
            return;
        };
        let gutter = position.line.to_string();
        let pad = " ".repeat(gutter.len());
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{gutter} | {line_text}");

        let width = source
            .content
            .get(label.span.to_range())
            .map_or(1, |text| text.chars().count().max(1));
        let indent = " ".repeat(position.column.saturating_sub(1) as usize);
        let _ = write!(self.writer, "{pad} | {indent}");
        self.write_colored(&"^".repeat(width), colors::ERROR);
        let _ = write!(self.writer, " ");
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use anim_ir::Span;
    use pretty_assertions::assert_eq;

    fn render(emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
        let mut emitter = emitter;
        emitter.emit(diag);
        emitter.flush();
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }

    #[test]
    fn renders_snippet_with_carets() {
        let source = "(place cross (0 0))\n(shift cross sideways)\n";
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("expected a direction, found Identifier(\"sideways\") at line 2:14")
            .with_label(Span::new(33, 41), "expected a direction")
            .with_note("directions are up, down, left and right");
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
            .with_source(SourceInfo::new("demo.anim", source));

        let expected = "\
error[E1001]: expected a direction, found Identifier(\"sideways\") at line 2:14
  --> demo.anim:2:14
  |
2 | (shift cross sideways)
  |              ^^^^^^^^ expected a direction
  = note: directions are up, down, left and right

";
        assert_eq!(render(emitter, &diag), expected);
    }

    #[test]
    fn renders_span_without_source() {
        let diag = Diagnostic::error(ErrorCode::E0001)
            .with_message("invalid character '*'")
            .with_label(Span::new(4, 5), "invalid character");
        let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
        let text = render(emitter, &diag);
        assert!(text.starts_with("error[E0001]: invalid character '*'\n"));
        assert!(text.contains("--> 4..5: invalid character"));
    }

    #[test]
    fn colors_only_when_enabled() {
        let diag = Diagnostic::error(ErrorCode::E6002).with_message("object 'ghost' is not declared");
        let plain = render(
            TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Auto, false),
            &diag,
        );
        assert!(!plain.contains("\x1b["));

        let colored = render(
            TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false),
            &diag,
        );
        assert!(colored.contains(colors::ERROR));
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }
}
