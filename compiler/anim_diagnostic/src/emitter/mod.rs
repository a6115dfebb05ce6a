//! Diagnostic Emitters
//!
//! Only a terminal emitter exists; the trait keeps the CLI independent of
//! the output format.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use anim_ir::TokenPosition;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Script text a diagnostic points into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceInfo {
    pub path: String,
    pub content: String,
}

impl SourceInfo {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        SourceInfo {
            path: path.into(),
            content: content.into(),
        }
    }

    /// 1-based line/column of a byte offset, counting columns in characters.
    ///
    /// Offsets past the end resolve to the position just after the last
    /// character.
    pub fn position_of(&self, offset: u32) -> TokenPosition {
        let offset = (offset as usize).min(self.content.len());
        let before = self.content.get(..offset).unwrap_or(&self.content);
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line = before.matches('\n').count() + 1;
        let column = before[line_start..].chars().count() + 1;
        TokenPosition::new(saturate(line), saturate(column))
    }

    /// Text of the given 1-based line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.content
            .split('\n')
            .nth(index)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }
}

fn saturate(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
