//! Canonical script rendering.
//!
//! Output re-parses to an equal tree, so `anim parse` can echo a script in
//! normalized form.

use std::fmt;

use super::{AnimationObject, Command, Direction, Shape};

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Line { start, end } => write!(f, "(line {start} {end})"),
            Shape::Circle { center, radius } => write!(f, "(circle {center} {radius})"),
        }
    }
}

/// Renders the draw list only: `((line (0 0) (50 50)) (circle (25 25) 25))`.
impl fmt::Display for AnimationObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, shape) in self.shapes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{shape}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        anim_stack::ensure_sufficient_stack(|| self.render(f))
    }
}

impl Command {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Define { name, object } => write!(f, "(define {name} {object})"),
            Command::Place { name, position } => write!(f, "(place {name} {position})"),
            Command::Shift { name, direction } => write!(f, "(shift {name} {direction})"),
            Command::Erase { name } => write!(f, "(erase {name})"),
            Command::Loop { count, body } => {
                write!(f, "(loop {count} (")?;
                for (i, command) in body.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{command}")?;
                }
                f.write_str("))")
            }
        }
    }
}
