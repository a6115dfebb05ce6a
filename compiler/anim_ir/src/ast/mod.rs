//! The command tree produced by the parser.
//!
//! `Loop` nodes keep their bodies unexpanded; the evaluator's flattener
//! turns the tree into a stream of leaf commands.

mod display;

use std::sync::Arc;

use crate::Vec2;

/// Object name as written in the script.
///
/// Shared so that every repetition of a loop body hands out the same
/// allocation.
pub type Name = Arc<str>;

/// Symbolic movement direction.
///
/// The core attaches no displacement to a direction; hosts decide what a
/// shift means. [`Direction::offset`] is provided for hosts that want a
/// grid step.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Resolve a direction keyword.
    pub fn from_keyword(text: &str) -> Option<Direction> {
        match text {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Displacement of `step` units in screen coordinates (y grows downward).
    pub fn offset(self, step: f32) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -step),
            Direction::Down => Vec2::new(0.0, step),
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
        }
    }
}

/// A drawable primitive, relative to its object's position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Line { start: Vec2, end: Vec2 },
    Circle { center: Vec2, radius: f32 },
}

impl Shape {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "line",
            Shape::Circle { .. } => "circle",
        }
    }
}

/// A named set of shapes with a position.
///
/// The shape list is fixed once the object is built; only the position
/// changes as the script runs.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationObject {
    shapes: Arc<[Shape]>,
    pub position: Vec2,
}

impl AnimationObject {
    /// Create an object at the origin.
    pub fn new(shapes: impl Into<Arc<[Shape]>>) -> Self {
        AnimationObject {
            shapes: shapes.into(),
            position: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Default for AnimationObject {
    fn default() -> Self {
        AnimationObject::new(Vec::new())
    }
}

/// A script command.
///
/// Trees may nest loops to any depth. Dropping and comparing them does not
/// recurse on the native stack.
#[derive(Clone, Debug)]
pub enum Command {
    /// `(define name ((shape) ...))`
    Define { name: Name, object: AnimationObject },
    /// `(place name (x y))`
    Place { name: Name, position: Vec2 },
    /// `(shift name direction)`
    Shift { name: Name, direction: Direction },
    /// `(erase name)`
    Erase { name: Name },
    /// `(loop count (statement ...))`
    ///
    /// A `count` of zero or less runs the body zero times.
    Loop { count: i64, body: Arc<[Command]> },
}

impl Command {
    /// The object a leaf command acts on.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Command::Define { name, .. }
            | Command::Place { name, .. }
            | Command::Shift { name, .. }
            | Command::Erase { name } => Some(name),
            Command::Loop { .. } => None,
        }
    }

    pub const fn keyword(&self) -> &'static str {
        match self {
            Command::Define { .. } => "define",
            Command::Place { .. } => "place",
            Command::Shift { .. } => "shift",
            Command::Erase { .. } => "erase",
            Command::Loop { .. } => "loop",
        }
    }

    /// Number of leaf commands this command expands to.
    ///
    /// Saturates instead of overflowing for absurd loop nests.
    pub fn expanded_len(&self) -> u64 {
        let mut total = 0u64;
        let mut pending: Vec<(&[Command], u64)> = vec![(std::slice::from_ref(self), 1)];
        while let Some((commands, passes)) = pending.pop() {
            for command in commands {
                match command {
                    Command::Loop { count, body } => {
                        let Ok(count) = u64::try_from(*count) else {
                            continue;
                        };
                        if count > 0 && !body.is_empty() {
                            pending.push((&body[..], passes.saturating_mul(count)));
                        }
                    }
                    _ => total = total.saturating_add(passes),
                }
            }
        }
        total
    }
}

fn empty_body() -> Arc<[Command]> {
    Arc::from(Vec::new())
}

// Unlinks nested bodies onto a heap worklist so that dropping a deep loop
// nest never recurses.
impl Drop for Command {
    fn drop(&mut self) {
        let Command::Loop { body, .. } = self else {
            return;
        };
        // Empty, or shared with another owner who frees it later.
        if body.is_empty() || Arc::get_mut(body).is_none() {
            return;
        }
        let mut pending = vec![std::mem::replace(body, empty_body())];
        while let Some(mut body) = pending.pop() {
            let Some(commands) = Arc::get_mut(&mut body) else {
                continue;
            };
            for command in commands.iter_mut() {
                if let Command::Loop { body: inner, .. } = command {
                    if !inner.is_empty() && Arc::get_mut(inner).is_some() {
                        pending.push(std::mem::replace(inner, empty_body()));
                    }
                }
            }
        }
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        anim_stack::ensure_sufficient_stack(|| match (self, other) {
            (
                Command::Define { name, object },
                Command::Define {
                    name: other_name,
                    object: other_object,
                },
            ) => name == other_name && object == other_object,
            (
                Command::Place { name, position },
                Command::Place {
                    name: other_name,
                    position: other_position,
                },
            ) => name == other_name && position == other_position,
            (
                Command::Shift { name, direction },
                Command::Shift {
                    name: other_name,
                    direction: other_direction,
                },
            ) => name == other_name && direction == other_direction,
            (Command::Erase { name }, Command::Erase { name: other_name }) => name == other_name,
            (
                Command::Loop { count, body },
                Command::Loop {
                    count: other_count,
                    body: other_body,
                },
            ) => count == other_count && body == other_body,
            _ => false,
        })
    }
}
