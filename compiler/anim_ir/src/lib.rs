//! Anim IR - shared data types for the animation script engine.
//!
//! This crate contains the data structures every other stage agrees on:
//! - Spans and line/column positions for source locations
//! - Tokens borrowing their text from the source buffer
//! - The command tree (`Command`, `Shape`, `Direction`, `AnimationObject`)
//!
//! # Design Philosophy
//!
//! - **Borrow the source**: token text is a `&'src str` slice, never a copy.
//! - **Share the tree**: names, shape lists and loop bodies are reference
//!   counted so the flattener can restart a loop body without cloning it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod geometry;
mod span;
mod token;

pub use ast::{AnimationObject, Command, Direction, Name, Shape};
pub use geometry::Vec2;
pub use span::Span;
pub use token::{Token, TokenKind, TokenPosition};
