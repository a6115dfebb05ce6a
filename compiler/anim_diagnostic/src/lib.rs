//! Diagnostic system for the animation script engine.
//!
//! - Error codes for searchability (`anim explain E0001`)
//! - Clear messages (what went wrong)
//! - Primary location (where it went wrong)
//! - Notes (what the engine was expecting)
//!
//! Every stage maps its error type onto a [`Diagnostic`]; hosts render
//! diagnostics with an emitter from [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
