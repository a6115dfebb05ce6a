//! Evaluator for animation scripts.
//!
//! - [`World`]: object registry with pluggable [`WorldHooks`]
//! - [`Flatten`]: iterative, lazy loop expansion
//! - Drivers: [`run`] / [`execute_all`] drain a script, their `_with_limit`
//!   forms stop early, and [`Stepper`] runs it one command at a time
//!
//! ```ignore
//! let mut world = World::new();
//! let applied = anim_eval::run("(define d ()) (loop 3 ((shift d up)))", &mut world)?;
//! assert_eq!(applied, 4);
//! ```

mod driver;
mod errors;
mod flatten;
mod hooks;
mod objects;
mod world;

pub use driver::{execute_all, execute_with_limit, run, run_with_limit, Step, Stepper};
pub use errors::{EvalError, ScriptError};
pub use flatten::{flatten, Flatten};
pub use hooks::{DefaultHooks, WorldHooks};
pub use objects::Objects;
pub use world::World;
