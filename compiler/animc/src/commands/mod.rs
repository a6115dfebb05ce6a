//! `anim` subcommands.

mod debug;
mod explain;
mod run;

pub use debug::{lex, parse};
pub use explain::{explain, ExplainError};
pub use run::{check, run, CheckReport, RunSummary, DEFAULT_CHECK_LIMIT};
