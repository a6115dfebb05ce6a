//! Grammar productions.
//!
//! Every `visit_*` method starts by pulling its first token; none of them
//! look at the token that was current on entry.

mod command;
mod primitives;
mod shape;
