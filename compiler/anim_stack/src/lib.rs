//! Stack growth for the recursive passes over a command tree.
//!
//! Loops nest without limit, and parsing, rendering and comparing a loop
//! all recurse once per level. Those entry points run their bodies through
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated stack
//! segment when the current one runs low.
//!
//! On `wasm32` the helper calls straight through.

/// Grow when less than this much stack is left.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// pub fn visit_command(&mut self) -> Result<Command, ParseError> {
///     ensure_sufficient_stack(|| self.visit_command_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
