//! Reserved word resolution.
//!
//! The lookup uses the word's length as a first-pass filter (reserved words
//! are 2-6 chars), then compares against the words of that length. No
//! allocation; the borrowed slice is matched directly.

/// Every reserved word, in no particular order.
pub const RESERVED: [&str; 11] = [
    "define", "place", "shift", "erase", "loop", "line", "circle", "left", "right", "up",
    "down",
];

/// Whether `text` is a reserved word.
#[inline]
pub fn is_reserved(text: &str) -> bool {
    match text.len() {
        2 => text == "up",
        4 => matches!(text, "loop" | "line" | "left" | "down"),
        5 => matches!(text, "place" | "shift" | "erase" | "right"),
        6 => matches!(text, "define" | "circle"),
        _ => false,
    }
}
