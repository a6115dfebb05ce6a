//! The `explain` command: documentation for error codes.

use anim_diagnostic::ErrorCode;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ExplainError {
    #[error("Unknown error code: {0}")]
    UnknownCode(String),
    #[error("No documentation available for {0}")]
    Undocumented(ErrorCode),
}

/// Look up the long-form text for a code such as `E1001` (any case).
pub fn explain(code: &str) -> Result<&'static str, ExplainError> {
    let parsed = code
        .parse::<ErrorCode>()
        .map_err(|()| ExplainError::UnknownCode(code.to_string()))?;
    parsed.explain().ok_or(ExplainError::Undocumented(parsed))
}
