//! Evaluation errors.

use std::convert::Infallible;

use anim_diagnostic::{Diagnostic, ErrorCode};
use anim_ir::Name;
use anim_lexer::LexError;
use anim_parse::ParseError;
use thiserror::Error;

/// A world operation that cannot be carried out.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum EvalError {
    /// `define` for a name that is already present.
    #[error("Object '{name}' is already declared")]
    DuplicateName { name: Name },

    /// `place`, `shift` or `erase` for a name that is absent.
    #[error("Object '{name}' is not declared")]
    UndeclaredName { name: Name, command: &'static str },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::DuplicateName { .. } => ErrorCode::E6001,
            EvalError::UndeclaredName { .. } => ErrorCode::E6002,
        }
    }

    pub fn name(&self) -> &Name {
        match self {
            EvalError::DuplicateName { name } | EvalError::UndeclaredName { name, .. } => name,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            EvalError::DuplicateName { .. } => {
                diag.with_note("erase the existing object before defining it again")
            }
            EvalError::UndeclaredName { command, .. } => {
                diag.with_note(format!("`{command}` needs an object defined earlier in the run"))
            }
        }
    }
}

/// Any error a script run can stop on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ScriptError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScriptError::Parse(err) => err.code(),
            ScriptError::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ScriptError::Parse(err) => err.to_diagnostic(),
            ScriptError::Eval(err) => err.to_diagnostic(),
        }
    }
}

impl From<LexError> for ScriptError {
    fn from(err: LexError) -> Self {
        ScriptError::Parse(ParseError::Lex(err))
    }
}

impl From<Infallible> for ScriptError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
