//! Validation error types.
//!
//! `ArgErrorKind` carries the structured data for one mismatch. Factory
//! functions (`missing_argument()`, `type_mismatch()`, `extra_argument()`)
//! build an `ArgError` with both the kind and its rendered message.

use std::fmt;

use arglist_diagnostic::{Diagnostic, ErrorCode};
use arglist_ir::SignatureError;

/// Typed category of a single argument list problem.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgErrorKind {
    /// A required parameter received no argument.
    MissingArgument { name: String, position: usize },
    /// The argument at `position` does not satisfy the parameter's type.
    TypeMismatch {
        name: String,
        position: usize,
        expected: String,
        got: String,
    },
    /// An argument at `position` has no parameter to bind to.
    ExtraArgument { position: usize, max: usize },
}

impl fmt::Display for ArgErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { name, position } => {
                write!(f, "missing required argument `{name}` at position {position}")
            }
            Self::TypeMismatch {
                name,
                position,
                expected,
                got,
            } => write!(
                f,
                "argument `{name}` at position {position} must be of type {expected}, {got} given"
            ),
            Self::ExtraArgument { position, max } => {
                let arg_word = if *max == 1 { "argument" } else { "arguments" };
                write!(
                    f,
                    "unexpected extra argument at position {position}; expected at most {max} {arg_word}"
                )
            }
        }
    }
}

/// One validation error: a structured kind plus its human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgError {
    pub kind: ArgErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
}

impl ArgError {
    fn from_kind(kind: ArgErrorKind) -> Self {
        let message = kind.to_string();
        ArgError { kind, message }
    }

    /// The parameter this error concerns, if any.
    ///
    /// Extra arguments have no parameter.
    pub fn parameter_name(&self) -> Option<&str> {
        match &self.kind {
            ArgErrorKind::MissingArgument { name, .. } | ArgErrorKind::TypeMismatch { name, .. } => {
                Some(name.as_str())
            }
            ArgErrorKind::ExtraArgument { .. } => None,
        }
    }

    /// Zero-based argument position.
    pub fn position(&self) -> usize {
        match self.kind {
            ArgErrorKind::MissingArgument { position, .. }
            | ArgErrorKind::TypeMismatch { position, .. }
            | ArgErrorKind::ExtraArgument { position, .. } => position,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ArgErrorKind::MissingArgument { .. } => ErrorCode::A0001,
            ArgErrorKind::TypeMismatch { .. } => ErrorCode::A0002,
            ArgErrorKind::ExtraArgument { .. } => ErrorCode::A0003,
        }
    }

    /// Convert into a diagnostic with a fix-it suggestion.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.message.clone())
            .at_position(self.position());
        match &self.kind {
            ArgErrorKind::MissingArgument { name, .. } => {
                diag.with_suggestion(format!("pass a value for `{name}`"))
            }
            ArgErrorKind::TypeMismatch { name, expected, .. } => {
                diag.with_suggestion(format!("pass a value of type {expected} for `{name}`"))
            }
            ArgErrorKind::ExtraArgument { .. } => diag.with_suggestion("remove the surplus argument"),
        }
    }
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ArgError {}

// Factory functions

/// A required parameter received no argument.
pub fn missing_argument(name: impl Into<String>, position: usize) -> ArgError {
    ArgError::from_kind(ArgErrorKind::MissingArgument {
        name: name.into(),
        position,
    })
}

/// The argument at `position` does not satisfy the declared type.
pub fn type_mismatch(
    name: impl Into<String>,
    position: usize,
    expected: impl Into<String>,
    got: impl Into<String>,
) -> ArgError {
    ArgError::from_kind(ArgErrorKind::TypeMismatch {
        name: name.into(),
        position,
        expected: expected.into(),
        got: got.into(),
    })
}

/// An argument beyond the last parameter of a non-variadic signature.
pub fn extra_argument(position: usize, max: usize) -> ArgError {
    ArgError::from_kind(ArgErrorKind::ExtraArgument { position, max })
}

/// Every error found in one argument list, for `?`-style callers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid argument{}: {}", .0.len(), plural_s(.0.len()), join_messages(.0))]
pub struct ArgsListErrors(pub Vec<ArgError>);

impl ArgsListErrors {
    pub fn errors(&self) -> &[ArgError] {
        &self.0
    }
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn join_messages(errors: &[ArgError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convert a malformed-signature error into a diagnostic.
pub fn signature_diagnostic(err: &SignatureError) -> Diagnostic {
    let code = match err {
        SignatureError::PositionMismatch { .. } => ErrorCode::A1001,
        SignatureError::VariadicNotLast { .. } => ErrorCode::A1002,
        SignatureError::DuplicateName { .. } => ErrorCode::A1003,
    };
    Diagnostic::error(code).with_message(err.to_string())
}
