//! Diagnostic system for argument list validation.
//!
//! Every reported problem carries:
//! - An error code for searchability (`ErrorCode`)
//! - A clear message (what went wrong)
//! - The argument position it concerns, when there is one
//! - Notes (context) and suggestions (how to fix)
//!
//! Emitters render diagnostics for terminals or for tooling, and `ErrorDocs`
//! holds the long-form explanation behind each code.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
