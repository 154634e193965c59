//! Embedded error documentation for `explain` support.
//!
//! Each error code has a markdown file in this directory that explains the
//! error and how to fix it. They are embedded at compile time and can be
//! accessed via `ErrorDocs::get()`.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `AXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Argument errors (A0xxx)
    (ErrorCode::A0001, include_str!("A0001.md")),
    (ErrorCode::A0002, include_str!("A0002.md")),
    (ErrorCode::A0003, include_str!("A0003.md")),
    // Signature errors (A1xxx)
    (ErrorCode::A1001, include_str!("A1001.md")),
    (ErrorCode::A1002, include_str!("A1002.md")),
    (ErrorCode::A1003, include_str!("A1003.md")),
    // Input errors (A9xxx)
    (ErrorCode::A9001, include_str!("A9001.md")),
];

#[cfg(test)]
mod tests;
