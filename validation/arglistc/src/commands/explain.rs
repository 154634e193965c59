//! The `explain` command: display documentation for error codes.

use arglist_diagnostic::{ErrorCode, ErrorDocs, UnknownErrorCode};

/// Why no documentation could be shown.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExplainError {
    #[error(transparent)]
    Unknown(#[from] UnknownErrorCode),
    #[error("no documentation available for {0}")]
    Undocumented(ErrorCode),
}

/// Look up the documentation for a code string such as `A0002`.
pub fn error_docs(code_str: &str) -> Result<&'static str, ExplainError> {
    let code: ErrorCode = code_str.parse()?;
    ErrorDocs::get(code).ok_or(ExplainError::Undocumented(code))
}

/// Print the documentation for a code, exiting non-zero if there is none.
pub fn explain_error(code_str: &str) {
    match error_docs(code_str) {
        Ok(doc) => println!("{doc}"),
        Err(err @ ExplainError::Unknown(_)) => {
            eprintln!("{err}");
            eprintln!();
            eprintln!("Codes have the format AXXXX where X is a digit.");
            eprintln!("Known codes: {}", known_codes());
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn known_codes() -> String {
    ErrorDocs::all_codes()
        .map(|code| code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests;
