//! The `check` command: validate every call in a call description.

use std::io::Write;

use arglist_check::{
    extra_argument, signature_diagnostic, ArgError, ArgsListValidator, ArityPolicy, CheckConfig,
};
use arglist_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use arglist_diagnostic::{Diagnostic, ErrorCode};
use arglist_ir::Signature;

use crate::input::{parse_call_description, InputError};

use super::read_file;

/// Diagnostic output format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable diagnostics on stderr.
    #[default]
    Text,
    /// A JSON array of diagnostics on stdout.
    Json,
}

/// Options for one `check` invocation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub config: CheckConfig,
    pub format: OutputFormat,
    pub color: ColorMode,
}

/// Errors in `check` command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
}

/// Parse the arguments following `check`.
///
/// `config` is the starting configuration (usually from the environment);
/// flags override it.
pub fn parse_check_args(
    args: &[String],
    config: CheckConfig,
) -> Result<(String, CheckOptions), UsageError> {
    let mut options = CheckOptions {
        config,
        ..CheckOptions::default()
    };
    let mut path = None;

    for arg in args {
        if arg == "--strict" {
            options.config.arity = ArityPolicy::Strict;
        } else if arg == "--lenient" {
            options.config.arity = ArityPolicy::Lenient;
        } else if arg == "--strict-types" {
            options.config = options.config.strict_types();
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format = match format {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(UsageError::InvalidValue {
                        flag: "--format",
                        value: format.to_string(),
                    })
                }
            };
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(color).ok_or_else(|| UsageError::InvalidValue {
                flag: "--color",
                value: color.to_string(),
            })?;
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(UsageError::MissingPath)?;
    Ok((path, options))
}

/// Outcome of checking one call description.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Calls validated; zero when the description itself was rejected.
    pub calls: usize,
    /// Errors reported, including input errors.
    pub errors: usize,
    /// Surplus arguments accepted under `ArityPolicy::Lenient`.
    pub warnings: usize,
}

impl CheckSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Check a call description, writing diagnostics to `writer`.
///
/// `is_tty` only matters for text output with `ColorMode::Auto`.
pub fn check_source<W: Write>(
    source: &str,
    options: &CheckOptions,
    writer: W,
    is_tty: bool,
) -> CheckSummary {
    match options.format {
        OutputFormat::Text => {
            let mut emitter = TerminalEmitter::with_color_mode(writer, options.color, is_tty);
            run_check(source, options.config, &mut emitter)
        }
        OutputFormat::Json => run_check(source, options.config, &mut JsonEmitter::new(writer)),
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(arity = %config.arity))]
fn run_check(
    source: &str,
    config: CheckConfig,
    emitter: &mut dyn DiagnosticEmitter,
) -> CheckSummary {
    let desc = match parse_call_description(source) {
        Ok(desc) => desc,
        Err(err) => {
            tracing::debug!(%err, "rejected call description");
            emitter.emit(&input_diagnostic(&err));
            emitter.flush();
            return CheckSummary {
                calls: 0,
                errors: 1,
                warnings: 0,
            };
        }
    };

    let validator = ArgsListValidator::new(config);
    let signature_note = format!("signature: {}", desc.signature);
    let mut summary = CheckSummary {
        calls: desc.calls.len(),
        ..CheckSummary::default()
    };
    for (index, args) in desc.calls.iter().enumerate() {
        let mut diagnostics: Vec<Diagnostic> = validator
            .validate(args, &desc.signature)
            .iter()
            .map(ArgError::to_diagnostic)
            .collect();
        if config.arity == ArityPolicy::Lenient {
            diagnostics.extend(surplus_warnings(args.len(), &desc.signature));
        }

        for diag in diagnostics {
            let diag = diag
                .with_note(format!("in call #{}", index + 1))
                .with_note(signature_note.clone());
            if diag.is_error() {
                summary.errors += 1;
            } else {
                summary.warnings += 1;
            }
            emitter.emit(&diag);
        }
    }

    emitter.emit_summary(summary.errors, summary.warnings);
    emitter.flush();
    summary
}

/// Surplus arguments the lenient policy accepts, as warnings.
fn surplus_warnings(supplied: usize, signature: &Signature) -> impl Iterator<Item = Diagnostic> {
    let max = signature.max_args().unwrap_or(supplied);
    (max..supplied).map(move |position| {
        Diagnostic::warning(ErrorCode::A0003)
            .with_message(extra_argument(position, max).message)
            .at_position(position)
            .with_note("ignored under the lenient arity policy")
    })
}

fn input_diagnostic(err: &InputError) -> Diagnostic {
    match err {
        InputError::Signature(sig_err) => signature_diagnostic(sig_err),
        _ => Diagnostic::error(ErrorCode::A9001).with_message(err.to_string()),
    }
}

/// Check a call description file and exit non-zero if any call is invalid.
pub fn check_file(path: &str, options: &CheckOptions) {
    let source = read_file(path);

    let summary = match options.format {
        OutputFormat::Text => {
            let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            check_source(&source, options, std::io::stderr(), is_tty)
        }
        OutputFormat::Json => check_source(&source, options, std::io::stdout(), false),
    };

    if summary.has_errors() {
        std::process::exit(1);
    }

    if options.format == OutputFormat::Text {
        let plural = if summary.calls == 1 { "" } else { "s" };
        println!("OK: {path} ({} call{plural} checked)", summary.calls);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
