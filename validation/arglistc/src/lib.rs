//! Arglistc - checks call descriptions from the command line.
//!
//! A call description is a JSON file naming a function's parameters and one
//! or more argument lists. `input` decodes it into a `Signature` plus
//! `Value` lists, and `commands` runs the validator over every call and
//! reports the results as diagnostics.

use std::sync::Once;

pub mod commands;
pub mod input;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber writing to stderr.
///
/// Only takes effect when `RUST_LOG` is set; safe to call more than once.
/// Enable with `RUST_LOG=arglist_check=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
