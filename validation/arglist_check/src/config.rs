//! Validation settings.

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the arity policy (`strict` or `lenient`).
pub const ARITY_ENV: &str = "ARGLIST_ARITY";
/// Environment variable disabling int-to-float widening when truthy.
pub const STRICT_TYPES_ENV: &str = "ARGLIST_STRICT_TYPES";

/// How surplus arguments are treated when there is no variadic parameter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArityPolicy {
    /// Each surplus argument is an error.
    #[default]
    Strict,
    /// Surplus arguments are ignored, the way dynamic runtimes accept them.
    Lenient,
}

impl ArityPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ArityPolicy::Strict => "strict",
            ArityPolicy::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ArityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArityPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ArityPolicy::Strict),
            "lenient" => Ok(ArityPolicy::Lenient),
            other => Err(ConfigError::InvalidArityPolicy(other.to_string())),
        }
    }
}

/// Errors reading configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid arity policy `{0}` (expected `strict` or `lenient`)")]
    InvalidArityPolicy(String),
    #[error("invalid boolean `{value}` for {var}")]
    InvalidBool { var: &'static str, value: String },
}

/// Settings for `ArgsListValidator` and `TypeChecker`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Treatment of surplus arguments.
    pub arity: ArityPolicy,
    /// Accept `int` values for `float` parameters.
    pub widen_int_to_float: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            arity: ArityPolicy::Strict,
            widen_int_to_float: true,
        }
    }
}

impl CheckConfig {
    #[must_use]
    pub fn with_arity(mut self, arity: ArityPolicy) -> Self {
        self.arity = arity;
        self
    }

    /// Disable int-to-float widening.
    #[must_use]
    pub fn strict_types(mut self) -> Self {
        self.widen_int_to_float = false;
        self
    }

    /// Defaults overridden by `ARGLIST_ARITY` and `ARGLIST_STRICT_TYPES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CheckConfig::default();
        if let Some(value) = lookup(ARITY_ENV) {
            config.arity = value.parse()?;
        }
        if let Some(value) = lookup(STRICT_TYPES_ENV) {
            if parse_bool(STRICT_TYPES_ENV, &value)? {
                config.widen_int_to_float = false;
            }
        }
        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
