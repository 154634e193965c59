//! Validated parameter lists.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::ParameterSpec;

/// Structural problems in a parameter list.
///
/// These are programmer errors in whatever produced the specs, so they are
/// reported once at construction instead of on every validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("parameter `{name}` is declared at position {found}, expected position {expected}")]
    PositionMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("variadic parameter `{name}` at position {position} must be the last parameter")]
    VariadicNotLast { name: String, position: usize },
    #[error("parameter `{name}` is declared more than once")]
    DuplicateName { name: String },
}

/// A position-ordered parameter list.
///
/// Guarantees:
/// - positions are exactly `0..len()`
/// - at most one variadic parameter, and only in last position
/// - parameter names are unique
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Signature {
    name: Option<String>,
    params: Vec<ParameterSpec>,
}

impl Signature {
    /// Build a signature from specs in any order.
    pub fn new(mut params: Vec<ParameterSpec>) -> Result<Self, SignatureError> {
        params.sort_by_key(ParameterSpec::position);

        for (index, param) in params.iter().enumerate() {
            if param.position() != index {
                return Err(SignatureError::PositionMismatch {
                    name: param.name().to_string(),
                    expected: index,
                    found: param.position(),
                });
            }
        }

        let last = params.len().saturating_sub(1);
        if let Some(param) = params
            .iter()
            .find(|p| p.is_variadic() && p.position() != last)
        {
            return Err(SignatureError::VariadicNotLast {
                name: param.name().to_string(),
                position: param.position(),
            });
        }

        let mut seen = FxHashSet::default();
        for param in &params {
            if !seen.insert(param.name()) {
                return Err(SignatureError::DuplicateName {
                    name: param.name().to_string(),
                });
            }
        }

        tracing::trace!(params = params.len(), "signature built");
        Ok(Signature { name: None, params })
    }

    /// Build a signature for a named callable.
    pub fn named(name: impl Into<String>, params: Vec<ParameterSpec>) -> Result<Self, SignatureError> {
        let mut signature = Self::new(params)?;
        signature.name = Some(name.into());
        Ok(signature)
    }

    /// The callable's name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The trailing variadic parameter, if any.
    pub fn variadic(&self) -> Option<&ParameterSpec> {
        self.params.last().filter(|p| p.is_variadic())
    }

    /// Most arguments accepted, or `None` when a variadic absorbs the rest.
    pub fn max_args(&self) -> Option<usize> {
        if self.variadic().is_some() {
            None
        } else {
            Some(self.params.len())
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name.as_deref().unwrap_or("fn"))?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if param.is_variadic() {
                write!(f, "...")?;
            }
            write!(f, "{}", param.name())?;
            if param.is_optional() && !param.is_variadic() {
                write!(f, "?")?;
            }
            if let Some(tag) = param.expected_type() {
                let nullable = if param.allows_null() { "?" } else { "" };
                write!(f, ": {nullable}{tag}")?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests;
