//! Per-value type checking.
//!
//! The validator is composed with a `ValueTypeCheck` implementation rather
//! than hard-wiring the rules, so callers can substitute their own notion of
//! type compatibility.

use arglist_ir::{ParameterSpec, TypeTag, Value};

use crate::config::CheckConfig;
use crate::errors::{type_mismatch, ArgError};

/// Objects implementing this interface satisfy `iterable`.
pub const TRAVERSABLE: &str = "Traversable";

/// Checks a single argument value against its parameter.
pub trait ValueTypeCheck {
    /// Return the mismatch for `value` bound to `param`, or `None` when it fits.
    ///
    /// `position` is the argument's own position; for a variadic parameter
    /// it differs from `param.position()`.
    fn value_type_error(
        &self,
        value: &Value,
        param: &ParameterSpec,
        position: usize,
    ) -> Option<ArgError>;
}

/// The standard type rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeChecker {
    widen_int_to_float: bool,
}

impl TypeChecker {
    pub fn new(config: &CheckConfig) -> Self {
        TypeChecker {
            widen_int_to_float: config.widen_int_to_float,
        }
    }

    /// Whether a non-null `value` is an instance of `tag`.
    pub fn satisfies(&self, value: &Value, tag: &TypeTag) -> bool {
        match tag {
            TypeTag::Bool => matches!(value, Value::Bool(_)),
            TypeTag::Int => matches!(value, Value::Int(_)),
            TypeTag::Float => {
                matches!(value, Value::Float(_))
                    || (self.widen_int_to_float && matches!(value, Value::Int(_)))
            }
            TypeTag::Str => matches!(value, Value::Str(_)),
            TypeTag::Array => matches!(value, Value::List(_) | Value::Map(_)),
            TypeTag::Iterable => match value {
                Value::List(_) | Value::Map(_) => true,
                Value::Object(obj) => obj.instance_of(TRAVERSABLE),
                _ => false,
            },
            TypeTag::Callable => matches!(value, Value::Callable(_)),
            TypeTag::Object => matches!(value, Value::Object(_)),
            TypeTag::Class(name) => match value {
                Value::Object(obj) => obj.instance_of(name),
                _ => false,
            },
        }
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        TypeChecker::new(&CheckConfig::default())
    }
}

impl ValueTypeCheck for TypeChecker {
    fn value_type_error(
        &self,
        value: &Value,
        param: &ParameterSpec,
        position: usize,
    ) -> Option<ArgError> {
        let tag = param.expected_type()?;
        let fits = if value.is_null() {
            param.allows_null()
        } else {
            self.satisfies(value, tag)
        };
        if fits {
            return None;
        }

        let expected = if param.allows_null() {
            format!("?{tag}")
        } else {
            tag.to_string()
        };
        Some(type_mismatch(
            param.name(),
            position,
            expected,
            value.describe_type(),
        ))
    }
}
