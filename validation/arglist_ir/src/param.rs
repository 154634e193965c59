//! Formal parameter specifications.

use crate::{TypeTag, Value};

/// Description of one formal parameter of a callable.
///
/// Built by the introspection layer; immutable once constructed. Use the
/// constructors for the parameter kind and the `with_*` builders for the
/// rest:
///
/// ```text
/// ParameterSpec::required("path", 0).with_type(TypeTag::Str)
/// ParameterSpec::optional("mode", 1).with_default(Value::Null)
/// ParameterSpec::variadic("rest", 2).with_type(TypeTag::Int)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSpec {
    name: String,
    position: usize,
    optional: bool,
    variadic: bool,
    expected_type: Option<TypeTag>,
    allows_null: bool,
    default: Option<Value>,
}

impl ParameterSpec {
    fn new(name: impl Into<String>, position: usize, optional: bool, variadic: bool) -> Self {
        ParameterSpec {
            name: name.into(),
            position,
            optional,
            variadic,
            expected_type: None,
            allows_null: false,
            default: None,
        }
    }

    /// A parameter that must be supplied.
    pub fn required(name: impl Into<String>, position: usize) -> Self {
        Self::new(name, position, false, false)
    }

    /// A parameter that may be omitted.
    pub fn optional(name: impl Into<String>, position: usize) -> Self {
        Self::new(name, position, true, false)
    }

    /// A trailing parameter absorbing all remaining arguments.
    pub fn variadic(name: impl Into<String>, position: usize) -> Self {
        Self::new(name, position, true, true)
    }

    /// Declare the expected type. For a variadic parameter this is the type
    /// of each absorbed argument.
    #[must_use]
    pub fn with_type(mut self, tag: TypeTag) -> Self {
        self.expected_type = Some(tag);
        self
    }

    /// Accept `null` in addition to the declared type.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.allows_null = true;
        self
    }

    /// Attach a default value, making the parameter optional.
    ///
    /// A `null` default also makes the parameter nullable.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        if value.is_null() {
            self.allows_null = true;
        }
        self.optional = true;
        self.default = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position in the parameter list.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Variadic parameters are always optional.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn expected_type(&self) -> Option<&TypeTag> {
        self.expected_type.as_ref()
    }

    /// Whether `null` satisfies this parameter.
    ///
    /// Untyped parameters accept anything, `null` included.
    pub fn allows_null(&self) -> bool {
        self.expected_type.is_none() || self.allows_null
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

#[cfg(test)]
mod tests;
