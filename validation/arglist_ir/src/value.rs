//! Call-site argument values.
//!
//! `Value` is deliberately loose: it models whatever a dynamic call site can
//! pass, and the validator decides whether it fits a declared `TypeTag`.

use std::collections::BTreeMap;

/// A runtime object: its class plus every parent class and interface it
/// declares, so `instance_of` does not need a class registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectValue {
    pub class: String,
    pub supertypes: Vec<String>,
}

impl ObjectValue {
    pub fn new(class: impl Into<String>) -> Self {
        ObjectValue {
            class: class.into(),
            supertypes: Vec::new(),
        }
    }

    /// Add a parent class or implemented interface.
    #[must_use]
    pub fn with_supertype(mut self, name: impl Into<String>) -> Self {
        self.supertypes.push(name.into());
        self
    }

    /// Whether this object is of class `name` or one of its subtypes.
    ///
    /// Class names are compared ASCII case-insensitively. A leading
    /// namespace separator is ignored on both sides, so `\Foo\Bar` and
    /// `foo\bar` name the same class.
    pub fn instance_of(&self, name: &str) -> bool {
        let name = strip_root(name);
        std::iter::once(&self.class)
            .chain(&self.supertypes)
            .any(|candidate| strip_root(candidate).eq_ignore_ascii_case(name))
    }
}

fn strip_root(name: &str) -> &str {
    name.strip_prefix('\\').unwrap_or(name)
}

/// An argument value supplied at a call site.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(ObjectValue),
    /// A reference to something invocable, identified by name.
    Callable(String),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Create an object value with no declared supertypes.
    pub fn object(class: impl Into<String>) -> Self {
        Value::Object(ObjectValue::new(class))
    }

    /// Create a callable value.
    pub fn callable(name: impl Into<String>) -> Self {
        Value::Callable(name.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The name of this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) | Value::Map(_) => "array",
            Value::Object(_) => "object",
            Value::Callable(_) => "callable",
        }
    }

    /// The concrete type description used in mismatch messages.
    ///
    /// Objects report their class name; everything else delegates to
    /// `type_name()`.
    pub fn describe_type(&self) -> &str {
        match self {
            Value::Object(obj) => &obj.class,
            _ => self.type_name(),
        }
    }
}
