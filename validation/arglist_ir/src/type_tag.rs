//! Declared parameter types.

use std::fmt;
use std::str::FromStr;

/// The declared type of a parameter.
///
/// Builtin tags match on the shape of a `Value`. `Class` matches objects by
/// class name or by any of their declared supertypes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Str,
    /// Lists and maps.
    Array,
    /// Lists, maps, and `Traversable` objects.
    Iterable,
    Callable,
    /// Any object, regardless of class.
    Object,
    /// An object of the named class or one of its subtypes.
    Class(String),
}

/// Error returned when a type annotation cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseTypeTagError {
    #[error("empty type name")]
    Empty,
    #[error("invalid type name `{0}`")]
    InvalidName(String),
}

impl TypeTag {
    /// The canonical spelling of this type, as used in messages.
    pub fn name(&self) -> &str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "string",
            TypeTag::Array => "array",
            TypeTag::Iterable => "iterable",
            TypeTag::Callable => "callable",
            TypeTag::Object => "object",
            TypeTag::Class(name) => name,
        }
    }

    /// Parse an annotation that may carry a leading `?` nullable marker.
    ///
    /// Returns the tag and whether the marker was present.
    pub fn parse_nullable(text: &str) -> Result<(TypeTag, bool), ParseTypeTagError> {
        let text = text.trim();
        match text.strip_prefix('?') {
            Some(rest) => Ok((rest.parse()?, true)),
            None => Ok((text.parse()?, false)),
        }
    }

    fn builtin(name: &str) -> Option<TypeTag> {
        let tag = match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => TypeTag::Bool,
            "int" | "integer" => TypeTag::Int,
            "float" | "double" => TypeTag::Float,
            "string" | "str" => TypeTag::Str,
            "array" => TypeTag::Array,
            "iterable" => TypeTag::Iterable,
            "callable" => TypeTag::Callable,
            "object" => TypeTag::Object,
            _ => return None,
        };
        Some(tag)
    }
}

/// Class names may be namespaced with `\` or `::` separators.
fn is_valid_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '\\')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '\\' | ':'))
}

impl FromStr for TypeTag {
    type Err = ParseTypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTypeTagError::Empty);
        }
        if let Some(tag) = TypeTag::builtin(s) {
            return Ok(tag);
        }
        if is_valid_class_name(s) {
            Ok(TypeTag::Class(s.to_string()))
        } else {
            Err(ParseTypeTagError::InvalidName(s.to_string()))
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
