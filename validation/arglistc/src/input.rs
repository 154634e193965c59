//! Call description decoding.
//!
//! A call description is JSON of the form
//!
//! ```json
//! {
//!   "function": "copy",
//!   "params": [
//!     { "name": "from", "type": "string" },
//!     { "name": "mode", "type": "?int", "default": null },
//!     { "name": "flags", "type": "bool", "variadic": true }
//!   ],
//!   "calls": [["a.txt"], ["a.txt", 7, true, false]]
//! }
//! ```
//!
//! `args` may replace `calls` for a single call. Plain JSON values map onto
//! `Value` directly; two object shapes are reserved:
//! - `{"$object": "Class", "$implements": ["Iface", ...]}` is an object value
//! - `{"$callable": "name"}` is a callable value

use std::collections::BTreeMap;

use arglist_ir::{
    ObjectValue, ParameterSpec, ParseTypeTagError, Signature, SignatureError, TypeTag, Value,
};
use serde::{Deserialize, Deserializer};

const OBJECT_KEY: &str = "$object";
const IMPLEMENTS_KEY: &str = "$implements";
const CALLABLE_KEY: &str = "$callable";

/// Errors decoding a call description.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid call description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parameter `{param}` has an invalid type: {source}")]
    Type {
        param: String,
        source: ParseTypeTagError,
    },
    #[error(transparent)]
    Signature(#[from] SignatureError),
    #[error("invalid `{key}` value: {reason}")]
    Special { key: &'static str, reason: String },
    #[error("a call description may contain `args` or `calls`, not both")]
    AmbiguousCalls,
}

/// Raw JSON shape of a call description.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CallFile {
    #[serde(default)]
    function: Option<String>,
    #[serde(default)]
    params: Vec<ParamDecl>,
    #[serde(default)]
    calls: Option<Vec<Vec<serde_json::Value>>>,
    #[serde(default)]
    args: Option<Vec<serde_json::Value>>,
}

/// Raw JSON shape of one parameter.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParamDecl {
    name: String,
    #[serde(default, rename = "type")]
    type_name: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    variadic: bool,
    /// `Some(Null)` for an explicit `"default": null`; `None` when absent.
    #[serde(default, deserialize_with = "present")]
    default: Option<serde_json::Value>,
    /// Defaults to the declaration index.
    #[serde(default)]
    position: Option<usize>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// A decoded call description.
#[derive(Clone, Debug, PartialEq)]
pub struct CallDescription {
    pub signature: Signature,
    pub calls: Vec<Vec<Value>>,
}

/// Decode a call description from JSON source.
pub fn parse_call_description(source: &str) -> Result<CallDescription, InputError> {
    let file: CallFile = serde_json::from_str(source)?;

    let params = file
        .params
        .iter()
        .enumerate()
        .map(|(index, decl)| decode_param(index, decl))
        .collect::<Result<Vec<_>, _>>()?;
    let signature = match file.function {
        Some(name) => Signature::named(name, params)?,
        None => Signature::new(params)?,
    };

    let raw_calls = match (file.calls, file.args) {
        (Some(_), Some(_)) => return Err(InputError::AmbiguousCalls),
        (Some(calls), None) => calls,
        (None, Some(args)) => vec![args],
        (None, None) => Vec::new(),
    };
    let calls = raw_calls
        .iter()
        .map(|args| args.iter().map(decode_value).collect::<Result<Vec<_>, _>>())
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        params = signature.len(),
        calls = calls.len(),
        "decoded call description"
    );
    Ok(CallDescription { signature, calls })
}

fn decode_param(index: usize, decl: &ParamDecl) -> Result<ParameterSpec, InputError> {
    let position = decl.position.unwrap_or(index);
    let mut param = if decl.variadic {
        ParameterSpec::variadic(decl.name.as_str(), position)
    } else if decl.optional {
        ParameterSpec::optional(decl.name.as_str(), position)
    } else {
        ParameterSpec::required(decl.name.as_str(), position)
    };

    if let Some(text) = decl.type_name.as_deref() {
        let (tag, nullable) = TypeTag::parse_nullable(text).map_err(|source| InputError::Type {
            param: decl.name.clone(),
            source,
        })?;
        param = param.with_type(tag);
        if nullable {
            param = param.nullable();
        }
    }
    if let Some(default) = &decl.default {
        param = param.with_default(decode_value(default)?);
    }
    Ok(param)
}

/// Map a JSON value onto an argument value.
pub fn decode_value(json: &serde_json::Value) -> Result<Value, InputError> {
    use serde_json::Value as Json;

    Ok(match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().ok_or_else(|| InputError::Special {
                key: "number",
                reason: format!("{n} is not representable"),
            })?),
        },
        Json::String(s) => Value::Str(s.clone()),
        Json::Array(items) => Value::List(
            items
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Json::Object(map) => {
            if map.contains_key(OBJECT_KEY) && map.contains_key(CALLABLE_KEY) {
                return Err(InputError::Special {
                    key: OBJECT_KEY,
                    reason: "cannot be combined with `$callable`".to_string(),
                });
            }
            if map.contains_key(IMPLEMENTS_KEY) && !map.contains_key(OBJECT_KEY) {
                return Err(InputError::Special {
                    key: IMPLEMENTS_KEY,
                    reason: "requires `$object`".to_string(),
                });
            }
            if let Some(class) = map.get(OBJECT_KEY) {
                Value::Object(decode_object(class, map.get(IMPLEMENTS_KEY))?)
            } else if let Some(name) = map.get(CALLABLE_KEY) {
                let name = name.as_str().ok_or_else(|| InputError::Special {
                    key: CALLABLE_KEY,
                    reason: "expected a function name string".to_string(),
                })?;
                Value::callable(name)
            } else {
                let entries = map
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), decode_value(value)?)))
                    .collect::<Result<BTreeMap<_, _>, InputError>>()?;
                Value::Map(entries)
            }
        }
    })
}

fn decode_object(
    class: &serde_json::Value,
    implements: Option<&serde_json::Value>,
) -> Result<ObjectValue, InputError> {
    let class = class.as_str().ok_or_else(|| InputError::Special {
        key: OBJECT_KEY,
        reason: "expected a class name string".to_string(),
    })?;
    let mut object = ObjectValue::new(class);

    let Some(implements) = implements else {
        return Ok(object);
    };
    let not_a_list = || InputError::Special {
        key: IMPLEMENTS_KEY,
        reason: "expected a list of class or interface names".to_string(),
    };
    for name in implements.as_array().ok_or_else(not_a_list)? {
        object = object.with_supertype(name.as_str().ok_or_else(not_a_list)?);
    }
    Ok(object)
}
