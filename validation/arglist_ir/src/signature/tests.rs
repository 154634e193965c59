use pretty_assertions::assert_eq;

use super::*;
use crate::{TypeTag, Value};

#[test]
fn orders_params_by_position() {
    let sig = Signature::new(vec![
        ParameterSpec::required("b", 1),
        ParameterSpec::required("a", 0),
    ]);

    let names: Vec<_> = sig
        .iter()
        .flat_map(|s| s.params().iter().map(|p| p.name().to_string()))
        .collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn empty_signature_is_valid() {
    let sig = Signature::new(Vec::new());
    assert_eq!(sig.as_ref().map(Signature::is_empty), Ok(true));
    assert_eq!(sig.as_ref().map(Signature::max_args), Ok(Some(0)));
}

#[test]
fn rejects_position_gap() {
    let err = Signature::new(vec![
        ParameterSpec::required("a", 0),
        ParameterSpec::required("c", 2),
    ]);

    assert_eq!(
        err,
        Err(SignatureError::PositionMismatch {
            name: "c".to_string(),
            expected: 1,
            found: 2,
        })
    );
}

#[test]
fn rejects_duplicate_position() {
    let err = Signature::new(vec![
        ParameterSpec::required("a", 0),
        ParameterSpec::required("b", 0),
    ]);

    assert!(matches!(
        err,
        Err(SignatureError::PositionMismatch { expected: 1, found: 0, .. })
    ));
}

#[test]
fn rejects_variadic_before_last() {
    let err = Signature::new(vec![
        ParameterSpec::variadic("rest", 0),
        ParameterSpec::required("tail", 1),
    ]);

    assert_eq!(
        err,
        Err(SignatureError::VariadicNotLast {
            name: "rest".to_string(),
            position: 0,
        })
    );
}

#[test]
fn rejects_duplicate_names() {
    let err = Signature::new(vec![
        ParameterSpec::required("x", 0),
        ParameterSpec::optional("x", 1),
    ]);

    assert_eq!(
        err,
        Err(SignatureError::DuplicateName {
            name: "x".to_string()
        })
    );
}

#[test]
fn arity_bounds() {
    let fixed = Signature::new(vec![
        ParameterSpec::required("a", 0),
        ParameterSpec::optional("b", 1),
    ]);
    assert_eq!(fixed.as_ref().map(Signature::max_args), Ok(Some(2)));

    let variadic = Signature::new(vec![
        ParameterSpec::required("a", 0),
        ParameterSpec::variadic("rest", 1),
    ]);
    assert_eq!(variadic.as_ref().map(Signature::max_args), Ok(None));
    assert_eq!(
        variadic
            .as_ref()
            .ok()
            .and_then(Signature::variadic)
            .map(ParameterSpec::name),
        Some("rest")
    );
}

#[test]
fn named_signature_display() {
    let sig = Signature::named(
        "copy",
        vec![
            ParameterSpec::required("from", 0).with_type(TypeTag::Str),
            ParameterSpec::optional("mode", 1)
                .with_type(TypeTag::Int)
                .with_default(Value::Null),
            ParameterSpec::variadic("flags", 2).with_type(TypeTag::Bool),
        ],
    );

    assert_eq!(sig.as_ref().ok().and_then(Signature::name), Some("copy"));
    assert_eq!(
        sig.map(|s| s.to_string()),
        Ok("copy(from: string, mode?: ?int, ...flags: bool)".to_string())
    );
}

#[test]
fn anonymous_signature_display() {
    let sig = Signature::new(vec![ParameterSpec::required("arg0", 0)]);
    assert_eq!(sig.map(|s| s.to_string()), Ok("fn(arg0)".to_string()));
}
