use super::*;

#[test]
fn required_parameter_defaults() {
    let param = ParameterSpec::required("arg0", 0);

    assert_eq!(param.name(), "arg0");
    assert_eq!(param.position(), 0);
    assert!(!param.is_optional());
    assert!(!param.is_variadic());
    assert_eq!(param.expected_type(), None);
    assert_eq!(param.default_value(), None);
}

#[test]
fn variadic_is_optional() {
    let param = ParameterSpec::variadic("rest", 1);
    assert!(param.is_variadic());
    assert!(param.is_optional());
}

#[test]
fn untyped_parameters_accept_null() {
    assert!(ParameterSpec::required("a", 0).allows_null());
}

#[test]
fn typed_parameters_reject_null_unless_nullable() {
    let strict = ParameterSpec::required("a", 0).with_type(TypeTag::Int);
    assert!(!strict.allows_null());

    let nullable = ParameterSpec::required("a", 0)
        .with_type(TypeTag::Int)
        .nullable();
    assert!(nullable.allows_null());
}

#[test]
fn default_makes_parameter_optional() {
    let param = ParameterSpec::required("limit", 2)
        .with_type(TypeTag::Int)
        .with_default(Value::Int(10));

    assert!(param.is_optional());
    assert!(!param.allows_null());
    assert_eq!(param.default_value(), Some(&Value::Int(10)));
}

#[test]
fn null_default_implies_nullable() {
    let param = ParameterSpec::required("ctx", 0)
        .with_type(TypeTag::Class("Context".to_string()))
        .with_default(Value::Null);

    assert!(param.is_optional());
    assert!(param.allows_null());
}
