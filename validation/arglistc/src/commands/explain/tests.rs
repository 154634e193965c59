use pretty_assertions::assert_eq;

use super::*;

#[test]
fn every_code_has_docs() {
    for code in ErrorCode::ALL {
        let doc = error_docs(code.as_str());
        assert!(
            doc.is_ok_and(|text| text.starts_with(&format!("# {code}"))),
            "missing docs for {code}"
        );
    }
}

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(error_docs("a0003"), error_docs("A0003"));
}

#[test]
fn unknown_code_is_an_error() {
    assert_eq!(
        error_docs("E2001"),
        Err(ExplainError::Unknown(UnknownErrorCode("E2001".to_string())))
    );
}

#[test]
fn known_codes_lists_all() {
    assert_eq!(
        known_codes(),
        "A0001, A0002, A0003, A1001, A1002, A1003, A9001"
    );
}
