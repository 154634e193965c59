use super::*;

#[test]
fn every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::get(code).is_some(), "{code} has no documentation");
    }
    assert_eq!(ErrorDocs::all_codes().count(), ErrorCode::ALL.len());
}

#[test]
fn docs_start_with_code_heading() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap_or_default();
        assert!(
            doc.starts_with(&format!("# {code}: ")),
            "{code} documentation has unexpected heading"
        );
    }
}
