//! Rules fed with owned and dynamically typed values.

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use serde_json::json;
use valid_rules::prelude::*;

#[test]
fn owned_and_borrowed_strings() {
    let rule = regexp_rule();
    assert!(rule.validate_any(&String::from("a+")).is_ok());
    assert!(rule.validate_any(&Cow::Borrowed("a+")).is_ok());
    assert!(rule.validate_any(&Box::<str>::from("(")).is_err());
}

#[test]
fn json_strings_are_validated() {
    let rule = ip_range_rule();
    assert!(rule.validate_any(&json!("10.0.0.1_10.0.0.9")).is_ok());
    assert_eq!(
        rule.validate_any(&json!("10.0.0.9_10.0.0.1"))
            .unwrap_err()
            .kind(),
        Some(RuleErrorKind::InvalidRange)
    );
}

#[test]
fn non_string_json_is_a_type_mismatch() {
    for value in [json!(null), json!(1), json!(true), json!(["a"]), json!({"a": 1})] {
        let err = one_of_rule([""], false).validate_any(&value).unwrap_err();
        assert_eq!(err.kind(), Some(RuleErrorKind::TypeMismatch));
    }
}
