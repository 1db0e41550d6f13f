//! Each built-in rule exercised through the public API.

use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use valid_rules::prelude::*;

fn manifest_dir() -> &'static str {
    env!("CARGO_MANIFEST_DIR")
}

fn manifest_file() -> String {
    Path::new(manifest_dir())
        .join("Cargo.toml")
        .to_str()
        .unwrap()
        .to_owned()
}

fn missing_path() -> String {
    Path::new(manifest_dir())
        .join("not-exists")
        .to_str()
        .unwrap()
        .to_owned()
}

#[test]
fn directory() {
    let rule = directory_rule();
    assert!(rule.validate(manifest_dir()).is_ok());

    let err = rule.validate(&manifest_file()).unwrap_err();
    assert_eq!(err.kind(), Some(RuleErrorKind::WrongKind));

    let err = rule.validate(&missing_path()).unwrap_err();
    assert_eq!(err.kind(), Some(RuleErrorKind::NotFound));
}

#[test]
fn file() {
    let rule = file_rule();
    assert!(rule.validate(&manifest_file()).is_ok());

    let err = rule.validate(manifest_dir()).unwrap_err();
    assert_eq!(err.kind(), Some(RuleErrorKind::WrongKind));

    let err = rule.validate(&missing_path()).unwrap_err();
    assert_eq!(err.kind(), Some(RuleErrorKind::NotFound));
}

#[rstest]
#[case("one", false, None)]
#[case("ONE", false, None)]
#[case("four", false, Some(RuleErrorKind::NotAllowed))]
#[case("One", true, Some(RuleErrorKind::NotAllowed))]
fn one_of(
    #[case] input: &str,
    #[case] case_sensitive: bool,
    #[case] expected: Option<RuleErrorKind>,
) {
    let rule = one_of_rule(["one", "two", "three"], case_sensitive);
    assert_eq!(rule.validate(input).err().and_then(|e| e.kind()), expected);
}

#[rstest]
#[case("192.168.1.1/24", true)]
#[case("192.168.1.1-255", true)]
#[case("192.168.1.1_192.168.1.2", true)]
#[case("256.1.1.1", false)]
fn ip_range(#[case] input: &str, #[case] ok: bool) {
    let result = ip_range_rule().validate(input);
    assert_eq!(result.is_ok(), ok);
    if let Err(err) = result {
        assert_eq!(err.kind(), Some(RuleErrorKind::InvalidRange));
    }
}

#[test]
fn regexp() {
    assert!(regexp_rule().validate(r"[a-z0-9]+\.test").is_ok());

    let err = regexp_rule().validate(r"[a-z0-9+\.test").unwrap_err();
    assert_eq!(err.kind(), Some(RuleErrorKind::InvalidPattern));
}

#[test]
fn rules_are_shareable_across_threads() {
    let rule = one_of_rule(["a", "b"], false);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(rule.validate("A").is_ok());
                assert!(rule.validate("c").is_err());
            });
        }
    });
}

#[test]
fn several_rules_against_one_value() {
    let dir = directory_rule();
    let file = file_rule();
    let rules: [&dyn Validate<Input = str>; 2] = [&dir, &file];

    let errors = validate_with_all(manifest_dir(), &rules).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].kind(), Some(RuleErrorKind::WrongKind));

    assert!(validate_with_any(manifest_dir(), &rules).is_ok());
}
