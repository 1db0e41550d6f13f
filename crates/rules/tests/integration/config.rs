//! Rules built from configuration behave like their factories.

use pretty_assertions::assert_eq;
use valid_rules::prelude::*;

const CONFIG: &str = r#"[
    { "rule": "directory" },
    { "rule": "file" },
    { "rule": "one_of", "values": ["one", "two", "three"], "case_sensitive": true },
    { "rule": "ip_range" },
    { "rule": "regexp" }
]"#;

#[test]
fn configured_rules_match_factories() {
    let rules = build_rules(&RuleConfig::list_from_json(CONFIG).unwrap());
    assert_eq!(rules.len(), 5);

    let factories: Vec<BoxedRule> = vec![
        Box::new(directory_rule()),
        Box::new(file_rule()),
        Box::new(one_of_rule(["one", "two", "three"], true)),
        Box::new(ip_range_rule()),
        Box::new(regexp_rule()),
    ];

    let inputs = [
        env!("CARGO_MANIFEST_DIR"),
        "Cargo.toml",
        "One",
        "192.168.1.1/24",
        "256.1.1.1",
        "[a-z",
        "",
    ];

    for (configured, factory) in rules.iter().zip(&factories) {
        for input in inputs {
            assert_eq!(configured.validate(input), factory.validate(input), "{input}");
        }
    }
}

#[test]
fn malformed_config_is_an_error() {
    assert!(RuleConfig::list_from_json(r#"[{ "rule": "one_of" }]"#).is_err());
    assert!(RuleConfig::list_from_json("{").is_err());
}
