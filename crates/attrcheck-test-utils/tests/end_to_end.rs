use attrcheck_core::{at_least_one_of, conflicting, exactly_one_of, required_together, ConfigValidator};
use attrcheck_kit::types::expression::Expression;
use attrcheck_kit::types::path::Path;
use attrcheck_test_utils::{
    assert_diagnostic_counts, assert_error_summary, assert_no_diagnostics, ConfigBuilder,
};
use test_case::test_case;

fn paths(names: &[&str]) -> Vec<Expression> {
    names.iter().map(|name| name.parse().unwrap()).collect()
}

#[test]
fn exactly_one_of_a_b() {
    let validator = exactly_one_of(paths(&["a", "b"]));

    let config = ConfigBuilder::new().null("a").string("b", "x").build();
    assert_no_diagnostics!(validator.validate(&config));

    let config = ConfigBuilder::new().string("a", "x").string("b", "x").build();
    let diagnostics = validator.validate(&config);
    assert_diagnostic_counts!(diagnostics, errors: 1, warnings: 0);
    assert_error_summary!(
        diagnostics,
        "Invalid Attribute Combination",
        "Exactly one of these attributes must be configured: [a,b]"
    );
    assert_eq!(diagnostics.as_slice()[0].path, Some(Path::root("a")));

    let config = ConfigBuilder::new().unknown("a").string("b", "x").build();
    assert_no_diagnostics!(validator.validate(&config));

    let config = ConfigBuilder::new().null("a").null("b").build();
    let diagnostics = validator.validate(&config);
    assert_diagnostic_counts!(diagnostics, errors: 1, warnings: 0);
    assert_error_summary!(diagnostics, "Missing Attribute Configuration");
}

#[test_case(&["x", "", ""]; "first")]
#[test_case(&["", "x", ""]; "second")]
#[test_case(&["", "", "x"]; "third")]
fn exactly_one_known_passes(values: &[&str]) {
    let mut builder = ConfigBuilder::new();
    for (name, value) in ["a", "b", "c"].iter().zip(values) {
        builder = if value.is_empty() { builder.null(name) } else { builder.string(name, value) };
    }
    assert_no_diagnostics!(exactly_one_of(paths(&["a", "b", "c"])).validate(&builder.build()));
}

#[test]
fn nested_expressions_resolve_through_blocks() {
    use attrcheck_kit::types::types::{Type, Value};
    use attrcheck_kit::serde_json::json;

    let rule = Type::object(vec![("cidr", Type::String), ("security_group", Type::String)]);
    let config = ConfigBuilder::new()
        .attribute(
            "rules",
            Type::list(rule),
            Value::from(json!([{ "cidr": "10.0.0.0/8" }, { "cidr": "0.0.0.0/0", "security_group": "sg-1" }])),
        )
        .build();

    let validator = conflicting(paths(&["rules[*].cidr", "rules[*].security_group"]));
    let diagnostics = validator.validate(&config);
    assert_diagnostic_counts!(diagnostics, errors: 1, warnings: 0);
    assert_eq!(
        diagnostics.as_slice()[0].detail,
        "These attributes cannot be configured together: [rules[*].cidr,rules[*].security_group]"
    );
}

#[test]
fn all_null_only_fails_at_least_one_of() {
    let config = ConfigBuilder::new().null("a").null("b").build();
    assert_diagnostic_counts!(at_least_one_of(paths(&["a", "b"])).validate(&config), errors: 1, warnings: 0);
    assert_no_diagnostics!(required_together(paths(&["a", "b"])).validate(&config));
}

#[test]
fn unknown_expression_is_reported_once() {
    let config = ConfigBuilder::new().string("a", "x").build();
    let diagnostics = required_together(paths(&["a", "b"])).validate(&config);
    assert_diagnostic_counts!(diagnostics, errors: 1, warnings: 0);
    assert_error_summary!(diagnostics, "Invalid Path Expression for Schema");
}
