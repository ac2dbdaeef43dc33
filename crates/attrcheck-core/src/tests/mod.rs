pub mod fixtures {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use kit::indexmap::IndexMap;
    use kit::types::config::{Config, ConfigReader};
    use kit::types::diagnostics::{Diagnostic, Diagnostics};
    use kit::types::expression::Expression;
    use kit::types::schema::Schema;
    use kit::types::types::{Type, Value};

    use crate::validation::ConfigValidator;

    /// Flat configuration of string attributes.
    pub fn config(attributes: &[(&str, Value)]) -> Config {
        let mut schema = Schema::new();
        let mut values = IndexMap::new();
        for (name, value) in attributes {
            schema = schema.with_attribute(*name, Type::String);
            values.insert(name.to_string(), value.clone());
        }
        Config::new(schema, Value::object(values))
    }

    pub fn root(names: &[&str]) -> Vec<Expression> {
        names.iter().map(|name| Expression::match_root(*name)).collect()
    }

    /// Sibling expressions, `<.name`.
    pub fn relative(names: &[&str]) -> Vec<Expression> {
        names.iter().map(|name| Expression::match_relative().at_parent().at_name(*name)).collect()
    }

    #[derive(Debug)]
    struct Fixed {
        diagnostics: Vec<Diagnostic>,
        calls: Option<Arc<AtomicUsize>>,
    }

    impl ConfigValidator for Fixed {
        fn description(&self) -> String {
            "fixed outcome".to_string()
        }

        fn validate(&self, _config: &dyn ConfigReader) -> Diagnostics {
            if let Some(calls) = &self.calls {
                calls.fetch_add(1, Ordering::SeqCst);
            }
            self.diagnostics.clone().into()
        }
    }

    /// Validator returning `diagnostics` regardless of the configuration.
    pub fn fixed(diagnostics: Vec<Diagnostic>) -> Box<dyn ConfigValidator> {
        Box::new(Fixed { diagnostics, calls: None })
    }

    /// Like [`fixed`], counting its invocations in `calls`.
    pub fn counting(diagnostics: Vec<Diagnostic>, calls: Arc<AtomicUsize>) -> Box<dyn ConfigValidator> {
        Box::new(Fixed { diagnostics, calls: Some(calls) })
    }
}

use kit::indexmap::IndexMap;
use kit::serde_json::json;
use kit::types::config::Config;
use kit::types::diagnostics::{Diagnostic, Diagnostics};
use kit::types::expression::Expression;
use kit::types::path::Path;
use kit::types::schema::Schema;
use kit::types::types::{Type, Value};
use test_case::test_case;

use crate::validation::combinators::{all, any, any_with_all_warnings};
use crate::validation::relationship::{at_least_one_of, conflicting, exactly_one_of, required_together};
use crate::validation::ConfigValidator;
use fixtures::{config, fixed, root};

fn known() -> Value {
    Value::from("x")
}

fn every_rule() -> Vec<Box<dyn ConfigValidator>> {
    vec![
        exactly_one_of(root(&["a", "b", "c"])).boxed(),
        at_least_one_of(root(&["a", "b", "c"])).boxed(),
        conflicting(root(&["a", "b", "c"])).boxed(),
        required_together(root(&["a", "b", "c"])).boxed(),
    ]
}

#[test_case(Value::null(), Value::from("x"), None; "other configured")]
#[test_case(Value::from("x"), Value::from("x"), Some("Invalid Attribute Combination"); "both configured")]
#[test_case(Value::unknown(), Value::from("x"), None; "unknown and configured")]
#[test_case(Value::null(), Value::null(), Some("Missing Attribute Configuration"); "both null")]
fn exactly_one_of_end_to_end(a: Value, b: Value, expected: Option<&str>) {
    let config = config(&[("a", a), ("b", b)]);
    let diagnostics = exactly_one_of(root(&["a", "b"])).validate(&config);
    match expected {
        None => assert!(diagnostics.is_empty(), "{}", diagnostics),
        Some(summary) => {
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics.as_slice()[0].summary, summary);
        }
    }
}

#[test]
fn exactly_one_of_combination_detail() {
    let config = config(&[("a", known()), ("b", known())]);
    let diagnostics = exactly_one_of(root(&["a", "b"])).validate(&config);
    let diag = &diagnostics.as_slice()[0];
    assert!(diag.is_error());
    assert_eq!(diag.detail, "Exactly one of these attributes must be configured: [a,b]");
    assert_eq!(diag.path, Some(Path::root("a")));
}

#[test]
fn two_known_values_report_one_error_each() {
    let config = config(&[("a", known()), ("b", Value::null()), ("c", known())]);
    let exactly = exactly_one_of(root(&["a", "b", "c"])).validate(&config);
    let conflict = conflicting(root(&["a", "b", "c"])).validate(&config);
    assert_eq!(exactly.error_count(), 1);
    assert_eq!(conflict.error_count(), 1);
}

#[test]
fn all_null_is_only_missing_for_at_least_one_of() {
    let config = config(&[("a", Value::null()), ("b", Value::null()), ("c", Value::null())]);
    assert_eq!(at_least_one_of(root(&["a", "b", "c"])).validate(&config).error_count(), 1);
    assert!(required_together(root(&["a", "b", "c"])).validate(&config).is_empty());
}

#[test_case(known(), Value::null(), Value::null(), 1; "one of three")]
#[test_case(known(), known(), Value::null(), 1; "two of three")]
#[test_case(known(), Value::unknown(), Value::null(), 0; "unknown defers")]
#[test_case(known(), known(), known(), 0; "all configured")]
fn required_together_partial_configuration(a: Value, b: Value, c: Value, errors: usize) {
    let config = config(&[("a", a), ("b", b), ("c", c)]);
    assert_eq!(required_together(root(&["a", "b", "c"])).validate(&config).error_count(), errors);
}

#[test]
fn all_concatenates_sub_validators() {
    let config = config(&[("a", known()), ("b", known()), ("c", Value::null())]);
    let first = exactly_one_of(root(&["a", "b", "c"]));
    let second = required_together(root(&["a", "b", "c"]));

    let mut expected = first.validate(&config);
    expected.append(second.validate(&config));

    let combined = all(vec![first.boxed(), second.boxed()]);
    assert_eq!(combined.validate(&config), expected);
}

#[test]
fn any_keeps_only_the_passing_warning() {
    let config = config(&[("a", known())]);
    let validator = any(vec![
        fixed(vec![Diagnostic::warning("w1", ""), Diagnostic::error("e1", "")]),
        fixed(vec![Diagnostic::warning("w2", "")]),
    ]);
    let expected: Diagnostics = vec![Diagnostic::warning("w2", "")].into();
    assert_eq!(validator.validate(&config), expected);
}

#[test]
fn any_with_all_warnings_keeps_both_warnings() {
    let config = config(&[("a", known())]);
    let validator = any_with_all_warnings(vec![
        fixed(vec![Diagnostic::warning("w1", ""), Diagnostic::error("e1", "")]),
        fixed(vec![Diagnostic::warning("w2", "")]),
    ]);
    let diagnostics = validator.validate(&config);
    assert_eq!(diagnostics.warning_count(), 2);
    assert_eq!(diagnostics.error_count(), 0);
}

#[test_case(Value::null(), Value::null(), Value::null(); "all null")]
#[test_case(known(), known(), Value::null(); "two known")]
#[test_case(known(), Value::unknown(), Value::null(); "with unknown")]
#[test_case(known(), known(), known(); "all known")]
fn validators_are_idempotent(a: Value, b: Value, c: Value) {
    let config = config(&[("a", a), ("b", b), ("c", c)]);
    for validator in every_rule() {
        assert_eq!(validator.validate(&config), validator.validate(&config), "{}", validator.description());
    }
    let combined = all(every_rule());
    assert_eq!(combined.validate(&config), combined.validate(&config));
}

/// Configuration holding a single `block` object with string attributes
/// `a` and `b`.
fn block_config(block: Value) -> Config {
    let schema = Schema::new()
        .with_attribute("block", Type::object(vec![("a", Type::String), ("b", Type::String)]));
    let mut attributes = IndexMap::new();
    attributes.insert("block".to_string(), block);
    Config::new(schema, Value::object(attributes))
}

fn block_expressions() -> Vec<Expression> {
    vec!["block.a".parse().unwrap(), "block.b".parse().unwrap()]
}

#[test]
fn unknown_parent_block_is_indeterminate() {
    let config = block_config(Value::unknown());
    assert!(exactly_one_of(block_expressions()).validate(&config).is_empty());
    assert!(at_least_one_of(block_expressions()).validate(&config).is_empty());
    assert!(required_together(block_expressions()).validate(&config).is_empty());
}

#[test]
fn null_parent_block_is_missing_configuration() {
    let config = block_config(Value::null());
    for diagnostics in [
        exactly_one_of(block_expressions()).validate(&config),
        at_least_one_of(block_expressions()).validate(&config),
    ] {
        assert_eq!(diagnostics.len(), 1, "{}", diagnostics);
        assert_eq!(diagnostics.as_slice()[0].summary, "Missing Attribute Configuration");
    }
}

#[test_case(Value::from(json!({ "a": "x" })), 0; "one configured")]
#[test_case(Value::from(json!({ "a": "x", "b": "y" })), 1; "both configured")]
fn nested_attributes_inside_a_known_block(block: Value, errors: usize) {
    let config = block_config(block);
    let diagnostics = exactly_one_of(block_expressions()).validate(&config);
    assert_eq!(diagnostics.error_count(), errors, "{}", diagnostics);
    assert_eq!(diagnostics.warning_count(), 0);
}
