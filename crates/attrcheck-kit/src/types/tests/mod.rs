use indexmap::IndexMap;
use serde_json::json;
use test_case::test_case;

use crate::types::config::{Config, ConfigReader};
use crate::types::expression::Expression;
use crate::types::path::Path;
use crate::types::schema::Schema;
use crate::types::types::{Type, Value};

fn schema() -> Schema {
    Schema::new()
        .with_attribute("name", Type::String)
        .with_attribute("size", Type::Number)
        .with_attribute("tags", Type::set(Type::String))
        .with_attribute("labels", Type::map(Type::String))
        .with_attribute(
            "rules",
            Type::list(Type::object(vec![("port", Type::Number), ("cidr", Type::String)])),
        )
}

fn config() -> Config {
    let mut attributes = IndexMap::new();
    attributes.insert("name".to_string(), Value::from("web"));
    attributes.insert("size".to_string(), Value::unknown());
    attributes.insert("tags".to_string(), Value::set(vec![Value::from("a"), Value::from("b")]));
    attributes.insert(
        "rules".to_string(),
        Value::from(json!([{ "port": 80, "cidr": "10.0.0.0/8" }, { "port": 443 }])),
    );
    Config::new(schema(), Value::object(attributes))
}

#[test]
fn matches_single_attribute() {
    let matches = config().path_matches(&Expression::match_root("name"));
    assert_eq!(matches.paths, vec![Path::root("name")]);
    assert!(matches.diagnostics.is_empty());
}

#[test]
fn matches_null_attribute_declared_by_schema() {
    let matches = config().path_matches(&Expression::match_root("labels"));
    assert_eq!(matches.paths, vec![Path::root("labels")]);
    assert!(matches.diagnostics.is_empty());
}

#[test]
fn matches_every_list_element_in_order() {
    let expression = Expression::match_root("rules").at_any_list_index().at_name("cidr");
    let matches = config().path_matches(&expression);
    assert_eq!(
        matches.paths,
        vec![
            Path::root("rules").at_list_index(0).at_name("cidr"),
            Path::root("rules").at_list_index(1).at_name("cidr"),
        ]
    );
}

#[test]
fn matches_set_values() {
    let matches = config().path_matches(&Expression::match_root("tags").at_any_set_value());
    assert_eq!(matches.paths.len(), 2);
    assert_eq!(matches.paths[0], Path::root("tags").at_set_value(Value::from("a")));
}

#[test]
fn reports_expression_outside_schema() {
    let matches = config().path_matches(&Expression::match_root("nope"));
    assert!(matches.paths.is_empty());
    assert_eq!(matches.diagnostics.len(), 1);
    let diag = &matches.diagnostics.as_slice()[0];
    assert!(diag.is_error());
    assert_eq!(diag.summary, "Invalid Path Expression for Schema");
}

#[test]
fn warns_when_nothing_matches_the_data() {
    // labels is null, so it has no elements to match
    let matches = config().path_matches(&Expression::match_root("labels").at_any_map_key());
    assert!(matches.paths.is_empty());
    assert_eq!(matches.diagnostics.len(), 1);
    let diag = &matches.diagnostics.as_slice()[0];
    assert!(diag.is_warning());
    assert_eq!(diag.summary, "Invalid Path Expression for Schema Data");
}

#[test]
fn get_attribute_reads_nested_values() {
    let config = config();
    let port = config.get_attribute(&Path::root("rules").at_list_index(1).at_name("port")).unwrap();
    assert_eq!(port, Value::Integer(443));
    let cidr = config.get_attribute(&Path::root("rules").at_list_index(1).at_name("cidr")).unwrap();
    assert!(cidr.is_null());
    assert!(config.get_attribute(&Path::root("size")).unwrap().is_unknown());
}

#[test]
fn get_attribute_inherits_parent_state() {
    let config = config();
    assert!(config.get_attribute(&Path::root("labels").at_map_key("env")).unwrap().is_null());
    assert!(config.get_attribute(&Path::root("rules").at_list_index(7)).unwrap().is_null());
}

#[test]
fn get_attribute_rejects_mismatched_steps() {
    let err = config().get_attribute(&Path::root("name").at_list_index(0)).unwrap_err();
    assert!(err.is_error());
    assert_eq!(err.summary, "Invalid Attribute Path");
    assert_eq!(err.path, Some(Path::root("name").at_list_index(0)));
}

fn block_config(block: Value) -> Config {
    let schema = Schema::new()
        .with_attribute("block", Type::object(vec![("a", Type::String), ("b", Type::String)]))
        .with_attribute("labels", Type::map(Type::String));
    let mut attributes = IndexMap::new();
    attributes.insert("block".to_string(), block);
    Config::new(schema, Value::object(attributes))
}

#[test_case(Value::unknown(); "unknown parent")]
#[test_case(Value::null(); "null parent")]
fn exact_paths_below_missing_parents_inherit_their_state(block: Value) {
    let config = block_config(block.clone());
    let matches = config.path_matches(&Expression::match_root("block").at_name("a"));
    assert_eq!(matches.paths, vec![Path::root("block").at_name("a")]);
    assert!(matches.diagnostics.is_empty());
    assert_eq!(config.get_attribute(&matches.paths[0]).unwrap().presence(), block.presence());
}

#[test]
fn exact_map_key_below_null_map() {
    let matches = block_config(Value::null()).path_matches(&Expression::match_root("labels").at_map_key("env"));
    assert_eq!(matches.paths, vec![Path::root("labels").at_map_key("env")]);
}

#[test]
fn wildcards_below_null_map_match_nothing() {
    let config = block_config(Value::null());
    let matches = config.path_matches(&Expression::match_root("labels").at_any_map_key());
    assert!(matches.paths.is_empty());
    assert!(matches.diagnostics.as_slice()[0].is_warning());
}
