use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::expression::{Expression, ExpressionStep};
use super::types::{Type, Value};

/// Top-level attribute types of a provider, resource or data source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub attributes: IndexMap<String, Type>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, typing: Type) -> Self {
        self.attributes.insert(name.into(), typing);
        self
    }

    pub fn as_type(&self) -> Type {
        Type::Object(self.attributes.clone())
    }

    /// Whether every step of the resolved expression follows the schema
    /// structure: names into objects, indexes into lists, keys into maps and
    /// values into sets.
    pub fn is_valid_expression(&self, expression: &Expression) -> bool {
        let resolved = expression.resolve();
        let mut current = self.as_type();
        for step in resolved.steps() {
            let next = match (step, &current) {
                (ExpressionStep::AttributeNameExact(name), Type::Object(attributes)) => {
                    attributes.get(name).cloned()
                }
                (
                    ExpressionStep::ElementKeyIntExact(_) | ExpressionStep::ElementKeyIntAny,
                    Type::List(element),
                ) => Some(*element.clone()),
                (
                    ExpressionStep::ElementKeyStringExact(_) | ExpressionStep::ElementKeyStringAny,
                    Type::Map(element),
                ) => Some(*element.clone()),
                (
                    ExpressionStep::ElementKeyValueExact(_) | ExpressionStep::ElementKeyValueAny,
                    Type::Set(element),
                ) => Some(*element.clone()),
                _ => None,
            };
            match next {
                Some(typing) => current = typing,
                None => return false,
            }
        }
        true
    }

    /// Fill in every object attribute the schema declares but the value
    /// omits with `Null`, recursively.
    pub fn normalize(&self, value: Value) -> Value {
        normalize_value(value, &self.as_type())
    }
}

fn normalize_value(value: Value, typing: &Type) -> Value {
    match (value, typing) {
        (Value::Object(mut attributes), Type::Object(attribute_types)) => {
            let mut normalized = IndexMap::with_capacity(attribute_types.len());
            for (name, attribute_type) in attribute_types.iter() {
                let attribute = attributes.shift_remove(name).unwrap_or(Value::Null);
                normalized.insert(name.clone(), normalize_value(attribute, attribute_type));
            }
            // Attributes unknown to the schema are kept as-is.
            normalized.extend(attributes);
            Value::Object(normalized)
        }
        (Value::List(items), Type::List(element)) => {
            Value::List(items.into_iter().map(|item| normalize_value(item, element)).collect())
        }
        (Value::Set(items), Type::Set(element)) => {
            Value::Set(items.into_iter().map(|item| normalize_value(item, element)).collect())
        }
        (Value::Map(entries), Type::Map(element)) => Value::Map(
            entries.into_iter().map(|(k, v)| (k, normalize_value(v, element))).collect(),
        ),
        (value, _) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::expression::Expression;

    fn schema() -> Schema {
        Schema::new()
            .with_attribute("name", Type::String)
            .with_attribute("tags", Type::set(Type::String))
            .with_attribute("labels", Type::map(Type::String))
            .with_attribute(
                "rules",
                Type::list(Type::object(vec![("port", Type::Number), ("cidr", Type::String)])),
            )
    }

    #[test]
    fn accepts_expressions_following_the_schema() {
        let schema = schema();
        assert!(schema.is_valid_expression(&Expression::match_root("name")));
        assert!(schema.is_valid_expression(&Expression::match_root("rules").at_any_list_index().at_name("port")));
        assert!(schema.is_valid_expression(&Expression::match_root("labels").at_map_key("env")));
        assert!(schema.is_valid_expression(&Expression::match_root("tags").at_any_set_value()));
    }

    #[test]
    fn rejects_expressions_breaking_the_schema() {
        let schema = schema();
        assert!(!schema.is_valid_expression(&Expression::match_root("missing")));
        assert!(!schema.is_valid_expression(&Expression::match_root("rules").at_name("port")));
        assert!(!schema.is_valid_expression(&Expression::match_root("labels").at_list_index(0)));
        assert!(!schema.is_valid_expression(&Expression::match_root("name").at_name("nested")));
    }

    #[test]
    fn normalize_fills_missing_attributes_with_null() {
        let value = Value::from(serde_json::json!({
            "name": "x",
            "rules": [{ "port": 80 }]
        }));
        let normalized = schema().normalize(value);
        let attributes = normalized.as_object().unwrap();
        assert_eq!(attributes.len(), 4);
        assert!(attributes["tags"].is_null());
        let rule = match &attributes["rules"] {
            Value::List(items) => items[0].as_object().unwrap().clone(),
            other => panic!("unexpected {other:?}"),
        };
        assert!(rule["cidr"].is_null());
        assert_eq!(rule["port"], Value::Integer(80));
    }
}
