use crate::helpers::diag::{
    invalid_attribute_path, invalid_path_expression_for_schema,
    invalid_path_expression_for_schema_data,
};

use super::diagnostics::{Diagnostic, Diagnostics};
use super::expression::Expression;
use super::path::{Path, PathStep};
use super::schema::Schema;
use super::types::Value;

/// Concrete paths matched by one expression, plus what the matcher had to
/// report while resolving it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathMatches {
    pub paths: Vec<Path>,
    pub diagnostics: Diagnostics,
}

/// What validators need from the host's configuration.
pub trait ConfigReader: Send + Sync {
    /// Expand `expression` into every concrete path it designates. Resolution
    /// problems are reported as diagnostics, never by failing.
    fn path_matches(&self, expression: &Expression) -> PathMatches;

    /// Fetch the value at an already resolved path.
    fn get_attribute(&self, path: &Path) -> Result<Value, Diagnostic>;
}

/// Reference configuration: a schema plus one value tree conforming to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    schema: Schema,
    value: Value,
}

impl Config {
    pub fn new(schema: Schema, value: Value) -> Self {
        let value = schema.normalize(value);
        Config { schema, value }
    }
}

impl ConfigReader for Config {
    fn path_matches(&self, expression: &Expression) -> PathMatches {
        let mut matches = PathMatches::default();

        if !self.schema.is_valid_expression(expression) {
            matches.diagnostics.push(invalid_path_expression_for_schema(expression));
            return matches;
        }

        let root = Path::empty();
        if expression.matches(&root) {
            matches.paths.push(root);
        } else {
            collect_matches(expression, &root, &self.value, &mut matches.paths);
        }
        log::trace!("expression {} matched {} path(s)", expression, matches.paths.len());

        // Zero matches, although valid, is potentially a provider bug
        if matches.paths.is_empty() {
            matches.diagnostics.push(invalid_path_expression_for_schema_data(expression));
        }
        matches
    }

    fn get_attribute(&self, path: &Path) -> Result<Value, Diagnostic> {
        let mut current = &self.value;
        for step in path.steps() {
            current = match (current, step) {
                // Children of unknown or null values inherit their parent's state
                (Value::Unknown, _) => return Ok(Value::Unknown),
                (Value::Null, _) => return Ok(Value::Null),
                (Value::Object(attributes), PathStep::AttributeName(name)) => {
                    match attributes.get(name) {
                        Some(attribute) => attribute,
                        None => {
                            return Err(invalid_attribute_path(
                                path,
                                &format!("no attribute named {:?}", name),
                            ))
                        }
                    }
                }
                (Value::List(items), PathStep::ElementKeyInt(index)) => {
                    match usize::try_from(*index).ok().and_then(|i| items.get(i)) {
                        Some(item) => item,
                        None => return Ok(Value::Null),
                    }
                }
                (Value::Map(entries), PathStep::ElementKeyString(key)) => match entries.get(key) {
                    Some(entry) => entry,
                    None => return Ok(Value::Null),
                },
                (Value::Set(items), PathStep::ElementKeyValue(value)) => {
                    match items.iter().find(|item| *item == value) {
                        Some(item) => item,
                        None => return Ok(Value::Null),
                    }
                }
                (other, step) => {
                    return Err(invalid_attribute_path(
                        path,
                        &format!("step {} cannot be applied to a {} value", step, other.get_type_name()),
                    ))
                }
            };
        }
        Ok(current.clone())
    }
}

/// Depth-first walk in value order. Only descends into paths the expression
/// could still match below.
fn collect_matches(expression: &Expression, path: &Path, value: &Value, out: &mut Vec<Path>) {
    let children: Vec<(PathStep, &Value)> = match value {
        // Below null or unknown only exact steps can be followed; the path
        // then reads as its ancestor's state
        Value::Null | Value::Unknown => {
            if let Some(exact) = expression.complete_exact(path) {
                out.push(exact);
            }
            return;
        }
        Value::Object(attributes) => attributes
            .iter()
            .map(|(name, attribute)| (PathStep::AttributeName(name.clone()), attribute))
            .collect(),
        Value::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (PathStep::ElementKeyInt(index as i64), item))
            .collect(),
        Value::Set(items) => {
            items.iter().map(|item| (PathStep::ElementKeyValue(item.clone()), item)).collect()
        }
        Value::Map(entries) => entries
            .iter()
            .map(|(key, entry)| (PathStep::ElementKeyString(key.clone()), entry))
            .collect(),
        _ => return,
    };

    for (step, child) in children {
        let child_path = path.at_step(step);
        if expression.matches(&child_path) {
            out.push(child_path);
        } else if expression.matches_parent(&child_path) {
            collect_matches(expression, &child_path, child, out);
        }
    }
}
