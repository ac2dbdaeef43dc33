use std::fmt;

use serde::{Deserialize, Serialize};

use super::expression::Expression;
use super::types::Value;

/// One step of a concrete path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    AttributeName(String),
    ElementKeyInt(i64),
    ElementKeyString(String),
    ElementKeyValue(Value),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::AttributeName(name) => write!(f, "{}", name),
            PathStep::ElementKeyInt(index) => write!(f, "[{}]", index),
            PathStep::ElementKeyString(key) => write!(f, "[{:?}]", key),
            PathStep::ElementKeyValue(value) => write!(f, "[Value({})]", value),
        }
    }
}

/// A fully resolved position within one configuration instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    /// The empty path, pointing at the configuration itself.
    pub fn empty() -> Self {
        Path { steps: vec![] }
    }

    pub fn root(name: impl Into<String>) -> Self {
        Path { steps: vec![PathStep::AttributeName(name.into())] }
    }

    pub fn from_steps(steps: Vec<PathStep>) -> Self {
        Path { steps }
    }

    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.at_step(PathStep::AttributeName(name.into()))
    }

    pub fn at_list_index(&self, index: i64) -> Self {
        self.at_step(PathStep::ElementKeyInt(index))
    }

    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.at_step(PathStep::ElementKeyString(key.into()))
    }

    pub fn at_set_value(&self, value: Value) -> Self {
        self.at_step(PathStep::ElementKeyValue(value))
    }

    pub fn at_step(&self, step: PathStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Path { steps }
    }

    pub fn parent(&self) -> Option<Path> {
        if self.steps.is_empty() {
            return None;
        }
        Some(Path { steps: self.steps[..self.steps.len() - 1].to_vec() })
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Absolute expression matching exactly this path.
    pub fn expression(&self) -> Expression {
        Expression::from_path(self)
    }
}

/// Attribute names are dot separated, element keys are bracketed:
/// `block[0].attrs["key"].tags[Value("x")]`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 && matches!(step, PathStep::AttributeName(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
