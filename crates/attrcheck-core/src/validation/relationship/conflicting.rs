use kit::helpers::diag::invalid_attribute_combination;
use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use crate::validation::presence::classify;
use crate::validation::ConfigValidator;

/// The matched attributes cannot be configured together.
#[derive(Clone, Debug, PartialEq)]
pub struct Conflicting {
    expressions: Expressions,
}

pub fn conflicting<I>(expressions: I) -> Conflicting
where
    I: IntoIterator<Item = Expression>,
{
    Conflicting { expressions: expressions.into_iter().collect() }
}

impl Conflicting {
    pub fn expressions(&self) -> &Expressions {
        &self.expressions
    }
}

impl ConfigValidator for Conflicting {
    fn description(&self) -> String {
        format!("These attributes cannot be configured together: {}", self.expressions)
    }

    fn validate(&self, config: &dyn ConfigReader) -> Diagnostics {
        let classified = classify(config, &self.expressions, None);
        let mut diagnostics = classified.diagnostics;

        // Only definitively configured values can conflict
        if classified.configured.len() > 1 {
            diagnostics.push(invalid_attribute_combination(
                classified.configured[0].clone(),
                &self.description(),
            ));
        }

        diagnostics
    }
}
