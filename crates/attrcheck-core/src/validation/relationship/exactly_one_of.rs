use kit::helpers::diag::{invalid_attribute_combination, missing_attribute_configuration};
use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use crate::validation::presence::classify;
use crate::validation::ConfigValidator;

/// Exactly one of the matched attributes must be configured.
#[derive(Clone, Debug, PartialEq)]
pub struct ExactlyOneOf {
    expressions: Expressions,
}

pub fn exactly_one_of<I>(expressions: I) -> ExactlyOneOf
where
    I: IntoIterator<Item = Expression>,
{
    ExactlyOneOf { expressions: expressions.into_iter().collect() }
}

impl ExactlyOneOf {
    pub fn expressions(&self) -> &Expressions {
        &self.expressions
    }
}

impl ConfigValidator for ExactlyOneOf {
    fn description(&self) -> String {
        format!("Exactly one of these attributes must be configured: {}", self.expressions)
    }

    fn validate(&self, config: &dyn ConfigReader) -> Diagnostics {
        let classified = classify(config, &self.expressions, None);
        let mut diagnostics = classified.diagnostics;

        if classified.configured.len() > 1 {
            diagnostics.push(invalid_attribute_combination(
                classified.configured[0].clone(),
                &self.description(),
            ));
        }

        // Unknown values may still end up configured or null
        if !classified.unknown.is_empty() {
            log::debug!("exactly_one_of {}: deferred, unknown values present", self.expressions);
            return diagnostics;
        }

        if classified.configured.is_empty() && !diagnostics.has_error() {
            diagnostics.push(missing_attribute_configuration(&self.description()));
        }

        diagnostics
    }
}
