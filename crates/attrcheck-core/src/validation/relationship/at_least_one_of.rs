use kit::helpers::diag::missing_attribute_configuration;
use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use crate::validation::presence::classify;
use crate::validation::ConfigValidator;

/// At least one of the matched attributes must be configured.
#[derive(Clone, Debug, PartialEq)]
pub struct AtLeastOneOf {
    expressions: Expressions,
}

pub fn at_least_one_of<I>(expressions: I) -> AtLeastOneOf
where
    I: IntoIterator<Item = Expression>,
{
    AtLeastOneOf { expressions: expressions.into_iter().collect() }
}

impl AtLeastOneOf {
    pub fn expressions(&self) -> &Expressions {
        &self.expressions
    }
}

impl ConfigValidator for AtLeastOneOf {
    fn description(&self) -> String {
        format!("At least one of these attributes must be configured: {}", self.expressions)
    }

    fn validate(&self, config: &dyn ConfigReader) -> Diagnostics {
        let classified = classify(config, &self.expressions, None);
        let mut diagnostics = classified.diagnostics;

        if !classified.configured.is_empty() {
            return diagnostics;
        }

        if !classified.unknown.is_empty() {
            log::debug!("at_least_one_of {}: deferred, unknown values present", self.expressions);
            return diagnostics;
        }

        if !diagnostics.has_error() {
            diagnostics.push(missing_attribute_configuration(&self.description()));
        }

        diagnostics
    }
}
