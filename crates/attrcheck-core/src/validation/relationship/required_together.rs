use kit::helpers::diag::invalid_attribute_combination;
use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use crate::validation::presence::classify;
use crate::validation::ConfigValidator;

/// The matched attributes must all be configured, or none of them.
#[derive(Clone, Debug, PartialEq)]
pub struct RequiredTogether {
    expressions: Expressions,
}

pub fn required_together<I>(expressions: I) -> RequiredTogether
where
    I: IntoIterator<Item = Expression>,
{
    RequiredTogether { expressions: expressions.into_iter().collect() }
}

impl RequiredTogether {
    pub fn expressions(&self) -> &Expressions {
        &self.expressions
    }
}

impl ConfigValidator for RequiredTogether {
    fn description(&self) -> String {
        format!("These attributes must be configured together: {}", self.expressions)
    }

    fn validate(&self, config: &dyn ConfigReader) -> Diagnostics {
        let classified = classify(config, &self.expressions, None);
        let mut diagnostics = classified.diagnostics;

        // An unknown value may still complete or empty the set
        if !classified.unknown.is_empty() {
            log::debug!("required_together {}: deferred, unknown values present", self.expressions);
            return diagnostics;
        }

        if !classified.configured.is_empty() && !classified.null.is_empty() {
            diagnostics.push(invalid_attribute_combination(
                classified.configured[0].clone(),
                &self.description(),
            ));
        }

        diagnostics
    }
}
