use kit::helpers::diag::invalid_attribute_combination;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use super::{collect, AttributeRequest, AttributeValidator};

/// When the attribute is null, at least one of the others must be configured.
#[derive(Clone, Debug, PartialEq)]
pub struct AtLeastOneOf {
    expressions: Expressions,
}

pub fn at_least_one_of<I>(expressions: I) -> AtLeastOneOf
where
    I: IntoIterator<Item = Expression>,
{
    AtLeastOneOf { expressions: collect(expressions) }
}

impl AttributeValidator for AtLeastOneOf {
    fn description(&self) -> String {
        format!("Ensure that at least one attribute from this collection is set: {}", self.expressions)
    }

    fn validate_attribute(&self, req: &AttributeRequest<'_>) -> Diagnostics {
        // Unknown counts as not null: it may still be configured
        if !req.config_value.is_null() {
            return Diagnostics::new();
        }

        let expressions = req.merged(&self.expressions);
        let classified = req.classify(&expressions);
        let mut diagnostics = classified.diagnostics;

        if !classified.configured.is_empty() || !classified.unknown.is_empty() {
            return diagnostics;
        }

        if !diagnostics.has_error() {
            diagnostics.push(invalid_attribute_combination(
                req.path.clone(),
                &format!("At least one attribute out of {} must be specified", expressions),
            ));
        }

        diagnostics
    }
}
