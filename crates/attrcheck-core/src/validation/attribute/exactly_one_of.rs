use kit::helpers::diag::invalid_attribute_combination;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use super::{collect, AttributeRequest, AttributeValidator};

/// The attribute, or exactly one of the others, must be configured.
#[derive(Clone, Debug, PartialEq)]
pub struct ExactlyOneOf {
    expressions: Expressions,
}

pub fn exactly_one_of<I>(expressions: I) -> ExactlyOneOf
where
    I: IntoIterator<Item = Expression>,
{
    ExactlyOneOf { expressions: collect(expressions) }
}

impl AttributeValidator for ExactlyOneOf {
    fn description(&self) -> String {
        format!(
            "Ensure that one and only one attribute from this collection is set: {}",
            self.expressions
        )
    }

    fn validate_attribute(&self, req: &AttributeRequest<'_>) -> Diagnostics {
        if req.config_value.is_unknown() {
            return Diagnostics::new();
        }

        let expressions = req.merged(&self.expressions);
        let classified = req.classify(&expressions);
        let mut diagnostics = classified.diagnostics;

        if !classified.unknown.is_empty() {
            return diagnostics;
        }

        let count = classified.configured.len() + usize::from(!req.config_value.is_null());

        if count == 0 && !diagnostics.has_error() {
            diagnostics.push(invalid_attribute_combination(
                req.path.clone(),
                &format!(
                    "No attribute specified when one (and only one) of {} is required",
                    expressions
                ),
            ));
        }

        if count > 1 {
            diagnostics.push(invalid_attribute_combination(
                req.path.clone(),
                &format!(
                    "{} attributes specified when one (and only one) of {} is required",
                    count, expressions
                ),
            ));
        }

        diagnostics
    }
}
