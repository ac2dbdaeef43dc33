use kit::helpers::diag::invalid_attribute_combination;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use super::{collect, quoted, AttributeRequest, AttributeValidator};

/// When the attribute is configured, all of the others must be too.
#[derive(Clone, Debug, PartialEq)]
pub struct AlsoRequires {
    expressions: Expressions,
}

pub fn also_requires<I>(expressions: I) -> AlsoRequires
where
    I: IntoIterator<Item = Expression>,
{
    AlsoRequires { expressions: collect(expressions) }
}

impl AttributeValidator for AlsoRequires {
    fn description(&self) -> String {
        format!("Ensure that if an attribute is set, also these are set: {}", self.expressions)
    }

    fn validate_attribute(&self, req: &AttributeRequest<'_>) -> Diagnostics {
        if req.config_value.is_null() || req.config_value.is_unknown() {
            return Diagnostics::new();
        }

        let classified = req.classify(&req.merged(&self.expressions));
        let mut diagnostics = classified.diagnostics;

        // Unknown siblings are left out of the comparison
        for other in classified.null.iter() {
            diagnostics.push(invalid_attribute_combination(
                req.path.clone(),
                &format!(
                    "Attribute {} must be specified when {} is specified",
                    quoted(other),
                    quoted(&req.path)
                ),
            ));
        }

        diagnostics
    }
}
