use kit::helpers::diag::invalid_attribute_combination;
use kit::types::diagnostics::Diagnostics;
use kit::types::expression::{Expression, Expressions};

use super::{collect, quoted, AttributeRequest, AttributeValidator};

/// When the attribute is configured, none of the others may be.
#[derive(Clone, Debug, PartialEq)]
pub struct ConflictsWith {
    expressions: Expressions,
}

pub fn conflicts_with<I>(expressions: I) -> ConflictsWith
where
    I: IntoIterator<Item = Expression>,
{
    ConflictsWith { expressions: collect(expressions) }
}

impl AttributeValidator for ConflictsWith {
    fn description(&self) -> String {
        format!("Ensure that if an attribute is set, these are not set: {}", self.expressions)
    }

    fn validate_attribute(&self, req: &AttributeRequest<'_>) -> Diagnostics {
        if req.config_value.is_null() || req.config_value.is_unknown() {
            return Diagnostics::new();
        }

        let classified = req.classify(&req.merged(&self.expressions));
        let mut diagnostics = classified.diagnostics;

        // Unknown siblings are left out of the comparison
        for other in classified.configured.iter() {
            diagnostics.push(invalid_attribute_combination(
                req.path.clone(),
                &format!(
                    "Attribute {} cannot be specified when {} is specified",
                    quoted(other),
                    quoted(&req.path)
                ),
            ));
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::{config, relative};
    use kit::types::path::Path;
    use kit::types::types::Value;
    use test_case::test_case;

    #[test_case(Value::null(), Value::from("x"); "self null")]
    #[test_case(Value::unknown(), Value::from("x"); "self unknown")]
    #[test_case(Value::from("x"), Value::null(); "other null")]
    #[test_case(Value::from("x"), Value::unknown(); "other unknown")]
    fn passes(a: Value, b: Value) {
        let config = config(&[("a", a), ("b", b)]);
        let req = AttributeRequest::new(&config, Path::root("a")).unwrap();
        assert!(conflicts_with(relative(&["b"])).validate_attribute(&req).is_empty());
    }

    #[test]
    fn reports_each_conflicting_attribute() {
        let config = config(&[("a", Value::from("x")), ("b", Value::from("y")), ("c", Value::from("z"))]);
        let req = AttributeRequest::new(&config, Path::root("a")).unwrap();
        let diagnostics = conflicts_with(relative(&["b", "c"])).validate_attribute(&req);
        let details: Vec<_> = diagnostics.iter().map(|d| d.detail.as_str()).collect();
        assert_eq!(
            details,
            vec![
                "Attribute \"b\" cannot be specified when \"a\" is specified",
                "Attribute \"c\" cannot be specified when \"a\" is specified",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.path == Some(Path::root("a"))));
    }

    #[test_case(Value::unknown(), Value::from("y"); "unknown before the conflict")]
    #[test_case(Value::from("y"), Value::unknown(); "unknown after the conflict")]
    fn unknown_siblings_do_not_hide_conflicts(b: Value, c: Value) {
        let config = config(&[("a", Value::from("x")), ("b", b), ("c", c)]);
        let req = AttributeRequest::new(&config, Path::root("a")).unwrap();
        let diagnostics = conflicts_with(relative(&["b", "c"])).validate_attribute(&req);
        assert_eq!(diagnostics.error_count(), 1);
        assert!(diagnostics.as_slice()[0].detail.contains("cannot be specified when \"a\" is specified"));
    }
}
