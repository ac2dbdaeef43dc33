use std::str::FromStr;

use kit::types::expression::{Expression, ExpressionParseError};

use crate::validation::combinators::{all, any, any_with_all_warnings};
use crate::validation::relationship::{at_least_one_of, conflicting, exactly_one_of, required_together};
use crate::validation::ConfigValidator;

/// One entry of a manifest, written as a single-key map:
/// `exactly_one_of: [image, template]` or `any: [...]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorDefinition {
    ExactlyOneOf(Vec<String>),
    AtLeastOneOf(Vec<String>),
    Conflicting(Vec<String>),
    RequiredTogether(Vec<String>),
    All(Vec<ValidatorDefinition>),
    Any(Vec<ValidatorDefinition>),
    AnyWithAllWarnings(Vec<ValidatorDefinition>),
}

impl ValidatorDefinition {
    pub fn build(&self) -> Result<Box<dyn ConfigValidator>, ExpressionParseError> {
        let validator = match self {
            ValidatorDefinition::ExactlyOneOf(exprs) => exactly_one_of(parse(exprs)?).boxed(),
            ValidatorDefinition::AtLeastOneOf(exprs) => at_least_one_of(parse(exprs)?).boxed(),
            ValidatorDefinition::Conflicting(exprs) => conflicting(parse(exprs)?).boxed(),
            ValidatorDefinition::RequiredTogether(exprs) => required_together(parse(exprs)?).boxed(),
            ValidatorDefinition::All(defs) => all(build_all(defs)?).boxed(),
            ValidatorDefinition::Any(defs) => any(build_all(defs)?).boxed(),
            ValidatorDefinition::AnyWithAllWarnings(defs) => {
                any_with_all_warnings(build_all(defs)?).boxed()
            }
        };
        Ok(validator)
    }
}

pub(crate) fn build_all(
    definitions: &[ValidatorDefinition],
) -> Result<Vec<Box<dyn ConfigValidator>>, ExpressionParseError> {
    definitions.iter().map(|def| def.build()).collect()
}

fn parse(expressions: &[String]) -> Result<Vec<Expression>, ExpressionParseError> {
    expressions.iter().map(|expr| Expression::from_str(expr)).collect()
}
