#[macro_use]
extern crate serde_derive;

#[macro_use]
pub extern crate attrcheck_kit as kit;

pub mod manifest;
pub mod validation;

#[cfg(test)]
mod tests;

pub use manifest::{ManifestError, ValidatorDefinition, ValidatorManifest};
pub use validation::attribute::{
    also_requires, at_least_one_of as attribute_at_least_one_of, conflicts_with,
    exactly_one_of as attribute_exactly_one_of, AttributeRequest, AttributeValidator,
};
pub use validation::combinators::{all, any, any_with_all_warnings, All, Any, AnyWithAllWarnings};
pub use validation::kinds::*;
pub use validation::relationship::{
    at_least_one_of, conflicting, exactly_one_of, required_together, AtLeastOneOf, Conflicting,
    ExactlyOneOf, RequiredTogether,
};
pub use validation::ConfigValidator;
