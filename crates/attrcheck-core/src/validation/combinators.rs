//! Validators composing other validators
//!
//! The combinators are generic over the kind of validator they hold, so the
//! same aggregation policies serve config-level and attribute-level
//! validators.

use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;

use super::attribute::{AttributeRequest, AttributeValidator};
use super::ConfigValidator;

/// Logical AND: every sub-validator runs and all diagnostics are kept.
#[derive(Debug)]
pub struct All<V: ?Sized> {
    validators: Vec<Box<V>>,
}

/// Logical OR: the first sub-validator without errors wins and only its
/// diagnostics are returned.
#[derive(Debug)]
pub struct Any<V: ?Sized> {
    validators: Vec<Box<V>>,
}

/// Logical OR that runs every sub-validator. When one of them passes, the
/// warnings of all of them are returned.
#[derive(Debug)]
pub struct AnyWithAllWarnings<V: ?Sized> {
    validators: Vec<Box<V>>,
}

macro_rules! impl_combinator {
    ($combinator:ident, $policy:ident, $prefix:expr) => {
        impl<V: ?Sized> $combinator<V> {
            pub fn new(validators: Vec<Box<V>>) -> Self {
                $combinator { validators }
            }

            pub fn validators(&self) -> &[Box<V>] {
                &self.validators
            }
        }

        impl ConfigValidator for $combinator<dyn ConfigValidator> {
            fn description(&self) -> String {
                describe($prefix, self.validators.iter().map(|v| v.description()))
            }

            fn markdown_description(&self) -> String {
                describe($prefix, self.validators.iter().map(|v| v.markdown_description()))
            }

            fn validate(&self, config: &dyn ConfigReader) -> Diagnostics {
                $policy(self.validators.iter().map(|v| v.validate(config)))
            }
        }

        impl AttributeValidator for $combinator<dyn AttributeValidator> {
            fn description(&self) -> String {
                describe($prefix, self.validators.iter().map(|v| v.description()))
            }

            fn markdown_description(&self) -> String {
                describe($prefix, self.validators.iter().map(|v| v.markdown_description()))
            }

            fn validate_attribute(&self, req: &AttributeRequest<'_>) -> Diagnostics {
                $policy(self.validators.iter().map(|v| v.validate_attribute(req)))
            }
        }
    };
}

const ALL_PREFIX: &str = "Value must satisfy all of the validations";
const ANY_PREFIX: &str = "Value must satisfy at least one of the validations";

impl_combinator!(All, all_of, ALL_PREFIX);
impl_combinator!(Any, first_passing, ANY_PREFIX);
impl_combinator!(AnyWithAllWarnings, any_passing_with_all_warnings, ANY_PREFIX);

pub fn all(validators: Vec<Box<dyn ConfigValidator>>) -> All<dyn ConfigValidator> {
    All::new(validators)
}

pub fn any(validators: Vec<Box<dyn ConfigValidator>>) -> Any<dyn ConfigValidator> {
    Any::new(validators)
}

pub fn any_with_all_warnings(
    validators: Vec<Box<dyn ConfigValidator>>,
) -> AnyWithAllWarnings<dyn ConfigValidator> {
    AnyWithAllWarnings::new(validators)
}

fn describe<I: Iterator<Item = String>>(prefix: &str, descriptions: I) -> String {
    format!("{}: {}", prefix, descriptions.collect::<Vec<_>>().join(" + "))
}

fn all_of<I: Iterator<Item = Diagnostics>>(runs: I) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for run in runs {
        diagnostics.append(run);
    }
    diagnostics
}

// `runs` is lazy: validators after the winner are never evaluated.
fn first_passing<I: Iterator<Item = Diagnostics>>(runs: I) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    for (index, run) in runs.enumerate() {
        if !run.has_error() {
            log::debug!("any: validator #{} passed, discarding {} earlier diagnostic(s)", index, diagnostics.len());
            return run;
        }
        diagnostics.append(run);
    }
    diagnostics
}

fn any_passing_with_all_warnings<I: Iterator<Item = Diagnostics>>(runs: I) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let mut passed = false;
    for run in runs {
        if !run.has_error() {
            passed = true;
        }
        diagnostics.append(run);
    }
    if passed {
        diagnostics.warnings()
    } else {
        diagnostics
    }
}
