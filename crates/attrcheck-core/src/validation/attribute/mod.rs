//! Validators attached to a single attribute
//!
//! An attribute validator receives the path of the attribute it is declared
//! on together with its value. Relative expressions given to these
//! validators are merged onto that path, so `<.other` addresses a sibling.

use std::fmt::Debug;

use kit::types::config::ConfigReader;
use kit::types::diagnostics::{Diagnostic, Diagnostics};
use kit::types::expression::{Expression, Expressions};
use kit::types::path::Path;
use kit::types::types::Value;

use super::combinators::{All, Any, AnyWithAllWarnings};
use super::presence::{classify, ClassifiedPaths};

mod also_requires;
mod at_least_one_of;
mod conflicts_with;
mod exactly_one_of;

pub use also_requires::{also_requires, AlsoRequires};
pub use at_least_one_of::{at_least_one_of, AtLeastOneOf};
pub use conflicts_with::{conflicts_with, ConflictsWith};
pub use exactly_one_of::{exactly_one_of, ExactlyOneOf};

pub struct AttributeRequest<'a> {
    pub path: Path,
    pub path_expression: Expression,
    pub config_value: Value,
    pub config: &'a dyn ConfigReader,
}

impl<'a> AttributeRequest<'a> {
    /// Build the request for the attribute at `path`, reading its value from
    /// `config`.
    pub fn new(config: &'a dyn ConfigReader, path: Path) -> Result<Self, Diagnostic> {
        let config_value = config.get_attribute(&path)?;
        Ok(AttributeRequest { path_expression: path.expression(), path, config_value, config })
    }

    fn merged(&self, expressions: &Expressions) -> Expressions {
        self.path_expression.merge_expressions(expressions)
    }

    // The attribute itself is always part of the merged expressions.
    fn classify(&self, expressions: &Expressions) -> ClassifiedPaths {
        classify(self.config, expressions, Some(&self.path))
    }
}

pub trait AttributeValidator: Debug + Send + Sync {
    fn description(&self) -> String;

    fn markdown_description(&self) -> String {
        self.description()
    }

    fn validate_attribute(&self, req: &AttributeRequest<'_>) -> Diagnostics;

    fn boxed(self) -> Box<dyn AttributeValidator>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

pub fn all(validators: Vec<Box<dyn AttributeValidator>>) -> All<dyn AttributeValidator> {
    All::new(validators)
}

pub fn any(validators: Vec<Box<dyn AttributeValidator>>) -> Any<dyn AttributeValidator> {
    Any::new(validators)
}

pub fn any_with_all_warnings(
    validators: Vec<Box<dyn AttributeValidator>>,
) -> AnyWithAllWarnings<dyn AttributeValidator> {
    AnyWithAllWarnings::new(validators)
}

fn quoted(path: &Path) -> String {
    format!("{:?}", path.to_string())
}

fn collect<I>(expressions: I) -> Expressions
where
    I: IntoIterator<Item = Expression>,
{
    expressions.into_iter().collect()
}
