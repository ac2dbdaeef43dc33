//! Cross-attribute configuration validation
//!
//! Validators receive a configuration through the [`ConfigReader`] contract,
//! resolve their path expressions against it, classify what they find as
//! known, null or unknown, and report rule violations as diagnostics. They
//! never fail and never keep state between calls.

use std::fmt::Debug;

use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;

pub mod attribute;
pub mod combinators;
pub mod kinds;
pub mod presence;
pub mod relationship;

/// A validator applied to a whole configuration (provider, resource, data
/// source, ...).
pub trait ConfigValidator: Debug + Send + Sync {
    /// Plain text summary of the rule, used for documentation.
    fn description(&self) -> String;

    /// Markdown summary of the rule, used for documentation.
    fn markdown_description(&self) -> String {
        self.description()
    }

    fn validate(&self, config: &dyn ConfigReader) -> Diagnostics;

    fn boxed(self) -> Box<dyn ConfigValidator>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}
