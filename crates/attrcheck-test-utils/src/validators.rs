use attrcheck_core::validation::attribute::{AttributeRequest, AttributeValidator};
use attrcheck_core::validation::ConfigValidator;
use attrcheck_kit::types::config::ConfigReader;
use attrcheck_kit::types::diagnostics::{Diagnostic, Diagnostics};

/// Always reports one warning, never an error.
#[derive(Clone, Debug)]
pub struct WarningValidator {
    summary: String,
}

/// Always reports one error.
#[derive(Clone, Debug)]
pub struct ErrorValidator {
    summary: String,
}

macro_rules! impl_fixed_validator {
    ($name:ident, $constructor:ident, $label:expr) => {
        impl $name {
            pub fn new(summary: &str) -> Self {
                $name { summary: summary.to_string() }
            }

            pub fn into_config_validator(self) -> Box<dyn ConfigValidator> {
                Box::new(self)
            }

            pub fn into_attribute_validator(self) -> Box<dyn AttributeValidator> {
                Box::new(self)
            }

            fn diagnostics(&self) -> Diagnostics {
                Diagnostic::$constructor(self.summary.clone(), "").into()
            }
        }

        impl ConfigValidator for $name {
            fn description(&self) -> String {
                format!("{}: {}", $label, self.summary)
            }

            fn validate(&self, _config: &dyn ConfigReader) -> Diagnostics {
                self.diagnostics()
            }
        }

        impl AttributeValidator for $name {
            fn description(&self) -> String {
                format!("{}: {}", $label, self.summary)
            }

            fn validate_attribute(&self, _req: &AttributeRequest<'_>) -> Diagnostics {
                self.diagnostics()
            }
        }
    };
}

impl_fixed_validator!(WarningValidator, warning, "always warns");
impl_fixed_validator!(ErrorValidator, error, "always fails");
