//! Constructors for the diagnostics shared by every validator.
//!
//! Summaries and details are asserted verbatim by consumers, so all of them
//! are produced here.

use crate::constants::{
    INVALID_ATTRIBUTE_COMBINATION, INVALID_ATTRIBUTE_PATH, INVALID_PATH_EXPRESSION_FOR_SCHEMA,
    INVALID_PATH_EXPRESSION_FOR_SCHEMA_DATA, MISSING_ATTRIBUTE_CONFIGURATION,
};
use crate::types::diagnostics::Diagnostic;
use crate::types::expression::Expression;
use crate::types::path::Path;

/// Rule violation between several attributes, attributed to `path`.
pub fn invalid_attribute_combination(path: Path, description: &str) -> Diagnostic {
    Diagnostic::attribute_error(path, INVALID_ATTRIBUTE_COMBINATION, capitalize(description))
}

/// None of the attributes a rule requires is configured.
pub fn missing_attribute_configuration(description: &str) -> Diagnostic {
    Diagnostic::error(MISSING_ATTRIBUTE_CONFIGURATION, capitalize(description))
}

pub fn invalid_path_expression_for_schema(expression: &Expression) -> Diagnostic {
    Diagnostic::error(
        INVALID_PATH_EXPRESSION_FOR_SCHEMA,
        format!(
            "The provider unexpectedly provided a path expression that does not match the current schema. \
            This can happen if the path expression does not correctly follow the schema in structure or types. \
            Please report this to the provider developers.\n\nPath Expression: {}",
            expression
        ),
    )
}

pub fn invalid_path_expression_for_schema_data(expression: &Expression) -> Diagnostic {
    Diagnostic::warning(
        INVALID_PATH_EXPRESSION_FOR_SCHEMA_DATA,
        format!(
            "The provider unexpectedly matched no paths with the given path expression and current schema data. \
            This can happen if the path expression does not correctly follow the schema in structure or types. \
            Please report this to the provider developers.\n\nPath Expression: {}",
            expression
        ),
    )
}

pub fn invalid_attribute_path(path: &Path, reason: &str) -> Diagnostic {
    Diagnostic::attribute_error(
        path.clone(),
        INVALID_ATTRIBUTE_PATH,
        format!(
            "The provider unexpectedly requested an attribute path that does not follow the configuration data: {}. \
            Please report this to the provider developers.\n\nPath: {}",
            reason, path
        ),
    )
}

/// Upper-case the first character of a description.
pub fn capitalize(description: &str) -> String {
    let mut chars = description.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
