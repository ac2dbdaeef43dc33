pub mod assertions;
pub mod builders;
mod validators;

pub use builders::ConfigBuilder;
pub use validators::{ErrorValidator, WarningValidator};

// Re-export common types for convenience
pub use attrcheck_kit::types::diagnostics::{Diagnostic, Diagnostics};
pub use attrcheck_kit::types::types::Value;
