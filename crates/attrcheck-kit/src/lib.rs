#[macro_use]
extern crate serde_derive;

#[macro_use]
mod macros;
pub mod constants;

pub use indexmap;
pub use indoc::indoc;
pub use serde;
pub use serde_json;

pub mod helpers;
pub mod types;

pub use types::config::{Config, ConfigReader, PathMatches};
pub use types::diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use types::expression::{Expression, ExpressionParseError, ExpressionStep, Expressions};
pub use types::path::{Path, PathStep};
pub use types::schema::Schema;
pub use types::types::{Presence, Type, Value};
