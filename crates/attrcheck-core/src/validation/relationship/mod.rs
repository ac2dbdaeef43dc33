//! Config-level relationship validators
//!
//! Each validator holds the expressions it was built with and reports them
//! verbatim in its diagnostics.

mod at_least_one_of;
mod conflicting;
mod exactly_one_of;
mod required_together;

pub use at_least_one_of::{at_least_one_of, AtLeastOneOf};
pub use conflicting::{conflicting, Conflicting};
pub use exactly_one_of::{exactly_one_of, ExactlyOneOf};
pub use required_together::{required_together, RequiredTogether};
