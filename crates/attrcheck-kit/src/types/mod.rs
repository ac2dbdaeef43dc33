pub mod config;
pub mod diagnostic_types;
pub mod diagnostics;
pub mod expression;
pub mod path;
pub mod schema;
pub mod types;

#[cfg(test)]
mod tests;
