//! Builders for test configurations

mod config_builder;

pub use config_builder::ConfigBuilder;
