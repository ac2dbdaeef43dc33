use attrcheck_kit::indexmap::IndexMap;
use attrcheck_kit::types::config::Config;
use attrcheck_kit::types::schema::Schema;
use attrcheck_kit::types::types::{Type, Value};

/// Builder for reference configurations
///
/// Every attribute added declares itself in the schema, so the built
/// configuration always conforms to it.
///
/// ```rust
/// use attrcheck_test_utils::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .string("image", "ubuntu")
///     .null("template")
///     .unknown("user")
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    schema: Schema,
    values: IndexMap<String, Value>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with type `typing` and set it to `value`.
    pub fn attribute(mut self, name: &str, typing: Type, value: Value) -> Self {
        self.schema = self.schema.with_attribute(name, typing);
        self.values.insert(name.to_string(), value);
        self
    }

    /// Declare `name` without setting it. The built configuration holds null.
    pub fn declare(mut self, name: &str, typing: Type) -> Self {
        self.schema = self.schema.with_attribute(name, typing);
        self
    }

    pub fn string(self, name: &str, value: &str) -> Self {
        self.attribute(name, Type::String, Value::from(value))
    }

    pub fn null(self, name: &str) -> Self {
        self.attribute(name, Type::String, Value::null())
    }

    pub fn unknown(self, name: &str) -> Self {
        self.attribute(name, Type::String, Value::unknown())
    }

    pub fn build(self) -> Config {
        Config::new(self.schema, Value::object(self.values))
    }
}
