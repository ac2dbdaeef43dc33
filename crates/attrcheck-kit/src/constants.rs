pub const INVALID_ATTRIBUTE_COMBINATION: &str = "Invalid Attribute Combination";
pub const MISSING_ATTRIBUTE_CONFIGURATION: &str = "Missing Attribute Configuration";
pub const INVALID_PATH_EXPRESSION_FOR_SCHEMA: &str = "Invalid Path Expression for Schema";
pub const INVALID_PATH_EXPRESSION_FOR_SCHEMA_DATA: &str = "Invalid Path Expression for Schema Data";
pub const INVALID_ATTRIBUTE_PATH: &str = "Invalid Attribute Path";
