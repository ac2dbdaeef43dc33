use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A configuration value as handed over by the host framework.
///
/// `Unknown` stands for a value that will only be determined at apply time:
/// whether it ends up null or set cannot be decided during validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Unknown,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(IndexMap<String, Value>),
    Object(IndexMap<String, Value>),
}

impl PartialEq<Value> for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unknown, Value::Unknown) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
            (Value::Integer(lhs), Value::Integer(rhs)) => lhs == rhs,
            (Value::Float(lhs), Value::Float(rhs)) => lhs == rhs,
            (Value::String(lhs), Value::String(rhs)) => lhs == rhs,
            (Value::List(lhs), Value::List(rhs)) => lhs == rhs,
            (Value::Set(lhs), Value::Set(rhs)) => {
                lhs.len() == rhs.len() && lhs.iter().all(|v| rhs.contains(v))
            }
            // IndexMap equality ignores insertion order
            (Value::Map(lhs), Value::Map(rhs)) => lhs == rhs,
            (Value::Object(lhs), Value::Object(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

/// Presence of a configuration value, as seen by relationship validators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Will be determined later; may end up null or set.
    Unknown,
    /// Definitively absent.
    Null,
    /// Definitively set.
    Known,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presence::Unknown => write!(f, "unknown"),
            Presence::Null => write!(f, "null"),
            Presence::Known => write!(f, "known"),
        }
    }
}

impl Value {
    pub fn unknown() -> Value {
        Value::Unknown
    }
    pub fn null() -> Value {
        Value::Null
    }
    pub fn bool(value: bool) -> Value {
        Value::Bool(value)
    }
    pub fn integer(value: i64) -> Value {
        Value::Integer(value)
    }
    pub fn float(value: f64) -> Value {
        Value::Float(value)
    }
    pub fn string(value: impl Into<String>) -> Value {
        Value::String(value.into())
    }
    pub fn list(values: Vec<Value>) -> Value {
        Value::List(values)
    }
    pub fn set(values: Vec<Value>) -> Value {
        Value::Set(values)
    }
    pub fn map(entries: IndexMap<String, Value>) -> Value {
        Value::Map(entries)
    }
    pub fn object(attributes: IndexMap<String, Value>) -> Value {
        Value::Object(attributes)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Classify this value. A collection or object is `Known` even when some
    /// of its elements are unknown.
    pub fn presence(&self) -> Presence {
        match self {
            Value::Unknown => Presence::Unknown,
            Value::Null => Presence::Null,
            _ => Presence::Known,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn get_type_name(&self) -> &'static str {
        match self {
            Value::Unknown => "unknown",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "]")
        }
        fn write_entries(f: &mut fmt::Formatter<'_>, entries: &IndexMap<String, Value>) -> fmt::Result {
            write!(f, "{{")?;
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, "}}")
        }

        match self {
            Value::Unknown => write!(f, "<unknown>"),
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{:?}", value),
            Value::List(items) | Value::Set(items) => write_items(f, items),
            Value::Map(entries) | Value::Object(entries) => write_entries(f, entries),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

/// Converts plain JSON into a value. JSON arrays become lists and JSON
/// objects become objects; there is no JSON spelling for `Unknown`.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// Attribute types understood by the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Bool,
    Number,
    String,
    /// Any value; paths cannot descend into it.
    Dynamic,
    List(Box<Type>),
    Set(Box<Type>),
    Map(Box<Type>),
    Object(IndexMap<String, Type>),
}

impl Type {
    pub fn list(element: Type) -> Type {
        Type::List(Box::new(element))
    }
    pub fn set(element: Type) -> Type {
        Type::Set(Box::new(element))
    }
    pub fn map(element: Type) -> Type {
        Type::Map(Box::new(element))
    }
    pub fn object(attributes: Vec<(&str, Type)>) -> Type {
        Type::Object(attributes.into_iter().map(|(k, t)| (k.to_string(), t)).collect())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => write!(f, "bool"),
            Type::Number => write!(f, "number"),
            Type::String => write!(f, "string"),
            Type::Dynamic => write!(f, "dynamic"),
            Type::List(element) => write!(f, "list({})", element),
            Type::Set(element) => write!(f, "set({})", element),
            Type::Map(element) => write!(f, "map({})", element),
            Type::Object(attributes) => {
                write!(f, "object({{")?;
                for (i, (name, typing)) in attributes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, typing)?;
                }
                write!(f, "}})")
            }
        }
    }
}
