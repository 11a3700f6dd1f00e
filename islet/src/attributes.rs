//! Attribute values of features and the schema shared by a collection.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Attribute record of a feature: field name to value.
pub type Attributes = HashMap<String, AttributeValue>;

/// Scalar attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Text value.
    String(String),
    /// Floating point number.
    Double(f64),
    /// Signed integer.
    Int64(i64),
    /// Unsigned integer that does not fit into `i64`.
    Uint64(u64),
    /// Boolean value.
    Bool(bool),
    /// Missing value.
    Null,
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::String(v) => write!(f, "{v}"),
            AttributeValue::Double(v) => write!(f, "{v}"),
            AttributeValue::Int64(v) => write!(f, "{v}"),
            AttributeValue::Uint64(v) => write!(f, "{v}"),
            AttributeValue::Bool(v) => write!(f, "{v}"),
            AttributeValue::Null => write!(f, "<NONE>"),
        }
    }
}

impl AttributeValue {
    /// Converts a JSON value into an attribute value. Returns `None` for arrays and objects.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        Some(match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(v) => AttributeValue::Bool(*v),
            serde_json::Value::String(v) => AttributeValue::String(v.clone()),
            serde_json::Value::Number(v) => {
                if let Some(v) = v.as_i64() {
                    AttributeValue::Int64(v)
                } else if let Some(v) = v.as_u64() {
                    AttributeValue::Uint64(v)
                } else {
                    AttributeValue::Double(v.as_f64()?)
                }
            }
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => return None,
        })
    }

    /// Converts the value into JSON. Non-finite doubles become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            AttributeValue::String(v) => serde_json::Value::String(v.clone()),
            AttributeValue::Double(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            AttributeValue::Int64(v) => serde_json::Value::from(*v),
            AttributeValue::Uint64(v) => serde_json::Value::from(*v),
            AttributeValue::Bool(v) => serde_json::Value::Bool(*v),
            AttributeValue::Null => serde_json::Value::Null,
        }
    }
}

/// Ordered list of attribute fields of a feature collection.
///
/// The schema is structural: it is kept as is through filtering, even if no remaining feature has a value for some
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    /// Creates a new schema. Repeated field names are ignored.
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut schema = Self::default();
        for field in fields {
            schema.push(field.into());
        }

        schema
    }

    /// Adds a field to the end of the schema, if the schema does not have it yet.
    pub fn push(&mut self, field: String) {
        if !self.contains(&field) {
            self.fields.push(field);
        }
    }

    /// Field names in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Position of the field in the schema.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Whether the schema has the field.
    pub fn contains(&self, field: &str) -> bool {
        self.index_of(field).is_some()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
