// Field value object
// The logical value carried by an obfuscated inventory field

use serde::{Deserialize, Serialize};

/// Closed set of values a sensitive field may carry before encoding.
///
/// Serialized untagged, so `Text("AS-1")` becomes the JSON string `"AS-1"`
/// and `Number(3)` becomes `3`. Numbers use `serde_json::Number`, which is
/// always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// `Null` and the empty string are the "no value" cases.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(value) => value.is_empty(),
            _ => false,
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(value) => value.clone(),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}
