//! # RULECHECK TYPE DEFINITIONS
//!
//! **CRITICAL**: Runtime type tags for the dynamically typed values under validation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// **JSON TYPE ENUMERATION**
///
/// **PURPOSE**: Element-type tag used by array rules (`array_of`).
/// **GUARANTEE**: Every `JsonValue` maps to exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `"string"`
    String,
    /// `"number"`
    Number,
    /// `"boolean"`
    Boolean,
    /// `"array"`
    Array,
    /// `"object"`
    Object,
    /// `"null"`
    Null,
}

impl JsonType {
    /// **TYPE OF VALUE**
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::String(_) => Self::String,
            JsonValue::Number(_) => Self::Number,
            JsonValue::Bool(_) => Self::Boolean,
            JsonValue::Array(_) => Self::Array,
            JsonValue::Object(_) => Self::Object,
            JsonValue::Null => Self::Null,
        }
    }

    /// Lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// **NUMBER TO JSON** - non-finite floats have no JSON form and map to `null`.
pub(crate) fn json_number(value: f64) -> JsonValue {
    serde_json::Number::from_f64(value)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}
