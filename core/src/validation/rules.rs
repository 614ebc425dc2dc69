//! # RULE CONFIGURATION
//!
//! **PURPOSE**: One explicit rule set per primitive kind.
//! **GUARANTEE**: Unset constraints are `None`, never a falsy sentinel, so a
//! minimum of `0` is still enforced.

use crate::types::JsonType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// **STRING RULES**
///
/// Defaults: empty strings rejected, no length bounds, alias `"String"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringRules {
    /// **ALLOW EMPTY STRINGS**
    pub can_empty: bool,

    /// **MINIMUM LENGTH** in characters
    pub min_chars: Option<usize>,

    /// **MAXIMUM LENGTH** in characters
    pub max_chars: Option<usize>,

    /// **DISPLAY NAME** used in error messages
    pub alias: String,

    /// **SINGLE-CHARACTER ALLOW-LIST**, consulted only when `max_chars == Some(1)`
    pub allowed_chars: BTreeSet<String>,
}

impl Default for StringRules {
    fn default() -> Self {
        Self {
            can_empty: false,
            min_chars: None,
            max_chars: None,
            alias: "String".to_string(),
            allowed_chars: BTreeSet::new(),
        }
    }
}

impl StringRules {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the empty string.
    pub fn allow_empty(mut self) -> Self {
        self.can_empty = true;
        self
    }

    /// Minimum length in characters.
    pub fn min_chars(mut self, min: usize) -> Self {
        self.min_chars = Some(min);
        self
    }

    /// Maximum length in characters.
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Display name used in error messages.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Add characters to the single-character allow-list.
    pub fn allow_chars<I, S>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_chars.extend(chars.into_iter().map(Into::into));
        self
    }
}

/// **NUMBER RULES**
///
/// Defaults: no bounds, no allow-list, alias `"Number"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberRules {
    /// **INCLUSIVE LOWER BOUND**
    pub min: Option<f64>,

    /// **INCLUSIVE UPPER BOUND**
    pub max_value: Option<f64>,

    /// **DISPLAY NAME** used in error messages
    pub alias: String,

    /// **ALLOW-LIST** - empty means any number
    pub allowed_nums: Vec<f64>,

    /// **ALLOW-LIST DISPLAY TEXT** - defaults to the allowed values joined by `", "`
    pub allowed_nums_alias: Option<String>,
}

impl Default for NumberRules {
    fn default() -> Self {
        Self {
            min: None,
            max_value: None,
            alias: "Number".to_string(),
            allowed_nums: Vec::new(),
            allowed_nums_alias: None,
        }
    }
}

impl NumberRules {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound; `0.0` is a real bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Display name used in error messages.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Add values to the allow-list.
    pub fn allow_nums(mut self, nums: impl IntoIterator<Item = f64>) -> Self {
        self.allowed_nums.extend(nums);
        self
    }

    /// Text naming the allow-list in `NotAllowed` messages.
    pub fn allowed_nums_alias(mut self, alias: impl Into<String>) -> Self {
        self.allowed_nums_alias = Some(alias.into());
        self
    }

    /// Text naming the allowed values in a `NotAllowed` message.
    pub(crate) fn allowed_description(&self) -> String {
        match &self.allowed_nums_alias {
            Some(alias) => alias.clone(),
            None => self
                .allowed_nums
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// **ARRAY RULES**
///
/// Defaults: empty arrays rejected, no length bounds, any element type,
/// alias `"Array"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayRules {
    /// **ALLOW EMPTY ARRAYS**
    pub can_empty: bool,

    /// **MINIMUM ELEMENT COUNT**
    pub min_elements: Option<usize>,

    /// **MAXIMUM ELEMENT COUNT**
    pub max_elements: Option<usize>,

    /// **PERMITTED ELEMENT TYPES** - empty means unconstrained
    pub array_of: BTreeSet<JsonType>,

    /// **DISPLAY NAME** used in error messages
    pub alias: String,
}

impl Default for ArrayRules {
    fn default() -> Self {
        Self {
            can_empty: false,
            min_elements: None,
            max_elements: None,
            array_of: BTreeSet::new(),
            alias: "Array".to_string(),
        }
    }
}

impl ArrayRules {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the empty array.
    pub fn allow_empty(mut self) -> Self {
        self.can_empty = true;
        self
    }

    /// Minimum element count.
    pub fn min_elements(mut self, min: usize) -> Self {
        self.min_elements = Some(min);
        self
    }

    /// Maximum element count.
    pub fn max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Permit elements of `json_type`.
    pub fn of_type(mut self, json_type: JsonType) -> Self {
        self.array_of.insert(json_type);
        self
    }

    /// Display name used in error messages.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }
}
