//! Flat re-export of the public call surface.

pub use crate::config::{SelectorConfig, SELECTOR_CONFIG};
pub use crate::errors::{ErrorKind, ProjectError};
pub use crate::random::{random_float, seeded_rng};
pub use crate::selection::{select, select_json, select_with_draw, WeightedEntry, WeightedSelector};
pub use crate::types::JsonType;
pub use crate::validation::{
    validate_array, validate_email, validate_name, validate_number, validate_string, ArrayRules,
    NumberRules, StringRules, Validator,
};
