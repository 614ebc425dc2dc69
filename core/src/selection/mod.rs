//! Weighted random selection guarded by the validator.

pub mod selector;
pub mod types;

pub use selector::{select_with_draw, SelectionResult, WeightedSelector};
pub use types::WeightedEntry;

use crate::errors::ProjectError;
use serde_json::Value as JsonValue;

/// **SELECT** with a fresh thread-RNG selector.
pub fn select<T>(entries: &[WeightedEntry<T>]) -> SelectionResult<'_, T> {
    WeightedSelector::new().select(entries)
}

/// **SELECT FROM JSON** with a fresh thread-RNG selector.
pub fn select_json(entries: &JsonValue) -> Result<Option<&JsonValue>, ProjectError> {
    WeightedSelector::new().select_json(entries)
}
