//! Input types for weighted selection.

use serde::{Deserialize, Serialize};

/// **WEIGHTED ENTRY**
///
/// **PURPOSE**: One candidate of a weighted selection.
/// Fields are optional because entries often come from loosely typed input;
/// a missing field is reported by the selector as `MissingField`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    /// **CANDIDATE VALUE**
    pub item: Option<T>,

    /// **PERCENTAGE WEIGHT** in `0..=100`
    pub weight: Option<f64>,
}

impl<T> WeightedEntry<T> {
    /// **CONSTRUCTOR** - complete entry
    pub fn new(item: T, weight: f64) -> Self {
        Self {
            item: Some(item),
            weight: Some(weight),
        }
    }
}
