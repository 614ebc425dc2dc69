//! # WEIGHTED SELECTOR
//!
//! **ALGORITHM**: Cumulative-weight walk. Weights are accumulated in list
//! order and the first entry whose running total meets or exceeds the draw is
//! selected, so earlier entries win ties at bucket boundaries.
//!
//! **NO SELECTION**: Weight sums below the maximum leave a gap; a draw landing
//! there yields `Ok(None)`, which is a valid outcome and not an error.

use super::types::WeightedEntry;
use crate::config::{SelectorConfig, SELECTOR_CONFIG};
use crate::errors::{ErrorKind, ProjectError};
use crate::random::{random_float, seeded_rng};
use crate::types::{json_number, JsonType};
use crate::validation::{validate_array, validate_number, ArrayRules, NumberRules};
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use serde_json::Value as JsonValue;

/// **SELECTION RESULT TYPE ALIAS** - `Ok(None)` is "no selection"
pub type SelectionResult<'a, T> = Result<Option<&'a T>, ProjectError>;

/// Weighted selector owning its random source.
#[derive(Debug, Clone)]
pub struct WeightedSelector<R> {
    rng: R,
    config: SelectorConfig,
}

impl WeightedSelector<ThreadRng> {
    /// **CONSTRUCTOR** - thread-local RNG, process configuration
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for WeightedSelector<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedSelector<StdRng> {
    /// **REPRODUCIBLE CONSTRUCTOR** - same seed, same sequence of selections
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(seeded_rng(seed))
    }
}

impl<R: Rng> WeightedSelector<R> {
    /// **CONSTRUCTOR WITH RNG**
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: SELECTOR_CONFIG.clone(),
        }
    }

    /// Decimal places kept in each draw.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.config.precision = precision;
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// **DRAW** a value in `[0, max_total_weight)`.
    pub fn draw(&mut self) -> Result<f64, ProjectError> {
        random_float(
            0.0,
            self.config.max_total_weight,
            self.config.precision,
            &mut self.rng,
        )
    }

    /// **SELECT** one item.
    ///
    /// **ERRORS**: `EmptyValue` for an empty list, `MissingField` for an entry
    /// without item or weight, `BelowMinimum` for a negative weight,
    /// `InvalidConfiguration` when the weights sum above the maximum.
    pub fn select<'a, T>(&mut self, entries: &'a [WeightedEntry<T>]) -> SelectionResult<'a, T> {
        check_entries(entries, &self.config)?;
        let draw = self.draw()?;
        Ok(walk(entries, draw))
    }

    /// **SELECT FROM JSON** - `[{"item": ..., "weight": ...}, ...]`
    ///
    /// A `null` item counts as missing.
    pub fn select_json<'a>(&mut self, entries: &'a JsonValue) -> SelectionResult<'a, JsonValue> {
        let typed = entries_from_json(entries)?;
        Ok(self.select(&typed)?.copied())
    }
}

/// **SELECT WITH A FIXED DRAW**
///
/// Same checks as [`WeightedSelector::select`]; the outcome is a pure function
/// of `entries` and `draw`.
pub fn select_with_draw<T>(entries: &[WeightedEntry<T>], draw: f64) -> SelectionResult<'_, T> {
    let config = &*SELECTOR_CONFIG;
    check_entries(entries, config)?;
    validate_number(
        &json_number(draw),
        &NumberRules::new()
            .alias("Draw")
            .min(0.0)
            .max_value(config.max_total_weight),
    )?;
    Ok(walk(entries, draw))
}

/// Validates shape and total weight.
fn check_entries<T>(
    entries: &[WeightedEntry<T>],
    config: &SelectorConfig,
) -> Result<(), ProjectError> {
    if entries.is_empty() {
        return Err(ProjectError::validation(ErrorKind::EmptyValue, "Entries cannot be empty"));
    }

    let mut total = 0.0;
    for (index, entry) in entries.iter().enumerate() {
        if entry.item.is_none() {
            return Err(missing_field(index, "item"));
        }
        let weight = entry.weight.ok_or_else(|| missing_field(index, "weight"))?;
        validate_number(
            &json_number(weight),
            &NumberRules::new()
                .alias(format!("Weight of entry {}", index))
                .min(0.0),
        )?;
        total += weight;
    }

    if total > config.weight_limit() {
        return Err(ProjectError::selection(
            ErrorKind::InvalidConfiguration,
            format!("Total weight {} exceeds {}", total, config.max_total_weight),
        ));
    }
    Ok(())
}

fn missing_field(index: usize, field: &str) -> ProjectError {
    ProjectError::selection(
        ErrorKind::MissingField,
        format!("Entry at index {} is missing field '{}'", index, field),
    )
}

fn walk<T>(entries: &[WeightedEntry<T>], draw: f64) -> Option<&T> {
    let mut cumulative = 0.0;
    for (index, entry) in entries.iter().enumerate() {
        cumulative += entry.weight.unwrap_or(0.0);
        if cumulative >= draw {
            log::debug!("draw {} selected entry {}", draw, index);
            return entry.item.as_ref();
        }
    }
    log::debug!("draw {} above cumulative weight {}: no selection", draw, cumulative);
    None
}

fn entries_from_json(entries: &JsonValue) -> Result<Vec<WeightedEntry<&JsonValue>>, ProjectError> {
    validate_array(
        entries,
        &ArrayRules::new().alias("Entries").of_type(JsonType::Object),
    )?;

    let mut typed = Vec::new();
    for (index, entry) in entries.as_array().into_iter().flatten().enumerate() {
        let item = entry.get("item").filter(|item| !item.is_null());
        let weight = match entry.get("weight").filter(|weight| !weight.is_null()) {
            Some(weight) => {
                validate_number(
                    weight,
                    &NumberRules::new().alias(format!("Weight of entry {}", index)),
                )?;
                weight.as_f64()
            }
            None => None,
        };
        typed.push(WeightedEntry { item, weight });
    }
    Ok(typed)
}
