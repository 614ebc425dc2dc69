//! Uniform random floats with a fixed decimal precision.
//!
//! The caller owns the RNG. For reproducible draws use [`seeded_rng`].

use crate::config::MAX_PRECISION;
use crate::errors::{ErrorKind, ProjectError};
use crate::types::json_number;
use crate::validation::{validate_number, NumberRules};
use rand::{Rng, SeedableRng};
use serde_json::Value as JsonValue;

/// Deterministic RNG for a given seed.
pub fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    rand::rngs::StdRng::seed_from_u64(seed)
}

/// Draws a value in `[min, max)` rounded down to `precision` decimal places.
///
/// # Errors
/// - `TypeMismatch` if `min` or `max` is not finite
/// - `AboveMaximum` if `precision` exceeds 15
/// - `InvalidConfiguration` if `min >= max` or `max - min` overflows
///
/// # Examples
/// ```
/// use rulecheck::random::{random_float, seeded_rng};
/// let mut rng = seeded_rng(7);
/// let x = random_float(0.0, 100.0, 2, &mut rng).unwrap();
/// assert!((0.0..100.0).contains(&x));
/// assert_eq!((x * 100.0).round() / 100.0, x);
/// ```
pub fn random_float<R: Rng>(
    min: f64,
    max: f64,
    precision: u32,
    rng: &mut R,
) -> Result<f64, ProjectError> {
    validate_number(&json_number(min), &NumberRules::new().alias("Minimum"))?;
    validate_number(&json_number(max), &NumberRules::new().alias("Maximum"))?;
    validate_number(
        &JsonValue::from(precision),
        &NumberRules::new()
            .alias("Precision")
            .max_value(f64::from(MAX_PRECISION)),
    )?;
    if min >= max {
        return Err(ProjectError::selection(
            ErrorKind::InvalidConfiguration,
            format!("Minimum {} must be less than maximum {}", min, max),
        ));
    }

    if !(max - min).is_finite() {
        return Err(ProjectError::selection(
            ErrorKind::InvalidConfiguration,
            format!("Range {}..{} is too wide to sample", min, max),
        ));
    }

    let scale = 10_f64.powi(precision as i32);
    let raw = rng.random_range(min..max);
    let scaled = raw * scale;
    if !scaled.is_finite() {
        // no representable step at this magnitude; `raw` is already in range
        return Ok(raw);
    }
    let mut truncated = scaled.floor() / scale;
    // `raw * scale` can round up to the next step just below `max`
    if truncated >= max {
        truncated = (scaled.floor() - 1.0) / scale;
    }
    if truncated >= max {
        return Ok(raw);
    }
    // flooring a value just above `min` can drop below it when `min` has more decimals
    Ok(truncated.max(min))
}
