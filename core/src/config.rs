//! Selector configuration: defaults plus environment overrides.

use once_cell::sync::Lazy;

/// Environment variable overriding [`SelectorConfig::precision`].
pub const PRECISION_ENV: &str = "RULECHECK_DRAW_PRECISION";

/// Highest decimal precision a draw can carry meaningfully in an `f64`.
pub const MAX_PRECISION: u32 = 15;

/// Weighted selection configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    /// Decimal places kept in each random draw.
    pub precision: u32,
    /// Upper bound on the summed weights of an entry list.
    pub max_total_weight: f64,
    /// Rounding slack on the weight sum, in units in the last place of `max_total_weight`.
    pub weight_ulps: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            max_total_weight: 100.0,
            weight_ulps: 4,
        }
    }
}

impl SelectorConfig {
    /// Largest weight sum accepted: the maximum plus `weight_ulps` of float slack.
    pub fn weight_limit(&self) -> f64 {
        let ulp = self.max_total_weight.abs() * f64::EPSILON;
        self.max_total_weight + ulp * f64::from(self.weight_ulps)
    }

    /// Defaults, with the precision taken from `RULECHECK_DRAW_PRECISION` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(PRECISION_ENV) {
            match parse_precision(&raw) {
                Some(precision) => config.precision = precision,
                None => log::warn!(
                    "ignoring {}={:?}: expected an integer in 0..={}",
                    PRECISION_ENV,
                    raw,
                    MAX_PRECISION
                ),
            }
        }
        config
    }
}

fn parse_precision(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
}

/// The process-wide selector configuration, read from the environment once.
pub static SELECTOR_CONFIG: Lazy<SelectorConfig> = Lazy::new(SelectorConfig::from_env);
