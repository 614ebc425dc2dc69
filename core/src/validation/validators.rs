//! # CONCRETE VALIDATOR IMPLEMENTATIONS
//!
//! **CRITICAL**: One `Validator` per rule kind. Checks run in a fixed order and
//! stop at the first violated rule, so the reported error is deterministic.

use super::rules::{ArrayRules, NumberRules, StringRules};
use super::{ValidationResult, Validator};
use crate::errors::{ErrorKind, ProjectError};
use crate::types::JsonType;
use serde_json::Value as JsonValue;

fn reject(kind: ErrorKind, message: String) -> ProjectError {
    log::debug!("validation rejected: {} - {}", kind, message);
    ProjectError::validation(kind, message)
}

// ================================================================================================
// STRING VALIDATOR
// ================================================================================================

impl Validator for StringRules {
    type Input = JsonValue;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        // **STEP 1**: Type check
        let text = input.as_str().ok_or_else(|| {
            reject(
                ErrorKind::TypeMismatch,
                format!("{} must be a string", self.alias),
            )
        })?;

        // **STEP 2**: Emptiness
        if !self.can_empty && text.is_empty() {
            return Err(reject(
                ErrorKind::EmptyValue,
                format!("{} cannot be empty", self.alias),
            ));
        }

        // **STEP 3-4**: Length bounds, counted in characters
        let length = text.chars().count();
        if let Some(min) = self.min_chars {
            if length < min {
                return Err(reject(
                    ErrorKind::BelowMinimum,
                    format!("{} must contain at least {} characters", self.alias, min),
                ));
            }
        }
        if let Some(max) = self.max_chars {
            if length > max {
                return Err(reject(
                    ErrorKind::AboveMaximum,
                    format!("{} must contain at most {} characters", self.alias, max),
                ));
            }
        }

        // **STEP 5**: Allow-list applies to single-character fields only
        if self.max_chars == Some(1) && !self.allowed_chars.contains(text) {
            let allowed = self
                .allowed_chars
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(reject(
                ErrorKind::NotAllowed,
                format!("{} must be one of: {}", self.alias, allowed),
            ));
        }

        Ok(())
    }
}

// ================================================================================================
// NUMBER VALIDATOR
// ================================================================================================

impl Validator for NumberRules {
    type Input = JsonValue;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        let number = input.as_f64().ok_or_else(|| {
            reject(
                ErrorKind::TypeMismatch,
                format!("{} must be a number", self.alias),
            )
        })?;

        if !self.allowed_nums.is_empty() && !self.allowed_nums.contains(&number) {
            return Err(reject(
                ErrorKind::NotAllowed,
                format!(
                    "{} must be one of: {}",
                    self.alias,
                    self.allowed_description()
                ),
            ));
        }

        if let Some(min) = self.min {
            if number < min {
                return Err(reject(
                    ErrorKind::BelowMinimum,
                    format!("{} must be greater than or equal to {}", self.alias, min),
                ));
            }
        }

        if let Some(max) = self.max_value {
            if number > max {
                return Err(reject(
                    ErrorKind::AboveMaximum,
                    format!("{} must be less than or equal to {}", self.alias, max),
                ));
            }
        }

        Ok(())
    }
}

// ================================================================================================
// ARRAY VALIDATOR
// ================================================================================================

impl Validator for ArrayRules {
    type Input = JsonValue;

    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        let elements = input.as_array().ok_or_else(|| {
            reject(
                ErrorKind::TypeMismatch,
                format!("{} must be an array", self.alias),
            )
        })?;

        if !self.can_empty && elements.is_empty() {
            return Err(reject(
                ErrorKind::EmptyValue,
                format!("{} cannot be empty", self.alias),
            ));
        }

        if !self.array_of.is_empty() {
            if let Some(index) = elements
                .iter()
                .position(|element| !self.array_of.contains(&JsonType::of(element)))
            {
                let allowed = self
                    .array_of
                    .iter()
                    .map(JsonType::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(reject(
                    ErrorKind::TypeMismatch,
                    format!(
                        "{} element at index {} must be of type: {}",
                        self.alias, index, allowed
                    ),
                ));
            }
        }

        if let Some(min) = self.min_elements {
            if elements.len() < min {
                return Err(reject(
                    ErrorKind::BelowMinimum,
                    format!("{} must contain at least {} elements", self.alias, min),
                ));
            }
        }

        if let Some(max) = self.max_elements {
            if elements.len() > max {
                return Err(reject(
                    ErrorKind::AboveMaximum,
                    format!("{} must contain at most {} elements", self.alias, max),
                ));
            }
        }

        Ok(())
    }
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================
