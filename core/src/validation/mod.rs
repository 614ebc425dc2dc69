//! # RULECHECK VALIDATION MODULE
//!
//! **CORE VALIDATION SYSTEM WITH TRAIT-BASED ARCHITECTURE**
//!
//! Every rule set implements [`Validator`]; the free functions below are the
//! call surface sibling utilities use as a guard before doing their own work.
//!
//! ## CHECK ORDER
//!
//! 1. **TYPE** - the value has the expected primitive kind
//! 2. **EMPTINESS** - strings and arrays, unless `can_empty`
//! 3. **MEMBERSHIP / ELEMENT TYPES** - allow-lists and `array_of`
//! 4. **BOUNDS** - minimum then maximum
//!
//! The first violated rule wins; at most one failure is reported per call.
//!
//! ## USAGE
//!
//! ```rust
//! use rulecheck::validation::{validate_string, StringRules};
//! use serde_json::json;
//!
//! let rules = StringRules::new().min_chars(2).alias("Nickname");
//! assert!(validate_string(&json!("ok"), &rules).is_ok());
//! ```

use crate::errors::ProjectError;
use serde_json::Value as JsonValue;

pub mod patterns;
pub mod rules;
pub mod validators;

pub use patterns::{validate_email, validate_name};
pub use rules::{ArrayRules, NumberRules, StringRules};

/// **CORE VALIDATOR TRAIT**
///
/// **GUARANTEE**: MUST NOT panic. ALL error conditions MUST return ProjectError.
pub trait Validator {
    /// **INPUT TYPE** - Data type accepted by this validator
    type Input: ?Sized;

    /// **VALIDATION EXECUTION**
    ///
    /// **RETURNS**:
    /// - `Ok(())` - every configured rule holds
    /// - `Err(ProjectError::Validation)` - the first violated rule
    fn validate(&self, input: &Self::Input) -> ValidationResult<()>;
}

/// **VALIDATION RESULT TYPE ALIAS**
pub type ValidationResult<T> = Result<T, ProjectError>;

/// **STRING VALIDATION**
pub fn validate_string(value: &JsonValue, rules: &StringRules) -> ValidationResult<()> {
    rules.validate(value)
}

/// **NUMBER VALIDATION**
pub fn validate_number(value: &JsonValue, rules: &NumberRules) -> ValidationResult<()> {
    rules.validate(value)
}

/// **ARRAY VALIDATION**
pub fn validate_array(value: &JsonValue, rules: &ArrayRules) -> ValidationResult<()> {
    rules.validate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::types::JsonType;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_free_functions_delegate_to_rules() {
        assert!(validate_string(&json!("abc"), &StringRules::new()).is_ok());
        assert!(validate_number(&json!(1), &NumberRules::new()).is_ok());
        assert!(validate_array(&json!([1]), &ArrayRules::new()).is_ok());
    }

    #[test]
    fn test_rules_usable_as_trait_objects() {
        let checks: Vec<Box<dyn Validator<Input = JsonValue>>> = vec![
            Box::new(StringRules::new()),
            Box::new(NumberRules::new().min(0.0)),
            Box::new(ArrayRules::new().of_type(JsonType::Number)),
        ];
        let inputs = [json!("x"), json!(3), json!([1, 2])];
        for (check, input) in checks.iter().zip(inputs.iter()) {
            assert!(check.validate(input).is_ok());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn shorter_than_min_is_below_minimum(s in "[a-z]{1,9}", extra in 1_usize..5) {
            let rules = StringRules::new().min_chars(s.chars().count() + extra);
            let err = validate_string(&json!(s), &rules).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::BelowMinimum);
        }

        #[test]
        fn longer_than_max_is_above_maximum(s in "[a-z]{2,20}", cut in 1_usize..2) {
            let len = s.chars().count();
            let over = StringRules::new().max_chars(len - cut);
            prop_assert_eq!(
                validate_string(&json!(s), &over).unwrap_err().kind(),
                ErrorKind::AboveMaximum
            );
            let exact = StringRules::new().max_chars(len);
            prop_assert!(validate_string(&json!(s), &exact).is_ok());
        }

        #[test]
        fn number_bounds_are_inclusive(min in -1000.0_f64..1000.0, span in 0.0_f64..1000.0) {
            let rules = NumberRules::new().min(min).max_value(min + span);
            prop_assert!(validate_number(&json!(min), &rules).is_ok());
            prop_assert!(validate_number(&json!(min + span), &rules).is_ok());
            prop_assert_eq!(
                validate_number(&json!(min - 1.0), &rules).unwrap_err().kind(),
                ErrorKind::BelowMinimum
            );
        }
    }
}
