//! # Primitive Validators
//!
//! Stateless checks on a single value: runtime kind, then an optional sign
//! policy. A kind failure is a `TypeMismatch`; a correctly-typed value that
//! breaks its sign policy is a `ValueOutOfRange`.

use serde_json::Value;

use crate::error::{subject, Validation, ValidationError};
use crate::kind::{kind_of, KindSet};
use crate::sign::SignPolicy;

/// Numeric value of `value`, or `None` for non-numbers (including bools).
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Check that the kind of `value` is in `kinds`.
pub fn validate_type(value: &Value, kinds: KindSet, name: Option<&str>) -> Validation {
    if kinds.admits(value) {
        return Ok(());
    }
    Err(ValidationError::type_mismatch(
        name,
        format!(
            "{} must be of kind {kinds}; found {} ({value})",
            subject(name, "value"),
            kind_of(value),
        ),
    ))
}

/// Check the kind of `value`, then that it satisfies `policy`.
pub fn validate_signed(
    value: &Value,
    kinds: KindSet,
    policy: SignPolicy,
    name: Option<&str>,
) -> Validation {
    validate_type(value, kinds, name)?;

    let Some(x) = as_number(value) else {
        return Err(ValidationError::type_mismatch(
            name,
            format!(
                "{} must be a number to carry a sign; found {} ({value})",
                subject(name, "value"),
                kind_of(value),
            ),
        ));
    };

    if policy.admits(x) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            name,
            format!(
                "{} must be {policy}; current value: {value}",
                subject(name, "value"),
            ),
        ))
    }
}

/// Kind in `kinds` and `> 0` (`>= 0` with `zero`).
pub fn validate_positive(
    value: &Value,
    kinds: KindSet,
    zero: bool,
    name: Option<&str>,
) -> Validation {
    validate_signed(value, kinds, SignPolicy::positive(zero), name)
}

/// Kind in `kinds` and `< 0` (`<= 0` with `zero`).
pub fn validate_negative(
    value: &Value,
    kinds: KindSet,
    zero: bool,
    name: Option<&str>,
) -> Validation {
    validate_signed(value, kinds, SignPolicy::negative(zero), name)
}

/// An `int` or `float` that is positive (zero allowed if `zero`).
pub fn validate_real_positive(value: &Value, zero: bool, name: Option<&str>) -> Validation {
    validate_positive(value, KindSet::REAL, zero, name)
}

/// An `int` that is positive (zero allowed if `zero`).
pub fn validate_int_positive(value: &Value, zero: bool, name: Option<&str>) -> Validation {
    validate_positive(value, KindSet::INT, zero, name)
}

/// A `bool`.
pub fn validate_bool(value: &Value, name: Option<&str>) -> Validation {
    validate_type(value, KindSet::BOOL, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use serde_json::json;

    #[test]
    fn type_accepts_declared_kinds() {
        assert!(validate_type(&json!(1), KindSet::REAL, None).is_ok());
        assert!(validate_type(&json!(1.5), KindSet::REAL, None).is_ok());
        assert!(validate_type(&json!([1, 2]), KindSet::LIST, None).is_ok());
        assert!(validate_type(&json!({}), KindSet::MAPPING, None).is_ok());
    }

    #[test]
    fn type_mismatch_names_field_expected_and_actual() {
        let err = validate_type(&json!("wide"), KindSet::REAL, Some("box.width")).unwrap_err();
        assert_eq!(err.kind, FailureKind::TypeMismatch);
        assert_eq!(err.path.as_deref(), Some("box.width"));
        assert!(err.message.contains("box.width"));
        assert!(err.message.contains("int | float"));
        assert!(err.message.contains("str"));
        assert!(err.message.contains("\"wide\""));
    }

    #[test]
    fn int_rejects_float() {
        let err = validate_int_positive(&json!(2.0), false, Some("nticks")).unwrap_err();
        assert_eq!(err.kind, FailureKind::TypeMismatch);
    }

    #[test]
    fn positive_zero_policy() {
        assert!(validate_real_positive(&json!(0), true, None).is_ok());
        let err = validate_real_positive(&json!(0), false, Some("height")).unwrap_err();
        assert_eq!(err.kind, FailureKind::ValueOutOfRange);
        assert!(err.message.contains("greater than zero"));
        assert!(err.message.contains("current value: 0"));
    }

    #[test]
    fn negative_zero_policy() {
        assert!(validate_negative(&json!(-1), KindSet::INT, false, None).is_ok());
        assert!(validate_negative(&json!(0.0), KindSet::REAL, true, None).is_ok());
        let err = validate_negative(&json!(0.0), KindSet::REAL, false, None).unwrap_err();
        assert_eq!(err.kind, FailureKind::ValueOutOfRange);
        assert!(err.message.contains("less than zero"));
    }

    #[test]
    fn type_checked_before_sign() {
        let err = validate_real_positive(&json!(-1), false, None).unwrap_err();
        assert_eq!(err.kind, FailureKind::ValueOutOfRange);
        let err = validate_real_positive(&json!(true), false, None).unwrap_err();
        assert_eq!(err.kind, FailureKind::TypeMismatch);
    }

    #[test]
    fn sign_on_non_numeric_kind_set_is_type_mismatch() {
        let err = validate_positive(&json!("a"), KindSet::ANY, false, None).unwrap_err();
        assert_eq!(err.kind, FailureKind::TypeMismatch);
    }

    #[test]
    fn bool_validator() {
        assert!(validate_bool(&json!(false), None).is_ok());
        let err = validate_bool(&json!(0), Some("vacancies_visible")).unwrap_err();
        assert_eq!(err.kind, FailureKind::TypeMismatch);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn real_positive_iff_sign_holds(x in -1.0e6f64..1.0e6, zero in any::<bool>()) {
            let ok = validate_real_positive(&json!(x), zero, None).is_ok();
            prop_assert_eq!(ok, if zero { x >= 0.0 } else { x > 0.0 });
        }

        #[test]
        fn int_negative_iff_sign_holds(x in any::<i32>(), zero in any::<bool>()) {
            let ok = validate_negative(&json!(x), KindSet::INT, zero, None).is_ok();
            prop_assert_eq!(ok, if zero { x <= 0 } else { x < 0 });
        }
    }
}
