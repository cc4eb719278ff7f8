//! # Sequence Validators
//!
//! Checks on ordered lists of fixed or unbounded length with homogeneous
//! element kinds, plus pairwise uniqueness.

use serde_json::{Number, Value};

use crate::error::{subject, Validation, ValidationError};
use crate::kind::{kind_of, kinds_of, KindSet};

/// Check that `value` is a list whose elements are all of `kinds` and, when
/// `length` is given, that it has exactly that many elements.
///
/// An empty list never fails the element check. Element and length problems
/// found together are reported together.
pub fn validate_list(
    value: &Value,
    kinds: KindSet,
    length: Option<usize>,
    name: Option<&str>,
) -> Validation {
    let Value::Array(items) = value else {
        return Err(ValidationError::type_mismatch(
            name,
            format!(
                "{} is not valid. The value is not a list; found {} ({value}).",
                subject(name, "list"),
                kind_of(value),
            ),
        ));
    };

    let mut problems = Vec::new();

    if !items.is_empty() && !items.iter().all(|item| kinds.admits(item)) {
        problems.push(format!(
            "The list's elements are not all {kinds}. Kinds: {}.",
            kinds_of(items)
        ));
    }

    if let Some(expected) = length {
        if items.len() != expected {
            problems.push(format!(
                "The list's length is not {expected}. Current length: {}.",
                items.len()
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::type_mismatch(
            name,
            format!("{} is not valid. {}", subject(name, "list"), problems.join(" ")),
        ))
    }
}

/// Check that the elements of the list `value` are pairwise distinct.
///
/// Numbers compare by numeric value, so `1` and `1.0` are duplicates.
pub fn validate_unique(value: &Value, name: Option<&str>) -> Validation {
    validate_list(value, KindSet::ANY, None, name)?;
    let items = value.as_array().map(Vec::as_slice).unwrap_or_default();

    let pairs = duplicate_pairs(items, same_value);
    if pairs.is_empty() {
        return Ok(());
    }
    Err(ValidationError::uniqueness(
        name,
        format!(
            "{} must hold unique values. Current values: {value}; repeated index pairs: {}.",
            subject(name, "list"),
            format_pairs(&pairs),
        ),
    ))
}

/// Equality used for uniqueness: numeric for numbers, structural otherwise.
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => same_number(x, y),
        _ => a == b,
    }
}

/// Integers compare exactly; `f64` only when one side is a float.
fn same_number(x: &Number, y: &Number) -> bool {
    if x.is_f64() || y.is_f64() {
        return x.as_f64() == y.as_f64();
    }
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    false
}

/// Every index pair `(i, j)`, `i < j`, whose items compare equal.
pub fn duplicate_pairs<T>(items: &[T], eq: impl Fn(&T, &T) -> bool) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            if eq(&items[i], &items[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Render index pairs as `((0, 2), (1, 3))`.
pub fn format_pairs(pairs: &[(usize, usize)]) -> String {
    let rendered: Vec<String> = pairs.iter().map(|(i, j)| format!("({i}, {j})")).collect();
    format!("({})", rendered.join(", "))
}
