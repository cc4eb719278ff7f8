//! # Rectangular Array Validators
//!
//! Numeric arrays arrive as nested lists (`[1, 2, 3]`, `[[1, 2], [3, 4]]`).
//! [`NumericArray::from_value`] parses such a value into a rectangular array
//! with a shape and an element dtype; the validators below then check
//! dimensionality, exact shape, dtype, elementwise sign policy, and
//! uniqueness of entries, rows or columns.
//!
//! Every validator accepts an unconstrained `&Value` and first checks that it
//! is an array of the requested dimensionality, so callers can pass raw
//! configuration leaves straight through.

use std::fmt;

use serde_json::Value;

use crate::error::{subject, Validation, ValidationError};
use crate::kind::kind_of;
use crate::sequence::{duplicate_pairs, format_pairs};
use crate::sign::SignPolicy;

/// One numeric array element.
#[derive(Debug, Clone, Copy)]
pub enum Element {
    /// Integral element.
    Int(i64),
    /// Floating-point element.
    Float(f64),
}

impl Element {
    /// The element as `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Float(x) => x,
        }
    }

    fn from_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            Some(Self::Int(i))
        } else {
            n.as_f64().map(Self::Float)
        }
    }

    fn to_value(self) -> Value {
        match self {
            Self::Int(i) => Value::from(i),
            Self::Float(x) => Value::from(x),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

/// Element type of a whole array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    /// Every element is integral.
    Int,
    /// At least one element is non-integral, or the array is empty.
    Float,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Float => "float",
        })
    }
}

/// Dimensionality a validator requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ndim {
    /// A flat list.
    One,
    /// A list of equal-length rows.
    Two,
}

impl Ndim {
    /// Number of axes.
    pub fn axes(&self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    fn word(&self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
        }
    }
}

/// Exact shape a validator requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One axis of the given length (zero allowed).
    One(usize),
    /// `rows` x `cols`, both strictly positive.
    Two(usize, usize),
}

impl Shape {
    /// A 1-D shape.
    pub fn one(len: usize) -> Self {
        Self::One(len)
    }

    /// A 2-D shape; both extents must be non-zero.
    pub fn two(rows: usize, cols: usize) -> Result<Self, ValidationError> {
        if rows == 0 || cols == 0 {
            return Err(ValidationError::out_of_range(
                None,
                format!(
                    "a two dimensional shape must be a pair of positive non-zero integers; \
                     current shape: ({rows}, {cols})"
                ),
            ));
        }
        Ok(Self::Two(rows, cols))
    }

    /// Dimensionality of this shape.
    pub fn ndim(&self) -> Ndim {
        match self {
            Self::One(_) => Ndim::One,
            Self::Two(..) => Ndim::Two,
        }
    }

    fn extents(&self) -> Vec<usize> {
        match *self {
            Self::One(n) => vec![n],
            Self::Two(r, c) => vec![r, c],
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_shape(&self.extents()))
    }
}

/// Render a shape numpy-style: `(4,)`, `(2, 3)`.
fn format_shape(shape: &[usize]) -> String {
    match shape {
        [n] => format!("({n},)"),
        _ => {
            let parts: Vec<String> = shape.iter().map(usize::to_string).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// A rectangular numeric array in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    shape: Vec<usize>,
    dtype: DType,
    data: Vec<Element>,
}

impl NumericArray {
    /// Parse a nested list into a rectangular array.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `value` is not a list, is ragged, or holds anything
    /// other than numbers.
    pub fn from_value(value: &Value, name: Option<&str>) -> Result<Self, ValidationError> {
        if !value.is_array() {
            return Err(ValidationError::type_mismatch(
                name,
                format!(
                    "{} is not an array; found {} ({value})",
                    subject(name, "value"),
                    kind_of(value),
                ),
            ));
        }

        // The first element along each axis fixes the extents.
        let mut shape = Vec::new();
        let mut cursor = value;
        while let Value::Array(items) = cursor {
            shape.push(items.len());
            match items.first() {
                Some(first) => cursor = first,
                None => break,
            }
        }

        let mut data = Vec::new();
        flatten(value, &shape, 0, &mut data).map_err(|reason| {
            ValidationError::type_mismatch(
                name,
                format!("{} is not a rectangular numeric array: {reason}", subject(name, "value")),
            )
        })?;

        let dtype = if !data.is_empty() && data.iter().all(|e| matches!(e, Element::Int(_))) {
            DType::Int
        } else {
            DType::Float
        };

        Ok(Self { shape, dtype, data })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Extent along each axis.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Element type.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Elements in row-major order.
    pub fn elements(&self) -> &[Element] {
        &self.data
    }

    /// Rows of a 2-D array.
    pub fn rows(&self) -> Vec<&[Element]> {
        match self.shape.as_slice() {
            [_, cols] if *cols > 0 => self.data.chunks(*cols).collect(),
            [rows, _] => vec![&[][..]; *rows],
            _ => Vec::new(),
        }
    }

    /// Columns of a 2-D array.
    pub fn columns(&self) -> Vec<Vec<Element>> {
        let rows = self.rows();
        let cols = self.shape.get(1).copied().unwrap_or(0);
        (0..cols)
            .map(|j| rows.iter().map(|row| row[j]).collect())
            .collect()
    }

    /// Rebuild the nested list this array was parsed from.
    pub fn to_value(&self) -> Value {
        fn build(shape: &[usize], data: &[Element]) -> Value {
            match shape {
                [] => data.first().map(|e| e.to_value()).unwrap_or(Value::Null),
                [_] => Value::Array(data.iter().map(|e| e.to_value()).collect()),
                [n, rest @ ..] => {
                    let stride: usize = rest.iter().product();
                    Value::Array(
                        (0..*n)
                            .map(|i| build(rest, &data[i * stride..(i + 1) * stride]))
                            .collect(),
                    )
                }
            }
        }
        build(&self.shape, &self.data)
    }
}

/// Collect the leaves of `value` into `out`, checking every axis at `depth`
/// has the extent recorded in `shape`.
fn flatten(
    value: &Value,
    shape: &[usize],
    depth: usize,
    out: &mut Vec<Element>,
) -> Result<(), String> {
    match value {
        Value::Array(items) => {
            let Some(&extent) = shape.get(depth) else {
                return Err(format!("unexpected nesting at depth {depth}"));
            };
            if items.len() != extent {
                return Err(format!(
                    "ragged at depth {depth}: expected {extent} entries, found {}",
                    items.len()
                ));
            }
            for item in items {
                flatten(item, shape, depth + 1, out)?;
            }
            Ok(())
        }
        Value::Number(n) if depth == shape.len() => {
            let element = Element::from_number(n).ok_or_else(|| format!("unsupported number {n}"))?;
            out.push(element);
            Ok(())
        }
        Value::Number(_) => Err(format!(
            "ragged at depth {depth}: expected a list, found a number"
        )),
        other => Err(format!("non-numeric element of kind {}", kind_of(other))),
    }
}

/// Check that `value` is a numeric array with exactly `ndim` axes.
///
/// Returns the parsed array so follow-up checks do not parse twice.
pub fn validate_ndarray(
    value: &Value,
    ndim: Ndim,
    name: Option<&str>,
) -> Result<NumericArray, ValidationError> {
    let array = NumericArray::from_value(value, name)?;
    if array.ndim() != ndim.axes() {
        return Err(ValidationError::out_of_range(
            name,
            format!(
                "{} is not a {} dimensional array. Current shape: {}.",
                subject(name, "array"),
                ndim.word(),
                format_shape(array.shape()),
            ),
        ));
    }
    Ok(array)
}

/// Check that `value` is an array of exactly `shape`.
pub fn validate_shape(value: &Value, shape: Shape, name: Option<&str>) -> Validation {
    let array = validate_ndarray(value, shape.ndim(), name)?;
    if array.shape() == shape.extents().as_slice() {
        return Ok(());
    }
    Err(ValidationError::out_of_range(
        name,
        format!(
            "{} does not have the specified shape. Current shape: {}, expected shape: {shape}.",
            subject(name, "array"),
            format_shape(array.shape()),
        ),
    ))
}

/// Check that `value` is an `ndim` array whose elements are all `dtype`.
pub fn validate_dtype(value: &Value, ndim: Ndim, dtype: DType, name: Option<&str>) -> Validation {
    checked_dtype(value, ndim, dtype, name).map(|_| ())
}

fn checked_dtype(
    value: &Value,
    ndim: Ndim,
    dtype: DType,
    name: Option<&str>,
) -> Result<NumericArray, ValidationError> {
    let array = validate_ndarray(value, ndim, name)?;
    if array.dtype() != dtype {
        return Err(ValidationError::type_mismatch(
            name,
            format!(
                "{} is not an array of type {dtype}. Current type: {}.",
                subject(name, "array"),
                array.dtype(),
            ),
        ));
    }
    Ok(array)
}

/// Check dtype, then that every element satisfies `policy`.
pub fn validate_dtype_signed(
    value: &Value,
    ndim: Ndim,
    dtype: DType,
    policy: SignPolicy,
    name: Option<&str>,
) -> Validation {
    let array = checked_dtype(value, ndim, dtype, name)?;
    let mask: Vec<bool> = array.elements().iter().map(|e| policy.admits(e.as_f64())).collect();
    if mask.iter().all(|ok| *ok) {
        return Ok(());
    }
    let rendered: Vec<&str> = mask.iter().map(|ok| if *ok { "true" } else { "false" }).collect();
    Err(ValidationError::out_of_range(
        name,
        format!(
            "Not all the elements of {} are {policy}. Current values: {}, {policy}: ({}).",
            subject(name, "array"),
            array.to_value(),
            rendered.join(", "),
        ),
    ))
}

/// Every element `> 0` (`>= 0` with `zero`).
pub fn validate_dtype_positive(
    value: &Value,
    ndim: Ndim,
    dtype: DType,
    zero: bool,
    name: Option<&str>,
) -> Validation {
    validate_dtype_signed(value, ndim, dtype, SignPolicy::positive(zero), name)
}

/// Every element `< 0` (`<= 0` with `zero`).
pub fn validate_dtype_negative(
    value: &Value,
    ndim: Ndim,
    dtype: DType,
    zero: bool,
    name: Option<&str>,
) -> Validation {
    validate_dtype_signed(value, ndim, dtype, SignPolicy::negative(zero), name)
}

/// No element appears twice (row-major flat indices for 2-D arrays).
pub fn validate_unique_entries(value: &Value, ndim: Ndim, name: Option<&str>) -> Validation {
    let array = validate_ndarray(value, ndim, name)?;
    let pairs = duplicate_pairs(array.elements(), |a, b| a == b);
    if pairs.is_empty() {
        return Ok(());
    }
    Err(ValidationError::uniqueness(
        name,
        format!(
            "{} is not an array of unique elements. Repeated element index pairs: {}.",
            subject(name, "array"),
            format_pairs(&pairs),
        ),
    ))
}

/// No two rows of a 2-D array are elementwise equal.
pub fn validate_unique_rows(value: &Value, name: Option<&str>) -> Validation {
    let array = validate_ndarray(value, Ndim::Two, name)?;
    let pairs = duplicate_pairs(&array.rows(), |a, b| a == b);
    if pairs.is_empty() {
        return Ok(());
    }
    Err(ValidationError::uniqueness(
        name,
        format!(
            "{} is not an array of unique rows. Repeated row index pairs: {}.",
            subject(name, "array"),
            format_pairs(&pairs),
        ),
    ))
}

/// No two columns of a 2-D array are elementwise equal.
pub fn validate_unique_columns(value: &Value, name: Option<&str>) -> Validation {
    let array = validate_ndarray(value, Ndim::Two, name)?;
    let pairs = duplicate_pairs(&array.columns(), |a, b| a == b);
    if pairs.is_empty() {
        return Ok(());
    }
    Err(ValidationError::uniqueness(
        name,
        format!(
            "{} is not an array of unique columns. Repeated column index pairs: {}.",
            subject(name, "array"),
            format_pairs(&pairs),
        ),
    ))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(0i64..3, cols), rows)
        })
    }

    proptest! {
        #[test]
        fn rows_unique_iff_no_equal_pair(g in grid()) {
            let expected = (0..g.len()).all(|i| ((i + 1)..g.len()).all(|j| g[i] != g[j]));
            let ok = validate_unique_rows(&serde_json::json!(g), None).is_ok();
            prop_assert_eq!(ok, expected);
        }

        #[test]
        fn columns_unique_iff_no_equal_pair(g in grid()) {
            let cols = g[0].len();
            let column = |j: usize| g.iter().map(|row| row[j]).collect::<Vec<_>>();
            let expected = (0..cols).all(|i| ((i + 1)..cols).all(|j| column(i) != column(j)));
            let ok = validate_unique_columns(&serde_json::json!(g), None).is_ok();
            prop_assert_eq!(ok, expected);
        }

        #[test]
        fn positive_iff_every_element_positive(
            values in prop::collection::vec(-3i64..3, 1..8),
            zero in any::<bool>(),
        ) {
            let expected = values.iter().all(|&v| if zero { v >= 0 } else { v > 0 });
            let array = serde_json::json!(values);
            let ok = validate_dtype_positive(&array, Ndim::One, DType::Int, zero, None).is_ok();
            prop_assert_eq!(ok, expected);
        }
    }
}
