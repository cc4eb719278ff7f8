//! # Sticks Domain Validation
//!
//! Numeric ranges and cross-field geometry for a sticks configuration. The
//! structural check from `lattices-schema` runs first; then five section
//! checks run in a fixed order and the first failure aborts:
//!
//! 1. `box`
//! 2. `box_label` (compared against `box`)
//! 3. `lattice` (compared against `box`)
//! 4. `lattice_elements`
//! 5. `lattice_parameters`
//!
//! Within a section, every single-field check runs before any rule that
//! relates two fields. Each section check can also be called on its own;
//! they re-validate the fields they read, so they never assume an earlier
//! step has passed.

use std::str::FromStr;

use lattices_core::primitive::{
    as_number, validate_bool, validate_int_positive, validate_real_positive,
};
use lattices_core::sequence::{validate_list, validate_unique};
use lattices_core::{kind_of, KindSet, Query, SignPolicy, Validation, ValidationError};
use lattices_schema::validate_schema;
use serde_json::Value;

use crate::template::{
    BOX, BOX_LABEL, LATTICE, LATTICE_ELEMENTS, LATTICE_PARAMETERS, STICKS_TEMPLATE,
};

/// Upper bound for occupancy indices (`adsorbing`, `desorbing`, `fixed`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OccupancyBound {
    /// Indices lie in `[0, nticks)`.
    #[default]
    Ticks,
    /// Indices lie in `[0, nticks - (nmers - 1))`: the first tick of a chain
    /// that fits entirely on the lattice.
    Chain,
}

impl OccupancyBound {
    /// Exclusive upper bound for the given lattice size.
    pub fn limit(self, nticks: i64, nmers: i64) -> i64 {
        match self {
            Self::Ticks => nticks,
            Self::Chain => nticks - (nmers - 1),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ticks => "ticks",
            Self::Chain => "chain",
        }
    }
}

impl std::fmt::Display for OccupancyBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OccupancyBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ticks" => Ok(Self::Ticks),
            "chain" => Ok(Self::Chain),
            other => Err(format!(
                "unknown occupancy bound '{other}'; expected 'ticks' or 'chain'"
            )),
        }
    }
}

/// Knobs for [`validate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Policy for the occupancy index range.
    pub occupancy_bound: OccupancyBound,
}

impl ValidationOptions {
    /// Options with the given occupancy policy.
    pub fn with_occupancy_bound(mut self, bound: OccupancyBound) -> Self {
        self.occupancy_bound = bound;
        self
    }
}

/// Validate a whole sticks configuration with default options.
pub fn validate(config: &Value) -> Validation {
    validate_with(config, &ValidationOptions::default())
}

/// Validate a whole sticks configuration.
pub fn validate_with(config: &Value, options: &ValidationOptions) -> Validation {
    validate_schema(config, &STICKS_TEMPLATE)?;

    let frame = &config[BOX];
    validate_box(frame)?;
    tracing::debug!(section = BOX, "section is valid");
    validate_box_label(frame, &config[BOX_LABEL])?;
    tracing::debug!(section = BOX_LABEL, "section is valid");
    validate_lattice(frame, &config[LATTICE])?;
    tracing::debug!(section = LATTICE, "section is valid");
    validate_lattice_elements(&config[LATTICE_ELEMENTS])?;
    tracing::debug!(section = LATTICE_ELEMENTS, "section is valid");
    validate_lattice_parameters(&config[LATTICE_PARAMETERS], options.occupancy_bound)?;
    tracing::debug!(section = LATTICE_PARAMETERS, "section is valid");

    tracing::debug!(
        occupancy_bound = %options.occupancy_bound,
        "sticks configuration is valid"
    );
    Ok(())
}

/// Query form of [`validate`].
pub fn is_valid(config: &Value) -> bool {
    validate(config).holds()
}

/// `position_top` is an `[x, y]` pair; `height` and `width` are strictly positive.
pub fn validate_box(frame: &Value) -> Validation {
    pair(frame, BOX, "position_top")?;
    positive(frame, BOX, "height", false)?;
    positive(frame, BOX, "width", false)?;
    Ok(())
}

/// Label dimensions are non-negative and fit inside the box.
pub fn validate_box_label(frame: &Value, label: &Value) -> Validation {
    const DIMS: [&str; 2] = ["height", "width"];

    let mut bounds = [0.0; 2];
    for (bound, dim) in bounds.iter_mut().zip(DIMS) {
        *bound = positive(frame, BOX, dim, false)?;
    }
    let mut sizes = [0.0; 2];
    for (size, dim) in sizes.iter_mut().zip(DIMS) {
        *size = positive(label, BOX_LABEL, dim, true)?;
    }

    for ((dim, size), bound) in DIMS.into_iter().zip(sizes).zip(bounds) {
        if size > bound {
            let path = format!("{BOX_LABEL}.{dim}");
            return Err(ValidationError::geometry(
                Some(&path),
                format!(
                    "the {dim} of the label box must be less than or equal to the {dim} \
                     of the box; current values: {BOX}.{dim} = {}, {BOX_LABEL}.{dim} = {}",
                    frame[dim], label[dim],
                ),
            ));
        }
    }
    Ok(())
}

/// Baseline endpoints and offsets are non-negative, lie inside the box, and
/// leave a non-empty span between the offset ends.
pub fn validate_lattice(frame: &Value, lattice: &Value) -> Validation {
    const PAIRS: [&str; 3] = ["offsets", "position_end", "position_start"];

    let width = positive(frame, BOX, "width", false)?;
    let height = positive(frame, BOX, "height", false)?;

    let mut pairs = [[0.0; 2]; 3];
    for (slot, key) in pairs.iter_mut().zip(PAIRS) {
        *slot = pair(lattice, LATTICE, key)?;
    }
    positive(lattice, LATTICE, "vertical_spacing", false)?;

    for (values, key) in pairs.iter().zip(PAIRS) {
        require_non_negative(lattice, key, values)?;
    }
    let [offsets, end, start] = pairs;

    let start_path = format!("{LATTICE}.position_start");
    let (sx, ex) = (start[0], end[0]);
    if !(0.0 <= sx && sx < ex && ex <= width) {
        return Err(ValidationError::geometry(
            Some(&start_path),
            format!(
                "the x values of the lattice are not in a valid range; required: \
                 0 <= position_start[0] < position_end[0] <= {BOX}.width. \
                 Current values: position_start[0] = {}, position_end[0] = {}, \
                 {BOX}.width = {}.",
                lattice["position_start"][0], lattice["position_end"][0], frame["width"],
            ),
        ));
    }

    let (sy, ey) = (start[1], end[1]);
    if !(0.0 <= sy && sy == ey && ey <= height) {
        return Err(ValidationError::geometry(
            Some(&start_path),
            format!(
                "the y values of the lattice are not in a valid range; required: \
                 0 <= position_start[1] == position_end[1] <= {BOX}.height. \
                 Current values: position_start[1] = {}, position_end[1] = {}, \
                 {BOX}.height = {}.",
                lattice["position_start"][1], lattice["position_end"][1], frame["height"],
            ),
        ));
    }

    let left = sx + offsets[0];
    let right = ex - offsets[1];
    if left >= right {
        let path = format!("{LATTICE}.offsets");
        return Err(ValidationError::geometry(
            Some(&path),
            format!(
                "the left offset position must be less than the right offset position; \
                 current values: left = {left:.5}, right = {right:.5}, where \
                 left = position_start[0] + offsets[0] and \
                 right = position_end[0] - offsets[1]."
            ),
        ));
    }
    Ok(())
}

/// Element sizes are strictly positive; `vacancies_visible` is a bool.
pub fn validate_lattice_elements(elements: &Value) -> Validation {
    for key in ["arrow_height", "circle_radius", "tick_height"] {
        positive(elements, LATTICE_ELEMENTS, key, false)?;
    }
    let path = format!("{LATTICE_ELEMENTS}.vacancies_visible");
    validate_bool(
        field(elements, LATTICE_ELEMENTS, "vacancies_visible")?,
        Some(&path),
    )
}

/// Chain length and tick count are strictly positive with `nmers <= nticks`;
/// occupancy indices lie in `[0, bound)` and are unique within each list.
pub fn validate_lattice_parameters(params: &Value, bound: OccupancyBound) -> Validation {
    let nmers = count(params, "nmers")?;
    let nticks = count(params, "nticks")?;

    for key in ["adsorbing", "desorbing", "fixed"] {
        let path = format!("{LATTICE_PARAMETERS}.{key}");
        let list = field(params, LATTICE_PARAMETERS, key)?;
        validate_list(list, KindSet::INT, None, Some(&path))?;
    }
    let path = format!("{LATTICE_PARAMETERS}.jumping");
    let jumping = field(params, LATTICE_PARAMETERS, "jumping")?;
    validate_list(jumping, KindSet::ANY, None, Some(&path))?;

    if nmers > nticks {
        let path = format!("{LATTICE_PARAMETERS}.nmers");
        return Err(ValidationError::out_of_range(
            Some(&path),
            format!(
                "the number of ticks must be greater than or equal to the number of n-mers; \
                 current values: nticks = {nticks}, nmers = {nmers}"
            ),
        ));
    }

    let limit = bound.limit(nticks, nmers);
    for key in ["adsorbing", "desorbing", "fixed"] {
        let list = &params[key];
        let items = list.as_array().map(Vec::as_slice).unwrap_or_default();
        if items.is_empty() {
            continue;
        }

        let path = format!("{LATTICE_PARAMETERS}.{key}");
        let in_range = items
            .iter()
            .all(|item| item.as_i64().is_some_and(|i| (0..limit).contains(&i)));
        if !in_range {
            return Err(ValidationError::out_of_range(
                Some(&path),
                format!(
                    "the values of the lattice parameter \"{key}\" must be in the lattice, \
                     i.e. between 0 and {} inclusive ({bound} bound); current values: {list}",
                    limit - 1,
                ),
            ));
        }
        validate_unique(list, Some(&path))?;
    }
    Ok(())
}

/// Look up `key` in `section`, reporting a missing section or field.
fn field<'a>(
    section: &'a Value,
    section_name: &str,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    let Value::Object(map) = section else {
        return Err(ValidationError::type_mismatch(
            Some(section_name),
            format!(
                "section '{section_name}' must be a mapping; current kind: {}",
                kind_of(section)
            ),
        ));
    };
    map.get(key).ok_or_else(|| {
        let path = format!("{section_name}.{key}");
        ValidationError::key_mismatch(
            Some(&path),
            format!("section '{section_name}' has no field '{key}'"),
        )
    })
}

/// A real number satisfying the positive sign policy, returned as `f64`.
fn positive(
    section: &Value,
    section_name: &str,
    key: &str,
    zero: bool,
) -> Result<f64, ValidationError> {
    let value = field(section, section_name, key)?;
    let path = format!("{section_name}.{key}");
    validate_real_positive(value, zero, Some(&path))?;
    as_number(value).ok_or_else(|| {
        ValidationError::type_mismatch(Some(&path), format!("value '{path}' is not a number"))
    })
}

/// A two-element list of reals, returned as `[f64; 2]`.
fn pair(section: &Value, section_name: &str, key: &str) -> Result<[f64; 2], ValidationError> {
    let value = field(section, section_name, key)?;
    let path = format!("{section_name}.{key}");
    validate_list(value, KindSet::REAL, Some(2), Some(&path))?;
    let numbers = match value.as_array().map(Vec::as_slice) {
        Some([a, b]) => as_number(a).zip(as_number(b)),
        _ => None,
    };
    numbers.map(|(a, b)| [a, b]).ok_or_else(|| {
        ValidationError::type_mismatch(
            Some(&path),
            format!("list '{path}' must hold two numbers; current value: {value}"),
        )
    })
}

/// Every entry of the lattice pair `key` is `>= 0`.
fn require_non_negative(lattice: &Value, key: &str, values: &[f64; 2]) -> Validation {
    let policy = SignPolicy::positive(true);
    if values.iter().all(|&x| policy.admits(x)) {
        return Ok(());
    }
    let path = format!("{LATTICE}.{key}");
    Err(ValidationError::out_of_range(
        Some(&path),
        format!(
            "the values of the lattice parameter \"{key}\" must be {policy}; \
             current values: {}",
            lattice[key]
        ),
    ))
}

/// A strictly positive int lattice parameter.
fn count(params: &Value, key: &str) -> Result<i64, ValidationError> {
    let value = field(params, LATTICE_PARAMETERS, key)?;
    let path = format!("{LATTICE_PARAMETERS}.{key}");
    validate_int_positive(value, false, Some(&path))?;
    value.as_i64().ok_or_else(|| {
        ValidationError::out_of_range(
            Some(&path),
            format!("value '{path}' is too large; current value: {value}"),
        )
    })
}
