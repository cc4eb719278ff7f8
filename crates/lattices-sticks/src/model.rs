//! Typed view of a validated sticks configuration.
//!
//! The structs mirror [`STICKS_TEMPLATE`](crate::STICKS_TEMPLATE) one to one.
//! They are only built from values that already passed validation, so the
//! serde layer never has to enforce domain rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults::default_configuration;
use crate::error::SticksError;
use crate::validate::{validate_with, ValidationOptions};

/// A whole sticks configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SticksConfig {
    /// Box enclosing the diagram.
    #[serde(rename = "box")]
    pub frame: BoxSection,
    /// Label area inside the box.
    pub box_label: BoxLabelSection,
    /// Baseline geometry.
    pub lattice: LatticeSection,
    /// Sizes of the drawn elements.
    pub lattice_elements: LatticeElementsSection,
    /// Chain length, tick count and occupancy.
    pub lattice_parameters: LatticeParametersSection,
}

/// The `box` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxSection {
    /// Top-left corner as `[x, y]`.
    pub position_top: [f64; 2],
    /// Strictly positive.
    pub height: f64,
    /// Strictly positive.
    pub width: f64,
}

/// The `box_label` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxLabelSection {
    /// At most the box height.
    pub height: f64,
    /// At most the box width.
    pub width: f64,
}

/// The `lattice` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeSection {
    /// `[left, right]` inset of the first and last tick.
    pub offsets: [f64; 2],
    /// Right end of the baseline as `[x, y]`.
    pub position_end: [f64; 2],
    /// Left end of the baseline as `[x, y]`; same `y` as the right end.
    pub position_start: [f64; 2],
    /// Strictly positive.
    pub vertical_spacing: f64,
}

/// The `lattice_elements` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeElementsSection {
    /// Height of adsorption and desorption arrows.
    pub arrow_height: f64,
    /// Radius of a particle.
    pub circle_radius: f64,
    /// Height of a site tick.
    pub tick_height: f64,
    /// Whether empty sites are drawn.
    pub vacancies_visible: bool,
}

/// The `lattice_parameters` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatticeParametersSection {
    /// Length of each particle chain.
    pub nmers: u64,
    /// Number of lattice sites; at least `nmers`.
    pub nticks: u64,
    /// Indices of adsorbing sites.
    pub adsorbing: Vec<u64>,
    /// Indices of desorbing sites.
    pub desorbing: Vec<u64>,
    /// Indices of fixed sites.
    pub fixed: Vec<u64>,
    /// Opaque tokens; never interpreted.
    pub jumping: Vec<Value>,
}

impl SticksConfig {
    /// Validate `value` with default options, then convert it.
    pub fn from_value(value: &Value) -> Result<Self, SticksError> {
        Self::from_value_with(value, &ValidationOptions::default())
    }

    /// Validate `value` with `options`, then convert it.
    pub fn from_value_with(
        value: &Value,
        options: &ValidationOptions,
    ) -> Result<Self, SticksError> {
        validate_with(value, options)?;
        serde_json::from_value(value.clone()).map_err(|e| SticksError::Serialization(e.to_string()))
    }

    /// The packaged default configuration.
    pub fn load_default() -> Result<Self, SticksError> {
        Self::from_value(&default_configuration()?)
    }

    /// Convert back to a value tree.
    pub fn to_value(&self) -> Result<Value, SticksError> {
        serde_json::to_value(self).map_err(|e| SticksError::Serialization(e.to_string()))
    }

    /// Serialize as YAML.
    pub fn to_yaml(&self) -> Result<String, SticksError> {
        serde_yaml::to_string(self).map_err(|e| SticksError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use lattices_core::FailureKind;
    use lattices_schema::parse_yaml;
    use serde_json::json;

    #[test]
    fn default_converts() {
        let config = SticksConfig::load_default().unwrap();
        assert_eq!(config.frame.width, 10.0);
        assert_eq!(config.lattice_parameters.nticks, 10);
        assert!(config.lattice_elements.vacancies_visible);
        assert!(config.lattice_parameters.jumping.is_empty());
    }

    #[test]
    fn invalid_value_is_not_converted() {
        let mut value = default_configuration().unwrap();
        value["box"]["height"] = json!(0.1);
        let err = SticksConfig::from_value(&value).unwrap_err();
        assert_eq!(err.validation().unwrap().kind, FailureKind::GeometryViolation);
    }

    #[test]
    fn yaml_output_revalidates() {
        let config = SticksConfig::load_default().unwrap();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("box:"));
        let value = parse_yaml(&yaml).unwrap();
        validate(&value).unwrap();
        assert_eq!(SticksConfig::from_value(&value).unwrap(), config);
    }

    #[test]
    fn int_reals_become_floats() {
        let mut value = default_configuration().unwrap();
        value["box"]["width"] = json!(12);
        let config = SticksConfig::from_value(&value).unwrap();
        assert_eq!(config.frame.width, 12.0);
        assert_eq!(config.to_value().unwrap()["box"]["width"], json!(12.0));
    }
}
