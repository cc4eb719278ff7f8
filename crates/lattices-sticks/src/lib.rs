//! # lattices-sticks: One-Dimensional Sticks Lattices
//!
//! Validation, defaults and a typed model for the configuration of a
//! one-dimensional "sticks" lattice diagram: a box, a label area, a baseline
//! with ticks, drawn elements, and the occupancy of lattice sites.
//!
//! ```text
//! overrides ──merge_with_defaults──▶ value ──validate──▶ SticksConfig
//!                  ▲                                         │
//!            parameters.yaml                              to_yaml
//! ```
//!
//! [`validate`] checks structure against [`STICKS_TEMPLATE`] first, then the
//! section rules in a fixed order, and reports the first failure.

pub mod defaults;
pub mod error;
pub mod model;
pub mod template;
pub mod validate;

pub use defaults::{
    configure, configure_with, default_configuration, default_yaml, merge_with_defaults,
};
pub use error::SticksError;
pub use model::{
    BoxLabelSection, BoxSection, LatticeElementsSection, LatticeParametersSection, LatticeSection,
    SticksConfig,
};
pub use template::STICKS_TEMPLATE;
pub use validate::{
    is_valid, validate, validate_box, validate_box_label, validate_lattice,
    validate_lattice_elements,
    validate_lattice_parameters, validate_with, OccupancyBound, ValidationOptions,
};
