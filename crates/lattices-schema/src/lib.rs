//! # lattices-schema: Structural Schema Validation
//!
//! Declarative key/kind templates for nested configuration mappings and the
//! generic routine that walks them.
//!
//! ## Structural Validation (`validate`)
//!
//! [`validate_schema`] checks that a configuration has exactly the sections
//! and fields a [`SchemaTemplate`] declares, and that every leaf has an
//! acceptable kind. It is fail-fast and purely structural.
//!
//! ## JSON Schema Export and Reports (`template`, `report`)
//!
//! [`SchemaTemplate::to_json_schema`] renders a template as a Draft 2020-12
//! document. [`structural_report`] compiles it with the `jsonschema` crate
//! and returns every structural violation at once.
//!
//! ## Document Loading (`document`)
//!
//! [`parse_yaml`] and [`load_yaml_file`] turn YAML into the
//! `serde_json::Value` trees the validators consume.
//!
//! ## Crate Policy
//!
//! - Depends only on `lattices-core` internally.
//! - Templates are `static` data; nothing here mutates them.

pub mod document;
pub mod report;
pub mod template;
pub mod validate;

pub use document::{load_yaml_file, parse_yaml, DocumentError};
pub use report::{build_validator, structural_report, ReportError, ValidationViolations, Violation};
pub use template::{FieldSpec, SchemaTemplate, SectionSpec};
pub use validate::validate_schema;
