//! # Default Configuration
//!
//! The packaged `parameters.yaml` is embedded at compile time and parsed once
//! per process. Callers always receive an owned copy, so mutating a returned
//! configuration never affects later calls.
//!
//! User overrides are merged onto the defaults leaf by leaf: an override may
//! replace the value of an existing field but may not add sections or fields.

use std::sync::OnceLock;

use lattices_core::{kind_of, ValidationError};
use lattices_schema::parse_yaml;
use serde_json::Value;

use crate::error::SticksError;
use crate::validate::{validate_with, ValidationOptions};

const DEFAULT_PARAMETERS: &str = include_str!("../parameters.yaml");

/// Text of the packaged default document.
pub fn default_yaml() -> &'static str {
    DEFAULT_PARAMETERS
}

fn parsed_defaults() -> Result<&'static Value, SticksError> {
    static PARSED: OnceLock<Result<Value, String>> = OnceLock::new();
    PARSED
        .get_or_init(|| parse_yaml(DEFAULT_PARAMETERS).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|reason| SticksError::DefaultDocument(reason.clone()))
}

/// An owned copy of the default configuration.
pub fn default_configuration() -> Result<Value, SticksError> {
    parsed_defaults().cloned()
}

/// Merge `overrides` onto the default configuration.
///
/// `overrides` is a mapping of section names to mappings of field values.
/// Unknown sections or fields are a `SchemaKeyMismatch`; a section that is
/// not a mapping is a `TypeMismatch`. The result is not validated.
pub fn merge_with_defaults(overrides: &Value) -> Result<Value, SticksError> {
    let mut merged = default_configuration()?;

    let Value::Object(sections) = overrides else {
        return Err(ValidationError::type_mismatch(
            None,
            format!("overrides must be a mapping; current kind: {}", kind_of(overrides)),
        )
        .into());
    };

    for (section, fields) in sections {
        let Some(target) = merged.get_mut(section).and_then(Value::as_object_mut) else {
            tracing::warn!(section = %section, "override names an unknown section");
            return Err(ValidationError::key_mismatch(
                Some(section.as_str()),
                format!("overrides name an unknown section '{section}'"),
            )
            .into());
        };

        let Value::Object(fields) = fields else {
            return Err(ValidationError::type_mismatch(
                Some(section.as_str()),
                format!(
                    "overrides for section '{section}' must be a mapping; current kind: {}",
                    kind_of(fields)
                ),
            )
            .into());
        };

        for (key, value) in fields {
            let path = format!("{section}.{key}");
            let Some(slot) = target.get_mut(key) else {
                tracing::warn!(path = %path, "override names an unknown field");
                return Err(ValidationError::key_mismatch(
                    Some(&path),
                    format!("overrides name an unknown field '{key}' in section '{section}'"),
                )
                .into());
            };
            tracing::debug!(path = %path, value = %value, "overriding default");
            *slot = value.clone();
        }
    }

    Ok(merged)
}

/// Merge `overrides` onto the defaults and validate the result.
pub fn configure(overrides: &Value) -> Result<Value, SticksError> {
    configure_with(overrides, &ValidationOptions::default())
}

/// [`configure`] with explicit validation options.
pub fn configure_with(
    overrides: &Value,
    options: &ValidationOptions,
) -> Result<Value, SticksError> {
    let merged = merge_with_defaults(overrides)?;
    validate_with(&merged, options)?;
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use lattices_core::FailureKind;
    use serde_json::json;

    #[test]
    fn default_is_valid() {
        validate(&default_configuration().unwrap()).unwrap();
    }

    #[test]
    fn copies_are_independent() {
        let mut first = default_configuration().unwrap();
        first["box"]["width"] = json!(-1);
        let second = default_configuration().unwrap();
        assert_eq!(second["box"]["width"], json!(10.0));
    }

    #[test]
    fn yaml_text_is_packaged_document() {
        assert!(default_yaml().contains("lattice_parameters:"));
        assert_eq!(parse_yaml(default_yaml()).unwrap(), default_configuration().unwrap());
    }

    #[test]
    fn merge_replaces_leaves_only() {
        let merged = merge_with_defaults(&json!({"lattice_parameters": {"nticks": 12}})).unwrap();
        assert_eq!(merged["lattice_parameters"]["nticks"], 12);
        assert_eq!(merged["lattice_parameters"]["nmers"], 2);
        assert_eq!(merged["box"], default_configuration().unwrap()["box"]);
    }

    #[test]
    fn empty_overrides_give_defaults() {
        assert_eq!(merge_with_defaults(&json!({})).unwrap(), default_configuration().unwrap());
    }

    #[test]
    fn merge_rejects_unknown_keys() {
        let err = merge_with_defaults(&json!({"colours": {}})).unwrap_err();
        let err = err.validation().unwrap();
        assert_eq!(err.kind, FailureKind::SchemaKeyMismatch);
        assert_eq!(err.path.as_deref(), Some("colours"));

        let err = merge_with_defaults(&json!({"box": {"depth": 1}})).unwrap_err();
        assert_eq!(err.validation().unwrap().path.as_deref(), Some("box.depth"));
    }

    #[test]
    fn merge_rejects_non_mapping_sections() {
        let err = merge_with_defaults(&json!({"box": [1, 2]})).unwrap_err();
        assert_eq!(err.validation().unwrap().kind, FailureKind::TypeMismatch);
        let err = merge_with_defaults(&json!([1])).unwrap_err();
        assert_eq!(err.validation().unwrap().kind, FailureKind::TypeMismatch);
    }

    #[test]
    fn configure_validates_merged_result() {
        configure(&json!({"lattice_elements": {"vacancies_visible": false}})).unwrap();
        let err = configure(&json!({"box_label": {"width": 11}})).unwrap_err();
        assert_eq!(err.validation().unwrap().kind, FailureKind::GeometryViolation);
    }
}
