//! # Structural Validation
//!
//! Checks that a configuration has exactly the shape a [`SchemaTemplate`]
//! declares. Numeric ranges and cross-field relationships are out of scope
//! here; those belong to the domain validators.
//!
//! Checks run in this order and stop at the first failure:
//!
//! 1. the document is a mapping (`TypeMismatch`);
//! 2. the top-level key set is exact (`SchemaKeyMismatch`);
//! 3. every section is a mapping (`TypeMismatch`);
//! 4. every section's key set is exact (`SchemaKeyMismatch`);
//! 5. every leaf's kind is in its declared set (`TypeMismatch`).

use std::collections::BTreeSet;

use lattices_core::primitive::validate_type;
use lattices_core::{kind_of, Validation, ValidationError};
use serde_json::{Map, Value};

use crate::template::SchemaTemplate;

/// Validate the structure of `config` against `template`.
pub fn validate_schema(config: &Value, template: &SchemaTemplate) -> Validation {
    let Value::Object(top) = config else {
        return Err(ValidationError::type_mismatch(
            None,
            format!(
                "the object being validated must be a mapping; current kind: {}",
                kind_of(config)
            ),
        ));
    };

    check_keys(top, &template.section_names(), None)?;

    for section in template.sections {
        let value = &top[section.name];
        if !value.is_object() {
            return Err(ValidationError::type_mismatch(
                Some(section.name),
                format!(
                    "section '{}' must be a mapping; current kind: {}",
                    section.name,
                    kind_of(value)
                ),
            ));
        }
    }

    for section in template.sections {
        if let Some(fields) = top[section.name].as_object() {
            check_keys(fields, &section.field_names(), Some(section.name))?;
        }
    }

    for section in template.sections {
        for field in section.fields {
            let path = format!("{}.{}", section.name, field.name);
            validate_type(&top[section.name][field.name], field.accepts, Some(&path))?;
        }
    }

    tracing::debug!(template = template.title, "configuration structure is valid");
    Ok(())
}

/// Require the keys of `map` to equal `expected` exactly.
fn check_keys(
    map: &Map<String, Value>,
    expected: &BTreeSet<&str>,
    section: Option<&str>,
) -> Validation {
    let actual: BTreeSet<&str> = map.keys().map(String::as_str).collect();
    if &actual == expected {
        return Ok(());
    }

    let missing: BTreeSet<&str> = expected.difference(&actual).copied().collect();
    let unexpected: BTreeSet<&str> = actual.difference(expected).copied().collect();
    let level = match section {
        Some(name) => format!("section '{name}'"),
        None => "the first level of the configuration".to_string(),
    };

    Err(ValidationError::key_mismatch(
        section,
        format!(
            "{level} must have the keys {}; current keys: {}. Missing: {}. Unexpected: {}.",
            format_keys(expected),
            format_keys(&actual),
            format_keys(&missing),
            format_keys(&unexpected),
        ),
    ))
}

/// Render a key set as `{a, b, c}`.
fn format_keys(keys: &BTreeSet<&str>) -> String {
    let parts: Vec<&str> = keys.iter().copied().collect();
    format!("{{{}}}", parts.join(", "))
}
