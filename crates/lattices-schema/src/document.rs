//! # Document Loading
//!
//! Turns YAML text or files into the `serde_json::Value` trees every
//! validator works on. Loading is deliberately thin: no validation happens
//! here beyond "is this well-formed YAML with string-compatible keys".

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Origin label used for documents parsed from in-memory text.
pub const INLINE_ORIGIN: &str = "<inline>";

/// Error loading or parsing a configuration document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be read or parsed.
    #[error("document load error for '{origin}': {reason}")]
    Load {
        /// File path, or [`INLINE_ORIGIN`].
        origin: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// IO error reading the document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse YAML text into a value tree.
///
/// # Errors
///
/// Returns [`DocumentError::Load`] for malformed YAML or for YAML that has no
/// JSON equivalent (non-scalar keys, NaN/infinite floats).
pub fn parse_yaml(text: &str) -> Result<Value, DocumentError> {
    parse_yaml_from(text, INLINE_ORIGIN)
}

/// Read and parse a YAML file.
///
/// # Errors
///
/// Returns [`DocumentError::Load`] if the file cannot be read or parsed.
pub fn load_yaml_file(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Load {
        origin: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read configuration document");
    parse_yaml_from(&content, &path.display().to_string())
}

fn parse_yaml_from(text: &str, origin: &str) -> Result<Value, DocumentError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| DocumentError::Load {
        origin: origin.to_string(),
        reason: format!("invalid YAML: {e}"),
    })?;
    yaml_to_json_value(&yaml).map_err(|reason| DocumentError::Load {
        origin: origin.to_string(),
        reason: format!("YAML-to-JSON conversion failed: {reason}"),
    })
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Configuration documents use only the JSON-compatible subset of YAML.
/// Tags are dropped and scalar keys are stringified.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
