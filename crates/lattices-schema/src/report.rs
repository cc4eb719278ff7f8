//! # Structural Reports
//!
//! [`validate_schema`](crate::validate_schema) stops at the first problem.
//! Callers that want every structural problem in one pass (editors, the
//! CLI's `--report-all`) compile the template's JSON Schema export with the
//! `jsonschema` crate and collect all violations instead.
//!
//! The report is advisory. A configuration is valid only if the fail-fast
//! validators accept it.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::template::SchemaTemplate;

/// Error building a structural report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The exported schema could not be compiled.
    #[error("validator build error for template '{template}': {reason}")]
    ValidatorBuild {
        /// Title of the template.
        template: String,
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// A single structural violation.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating value.
    pub instance_path: String,
    /// JSON Pointer path within the exported schema.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Every structural violation found in one document.
#[derive(Debug, Clone, Default)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True if the document is structurally clean.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Compile the JSON Schema export of `template`.
///
/// # Errors
///
/// Returns [`ReportError::ValidatorBuild`] if the export does not compile.
pub fn build_validator(template: &SchemaTemplate) -> Result<Validator, ReportError> {
    let schema = template.to_json_schema();
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&schema).map_err(|e| ReportError::ValidatorBuild {
        template: template.title.to_string(),
        reason: e.to_string(),
    })
}

/// Collect every structural violation of `config` against `template`.
///
/// # Errors
///
/// Returns [`ReportError`] only if the schema itself cannot be compiled; a
/// non-conforming document yields a non-empty report, not an error.
pub fn structural_report(
    config: &Value,
    template: &SchemaTemplate,
) -> Result<ValidationViolations, ReportError> {
    let validator = build_validator(template)?;
    let violations: Vec<Violation> = validator
        .iter_errors(config)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    tracing::debug!(
        template = template.title,
        violations = violations.len(),
        "built structural report"
    );
    Ok(ValidationViolations { violations })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{FieldSpec, SectionSpec};
    use lattices_core::KindSet;
    use serde_json::json;

    static PANEL: SchemaTemplate = SchemaTemplate::new(
        "panel",
        &[
            SectionSpec::new(
                "frame",
                &[
                    FieldSpec::new("width", KindSet::REAL, ""),
                    FieldSpec::new("corners", KindSet::LIST, ""),
                ],
            ),
            SectionSpec::new("flags", &[FieldSpec::new("visible", KindSet::BOOL, "")]),
        ],
    );

    #[test]
    fn export_compiles() {
        build_validator(&PANEL).unwrap();
    }

    #[test]
    fn clean_document_has_empty_report() {
        let doc = json!({"frame": {"width": 2, "corners": []}, "flags": {"visible": false}});
        let report = structural_report(&doc, &PANEL).unwrap();
        assert!(report.is_empty(), "{report}");
    }

    #[test]
    fn report_collects_every_problem() {
        let doc = json!({
            "frame": {"width": "wide", "corners": 4},
            "flags": {"visible": true, "colour": "red"},
        });
        let report = structural_report(&doc, &PANEL).unwrap();
        assert!(report.len() >= 3, "{report}");
        let paths: Vec<&str> = report
            .violations()
            .iter()
            .map(|v| v.instance_path.as_str())
            .collect();
        assert!(paths.contains(&"/frame/width"));
        assert!(paths.contains(&"/frame/corners"));
        assert!(paths.contains(&"/flags"));
    }

    #[test]
    fn violation_display_format() {
        let v = Violation {
            instance_path: "/frame/width".to_string(),
            schema_path: "/properties/frame/properties/width/type".to_string(),
            message: r#""wide" is not of type "number""#.to_string(),
        };
        let display = v.to_string();
        assert!(display.contains("/frame/width"));
        assert!(display.contains("is not of type"));
    }

    #[test]
    fn violation_display_root() {
        let v = Violation {
            instance_path: String::new(),
            schema_path: "/required".to_string(),
            message: r#""flags" is a required property"#.to_string(),
        };
        assert!(v.to_string().contains("(root)"));
    }
}
