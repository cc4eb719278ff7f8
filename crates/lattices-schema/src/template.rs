//! # Schema Templates
//!
//! A [`SchemaTemplate`] is static reference data: the exact set of sections
//! a configuration must have, the exact set of fields in each section, and
//! the kinds each field accepts. Templates are declared as `static` items,
//! never mutated, and passed by reference to [`validate_schema`].
//!
//! A template can also render itself as a JSON Schema (Draft 2020-12)
//! document for editors and for the aggregated structural report.
//!
//! [`validate_schema`]: crate::validate_schema

use std::collections::BTreeSet;

use lattices_core::{KindSet, ValueKind};
use serde_json::{json, Map, Value};

/// JSON Schema dialect emitted by [`SchemaTemplate::to_json_schema`].
pub const JSON_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// One leaf field of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key inside the section.
    pub name: &'static str,
    /// Kinds the value may have.
    pub accepts: KindSet,
    /// Short description, exported to JSON Schema.
    pub description: &'static str,
}

impl FieldSpec {
    /// A field accepting `accepts`.
    pub const fn new(name: &'static str, accepts: KindSet, description: &'static str) -> Self {
        Self {
            name,
            accepts,
            description,
        }
    }
}

/// One second-level mapping of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Top-level key of the section.
    pub name: &'static str,
    /// Every field the section must contain, in declaration order.
    pub fields: &'static [FieldSpec],
}

impl SectionSpec {
    /// A section with the given fields.
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Look up a field by key.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The exact key set of this section.
    pub fn field_names(&self) -> BTreeSet<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

/// Declarative description of a whole configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaTemplate {
    /// Title used in exported JSON Schema.
    pub title: &'static str,
    /// Every section the configuration must contain, in validation order.
    pub sections: &'static [SectionSpec],
}

impl SchemaTemplate {
    /// A template over the given sections.
    pub const fn new(title: &'static str, sections: &'static [SectionSpec]) -> Self {
        Self { title, sections }
    }

    /// Look up a section by key.
    pub fn section(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// The exact top-level key set.
    pub fn section_names(&self) -> BTreeSet<&'static str> {
        self.sections.iter().map(|s| s.name).collect()
    }

    /// Render the template as a JSON Schema document.
    ///
    /// Both levels are closed (`additionalProperties: false`) and every key
    /// is `required`. Note that JSON Schema's `integer` also matches floats
    /// with a zero fractional part, so the export is slightly more permissive
    /// than [`validate_schema`](crate::validate_schema) for int-only fields.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for section in self.sections {
            let mut fields = Map::new();
            for field in section.fields {
                fields.insert(field.name.to_string(), field_schema(field));
            }
            properties.insert(
                section.name.to_string(),
                json!({
                    "type": "object",
                    "required": section.fields.iter().map(|f| f.name).collect::<Vec<_>>(),
                    "additionalProperties": false,
                    "properties": fields,
                }),
            );
        }

        json!({
            "$schema": JSON_SCHEMA_DIALECT,
            "title": self.title,
            "type": "object",
            "required": self.sections.iter().map(|s| s.name).collect::<Vec<_>>(),
            "additionalProperties": false,
            "properties": properties,
        })
    }
}

fn field_schema(field: &FieldSpec) -> Value {
    let mut schema = Map::new();
    if let Some(types) = json_types(field.accepts) {
        schema.insert("type".to_string(), types);
    }
    if !field.description.is_empty() {
        schema.insert("description".to_string(), Value::from(field.description));
    }
    Value::Object(schema)
}

/// JSON Schema `type` keyword for a kind set; `None` for "any".
fn json_types(kinds: KindSet) -> Option<Value> {
    if kinds.is_any() {
        return None;
    }
    let has_float = kinds.contains(ValueKind::Float);
    let mut names: Vec<&str> = Vec::new();
    for kind in kinds.kinds() {
        let name = match kind {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            // "number" already covers integers.
            ValueKind::Int if has_float => continue,
            ValueKind::Int => "integer",
            ValueKind::Float => "number",
            ValueKind::Str => "string",
            ValueKind::List => "array",
            ValueKind::Mapping => "object",
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }
    match names.as_slice() {
        [single] => Some(Value::from(*single)),
        _ => Some(json!(names)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SHAPES: SchemaTemplate = SchemaTemplate::new(
        "shapes",
        &[
            SectionSpec::new(
                "circle",
                &[
                    FieldSpec::new("radius", KindSet::REAL, "Circle radius."),
                    FieldSpec::new("filled", KindSet::BOOL, ""),
                ],
            ),
            SectionSpec::new(
                "tags",
                &[
                    FieldSpec::new("labels", KindSet::LIST, ""),
                    FieldSpec::new("extra", KindSet::ANY, ""),
                    FieldSpec::new("count", KindSet::INT, ""),
                ],
            ),
        ],
    );

    #[test]
    fn lookups() {
        assert!(SHAPES.section("circle").is_some());
        assert!(SHAPES.section("square").is_none());
        let circle = SHAPES.section("circle").unwrap();
        assert_eq!(circle.field("radius").unwrap().accepts, KindSet::REAL);
        assert_eq!(
            circle.field_names().into_iter().collect::<Vec<_>>(),
            vec!["filled", "radius"]
        );
        assert_eq!(
            SHAPES.section_names().into_iter().collect::<Vec<_>>(),
            vec!["circle", "tags"]
        );
    }

    #[test]
    fn json_schema_is_closed_and_required() {
        let schema = SHAPES.to_json_schema();
        assert_eq!(schema["$schema"], JSON_SCHEMA_DIALECT);
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["required"], json!(["circle", "tags"]));
        let circle = &schema["properties"]["circle"];
        assert_eq!(circle["additionalProperties"], false);
        assert_eq!(circle["required"], json!(["radius", "filled"]));
    }

    #[test]
    fn json_schema_field_types() {
        let schema = SHAPES.to_json_schema();
        let circle = &schema["properties"]["circle"]["properties"];
        assert_eq!(circle["radius"]["type"], "number");
        assert_eq!(circle["radius"]["description"], "Circle radius.");
        assert_eq!(circle["filled"]["type"], "boolean");
        assert!(circle["filled"].get("description").is_none());

        let tags = &schema["properties"]["tags"]["properties"];
        assert_eq!(tags["labels"]["type"], "array");
        assert_eq!(tags["extra"], json!({}));
        assert_eq!(tags["count"]["type"], "integer");
    }

    #[test]
    fn mixed_kinds_become_type_arrays() {
        const NUM_OR_STR: KindSet = KindSet::of(&[ValueKind::Int, ValueKind::Str]);
        assert_eq!(json_types(NUM_OR_STR), Some(json!(["integer", "string"])));
        assert_eq!(json_types(KindSet::ANY), None);
    }
}
