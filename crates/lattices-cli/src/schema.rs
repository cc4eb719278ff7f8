//! # Schema Subcommand
//!
//! Prints the sticks template as a JSON Schema (Draft 2020-12) document for
//! editors and external validators.

use anyhow::{Context, Result};
use lattices_sticks::STICKS_TEMPLATE;
use serde_json::Value;

use crate::EXIT_OK;

/// The exported JSON Schema document.
pub fn schema_document() -> Value {
    STICKS_TEMPLATE.to_json_schema()
}

/// Execute the schema subcommand.
pub fn run_schema() -> Result<u8> {
    let text = serde_json::to_string_pretty(&schema_document())
        .context("failed to serialize JSON Schema")?;
    println!("{text}");
    Ok(EXIT_OK)
}
