//! # Validate Subcommand
//!
//! Loads a YAML file and validates it as a sticks configuration. By default
//! the file holds overrides that are merged onto the packaged defaults; with
//! `--standalone` it must be a complete configuration on its own.
//!
//! Output is one `OK:` or `FAIL:` line. `--report-all` first prints every
//! structural problem the JSON Schema export finds, which helps when a file
//! has several mistakes at once.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use lattices_schema::{load_yaml_file, structural_report};
use lattices_sticks::{
    merge_with_defaults, validate_with, OccupancyBound, SticksConfig, SticksError,
    ValidationOptions, STICKS_TEMPLATE,
};

use crate::{EXIT_INVALID, EXIT_OK};

/// Occupancy index bound accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Occupancy {
    /// Indices lie in [0, nticks).
    #[default]
    Ticks,
    /// Indices lie in [0, nticks - nmers + 1).
    Chain,
}

impl From<Occupancy> for OccupancyBound {
    fn from(value: Occupancy) -> Self {
        match value {
            Occupancy::Ticks => OccupancyBound::Ticks,
            Occupancy::Chain => OccupancyBound::Chain,
        }
    }
}

/// Arguments for the `lattices validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// YAML file to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Treat the file as a complete configuration instead of overrides.
    #[arg(long)]
    pub standalone: bool,

    /// Also print every structural problem, not just the first failure.
    #[arg(long)]
    pub report_all: bool,

    /// Upper bound for adsorbing, desorbing and fixed indices.
    #[arg(long, value_enum, default_value_t = Occupancy::Ticks)]
    pub occupancy: Occupancy,

    /// Print the validated configuration as YAML.
    #[arg(long)]
    pub print: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if valid, 1 if invalid. Unreadable or malformed
/// files are operational errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let document = load_yaml_file(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;
    let options = ValidationOptions::default().with_occupancy_bound(args.occupancy.into());
    tracing::info!(
        path = %args.path.display(),
        standalone = args.standalone,
        occupancy_bound = %options.occupancy_bound,
        "validating configuration"
    );

    let config = if args.standalone {
        document
    } else {
        match merge_overrides(&document) {
            Ok(merged) => merged,
            Err(SticksError::Validation(err)) => {
                println!("FAIL: {}: {err}", args.path.display());
                return Ok(EXIT_INVALID);
            }
            Err(other) => return Err(other).context("failed to merge overrides onto defaults"),
        }
    };

    if args.report_all {
        let report = structural_report(&config, &STICKS_TEMPLATE)
            .context("failed to build structural report")?;
        println!("Structural report: {} problem(s)", report.len());
        if !report.is_empty() {
            println!("{report}");
        }
    }

    if let Err(err) = validate_with(&config, &options) {
        println!("FAIL: {}: {err}", args.path.display());
        return Ok(EXIT_INVALID);
    }

    println!("OK: {}", args.path.display());
    if args.print {
        let typed = SticksConfig::from_value_with(&config, &options)
            .context("failed to build typed configuration")?;
        print!("{}", typed.to_yaml().context("failed to serialize configuration")?);
    }
    Ok(EXIT_OK)
}

/// A document with no content means "no overrides".
fn merge_overrides(document: &Value) -> Result<Value, SticksError> {
    if document.is_null() {
        return merge_with_defaults(&Value::Object(Default::default()));
    }
    merge_with_defaults(document)
}
