//! # Default and Init Subcommands
//!
//! `default` prints the packaged sticks configuration; `init` writes it to a
//! file that does not exist yet, so an existing configuration is never
//! overwritten.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use lattices_sticks::default_yaml;

use crate::EXIT_OK;

/// File stem used when `--name` is not given.
pub const DEFAULT_STEM: &str = "parameters";

/// Arguments for the `lattices init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the configuration into (created if missing).
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// File stem; `.yaml` is appended, then `_1`, `_2`, ... if taken.
    #[arg(long, default_value = DEFAULT_STEM)]
    pub name: String,
}

/// Execute the default subcommand.
pub fn run_default() -> Result<u8> {
    print!("{}", default_yaml());
    Ok(EXIT_OK)
}

/// Execute the init subcommand.
pub fn run_init(args: &InitArgs) -> Result<u8> {
    let path = write_default(&args.dir, &args.name)?;
    println!("{}", path.display());
    Ok(EXIT_OK)
}

/// Write the default configuration into `dir` and return the path written.
///
/// The file is created with `create_new`, so a file that appears between
/// picking a name and writing it is never overwritten; the next suffix is
/// tried instead.
pub fn write_default(dir: &Path, stem: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    for path in candidate_paths(dir, stem) {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("failed to create {}", path.display()));
            }
        };
        file.write_all(default_yaml().as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote default configuration");
        return Ok(path);
    }
    anyhow::bail!("no free file name for '{stem}' in {}", dir.display())
}

/// `dir/stem.yaml`, then `dir/stem_N.yaml` for N = 1, 2, ...
pub fn candidate_paths<'a>(dir: &'a Path, stem: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
    std::iter::once(dir.join(format!("{stem}.yaml")))
        .chain((1u64..).map(move |n| dir.join(format!("{stem}_{n}.yaml"))))
}
