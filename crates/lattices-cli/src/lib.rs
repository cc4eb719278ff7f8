//! # lattices-cli: Command-Line Interface
//!
//! Provides the `lattices` binary.
//!
//! ## Subcommands
//!
//! - `lattices validate PATH`: validate a sticks configuration file, merged
//!   onto the defaults unless `--standalone` is given.
//! - `lattices default`: print the packaged default configuration.
//! - `lattices init [DIR]`: write the default configuration to a new file.
//! - `lattices schema`: print the JSON Schema export.
//!
//! ```bash
//! lattices init configs --name run
//! lattices validate configs/run.yaml --report-all
//! lattices validate overrides.yaml --occupancy chain -vv
//! ```
//!
//! Handlers return the process exit code; an `Err` means an operational
//! failure and exits with [`EXIT_OPERATIONAL_ERROR`].

pub mod generate;
pub mod schema;
pub mod validate;

/// The command succeeded and the configuration is valid.
pub const EXIT_OK: u8 = 0;

/// The configuration is invalid.
pub const EXIT_INVALID: u8 = 1;

/// The command could not run (unreadable file, malformed YAML, I/O error).
pub const EXIT_OPERATIONAL_ERROR: u8 = 2;
