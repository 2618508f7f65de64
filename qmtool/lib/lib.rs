//! `qmtool` resolves where a QM/MM interface finds its external quantum-chemistry solver.
//!
//! # Overview
//!
//! The interface layer needs five settings before it can launch the solver and load its
//! shared library:
//!
//! - the solver executable path
//! - a per-process scratch directory (`$TMPDIR/<pid>`)
//! - the run directory (default `.`)
//! - an optional MPI launcher prefix (default empty, run directly)
//! - the shared library path
//!
//! [`config::load`] assembles them into an [`config::ExternalToolConfig`]. Literal defaults can
//! be replaced through a TOML overrides file or `QMTOOL_*` environment variables. The loader
//! reads only through the [`config::Environment`] trait, so tests and embedders can supply a
//! fixed environment and process id.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use qmtool::config;
//!
//! fn main() -> qmtool::QmtoolResult<()> {
//!     let config = config::load()?;
//!     println!("scratch: {}", config.get_scratch_dir());
//!     println!("launch: {:?}", config.launch_command());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration record, defaults, overrides and loader
//! - [`path`] - Scratch directory derivation

#![warn(missing_docs)]

mod error;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub mod cli;
pub mod config;
pub mod path;

pub use error::*;
