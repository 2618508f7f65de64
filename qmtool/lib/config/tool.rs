//! The external tool configuration record and its loader.

use getset::Getters;
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::{path, QmtoolError, QmtoolResult};

use super::{
    ConfigOverrides, Environment, SystemEnvironment, DEFAULT_EXECUTABLE_PATH,
    DEFAULT_LIBRARY_PATH, DEFAULT_MPI_PREFIX, DEFAULT_RUN_DIR, TMPDIR_ENV_VAR,
};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Where the external quantum-chemistry solver and its shared library live, and how the solver
/// is launched.
///
/// The record is read-only once built. Use [`load`] to resolve it from the process
/// environment, or [`ExternalToolConfig::builder`] to assemble one directly.
///
/// ## Examples
///
/// ```
/// use qmtool::config::{load_with, StaticEnvironment};
///
/// let env = StaticEnvironment::new(4242).with_var("TMPDIR", "/tmp");
/// let config = load_with(&env).unwrap();
///
/// assert_eq!(config.get_scratch_dir(), "/tmp/4242");
/// assert_eq!(config.get_run_dir(), ".");
/// assert_eq!(config.get_mpi_prefix(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder, Getters)]
#[getset(get = "pub with_prefix")]
pub struct ExternalToolConfig {
    /// The path to the external solver binary.
    #[builder(setter(into))]
    executable_path: String,

    /// The per-process scratch directory for the solver's intermediate files.
    #[builder(setter(into))]
    scratch_dir: String,

    /// The working directory the solver runs in.
    #[builder(default = DEFAULT_RUN_DIR.to_string(), setter(into))]
    run_dir: String,

    /// The launcher prefix. Empty means the solver is run directly.
    #[builder(default = DEFAULT_MPI_PREFIX.to_string(), setter(into))]
    mpi_prefix: String,

    /// The path to the shared library loaded by the host process.
    #[builder(default = DEFAULT_LIBRARY_PATH.to_string(), setter(into))]
    library_path: String,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ExternalToolConfig {
    /// Returns `true` if the solver is launched through an MPI prefix.
    pub fn runs_under_mpi(&self) -> bool {
        !self.mpi_prefix.trim().is_empty()
    }

    /// Returns the argv used to start the solver: the MPI prefix split on whitespace, followed
    /// by the executable path.
    ///
    /// Nothing is spawned or checked; the caller appends its own arguments and runs the command
    /// in [`run_dir`](Self::get_run_dir).
    ///
    /// ## Examples
    ///
    /// ```
    /// use qmtool::config::ExternalToolConfig;
    ///
    /// let config = ExternalToolConfig::builder()
    ///     .executable_path("/opt/orca/orca")
    ///     .scratch_dir("/tmp/1")
    ///     .mpi_prefix("mpirun -np 4")
    ///     .build();
    ///
    /// assert_eq!(config.launch_command(), ["mpirun", "-np", "4", "/opt/orca/orca"]);
    /// ```
    pub fn launch_command(&self) -> Vec<String> {
        self.mpi_prefix
            .split_whitespace()
            .map(str::to_string)
            .chain(std::iter::once(self.executable_path.clone()))
            .collect()
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Resolves the configuration from the running process.
///
/// Reads `TMPDIR` and the current process id to derive the scratch directory, and applies any
/// `QMTOOL_*` environment overrides. Nothing is created on disk.
///
/// ## Errors
///
/// Returns [`QmtoolError::MissingEnvironmentVariable`] if `TMPDIR` is not set.
pub fn load() -> QmtoolResult<ExternalToolConfig> {
    load_with(&SystemEnvironment)
}

/// Resolves the configuration from `env` instead of the running process.
pub fn load_with(env: &impl Environment) -> QmtoolResult<ExternalToolConfig> {
    load_with_overrides(env, ConfigOverrides::default())
}

/// Resolves the configuration from `env`, applying `overrides` beneath the environment's own
/// `QMTOOL_*` overrides.
pub fn load_with_overrides(
    env: &impl Environment,
    overrides: ConfigOverrides,
) -> QmtoolResult<ExternalToolConfig> {
    let base = env
        .var(TMPDIR_ENV_VAR)
        .ok_or_else(|| QmtoolError::MissingEnvironmentVariable(TMPDIR_ENV_VAR.to_string()))?;

    let scratch_dir = path::scratch_dir_for(&base, env.process_id());

    let overrides = overrides.merge(ConfigOverrides::from_env(env));
    if !overrides.is_empty() {
        tracing::debug!("applying overrides: {overrides:?}");
    }

    let config = ExternalToolConfig {
        executable_path: overrides
            .get_executable_path()
            .clone()
            .unwrap_or_else(|| DEFAULT_EXECUTABLE_PATH.to_string()),
        scratch_dir,
        run_dir: overrides
            .get_run_dir()
            .clone()
            .unwrap_or_else(|| DEFAULT_RUN_DIR.to_string()),
        mpi_prefix: overrides
            .get_mpi_prefix()
            .clone()
            .unwrap_or_else(|| DEFAULT_MPI_PREFIX.to_string()),
        library_path: overrides
            .get_library_path()
            .clone()
            .unwrap_or_else(|| DEFAULT_LIBRARY_PATH.to_string()),
    };

    tracing::debug!("resolved external tool config: {config:?}");
    Ok(config)
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
