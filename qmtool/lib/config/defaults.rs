//! Literal defaults and the environment variable names the loader reads.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The default path to the external solver binary.
pub const DEFAULT_EXECUTABLE_PATH: &str = "/opt/qm/bin/solver";

/// The default working directory for the external solver.
pub const DEFAULT_RUN_DIR: &str = ".";

/// The default MPI launcher prefix. Empty means the solver is run directly.
pub const DEFAULT_MPI_PREFIX: &str = "";

/// The default path to the shared library loaded by the host process.
pub const DEFAULT_LIBRARY_PATH: &str = "/opt/qm/lib/libqmmm.so";

/// The environment variable holding the base temporary directory.
pub const TMPDIR_ENV_VAR: &str = "TMPDIR";

/// The environment variable overriding the solver executable path.
pub const QMTOOL_EXECUTABLE_ENV_VAR: &str = "QMTOOL_EXECUTABLE";

/// The environment variable overriding the solver run directory.
pub const QMTOOL_RUN_DIR_ENV_VAR: &str = "QMTOOL_RUN_DIR";

/// The environment variable overriding the MPI launcher prefix.
pub const QMTOOL_MPI_PREFIX_ENV_VAR: &str = "QMTOOL_MPI_PREFIX";

/// The environment variable overriding the shared library path.
pub const QMTOOL_LIBRARY_ENV_VAR: &str = "QMTOOL_LIBRARY";
