//! Optional replacements for the literal configuration defaults.

use std::{fs, path::Path};

use getset::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::QmtoolResult;

use super::{
    Environment, QMTOOL_EXECUTABLE_ENV_VAR, QMTOOL_LIBRARY_ENV_VAR, QMTOOL_MPI_PREFIX_ENV_VAR,
    QMTOOL_RUN_DIR_ENV_VAR,
};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Optional replacements for the literal defaults of an
/// [`ExternalToolConfig`](super::ExternalToolConfig).
///
/// The scratch directory has no override; it is always derived from the base temporary
/// directory and the process id.
///
/// ## Format
///
/// Overrides files are TOML with any subset of the following keys:
///
/// ```toml
/// executable_path = "/opt/orca/orca"
/// run_dir = "/work/run01"
/// mpi_prefix = "mpirun -np 4"
/// library_path = "/opt/qm/lib/libqmmm.so"
/// ```
#[derive(
    Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder, Getters,
)]
#[getset(get = "pub with_prefix")]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// The path to the external solver binary.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default, setter(into, strip_option))]
    executable_path: Option<String>,

    /// The working directory for the solver.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default, setter(into, strip_option))]
    run_dir: Option<String>,

    /// The MPI launcher prefix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default, setter(into, strip_option))]
    mpi_prefix: Option<String>,

    /// The path to the shared library.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[builder(default, setter(into, strip_option))]
    library_path: Option<String>,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl ConfigOverrides {
    /// Reads overrides from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> QmtoolResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let overrides: Self = toml::from_str(&contents)?;
        tracing::debug!("loaded overrides from {}: {overrides:?}", path.display());
        Ok(overrides)
    }

    /// Collects overrides from the `QMTOOL_*` environment variables.
    pub fn from_env(env: &impl Environment) -> Self {
        Self {
            executable_path: env.var(QMTOOL_EXECUTABLE_ENV_VAR),
            run_dir: env.var(QMTOOL_RUN_DIR_ENV_VAR),
            mpi_prefix: env.var(QMTOOL_MPI_PREFIX_ENV_VAR),
            library_path: env.var(QMTOOL_LIBRARY_ENV_VAR),
        }
    }

    /// Layers `other` on top of `self`. Fields set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            executable_path: other.executable_path.or(self.executable_path),
            run_dir: other.run_dir.or(self.run_dir),
            mpi_prefix: other.mpi_prefix.or(self.mpi_prefix),
            library_path: other.library_path.or(self.library_path),
        }
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.executable_path.is_none()
            && self.run_dir.is_none()
            && self.mpi_prefix.is_none()
            && self.library_path.is_none()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::{config::StaticEnvironment, QmtoolError};

    use super::*;

    #[test]
    fn test_overrides_merge_prefers_other() {
        let file = ConfigOverrides::builder()
            .executable_path("/opt/orca/orca")
            .mpi_prefix("mpirun -np 2")
            .build();
        let env = ConfigOverrides::builder().mpi_prefix("srun").build();

        let merged = file.merge(env);
        assert_eq!(merged.get_executable_path().as_deref(), Some("/opt/orca/orca"));
        assert_eq!(merged.get_mpi_prefix().as_deref(), Some("srun"));
        assert_eq!(merged.get_run_dir(), &None);
    }

    #[test]
    fn test_overrides_from_env() {
        let env = StaticEnvironment::new(1)
            .with_var(QMTOOL_RUN_DIR_ENV_VAR, "/work")
            .with_var(QMTOOL_MPI_PREFIX_ENV_VAR, "");

        let overrides = ConfigOverrides::from_env(&env);
        assert_eq!(overrides.get_run_dir().as_deref(), Some("/work"));
        // An empty value is still an explicit override.
        assert_eq!(overrides.get_mpi_prefix().as_deref(), Some(""));
        assert!(overrides.get_executable_path().is_none());
        assert!(overrides.get_library_path().is_none());
    }

    #[test]
    fn test_overrides_is_empty() {
        assert!(ConfigOverrides::default().is_empty());
        assert!(!ConfigOverrides::builder().run_dir("/work").build().is_empty());
    }

    #[test_log::test]
    fn test_overrides_from_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "executable_path = \"/opt/orca/orca\"")?;
        writeln!(file, "library_path = \"\"")?;

        let overrides = ConfigOverrides::from_file(file.path())?;
        assert_eq!(
            overrides,
            ConfigOverrides::builder()
                .executable_path("/opt/orca/orca")
                .library_path("")
                .build()
        );

        Ok(())
    }

    #[test]
    fn test_overrides_from_file_rejects_unknown_keys() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "scratch_dir = \"/tmp/1\"")?;

        let result = ConfigOverrides::from_file(file.path());
        assert!(matches!(result, Err(QmtoolError::TomlDeserialize(_))));

        Ok(())
    }

    #[test]
    fn test_overrides_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigOverrides::from_file(dir.path().join("qmtool.toml"));
        assert!(matches!(result, Err(QmtoolError::Io(_))));
    }
}
