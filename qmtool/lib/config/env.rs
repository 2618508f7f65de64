//! The environment seam the configuration loader reads from.

use std::collections::HashMap;

//--------------------------------------------------------------------------------------------------
// Traits
//--------------------------------------------------------------------------------------------------

/// A source of environment variables and process identity.
///
/// The loader only ever reads through this trait, so callers can swap the real process
/// environment for a fixed one.
pub trait Environment {
    /// Returns the value of the environment variable `key`, or `None` if it is unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns the identifier of the current process.
    fn process_id(&self) -> u32;
}

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

/// A fixed environment with an explicit set of variables and process id.
///
/// ## Examples
///
/// ```
/// use qmtool::config::{Environment, StaticEnvironment};
///
/// let env = StaticEnvironment::new(4242).with_var("TMPDIR", "/tmp");
///
/// assert_eq!(env.var("TMPDIR").as_deref(), Some("/tmp"));
/// assert_eq!(env.var("HOME"), None);
/// assert_eq!(env.process_id(), 4242);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
    pid: u32,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl StaticEnvironment {
    /// Creates an empty environment reporting `pid` as its process id.
    pub fn new(pid: u32) -> Self {
        Self {
            vars: HashMap::new(),
            pid,
        }
    }

    /// Sets the variable `key` to `value`.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode bytes are replaced rather than treated as unset.
        let value = std::env::var_os(key).map(|v| v.to_string_lossy().into_owned());
        tracing::trace!("read environment variable: {key}={value:?}");
        value
    }

    fn process_id(&self) -> u32 {
        std::process::id()
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn process_id(&self) -> u32 {
        self.pid
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn process_id(&self) -> u32 {
        (**self).process_id()
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_environment_last_write_wins() {
        let env = StaticEnvironment::new(1)
            .with_var("TMPDIR", "/tmp")
            .with_var("TMPDIR", "/scratch");

        assert_eq!(env.var("TMPDIR").as_deref(), Some("/scratch"));
    }

    #[test]
    fn test_system_environment_process_id() {
        assert_eq!(SystemEnvironment.process_id(), std::process::id());
    }

    #[test]
    fn test_environment_through_reference() {
        fn pid_of(env: impl Environment) -> u32 {
            env.process_id()
        }

        let env = StaticEnvironment::new(77);
        assert_eq!(pid_of(&env), 77);
    }
}
