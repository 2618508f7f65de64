//! `qmtool::error` is a module containing error utilities for the qmtool project.

use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a qmtool-related operation.
pub type QmtoolResult<T> = Result<T, QmtoolError>;

/// An error that occurred while resolving the external tool configuration.
#[derive(pretty_error_debug::Debug, Error)]
pub enum QmtoolError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    /// An error that occurred when performing an IO operation
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An error that occurred when parsing an overrides file.
    #[error("toml deserialize error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    /// An error that occurred when rendering the configuration as TOML.
    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// An error that occurred when rendering the configuration as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
