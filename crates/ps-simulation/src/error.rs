use std::path::PathBuf;

use ps_core::CoreError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while building or configuring a simulation. Ticking never fails.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A parameter failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] CoreError),

    /// A configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration file is not valid TOML for [`crate::SimConfig`].
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration could not be rendered as TOML.
    #[error("cannot render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}
