//! Error types for summit-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from admin session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying I/O failure (permission denied, read-only filesystem, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with the file path.
    #[error("failed to parse admin session at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`, so there is no `~/.summit/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// A form field name that is not part of the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}'; expected: name, email, message")]
pub struct FieldError(pub String);
