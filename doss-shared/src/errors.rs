//! Error taxonomy for volume maintenance operations.
//!
//! Every variant bubbles to the command boundary as-is. Nothing here is
//! retried; the operator re-runs the command.

use thiserror::Error;

/// Result type for doss operations.
pub type DossResult<T> = Result<T, DossError>;

#[derive(Error, Debug)]
pub enum DossError {
    /// List, remove or inspect failed against the volume backend.
    /// Displayed verbatim.
    #[error("{0}")]
    Directory(String),

    /// No client could be built for the container runtime.
    #[error("cannot connect to container runtime: {0}")]
    Connection(String),

    /// The interactive prompt itself broke (not an operator cancel).
    #[error("prompt failed {0}")]
    Selection(String),

    /// A removal conflict enriched with the containers holding the volume.
    ///
    /// `message` is the backend's original text and always comes first.
    #[error("{message}\n{containers}")]
    VolumeInUse { message: String, containers: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("usage: {0}")]
    Usage(String),

    #[error("attach failed: {0}")]
    Attach(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DossError {
    /// True when the error is the unmodified backend text.
    pub fn is_directory(&self) -> bool {
        matches!(self, DossError::Directory(_))
    }
}
