//! Generation error types

use shared::{ArtifactKind, SharedError};
use thiserror::Error;

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Generation error types
///
/// Per-candidate failures (`Upstream`, `QuotaExceeded`, `EmptyCompletion`,
/// `Transport`, `Parse`, `Structural`) are absorbed by the fallback loop; only
/// `Exhausted`/`NoModelWorked` reach the caller for them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("API credential not configured")]
    Configuration,

    #[error("{0}")]
    InvalidInput(#[from] SharedError),

    #[error("upstream error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("quota exceeded (429)")]
    QuotaExceeded,

    #[error("empty completion from provider")]
    EmptyCompletion,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to parse JSON: {0}")]
    Parse(String),

    #[error("response does not match the expected {kind} shape: {reason}")]
    Structural { kind: ArtifactKind, reason: String },

    #[error("failed to generate {kind}: {last}")]
    Exhausted {
        kind: ArtifactKind,
        last: Box<GenerationError>,
    },

    #[error("failed to generate {kind}: no available model worked")]
    NoModelWorked { kind: ArtifactKind },

    #[error("generation cancelled")]
    Cancelled,
}

impl GenerationError {
    pub fn structural(kind: ArtifactKind, reason: impl Into<String>) -> Self {
        GenerationError::Structural {
            kind,
            reason: reason.into(),
        }
    }

    /// True for a missing credential, including one that ended a fallback run
    pub fn is_configuration(&self) -> bool {
        match self {
            GenerationError::Configuration => true,
            GenerationError::Exhausted { last, .. } => last.is_configuration(),
            _ => false,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GenerationError::InvalidInput(_))
    }

    pub fn is_quota(&self) -> bool {
        matches!(self, GenerationError::QuotaExceeded)
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Transport(err.to_string())
    }
}
