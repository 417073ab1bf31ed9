//! Error taxonomy shared across the workspace.
//!
//! Nothing here is fatal: validation errors are reported inline,
//! generation errors surface once per user action, and persistence
//! problems degrade silently to empty collections.

use thiserror::Error;

/// Missing required user input. No state change occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter an industry")]
    MissingIndustry,
    #[error("please enter a budget")]
    MissingBudget,
}

/// Any failure in the remote generation call chain.
///
/// The caller never retries automatically; a half-parsed idea is worse
/// than none, so there is no partial-field recovery either.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to the generation backend failed: {0}")]
    Network(String),

    #[error("generation backend returned status {status}")]
    Upstream { status: u16, details: String },

    #[error("generation request timed out")]
    Timeout,

    #[error("response contained no candidate text")]
    EmptyCandidate,

    #[error("could not parse model output as JSON: {0}")]
    MalformedOutput(String),

    #[error("model output is missing or malformed in field `{0}`")]
    InvalidField(&'static str),
}

impl GenerationError {
    /// Collapse a transport error into the taxonomy. Timeouts keep their
    /// own kind so the UI can word the notice differently.
    pub fn from_transport(err: &dyn std::error::Error, is_timeout: bool) -> Self {
        if is_timeout {
            GenerationError::Timeout
        } else {
            GenerationError::Network(err.to_string())
        }
    }

    /// Map a non-success HTTP status from the relay or the upstream API.
    /// The relay answers 504 when its upstream deadline expires.
    pub fn from_status(status: u16, details: String) -> Self {
        if status == 504 {
            GenerationError::Timeout
        } else {
            GenerationError::Upstream { status, details }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, GenerationError::Timeout)
    }
}
