/// Convenience result type used across seamline.
pub type SeamlineResult<T> = Result<T, SeamlineError>;

/// Top-level error taxonomy used by scheduling APIs.
#[derive(thiserror::Error, Debug)]
pub enum SeamlineError {
    /// Invalid user-provided props or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while probing media sources for metadata.
    #[error("probe error: {0}")]
    Probe(String),

    /// Configuration or precondition errors detected before scheduling.
    #[error("schedule error: {0}")]
    Schedule(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeamlineError {
    /// Build a [`SeamlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeamlineError::Probe`] value.
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    /// Build a [`SeamlineError::Schedule`] value.
    pub fn schedule(msg: impl Into<String>) -> Self {
        Self::Schedule(msg.into())
    }

    /// Build a [`SeamlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
