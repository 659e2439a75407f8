/// Convenience result type used across Unfurl.
pub type UnfurlResult<T> = Result<T, UnfurlError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum UnfurlError {
    /// Invalid user-provided or theme data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or validating interpolation tables.
    #[error("table error: {0}")]
    Table(String),

    /// Errors in scroll-signal plumbing (dead handles, unknown reveal ids).
    #[error("signal error: {0}")]
    Signal(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UnfurlError {
    /// Build a [`UnfurlError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`UnfurlError::Table`] value.
    pub fn table(msg: impl Into<String>) -> Self {
        Self::Table(msg.into())
    }

    /// Build a [`UnfurlError::Signal`] value.
    pub fn signal(msg: impl Into<String>) -> Self {
        Self::Signal(msg.into())
    }

    /// Build a [`UnfurlError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
