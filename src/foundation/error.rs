/// Convenience result type used across ProKit.
pub type ProkitResult<T> = Result<T, ProkitError>;

/// Top-level error taxonomy used by crate APIs.
///
/// The rendering path never produces these. They come from configuration loading, the
/// generative-model boundary, and rasterization.
#[derive(thiserror::Error, Debug)]
pub enum ProkitError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while turning a scene into pixels.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Transport or schema failures at the generative-model boundary.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// IO failure with its context chain, e.g. an unreadable configuration file.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProkitError {
    /// Build a [`ProkitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProkitError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ProkitError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build a [`ProkitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
