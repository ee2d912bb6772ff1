/// Convenience result type used across promoreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Error taxonomy for composition construction.
///
/// Per-frame evaluation never fails; everything here is reported while building interpolators,
/// springs, scenes, timelines or compositions.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid interpolation breakpoints, easing or spring parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating frame ranges (thread pool setup, range bounds).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
