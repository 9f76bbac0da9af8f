/// Result type returned by every fallible spriteforge API.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Failure categories for configuration, persistence and rasterization.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// A sprite config, state selection or editor request that cannot be honored.
    #[error("validation error: {0}")]
    Validation(String),

    /// A saved sprite document that is not JSON or lacks the expected shape.
    #[error("format error: {0}")]
    Format(String),

    /// A render surface could not be allocated or composited.
    #[error("render error: {0}")]
    Render(String),

    /// A sprite document could not be written as JSON.
    #[error("serialization error: {0}")]
    Serde(String),

    /// IO and other dependency errors, with their context chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`SpriteError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
