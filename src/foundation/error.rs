/// Result alias used across the crate.
pub type StitchResult<T> = Result<T, StitchError>;

/// Errors produced while planning, compositing, encoding or writing a stitched image.
///
/// Every variant is terminal for the request that produced it; the crate never retries.
#[derive(thiserror::Error, Debug)]
pub enum StitchError {
    /// A source image is missing, zero-sized or malformed, or placements are inconsistent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A format option is out of range.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The codec rejected the canvas or the requested format is not supported.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Encoded bytes could not be written to their destination.
    #[error("write error: {0}")]
    Write(String),

    /// Options JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StitchError {
    /// Build [`StitchError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build [`StitchError::InvalidOption`].
    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Self::InvalidOption(msg.into())
    }

    /// Build [`StitchError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Build [`StitchError::Write`].
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Build [`StitchError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
