/// Convenience result type used across figcompose.
pub type FigureResult<T> = Result<T, FigureError>;

/// Top-level error taxonomy used by composition APIs.
///
/// Every variant is fail-fast: the composer never retries or emits a partial figure. Font
/// resolution is the only recoverable failure and is not represented here (labels are skipped).
#[derive(thiserror::Error, Debug)]
pub enum FigureError {
    /// No source images were supplied.
    #[error("empty input: at least one image is required")]
    EmptyInput,

    /// Corrupt or undecodable image, or degenerate computed dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Out-of-range layout parameters or unparsable configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Internal drawing invariant violated (e.g. paste outside the canvas).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FigureError {
    /// Build a [`FigureError::InvalidImage`] value.
    pub fn invalid_image(msg: impl Into<String>) -> Self {
        Self::InvalidImage(msg.into())
    }

    /// Build a [`FigureError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`FigureError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
