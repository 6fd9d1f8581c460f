/// Convenience result type used across wobble.
pub type WobbleResult<T> = Result<T, WobbleError>;

/// Top-level error taxonomy used by generator and export APIs.
#[derive(thiserror::Error, Debug)]
pub enum WobbleError {
    /// Foreign SVG text is malformed or has no `svg` element.
    #[error("parse error: {0}")]
    Parse(String),

    /// A preset asset could not be retrieved.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Structural misuse of an API (unknown preset, index out of range).
    #[error("validation error: {0}")]
    Validation(String),

    /// An export was requested while the same control was still in flight.
    #[error("busy: {0}")]
    Busy(String),

    /// Rasterizing a keyframe still failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WobbleError {
    /// Build a [`WobbleError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`WobbleError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`WobbleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WobbleError::Busy`] value.
    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    /// Build a [`WobbleError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
