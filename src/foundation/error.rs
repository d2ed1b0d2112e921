use crate::draw::Op;

/// Convenience result type used across the compositor.
pub type DrawResult<T> = Result<T, DrawError>;

/// Error taxonomy returned by image constructors and drawing entry points.
#[derive(thiserror::Error, Debug)]
pub enum DrawError {
    /// Invalid user-provided buffer data (wrong length, zero stride, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rectangle or offsets that cannot be composited without reading or writing out of bounds.
    #[error("invalid geometry: {0}")]
    Geometry(String),

    /// A Porter-Duff operator that the compositor does not implement.
    #[error("unsupported operator: {0:?}")]
    UnsupportedOp(Op),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawError {
    /// Build a [`DrawError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DrawError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
