// src/numerics/error.rs
// Error taxonomy shared by every numeric type.

/// Errors raised when a geometric value is used outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("Index out of range: index {index} is not below {len}")]
    Index { index: usize, len: usize },

    #[error("Argument out of range: {what} is {value}, limit {limit}")]
    Range {
        what: &'static str,
        value: i64,
        limit: i64,
    },

    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl GeometryError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        GeometryError::Index { index, len }
    }

    pub(crate) fn shape(expected: impl ToString, found: impl ToString) -> Self {
        let err = GeometryError::ShapeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        };
        tracing::debug!(error = %err, "shape contract violated");
        err
    }

    pub(crate) fn not_implemented(operation: &'static str) -> Self {
        tracing::warn!(operation, "called an operation that is not implemented");
        GeometryError::NotImplemented(operation)
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
