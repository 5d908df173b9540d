use thiserror::Error;

/// Custom error type for the gradchain engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradChainError {
    #[error("Operation '{operation}' does not implement `{method}`")]
    NotImplemented {
        operation: String,
        method: &'static str,
    },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Payload creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GradChainError {
    /// Shorthand used by payload arithmetic and the backward engine.
    pub(crate) fn shape_mismatch(expected: &[usize], actual: &[usize], operation: &str) -> Self {
        GradChainError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
            operation: operation.to_string(),
        }
    }
}
