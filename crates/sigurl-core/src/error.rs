//! Error types for the SigUrl core.

/// Core error type for SigUrl configuration and domain types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigUrlError {
    /// Token does not have the required shape.
    #[error("invalid token: expected {expected} characters, got {actual}")]
    InvalidToken {
        /// Required token length.
        expected: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The requested signature algorithm is not supported.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for SigUrl core operations.
pub type SigUrlResult<T> = Result<T, SigUrlError>;
