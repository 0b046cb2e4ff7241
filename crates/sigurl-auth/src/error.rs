//! Error types for URL signing and verification.
//!
//! Every variant of [`AuthError`] is a caller-misuse condition: a URL that
//! cannot be signed, a weak key, or arguments that make validation
//! meaningless. Runtime validation failures (tampering, expiry, unknown key)
//! are never errors; they are reported as
//! [`ValidationOutcome::Invalid`](crate::ValidationOutcome::Invalid).

/// Errors raised when a signer or verifier is called with unusable input.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The URL has no scheme or host, or cannot be parsed at all.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// The URL already carries a parameter the signer appends itself.
    #[error("Reserved query parameter present: {0}")]
    ReservedParameter(String),

    /// The token parameter is missing or does not have the required length.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The secret key is shorter than the minimum length.
    #[error("Secret key too short: {length} characters, at least {minimum} required")]
    WeakKey {
        /// Length of the rejected key.
        length: usize,
        /// Minimum accepted length.
        minimum: usize,
    },

    /// The requested expiry lies beyond the maximum validity window.
    #[error("Expiry {expires} exceeds the maximum allowed timestamp {max_allowed}")]
    ExpiryTooFar {
        /// The requested expiry timestamp.
        expires: i64,
        /// The latest timestamp currently accepted.
        max_allowed: i64,
    },

    /// The URL passed for validation is empty or too short to be a URL.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation was requested without any candidate key.
    #[error("No secret keys provided for validation")]
    NoKeysProvided,
}
