//! Expiring, tamper-evident URLs signed with HMAC.
//!
//! A signed URL carries three query parameters besides whatever the caller
//! put there:
//!
//! - `token` - caller-supplied opaque 16-character identifier
//! - `expires` - Unix timestamp after which the URL is rejected
//! - `signature` - base64 HMAC over the canonical URL, `expires` included
//!
//! Verification needs no server-side state beyond the signing keys. Several
//! keys can be accepted at once so that keys can be rotated without
//! invalidating URLs already handed out.
//!
//! # Usage
//!
//! ```rust
//! use sigurl_auth::generate::generate_token;
//! use sigurl_auth::{create_signed_url, validate_signed_url};
//!
//! let key = "SECRET12123456788765432121TERCES";
//! let token = generate_token();
//! let url = format!("https://files.example.com/download?token={token}");
//!
//! let signed = create_signed_url(&url, sigurl_core::now_plus_hours(1), key).unwrap();
//! let outcome = validate_signed_url(&signed, &[key]).unwrap();
//! assert_eq!(outcome.token().map(|t| t.as_str()), Some(token.as_str()));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical URL construction shared by signer and verifier
//! - [`error`] - Caller-misuse error types
//! - [`generate`] - Random token and key generation
//! - [`keys`] - Key provider trait and in-memory implementation
//! - [`query`] - Insertion-ordered query parameter mapping
//! - [`signature`] - HMAC computation and constant-time comparison
//! - [`signer`] - Signed URL creation
//! - [`verifier`] - Signed URL validation

pub mod canonical;
pub mod error;
pub mod generate;
pub mod keys;
pub mod query;
pub mod signature;
pub mod signer;
pub mod verifier;

pub use error::AuthError;
pub use keys::{KeyProvider, StaticKeyProvider};
pub use signer::{MIN_SECRET_KEY_LENGTH, UrlSigner, create_signed_url};
pub use verifier::{MIN_URL_LENGTH, UrlVerifier, ValidationOutcome, validate_signed_url};
