//! Random token and key generation.
//!
//! Both generators draw from the thread-local CSPRNG and hex-encode the
//! bytes, so the output length is twice the number of random bytes.

use rand::RngExt;

/// Random bytes behind a token (16 hex characters).
const TOKEN_BYTES: usize = 8;

/// Random bytes behind a secret key (32 hex characters).
const KEY_BYTES: usize = 16;

/// Generate a fresh token for a signed URL.
///
/// Uniqueness across issued URLs is the caller's responsibility; collisions
/// are merely improbable.
///
/// # Examples
///
/// ```
/// use sigurl_auth::generate::generate_token;
///
/// let token = generate_token();
/// assert_eq!(token.len(), 16);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_token() -> String {
    random_hex::<TOKEN_BYTES>()
}

/// Generate a secret key suitable for signing.
///
/// # Examples
///
/// ```
/// use sigurl_auth::generate::generate_key;
///
/// let key = generate_key();
/// assert_eq!(key.len(), 32);
/// assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn generate_key() -> String {
    random_hex::<KEY_BYTES>()
}

fn random_hex<const N: usize>() -> String {
    let mut rng = rand::rng();
    let mut buf = [0u8; N];
    rng.fill(&mut buf[..]);
    hex::encode(buf)
}
