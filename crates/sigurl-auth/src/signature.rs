//! HMAC signature computation and comparison.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use sigurl_core::SignatureAlgorithm;
use subtle::ConstantTimeEq;

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the base64-encoded HMAC of `data` under `key`.
///
/// # Examples
///
/// ```
/// use sigurl_auth::signature::compute_signature;
/// use sigurl_core::SignatureAlgorithm;
///
/// let sig = compute_signature(SignatureAlgorithm::HmacSha256, b"key", "data");
/// assert_eq!(sig, "UDH+PZicbRU3oBP6bnOdojRj/a7DtwE32Cjjas4iG9A=");
/// ```
#[must_use]
pub fn compute_signature(algorithm: SignatureAlgorithm, key: &[u8], data: &str) -> String {
    BASE64.encode(hmac_digest(algorithm, key, data.as_bytes()))
}

/// Compare a provided signature with the expected one in constant time.
#[must_use]
pub fn signatures_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Compute the raw HMAC bytes for the given algorithm.
fn hmac_digest(algorithm: SignatureAlgorithm, key: &[u8], data: &[u8]) -> Vec<u8> {
    match algorithm {
        SignatureAlgorithm::HmacSha1 => mac::<HmacSha1>(key, data),
        SignatureAlgorithm::HmacSha256 => mac::<HmacSha256>(key, data),
        SignatureAlgorithm::HmacSha384 => mac::<HmacSha384>(key, data),
        SignatureAlgorithm::HmacSha512 => mac::<HmacSha512>(key, data),
    }
}

fn mac<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac =
        <M as KeyInit>::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
