//! Creation of signed URLs.
//!
//! Signing takes a URL that already carries a `token` parameter, appends the
//! `expires` timestamp, computes the HMAC over the canonical form of the
//! result and appends it as the `signature` parameter:
//!
//! ```text
//! http://test.com/?token=1234567890987654
//!   -> http://test.com/?token=1234567890987654&expires=1700000060&signature=...
//! ```
//!
//! The input is checked in a fixed order, each check failing with its own
//! [`AuthError`] variant: URL shape, reserved parameters, token, key
//! strength, expiry window.

use std::sync::Arc;

use sigurl_core::{Clock, SigUrlConfig, SystemClock, Token};
use tracing::debug;

use crate::canonical::UrlParts;
use crate::error::AuthError;
use crate::signature::compute_signature;

/// Minimum accepted secret key length, in bytes.
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Produces signed URLs under a fixed configuration.
#[derive(Debug, Clone)]
pub struct UrlSigner {
    config: SigUrlConfig,
    clock: Arc<dyn Clock>,
}

impl UrlSigner {
    /// Create a signer that reads the system clock.
    #[must_use]
    pub fn new(config: SigUrlConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a signer with an explicit time source.
    #[must_use]
    pub fn with_clock(config: SigUrlConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// The configuration this signer was built with.
    #[must_use]
    pub fn config(&self) -> &SigUrlConfig {
        &self.config
    }

    /// Sign `url` so that it stays valid until `expires` (Unix seconds).
    ///
    /// `expires` may lie in the past, in which case the returned URL never
    /// validates.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MalformedUrl`] if the URL has no scheme or host, carries a
    ///   fragment, or has a query that repeats a name or is not strictly encoded
    /// - [`AuthError::ReservedParameter`] if it already has `expires` or `signature`
    /// - [`AuthError::InvalidToken`] if `token` is missing or not 16 characters
    /// - [`AuthError::WeakKey`] if the key is shorter than [`MIN_SECRET_KEY_LENGTH`]
    /// - [`AuthError::ExpiryTooFar`] if `expires` exceeds the validity window
    pub fn sign(&self, url: &str, expires: i64, secret_key: &str) -> Result<String, AuthError> {
        let params = &self.config.params;
        let mut parts = UrlParts::parse(url)?;

        if let Some(name) = parts.query().keys().find(|name| params.is_reserved(name)) {
            return Err(AuthError::ReservedParameter(name.to_owned()));
        }

        let token = parts.query().get(&params.token).ok_or_else(|| {
            AuthError::InvalidToken(format!("missing {} parameter", params.token))
        })?;
        Token::new(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if secret_key.len() < MIN_SECRET_KEY_LENGTH {
            return Err(AuthError::WeakKey {
                length: secret_key.len(),
                minimum: MIN_SECRET_KEY_LENGTH,
            });
        }

        let max_allowed = self
            .clock
            .now()
            .saturating_add(self.config.max_active_duration_secs());
        if expires > max_allowed {
            return Err(AuthError::ExpiryTooFar {
                expires,
                max_allowed,
            });
        }

        parts
            .query_mut()
            .insert(params.expires.as_str(), expires.to_string());
        let canonical_url = parts.to_url();

        debug!(
            canonical_url,
            expires,
            algorithm = %self.config.algorithm,
            "Signing URL"
        );

        let signature = compute_signature(
            self.config.algorithm,
            secret_key.as_bytes(),
            &canonical_url,
        );
        parts
            .query_mut()
            .insert(params.signature.as_str(), signature);

        Ok(parts.to_url())
    }
}

impl Default for UrlSigner {
    fn default() -> Self {
        Self::new(SigUrlConfig::default())
    }
}

/// Sign `url` with the default configuration and the system clock.
///
/// # Errors
///
/// See [`UrlSigner::sign`].
///
/// # Examples
///
/// ```
/// use sigurl_auth::create_signed_url;
///
/// let expires = sigurl_core::now_plus_minutes(10);
/// let signed = create_signed_url(
///     "http://test.com/?token=1234567890987654",
///     expires,
///     "SECRET12123456788765432121TERCES",
/// )
/// .unwrap();
/// assert!(signed.starts_with("http://test.com/?token=1234567890987654&expires="));
/// assert!(signed.contains("&signature="));
/// ```
pub fn create_signed_url(url: &str, expires: i64, secret_key: &str) -> Result<String, AuthError> {
    UrlSigner::default().sign(url, expires, secret_key)
}
