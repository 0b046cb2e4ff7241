//! Validation of signed URLs.
//!
//! A URL validates when its signature, recomputed over the canonical URL
//! without the `signature` parameter, matches under at least one of the
//! supplied keys and its `expires` timestamp is still in the future.
//!
//! Every way a well-formed call can fail (missing signature, unknown key,
//! tampered component, expired timestamp) yields the same
//! [`ValidationOutcome::Invalid`]. The reason is only logged, so callers and
//! clients cannot tell "expired" apart from "forged". Only argument misuse is
//! reported as an [`AuthError`].

use std::fmt;
use std::sync::Arc;

use sigurl_core::{Clock, SigUrlConfig, SystemClock, Token};
use tracing::debug;

use crate::canonical::UrlParts;
use crate::error::AuthError;
use crate::keys::KeyProvider;
use crate::signature::{compute_signature, signatures_match};

/// Shortest input accepted as a URL to validate.
pub const MIN_URL_LENGTH: usize = 5;

/// Result of validating a signed URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The URL is authentic and unexpired; carries its token.
    Valid(Token),
    /// The URL must be rejected.
    Invalid,
}

impl ValidationOutcome {
    /// Whether the URL validated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The token of a valid URL.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match self {
            Self::Valid(token) => Some(token),
            Self::Invalid => None,
        }
    }

    /// Consume the outcome, returning the token of a valid URL.
    #[must_use]
    pub fn into_token(self) -> Option<Token> {
        match self {
            Self::Valid(token) => Some(token),
            Self::Invalid => None,
        }
    }
}

/// Internal reason for rejecting a URL. Logged, never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Unparseable,
    MissingSignature,
    MissingExpiry,
    SignatureMismatch,
    Expired,
    MissingToken,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unparseable => "unparseable URL",
            Self::MissingSignature => "missing signature",
            Self::MissingExpiry => "missing or invalid expiry",
            Self::SignatureMismatch => "signature mismatch",
            Self::Expired => "expired",
            Self::MissingToken => "missing or invalid token",
        })
    }
}

/// Validates signed URLs under a fixed configuration.
#[derive(Debug, Clone)]
pub struct UrlVerifier {
    config: SigUrlConfig,
    clock: Arc<dyn Clock>,
}

impl UrlVerifier {
    /// Create a verifier that reads the system clock.
    #[must_use]
    pub fn new(config: SigUrlConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a verifier with an explicit time source.
    #[must_use]
    pub fn with_clock(config: SigUrlConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// The configuration this verifier was built with.
    #[must_use]
    pub fn config(&self) -> &SigUrlConfig {
        &self.config
    }

    /// Validate `url` against a set of candidate keys.
    ///
    /// Returns [`ValidationOutcome::Valid`] with the URL's token if any key
    /// reproduces the signature and the URL has not expired.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidInput`] if `url` is shorter than
    /// [`MIN_URL_LENGTH`], or [`AuthError::NoKeysProvided`] if `secret_keys`
    /// is empty.
    pub fn validate<K: AsRef<str>>(
        &self,
        url: &str,
        secret_keys: &[K],
    ) -> Result<ValidationOutcome, AuthError> {
        if url.len() < MIN_URL_LENGTH {
            return Err(AuthError::InvalidInput(format!(
                "URL must be at least {MIN_URL_LENGTH} characters"
            )));
        }
        if secret_keys.is_empty() {
            return Err(AuthError::NoKeysProvided);
        }

        match self.check(url, secret_keys) {
            Ok(token) => {
                debug!(token = %token, "Signed URL validated");
                Ok(ValidationOutcome::Valid(token))
            }
            Err(reason) => {
                debug!(%reason, "Signed URL rejected");
                Ok(ValidationOutcome::Invalid)
            }
        }
    }

    /// Validate `url` against the keys currently offered by `provider`.
    ///
    /// # Errors
    ///
    /// See [`UrlVerifier::validate`].
    pub fn validate_with_provider(
        &self,
        url: &str,
        provider: &dyn KeyProvider,
    ) -> Result<ValidationOutcome, AuthError> {
        let keys = provider.active_keys();
        debug!(?provider, "Loaded keys from provider");
        self.validate(url, keys.as_slice())
    }

    fn check<K: AsRef<str>>(&self, url: &str, secret_keys: &[K]) -> Result<Token, Rejection> {
        let params = &self.config.params;
        let mut parts = UrlParts::parse(url).map_err(|_| Rejection::Unparseable)?;

        let provided = parts
            .query_mut()
            .remove(&params.signature)
            .ok_or(Rejection::MissingSignature)?;

        let expires: i64 = parts
            .query()
            .get(&params.expires)
            .and_then(|v| v.parse().ok())
            .ok_or(Rejection::MissingExpiry)?;

        let canonical_url = parts.to_url();
        debug!(
            canonical_url,
            expires,
            keys = secret_keys.len(),
            "Validating signed URL"
        );

        // Stops at the first matching key only; mismatches never short-circuit.
        let matched = secret_keys.iter().any(|key| {
            let expected =
                compute_signature(self.config.algorithm, key.as_ref().as_bytes(), &canonical_url);
            signatures_match(&provided, &expected)
        });
        if !matched {
            return Err(Rejection::SignatureMismatch);
        }

        if expires <= self.clock.now() {
            return Err(Rejection::Expired);
        }

        parts
            .query()
            .get(&params.token)
            .and_then(|t| Token::new(t).ok())
            .ok_or(Rejection::MissingToken)
    }
}

impl Default for UrlVerifier {
    fn default() -> Self {
        Self::new(SigUrlConfig::default())
    }
}

/// Validate `url` with the default configuration and the system clock.
///
/// # Errors
///
/// See [`UrlVerifier::validate`].
///
/// # Examples
///
/// ```
/// use sigurl_auth::{ValidationOutcome, create_signed_url, validate_signed_url};
///
/// let key = "SECRET12123456788765432121TERCES";
/// let signed = create_signed_url(
///     "http://test.com/?token=1234567890987654",
///     sigurl_core::now_plus_minutes(1),
///     key,
/// )
/// .unwrap();
///
/// let outcome = validate_signed_url(&signed, &[key]).unwrap();
/// assert_eq!(outcome.token().map(|t| t.as_str()), Some("1234567890987654"));
///
/// let forged = signed.replace("test.com", "evil.com");
/// assert_eq!(validate_signed_url(&forged, &[key]).unwrap(), ValidationOutcome::Invalid);
/// ```
pub fn validate_signed_url<K: AsRef<str>>(
    url: &str,
    secret_keys: &[K],
) -> Result<ValidationOutcome, AuthError> {
    UrlVerifier::default().validate(url, secret_keys)
}
