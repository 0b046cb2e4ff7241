//! Domain type definitions shared by the signer and the verifier.

use std::fmt;
use std::str::FromStr;

use crate::SigUrlError;

/// Opaque access token carried in a signed URL (16 characters).
///
/// Tokens are produced by the caller (usually with a random generator) and
/// tracked externally; the only property enforced here is the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Token(String);

impl Token {
    /// Required token length in characters.
    pub const LENGTH: usize = 16;

    /// Create a new token from a string.
    ///
    /// # Errors
    /// Returns an error if the value is not exactly [`Token::LENGTH`] characters long.
    pub fn new(value: impl Into<String>) -> Result<Self, SigUrlError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual != Self::LENGTH {
            return Err(SigUrlError::InvalidToken {
                expected: Self::LENGTH,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Get the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// HMAC algorithm used to compute URL signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SignatureAlgorithm {
    /// HMAC with SHA-1. Only kept for interoperability with legacy issuers.
    #[serde(rename = "HMAC-SHA1")]
    HmacSha1,
    /// HMAC with SHA-256.
    #[default]
    #[serde(rename = "HMAC-SHA256")]
    HmacSha256,
    /// HMAC with SHA-384.
    #[serde(rename = "HMAC-SHA384")]
    HmacSha384,
    /// HMAC with SHA-512.
    #[serde(rename = "HMAC-SHA512")]
    HmacSha512,
}

impl SignatureAlgorithm {
    /// The canonical name of the algorithm (e.g. `HMAC-SHA256`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HmacSha1 => "HMAC-SHA1",
            Self::HmacSha256 => "HMAC-SHA256",
            Self::HmacSha384 => "HMAC-SHA384",
            Self::HmacSha512 => "HMAC-SHA512",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = SigUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let name = normalized.strip_prefix("HMAC-").unwrap_or(&normalized);
        match name {
            "SHA1" | "SHA-1" => Ok(Self::HmacSha1),
            "SHA256" | "SHA-256" => Ok(Self::HmacSha256),
            "SHA384" | "SHA-384" => Ok(Self::HmacSha384),
            "SHA512" | "SHA-512" => Ok(Self::HmacSha512),
            _ => Err(SigUrlError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

/// Names of the query parameters the signer reads and reserves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParamNames {
    /// Parameter carrying the caller-supplied token.
    pub token: String,
    /// Parameter carrying the expiry timestamp (reserved).
    pub expires: String,
    /// Parameter carrying the signature (reserved).
    pub signature: String,
}

impl ParamNames {
    /// Whether `name` is one of the parameters the signer appends itself.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        name == self.expires || name == self.signature
    }

    /// Check that the three names are non-empty and pairwise distinct.
    ///
    /// # Errors
    /// Returns [`SigUrlError::Config`] describing the first problem found.
    pub fn check(&self) -> Result<(), SigUrlError> {
        for (field, value) in [
            ("token", &self.token),
            ("expires", &self.expires),
            ("signature", &self.signature),
        ] {
            if value.is_empty() {
                return Err(SigUrlError::Config(format!(
                    "{field} parameter name must not be empty"
                )));
            }
        }
        if self.token == self.expires
            || self.token == self.signature
            || self.expires == self.signature
        {
            return Err(SigUrlError::Config(
                "token, expires and signature parameter names must be distinct".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            token: "token".to_owned(),
            expires: "expires".to_owned(),
            signature: "signature".to_owned(),
        }
    }
}
