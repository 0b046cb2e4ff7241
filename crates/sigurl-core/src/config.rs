//! Configuration for URL signing and verification.
//!
//! Configuration is driven by environment variables. Everything that the
//! signer and the verifier treat as a constant (reserved parameter names, the
//! maximum validity window, the HMAC algorithm) lives here so it can be
//! injected at construction time.

use crate::error::{SigUrlError, SigUrlResult};
use crate::types::{ParamNames, SignatureAlgorithm};

/// Global configuration for SigUrl.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigUrlConfig {
    /// Upper bound, in hours from signing time, for an `expires` value.
    pub max_active_duration_hours: u32,
    /// HMAC algorithm used for signatures.
    pub algorithm: SignatureAlgorithm,
    /// Query parameter names.
    pub params: ParamNames,
    /// Log level.
    pub log_level: String,
}

impl Default for SigUrlConfig {
    fn default() -> Self {
        Self {
            max_active_duration_hours: Self::DEFAULT_MAX_ACTIVE_DURATION_HOURS,
            algorithm: SignatureAlgorithm::default(),
            params: ParamNames::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl SigUrlConfig {
    /// Default validity window: seven days.
    pub const DEFAULT_MAX_ACTIVE_DURATION_HOURS: u32 = 168;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> SigUrlResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting parameter names collide.
    pub fn from_lookup<F>(lookup: F) -> SigUrlResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("SIGURL_MAX_ACTIVE_HOURS") {
            config.max_active_duration_hours = v.trim().parse().map_err(|_| {
                SigUrlError::Config(format!(
                    "SIGURL_MAX_ACTIVE_HOURS is not a valid hour count: {v}"
                ))
            })?;
        }
        if let Some(v) = lookup("SIGURL_ALGORITHM") {
            config.algorithm = v.parse()?;
        }
        if let Some(v) = lookup("SIGURL_TOKEN_PARAM") {
            config.params.token = v;
        }
        if let Some(v) = lookup("SIGURL_EXPIRES_PARAM") {
            config.params.expires = v;
        }
        if let Some(v) = lookup("SIGURL_SIGNATURE_PARAM") {
            config.params.signature = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        config.params.check()?;
        Ok(config)
    }

    /// Maximum validity window in seconds.
    #[must_use]
    pub fn max_active_duration_secs(&self) -> i64 {
        i64::from(self.max_active_duration_hours) * crate::clock::SECONDS_PER_HOUR
    }
}
