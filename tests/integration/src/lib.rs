//! End-to-end tests for SigUrl signing and validation.
//!
//! These exercise the public API the way a host service would: issue a URL
//! with a fresh token, hand it around as a string, and validate it later
//! against the current key set.
//!
//! Run them with:
//! ```text
//! cargo test -p sigurl-integration
//! ```

use std::sync::{Arc, Once};

use sigurl_auth::{UrlSigner, UrlVerifier};
use sigurl_core::{FixedClock, SigUrlConfig};

mod test_expiry;
mod test_generate;
mod test_rotation;
mod test_roundtrip;

static INIT: Once = Once::new();

/// Key used throughout the scenarios.
pub const TEST_KEY: &str = "SECRET12123456788765432121TERCES";

/// Token used throughout the scenarios.
pub const TEST_TOKEN: &str = "1234567890987654";

/// Fixed "now" for clock-sensitive scenarios.
pub const NOW: i64 = 1_700_000_000;

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// The unsigned URL used throughout the scenarios.
#[must_use]
pub fn test_url() -> String {
    format!("http://test.com/?token={TEST_TOKEN}")
}

/// Signer and verifier sharing a clock frozen at `now`.
#[must_use]
pub fn pair_at(now: i64, config: &SigUrlConfig) -> (UrlSigner, UrlVerifier) {
    init_tracing();
    let clock = Arc::new(FixedClock::new(now));
    (
        UrlSigner::with_clock(config.clone(), clock.clone()),
        UrlVerifier::with_clock(config.clone(), clock),
    )
}

/// Verifier with its clock frozen at `now`.
#[must_use]
pub fn verifier_at(now: i64) -> UrlVerifier {
    init_tracing();
    UrlVerifier::with_clock(SigUrlConfig::default(), Arc::new(FixedClock::new(now)))
}
