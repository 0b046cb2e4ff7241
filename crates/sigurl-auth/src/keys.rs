//! Key provider trait and implementations.
//!
//! Key lifecycle (generation, rotation, retirement) belongs to the caller.
//! This module only defines the seam through which a verifier asks for the
//! set of keys that are acceptable right now.

use std::fmt;

/// Source of the secret keys currently accepted for verification.
///
/// During a rotation window an implementation returns both the new and the
/// outgoing key. Implementations may back this with a database,
/// configuration file, or any other secret store.
pub trait KeyProvider: fmt::Debug + Send + Sync {
    /// The keys a signed URL may have been signed with, in any order.
    fn active_keys(&self) -> Vec<String>;
}

/// A simple in-memory key provider.
///
/// Suitable for tests, tools, and services whose keys come from static
/// configuration. `Debug` output shows the number of keys, never the keys.
///
/// # Examples
///
/// ```
/// use sigurl_auth::keys::{KeyProvider, StaticKeyProvider};
///
/// let provider = StaticKeyProvider::new(vec![
///     "current-key-0123456789abcdef0123".to_owned(),
///     "previous-key-0123456789abcdef012".to_owned(),
/// ]);
///
/// assert_eq!(provider.active_keys().len(), 2);
/// assert!(!format!("{provider:?}").contains("current-key"));
/// ```
#[derive(Clone)]
pub struct StaticKeyProvider {
    keys: Vec<String>,
}

impl StaticKeyProvider {
    /// Create a new `StaticKeyProvider` from an iterable of keys.
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Build a provider from a comma-separated list, ignoring blank entries.
    #[must_use]
    pub fn from_comma_separated(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(ToOwned::to_owned),
        )
    }

    /// Number of keys held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the provider holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Debug for StaticKeyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticKeyProvider")
            .field("keys", &self.keys.len())
            .finish()
    }
}

impl KeyProvider for StaticKeyProvider {
    fn active_keys(&self) -> Vec<String> {
        self.keys.clone()
    }
}
