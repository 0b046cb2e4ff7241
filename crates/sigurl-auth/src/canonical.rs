//! Canonical URL construction.
//!
//! The signing input is the URL rebuilt from its components:
//!
//! ```text
//! scheme "://" authority path [ "?" query ]
//! ```
//!
//! where `query` is the form-encoded re-serialization of the ordered
//! parameter mapping. The signer and the verifier both go through
//! [`UrlParts::to_url`], so any difference in how the original string was
//! encoded disappears before the HMAC is computed. An empty query produces
//! no trailing `?`.

use crate::error::AuthError;
use crate::query::QueryParams;

/// A URL decomposed into the components that are covered by the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    scheme: String,
    authority: String,
    path: String,
    query: QueryParams,
}

impl UrlParts {
    /// Decompose an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MalformedUrl`] if the URL cannot be parsed, carries
    /// a fragment, has no scheme or host, or has a query that repeats a
    /// parameter or is not strictly encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigurl_auth::canonical::UrlParts;
    ///
    /// let parts = UrlParts::parse("https://example.com:8443/files?token=abc").unwrap();
    /// assert_eq!(parts.scheme(), "https");
    /// assert_eq!(parts.authority(), "example.com:8443");
    /// assert_eq!(parts.path(), "/files");
    /// assert_eq!(parts.query().get("token"), Some("abc"));
    /// ```
    pub fn parse(url: &str) -> Result<Self, AuthError> {
        // `http::Uri` silently drops fragments; they would ride along unsigned.
        if url.contains('#') {
            return Err(AuthError::MalformedUrl("fragment not allowed".to_owned()));
        }

        let uri: http::Uri = url
            .parse()
            .map_err(|e: http::uri::InvalidUri| AuthError::MalformedUrl(e.to_string()))?;

        let scheme = uri
            .scheme_str()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::MalformedUrl("missing scheme".to_owned()))?;

        let authority = uri
            .authority()
            .filter(|a| !a.host().is_empty())
            .ok_or_else(|| AuthError::MalformedUrl("missing host".to_owned()))?;

        let query = QueryParams::parse(uri.query().unwrap_or(""))
            .map_err(|e| AuthError::MalformedUrl(e.to_string()))?;

        Ok(Self {
            scheme: scheme.to_owned(),
            authority: authority.as_str().to_owned(),
            path: uri.path().to_owned(),
            query,
        })
    }

    /// The URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The authority (`host[:port]`, with userinfo if present).
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The path, `/` when the URL had none.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The decoded query parameters.
    #[must_use]
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Mutable access to the query parameters.
    pub fn query_mut(&mut self) -> &mut QueryParams {
        &mut self.query
    }

    /// Rebuild the URL in canonical form.
    #[must_use]
    pub fn to_url(&self) -> String {
        build_canonical_url(&self.scheme, &self.authority, &self.path, &self.query)
    }
}

/// Build the canonical URL string from its components.
///
/// # Examples
///
/// ```
/// use sigurl_auth::canonical::build_canonical_url;
/// use sigurl_auth::query::QueryParams;
///
/// let empty = QueryParams::new();
/// assert_eq!(build_canonical_url("http", "test.com", "/", &empty), "http://test.com/");
///
/// let query: QueryParams = [("token", "1234567890987654")].into_iter().collect();
/// assert_eq!(
///     build_canonical_url("http", "test.com", "/", &query),
///     "http://test.com/?token=1234567890987654"
/// );
/// ```
#[must_use]
pub fn build_canonical_url(
    scheme: &str,
    authority: &str,
    path: &str,
    query: &QueryParams,
) -> String {
    let query_string = query.to_query_string();
    if query_string.is_empty() {
        format!("{scheme}://{authority}{path}")
    } else {
        format!("{scheme}://{authority}{path}?{query_string}")
    }
}
