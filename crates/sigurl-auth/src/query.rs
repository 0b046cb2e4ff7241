//! Ordered query-parameter mapping.
//!
//! Signing input is rebuilt from this mapping on both sides, so parameter
//! order must survive a parse/serialize cycle unchanged. Parameters keep the
//! order in which they were parsed or inserted; they are never sorted.
//!
//! Decoding is strict: every escape must be `%` followed by two hex digits
//! and the decoded bytes must be UTF-8, so distinct inputs never share a
//! canonical string.

use percent_encoding::percent_decode_str;

/// A query string that cannot be mapped one-to-one onto decoded parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A parameter name occurs more than once.
    #[error("duplicate query parameter: {0}")]
    DuplicateParameter(String),

    /// A component has a malformed escape or does not decode to UTF-8.
    #[error("invalid query encoding: {0}")]
    InvalidEncoding(String),
}

/// Insertion-ordered map of decoded query parameters with unique keys.
///
/// # Examples
///
/// ```
/// use sigurl_auth::query::QueryParams;
///
/// let mut params = QueryParams::parse("b=2&a=hello+world").unwrap();
/// params.insert("c", "3");
/// assert_eq!(params.get("a"), Some("hello world"));
/// assert_eq!(params.to_query_string(), "b=2&a=hello+world&c=3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// Empty segments (`a=1&&b=2`) are skipped and a segment without `=` maps
    /// to an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateParameter`] if a parameter name occurs
    /// more than once, or [`QueryError::InvalidEncoding`] if a component has a
    /// malformed escape or is not UTF-8 once decoded.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let mut params = Self::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (raw_key, raw_value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(raw_key)?;
            if params.contains(&key) {
                return Err(QueryError::DuplicateParameter(key));
            }
            let value = decode_component(raw_value)?;
            params.pairs.push((key, value));
        }
        Ok(params)
    }

    /// Value of the parameter `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the parameter `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Set `name` to `value`.
    ///
    /// An existing parameter keeps its position; a new one is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Remove the parameter `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == name)?;
        Some(self.pairs.remove(index).1)
    }

    /// Iterate over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over parameter names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back to an `application/x-www-form-urlencoded` string.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Decode one form-encoded component, rejecting anything that would not
/// survive a serialize/parse cycle byte for byte.
fn decode_component(raw: &str) -> Result<String, QueryError> {
    let bytes = raw.as_bytes();
    for (i, _) in raw.match_indices('%') {
        let escape_ok = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !escape_ok {
            return Err(QueryError::InvalidEncoding(raw.to_owned()));
        }
    }

    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| QueryError::InvalidEncoding(raw.to_owned()))
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
