//! Validated cache keys

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

/// A three-digit status code such as `200` or `404`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Parse a key, accepting exactly three ASCII digits
    pub fn parse(raw: &str) -> Option<Self> {
        KEY_RE.is_match(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
