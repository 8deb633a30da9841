use serde::Serialize;
use std::fmt;

use crate::shared::errors::{Result, SiteError};

/// A normalized path inside the application, base path already removed.
///
/// Always starts with `/`, never contains empty segments, and only the root
/// ends with a slash. Query strings and fragments are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn root() -> Self {
        Location("/".to_string())
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let path = raw
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        if path.is_empty() {
            return Err(SiteError::InvalidPath("empty path".to_string()));
        }
        if !path.starts_with('/') {
            return Err(SiteError::InvalidPath(format!(
                "'{raw}' does not start with '/'"
            )));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(SiteError::InvalidPath(format!("'{raw}' contains whitespace")));
        }

        Ok(Self::from_parts(path.split('/')))
    }

    /// Build from segments already decoded by the router.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::from_parts(segments.iter().map(AsRef::as_ref))
    }

    fn from_parts<'a>(parts: impl Iterator<Item = &'a str>) -> Self {
        let mut path = String::new();
        for segment in parts.filter(|s| !s.is_empty()) {
            path.push('/');
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push('/');
        }
        Location(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn segments(&self) -> Vec<String> {
        self.0
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// ASCII case-insensitive equality, the router's default matching rule.
    pub fn matches(&self, pattern: &str) -> bool {
        self.0.eq_ignore_ascii_case(pattern)
    }

    /// True when `self` equals `prefix` or continues it at a segment boundary.
    pub fn starts_with_segments(&self, prefix: &str) -> bool {
        if prefix == "/" {
            return true;
        }
        let path = self.0.as_bytes();
        let prefix = prefix.as_bytes();
        if path.len() < prefix.len() || !path[..prefix.len()].eq_ignore_ascii_case(prefix) {
            return false;
        }
        path.len() == prefix.len() || path[prefix.len()] == b'/'
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
