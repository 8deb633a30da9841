use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

use super::Location;
use crate::shared::errors::{Result, SiteError};

/// Page views the router can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Home,
    About,
    Development,
}

impl ViewId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::About => "about",
            ViewId::Development => "development",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::About => "About",
            ViewId::Development => "Development",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub view: ViewId,
}

impl RouteEntry {
    pub const fn new(pattern: &'static str, view: ViewId) -> Self {
        Self { pattern, view }
    }
}

/// Outcome of looking a location up in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(ViewId),
    NoMatch,
}

impl Resolution {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Resolution::Matched(view) => Some(*view),
            Resolution::NoMatch => None,
        }
    }
}

const SITE_ROUTES: [RouteEntry; 3] = [
    RouteEntry::new("/", ViewId::Home),
    RouteEntry::new("/about", ViewId::About),
    RouteEntry::new("/development", ViewId::Development),
];

static SITE_TABLE: Lazy<RouteTable> = Lazy::new(|| RouteTable {
    entries: SITE_ROUTES.to_vec(),
});

/// Flat, immutable path → view table.
///
/// Patterns are whole normalized paths; at most one entry matches any
/// location because patterns are unique ignoring ASCII case.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            let normalized = Location::parse(entry.pattern)?;
            if normalized.as_str() != entry.pattern {
                return Err(SiteError::InvalidPath(format!(
                    "route pattern '{}' is not normalized (expected '{}')",
                    entry.pattern, normalized
                )));
            }
            if !seen.insert(entry.pattern.to_ascii_lowercase()) {
                return Err(SiteError::DuplicateRoute(entry.pattern.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// The site's route table: `/`, `/about`, `/development`.
    pub fn site() -> &'static RouteTable {
        &SITE_TABLE
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn resolve(&self, location: &Location) -> Resolution {
        self.entries
            .iter()
            .find(|entry| location.matches(entry.pattern))
            .map_or(Resolution::NoMatch, |entry| Resolution::Matched(entry.view))
    }

    pub fn path_of(&self, view: ViewId) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.view == view)
            .map(|entry| entry.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Resolution {
        RouteTable::site().resolve(&Location::parse(path).unwrap())
    }

    #[test]
    fn test_defined_paths_resolve_to_their_view() {
        assert_eq!(resolve("/"), Resolution::Matched(ViewId::Home));
        assert_eq!(resolve("/about"), Resolution::Matched(ViewId::About));
        assert_eq!(resolve("/development"), Resolution::Matched(ViewId::Development));
    }

    #[test]
    fn test_trailing_slash_and_case_still_match() {
        assert_eq!(resolve("/about/"), Resolution::Matched(ViewId::About));
        assert_eq!(resolve("/Development"), Resolution::Matched(ViewId::Development));
    }

    #[test]
    fn test_undefined_paths_do_not_match() {
        // No fallback view exists; this is the baseline if one is added.
        assert_eq!(resolve("/nonexistent"), Resolution::NoMatch);
        assert_eq!(resolve("/development/setup"), Resolution::NoMatch);
        assert_eq!(resolve("/about/team"), Resolution::NoMatch);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let location = Location::parse("/about").unwrap();
        let table = RouteTable::site();
        assert_eq!(table.resolve(&location), table.resolve(&location));
    }

    #[test]
    fn test_new_rejects_duplicate_patterns() {
        let result = RouteTable::new(vec![
            RouteEntry::new("/about", ViewId::About),
            RouteEntry::new("/About", ViewId::Home),
        ]);
        assert!(matches!(result, Err(SiteError::DuplicateRoute(p)) if p == "/About"));
    }

    #[test]
    fn test_new_rejects_unnormalized_patterns() {
        assert!(RouteTable::new(vec![RouteEntry::new("/about/", ViewId::About)]).is_err());
        assert!(RouteTable::new(vec![RouteEntry::new("about", ViewId::About)]).is_err());
    }

    #[test]
    fn test_site_table_passes_validation() {
        let rebuilt = RouteTable::new(SITE_ROUTES.to_vec()).unwrap();
        assert_eq!(&rebuilt, RouteTable::site());
        assert_eq!(rebuilt.path_of(ViewId::Development), Some("/development"));
    }
}
