use once_cell::sync::Lazy;
use serde::Serialize;

use super::Location;
use crate::shared::errors::{Result, SiteError};

/// How a navigation link decides whether it is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    Exact,
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub match_mode: MatchMode,
}

impl NavLink {
    pub const fn exact(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            match_mode: MatchMode::Exact,
        }
    }

    pub const fn prefix(label: &'static str, target: &'static str) -> Self {
        Self {
            label,
            target,
            match_mode: MatchMode::Prefix,
        }
    }

    pub fn is_active(&self, location: &Location) -> bool {
        match self.match_mode {
            MatchMode::Exact => location.matches(self.target),
            MatchMode::Prefix => location.starts_with_segments(self.target),
        }
    }

    pub fn location(&self) -> Location {
        Location::from_segments(&self.target.split('/').collect::<Vec<_>>())
    }
}

/// A link paired with its computed active flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavState {
    pub link: NavLink,
    pub active: bool,
}

const SITE_LINKS: [NavLink; 3] = [
    NavLink::exact("Home", "/"),
    NavLink::prefix("About", "/about"),
    NavLink::prefix("Development", "/development"),
];

static SITE_MENU: Lazy<NavMenu> = Lazy::new(|| NavMenu {
    links: SITE_LINKS.to_vec(),
});

/// Ordered set of navigation links
#[derive(Debug, Clone, PartialEq)]
pub struct NavMenu {
    links: Vec<NavLink>,
}

impl NavMenu {
    pub fn new(links: Vec<NavLink>) -> Result<Self> {
        for link in &links {
            let normalized = Location::parse(link.target)?;
            if normalized.as_str() != link.target {
                return Err(SiteError::InvalidPath(format!(
                    "link target '{}' is not normalized (expected '{}')",
                    link.target, normalized
                )));
            }
            // A prefix root link would be active on every page.
            if normalized.is_root() && link.match_mode != MatchMode::Exact {
                return Err(SiteError::RootLinkRequiresExactMatch(link.label.to_string()));
            }
        }
        Ok(Self { links })
    }

    /// Home (exact), About, Development.
    pub fn site() -> &'static NavMenu {
        &SITE_MENU
    }

    pub fn states(&self, location: &Location) -> Vec<NavState> {
        self.links
            .iter()
            .map(|link| NavState {
                link: link.clone(),
                active: link.is_active(location),
            })
            .collect()
    }
}
