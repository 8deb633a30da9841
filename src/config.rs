//! Build-time site configuration
//!
//! The deployment prefix comes from `[web.app] base_path` in Dioxus.toml,
//! forwarded by build.rs as `TI_OS_BASE_PATH`. There are no runtime flags.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::domain::models::{Location, SiteAsset};
use crate::shared::errors::{Result, SiteError};
use crate::shared::logging;

pub const SITE_TITLE: &str = "TI-OS";

const BUILD_BASE_PATH: Option<&str> = option_env!("TI_OS_BASE_PATH");

static CURRENT: Lazy<SiteConfig> = Lazy::new(SiteConfig::from_build_env);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    /// Always `/` or `/seg/.../` with both slashes present
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            base_path: "/".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn new(title: impl Into<String>, base_path: &str) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            base_path: normalize_base_path(base_path)?,
        })
    }

    /// Configuration baked in at build time
    pub fn current() -> &'static SiteConfig {
        &CURRENT
    }

    fn from_build_env() -> Self {
        let Some(raw) = BUILD_BASE_PATH else {
            return Self::default();
        };
        match Self::new(SITE_TITLE, raw) {
            Ok(config) => config,
            Err(e) => {
                logging::log_invalid_base_path(raw, &e.to_string());
                Self::default()
            }
        }
    }

    /// Map a full browser path to an application location.
    ///
    /// Returns `None` when the path lies outside the base path.
    pub fn strip_base(&self, full_path: &str) -> Option<Location> {
        if self.base_path == "/" {
            return Location::parse(full_path).ok();
        }

        let bare = self.base_path.trim_end_matches('/');
        let rest = full_path.strip_prefix(bare)?;
        if rest.is_empty() || rest.starts_with(['/', '?', '#']) {
            let rest = if rest.starts_with('/') {
                rest.to_string()
            } else {
                format!("/{rest}")
            };
            Location::parse(&rest).ok()
        } else {
            None
        }
    }

    /// Servable URL for an application location
    pub fn href(&self, location: &Location) -> String {
        format!("{}{}", self.base_path, location.as_str().trim_start_matches('/'))
    }

    /// Servable URL for an image in `public/assets/`
    pub fn asset_url(&self, asset: SiteAsset) -> String {
        format!("{}assets/{}", self.base_path, asset.file_name())
    }
}

/// Normalize a deployment prefix to `/seg/.../` form.
pub fn normalize_base_path(raw: &str) -> Result<String> {
    let invalid = |reason: &str| SiteError::InvalidBasePath(format!("'{raw}': {reason}"));

    let trimmed = raw.trim();
    if trimmed.contains("://") {
        return Err(invalid("absolute URLs are not supported"));
    }
    if trimmed.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        return Err(invalid("contains whitespace, '?' or '#'"));
    }

    let inner = trimmed.trim_start_matches('/').trim_end_matches('/');
    if inner.is_empty() {
        return Ok("/".to_string());
    }

    let mut normalized = String::from("/");
    for segment in inner.split('/') {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("relative segments are not allowed")),
            _ => {
                normalized.push_str(segment);
                normalized.push('/');
            }
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployed() -> SiteConfig {
        SiteConfig::new(SITE_TITLE, "eec-172-final-project").unwrap()
    }

    #[test]
    fn test_normalize_base_path_forms() {
        assert_eq!(normalize_base_path("").unwrap(), "/");
        assert_eq!(normalize_base_path("/").unwrap(), "/");
        assert_eq!(normalize_base_path("site").unwrap(), "/site/");
        assert_eq!(normalize_base_path("/site").unwrap(), "/site/");
        assert_eq!(normalize_base_path("/a/b/").unwrap(), "/a/b/");
    }

    #[test]
    fn test_normalize_base_path_rejects_bad_input() {
        for raw in ["https://example.com/", "/a//b", "/a/../b", "/a b", "/a?x", "./a"] {
            assert!(
                matches!(normalize_base_path(raw), Err(SiteError::InvalidBasePath(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_strip_base_under_sub_path() {
        let config = deployed();
        assert_eq!(
            config.strip_base("/eec-172-final-project/about"),
            Some(Location::parse("/about").unwrap())
        );
        assert_eq!(config.strip_base("/eec-172-final-project"), Some(Location::root()));
        assert_eq!(config.strip_base("/eec-172-final-project/"), Some(Location::root()));
        assert_eq!(config.strip_base("/about"), None);
        assert_eq!(config.strip_base("/eec-172-final-projectx/about"), None);
    }

    #[test]
    fn test_strip_base_at_root() {
        let config = SiteConfig::default();
        assert_eq!(
            config.strip_base("/development"),
            Some(Location::parse("/development").unwrap())
        );
        assert_eq!(config.strip_base("development"), None);
    }

    #[test]
    fn test_href_and_asset_url() {
        let config = deployed();
        assert_eq!(config.href(&Location::root()), "/eec-172-final-project/");
        assert_eq!(
            config.href(&Location::parse("/about").unwrap()),
            "/eec-172-final-project/about"
        );
        assert_eq!(
            config.asset_url(SiteAsset::Sidebar),
            "/eec-172-final-project/assets/sidebar.png"
        );
        assert_eq!(
            SiteConfig::default().asset_url(SiteAsset::TexasIcon),
            "/assets/img1.png"
        );
    }

    #[test]
    fn test_current_is_normalized() {
        let current = SiteConfig::current();
        assert_eq!(current.title, SITE_TITLE);
        assert!(current.base_path.starts_with('/') && current.base_path.ends_with('/'));
    }
}
