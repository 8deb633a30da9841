//! Structured logging for the TI-OS site
//!
//! Every event carries an `operation` field so navigation, resolution and
//! configuration events can be filtered independently.

use crate::config::SiteConfig;
use crate::domain::models::{Location, ViewId};

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Startup,
    Config,
    RouteResolution,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Startup => "startup",
            LogOperation::Config => "config",
            LogOperation::RouteResolution => "route_resolution",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log application mount
pub fn log_app_mounted(config: &SiteConfig) {
    tracing::info!(
        operation = LogOperation::Startup.as_str(),
        title = %config.title,
        base_path = %config.base_path,
        "Site mounted"
    );
}

/// Log a rejected build-time base path
pub fn log_invalid_base_path(raw: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        raw_base_path = raw,
        error = error,
        "Ignoring invalid base path, serving from /"
    );
}

/// Log a successful route resolution
pub fn log_route_resolved(location: &Location, view: ViewId) {
    tracing::debug!(
        operation = LogOperation::RouteResolution.as_str(),
        location = %location,
        view = view.as_str(),
        "Resolved route"
    );
}

/// Log a location no route entry matches (no fallback view exists)
pub fn log_route_unmatched(location: &Location) {
    tracing::warn!(
        operation = LogOperation::RouteResolution.as_str(),
        location = %location,
        "No route matches location, rendering empty content"
    );
}

/// Log the computed navbar state
pub fn log_nav_states(location: &Location, link_count: usize, active_count: usize) {
    tracing::trace!(
        operation = LogOperation::Navigation.as_str(),
        location = %location,
        link_count = link_count,
        active_count = active_count,
        "Computed navbar link states"
    );
}
