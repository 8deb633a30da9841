//! Native inspection tool for the site's routing tables.
//!
//! Answers "which page does this URL show" and "which nav link lights up"
//! without starting a browser.

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{SITE_TITLE, SiteConfig};
use crate::domain::models::{Location, NavMenu, RouteTable};
use crate::domain::services::{nav_states, resolve_view};
use crate::shared::errors::{Result, SiteError};

#[derive(Parser)]
#[command(name = "site-inspect")]
#[command(about = "Inspect TI-OS site routes and navigation")]
pub struct Cli {
    /// Deployment prefix to use instead of the one baked in at build time
    #[arg(long, global = true)]
    pub base_path: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every route and the page it shows
    Routes,
    /// Show which page a path resolves to
    Resolve {
        /// Full browser path under the base path, else an application path.
        /// A path under the base path is always read as a browser path.
        path: String,
    },
    /// Show navbar link states for a path
    Nav {
        /// Full browser path under the base path, else an application path.
        /// A path under the base path is always read as a browser path.
        path: String,
    },
}

#[derive(Serialize)]
struct RouteRow {
    pattern: &'static str,
    view: &'static str,
    href: String,
}

#[derive(Serialize)]
struct ResolveReport {
    location: Location,
    view: Option<&'static str>,
}

#[derive(Serialize)]
struct NavRow {
    label: &'static str,
    target: &'static str,
    active: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.base_path {
        Some(base_path) => SiteConfig::new(SITE_TITLE, base_path)?,
        None => SiteConfig::current().clone(),
    };

    let output = match &cli.command {
        Commands::Routes => routes_output(&config, cli.json)?,
        Commands::Resolve { path } => {
            let location = locate(&config, path)?;
            resolve_output(&location, cli.json)?
        }
        Commands::Nav { path } => {
            let location = locate(&config, path)?;
            nav_output(&location, cli.json)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Accept either an application path or a full path under the base path.
///
/// Stripping the base path is tried first, so with base `/about/` the input
/// `/about` is the application root, not the About page.
pub fn locate(config: &SiteConfig, raw: &str) -> Result<Location> {
    config
        .strip_base(raw)
        .map_or_else(|| Location::parse(raw), Ok)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(SiteError::from)
}

fn routes_output(config: &SiteConfig, json: bool) -> Result<String> {
    let rows: Vec<RouteRow> = RouteTable::site()
        .entries()
        .iter()
        .map(|entry| RouteRow {
            pattern: entry.pattern,
            view: entry.view.as_str(),
            href: Location::parse(entry.pattern)
                .map(|location| config.href(&location))
                .unwrap_or_default(),
        })
        .collect();

    if json {
        return to_json(&rows);
    }

    Ok(rows
        .iter()
        .map(|row| format!("{:<14} {:<12} {}", row.pattern, row.view, row.href))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn resolve_output(location: &Location, json: bool) -> Result<String> {
    let view = resolve_view(RouteTable::site(), location).view();
    let report = ResolveReport {
        location: location.clone(),
        view: view.map(|view| view.as_str()),
    };

    if json {
        return to_json(&report);
    }

    Ok(match view {
        Some(view) => {
            let pattern = RouteTable::site().path_of(view).unwrap_or_default();
            format!("{location} -> {} ({pattern})", view.title())
        }
        None => format!("{location} -> no match"),
    })
}

fn nav_output(location: &Location, json: bool) -> Result<String> {
    let rows: Vec<NavRow> = nav_states(NavMenu::site(), location)
        .into_iter()
        .map(|state| NavRow {
            label: state.link.label,
            target: state.link.target,
            active: state.active,
        })
        .collect();

    if json {
        return to_json(&rows);
    }

    Ok(rows
        .iter()
        .map(|row| {
            let marker = if row.active { "*" } else { " " };
            format!("{marker} {:<12} {}", row.label, row.target)
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployed() -> SiteConfig {
        SiteConfig::new(SITE_TITLE, "/eec-172-final-project/").unwrap()
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["site-inspect", "resolve", "/about", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Resolve { ref path } if path == "/about"));
    }

    #[test]
    fn test_locate_accepts_full_and_app_paths() {
        let config = deployed();
        let about = Location::parse("/about").unwrap();
        assert_eq!(locate(&config, "/eec-172-final-project/about").unwrap(), about);
        assert_eq!(locate(&config, "/about").unwrap(), about);
        assert!(locate(&config, "about").is_err());
    }

    #[test]
    fn test_locate_prefers_base_path_when_ambiguous() {
        let config = SiteConfig::new(SITE_TITLE, "/about/").unwrap();
        assert_eq!(locate(&config, "/about").unwrap(), Location::root());
        assert_eq!(
            locate(&config, "/about/about").unwrap(),
            Location::parse("/about").unwrap()
        );
        assert_eq!(
            locate(&config, "/development").unwrap(),
            Location::parse("/development").unwrap()
        );
    }

    #[test]
    fn test_resolve_output_names_matched_pattern() {
        let location = Location::parse("/About/").unwrap();
        assert_eq!(resolve_output(&location, false).unwrap(), "/About -> About (/about)");
    }

    #[test]
    fn test_routes_output_lists_hrefs() {
        let text = routes_output(&deployed(), false).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("/eec-172-final-project/development"));
    }

    #[test]
    fn test_resolve_output_reports_no_match() {
        let location = Location::parse("/nonexistent").unwrap();
        assert_eq!(resolve_output(&location, false).unwrap(), "/nonexistent -> no match");

        let json: serde_json::Value =
            serde_json::from_str(&resolve_output(&location, true).unwrap()).unwrap();
        assert_eq!(json["location"], "/nonexistent");
        assert!(json["view"].is_null());
    }

    #[test]
    fn test_nav_output_marks_active_link() {
        let json: serde_json::Value =
            serde_json::from_str(&nav_output(&Location::parse("/about").unwrap(), true).unwrap())
                .unwrap();
        let active: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .filter(|row| row["active"] == true)
            .map(|row| row["label"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(active, vec!["About"]);
    }
}
