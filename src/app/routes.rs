use dioxus::prelude::*;
use dioxus::document;

use crate::app::layouts::{Navbar, SidebarLayout};
use crate::app::pages::{About, Development, Home};
use crate::config::SiteConfig;
use crate::domain::models::{Location, Resolution, RouteTable, ViewId};
use crate::domain::services::resolve_view;
use crate::shared::logging;

/// Router-facing routes.
///
/// The Dioxus router only tracks the current location (scoped to the base
/// path from Dioxus.toml); `RouteTable` decides which view it selects.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Root {},

    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

impl Route {
    pub fn location(&self) -> Location {
        match self {
            Route::Root {} => Location::root(),
            Route::Page { segments } => Location::from_segments(segments),
        }
    }

    pub fn from_location(location: &Location) -> Self {
        if location.is_root() {
            Route::Root {}
        } else {
            Route::Page {
                segments: location.segments(),
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        logging::log_app_mounted(SiteConfig::current());
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");
    let title = &SiteConfig::current().title;

    rsx! {
        document::Title { "{title}" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        div { class: "app",
            h1 { class: "app-title", "{title}" }
            Navbar {}

            div { class: "content",
                SidebarLayout {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        RouteView { location: Location::root() }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    rsx! {
        RouteView { location: Location::from_segments(&segments) }
    }
}

/// Render whatever the route table selects for `location`.
///
/// Unmatched locations render nothing; there is no fallback view.
#[component]
pub fn RouteView(location: Location) -> Element {
    match resolve_view(RouteTable::site(), &location) {
        Resolution::Matched(view) => rsx! {
            PageView { view: view }
        },
        Resolution::NoMatch => rsx! {},
    }
}

#[component]
pub fn PageView(view: ViewId) -> Element {
    match view {
        ViewId::Home => rsx! { Home {} },
        ViewId::About => rsx! { About {} },
        ViewId::Development => rsx! { Development {} },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;

    #[component]
    fn RoutedAt(path: String) -> Element {
        use_context_provider(|| {
            Rc::new(MemoryHistory::with_initial_path(path.as_str())) as Rc<dyn History>
        });

        rsx! {
            Router::<Route> {}
        }
    }

    fn render_site_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            RoutedAt,
            RoutedAtProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Text of every anchor carrying the `active` class
    fn active_links(html: &str) -> Vec<String> {
        html.match_indices("class=\"active\"")
            .filter_map(|(start, _)| {
                let rest = &html[start..];
                let open_end = rest.find('>')?;
                let close = rest.find("</a>")?;
                Some(rest[open_end + 1..close].to_string())
            })
            .collect()
    }

    fn main_region(html: &str) -> &str {
        let start = html.find("<main class=\"main\">").unwrap();
        let end = html[start..].find("</main>").unwrap() + start;
        &html[start..end]
    }

    fn render_at(path: &str) -> String {
        let location = Location::parse(path).unwrap();
        dioxus_ssr::render_element(rsx! { RouteView { location: location } })
    }

    #[test]
    fn test_route_view_selects_page_per_path() {
        assert!(render_at("/").contains("home-container"));
        assert!(render_at("/about").contains("about-container"));
        assert!(render_at("/development").contains("development-container"));
    }

    #[test]
    fn test_route_view_renders_one_page_only() {
        let html = render_at("/about");
        assert!(!html.contains("home-container"));
        assert!(!html.contains("development-container"));
    }

    #[test]
    fn test_route_view_renders_nothing_when_unmatched() {
        let html = render_at("/nonexistent");
        assert!(!html.contains("container"));
    }

    #[test]
    fn test_shell_orders_title_navbar_content_sidebar() {
        let html = render_site_at("/about");
        let title = html.find("class=\"app-title\"").unwrap();
        let navbar = html.find("class=\"navbar\"").unwrap();
        let main = html.find("<main class=\"main\">").unwrap();
        let sidebar = html.find("class=\"sidebar\"").unwrap();

        assert!(title < navbar);
        assert!(navbar < main);
        assert!(main < sidebar);
        assert_eq!(html.matches("class=\"sidebar\"").count(), 1);
        assert!(main_region(&html).contains("about-container"));
    }

    #[test]
    fn test_navbar_marks_current_route_active() {
        assert_eq!(active_links(&render_site_at("/about")), vec!["About"]);
        assert_eq!(active_links(&render_site_at("/")), vec!["Home"]);
        assert_eq!(
            active_links(&render_site_at("/development")),
            vec!["Development"]
        );
    }

    #[test]
    fn test_unmatched_route_keeps_shell_with_empty_content() {
        let html = render_site_at("/nonexistent");
        assert!(active_links(&html).is_empty());
        assert!(!main_region(&html).contains("<div"));
        assert_eq!(html.matches("class=\"sidebar\"").count(), 1);
        assert!(html.contains("class=\"navbar\""));
    }

    #[test]
    fn test_route_location_round_trip() {
        for path in ["/", "/about", "/development", "/about/team"] {
            let location = Location::parse(path).unwrap();
            assert_eq!(Route::from_location(&location).location(), location);
        }
    }

    #[test]
    fn test_router_paths_map_to_locations() {
        for path in ["/", "/about", "/development", "/nonexistent"] {
            let route: Route = path.parse().unwrap();
            assert_eq!(route.location().as_str(), path);
        }
    }
}
