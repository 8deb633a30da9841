use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::domain::models::SiteAsset;

/// Fixed image panel shown beside every page
#[component]
pub fn Sidebar() -> Element {
    let src = SiteConfig::current().asset_url(SiteAsset::Sidebar);

    rsx! {
        aside { class: "sidebar",
            img { src: "{src}", alt: SiteAsset::Sidebar.alt() }
        }
    }
}

/// Two-region layout: the given content first, the sidebar second
#[component]
pub fn SidebarLayout(children: Element) -> Element {
    rsx! {
        div { class: "layout",
            main { class: "main",
                {children}
            }
            Sidebar {}
        }
    }
}
