use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::domain::models::SiteAsset;

#[component]
pub fn Card(icon: SiteAsset, title: &'static str, children: Element) -> Element {
    let src = SiteConfig::current().asset_url(icon);

    rsx! {
        div { class: "card",
            div { class: "card-icon",
                img { src: "{src}", alt: icon.alt(), class: "card-image" }
            }
            div { class: "card-content",
                h3 { class: "card-title", "{title}" }
                {children}
            }
        }
    }
}
