use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::domain::models::content::HomeTile;

#[component]
pub fn ImageTile(tile: HomeTile) -> Element {
    let src = SiteConfig::current().asset_url(tile.asset);

    rsx! {
        div { class: "image-wrapper {tile.slot}",
            img { src: "{src}", alt: tile.asset.alt(), class: "home-image" }
        }
    }
}
