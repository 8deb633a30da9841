use dioxus::prelude::*;

use crate::app::components::ImageTile;
use crate::domain::models::content::{HOME_BOTTOM, HOME_TOP_LEFT, HOME_TOP_RIGHT};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            div { class: "home-top-section",
                div { class: "home-left-images",
                    ImageTile { tile: HOME_TOP_LEFT }
                }
                div { class: "home-right-image",
                    ImageTile { tile: HOME_TOP_RIGHT }
                }
            }
            div { class: "home-bottom-section",
                for tile in HOME_BOTTOM {
                    ImageTile { key: "{tile.slot}", tile: tile }
                }
            }
        }
    }
}
