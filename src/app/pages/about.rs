use dioxus::prelude::*;

use crate::app::components::Card;
use crate::domain::models::content::{ABOUT_CARDS, ABOUT_INTRO, ABOUT_TITLE, REQUIREMENT_GROUPS};

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "about-container",
            div { class: "about-header",
                div { class: "header-content",
                    h1 { class: "about-title", "{ABOUT_TITLE}" }
                    p { class: "about-intro", "{ABOUT_INTRO}" }
                }
            }

            div { class: "card-grid",
                for card in ABOUT_CARDS {
                    Card { key: "{card.title}", icon: card.icon, title: card.title,
                        p { class: "card-text", "{card.text}" }
                    }
                }
            }

            div { class: "about-footer",
                div { class: "footer-content",
                    h3 { "System Requirements" }
                    div { class: "footer-columns",
                        for group in REQUIREMENT_GROUPS {
                            div { key: "{group.heading}", class: "footer-column",
                                h4 { "{group.heading}" }
                                ul {
                                    for item in group.items {
                                        li { "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
