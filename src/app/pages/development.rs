use dioxus::prelude::*;

use crate::domain::models::content::{
    DEVELOPMENT_INTRO, DEVELOPMENT_TITLE, DEVICE_APPS, HELPER_TOOLS, PLATFORM_FACTS,
};

#[component]
pub fn Development() -> Element {
    rsx! {
        div { class: "development-container",
            div { class: "development-header",
                h1 { class: "development-title", "{DEVELOPMENT_TITLE}" }
                p { class: "development-intro", "{DEVELOPMENT_INTRO}" }
            }

            section { class: "development-platform",
                h2 { "Platform" }
                dl { class: "platform-facts",
                    for (label, value) in PLATFORM_FACTS {
                        div { key: "{label}", class: "platform-fact",
                            dt { "{label}" }
                            dd { "{value}" }
                        }
                    }
                }
            }

            section { class: "development-apps",
                h2 { "Applications" }
                ol { class: "app-list",
                    for app in DEVICE_APPS {
                        li { key: "{app.name}", class: "app-item",
                            h3 { "{app.name}" }
                            p { "{app.summary}" }
                            p { class: "app-item__exit", "{app.exit}" }
                        }
                    }
                }
            }

            section { class: "development-tools",
                h2 { "Helper Programs" }
                ul { class: "tool-list",
                    for tool in HELPER_TOOLS {
                        li { key: "{tool.script}",
                            code { "{tool.script}" }
                            ": {tool.purpose}"
                        }
                    }
                }
            }
        }
    }
}
