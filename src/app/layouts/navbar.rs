use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::domain::models::{Location, NavMenu};
use crate::domain::services::nav_states;

/// Site navigation; a link is highlighted when it matches the current route
#[component]
pub fn Navbar() -> Element {
    let location = use_route::<Route>().location();

    rsx! {
        NavLinks { location: location }
    }
}

/// Navbar body for an explicit location
#[component]
pub fn NavLinks(location: Location) -> Element {
    let links = nav_states(NavMenu::site(), &location)
        .into_iter()
        .map(|state| {
            let class = if state.active { "active" } else { "" }.to_string();
            (state, class)
        });

    rsx! {
        nav { class: "navbar",
            for (state, class) in links {
                Link {
                    key: "{state.link.target}",
                    to: Route::from_location(&state.link.location()),
                    class: class,
                    "{state.link.label}"
                }
            }
        }
    }
}
