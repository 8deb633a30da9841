use crate::domain::models::{Location, NavMenu, NavState};
use crate::shared::logging;

/// Compute every link's active flag for `location`.
pub fn nav_states(menu: &NavMenu, location: &Location) -> Vec<NavState> {
    let states = menu.states(location);
    let active_count = states.iter().filter(|state| state.active).count();
    logging::log_nav_states(location, states.len(), active_count);
    states
}
