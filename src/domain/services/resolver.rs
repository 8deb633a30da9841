use crate::domain::models::{Location, Resolution, RouteTable};
use crate::shared::logging;

/// Look `location` up in `table`, logging the outcome.
///
/// Pure apart from logging: the same inputs always give the same resolution.
pub fn resolve_view(table: &RouteTable, location: &Location) -> Resolution {
    let resolution = table.resolve(location);
    match resolution {
        Resolution::Matched(view) => logging::log_route_resolved(location, view),
        Resolution::NoMatch => logging::log_route_unmatched(location),
    }
    resolution
}
