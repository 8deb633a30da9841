// Site models
// Static tables built once, read-only afterwards

pub mod content;
pub mod location;
pub mod nav;
pub mod route;

pub use content::SiteAsset;
pub use location::Location;
pub use nav::{MatchMode, NavLink, NavMenu, NavState};
pub use route::{Resolution, RouteEntry, RouteTable, ViewId};
