pub mod navbar;
pub mod sidebar;

pub use navbar::{NavLinks, Navbar};
pub use sidebar::{Sidebar, SidebarLayout};
