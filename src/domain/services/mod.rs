// Route resolution and navbar state
// Framework-agnostic, 100% testable

pub mod navigation;
pub mod resolver;

pub use navigation::nav_states;
pub use resolver::resolve_view;
