// Routing, navigation and page content
// Pure Rust, no framework dependencies

pub mod models;
pub mod services;
