pub mod about;
pub mod development;
pub mod home;

pub use about::About;
pub use development::Development;
pub use home::Home;
