pub mod card;
pub mod image_tile;

pub use card::Card;
pub use image_tile::ImageTile;
