//! Tiled Web Mercator map of boundaries, earthquakes and volcanoes.

pub mod picking;
pub mod projection;
pub mod tiles;
pub mod view;
pub mod viewport;

pub use picking::MapHit;
pub use tiles::{TileCache, TileCoord, TileError, TileLoader};
pub use view::{MapView, Popup};
pub use viewport::Viewport;
