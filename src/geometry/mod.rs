pub mod bounds;
pub mod primitives;

pub use bounds::Bounds;
pub use primitives::{distance, point_in_polygon, scanline_crossings};
