pub mod drone;
pub mod polygon;
pub mod route;

pub use drone::DroneParams;
pub use polygon::{Polygon, PolygonKind};
pub use route::{Route, RouteSegment, SegmentKind};

/// A point in map-local meters
pub type Point2D = (f64, f64);
