//! agriroute - Plan fuel-aware coverage spraying routes for agricultural drones

pub mod config;
pub mod domain;
pub mod geometry;
pub mod planner;
pub mod project;

pub use domain::{DroneParams, Point2D, Polygon, PolygonKind, Route, RouteSegment, SegmentKind};
pub use planner::{PlanError, PlanInput, build_fuel_aware_route, generate_coverage_path, plan};
