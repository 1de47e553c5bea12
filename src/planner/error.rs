//! Error types for route planning.

use thiserror::Error;

/// Reasons a route cannot be planned. All of them are detected before or
/// during planning and leave the caller's data untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// No polygon is marked as an inclusion zone.
    #[error("At least one field boundary (inclusion zone) is required")]
    NoInclusionZone,

    /// Exclusions cover the whole field, or the field is thinner than one swath.
    #[error("Nothing to plan: no coverable area remains after exclusions")]
    DegenerateField,

    /// A drone parameter is zero, negative or not a number.
    #[error("Drone parameter '{name}' must be a positive number, got {value}")]
    InvalidDroneParameter { name: &'static str, value: f64 },

    /// The launch/recovery point has not been set.
    #[error("A base point is required before planning")]
    MissingBasePoint,
}
