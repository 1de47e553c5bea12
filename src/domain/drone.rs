use serde::{Deserialize, Serialize};

use crate::planner::PlanError;

fn default_tank_volume() -> f64 {
    20.0
}
fn default_spray_width() -> f64 {
    6.0
}
fn default_consumption_rate() -> f64 {
    0.1
}
fn default_work_speed() -> f64 {
    5.0
}
fn default_transport_speed() -> f64 {
    10.0
}

/// Spraying drone characteristics used by the planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DroneParams {
    /// Tank capacity in fuel units
    #[serde(default = "default_tank_volume")]
    pub tank_volume: f64,
    /// Swath width in meters; also the scan-line pitch
    #[serde(default = "default_spray_width")]
    pub spray_width: f64,
    /// Fuel per unit length per unit width while spraying
    #[serde(default = "default_consumption_rate")]
    pub consumption_rate: f64,
    /// Meters per time unit while spraying
    #[serde(default = "default_work_speed")]
    pub work_speed: f64,
    /// Meters per time unit while repositioning
    #[serde(default = "default_transport_speed")]
    pub transport_speed: f64,
}

impl Default for DroneParams {
    fn default() -> Self {
        Self {
            tank_volume: default_tank_volume(),
            spray_width: default_spray_width(),
            consumption_rate: default_consumption_rate(),
            work_speed: default_work_speed(),
            transport_speed: default_transport_speed(),
        }
    }
}

impl DroneParams {
    /// Reject the first parameter that is not a finite positive number
    pub fn validate(&self) -> Result<(), PlanError> {
        let fields = [
            ("tank_volume", self.tank_volume),
            ("spray_width", self.spray_width),
            ("consumption_rate", self.consumption_rate),
            ("work_speed", self.work_speed),
            ("transport_speed", self.transport_speed),
        ];

        for (name, value) in fields {
            if !is_positive(value) {
                return Err(PlanError::InvalidDroneParameter { name, value });
            }
        }
        Ok(())
    }

    /// Fuel used spraying one meter of swath
    pub fn fuel_per_meter(&self) -> f64 {
        self.spray_width * self.consumption_rate
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
