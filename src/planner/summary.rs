use crate::domain::{DroneParams, Route, SegmentKind};

/// Totals for a planned route
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteSummary {
    pub work_segments: usize,
    /// Mid-mission returns to base (the final landing is not counted)
    pub refuel_stops: usize,
    /// Sprayed distance in meters
    pub work_distance: f64,
    /// Unsprayed distance in meters
    pub transport_distance: f64,
    pub fuel_sprayed: f64,
    /// Estimated flight time in the same time unit as the drone speeds
    pub flight_time: f64,
}

impl RouteSummary {
    pub fn from_route(route: &Route, params: &DroneParams) -> Self {
        let mut summary = Self::default();
        let Some(base) = route.last_point() else {
            return summary;
        };

        let segments = route.segments();
        for (i, segment) in segments.iter().enumerate() {
            let length = segment.length();
            match segment.kind {
                SegmentKind::Work => {
                    summary.work_segments += 1;
                    summary.work_distance += length;
                }
                SegmentKind::Transport => {
                    summary.transport_distance += length;
                    if i + 1 < segments.len() && segment.end() == Some(base) {
                        summary.refuel_stops += 1;
                    }
                }
            }
        }

        summary.fuel_sprayed = summary.work_distance * params.fuel_per_meter();
        summary.flight_time = summary.work_distance / params.work_speed
            + summary.transport_distance / params.transport_speed;
        summary
    }

    /// Fraction of flown distance spent spraying
    pub fn work_ratio(&self) -> f64 {
        let total = self.work_distance + self.transport_distance;
        if total > 0.0 {
            self.work_distance / total
        } else {
            0.0
        }
    }
}
