//! Route planning pipeline: polygons + drone parameters -> coverage path -> route.

pub mod coverage;
pub mod error;
pub mod refuel;
pub mod summary;

pub use coverage::generate_coverage_path;
pub use error::PlanError;
pub use refuel::{build_fuel_aware_route, return_margin};
pub use summary::RouteSummary;

use crate::domain::{DroneParams, Point2D, Polygon, PolygonKind, Route};

/// Snapshot of everything the planner needs
#[derive(Debug, Clone, Default)]
pub struct PlanInput {
    pub polygons: Vec<Polygon>,
    pub base_point: Option<Point2D>,
    pub drone_params: DroneParams,
}

impl PlanInput {
    /// Check preconditions and return the base point
    ///
    /// Checked in order: an inclusion polygon exists, the base point is set,
    /// every drone parameter is positive.
    pub fn validate(&self) -> Result<Point2D, PlanError> {
        if !self
            .polygons
            .iter()
            .any(|p| p.kind() == PolygonKind::Inclusion)
        {
            return Err(PlanError::NoInclusionZone);
        }
        let base = self.base_point.ok_or(PlanError::MissingBasePoint)?;
        self.drone_params.validate()?;
        Ok(base)
    }

    /// Split polygons into (inclusion, exclusion)
    pub fn partition(&self) -> (Vec<Polygon>, Vec<Polygon>) {
        self.polygons
            .iter()
            .cloned()
            .partition(|p| p.kind() == PolygonKind::Inclusion)
    }
}

/// Validate the input, generate the sweep and insert refuel trips
pub fn plan(input: &PlanInput) -> Result<Route, PlanError> {
    let base = input.validate()?;
    let (inclusion, exclusion) = input.partition();
    let raw_path =
        generate_coverage_path(&inclusion, &exclusion, input.drone_params.spray_width)?;
    Ok(build_fuel_aware_route(
        &raw_path,
        &input.drone_params,
        base,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SegmentKind;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2D> {
        vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
    }

    fn scenario(tank_volume: f64) -> PlanInput {
        PlanInput {
            polygons: vec![Polygon::inclusion(rect(0.0, 0.0, 100.0, 60.0))],
            base_point: Some((-10.0, -10.0)),
            drone_params: DroneParams {
                tank_volume,
                spray_width: 10.0,
                consumption_rate: 0.1,
                work_speed: 5.0,
                transport_speed: 10.0,
            },
        }
    }

    #[test]
    fn test_plan_large_tank() {
        let route = plan(&scenario(10_000.0)).unwrap();
        let kinds: Vec<SegmentKind> = route.segments().iter().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            vec![SegmentKind::Transport, SegmentKind::Work, SegmentKind::Transport]
        );
        let work = &route.segments()[1];
        let mut ys: Vec<f64> = work.points.iter().map(|p| p.1).collect();
        ys.dedup();
        assert_eq!(ys.len(), 6);
    }

    #[test]
    fn test_plan_small_tank() {
        let route = plan(&scenario(150.0)).unwrap();
        assert!(route.work_segments().count() > 1);

        let summary = RouteSummary::from_route(&route, &scenario(150.0).drone_params);
        assert!(summary.refuel_stops >= 1);
        assert_eq!(route.points().first(), Some(&(-10.0, -10.0)));
        assert_eq!(route.last_point(), Some((-10.0, -10.0)));
    }

    #[test]
    fn test_plan_with_hole() {
        let input = PlanInput {
            polygons: vec![
                Polygon::inclusion(rect(0.0, 0.0, 100.0, 100.0)),
                Polygon::exclusion(rect(40.0, 40.0, 60.0, 60.0)),
            ],
            base_point: Some((0.0, 0.0)),
            drone_params: DroneParams {
                tank_volume: 1e6,
                spray_width: 10.0,
                ..Default::default()
            },
        };
        let route = plan(&input).unwrap();

        let points = route.points();
        assert!(points.contains(&(40.0, 45.0)));
        assert!(points.contains(&(60.0, 45.0)));
        assert!(!points.iter().any(|p| p.0 > 40.0 && p.0 < 60.0 && p.1 > 40.0 && p.1 < 60.0));
    }

    #[test]
    fn test_plan_requires_inclusion() {
        let input = PlanInput {
            polygons: vec![Polygon::exclusion(rect(0.0, 0.0, 10.0, 10.0))],
            base_point: Some((0.0, 0.0)),
            drone_params: DroneParams::default(),
        };
        assert_eq!(plan(&input), Err(PlanError::NoInclusionZone));
        assert_eq!(plan(&PlanInput::default()), Err(PlanError::NoInclusionZone));
    }

    #[test]
    fn test_plan_requires_base() {
        let mut input = scenario(100.0);
        input.base_point = None;
        assert_eq!(plan(&input), Err(PlanError::MissingBasePoint));
    }

    #[test]
    fn test_plan_rejects_bad_params() {
        let mut input = scenario(100.0);
        input.drone_params.transport_speed = -3.0;
        assert_eq!(
            plan(&input),
            Err(PlanError::InvalidDroneParameter {
                name: "transport_speed",
                value: -3.0
            })
        );
    }

    #[test]
    fn test_plan_degenerate_field() {
        let input = PlanInput {
            polygons: vec![
                Polygon::inclusion(rect(0.0, 0.0, 20.0, 20.0)),
                Polygon::exclusion(rect(-5.0, -5.0, 25.0, 25.0)),
            ],
            base_point: Some((0.0, 0.0)),
            drone_params: DroneParams::default(),
        };
        assert_eq!(plan(&input), Err(PlanError::DegenerateField));
    }

    #[test]
    fn test_toggling_polygon_changes_plan_without_mutating_input() {
        let field = Polygon::inclusion(rect(0.0, 0.0, 60.0, 60.0));
        let inner = Polygon::inclusion(rect(20.0, 20.0, 40.0, 40.0));
        let input = PlanInput {
            polygons: vec![field.clone(), inner.toggled()],
            base_point: Some((0.0, 0.0)),
            drone_params: DroneParams {
                tank_volume: 1e6,
                spray_width: 10.0,
                ..Default::default()
            },
        };
        let route = plan(&input).unwrap();

        assert_eq!(inner.kind(), PolygonKind::Inclusion);
        assert_eq!(input.polygons[0], field);
        assert!(route.points().contains(&(20.0, 25.0)));
    }
}
