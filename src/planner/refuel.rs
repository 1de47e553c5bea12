//! Split a raw sweep path into work and transport segments so the drone
//! never runs dry before it can make it back to base.

use tracing::{debug, warn};

use crate::domain::{DroneParams, Point2D, Route, RouteSegment};
use crate::geometry::distance;

/// Reserve kept for the trip from `point` back to `base`
///
/// This is the fuel that would be *sprayed* at work speed for as long as
/// the unsprayed return flight takes: `(d / transport_speed) * work_speed *
/// spray_width * consumption_rate`. It mixes a travel time with a per-length
/// rate and is deliberately pessimistic; refuel timing depends on it, so it
/// must not be replaced with a distance-only reserve.
pub fn return_margin(point: Point2D, params: &DroneParams, base: Point2D) -> f64 {
    (distance(point, base) / params.transport_speed) * (params.work_speed * params.fuel_per_meter())
}

/// Build the final route from raw coverage waypoints
///
/// Walks the path leg by leg. A leg is sprayed when the remaining fuel covers
/// the leg plus the return margin from its far end; otherwise the drone flies
/// back to base from the leg's start, refills, and resumes at the leg's end.
/// The skipped leg itself is not sprayed.
///
/// Parameters are assumed validated. An empty path yields an empty route.
pub fn build_fuel_aware_route(raw_path: &[Point2D], params: &DroneParams, base: Point2D) -> Route {
    let mut route = Route::new();
    let Some(&first) = raw_path.first() else {
        return route;
    };

    route.push(RouteSegment::transport(base, first));

    let fuel_per_meter = params.fuel_per_meter();
    let mut current_fuel = params.tank_volume;
    let mut work = vec![first];
    let mut refuels = 0usize;

    for leg in raw_path.windows(2) {
        let (p1, p2) = (leg[0], leg[1]);
        let fuel_needed = distance(p1, p2) * fuel_per_meter;
        let margin = return_margin(p2, params, base);

        if current_fuel >= fuel_needed + margin {
            work.push(p2);
            current_fuel -= fuel_needed;
            continue;
        }

        if current_fuel >= params.tank_volume {
            warn!(
                from = ?p1,
                to = ?p2,
                required = fuel_needed + margin,
                tank_volume = params.tank_volume,
                "leg needs more than a full tank, skipping it"
            );
        }

        let finished = std::mem::replace(&mut work, vec![p2]);
        if finished.len() >= 2 {
            route.push(RouteSegment::work(finished));
        }
        route.push(RouteSegment::transport(p1, base));
        route.push(RouteSegment::transport(base, p2));

        current_fuel = params.tank_volume;
        refuels += 1;
    }

    if work.len() >= 2 {
        route.push(RouteSegment::work(work));
    }
    if let Some(last) = route.last_point() {
        route.push(RouteSegment::transport(last, base));
    }

    debug!(segments = route.len(), refuels, "built fuel-aware route");
    route
}
