//! Boustrophedon coverage path over inclusion polygons minus exclusions.
//!
//! Horizontal scan lines are laid at a pitch equal to the spray width. Each
//! line is cut against every polygon edge, the crossings are paired into
//! intervals, and an interval survives only when its midpoint is inside some
//! inclusion zone and outside every exclusion zone. Lines alternate sweep
//! direction so the drone zig-zags across the field.

use tracing::{debug, warn};

use super::PlanError;
use crate::domain::drone::is_positive;
use crate::domain::{Point2D, Polygon};
use crate::geometry::{Bounds, point_in_polygon, scanline_crossings};

/// One kept interval on a scan line, left endpoint first
type Pass = (Point2D, Point2D);

/// Generate the raw sweep waypoints covering the net field area
///
/// # Arguments
/// * `inclusion` - Field boundaries to cover
/// * `exclusion` - Obstacle zones to leave unsprayed
/// * `spray_width` - Swath width in meters, used as the scan-line pitch
///
/// # Errors
/// * `NoInclusionZone` if no usable inclusion polygon is given
/// * `InvalidDroneParameter` if `spray_width` is not a positive number
/// * `DegenerateField` if no scan line keeps any interval
pub fn generate_coverage_path(
    inclusion: &[Polygon],
    exclusion: &[Polygon],
    spray_width: f64,
) -> Result<Vec<Point2D>, PlanError> {
    let inclusion = usable_polygons(inclusion);
    if inclusion.is_empty() {
        return Err(PlanError::NoInclusionZone);
    }
    if !is_positive(spray_width) {
        return Err(PlanError::InvalidDroneParameter {
            name: "spray_width",
            value: spray_width,
        });
    }
    let exclusion = usable_polygons(exclusion);

    let bounds =
        Bounds::from_polygons(inclusion.iter().copied()).ok_or(PlanError::NoInclusionZone)?;
    if !(bounds.min_y.is_finite() && bounds.max_y.is_finite()) {
        return Err(PlanError::DegenerateField);
    }

    let inclusion_shapes: Vec<geo::Polygon<f64>> =
        inclusion.iter().map(|p| p.to_geo()).collect();
    let exclusion_shapes: Vec<geo::Polygon<f64>> =
        exclusion.iter().map(|p| p.to_geo()).collect();

    let lines: Vec<Vec<Pass>> = scan_line_ys(&bounds, spray_width)
        .into_iter()
        .map(|y| {
            let crossings = inclusion
                .iter()
                .chain(exclusion.iter())
                .flat_map(|polygon| scanline_crossings(polygon, y));
            line_passes(y, crossings, &inclusion_shapes, &exclusion_shapes)
        })
        .collect();

    let line_count = lines.len();
    let path = assemble_boustrophedon(lines);
    debug!(
        scan_lines = line_count,
        waypoints = path.len(),
        "generated coverage path"
    );

    if path.is_empty() {
        return Err(PlanError::DegenerateField);
    }
    Ok(path)
}

fn usable_polygons(polygons: &[Polygon]) -> Vec<&Polygon> {
    polygons
        .iter()
        .filter(|polygon| {
            if !polygon.is_valid() {
                warn!(
                    points = polygon.points().len(),
                    kind = ?polygon.kind(),
                    "skipping polygon with fewer than 3 distinct points"
                );
            }
            polygon.is_valid()
        })
        .collect()
}

/// Scan line y values from half a swath above the bottom edge, stopping
/// before the top edge
fn scan_line_ys(bounds: &Bounds, spacing: f64) -> Vec<f64> {
    let start = bounds.min_y + spacing / 2.0;
    (0u64..)
        .map(|i| start + i as f64 * spacing)
        .take_while(|&y| y < bounds.max_y)
        .collect()
}

/// Pair sorted crossings into intervals and keep those over net field area
fn line_passes(
    y: f64,
    crossings: impl Iterator<Item = f64>,
    inclusion: &[geo::Polygon<f64>],
    exclusion: &[geo::Polygon<f64>],
) -> Vec<Pass> {
    let mut xs: Vec<f64> = crossings.collect();
    xs.sort_by(f64::total_cmp);

    // chunks_exact drops an odd trailing crossing from a self-touching ring
    xs.chunks_exact(2)
        .filter(|pair| {
            let mid = ((pair[0] + pair[1]) / 2.0, y);
            inclusion.iter().any(|p| point_in_polygon(mid, p))
                && !exclusion.iter().any(|p| point_in_polygon(mid, p))
        })
        .map(|pair| ((pair[0], y), (pair[1], y)))
        .collect()
}

/// Flatten per-line passes into one zig-zag waypoint sequence
///
/// Odd scan lines (by index, counting empty ones) are swept right to left.
/// Every pass after the first starts with its entry point repeated; that
/// zero-length leg marks the jump from the previous pass.
fn assemble_boustrophedon(lines: Vec<Vec<Pass>>) -> Vec<Point2D> {
    let mut path = Vec::new();

    for (index, mut passes) in lines.into_iter().enumerate() {
        let reversed = index % 2 == 1;
        if reversed {
            passes.reverse();
        }

        for (left, right) in passes {
            let (entry, exit) = if reversed { (right, left) } else { (left, right) };
            if !path.is_empty() {
                path.push(entry);
            }
            path.push(entry);
            path.push(exit);
        }
    }

    path
}
