use geo::{Contains, Point};

use crate::domain::{Point2D, Polygon};

/// Euclidean distance between two points
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Whether `point` lies strictly inside `polygon`; boundary points are outside
pub fn point_in_polygon(point: Point2D, polygon: &geo::Polygon<f64>) -> bool {
    polygon.contains(&Point::new(point.0, point.1))
}

/// X coordinates where the horizontal line at `y` crosses the polygon ring
///
/// An edge counts only when `y` lies strictly between its endpoint y values,
/// so horizontal edges and vertices sitting exactly on the line contribute
/// nothing. The result is unsorted.
pub fn scanline_crossings(polygon: &Polygon, y: f64) -> Vec<f64> {
    polygon
        .edges()
        .filter(|&(p1, p2)| (p1.1 > y && p2.1 < y) || (p1.1 < y && p2.1 > y))
        .map(|(p1, p2)| p1.0 + (y - p1.1) * (p2.0 - p1.0) / (p2.1 - p1.1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::inclusion(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance((2.0, 2.0), (2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_point_in_polygon() {
        let geo_square = square().to_geo();
        assert!(point_in_polygon((5.0, 5.0), &geo_square));
        assert!(!point_in_polygon((15.0, 5.0), &geo_square));
        assert!(!point_in_polygon((10.0, 5.0), &geo_square));
    }

    #[test]
    fn test_scanline_crossings() {
        let mut xs = scanline_crossings(&square(), 5.0);
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![0.0, 10.0]);
    }

    #[test]
    fn test_scanline_on_vertex_ignored() {
        assert!(scanline_crossings(&square(), 10.0).is_empty());
        assert!(scanline_crossings(&square(), 0.0).is_empty());
    }

    #[test]
    fn test_scanline_interpolates_slanted_edge() {
        let tri = Polygon::inclusion(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]);
        let mut xs = scanline_crossings(&tri, 4.0);
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs.len(), 2);
        assert!((xs[1] - 6.0).abs() < 1e-9);
    }
}
