use crate::domain::{Point2D, Polygon};

/// Axis-aligned bounding box in map meters
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[Point2D]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bounds = Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
        };
        bounds.expand(points);

        Some(bounds)
    }

    /// Bounds over the vertices of every polygon
    pub fn from_polygons<'a>(polygons: impl IntoIterator<Item = &'a Polygon>) -> Option<Self> {
        let mut polygons = polygons.into_iter();
        let mut bounds = Self::from_points(polygons.next()?.points())?;
        for polygon in polygons {
            bounds.expand(polygon.points());
        }
        Some(bounds)
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[Point2D]) {
        for &(x, y) in points {
            self.min_x = self.min_x.min(x);
            self.max_x = self.max_x.max(x);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
