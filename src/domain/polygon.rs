use serde::{Deserialize, Serialize};

use super::Point2D;

/// Whether a polygon adds area to the field or cuts an obstacle out of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolygonKind {
    Inclusion,
    Exclusion,
}

impl PolygonKind {
    pub fn toggled(self) -> PolygonKind {
        match self {
            PolygonKind::Inclusion => PolygonKind::Exclusion,
            PolygonKind::Exclusion => PolygonKind::Inclusion,
        }
    }
}

/// A closed field boundary or obstacle zone
///
/// The ring is implicitly closed from the last point back to the first;
/// points are never stored with an explicit closing duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PolygonDoc")]
pub struct Polygon {
    points: Vec<Point2D>,
    #[serde(rename = "type")]
    kind: PolygonKind,
}

/// Serialized form; routed through `Polygon::new` so loaded rings are normalized
#[derive(Deserialize)]
struct PolygonDoc {
    points: Vec<Point2D>,
    #[serde(rename = "type")]
    kind: PolygonKind,
}

impl From<PolygonDoc> for Polygon {
    fn from(doc: PolygonDoc) -> Self {
        Polygon::new(doc.points, doc.kind)
    }
}

impl Polygon {
    pub fn new(mut points: Vec<Point2D>, kind: PolygonKind) -> Self {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points, kind }
    }

    pub fn inclusion(points: Vec<Point2D>) -> Self {
        Self::new(points, PolygonKind::Inclusion)
    }

    pub fn exclusion(points: Vec<Point2D>) -> Self {
        Self::new(points, PolygonKind::Exclusion)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    /// At least three distinct points, so the ring can enclose area
    pub fn is_valid(&self) -> bool {
        let mut distinct: Vec<Point2D> = Vec::with_capacity(3);
        for &point in &self.points {
            if !distinct.contains(&point) {
                distinct.push(point);
                if distinct.len() == 3 {
                    return true;
                }
            }
        }
        false
    }

    /// Same ring with the opposite kind
    pub fn toggled(&self) -> Polygon {
        Self {
            points: self.points.clone(),
            kind: self.kind.toggled(),
        }
    }

    /// Edges of the closed ring, including the last-to-first edge
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Convert to a `geo` polygon for containment queries
    pub fn to_geo(&self) -> geo::Polygon<f64> {
        geo::Polygon::new(geo::LineString::from(self.points.clone()), vec![])
    }
}
