use serde::{Deserialize, Serialize};

use super::Point2D;
use crate::geometry::distance;

/// Whether the drone sprays along a segment or only repositions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Work,
    Transport,
}

/// A labeled polyline of the final route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub points: Vec<Point2D>,
}

impl RouteSegment {
    pub fn work(points: Vec<Point2D>) -> Self {
        Self {
            kind: SegmentKind::Work,
            points,
        }
    }

    pub fn transport(from: Point2D, to: Point2D) -> Self {
        Self {
            kind: SegmentKind::Transport,
            points: vec![from, to],
        }
    }

    pub fn is_work(&self) -> bool {
        self.kind == SegmentKind::Work
    }

    pub fn start(&self) -> Option<Point2D> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point2D> {
        self.points.last().copied()
    }

    /// Polyline length in meters
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance(pair[0], pair[1]))
            .sum()
    }
}

/// Ordered sequence of route segments, starting and ending at the base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    segments: Vec<RouteSegment>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: RouteSegment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last_point(&self) -> Option<Point2D> {
        self.segments.last().and_then(RouteSegment::end)
    }

    pub fn work_segments(&self) -> impl Iterator<Item = &RouteSegment> {
        self.segments.iter().filter(|s| s.kind == SegmentKind::Work)
    }

    pub fn transport_segments(&self) -> impl Iterator<Item = &RouteSegment> {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Transport)
    }

    /// All points of all segments, in flight order
    pub fn points(&self) -> Vec<Point2D> {
        self.segments
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .collect()
    }
}
