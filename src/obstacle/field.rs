//! Polygon-list implementation of [`ObstacleField`].

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point2D, Polygon, Segment2D};

use super::ObstacleField;

/// Whether an obstacle occludes line of sight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleClass {
    /// Occludes line of sight and rejects spawns.
    #[default]
    Blocking,
    /// Rejects spawns only.
    NonBlocking,
}

/// How point containment is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentMode {
    /// Exact polygon test.
    #[default]
    Polygon,
    /// Obstacle AABB test. Conservative: rejects points in concave notches.
    BoundingBox,
}

/// A classified obstacle region.
#[derive(Clone, Debug)]
pub struct Obstacle {
    /// Label for logs.
    pub name: String,
    /// Occlusion class.
    pub class: ObstacleClass,
    polygon: Polygon,
    bounds: Bounds,
}

impl Obstacle {
    pub fn new(name: impl Into<String>, class: ObstacleClass, polygon: Polygon) -> Self {
        let bounds = polygon.bounds();
        Self {
            name: name.into(),
            class,
            polygon,
            bounds,
        }
    }

    /// Blocking obstacle from a vertex ring.
    pub fn blocking(name: impl Into<String>, points: Vec<Point2D>) -> Self {
        Self::new(name, ObstacleClass::Blocking, Polygon::new(points))
    }

    /// Non-blocking obstacle from a vertex ring.
    pub fn non_blocking(name: impl Into<String>, points: Vec<Point2D>) -> Self {
        Self::new(name, ObstacleClass::NonBlocking, Polygon::new(points))
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.class == ObstacleClass::Blocking
    }

    fn contains(&self, point: Point2D, mode: ContainmentMode) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        match mode {
            ContainmentMode::BoundingBox => true,
            ContainmentMode::Polygon => self.polygon.contains(point),
        }
    }

    fn occludes(&self, segment: &Segment2D) -> bool {
        if !self.is_blocking() {
            return false;
        }
        let seg_bounds = Bounds::from_points([segment.start, segment.end]);
        seg_bounds.min.x <= self.bounds.max.x
            && seg_bounds.max.x >= self.bounds.min.x
            && seg_bounds.min.y <= self.bounds.max.y
            && seg_bounds.max.y >= self.bounds.min.y
            && self.polygon.boundary_intersects(segment)
    }
}

/// Obstacle field backed by a list of polygons.
#[derive(Clone, Debug, Default)]
pub struct PolygonField {
    obstacles: Vec<Obstacle>,
    containment: ContainmentMode,
}

impl PolygonField {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles,
            containment: ContainmentMode::default(),
        }
    }

    /// Builder-style setter for containment mode.
    pub fn with_containment(mut self, mode: ContainmentMode) -> Self {
        self.containment = mode;
        self
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn containment(&self) -> ContainmentMode {
        self.containment
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Offset corners of every blocking obstacle, in obstacle order.
    ///
    /// Candidates may still fall inside a neighbouring obstacle; the graph
    /// builder filters those.
    pub fn corner_waypoints(&self, offset: f32) -> Vec<Point2D> {
        self.obstacles
            .iter()
            .filter(|o| o.is_blocking())
            .flat_map(|o| o.polygon.offset_corners(offset))
            .collect()
    }
}

impl ObstacleField for PolygonField {
    fn contains_point(&self, point: Point2D) -> bool {
        self.obstacles
            .iter()
            .any(|o| o.contains(point, self.containment))
    }

    fn segment_blocked(&self, a: Point2D, b: Point2D) -> bool {
        let segment = Segment2D::new(a, b);
        self.obstacles.iter().any(|o| o.occludes(&segment))
    }
}
