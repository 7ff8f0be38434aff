//! Placement constraints and the per-batch record of accepted points.

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::{Bounds, Point2D};

/// What kind of entity is being placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityRole {
    /// A moving agent; gets a graph clone on acceptance.
    Agent,
    /// A destination marker.
    Target,
}

impl std::fmt::Display for EntityRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityRole::Agent => write!(f, "agent"),
            EntityRole::Target => write!(f, "target"),
        }
    }
}

/// Rejection sampling constraints.
#[derive(Clone, Debug)]
pub struct PlacementConfig {
    /// Rectangle candidates are drawn from.
    pub bounds: Bounds,

    /// Calibration anchors. A candidate must see at least one.
    /// Empty disables the reachability check.
    pub anchors: Vec<Point2D>,

    /// Draws before giving up.
    /// Default: 10_000
    pub max_attempts: usize,

    /// Minimum spacing between agents in one batch.
    /// Default: 0.18
    pub agent_clearance: f32,

    /// Minimum spacing between targets in one batch.
    /// Default: 0.20
    pub target_clearance: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::from_extents(
                defaults::min_x(),
                defaults::max_x(),
                defaults::min_y(),
                defaults::max_y(),
            ),
            anchors: defaults::anchors(),
            max_attempts: defaults::max_attempts(),
            agent_clearance: defaults::agent_clearance(),
            target_clearance: defaults::target_clearance(),
        }
    }
}

impl PlacementConfig {
    /// Builder-style setter for the sampling rectangle.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder-style setter for the anchor set.
    pub fn with_anchors(mut self, anchors: Vec<Point2D>) -> Self {
        self.anchors = anchors;
        self
    }

    /// Builder-style setter for the attempt budget.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Builder-style setter for both clearance radii.
    pub fn with_clearance(mut self, agent: f32, target: f32) -> Self {
        self.agent_clearance = agent;
        self.target_clearance = target;
        self
    }

    /// Clearance radius for a role.
    pub fn clearance(&self, role: EntityRole) -> f32 {
        match role {
            EntityRole::Agent => self.agent_clearance,
            EntityRole::Target => self.target_clearance,
        }
    }
}

/// Points accepted so far in one placement batch.
#[derive(Clone, Debug, Default)]
pub struct PlacementBatch {
    points: Vec<Point2D>,
}

impl PlacementBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// True if some accepted point is strictly closer than `radius`.
    #[inline]
    pub(crate) fn crowds(&self, candidate: Point2D, radius: f32) -> bool {
        let r_sq = radius * radius;
        self.points
            .iter()
            .any(|p| p.distance_squared(candidate) < r_sq)
    }
}
