//! Obstacle geometry and the line-of-sight oracle.
//!
//! The planner and the placement sampler only talk to obstacles through the
//! [`ObstacleField`] trait: point containment and segment occlusion. Any
//! geometry backend can implement it. [`PolygonField`] is a plain
//! polygon-list implementation used by the binary and the tests.
//!
//! # Classification
//!
//! Obstacles are [`ObstacleClass::Blocking`] (walls, wire, scene
//! boundaries) or [`ObstacleClass::NonBlocking`] (open terrain features).
//! Both classes reject spawn positions inside them, only blocking
//! obstacles occlude line of sight.

mod field;

pub use field::{ContainmentMode, Obstacle, ObstacleClass, PolygonField};

use crate::core::Point2D;

/// Line-of-sight oracle queried by graph construction and placement.
pub trait ObstacleField {
    /// True if the point lies inside any obstacle region.
    fn contains_point(&self, point: Point2D) -> bool;

    /// True if the straight segment `a`-`b` crosses a blocking obstacle.
    fn segment_blocked(&self, a: Point2D, b: Point2D) -> bool;

    /// Convenience inverse of [`segment_blocked`](Self::segment_blocked).
    #[inline]
    fn is_visible(&self, a: Point2D, b: Point2D) -> bool {
        !self.segment_blocked(a, b)
    }
}

impl<T: ObstacleField + ?Sized> ObstacleField for &T {
    fn contains_point(&self, point: Point2D) -> bool {
        (**self).contains_point(point)
    }

    fn segment_blocked(&self, a: Point2D, b: Point2D) -> bool {
        (**self).segment_blocked(a, b)
    }
}
