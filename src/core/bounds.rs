//! Axis-aligned rectangle used as the placement region and as obstacle AABBs.
//!
//! ```rust
//! use marga::core::{Bounds, Point2D};
//!
//! let region = Bounds::from_extents(-7.25, 5.25, -5.61, 3.69);
//! assert!(region.contains(Point2D::new(0.0, 0.0)));
//! assert!(!region.contains(Point2D::new(6.0, 0.0)));
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Point2D,
    /// Maximum corner.
    pub max: Point2D,
}

impl Bounds {
    /// Create from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Create from per-axis extents.
    #[inline]
    pub const fn from_extents(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min: Point2D::new(min_x, min_y),
            max: Point2D::new(max_x, max_y),
        }
    }

    /// Inverted bounds that grow to fit the first included point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f32::INFINITY, f32::INFINITY),
            max: Point2D::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Smallest bounds containing every point, or `empty()` for no points.
    pub fn from_points<I: IntoIterator<Item = Point2D>>(points: I) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand_to_include(p);
        }
        bounds
    }

    /// True if min exceeds max on either axis (or a coordinate is NaN).
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Closed containment test (edges count as inside).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grow to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point2D) {
        self.min = Point2D::new(self.min.x.min(point.x), self.min.y.min(point.y));
        self.max = Point2D::new(self.max.x.max(point.x), self.max.y.max(point.y));
    }

    /// Corners in CCW order starting at `min`.
    #[inline]
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }

    /// Draw a point uniformly inside the bounds.
    ///
    /// Callers must reject empty bounds first; the inclusive ranges used
    /// here panic when `min > max`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2D {
        Point2D::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }
}
