//! Line segment type and segment-segment intersection.

use super::point::Point2D;

/// A closed 2D line segment defined by its endpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2D {
    /// Start point.
    pub start: Point2D,
    /// End point.
    pub end: Point2D,
}

impl Segment2D {
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2D {
        self.start + self.direction() * t
    }

    /// True if the two closed segments share at least one point.
    ///
    /// Touching endpoints and collinear overlap both count.
    pub fn intersects(&self, other: &Segment2D) -> bool {
        let (p1, p2, q1, q2) = (self.start, self.end, other.start, other.end);

        let d1 = orientation(q1, q2, p1);
        let d2 = orientation(q1, q2, p2);
        let d3 = orientation(p1, p2, q1);
        let d4 = orientation(p1, p2, q2);

        if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
            && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
        {
            return true;
        }

        (d1 == 0.0 && within_box(q1, q2, p1))
            || (d2 == 0.0 && within_box(q1, q2, p2))
            || (d3 == 0.0 && within_box(p1, p2, q1))
            || (d4 == 0.0 && within_box(p1, p2, q2))
    }
}

/// Signed area of the triangle (a, b, c); positive when c is left of a→b.
#[inline]
fn orientation(a: Point2D, b: Point2D, c: Point2D) -> f32 {
    (b - a).cross(c - a)
}

/// Whether collinear point `p` lies within the box spanned by `a` and `b`.
#[inline]
fn within_box(a: Point2D, b: Point2D, p: Point2D) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}
