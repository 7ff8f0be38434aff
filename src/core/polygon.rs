//! Simple polygon with containment and corner-offset helpers.

use super::bounds::Bounds;
use super::point::Point2D;
use super::segment::Segment2D;

/// A simple (non self-intersecting) polygon given by its vertex ring.
///
/// The ring is implicitly closed; the last point connects to the first.
/// Either winding order is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point2D>,
}

impl Polygon {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle as a CCW polygon.
    pub fn rectangle(bounds: Bounds) -> Self {
        Self::new(bounds.corners().to_vec())
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// A polygon needs three vertices to enclose area.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Boundary edges in ring order.
    pub fn edges(&self) -> impl Iterator<Item = Segment2D> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment2D::new(self.points[i], self.points[(i + 1) % n]))
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(self.points.iter().copied())
    }

    /// Twice the signed area; positive for CCW rings.
    fn signed_area_x2(&self) -> f32 {
        self.edges().map(|e| e.start.cross(e.end)).sum()
    }

    /// Area centroid. Falls back to the vertex mean for zero-area rings.
    pub fn centroid(&self) -> Point2D {
        if self.points.is_empty() {
            return Point2D::ZERO;
        }
        let area_x2 = self.signed_area_x2();
        if area_x2.abs() <= f32::EPSILON {
            let sum = self.points.iter().fold(Point2D::ZERO, |acc, &p| acc + p);
            return sum * (1.0 / self.points.len() as f32);
        }
        let (cx, cy) = self.edges().fold((0.0, 0.0), |(cx, cy), e| {
            let w = e.start.cross(e.end);
            (cx + (e.start.x + e.end.x) * w, cy + (e.start.y + e.end.y) * w)
        });
        let scale = 1.0 / (3.0 * area_x2);
        Point2D::new(cx * scale, cy * scale)
    }

    /// Even-odd containment test.
    ///
    /// Points exactly on the boundary may land on either side.
    pub fn contains(&self, point: Point2D) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let mut inside = false;
        for edge in self.edges() {
            let (a, b) = (edge.start, edge.end);
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// True if the segment touches any boundary edge.
    pub fn boundary_intersects(&self, segment: &Segment2D) -> bool {
        !self.is_degenerate() && self.edges().any(|edge| edge.intersects(segment))
    }

    /// Each vertex pushed `offset` outward along its corner bisector.
    ///
    /// These are the classic visibility-graph waypoints: just outside the
    /// obstacle, so segments between them do not graze the boundary.
    pub fn offset_corners(&self, offset: f32) -> Vec<Point2D> {
        let n = self.points.len();
        if n < 3 {
            return Vec::new();
        }
        // Outward normal of a CCW edge is its direction rotated clockwise.
        let sign = if self.signed_area_x2() >= 0.0 { 1.0 } else { -1.0 };

        (0..n)
            .map(|i| {
                let prev = self.points[(i + n - 1) % n];
                let here = self.points[i];
                let next = self.points[(i + 1) % n];

                let d_in = (here - prev).normalized();
                let d_out = (next - here).normalized();
                let n_in = Point2D::new(d_in.y, -d_in.x) * sign;
                let n_out = Point2D::new(d_out.y, -d_out.x) * sign;

                let mut dir = (n_in + n_out).normalized();
                if dir == Point2D::ZERO {
                    dir = n_in;
                }
                here + dir * offset
            })
            .collect()
    }
}
