//! Default value functions for serde deserialization.

use crate::core::Point2D;

pub fn min_x() -> f32 {
    -7.25
}

pub fn max_x() -> f32 {
    5.25
}

pub fn min_y() -> f32 {
    -5.61
}

pub fn max_y() -> f32 {
    3.69
}

pub fn anchors() -> Vec<Point2D> {
    vec![
        Point2D::new(-2.94, 0.66),
        Point2D::new(0.01, 0.66),
        Point2D::new(2.22, 0.66),
        Point2D::new(-1.96, -1.68),
    ]
}

pub fn max_attempts() -> usize {
    10_000
}

pub fn agent_clearance() -> f32 {
    0.18
}

pub fn target_clearance() -> f32 {
    0.20
}

pub fn corner_offset() -> f32 {
    0.1
}

pub fn max_expansions() -> usize {
    100_000
}

pub fn agents() -> usize {
    4
}
