//! Core geometry types.
//!
//! - [`Point2D`]: value-typed 2D point
//! - [`Bounds`]: axis-aligned rectangle
//! - [`Segment2D`]: closed line segment
//! - [`Polygon`]: obstacle outline

mod bounds;
mod point;
mod polygon;
mod segment;

pub use bounds::Bounds;
pub(crate) use point::PointKey;
pub use point::Point2D;
pub use polygon::Polygon;
pub use segment::Segment2D;
