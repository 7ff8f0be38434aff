//! Collision-free spawn placement.
//!
//! [`PlacementSampler`] draws candidates uniformly inside a rectangle and
//! keeps the first one that
//!
//! 1. is not inside any obstacle,
//! 2. is at least the role's clearance radius from every point already in
//!    the batch, and
//! 3. has clear line of sight to one of the calibration anchors (a coarse
//!    check that the spot is not sealed off).
//!
//! The number of draws is bounded by [`PlacementConfig::max_attempts`];
//! running out yields [`PlacementError::Infeasible`].

mod config;
mod error;
mod sampler;

pub use config::{EntityRole, PlacementBatch, PlacementConfig};
pub use error::PlacementError;
pub use sampler::PlacementSampler;
