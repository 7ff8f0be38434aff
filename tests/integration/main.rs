//! Integration tests for marga
//!
//! These tests drive the public API end to end: scene configuration,
//! graph construction, spawning, and planning.
//!
//! # Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test --test integration -- --nocapture
//!
//! # Run one group
//! cargo test --test integration properties
//! ```

mod harness;
mod scenarios;

pub use harness::{random_graph, reference_shortest_length, sample_scene};
