//! # Marga: Visibility-Graph Path Planning and Spawn Placement
//!
//! A small planning library for 2D scenes with polygonal obstacles.
//!
//! ## Features
//!
//! - **Visibility graph**: value-deduplicated waypoints with stable integer
//!   ids, symmetric adjacency, and transactional vertex removal
//! - **A\* search**: Euclidean cost and heuristic, linear-scan or heap
//!   frontier, explicit failure for unreachable targets
//! - **Placement**: bounded rejection sampling that avoids obstacles,
//!   keeps clearance within a batch, and requires line of sight to an
//!   anchor point
//! - **Sessions**: explicit initialization, then spawning agents that each
//!   own an independent graph clone
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::config::SceneConfig;
//! use marga::session::SessionBuilder;
//!
//! let scene = SceneConfig::load_default().unwrap();
//! let mut session = SessionBuilder::from_scene(&scene).seed(7).build().unwrap();
//!
//! let mut agent = session.spawn_agent().unwrap();
//! let goal = session.spawn_target().unwrap();
//! match agent.plan_to(goal, session.field(), session.astar_config()) {
//!     Ok(path) => println!("{} waypoints, {:.2} long", path.points.len(), path.length),
//!     Err(e) => println!("no path: {}", e),
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Geometry value types (Point2D, Bounds, Segment2D, Polygon)
//! - [`obstacle`]: The line-of-sight oracle trait and a polygon implementation
//! - [`graph`]: Visibility graph, A*, and graph construction
//! - [`placement`]: Collision-free spawn sampling
//! - [`agent`]: Per-agent graph ownership and path queries
//! - [`session`]: Initialization phase and spawn orchestration
//! - [`config`]: YAML scene configuration

pub mod agent;
pub mod config;
pub mod core;
pub mod graph;
pub mod obstacle;
pub mod placement;
pub mod session;

// Re-export main types at crate root
pub use agent::Agent;
pub use config::{ConfigLoadError, SceneConfig};
pub use graph::{AStarConfig, FrontierKind, GraphError, PathFailure, VisibilityGraph};
pub use obstacle::{ObstacleField, PolygonField};
pub use placement::{EntityRole, PlacementConfig, PlacementError, PlacementSampler};
pub use session::{SessionBuilder, SessionError, SpawnSession};

use crate::core::Point2D;

/// A planned path through the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Waypoints from source to target, inclusive.
    pub points: Vec<Point2D>,
    /// Total path length.
    pub length: f32,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            length: 0.0,
        }
    }

    /// Path through `points`, with length summed over consecutive pairs.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        let length = points.windows(2).map(|w| w[0].distance(w[1])).sum();
        Self { points, length }
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First waypoint, or `None` for an empty path.
    pub fn start(&self) -> Option<Point2D> {
        self.points.first().copied()
    }

    /// Last waypoint, or `None` for an empty path.
    pub fn end(&self) -> Option<Point2D> {
        self.points.last().copied()
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}
