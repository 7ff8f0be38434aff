//! Visibility graph and A* shortest path.
//!
//! Vertices are 2D waypoints in free space; an edge joins two waypoints
//! with an unobstructed straight line between them. Edge weight is never
//! stored, it is the Euclidean distance between the endpoints.
//!
//! # Example
//!
//! ```rust
//! use marga::core::Point2D;
//! use marga::graph::VisibilityGraph;
//!
//! let mut graph = VisibilityGraph::new();
//! let a = Point2D::new(0.0, 0.0);
//! let b = Point2D::new(1.0, 0.0);
//! let c = Point2D::new(1.0, 1.0);
//! for p in [a, b, c] {
//!     graph.add_vertex(p);
//! }
//! graph.add_edge(a, b).unwrap();
//! graph.add_edge(b, c).unwrap();
//! graph.add_edge(a, c).unwrap();
//!
//! graph.set_source(a);
//! graph.set_target(c);
//! let path = graph.astar().unwrap();
//! assert_eq!(path.points, vec![a, c]);
//! ```
//!
//! # Ownership
//!
//! The shared graph is built once by [`VisibilityGraphBuilder`] and never
//! mutated afterwards. Each agent receives a `clone()`; clones share no
//! state with the original or with each other, so per-agent Source/Target
//! injection needs no synchronization.

mod astar;
mod builder;
mod error;
mod vertex;
mod visibility_graph;

pub use astar::{AStarConfig, FrontierKind};
pub use builder::{GraphBuildConfig, VisibilityGraphBuilder, connect_visible};
pub use error::{GraphError, PathFailure};
pub use vertex::VertexId;
pub use visibility_graph::VisibilityGraph;
