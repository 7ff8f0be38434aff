//! A placed agent and its private copy of the visibility graph.

use log::{debug, trace};

use crate::Path;
use crate::core::Point2D;
use crate::graph::{AStarConfig, PathFailure, VisibilityGraph, connect_visible};
use crate::obstacle::ObstacleField;

/// A placed agent.
///
/// The agent exclusively owns its graph clone, so it may inject and remove
/// vertices without affecting the shared graph or any other agent.
#[derive(Clone, Debug)]
pub struct Agent {
    /// Spawn order within the session.
    pub id: usize,
    position: Point2D,
    graph: VisibilityGraph,
    max_edge_length: f32,
}

impl Agent {
    /// Wrap a graph clone. The position is added and set as Source.
    pub fn new(id: usize, position: Point2D, mut graph: VisibilityGraph) -> Self {
        graph.set_source(position);
        Self {
            id,
            position,
            graph,
            max_edge_length: 0.0,
        }
    }

    /// Builder-style setter for the edge length used when linking injected
    /// vertices. `0.0` means unlimited.
    pub fn with_max_edge_length(mut self, length: f32) -> Self {
        self.max_edge_length = length;
        self
    }

    /// Current position; always a vertex of the agent's graph.
    pub fn position(&self) -> Point2D {
        self.position
    }

    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    /// Shortest path from the agent's position to `target`.
    ///
    /// The position is linked to every vertex it can see (it stays in the
    /// graph afterwards). If `target` is not already a vertex it is
    /// injected for the query and removed again before returning, so
    /// repeated queries leave the clone unchanged.
    pub fn plan_to<F: ObstacleField + ?Sized>(
        &mut self,
        target: Point2D,
        field: &F,
        astar: &AStarConfig,
    ) -> Result<Path, PathFailure> {
        let linked = connect_visible(&mut self.graph, self.position, field, self.max_edge_length);

        let injected = !self.graph.contains(target);
        if injected {
            connect_visible(&mut self.graph, target, field, self.max_edge_length);
        }

        self.graph.set_source(self.position);
        self.graph.set_target(target);
        trace!(
            "[Agent] {} planning {} -> {} (position links={}, injected target={})",
            self.id, self.position, target, linked, injected
        );

        let result = self.graph.astar_with(astar);

        if injected {
            self.graph.remove_vertex(target);
        }
        self.graph.clear_endpoints();
        self.graph.set_source(self.position);

        match &result {
            Ok(path) => debug!(
                "[Agent] {} path: {} waypoints, length={:.3}",
                self.id,
                path.points.len(),
                path.length
            ),
            Err(e) => debug!("[Agent] {} no path to {}: {}", self.id, target, e),
        }
        result
    }
}
