//! Initialization phase and spawn orchestration.
//!
//! A [`SessionBuilder`] collects the shared graph, the obstacle field, and
//! the placement settings. [`SessionBuilder::build`] is the single point
//! where readiness is checked; after it succeeds the session can spawn
//! agents and targets.
//!
//! ```rust
//! use marga::core::{Bounds, Point2D};
//! use marga::graph::VisibilityGraph;
//! use marga::obstacle::PolygonField;
//! use marga::placement::PlacementConfig;
//! use marga::session::SessionBuilder;
//!
//! let placement = PlacementConfig::default()
//!     .with_bounds(Bounds::from_extents(0.0, 4.0, 0.0, 4.0))
//!     .with_anchors(vec![Point2D::new(2.0, 2.0)]);
//! let mut session = SessionBuilder::new()
//!     .graph(VisibilityGraph::new())
//!     .field(PolygonField::default())
//!     .placement(placement)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! let agent = session.spawn_agent().unwrap();
//! assert!(agent.graph().contains(agent.position()));
//! ```

use log::{debug, info};
use thiserror::Error;

use crate::Path;
use crate::agent::Agent;
use crate::config::SceneConfig;
use crate::core::Point2D;
use crate::graph::{AStarConfig, PathFailure, VisibilityGraph, connect_visible};
use crate::obstacle::ObstacleField;
use crate::placement::{
    EntityRole, PlacementBatch, PlacementConfig, PlacementError, PlacementSampler,
};

/// Session setup and spawn errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// `build()` was called before every dependency was supplied.
    #[error("session not ready, missing: {missing}")]
    NotReady { missing: String },

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Path(#[from] PathFailure),
}

/// Collects session dependencies.
#[derive(Default)]
pub struct SessionBuilder {
    graph: Option<VisibilityGraph>,
    field: Option<Box<dyn ObstacleField>>,
    placement: Option<PlacementConfig>,
    astar: AStarConfig,
    seed: Option<u64>,
    max_edge_length: f32,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with every dependency taken from a scene configuration.
    pub fn from_scene(scene: &SceneConfig) -> Self {
        let field = scene.obstacle_field();
        let graph = scene.build_graph(&field);
        let mut builder = Self::new()
            .graph(graph)
            .field(field)
            .placement(scene.to_placement_config())
            .astar(scene.to_astar_config())
            .max_edge_length(scene.graph.max_edge_length);
        if let Some(seed) = scene.session.seed {
            builder = builder.seed(seed);
        }
        builder
    }

    /// Shared visibility graph; never mutated by the session.
    pub fn graph(mut self, graph: VisibilityGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Line-of-sight oracle.
    pub fn field<F: ObstacleField + 'static>(mut self, field: F) -> Self {
        self.field = Some(Box::new(field));
        self
    }

    /// Placement bounds, anchors, and clearances.
    pub fn placement(mut self, config: PlacementConfig) -> Self {
        self.placement = Some(config);
        self
    }

    pub fn astar(mut self, config: AStarConfig) -> Self {
        self.astar = config;
        self
    }

    /// Seed for reproducible placement.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Edge limit when linking agent positions into their clones.
    pub fn max_edge_length(mut self, length: f32) -> Self {
        self.max_edge_length = length;
        self
    }

    /// Check readiness and start the session.
    pub fn build(self) -> Result<SpawnSession, SessionError> {
        let mut missing = Vec::new();
        if self.graph.is_none() {
            missing.push("graph");
        }
        if self.field.is_none() {
            missing.push("obstacle field");
        }
        if self.placement.is_none() {
            missing.push("placement anchors");
        }

        let (Some(graph), Some(field), Some(placement)) = (self.graph, self.field, self.placement)
        else {
            let missing = missing.join(", ");
            debug!("[Session] not ready: missing {}", missing);
            return Err(SessionError::NotReady { missing });
        };

        info!(
            "[Session] ready: {} vertices, {} edges, {} anchors, seed={:?}",
            graph.vertex_count(),
            graph.edge_count(),
            placement.anchors.len(),
            self.seed
        );

        Ok(SpawnSession {
            graph,
            field,
            sampler: PlacementSampler::new(placement, self.seed),
            astar: self.astar,
            max_edge_length: self.max_edge_length,
            agent_batch: PlacementBatch::new(),
            target_batch: PlacementBatch::new(),
        })
    }
}

/// A ready session that spawns agents and targets.
pub struct SpawnSession {
    graph: VisibilityGraph,
    field: Box<dyn ObstacleField>,
    sampler: PlacementSampler,
    astar: AStarConfig,
    max_edge_length: f32,
    agent_batch: PlacementBatch,
    target_batch: PlacementBatch,
}

impl SpawnSession {
    /// Place an agent and hand it its own graph clone with the spawn
    /// position already linked in as Source.
    pub fn spawn_agent(&mut self) -> Result<Agent, SessionError> {
        let id = self.agent_batch.len();
        let field = &*self.field;
        let limit = self.max_edge_length;
        let mut clone = self.graph.clone();

        let position = self.sampler.spawn_with(
            field,
            EntityRole::Agent,
            &mut self.agent_batch,
            |pos| {
                connect_visible(&mut clone, pos, field, limit);
            },
        )?;

        debug!("[Session] agent {} spawned at {}", id, position);
        Ok(Agent::new(id, position, clone).with_max_edge_length(limit))
    }

    /// Place a target. Targets are spaced among themselves only.
    pub fn spawn_target(&mut self) -> Result<Point2D, SessionError> {
        let position = self
            .sampler
            .spawn(&*self.field, EntityRole::Target, &mut self.target_batch)?;
        debug!("[Session] target spawned at {}", position);
        Ok(position)
    }

    /// Plan `agent` to `target` against this session's field and A*
    /// settings.
    pub fn plan(&self, agent: &mut Agent, target: Point2D) -> Result<Path, SessionError> {
        Ok(agent.plan_to(target, &*self.field, &self.astar)?)
    }

    /// Place `n` agents, stopping at the first failure.
    pub fn spawn_agents(&mut self, n: usize) -> Result<Vec<Agent>, SessionError> {
        (0..n).map(|_| self.spawn_agent()).collect()
    }

    /// The shared graph.
    pub fn graph(&self) -> &VisibilityGraph {
        &self.graph
    }

    pub fn field(&self) -> &dyn ObstacleField {
        &*self.field
    }

    pub fn astar_config(&self) -> &AStarConfig {
        &self.astar
    }

    pub fn agents_placed(&self) -> usize {
        self.agent_batch.len()
    }

    pub fn targets_placed(&self) -> usize {
        self.target_batch.len()
    }

    /// Positions accepted so far for a role.
    pub fn placed(&self, role: EntityRole) -> &[Point2D] {
        match role {
            EntityRole::Agent => self.agent_batch.points(),
            EntityRole::Target => self.target_batch.points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::graph::VisibilityGraphBuilder;
    use crate::obstacle::{Obstacle, PolygonField};

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    fn small_placement() -> PlacementConfig {
        PlacementConfig::default()
            .with_bounds(Bounds::from_extents(-3.0, 3.0, -3.0, 3.0))
            .with_anchors(vec![p(0.0, 2.5), p(0.0, -2.5)])
    }

    fn wall_field() -> PolygonField {
        PolygonField::new(vec![Obstacle::blocking(
            "wall",
            vec![p(-0.1, -1.0), p(0.1, -1.0), p(0.1, 1.0), p(-0.1, 1.0)],
        )])
    }

    fn ready_session(seed: u64) -> SpawnSession {
        let field = wall_field();
        let graph = VisibilityGraphBuilder::default().build_from_polygons(&field);
        SessionBuilder::new()
            .graph(graph)
            .field(field)
            .placement(small_placement())
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_reports_missing_dependencies() {
        let err = SessionBuilder::new()
            .field(PolygonField::default())
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            SessionError::NotReady {
                missing: "graph, placement anchors".to_string()
            }
        );
    }

    #[test]
    fn test_spawn_agent_owns_independent_clone() {
        let mut session = ready_session(11);
        let shared_vertices = session.graph().vertex_count();

        let a = session.spawn_agent().unwrap();
        let b = session.spawn_agent().unwrap();

        assert_eq!(session.agents_placed(), 2);
        assert_eq!((a.id, b.id), (0, 1));
        assert_eq!(session.graph().vertex_count(), shared_vertices);
        assert!(a.graph().contains(a.position()));
        assert!(!a.graph().contains(b.position()));
        assert_eq!(a.graph().source(), Some(a.position()));
        assert!(!a.graph().neighbors(a.position()).is_empty());
    }

    #[test]
    fn test_agents_and_targets_use_separate_batches() {
        let mut session = ready_session(12);
        session.spawn_agents(3).unwrap();
        session.spawn_target().unwrap();
        assert_eq!(session.placed(EntityRole::Agent).len(), 3);
        assert_eq!(session.placed(EntityRole::Target).len(), 1);
        assert_eq!(session.targets_placed(), 1);
    }

    #[test]
    fn test_spawn_then_plan() {
        let mut session = ready_session(13);
        let mut agent = session.spawn_agent().unwrap();
        let goal = session.spawn_target().unwrap();
        let path = session.plan(&mut agent, goal).unwrap();
        assert_eq!(path.start(), Some(agent.position()));
        assert_eq!(path.end(), Some(goal));
        for pair in path.points.windows(2) {
            assert!(session.field().is_visible(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_unreachable_target_surfaces_as_session_error() {
        let field = PolygonField::new(vec![Obstacle::blocking(
            "box",
            vec![p(1.0, -1.0), p(2.5, -1.0), p(2.5, 1.0), p(1.0, 1.0)],
        )]);
        let placement = PlacementConfig::default()
            .with_bounds(Bounds::from_extents(-3.0, -2.0, -1.0, 1.0))
            .with_anchors(Vec::new());
        let mut session = SessionBuilder::new()
            .graph(VisibilityGraph::new())
            .field(field)
            .placement(placement)
            .seed(15)
            .build()
            .unwrap();

        let mut agent = session.spawn_agent().unwrap();
        let sealed = p(1.75, 0.0);
        assert!(matches!(
            session.plan(&mut agent, sealed),
            Err(SessionError::Path(PathFailure::Unreachable { .. }))
        ));
        assert!(!agent.graph().contains(sealed));
    }

    #[test]
    fn test_infeasible_placement_surfaces_as_session_error() {
        let field = PolygonField::new(vec![Obstacle::blocking(
            "cover",
            vec![p(-5.0, -5.0), p(5.0, -5.0), p(5.0, 5.0), p(-5.0, 5.0)],
        )]);
        let mut session = SessionBuilder::new()
            .graph(VisibilityGraph::new())
            .field(field)
            .placement(small_placement().with_max_attempts(50))
            .seed(14)
            .build()
            .unwrap();
        assert!(matches!(
            session.spawn_agent(),
            Err(SessionError::Placement(PlacementError::Infeasible { .. }))
        ));
        assert_eq!(session.agents_placed(), 0);
    }
}
