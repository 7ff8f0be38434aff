//! Visibility graph construction from an obstacle oracle.
//!
//! Waypoints are filtered against the oracle's containment query and then
//! connected pairwise wherever the oracle reports clear line of sight.
//! [`connect_visible`] performs the same linking for a single point, which
//! is how agents inject their own Source/Target vertices into a clone.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::obstacle::{ObstacleField, PolygonField};

use super::visibility_graph::VisibilityGraph;

/// Configuration for visibility graph construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphBuildConfig {
    /// Distance corner waypoints are pushed outside their obstacle.
    /// Default: 0.1
    pub corner_offset: f32,

    /// Longest edge to create. `0.0` means unlimited.
    /// Default: 0.0
    pub max_edge_length: f32,

    /// Waypoints closer than this to an accepted waypoint are dropped.
    /// `0.0` keeps every distinct coordinate.
    /// Default: 0.0
    pub min_vertex_spacing: f32,
}

impl Default for GraphBuildConfig {
    fn default() -> Self {
        Self {
            corner_offset: 0.1,
            max_edge_length: 0.0,
            min_vertex_spacing: 0.0,
        }
    }
}

impl GraphBuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for corner offset.
    pub fn with_corner_offset(mut self, offset: f32) -> Self {
        self.corner_offset = offset;
        self
    }

    /// Builder-style setter for maximum edge length.
    pub fn with_max_edge_length(mut self, length: f32) -> Self {
        self.max_edge_length = length;
        self
    }

    /// Builder-style setter for minimum vertex spacing.
    pub fn with_min_vertex_spacing(mut self, spacing: f32) -> Self {
        self.min_vertex_spacing = spacing;
        self
    }

    #[inline]
    fn within_edge_length(&self, a: Point2D, b: Point2D) -> bool {
        self.max_edge_length <= 0.0 || a.distance(b) <= self.max_edge_length
    }
}

/// Builds the shared visibility graph once at start-up.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGraphBuilder {
    config: GraphBuildConfig,
}

impl VisibilityGraphBuilder {
    pub fn new(config: GraphBuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphBuildConfig {
        &self.config
    }

    /// Build from explicit waypoints.
    ///
    /// Waypoints inside an obstacle, non-finite waypoints, and waypoints
    /// within `min_vertex_spacing` of an earlier one are skipped. Every
    /// remaining pair with clear line of sight becomes an edge.
    pub fn build<F, I>(&self, field: &F, waypoints: I) -> VisibilityGraph
    where
        F: ObstacleField + ?Sized,
        I: IntoIterator<Item = Point2D>,
    {
        let mut accepted: Vec<Point2D> = Vec::new();
        let mut skipped = 0usize;
        let spacing_sq = self.config.min_vertex_spacing * self.config.min_vertex_spacing;

        for wp in waypoints {
            let crowded = spacing_sq > 0.0
                && accepted.iter().any(|a| a.distance_squared(wp) < spacing_sq);
            if !wp.is_finite() || crowded || field.contains_point(wp) {
                skipped += 1;
                continue;
            }
            accepted.push(wp);
        }

        let mut graph = VisibilityGraph::new();
        let ids: Vec<_> = accepted.iter().map(|&p| graph.add_vertex(p)).collect();

        for i in 0..accepted.len() {
            for j in (i + 1)..accepted.len() {
                let (a, b) = (accepted[i], accepted[j]);
                if self.config.within_edge_length(a, b) && field.is_visible(a, b) {
                    graph.link(ids[i], ids[j]);
                }
            }
        }

        debug!(
            "[GraphBuild] {} vertices, {} edges ({} waypoints skipped)",
            graph.vertex_count(),
            graph.edge_count(),
            skipped
        );
        graph
    }

    /// Build from the offset corners of every blocking obstacle.
    pub fn build_from_polygons(&self, field: &PolygonField) -> VisibilityGraph {
        let waypoints = field.corner_waypoints(self.config.corner_offset);
        self.build(field, waypoints)
    }
}

/// Add `point` to the graph and link it to every vertex it can see.
///
/// Returns the number of edges created. Existing edges are left alone, so
/// calling this twice for the same point is harmless.
pub fn connect_visible<F: ObstacleField + ?Sized>(
    graph: &mut VisibilityGraph,
    point: Point2D,
    field: &F,
    max_edge_length: f32,
) -> usize {
    let id = graph.add_vertex(point);
    let candidates: Vec<_> = graph
        .vertices()
        .filter(|&v| v != point)
        .filter(|&v| max_edge_length <= 0.0 || v.distance(point) <= max_edge_length)
        .collect();

    let mut linked = 0;
    for v in candidates {
        if !field.is_visible(point, v) {
            continue;
        }
        if let Some(other) = graph.id_of(v) {
            if graph.link(id, other) {
                linked += 1;
            }
        }
    }

    trace!("[GraphBuild] connected {} with {} new edges", point, linked);
    linked
}
