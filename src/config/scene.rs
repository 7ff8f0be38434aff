//! Main SceneConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point2D, Polygon};
use crate::graph::{AStarConfig, GraphBuildConfig, VisibilityGraph, VisibilityGraphBuilder};
use crate::obstacle::{Obstacle, PolygonField};
use crate::placement::PlacementConfig;

use super::error::ConfigLoadError;
use super::sections::{
    GraphSection, ObstacleSection, PathfindingSection, PlacementSection, SessionSection,
};

/// Full scene configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SceneConfig {
    /// Spawn placement settings
    #[serde(default)]
    pub placement: PlacementSection,

    /// Visibility graph settings
    #[serde(default)]
    pub graph: GraphSection,

    /// A* settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Session settings
    #[serde(default)]
    pub session: SessionSection,

    /// Obstacle geometry
    #[serde(default)]
    pub obstacles: ObstacleSection,
}

impl SceneConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/scene.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/scene.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let invalid = |msg: String| Err(ConfigLoadError::Invalid(msg));

        let b = &self.placement.bounds;
        if ![b.min_x, b.max_x, b.min_y, b.max_y].iter().all(|v| v.is_finite()) {
            return invalid("placement bounds must be finite".into());
        }
        if b.min_x > b.max_x || b.min_y > b.max_y {
            return invalid(format!(
                "placement bounds are empty: x [{}, {}], y [{}, {}]",
                b.min_x, b.max_x, b.min_y, b.max_y
            ));
        }
        if !(b.max_x - b.min_x).is_finite() || !(b.max_y - b.min_y).is_finite() {
            return invalid("placement bounds span overflows f32".into());
        }
        if self.placement.anchors.iter().any(|a| !a.is_finite()) {
            return invalid("anchor coordinates must be finite".into());
        }
        if self.placement.max_attempts == 0 {
            return invalid("placement.max_attempts must be positive".into());
        }
        if !(self.placement.agent_clearance >= 0.0 && self.placement.target_clearance >= 0.0) {
            return invalid("clearance radii must be non-negative".into());
        }
        if !(self.graph.corner_offset >= 0.0
            && self.graph.max_edge_length >= 0.0
            && self.graph.min_vertex_spacing >= 0.0)
        {
            return invalid("graph distances must be non-negative".into());
        }
        if self.pathfinding.max_expansions == 0 {
            return invalid("pathfinding.max_expansions must be positive".into());
        }
        for (i, region) in self.obstacles.regions.iter().enumerate() {
            if region.points.len() < 3 {
                return invalid(format!(
                    "obstacle {} ('{}') needs at least 3 points, has {}",
                    i,
                    region.name,
                    region.points.len()
                ));
            }
            if region.points.iter().any(|p| !p.is_finite()) {
                return invalid(format!("obstacle {} ('{}') has non-finite points", i, region.name));
            }
        }
        Ok(())
    }

    /// Placement sampling rectangle
    pub fn placement_bounds(&self) -> Bounds {
        let b = &self.placement.bounds;
        Bounds::from_extents(b.min_x, b.max_x, b.min_y, b.max_y)
    }

    /// Convert to PlacementConfig
    pub fn to_placement_config(&self) -> PlacementConfig {
        PlacementConfig {
            bounds: self.placement_bounds(),
            anchors: self.placement.anchors.clone(),
            max_attempts: self.placement.max_attempts,
            agent_clearance: self.placement.agent_clearance,
            target_clearance: self.placement.target_clearance,
        }
    }

    /// Convert to GraphBuildConfig
    pub fn to_graph_config(&self) -> GraphBuildConfig {
        GraphBuildConfig {
            corner_offset: self.graph.corner_offset,
            max_edge_length: self.graph.max_edge_length,
            min_vertex_spacing: self.graph.min_vertex_spacing,
        }
    }

    /// Convert to AStarConfig
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            frontier: self.pathfinding.frontier,
            max_expansions: self.pathfinding.max_expansions,
        }
    }

    /// Build the polygon obstacle field
    pub fn obstacle_field(&self) -> PolygonField {
        let obstacles = self
            .obstacles
            .regions
            .iter()
            .map(|r| Obstacle::new(r.name.clone(), r.class, Polygon::new(r.points.clone())))
            .collect();
        PolygonField::new(obstacles).with_containment(self.obstacles.containment)
    }

    /// Build the shared visibility graph from obstacle corners plus any
    /// extra waypoints.
    pub fn build_graph(&self, field: &PolygonField) -> VisibilityGraph {
        let builder = VisibilityGraphBuilder::new(self.to_graph_config());
        let mut waypoints: Vec<Point2D> = field.corner_waypoints(self.graph.corner_offset);
        waypoints.extend(self.graph.waypoints.iter().copied());
        builder.build(field, waypoints)
    }
}
