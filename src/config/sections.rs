//! Scene configuration sections.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::graph::FrontierKind;
use crate::obstacle::{ContainmentMode, ObstacleClass};

use super::defaults;

/// Spawn placement settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementSection {
    /// Sampling rectangle
    #[serde(default)]
    pub bounds: BoundsSettings,

    /// Calibration anchors; an empty list disables the reachability check
    #[serde(default = "defaults::anchors")]
    pub anchors: Vec<Point2D>,

    /// Draws per spawn before failing
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: usize,

    /// Minimum spacing between agents
    #[serde(default = "defaults::agent_clearance")]
    pub agent_clearance: f32,

    /// Minimum spacing between targets
    #[serde(default = "defaults::target_clearance")]
    pub target_clearance: f32,
}

impl Default for PlacementSection {
    fn default() -> Self {
        Self {
            bounds: BoundsSettings::default(),
            anchors: defaults::anchors(),
            max_attempts: defaults::max_attempts(),
            agent_clearance: defaults::agent_clearance(),
            target_clearance: defaults::target_clearance(),
        }
    }
}

/// Axis-aligned rectangle given by its extents
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoundsSettings {
    #[serde(default = "defaults::min_x")]
    pub min_x: f32,
    #[serde(default = "defaults::max_x")]
    pub max_x: f32,
    #[serde(default = "defaults::min_y")]
    pub min_y: f32,
    #[serde(default = "defaults::max_y")]
    pub max_y: f32,
}

impl Default for BoundsSettings {
    fn default() -> Self {
        Self {
            min_x: defaults::min_x(),
            max_x: defaults::max_x(),
            min_y: defaults::min_y(),
            max_y: defaults::max_y(),
        }
    }
}

/// Visibility graph construction settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GraphSection {
    /// Distance obstacle corners are pushed outward
    #[serde(default = "defaults::corner_offset")]
    pub corner_offset: f32,

    /// Longest edge (0 = unlimited)
    #[serde(default)]
    pub max_edge_length: f32,

    /// Minimum distance between waypoints (0 = keep all)
    #[serde(default)]
    pub min_vertex_spacing: f32,

    /// Extra waypoints added alongside obstacle corners
    #[serde(default)]
    pub waypoints: Vec<Point2D>,
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            corner_offset: defaults::corner_offset(),
            max_edge_length: 0.0,
            min_vertex_spacing: 0.0,
            waypoints: Vec::new(),
        }
    }
}

/// A* settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// Open-set strategy
    #[serde(default)]
    pub frontier: FrontierKind,

    /// Maximum vertices to finalize
    #[serde(default = "defaults::max_expansions")]
    pub max_expansions: usize,
}

impl Default for PathfindingSection {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::default(),
            max_expansions: defaults::max_expansions(),
        }
    }
}

/// Session settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSection {
    /// RNG seed; omit for a fresh entropy-seeded run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Agents the binary spawns
    #[serde(default = "defaults::agents")]
    pub agents: usize,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            seed: None,
            agents: defaults::agents(),
        }
    }
}

/// Obstacle geometry
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ObstacleSection {
    /// Point containment test
    #[serde(default)]
    pub containment: ContainmentMode,

    /// Obstacle outlines
    #[serde(default)]
    pub regions: Vec<ObstacleSpec>,
}

/// One obstacle outline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObstacleSpec {
    /// Label for logs
    #[serde(default)]
    pub name: String,

    /// Whether the obstacle occludes line of sight
    #[serde(default)]
    pub class: ObstacleClass,

    /// Vertex ring, either winding
    pub points: Vec<Point2D>,
}
