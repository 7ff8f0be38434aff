//! Scene configuration loading.
//!
//! Loads placement, graph, pathfinding, session, and obstacle settings
//! from a single YAML file. Every section and field is optional; missing
//! values fall back to the defaults of the reference scene.

pub(crate) mod defaults;
mod error;
mod scene;
mod sections;

// Re-export main types
pub use error::ConfigLoadError;
pub use scene::SceneConfig;

// Re-export section types
pub use sections::{
    BoundsSettings, GraphSection, ObstacleSection, ObstacleSpec, PathfindingSection,
    PlacementSection, SessionSection,
};
