//! YAML scene loading from disk.

use std::io::Write;

use marga::config::{ConfigLoadError, SceneConfig};
use marga::core::Point2D;
use marga::obstacle::ObstacleField;
use tempfile::NamedTempFile;

use crate::harness::sample_scene;

#[test]
fn test_sample_scene_is_valid() {
    let scene = sample_scene();
    assert!(scene.validate().is_ok());
    assert_eq!(scene.session.seed, Some(42));
    assert_eq!(scene.placement.anchors.len(), 4);

    let field = scene.obstacle_field();
    for anchor in &scene.placement.anchors {
        assert!(!field.contains_point(*anchor), "anchor {} is inside an obstacle", anchor);
    }
}

#[test]
fn test_load_from_temp_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
placement:
  bounds: {{ min_x: 0.0, max_x: 4.0, min_y: 0.0, max_y: 2.0 }}
  anchors: []
graph:
  waypoints:
    - {{ x: 1.0, y: 1.0 }}
    - {{ x: 3.0, y: 1.0 }}
session:
  agents: 2
"#
    )
    .unwrap();

    let scene = SceneConfig::load(file.path()).unwrap();
    assert_eq!(scene.session.agents, 2);
    assert!(scene.placement.anchors.is_empty());
    // Unspecified fields keep their defaults
    assert_eq!(scene.placement.agent_clearance, 0.18);

    let field = scene.obstacle_field();
    let graph = scene.build_graph(&field);
    assert!(graph.has_edge(Point2D::new(1.0, 1.0), Point2D::new(3.0, 1.0)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    assert!(matches!(
        SceneConfig::load(&path),
        Err(ConfigLoadError::Io(_))
    ));
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "pathfinding:\n  max_expansions: 0").unwrap();
    assert!(matches!(
        SceneConfig::load(file.path()),
        Err(ConfigLoadError::Invalid(_))
    ));
}
