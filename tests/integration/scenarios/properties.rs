//! Planner and sampler properties checked across many seeds.

use marga::PathFailure;
use marga::core::{Bounds, Point2D};
use marga::graph::{AStarConfig, FrontierKind};
use marga::obstacle::{Obstacle, ObstacleField, PolygonField};
use marga::placement::{EntityRole, PlacementBatch, PlacementConfig, PlacementError, PlacementSampler};

use crate::harness::{random_graph, reference_shortest_length, sample_scene};

#[test]
fn test_astar_matches_reference_on_random_graphs() {
    env_logger::try_init().ok();

    for seed in 0..40 {
        let graph = random_graph(seed, 14, 0.25);
        let expected = reference_shortest_length(&graph);

        for frontier in [FrontierKind::Scan, FrontierKind::Heap] {
            let config = AStarConfig::default().with_frontier(frontier);
            match (graph.astar_with(&config), expected) {
                (Ok(path), Some(len)) => {
                    assert!(
                        (path.length - len).abs() < 1e-3,
                        "seed {} {:?}: astar {} vs reference {}",
                        seed,
                        frontier,
                        path.length,
                        len
                    );
                    assert_eq!(path.start(), graph.source());
                    assert_eq!(path.end(), graph.target());
                    for pair in path.points.windows(2) {
                        assert!(graph.has_edge(pair[0], pair[1]));
                    }
                }
                (Err(PathFailure::Unreachable { .. }), None) => {}
                (got, want) => panic!("seed {} {:?}: got {:?}, want {:?}", seed, frontier, got, want),
            }
        }
    }
}

#[test]
fn test_clone_independence_under_mutation() {
    for seed in 0..10 {
        let original = random_graph(seed, 10, 0.4);
        let vertices = original.vertex_count();
        let edges = original.edge_count();

        let mut clone = original.clone();
        let first = clone.vertices().next().unwrap();
        clone.remove_vertex(first);
        clone.add_vertex(Point2D::new(-1.0, -1.0));

        assert_eq!(original.vertex_count(), vertices);
        assert_eq!(original.edge_count(), edges);
        assert!(original.contains(first));
        assert!(!original.contains(Point2D::new(-1.0, -1.0)));
    }
}

#[test]
fn test_adjacency_stays_symmetric_after_removals() {
    for seed in 0..10 {
        let mut graph = random_graph(seed, 12, 0.5);
        let victims: Vec<Point2D> = graph.vertices().step_by(3).collect();
        for v in victims {
            assert!(graph.remove_vertex(v));
        }
        for v in graph.vertices() {
            for n in graph.neighbors(v) {
                assert!(graph.contains(n));
                assert!(graph.neighbors(n).contains(&v));
            }
        }
    }
}

#[test]
fn test_scene_spawns_respect_obstacles_and_clearance() {
    let scene = sample_scene();
    let field = scene.obstacle_field();

    for seed in 0..10 {
        let mut sampler = PlacementSampler::new(scene.to_placement_config(), Some(seed));
        let mut batch = PlacementBatch::new();
        for _ in 0..15 {
            let p = sampler.spawn(&field, EntityRole::Agent, &mut batch).unwrap();
            assert!(!field.contains_point(p));
            assert!(scene.placement_bounds().contains(p));
            assert!(scene.placement.anchors.iter().any(|&a| field.is_visible(p, a)));
        }

        let pts = batch.points();
        let r_sq = scene.placement.agent_clearance * scene.placement.agent_clearance;
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(pts[i].distance_squared(pts[j]) >= r_sq);
            }
        }
    }
}

#[test]
fn test_covered_bounds_fail_within_budget() {
    let bounds = Bounds::from_extents(0.0, 1.0, 0.0, 1.0);
    let field = PolygonField::new(vec![Obstacle::blocking(
        "cover",
        vec![
            Point2D::new(-0.5, -0.5),
            Point2D::new(1.5, -0.5),
            Point2D::new(1.5, 1.5),
            Point2D::new(-0.5, 1.5),
        ],
    )]);
    let config = PlacementConfig::default()
        .with_bounds(bounds)
        .with_max_attempts(500);

    for seed in 0..5 {
        let mut sampler = PlacementSampler::new(config.clone(), Some(seed));
        let mut batch = PlacementBatch::new();
        assert_eq!(
            sampler.spawn(&field, EntityRole::Target, &mut batch),
            Err(PlacementError::Infeasible {
                role: EntityRole::Target,
                attempts: 500
            })
        );
    }
}
