//! End-to-end spawning and planning in the sample scene.

use marga::graph::{AStarConfig, FrontierKind};
use marga::obstacle::ObstacleField;
use marga::placement::EntityRole;
use marga::session::SessionBuilder;

use crate::harness::sample_scene;

#[test]
fn test_sample_scene_spawn_and_plan() {
    env_logger::try_init().ok();

    let scene = sample_scene();
    let mut session = SessionBuilder::from_scene(&scene).build().unwrap();
    let shared_vertices = session.graph().vertex_count();
    let shared_edges = session.graph().edge_count();
    assert!(shared_vertices > 0);

    let mut agents = session.spawn_agents(scene.session.agents).unwrap();
    assert_eq!(agents.len(), scene.session.agents);

    let astar = session.astar_config().clone();
    for agent in agents.iter_mut() {
        let goal = session.spawn_target().unwrap();
        let before = agent.graph().vertex_count();

        let path = agent.plan_to(goal, session.field(), &astar).unwrap();

        assert_eq!(path.start(), Some(agent.position()));
        assert_eq!(path.end(), Some(goal));
        assert!(path.length >= agent.position().distance(goal) - 1e-4);
        for pair in path.points.windows(2) {
            assert!(
                session.field().is_visible(pair[0], pair[1]),
                "path edge {} -> {} crosses an obstacle",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(agent.graph().vertex_count(), before);
    }

    // Shared graph is never mutated by agents
    assert_eq!(session.graph().vertex_count(), shared_vertices);
    assert_eq!(session.graph().edge_count(), shared_edges);
    assert_eq!(session.placed(EntityRole::Target).len(), agents.len());
}

#[test]
fn test_heap_and_scan_agree_in_scene() {
    let scene = sample_scene();
    let mut session = SessionBuilder::from_scene(&scene).seed(99).build().unwrap();

    let scan = AStarConfig::default();
    let heap = AStarConfig::default().with_frontier(FrontierKind::Heap);

    for _ in 0..3 {
        let mut agent = session.spawn_agent().unwrap();
        let goal = session.spawn_target().unwrap();
        let a = agent.plan_to(goal, session.field(), &scan).unwrap();
        let b = agent.plan_to(goal, session.field(), &heap).unwrap();
        assert!((a.length - b.length).abs() < 1e-4);
    }
}

#[test]
fn test_same_seed_same_scene() {
    let scene = sample_scene();
    let spawn = |seed| {
        let mut session = SessionBuilder::from_scene(&scene).seed(seed).build().unwrap();
        session
            .spawn_agents(3)
            .unwrap()
            .into_iter()
            .map(|a| a.position())
            .collect::<Vec<_>>()
    };
    assert_eq!(spawn(5), spawn(5));
}
