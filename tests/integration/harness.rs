//! Shared fixtures and a brute-force reference planner.

use std::path::Path;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use marga::SceneConfig;
use marga::core::Point2D;
use marga::graph::VisibilityGraph;

/// The scene shipped in `configs/scene.yaml`.
pub fn sample_scene() -> SceneConfig {
    let path = format!("{}/configs/scene.yaml", env!("CARGO_MANIFEST_DIR"));
    SceneConfig::load(Path::new(&path)).unwrap()
}

/// Random graph of `n` points in a 10x10 square with each pair linked
/// with probability `density`. Source is the first point, Target the last.
pub fn random_graph(seed: u64, n: usize, density: f64) -> VisibilityGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<Point2D> = (0..n)
        .map(|_| Point2D::new(rng.random_range(0.0..10.0), rng.random_range(0.0..10.0)))
        .collect();

    let mut graph = VisibilityGraph::new();
    for &p in &points {
        graph.add_vertex(p);
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(density) {
                graph.add_edge(points[i], points[j]).unwrap();
            }
        }
    }
    graph.set_source(points[0]);
    graph.set_target(points[n - 1]);
    graph
}

/// Shortest Source→Target length by exhaustive Dijkstra, `None` if the
/// target is unreachable.
pub fn reference_shortest_length(graph: &VisibilityGraph) -> Option<f32> {
    let vertices: Vec<Point2D> = graph.vertices().collect();
    let index_of = |p: Point2D| vertices.iter().position(|&v| v == p);
    let source = index_of(graph.source()?)?;
    let target = index_of(graph.target()?)?;

    let mut dist = vec![f32::INFINITY; vertices.len()];
    let mut done = vec![false; vertices.len()];
    dist[source] = 0.0;

    loop {
        let next = (0..vertices.len())
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));
        let Some(u) = next else { break };
        done[u] = true;
        for n in graph.neighbors(vertices[u]) {
            if let Some(v) = index_of(n) {
                let candidate = dist[u] + vertices[u].distance(n);
                if candidate < dist[v] {
                    dist[v] = candidate;
                }
            }
        }
    }

    dist[target].is_finite().then_some(dist[target])
}
