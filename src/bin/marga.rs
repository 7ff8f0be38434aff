//! Spawn agents and targets in a scene and plan a path for each agent.
//!
//! Usage:
//!   marga --config configs/scene.yaml --agents 6 --seed 42
//!   RUST_LOG=debug marga  # Uses configs/scene.yaml or built-in defaults

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use marga::SceneConfig;
use marga::session::SessionBuilder;

/// Visibility-graph planning demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene configuration file path
    #[arg(short, long, default_value = "configs/scene.yaml")]
    config: String,

    /// Number of agents (overrides session.agents)
    #[arg(short, long)]
    agents: Option<usize>,

    /// RNG seed (overrides session.seed)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config_path = Path::new(&args.config);
    let scene = if config_path.exists() {
        match SceneConfig::load(config_path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Failed to load {}: {}", config_path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        warn!(
            "Config not found at {}, using defaults",
            config_path.display()
        );
        SceneConfig::default()
    };

    let agent_count = args.agents.unwrap_or(scene.session.agents);
    let mut builder = SessionBuilder::from_scene(&scene);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let mut session = match builder.build() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Initialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Scene: {} obstacles, graph {} vertices / {} edges",
        scene.obstacles.regions.len(),
        session.graph().vertex_count(),
        session.graph().edge_count()
    );

    let mut failures = 0;
    for _ in 0..agent_count {
        let mut agent = match session.spawn_agent() {
            Ok(agent) => agent,
            Err(e) => {
                println!("agent {}: placement failed: {}", session.agents_placed(), e);
                failures += 1;
                break;
            }
        };
        let goal = match session.spawn_target() {
            Ok(goal) => goal,
            Err(e) => {
                println!("agent {}: target placement failed: {}", agent.id, e);
                failures += 1;
                continue;
            }
        };

        match session.plan(&mut agent, goal) {
            Ok(path) => println!(
                "agent {}: {} -> {}: {} waypoints, length {:.3}",
                agent.id,
                agent.position(),
                goal,
                path.points.len(),
                path.length
            ),
            Err(e) => {
                println!("agent {}: {} -> {}: {}", agent.id, agent.position(), goal, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
