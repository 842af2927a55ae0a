//! Walkthrough
//!
//! Drives the simulation through a full publish cycle on a real clock:
//! stage, commit, a rejected push, pull, then a successful push.
//!
//! Key concepts:
//! - `Driver` owns the animation timer and commits when it elapses
//! - The selection survives a commit, so actions can be re-run
//! - Refused actions leave the graph unchanged and explain why
//!
//! Run with: cargo run --example walkthrough

use gitfit::engine::{Driver, Simulation};
use gitfit::registry::ActionKind;
use gitfit::Config;

#[tokio::main]
async fn main() {
    println!("=== gitfit walkthrough ===\n");

    let config = Config {
        animation_ms: 300,
        ..Default::default()
    };
    let mut driver = Driver::new(Simulation::with_config(&config));

    let steps = [
        ActionKind::Add,
        ActionKind::Commit,
        ActionKind::Push,
        ActionKind::Pull,
        ActionKind::Push,
    ];

    for kind in steps {
        driver.select(kind);
        if !driver.execute() {
            println!("{kind}: could not start");
            continue;
        }
        println!("{kind}: animating {} transition(s)", driver.scene().transitions.len());

        driver.settle().await;
        let scene = driver.scene();
        println!("  -> {}", scene.summary.as_deref().unwrap_or("(no output)"));
        println!("  -> {} nodes on the canvas\n", scene.nodes.len());
    }

    driver.reset();
    println!("Reset: back to {} nodes, phase {}", driver.nodes().len(), driver.phase());
}
