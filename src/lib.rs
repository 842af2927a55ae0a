//! gitfit: a visual version-control simulation engine
//!
//! A toy repository (working directory, staging area, local history, remote)
//! is modelled as a graph of typed nodes. A fixed catalog of actions
//! transforms that graph with pure functions, and a small state machine
//! animates the move from the old graph to the new one.
//!
//! The core follows a "pure core, imperative shell" split: transforms,
//! validation and the simulation state machine never sleep or touch I/O.
//! Timers live in [`engine::Driver`]; persistence lives in [`store`].
//!
//! # Modules
//!
//! - [`core`]: zones, nodes, positions, transitions, zoom
//! - [`registry`]: the action catalog and its transforms
//! - [`engine`]: simulation state machine, render snapshot, async driver
//! - [`validation`]: accumulated graph well-formedness checks
//! - [`history`]: lane layout of a static commit history
//! - [`flow`]: auto-advancing step-by-step walkthroughs
//! - [`store`]: learner progress and theme
//! - [`tutorial`]: tutorial content and visualization lookup
//! - [`terminal`]: scripted practice terminal
//! - [`config`]: durations and layout tunables
//!
//! # Example
//!
//! ```rust
//! use gitfit::core::FileStatus;
//! use gitfit::engine::{Phase, Simulation};
//! use gitfit::registry::ActionKind;
//!
//! let mut sim = Simulation::new();
//! sim.select(ActionKind::Add);
//! let scheduled = sim.execute().unwrap();
//! assert_eq!(sim.phase(), Phase::Animating);
//!
//! // Whoever owns the clock commits once the animation is over.
//! assert!(sim.commit(scheduled.ticket));
//! let staged = sim.nodes().iter().find(|n| n.id == "staged-file1").unwrap();
//! assert_eq!(staged.status, Some(FileStatus::Staged));
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod flow;
pub mod history;
pub mod registry;
pub mod store;
pub mod terminal;
pub mod tutorial;
pub mod validation;

pub use config::{Config, ConfigError};
pub use engine::{Driver, Phase, Scene, Simulation};
pub use registry::{Action, ActionKind, Registry};
