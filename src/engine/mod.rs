//! Simulation engine: pure state machine plus the async shell that times it.
//!
//! [`Simulation`] is synchronous and never sleeps. `execute` returns a
//! [`Scheduled`] ticket; whoever owns the clock calls `commit` with it once
//! the animation interval has passed. [`Driver`] is that owner for tokio
//! programs.
//!
//! # Example
//!
//! ```rust
//! use gitfit::engine::{Driver, Phase, Simulation};
//! use gitfit::registry::ActionKind;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut driver = Driver::new(Simulation::new());
//! driver.select(ActionKind::Add);
//! assert!(driver.execute());
//! assert_eq!(driver.phase(), Phase::Animating);
//!
//! driver.reset();
//! assert_eq!(driver.phase(), Phase::Idle);
//! # }
//! ```

mod driver;
mod phase;
mod scene;
mod simulation;
mod ticket;

pub use driver::{Animated, Driver};
pub use phase::{Phase, PhaseChange, PhaseHistory};
pub use scene::{
    node_style, ColorToken, NodeStyle, ResolvedTransition, Scene, StyledNode, ZoneBanner,
};
pub use simulation::Simulation;
pub use ticket::{Scheduled, Ticket, TicketBook};
