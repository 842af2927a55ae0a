//! Node and position model of the simulated repository.
//!
//! This module contains the pure vocabulary every other module speaks:
//! - Zones and their fixed layout columns
//! - Nodes, node kinds and file states
//! - Transitions between nodes
//! - The `Vocabulary` trait for closed, string-named enums
//!
//! Nothing here performs I/O or keeps hidden state.

mod macros;
mod node;
mod position;
mod transition;
mod vocabulary;
mod zone;
mod zoom;

pub use node::{derived_id, initial_nodes, object_id, FileStatus, Node, NodeId, NodeKind};
pub use position::Position;
pub use transition::Transition;
pub use vocabulary::Vocabulary;
pub use zone::{
    Zone, COMMIT_ROW_SPACING, FIRST_COMMIT_ROW, LANE_SPACING, REMOTE_COMMIT_COLUMN, ROW_SPACING,
    TRACKING_COLUMN, ZONE_SEPARATORS,
};
pub use zoom::Zoom;
