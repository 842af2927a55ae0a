//! Well-formedness violations of a node graph.

use crate::core::{NodeId, Zone};
use thiserror::Error;

/// A single way in which a node list or transform output is malformed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("Node id `{id}` appears more than once")]
    DuplicateId { id: NodeId },

    #[error("Node `{id}` is not a file but carries a status")]
    StatusOnNonFile { id: NodeId },

    #[error("File `{id}` has no status")]
    MissingStatus { id: NodeId },

    #[error("Node `{id}` links to `{link}`, which is not a commit in its zone")]
    UnknownLink { id: NodeId, link: String },

    #[error("Node `{id}` is marked as head but is not a local branch")]
    StrayHead { id: NodeId },

    #[error("{count} branches are marked as head")]
    MultipleHeads { count: usize },

    #[error("Node `{id}` has a non-finite position")]
    NonFinitePosition { id: NodeId },

    #[error("Node `{id}` was dropped by the transform")]
    DroppedNode { id: NodeId },

    #[error("Transition `{from}` -> `{to}` references a missing node")]
    DanglingTransition { from: NodeId, to: NodeId },

    #[error("Transition `{from}` -> `{to}` touches zone `{zone}`, which the action does not declare")]
    UndeclaredZone { from: NodeId, to: NodeId, zone: Zone },
}
