//! Animated movements between nodes.

use super::node::{Node, NodeId};
use super::position::Position;
use serde::{Deserialize, Serialize};

/// One animated movement for a single render cycle.
///
/// When `path` is absent the movement follows the straight segment between
/// the two nodes' positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Position>>,
}

impl Transition {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            path: None,
        }
    }

    /// A transition following an explicit list of points.
    pub fn along(from: impl Into<NodeId>, to: impl Into<NodeId>, path: Vec<Position>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            path: Some(path),
        }
    }

    /// Points to animate through, resolved against `nodes`.
    ///
    /// Returns `None` when either endpoint is missing from `nodes`.
    pub fn resolve(&self, nodes: &[Node]) -> Option<Vec<Position>> {
        let from = nodes.iter().find(|n| n.id == self.from)?;
        let to = nodes.iter().find(|n| n.id == self.to)?;
        match &self.path {
            Some(path) if path.len() >= 2 => Some(path.clone()),
            _ => Some(vec![from.position, to.position]),
        }
    }
}
