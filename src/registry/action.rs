//! Catalog entries for simulated commands.

use crate::core::{Node, Transition, Vocabulary, Zone};
use serde::{Deserialize, Serialize};
use std::fmt;

crate::vocabulary! {
    /// The closed set of simulated commands.
    pub enum ActionKind {
        Add => "add",
        Commit => "commit",
        Branch => "branch",
        Checkout => "checkout",
        Merge => "merge",
        Push => "push",
        Pull => "pull",
        Clone => "clone",
        Fetch => "fetch",
        Reset => "reset",
        Revert => "revert",
    }
}

crate::vocabulary! {
    /// Rendering descriptor for actions and nodes, resolved by lookup rather
    /// than by inspecting types at draw time.
    pub enum Icon {
        GitCommit => "git-commit",
        GitBranch => "git-branch",
        GitMerge => "git-merge",
        GitPullRequest => "git-pull-request",
        Hash => "hash",
        ArrowRightLeft => "arrow-right-left",
        Upload => "upload",
        Download => "download",
        Copy => "copy",
        RefreshCw => "refresh-cw",
        RotateCcw => "rotate-ccw",
        Undo => "undo",
        FileCode => "file-code",
        Folder => "folder",
    }
}

/// Result of applying a transform to a node list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformOutput {
    pub nodes: Vec<Node>,
    pub transitions: Vec<Transition>,
    /// Console line describing the outcome, the way git would print it.
    pub summary: String,
}

impl TransformOutput {
    pub fn new(nodes: Vec<Node>, transitions: Vec<Transition>, summary: impl Into<String>) -> Self {
        Self {
            nodes,
            transitions,
            summary: summary.into(),
        }
    }

    /// The input untouched, with no transitions.
    pub fn unchanged(nodes: &[Node], summary: impl Into<String>) -> Self {
        Self::new(nodes.to_vec(), Vec::new(), summary)
    }

    pub fn is_unchanged(&self, input: &[Node]) -> bool {
        self.transitions.is_empty() && self.nodes == input
    }
}

/// A pure graph transform.
pub type TransformFn = fn(&[Node]) -> TransformOutput;

/// One simulated command: how it is shown and what it does to the graph.
#[derive(Clone)]
pub struct Action {
    pub kind: ActionKind,
    pub command: String,
    pub description: String,
    pub zones: Vec<Zone>,
    pub icon: Icon,
    pub(crate) transform: TransformFn,
}

impl Action {
    /// Run the transform on `nodes`.
    pub fn apply(&self, nodes: &[Node]) -> TransformOutput {
        (self.transform)(nodes)
    }

    pub fn involves(&self, zone: Zone) -> bool {
        self.zones.contains(&zone)
    }

    /// Display-only view of the action.
    pub fn summary(&self) -> ActionSummary {
        ActionSummary {
            kind: self.kind,
            command: self.command.clone(),
            description: self.description.clone(),
            zones: self.zones.clone(),
            icon: self.icon,
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("kind", &self.kind.name())
            .field("command", &self.command)
            .field("zones", &self.zones)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Serializable description of an action, without its transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub kind: ActionKind,
    pub command: String,
    pub description: String,
    pub zones: Vec<Zone>,
    pub icon: Icon,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initial_nodes;

    fn identity(nodes: &[Node]) -> TransformOutput {
        TransformOutput::unchanged(nodes, "noop")
    }

    fn sample() -> Action {
        Action {
            kind: ActionKind::Fetch,
            command: "git fetch".into(),
            description: "Download".into(),
            zones: vec![Zone::Remote, Zone::Local],
            icon: Icon::RefreshCw,
            transform: identity,
        }
    }

    #[test]
    fn apply_runs_the_transform() {
        let output = sample().apply(&initial_nodes());
        assert!(output.is_unchanged(&initial_nodes()));
        assert_eq!(output.summary, "noop");
    }

    #[test]
    fn involves_checks_declared_zones() {
        let action = sample();
        assert!(action.involves(Zone::Remote));
        assert!(!action.involves(Zone::Staging));
    }

    #[test]
    fn debug_omits_the_transform() {
        let rendered = format!("{:?}", sample());
        assert!(rendered.contains("git fetch"));
        assert!(rendered.contains(".."));
    }

    #[test]
    fn summary_serializes_names() {
        let json = serde_json::to_value(sample().summary()).unwrap();
        assert_eq!(json["kind"], "fetch");
        assert_eq!(json["icon"], "refresh-cw");
        assert_eq!(json["zones"], serde_json::json!(["remote", "local"]));
    }
}
