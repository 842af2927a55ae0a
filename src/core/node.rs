//! Simulated repository entities.

use super::position::Position;
use super::zone::Zone;
use super::Vocabulary;
use serde::{Deserialize, Serialize};

/// Stable node identifier. Never reused once issued.
pub type NodeId = String;

crate::vocabulary! {
    /// What a node represents.
    pub enum NodeKind {
        File => "file",
        Directory => "directory",
        Commit => "commit",
        Branch => "branch",
        Remote => "remote",
    }
}

crate::vocabulary! {
    /// State of a file-kind node.
    pub enum FileStatus {
        Modified => "modified",
        Untracked => "untracked",
        Staged => "staged",
        Committed => "committed",
    }
}

/// A simulated repository entity placed in a zone.
///
/// `links` holds object ids (see [`object_id`]): the parents of a commit, or
/// the tip named by a branch or remote ref. `head` marks the checked-out local
/// branch.
///
/// # Example
///
/// ```rust
/// use gitfit::core::{FileStatus, Node, Position, Zone};
///
/// let file = Node::file(
///     "file1",
///     "index.html",
///     Zone::Working,
///     FileStatus::Modified,
///     Position::new(100.0, 100.0),
/// );
/// assert_eq!(file.object_id(), "file1");
/// assert!(file.is_file_in(Zone::Working));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    pub zone: Zone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub head: bool,
    pub position: Position,
}

impl Node {
    fn bare(
        id: impl Into<NodeId>,
        kind: NodeKind,
        label: impl Into<String>,
        zone: Zone,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            zone,
            status: None,
            links: Vec::new(),
            head: false,
            position,
        }
    }

    pub fn file(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        zone: Zone,
        status: FileStatus,
        position: Position,
    ) -> Self {
        Self {
            status: Some(status),
            ..Self::bare(id, NodeKind::File, label, zone, position)
        }
    }

    pub fn directory(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        zone: Zone,
        position: Position,
    ) -> Self {
        Self::bare(id, NodeKind::Directory, label, zone, position)
    }

    pub fn commit(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        zone: Zone,
        parents: Vec<String>,
        position: Position,
    ) -> Self {
        Self {
            links: parents,
            ..Self::bare(id, NodeKind::Commit, label, zone, position)
        }
    }

    /// A local branch pointing at `tip` (an object id), if any.
    pub fn branch(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        tip: Option<String>,
        position: Position,
    ) -> Self {
        Self {
            links: tip.into_iter().collect(),
            ..Self::bare(id, NodeKind::Branch, label, Zone::Local, position)
        }
    }

    /// A remote-tracking ref living in the remote zone.
    pub fn remote_ref(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        tip: Option<String>,
        position: Position,
    ) -> Self {
        Self {
            links: tip.into_iter().collect(),
            ..Self::bare(id, NodeKind::Remote, label, Zone::Remote, position)
        }
    }

    /// Mark this node as the checked-out branch.
    pub fn checked_out(mut self) -> Self {
        self.head = true;
        self
    }

    /// Identity of this node's content across zones.
    pub fn object_id(&self) -> &str {
        object_id(&self.id)
    }

    /// First link: a branch's tip or a commit's first parent.
    pub fn tip(&self) -> Option<&str> {
        self.links.first().map(String::as_str)
    }

    pub fn is_file_in(&self, zone: Zone) -> bool {
        self.kind == NodeKind::File && self.zone == zone
    }

    pub fn is_commit_in(&self, zone: Zone) -> bool {
        self.kind == NodeKind::Commit && self.zone == zone
    }
}

/// Strip one zone prefix (`staged-`, `remote-`, ...) from a node id.
///
/// ```rust
/// use gitfit::core::object_id;
///
/// assert_eq!(object_id("staged-file1"), "file1");
/// assert_eq!(object_id("remote-commit-3"), "commit-3");
/// assert_eq!(object_id("commit-main"), "commit-main");
/// ```
pub fn object_id(id: &str) -> &str {
    Zone::ALL
        .iter()
        .find_map(|zone| {
            id.strip_prefix(zone.id_prefix())
                .and_then(|rest| rest.strip_prefix('-'))
        })
        .unwrap_or(id)
}

/// Id of the copy of `source_id`'s content placed in `zone`.
pub fn derived_id(zone: Zone, source_id: &str) -> NodeId {
    format!("{}-{}", zone.id_prefix(), object_id(source_id))
}

/// The hard-coded starting graph of the simulation.
///
/// Three files in the working directory (one modified, one untracked, one
/// clean), the `.git` directory, an initial commit with `main` checked out,
/// and a remote that already holds one commit made by a teammate.
pub fn initial_nodes() -> Vec<Node> {
    vec![
        Node::file(
            "file1",
            "index.html",
            Zone::Working,
            FileStatus::Modified,
            Position::new(100.0, 100.0),
        ),
        Node::file(
            "file2",
            "style.css",
            Zone::Working,
            FileStatus::Untracked,
            Position::new(100.0, 150.0),
        ),
        Node::file(
            "file3",
            "app.js",
            Zone::Working,
            FileStatus::Committed,
            Position::new(100.0, 200.0),
        ),
        Node::directory("git-dir", ".git", Zone::Local, Position::new(350.0, 50.0)),
        Node::commit(
            "commit-main",
            "Initial commit",
            Zone::Local,
            Vec::new(),
            Position::new(350.0, 150.0),
        ),
        Node::branch(
            "branch-main",
            "main",
            Some("commit-main".to_string()),
            Position::new(350.0, 200.0),
        )
        .checked_out(),
        Node::commit(
            "remote-commit-main",
            "Initial commit",
            Zone::Remote,
            Vec::new(),
            Position::new(550.0, 150.0),
        ),
        Node::commit(
            "remote-upstream-1",
            "Fix typo in README",
            Zone::Remote,
            vec!["commit-main".to_string()],
            Position::new(550.0, 250.0),
        ),
        Node::remote_ref(
            "remote-origin",
            "origin/main",
            Some("upstream-1".to_string()),
            Position::new(600.0, 250.0),
        ),
    ]
}
