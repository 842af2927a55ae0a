//! Action registry: the ordered catalog of simulated commands.
//!
//! Each [`Action`] declares the zones it touches, an icon and a pure
//! transform over the node list. [`Registry::standard`] is the built-in
//! catalog; [`RegistryBuilder`] assembles custom ones.
//!
//! # Example
//!
//! ```rust
//! use gitfit::core::initial_nodes;
//! use gitfit::registry::{ActionKind, Registry};
//!
//! let registry = Registry::standard();
//! let add = registry.get(ActionKind::Add).unwrap();
//! let output = add.apply(&initial_nodes());
//!
//! assert_eq!(output.transitions.len(), 2);
//! assert!(output.nodes.iter().any(|n| n.id == "staged-file1"));
//! ```

mod action;
mod builder;
mod error;
mod graph;
pub mod transforms;

pub use action::{Action, ActionKind, ActionSummary, Icon, TransformFn, TransformOutput};
pub use builder::{ActionBuilder, RegistryBuilder};
pub use error::BuildError;
pub use transforms::MergeScope;

use crate::core::Zone;

/// Ordered, read-only catalog of actions.
#[derive(Clone, Debug)]
pub struct Registry {
    actions: Vec<Action>,
}

impl Registry {
    pub(crate) fn from_actions(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// The built-in catalog, in display order.
    pub fn standard() -> Self {
        use Zone::{Local, Remote, Staging, Working};

        Self::from_actions(vec![
            entry(
                ActionKind::Add,
                "git add",
                "Move files from working directory to staging area",
                &[Working, Staging],
                Icon::GitCommit,
                transforms::add,
            ),
            entry(
                ActionKind::Commit,
                "git commit",
                "Record the staged snapshot as a new commit on the current branch",
                &[Staging, Local],
                Icon::Hash,
                transforms::commit,
            ),
            entry(
                ActionKind::Branch,
                "git branch",
                "Create a new branch pointing at the current commit",
                &[Local],
                Icon::GitBranch,
                transforms::branch,
            ),
            entry(
                ActionKind::Checkout,
                "git checkout",
                "Switch to another branch and update the working directory",
                &[Local, Working],
                Icon::ArrowRightLeft,
                transforms::checkout,
            ),
            entry(
                ActionKind::Merge,
                "git merge",
                "Join another line of history into the current branch",
                &[Local],
                Icon::GitMerge,
                transforms::merge,
            ),
            entry(
                ActionKind::Push,
                "git push",
                "Upload local commits to the remote repository",
                &[Local, Remote],
                Icon::Upload,
                transforms::push,
            ),
            entry(
                ActionKind::Pull,
                "git pull",
                "Fetch remote commits and merge them into the current branch",
                &[Remote, Local],
                Icon::Download,
                transforms::pull,
            ),
            entry(
                ActionKind::Clone,
                "git clone",
                "Copy the remote repository and check out its files",
                &[Remote, Local, Working],
                Icon::Copy,
                transforms::clone,
            ),
            entry(
                ActionKind::Fetch,
                "git fetch",
                "Download remote commits without merging them",
                &[Remote, Local],
                Icon::RefreshCw,
                transforms::fetch,
            ),
            entry(
                ActionKind::Reset,
                "git reset --soft HEAD~1",
                "Undo the last commit and keep its changes staged",
                &[Local, Staging],
                Icon::RotateCcw,
                transforms::reset,
            ),
            entry(
                ActionKind::Revert,
                "git revert HEAD",
                "Create a new commit that undoes the last one",
                &[Local, Working],
                Icon::Undo,
                transforms::revert,
            ),
        ])
    }

    pub fn get(&self, kind: ActionKind) -> Option<&Action> {
        self.actions.iter().find(|a| a.kind == kind)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Display-only descriptions of every action, in order.
    pub fn summaries(&self) -> Vec<ActionSummary> {
        self.actions.iter().map(Action::summary).collect()
    }
}

fn entry(
    kind: ActionKind,
    command: &str,
    description: &str,
    zones: &[Zone],
    icon: Icon,
    transform: TransformFn,
) -> Action {
    Action {
        kind,
        command: command.to_string(),
        description: description.to_string(),
        zones: zones.to_vec(),
        icon,
        transform,
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
