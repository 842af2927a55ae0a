//! Commits of a static history and the built-in sample.

use crate::engine::ColorToken;
use crate::registry::Icon;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::vocabulary! {
    pub enum CommitType {
        Commit => "commit",
        Merge => "merge",
        Branch => "branch",
        Tag => "tag",
    }
}

impl CommitType {
    pub fn icon(self) -> Icon {
        match self {
            Self::Commit => Icon::GitCommit,
            Self::Merge => Icon::GitMerge,
            Self::Branch => Icon::GitBranch,
            Self::Tag => Icon::GitPullRequest,
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            Self::Commit => ColorToken::Primary,
            Self::Merge => ColorToken::Secondary,
            Self::Branch => ColorToken::Success,
            Self::Tag => ColorToken::Warning,
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One entry of a static commit history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub id: String,
    pub hash: String,
    pub message: String,
    pub author: String,
    /// `YYYY-MM-DD HH:MM`.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: CommitType,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parent_ids: Vec<String>,
}

impl Commit {
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }

    /// Parsed `date`, or `None` if it is not in `YYYY-MM-DD HH:MM` form.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

#[allow(clippy::too_many_arguments)]
fn commit(
    id: &str,
    hash: &str,
    message: &str,
    author: &str,
    date: &str,
    kind: CommitType,
    branch: &str,
    parents: &[&str],
) -> Commit {
    Commit {
        id: id.into(),
        hash: hash.into(),
        message: message.into(),
        author: author.into(),
        date: date.into(),
        kind,
        branch: branch.into(),
        tags: Vec::new(),
        parent_ids: parents.iter().map(|p| p.to_string()).collect(),
    }
}

/// A short history with one feature branch merged back into main.
pub fn default_commits() -> Vec<Commit> {
    use CommitType as T;

    let mut release = commit(
        "7",
        "y1z2a3b",
        "Release v1.0.0",
        "John Doe",
        "2023-10-30 15:45",
        T::Commit,
        "main",
        &["6"],
    );
    release.tags.push("v1.0.0".into());

    vec![
        commit(
            "1",
            "a1b2c3d",
            "Initial commit",
            "John Doe",
            "2023-10-25 14:30",
            T::Commit,
            "main",
            &[],
        ),
        commit(
            "2",
            "e4f5g6h",
            "Add authentication feature",
            "Jane Smith",
            "2023-10-26 10:15",
            T::Commit,
            "main",
            &["1"],
        ),
        commit(
            "3",
            "i7j8k9l",
            "Create feature branch",
            "John Doe",
            "2023-10-26 11:45",
            T::Branch,
            "feature",
            &["2"],
        ),
        commit(
            "4",
            "m1n2o3p",
            "Implement profile page",
            "Jane Smith",
            "2023-10-27 09:30",
            T::Commit,
            "feature",
            &["3"],
        ),
        commit(
            "5",
            "q4r5s6t",
            "Fix header bug",
            "John Doe",
            "2023-10-27 14:20",
            T::Commit,
            "main",
            &["2"],
        ),
        commit(
            "6",
            "u7v8w9x",
            "Merge feature into main",
            "Jane Smith",
            "2023-10-28 11:00",
            T::Merge,
            "main",
            &["5", "4"],
        ),
        release,
    ]
}
