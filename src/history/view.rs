//! Interactive state over a laid-out history: expansion, details, zoom.

use super::commit::{default_commits, Commit};
use super::layout::{Layout, LayoutParams};
use crate::core::{Position, Zoom};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Size of a commit's label box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub const COLLAPSED: Self = Self {
        width: 200.0,
        height: 40.0,
    };
    pub const EXPANDED: Self = Self {
        width: 300.0,
        height: 120.0,
    };
}

/// Fields shown in an expanded commit's panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommitDetail {
    pub hash: String,
    pub author: String,
    pub date: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub branch: String,
    pub primary: bool,
}

/// Interactive state over a laid-out commit history.
#[derive(Clone, Debug)]
pub struct HistoryView {
    commits: Vec<Commit>,
    layout: Layout,
    expanded: HashSet<String>,
    zoom: Zoom,
}

impl HistoryView {
    pub fn new(commits: Vec<Commit>, params: &LayoutParams) -> Self {
        let layout = Layout::compute(&commits, params);
        Self {
            commits,
            layout,
            expanded: HashSet::new(),
            zoom: Zoom::default(),
        }
    }

    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn commit(&self, id: &str) -> Option<&Commit> {
        self.commits.iter().rev().find(|c| c.id == id)
    }

    /// Expand or collapse `id`, returning whether it is now expanded.
    /// Unknown ids are left alone.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.commit(id).is_none() {
            return false;
        }
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Detail panel contents, only for expanded commits.
    pub fn detail(&self, id: &str) -> Option<CommitDetail> {
        if !self.is_expanded(id) {
            return None;
        }
        self.commit(id).map(|c| CommitDetail {
            hash: c.hash.clone(),
            author: c.author.clone(),
            date: c.date.clone(),
            message: c.message.clone(),
        })
    }

    pub fn footprint(&self, id: &str) -> Footprint {
        if self.is_expanded(id) {
            Footprint::EXPANDED
        } else {
            Footprint::COLLAPSED
        }
    }

    /// Top-left corner of the label box, beside the commit's dot.
    pub fn label_origin(&self, id: &str) -> Option<Position> {
        self.layout.position(id).map(|p| p.offset(30.0, -20.0))
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.layout
            .lanes
            .iter()
            .map(|lane| LegendEntry {
                branch: lane.branch.clone(),
                primary: lane.is_primary(),
            })
            .collect()
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn zoom_in(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_in();
        self.zoom
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_out();
        self.zoom
    }
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::new(default_commits(), &LayoutParams::default())
    }
}
