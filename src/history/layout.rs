//! Lane and row placement for a commit history.
//!
//! Each branch gets a lane in the order its first commit appears; each commit
//! gets a row in list order. Connectors run from every known parent to its
//! child, straight within a lane and as a cubic curve across lanes.

use super::commit::Commit;
use crate::core::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;
use tracing::debug;

/// Spacing of the history canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Distance of the first lane and the first row from the origin.
    pub base_offset: f64,
    pub lane_width: f64,
    pub row_height: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            base_offset: 50.0,
            lane_width: 100.0,
            row_height: 80.0,
        }
    }
}

impl LayoutParams {
    pub fn lane_x(&self, lane: usize) -> f64 {
        self.base_offset + lane as f64 * self.lane_width
    }

    pub fn row_y(&self, row: usize) -> f64 {
        self.base_offset + row as f64 * self.row_height
    }
}

/// A vertical branch track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub branch: String,
    pub index: usize,
    pub x: f64,
}

impl Lane {
    /// The main lane is drawn solid, every other lane dashed.
    pub fn is_primary(&self) -> bool {
        self.branch == "main"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ConnectorShape {
    Straight,
    /// Cubic Bézier with both control points on the vertical midpoint.
    Curve { c1: Position, c2: Position },
}

/// Edge from a parent commit to its child.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub parent: String,
    pub child: String,
    pub from: Position,
    pub to: Position,
    pub shape: ConnectorShape,
}

impl Connector {
    fn between(parent: &str, child: &str, from: Position, to: Position) -> Self {
        let shape = if from.x == to.x {
            ConnectorShape::Straight
        } else {
            let mid = (from.y + to.y) / 2.0;
            ConnectorShape::Curve {
                c1: Position::new(from.x, mid),
                c2: Position::new(to.x, mid),
            }
        };
        Self {
            parent: parent.to_string(),
            child: child.to_string(),
            from,
            to,
            shape,
        }
    }

    pub fn is_curved(&self) -> bool {
        matches!(self.shape, ConnectorShape::Curve { .. })
    }

    /// SVG path data for this connector.
    pub fn svg_path(&self) -> String {
        let mut d = format!("M{},{}", self.from.x, self.from.y);
        // Writing into a String cannot fail.
        let _ = match self.shape {
            ConnectorShape::Straight => write!(d, " L{},{}", self.to.x, self.to.y),
            ConnectorShape::Curve { c1, c2 } => write!(
                d,
                " C{},{} {},{} {},{}",
                c1.x, c1.y, c2.x, c2.y, self.to.x, self.to.y
            ),
        };
        d
    }
}

/// Placement of every commit, lane and connector.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub lanes: Vec<Lane>,
    pub positions: HashMap<String, Position>,
    pub connectors: Vec<Connector>,
}

impl Layout {
    /// Lay out `commits` in list order.
    ///
    /// If two commits share an id the later one's position wins. Parents that
    /// are not in the list are skipped.
    pub fn compute(commits: &[Commit], params: &LayoutParams) -> Self {
        let mut lanes: Vec<Lane> = Vec::new();
        for commit in commits {
            if !lanes.iter().any(|lane| lane.branch == commit.branch) {
                let index = lanes.len();
                lanes.push(Lane {
                    branch: commit.branch.clone(),
                    index,
                    x: params.lane_x(index),
                });
            }
        }

        let mut positions = HashMap::with_capacity(commits.len());
        for (row, commit) in commits.iter().enumerate() {
            let x = lanes
                .iter()
                .find(|lane| lane.branch == commit.branch)
                .map_or(params.lane_x(0), |lane| lane.x);
            positions.insert(commit.id.clone(), Position::new(x, params.row_y(row)));
        }

        let mut connectors = Vec::new();
        for commit in commits {
            let Some(&to) = positions.get(&commit.id) else {
                continue;
            };
            for parent in &commit.parent_ids {
                match positions.get(parent) {
                    Some(&from) => {
                        connectors.push(Connector::between(parent, &commit.id, from, to))
                    }
                    None => debug!(commit = %commit.id, %parent, "parent not in history, skipped"),
                }
            }
        }

        Self {
            lanes,
            positions,
            connectors,
        }
    }

    pub fn position(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    pub fn lane(&self, branch: &str) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.branch == branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{default_commits, CommitType};

    fn commit(id: &str, branch: &str, parents: &[&str]) -> Commit {
        Commit {
            id: id.into(),
            hash: format!("h{id}"),
            message: format!("commit {id}"),
            author: "a".into(),
            date: "2024-01-01 00:00".into(),
            kind: CommitType::Commit,
            branch: branch.into(),
            tags: Vec::new(),
            parent_ids: parents.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn lanes_follow_first_appearance() {
        let layout = Layout::compute(&default_commits(), &LayoutParams::default());
        let names: Vec<_> = layout.lanes.iter().map(|l| l.branch.as_str()).collect();
        assert_eq!(names, vec!["main", "feature"]);
        assert_eq!(layout.position("1"), Some(Position::new(50.0, 50.0)));
        assert_eq!(layout.position("3"), Some(Position::new(150.0, 210.0)));
        assert_eq!(layout.position("7"), Some(Position::new(50.0, 530.0)));
    }

    #[test]
    fn merge_gets_one_connector_per_parent() {
        let layout = Layout::compute(&default_commits(), &LayoutParams::default());
        let into_merge: Vec<_> = layout.connectors.iter().filter(|c| c.child == "6").collect();
        assert_eq!(into_merge.len(), 2);
        assert!(!into_merge[0].is_curved());
        assert_eq!(
            into_merge[1].shape,
            ConnectorShape::Curve {
                c1: Position::new(150.0, 370.0),
                c2: Position::new(50.0, 370.0),
            }
        );
    }

    #[test]
    fn merge_from_two_other_lanes_curves_both_connectors() {
        let commits = vec![
            commit("x", "left", &[]),
            commit("y", "right", &[]),
            commit("m", "main", &["x", "y"]),
        ];
        let layout = Layout::compute(&commits, &LayoutParams::default());
        let into_merge: Vec<_> = layout.connectors.iter().filter(|c| c.child == "m").collect();

        assert_eq!(into_merge.len(), 2);
        assert!(into_merge.iter().all(|c| c.is_curved()));
        assert_eq!(
            into_merge[0].shape,
            ConnectorShape::Curve {
                c1: Position::new(50.0, 130.0),
                c2: Position::new(250.0, 130.0),
            }
        );
        assert_eq!(into_merge[1].svg_path(), "M150,130 C150,170 250,170 250,210");
    }

    #[test]
    fn unknown_parents_are_skipped() {
        let commits = vec![commit("a", "main", &["ghost"]), commit("b", "main", &["a"])];
        let layout = Layout::compute(&commits, &LayoutParams::default());
        assert_eq!(layout.connectors.len(), 1);
        assert_eq!(layout.connectors[0].parent, "a");
    }

    #[test]
    fn duplicate_ids_keep_the_last_position() {
        let commits = vec![commit("a", "main", &[]), commit("a", "side", &[])];
        let layout = Layout::compute(&commits, &LayoutParams::default());
        assert_eq!(layout.position("a"), Some(Position::new(150.0, 130.0)));
    }

    #[test]
    fn custom_params_scale_the_grid() {
        let params = LayoutParams {
            base_offset: 10.0,
            lane_width: 20.0,
            row_height: 30.0,
        };
        let commits = vec![commit("a", "main", &[]), commit("b", "dev", &["a"])];
        let layout = Layout::compute(&commits, &params);
        assert_eq!(layout.position("b"), Some(Position::new(30.0, 40.0)));
    }

    #[test]
    fn svg_paths() {
        let straight =
            Connector::between("p", "c", Position::new(50.0, 50.0), Position::new(50.0, 130.0));
        assert_eq!(straight.svg_path(), "M50,50 L50,130");

        let curve =
            Connector::between("p", "c", Position::new(50.0, 50.0), Position::new(150.0, 130.0));
        assert_eq!(curve.svg_path(), "M50,50 C50,90 150,90 150,130");
    }

    #[test]
    fn empty_history_has_empty_layout() {
        assert_eq!(Layout::compute(&[], &LayoutParams::default()), Layout::default());
    }
}
