//! Render contract: an owned snapshot of everything one frame needs.

use super::phase::Phase;
use super::simulation::Simulation;
use crate::core::{
    FileStatus, Node, NodeId, NodeKind, Position, Vocabulary, Zone, Zoom, ZONE_SEPARATORS,
};
use crate::registry::{ActionKind, ActionSummary, Icon};
use serde::{Deserialize, Serialize};

crate::vocabulary! {
    /// Theme color slot a node is painted with.
    pub enum ColorToken {
        Warning => "warning",
        Danger => "danger",
        Success => "success",
        Foreground => "foreground",
        Muted => "muted",
        Primary => "primary",
        Secondary => "secondary",
        Info => "info",
    }
}

/// How a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub icon: Icon,
    pub color: ColorToken,
}

/// Style lookup by node kind and file status.
pub fn node_style(node: &Node) -> NodeStyle {
    let (icon, color) = match node.kind {
        NodeKind::File => (
            Icon::FileCode,
            match node.status {
                Some(FileStatus::Modified) => ColorToken::Warning,
                Some(FileStatus::Untracked) => ColorToken::Danger,
                Some(FileStatus::Staged) => ColorToken::Success,
                Some(FileStatus::Committed) | None => ColorToken::Foreground,
            },
        ),
        NodeKind::Directory => (Icon::Folder, ColorToken::Muted),
        NodeKind::Commit => (Icon::GitCommit, ColorToken::Primary),
        NodeKind::Branch => (Icon::GitBranch, ColorToken::Secondary),
        NodeKind::Remote => (Icon::GitPullRequest, ColorToken::Info),
    };
    NodeStyle { icon, color }
}

/// A node together with its style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledNode {
    #[serde(flatten)]
    pub node: Node,
    pub style: NodeStyle,
}

/// Header drawn above a zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneBanner {
    pub zone: Zone,
    pub title: String,
    pub description: String,
    pub position: Position,
}

impl ZoneBanner {
    fn of(zone: Zone) -> Self {
        Self {
            zone,
            title: zone.title().to_string(),
            description: zone.description().to_string(),
            position: zone.banner_position(),
        }
    }
}

/// A transition with its endpoints resolved to concrete points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTransition {
    pub from: NodeId,
    pub to: NodeId,
    /// At least two points.
    pub points: Vec<Position>,
}

impl ResolvedTransition {
    /// Total length of the polyline.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Point at fraction `t` of the way along the path, by arc length.
    /// `t` is clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Position {
        let Some(&first) = self.points.first() else {
            return Position::default();
        };
        let total = self.length();
        if total == 0.0 {
            return first;
        }

        let mut remaining = t.clamp(0.0, 1.0) * total;
        for pair in self.points.windows(2) {
            let segment = pair[0].distance(pair[1]);
            if remaining <= segment && segment > 0.0 {
                return pair[0].lerp(pair[1], remaining / segment);
            }
            remaining -= segment;
        }
        self.points.last().copied().unwrap_or(first)
    }
}

/// Everything the render layer reads for one frame.
///
/// While animating, `nodes` is still the committed graph; transitions are
/// resolved against the pending graph so that nodes the transform creates
/// have a destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<StyledNode>,
    pub transitions: Vec<ResolvedTransition>,
    pub phase: Phase,
    pub animating: bool,
    pub actions: Vec<ActionSummary>,
    pub selected: Option<ActionKind>,
    /// Empty when area labels are hidden.
    pub banners: Vec<ZoneBanner>,
    pub separators: Vec<f64>,
    pub zoom: Zoom,
    pub summary: Option<String>,
}

impl Scene {
    pub(crate) fn capture(sim: &Simulation) -> Self {
        let targets = sim.pending_nodes().unwrap_or(sim.nodes());
        let transitions = sim
            .transitions()
            .iter()
            .filter_map(|t| {
                Some(ResolvedTransition {
                    from: t.from.clone(),
                    to: t.to.clone(),
                    points: t.resolve(targets)?,
                })
            })
            .collect();

        let banners = if sim.show_area_labels() {
            Zone::ALL.iter().copied().map(ZoneBanner::of).collect()
        } else {
            Vec::new()
        };

        Self {
            nodes: sim
                .nodes()
                .iter()
                .map(|node| StyledNode {
                    node: node.clone(),
                    style: node_style(node),
                })
                .collect(),
            transitions,
            phase: sim.phase(),
            animating: sim.is_animating(),
            actions: sim.registry().summaries(),
            selected: sim.selected().map(|a| a.kind),
            banners,
            separators: ZONE_SEPARATORS.to_vec(),
            zoom: sim.zoom(),
            summary: sim.last_summary().map(str::to_string),
        }
    }

    pub fn node(&self, id: &str) -> Option<&StyledNode> {
        self.nodes.iter().find(|n| n.node.id == id)
    }
}
