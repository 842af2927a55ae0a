//! Read-only queries over a node list shared by the transforms.

use crate::core::{Node, NodeKind, Zone, COMMIT_ROW_SPACING, FIRST_COMMIT_ROW};
use std::collections::{HashSet, VecDeque};

/// The checked-out local branch.
pub(crate) fn head(nodes: &[Node]) -> Option<&Node> {
    nodes
        .iter()
        .find(|n| n.kind == NodeKind::Branch && n.zone == Zone::Local && n.head)
}

/// Local branches in node order.
pub(crate) fn local_branches(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Branch && n.zone == Zone::Local)
}

/// Remote-tracking refs in node order.
pub(crate) fn remote_refs(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    nodes.iter().filter(|n| n.kind == NodeKind::Remote)
}

/// Name of the remote ref tracking local branch `branch`.
pub(crate) fn upstream_label(branch: &str) -> String {
    format!("origin/{branch}")
}

/// The copy of commit `object` held in `zone`.
pub(crate) fn commit_in<'a>(nodes: &'a [Node], zone: Zone, object: &str) -> Option<&'a Node> {
    nodes
        .iter()
        .find(|n| n.is_commit_in(zone) && n.object_id() == object)
}

/// Object ids reachable from `tip` through parent links in `zone`,
/// breadth first, `tip` included.
///
/// Parents without a copy in `zone` end the walk along that edge.
pub(crate) fn ancestry(nodes: &[Node], zone: Zone, tip: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([tip.to_string()]);
    let mut order = Vec::new();

    while let Some(object) = queue.pop_front() {
        let Some(commit) = commit_in(nodes, zone, &object) else {
            continue;
        };
        if !seen.insert(object.clone()) {
            continue;
        }
        queue.extend(commit.links.iter().cloned());
        order.push(object);
    }

    order
}

/// Whether `ancestor` is reachable from `descendant` in `zone`.
/// A commit counts as its own ancestor.
pub(crate) fn is_ancestor(nodes: &[Node], zone: Zone, ancestor: &str, descendant: &str) -> bool {
    ancestry(nodes, zone, descendant)
        .iter()
        .any(|object| object == ancestor)
}

/// Next free serial for object ids shaped `<prefix>-<digits>`, across all zones.
pub(crate) fn next_serial(nodes: &[Node], prefix: &str) -> u32 {
    nodes
        .iter()
        .filter_map(|n| {
            n.object_id()
                .strip_prefix(prefix)?
                .strip_prefix('-')?
                .parse::<u32>()
                .ok()
        })
        .max()
        .map_or(1, |serial| serial + 1)
}

/// Row below the lowest commit in `zone`.
pub(crate) fn next_commit_row(nodes: &[Node], zone: Zone) -> f64 {
    nodes
        .iter()
        .filter(|n| n.is_commit_in(zone))
        .map(|n| n.position.y)
        .reduce(f64::max)
        .map_or(FIRST_COMMIT_ROW, |lowest| lowest + COMMIT_ROW_SPACING)
}
