//! Validation-based well-formedness checks for node graphs.
//!
//! Checks accumulate ALL violations instead of stopping at the first one, so
//! a broken custom transform reports every problem in a single pass.
//!
//! # Example
//!
//! ```rust
//! use gitfit::core::initial_nodes;
//! use gitfit::validation::check_graph;
//! use stillwater::validation::Validation;
//!
//! match check_graph(&initial_nodes()) {
//!     Validation::Success(()) => {}
//!     Validation::Failure(violations) => panic!("unexpected: {violations:?}"),
//! }
//! ```

mod violations;

pub use violations::Violation;

use crate::core::{Node, NodeKind, Zone};
use crate::registry::{Action, TransformOutput};
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;

/// Outcome of a check: success, or every violation found.
pub type Checked = Validation<(), Vec<Violation>>;

fn collect(violations: Vec<Violation>) -> Checked {
    if violations.is_empty() {
        Validation::Success(())
    } else {
        Validation::Failure(violations)
    }
}

fn graph_violations(nodes: &[Node]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            violations.push(Violation::DuplicateId {
                id: node.id.clone(),
            });
        }
    }

    let commits: HashSet<(Zone, &str)> = nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Commit)
        .map(|n| (n.zone, n.object_id()))
        .collect();

    for node in nodes {
        match (node.kind, node.status) {
            (NodeKind::File, None) => violations.push(Violation::MissingStatus {
                id: node.id.clone(),
            }),
            (kind, Some(_)) if kind != NodeKind::File => {
                violations.push(Violation::StatusOnNonFile {
                    id: node.id.clone(),
                })
            }
            _ => {}
        }

        for link in &node.links {
            if !commits.contains(&(node.zone, link.as_str())) {
                violations.push(Violation::UnknownLink {
                    id: node.id.clone(),
                    link: link.clone(),
                });
            }
        }

        if node.head && !(node.kind == NodeKind::Branch && node.zone == Zone::Local) {
            violations.push(Violation::StrayHead {
                id: node.id.clone(),
            });
        }

        if !node.position.is_finite() {
            violations.push(Violation::NonFinitePosition {
                id: node.id.clone(),
            });
        }
    }

    let heads = nodes.iter().filter(|n| n.head).count();
    if heads > 1 {
        violations.push(Violation::MultipleHeads { count: heads });
    }

    violations
}

/// Check that a node list is well formed.
///
/// Ids are unique, only files carry (and always carry) a status, links
/// resolve to commits in the same zone, at most one local branch is head and
/// every position is finite.
pub fn check_graph(nodes: &[Node]) -> Checked {
    collect(graph_violations(nodes))
}

/// Check a transform's output against its input and the action that
/// produced it.
///
/// On top of [`check_graph`] on the output: no input node is dropped, every
/// transition endpoint exists in the output, and every endpoint lies in a
/// zone the action declares.
pub fn check_transform(action: &Action, input: &[Node], output: &TransformOutput) -> Checked {
    let mut violations = graph_violations(&output.nodes);

    let zones: HashMap<&str, Zone> = output
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.zone))
        .collect();

    for node in input {
        if !zones.contains_key(node.id.as_str()) {
            violations.push(Violation::DroppedNode {
                id: node.id.clone(),
            });
        }
    }

    for transition in &output.transitions {
        let endpoints = [transition.from.as_str(), transition.to.as_str()];
        let resolved: Vec<Zone> = endpoints
            .iter()
            .filter_map(|id| zones.get(id).copied())
            .collect();

        if resolved.len() < endpoints.len() {
            violations.push(Violation::DanglingTransition {
                from: transition.from.clone(),
                to: transition.to.clone(),
            });
            continue;
        }

        if let Some(zone) = resolved.into_iter().find(|zone| !action.involves(*zone)) {
            violations.push(Violation::UndeclaredZone {
                from: transition.from.clone(),
                to: transition.to.clone(),
                zone,
            });
        }
    }

    collect(violations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{initial_nodes, FileStatus, Position, Transition};
    use crate::registry::{ActionKind, Registry};

    fn failures(result: Checked) -> Vec<Violation> {
        match result {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(violations) => violations,
        }
    }

    #[test]
    fn initial_graph_is_valid() {
        assert!(failures(check_graph(&initial_nodes())).is_empty());
    }

    #[test]
    fn accumulates_all_violations() {
        let mut nodes = initial_nodes();
        nodes.push(Node::file(
            "file1",
            "dup.txt",
            Zone::Working,
            FileStatus::Modified,
            Position::new(f64::NAN, 0.0),
        ));
        nodes[3].status = Some(FileStatus::Staged);
        nodes[3].head = true;

        let violations = failures(check_graph(&nodes));
        assert!(violations.contains(&Violation::DuplicateId { id: "file1".into() }));
        assert!(violations.contains(&Violation::NonFinitePosition { id: "file1".into() }));
        assert!(violations.contains(&Violation::StatusOnNonFile { id: "git-dir".into() }));
        assert!(violations.contains(&Violation::StrayHead { id: "git-dir".into() }));
        assert!(violations.contains(&Violation::MultipleHeads { count: 2 }));
    }

    #[test]
    fn links_must_resolve_within_the_zone() {
        let mut nodes = initial_nodes();
        if let Some(main) = nodes.iter_mut().find(|n| n.id == "branch-main") {
            main.links = vec!["upstream-1".into()];
        }
        let violations = failures(check_graph(&nodes));
        assert_eq!(
            violations,
            vec![Violation::UnknownLink {
                id: "branch-main".into(),
                link: "upstream-1".into(),
            }]
        );
    }

    #[test]
    fn standard_transforms_pass_on_the_initial_graph() {
        let nodes = initial_nodes();
        for action in Registry::standard().iter() {
            let output = action.apply(&nodes);
            let violations = failures(check_transform(action, &nodes, &output));
            assert!(violations.is_empty(), "{}: {violations:?}", action.kind);
        }
    }

    #[test]
    fn detects_dropped_nodes_and_bad_transitions() {
        let registry = Registry::standard();
        let action = registry.get(ActionKind::Branch).unwrap();
        let input = initial_nodes();
        let output = TransformOutput::new(
            input[1..].to_vec(),
            vec![
                Transition::new("ghost", "branch-main"),
                Transition::new("file2", "branch-main"),
            ],
            "broken",
        );

        let violations = failures(check_transform(action, &input, &output));
        assert!(violations.contains(&Violation::DroppedNode { id: "file1".into() }));
        assert!(violations.contains(&Violation::DanglingTransition {
            from: "ghost".into(),
            to: "branch-main".into(),
        }));
        assert!(violations.contains(&Violation::UndeclaredZone {
            from: "file2".into(),
            to: "branch-main".into(),
            zone: Zone::Working,
        }));
    }
}
