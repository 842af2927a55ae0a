//! Pure graph transforms behind each simulated command.
//!
//! Every transform copies its input, only ever adds or relabels nodes, and
//! places new nodes from fixed zone columns so repeated runs line up.

use super::action::TransformOutput;
use super::graph::{
    ancestry, commit_in, head, is_ancestor, local_branches, next_commit_row, next_serial,
    remote_refs, upstream_label,
};
use crate::core::{
    derived_id, FileStatus, Node, NodeKind, Position, Transition, Zone, LANE_SPACING,
    REMOTE_COMMIT_COLUMN, ROW_SPACING, TRACKING_COLUMN,
};

/// Which branches a merge may pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeScope {
    /// Only the remote-tracking ref of the checked-out branch.
    UpstreamOnly,
    /// The upstream first, then every other local branch.
    Everything,
}

fn node_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    nodes.iter_mut().find(|n| n.id == id)
}

/// Point branch `branch_id` at `tip` and park it one row under `tip_row`.
fn move_branch(nodes: &mut [Node], branch_id: &str, tip: &str, tip_row: f64) {
    if let Some(branch) = node_mut(nodes, branch_id) {
        branch.links = vec![tip.to_string()];
        branch.position.y = tip_row + ROW_SPACING;
    }
}

fn working_files(nodes: &[Node]) -> impl Iterator<Item = &Node> {
    nodes.iter().filter(|n| n.is_file_in(Zone::Working))
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// `git add`: stage every modified or untracked working file.
pub fn add(nodes: &[Node]) -> TransformOutput {
    let mut out = nodes.to_vec();
    let mut transitions = Vec::new();
    let mut staged_labels = Vec::new();

    let dirty = nodes.iter().filter(|n| {
        n.is_file_in(Zone::Working)
            && matches!(n.status, Some(FileStatus::Modified | FileStatus::Untracked))
    });

    for file in dirty {
        let staged_id = derived_id(Zone::Staging, &file.id);
        let target = Position::new(Zone::Staging.column(), file.position.y);

        match node_mut(&mut out, &staged_id) {
            Some(existing) if existing.status == Some(FileStatus::Staged) => continue,
            Some(existing) => {
                existing.status = Some(FileStatus::Staged);
                existing.label = file.label.clone();
            }
            None => out.push(Node::file(
                staged_id.clone(),
                file.label.clone(),
                Zone::Staging,
                FileStatus::Staged,
                target,
            )),
        }

        transitions.push(Transition::along(
            file.id.clone(),
            staged_id,
            vec![file.position, target],
        ));
        staged_labels.push(file.label.as_str());
    }

    let summary = if staged_labels.is_empty() {
        "nothing added to commit".to_string()
    } else {
        format!("staged {}", staged_labels.join(", "))
    };

    TransformOutput::new(out, transitions, summary)
}

/// `git commit`: record every staged file as a new commit on the head branch.
pub fn commit(nodes: &[Node]) -> TransformOutput {
    let staged: Vec<&Node> = nodes
        .iter()
        .filter(|n| n.is_file_in(Zone::Staging) && n.status == Some(FileStatus::Staged))
        .collect();
    if staged.is_empty() {
        return TransformOutput::unchanged(nodes, "nothing to commit, working tree clean");
    }
    let Some(branch) = head(nodes) else {
        return TransformOutput::unchanged(nodes, "fatal: no branch checked out");
    };

    let serial = next_serial(nodes, "commit");
    let id = format!("commit-{serial}");
    let row = next_commit_row(nodes, Zone::Local);

    let mut out = nodes.to_vec();
    out.push(Node::commit(
        id.clone(),
        format!("Commit {serial}"),
        Zone::Local,
        branch.tip().map(str::to_string).into_iter().collect(),
        Position::new(branch.position.x, row),
    ));

    let mut transitions = Vec::with_capacity(staged.len());
    for file in &staged {
        if let Some(copy) = node_mut(&mut out, &file.id) {
            copy.status = Some(FileStatus::Committed);
        }
        let source = file.object_id().to_string();
        if let Some(original) = out
            .iter_mut()
            .find(|n| n.is_file_in(Zone::Working) && n.id == source)
        {
            original.status = Some(FileStatus::Committed);
        }
        transitions.push(Transition::new(file.id.clone(), id.clone()));
    }
    move_branch(&mut out, &branch.id, &id, row);

    let summary = format!(
        "[{} {}] Commit {}, {} changed",
        branch.label,
        id,
        serial,
        plural(staged.len(), "file")
    );
    TransformOutput::new(out, transitions, summary)
}

/// `git branch`: create a branch at the head tip without switching to it.
pub fn branch(nodes: &[Node]) -> TransformOutput {
    let Some((current, tip)) = head(nodes).and_then(|h| Some((h, h.tip()?))) else {
        return TransformOutput::unchanged(nodes, "fatal: not a valid object name: 'HEAD'");
    };

    let taken = |name: &str| {
        local_branches(nodes).any(|b| b.label == name)
            || nodes.iter().any(|n| n.id == format!("branch-{name}"))
    };
    let name = std::iter::once("feature".to_string())
        .chain((2u32..).map(|k| format!("feature-{k}")))
        .find(|candidate| !taken(candidate.as_str()))
        .unwrap_or_else(|| "feature".to_string());

    let lane = local_branches(nodes).count() as f64;
    let tip_node = commit_in(nodes, Zone::Local, tip);
    let row = tip_node.map_or(current.position.y - ROW_SPACING, |c| c.position.y);
    let id = format!("branch-{name}");

    let mut out = nodes.to_vec();
    out.push(Node::branch(
        id.clone(),
        name.clone(),
        Some(tip.to_string()),
        Position::new(Zone::Local.column() + LANE_SPACING * lane, row + ROW_SPACING),
    ));

    let transitions = tip_node
        .map(|c| vec![Transition::new(c.id.clone(), id)])
        .unwrap_or_default();
    TransformOutput::new(out, transitions, format!("Created branch '{name}' at {tip}"))
}

/// `git checkout`: switch to the next local branch, wrapping around.
pub fn checkout(nodes: &[Node]) -> TransformOutput {
    let branches: Vec<&Node> = local_branches(nodes).collect();
    let current = branches.iter().position(|b| b.head);
    if branches.len() < 2 {
        let name = current.map_or("HEAD", |i| branches[i].label.as_str());
        return TransformOutput::unchanged(nodes, format!("Already on '{name}'"));
    }

    let next = branches[current.map_or(0, |i| (i + 1) % branches.len())];
    let mut out = nodes.to_vec();
    for node in out.iter_mut() {
        if node.kind == NodeKind::Branch && node.zone == Zone::Local {
            node.head = node.id == next.id;
        }
    }

    let mut transitions = Vec::new();
    if let Some(i) = current {
        transitions.push(Transition::new(branches[i].id.clone(), next.id.clone()));
    }
    transitions.extend(
        working_files(nodes).map(|f| Transition::new(next.id.clone(), f.id.clone())),
    );

    TransformOutput::new(out, transitions, format!("Switched to branch '{}'", next.label))
}

/// `git merge`: join another line of history into the head branch.
pub fn merge(nodes: &[Node]) -> TransformOutput {
    merge_with(nodes, MergeScope::Everything)
}

/// Merge the first candidate not already contained in the head branch.
///
/// Candidates are the fetched upstream of the head branch followed, for
/// [`MergeScope::Everything`], by every other local branch. A head tip that is
/// an ancestor of the candidate is fast-forwarded; otherwise a merge commit
/// with two parents is created.
pub fn merge_with(nodes: &[Node], scope: MergeScope) -> TransformOutput {
    let Some((current, tip)) = head(nodes).and_then(|h| Some((h, h.tip()?))) else {
        return TransformOutput::unchanged(nodes, "fatal: no commits on the current branch");
    };

    let upstream_name = upstream_label(&current.label);
    let upstream = remote_refs(nodes)
        .filter(|r| r.label == upstream_name)
        .filter_map(|r| Some((r.label.as_str(), r.tip()?)))
        .filter(|(_, t)| commit_in(nodes, Zone::Local, t).is_some());
    let others = local_branches(nodes)
        .filter(|b| b.id != current.id && scope == MergeScope::Everything)
        .filter_map(|b| Some((b.label.as_str(), b.tip()?)));

    let Some((name, other)) = upstream
        .chain(others)
        .find(|(_, t)| !is_ancestor(nodes, Zone::Local, t, tip))
    else {
        return TransformOutput::unchanged(nodes, "Already up to date.");
    };
    let (Some(ours), Some(theirs)) = (
        commit_in(nodes, Zone::Local, tip),
        commit_in(nodes, Zone::Local, other),
    ) else {
        return TransformOutput::unchanged(nodes, "Already up to date.");
    };

    let mut out = nodes.to_vec();

    if is_ancestor(nodes, Zone::Local, tip, other) {
        move_branch(&mut out, &current.id, other, theirs.position.y);
        let transitions = vec![Transition::new(ours.id.clone(), theirs.id.clone())];
        let summary = format!("Updating {tip}..{other}, fast-forward {} to {name}", current.label);
        return TransformOutput::new(out, transitions, summary);
    }

    let serial = next_serial(nodes, "merge");
    let id = format!("merge-{serial}");
    let row = next_commit_row(nodes, Zone::Local);
    out.push(Node::commit(
        id.clone(),
        format!("Merge {name} into {}", current.label),
        Zone::Local,
        vec![tip.to_string(), other.to_string()],
        Position::new(current.position.x, row),
    ));
    move_branch(&mut out, &current.id, &id, row);

    let transitions = vec![
        Transition::new(ours.id.clone(), id.clone()),
        Transition::new(theirs.id.clone(), id),
    ];
    TransformOutput::new(out, transitions, "Merge made by the 'ort' strategy.")
}

/// `git push`: publish the head branch, refusing when the remote has moved on.
pub fn push(nodes: &[Node]) -> TransformOutput {
    let Some((current, tip)) = head(nodes).and_then(|h| Some((h, h.tip()?))) else {
        return TransformOutput::unchanged(nodes, "error: src refspec HEAD does not match any");
    };
    let Some(tip_node) = commit_in(nodes, Zone::Local, tip) else {
        return TransformOutput::unchanged(nodes, "error: src refspec HEAD does not match any");
    };

    let ref_name = upstream_label(&current.label);
    let tracking = remote_refs(nodes).find(|r| r.label == ref_name);
    if let Some(remote_tip) = tracking.and_then(Node::tip) {
        if remote_tip == tip {
            return TransformOutput::unchanged(nodes, "Everything up-to-date");
        }
        if !is_ancestor(nodes, Zone::Local, remote_tip, tip) {
            return TransformOutput::unchanged(
                nodes,
                format!(
                    "! [rejected] {0} -> {0} (fetch first): the remote contains work that you do not have locally",
                    current.label
                ),
            );
        }
    }

    let mut out = nodes.to_vec();
    let mut transitions = Vec::new();

    let missing = ancestry(nodes, Zone::Local, tip)
        .into_iter()
        .filter(|object| commit_in(nodes, Zone::Remote, object).is_none());
    for object in missing {
        let Some(source) = commit_in(nodes, Zone::Local, &object) else {
            continue;
        };
        let copy = Node::commit(
            derived_id(Zone::Remote, &source.id),
            source.label.clone(),
            Zone::Remote,
            source.links.clone(),
            Position::new(REMOTE_COMMIT_COLUMN, source.position.y),
        );
        transitions.push(Transition::new(source.id.clone(), copy.id.clone()));
        out.push(copy);
    }

    let tip_row = tip_node.position.y;
    let (ref_id, summary) = match tracking {
        Some(existing) => {
            if let Some(node) = node_mut(&mut out, &existing.id) {
                node.links = vec![tip.to_string()];
                node.position.y = tip_row;
            }
            let from = existing.tip().unwrap_or("(none)");
            (
                existing.id.clone(),
                format!("{from}..{tip}  {0} -> {0}", current.label),
            )
        }
        None => {
            let id = derived_id(Zone::Remote, &current.id);
            let slot = remote_refs(nodes).count() as f64;
            out.push(Node::remote_ref(
                id.clone(),
                ref_name,
                Some(tip.to_string()),
                Position::new(Zone::Remote.column() + LANE_SPACING * slot, tip_row),
            ));
            (id, format!("* [new branch]  {0} -> {0}", current.label))
        }
    };
    transitions.push(Transition::new(current.id.clone(), ref_id));

    TransformOutput::new(out, transitions, summary)
}

/// `git fetch`: copy remote commits missing locally into the tracking column.
pub fn fetch(nodes: &[Node]) -> TransformOutput {
    let mut out = nodes.to_vec();
    let mut transitions = Vec::new();

    let incoming = nodes
        .iter()
        .filter(|n| n.is_commit_in(Zone::Remote))
        .filter(|n| commit_in(nodes, Zone::Local, n.object_id()).is_none());
    for remote in incoming {
        let copy = Node::commit(
            derived_id(Zone::Local, &remote.id),
            remote.label.clone(),
            Zone::Local,
            remote.links.clone(),
            Position::new(TRACKING_COLUMN, remote.position.y),
        );
        transitions.push(Transition::new(remote.id.clone(), copy.id.clone()));
        out.push(copy);
    }

    let summary = if transitions.is_empty() {
        "Already up to date.".to_string()
    } else {
        format!("From origin: received {}", plural(transitions.len(), "commit"))
    };
    TransformOutput::new(out, transitions, summary)
}

/// `git pull`: fetch, then merge the upstream of the head branch.
pub fn pull(nodes: &[Node]) -> TransformOutput {
    let fetched = fetch(nodes);
    let merged = merge_with(&fetched.nodes, MergeScope::UpstreamOnly);

    let mut transitions = fetched.transitions;
    transitions.extend(merged.transitions);
    TransformOutput::new(merged.nodes, transitions, merged.summary)
}

/// `git clone`: fetch everything, create local branches for every remote ref
/// and check the head branch's files out.
pub fn clone(nodes: &[Node]) -> TransformOutput {
    let fetched = fetch(nodes);
    let mut out = fetched.nodes;
    let mut transitions = fetched.transitions;
    let mut created = Vec::new();

    let refs: Vec<Node> = remote_refs(&out).cloned().collect();
    for remote in &refs {
        let Some(name) = remote.label.strip_prefix("origin/") else {
            continue;
        };
        let Some(tip) = remote.tip() else {
            continue;
        };
        if local_branches(&out).any(|b| b.label == name) {
            continue;
        }
        let Some(row) = commit_in(&out, Zone::Local, tip).map(|c| c.position.y) else {
            continue;
        };

        let lane = local_branches(&out).count() as f64;
        let id = format!("branch-{name}");
        if out.iter().any(|n| n.id == id) {
            continue;
        }
        out.push(Node::branch(
            id.clone(),
            name,
            Some(tip.to_string()),
            Position::new(Zone::Local.column() + LANE_SPACING * lane, row + ROW_SPACING),
        ));
        transitions.push(Transition::new(remote.id.clone(), id));
        created.push(name.to_string());
    }

    // The checked-out branch starts at its upstream's tip, as after a real clone.
    let fast_forward = head(&out).and_then(|h| {
        let tip = h.tip()?;
        let label = upstream_label(&h.label);
        let upstream = refs.iter().find(|r| r.label == label)?.tip()?;
        let behind = upstream != tip && is_ancestor(&out, Zone::Local, tip, upstream);
        let ours = commit_in(&out, Zone::Local, tip)?;
        let theirs = commit_in(&out, Zone::Local, upstream)?;
        behind.then(|| {
            (
                h.id.clone(),
                upstream.to_string(),
                theirs.position.y,
                Transition::new(ours.id.clone(), theirs.id.clone()),
            )
        })
    });
    if let Some((branch_id, upstream, row, transition)) = fast_forward {
        move_branch(&mut out, &branch_id, &upstream, row);
        transitions.push(transition);
    }

    if transitions.is_empty() {
        return TransformOutput::new(out, transitions, "Already up to date.");
    }

    let checked_out = head(&out)
        .map(|h| upstream_label(&h.label))
        .and_then(|label| refs.iter().find(|r| r.label == label));
    if let Some(upstream) = checked_out {
        transitions.extend(
            working_files(&out).map(|f| Transition::new(upstream.id.clone(), f.id.clone())),
        );
    }

    let summary = if created.is_empty() {
        "Cloning into 'project'... done.".to_string()
    } else {
        format!("Cloning into 'project'... done. New branches: {}", created.join(", "))
    };
    TransformOutput::new(out, transitions, summary)
}

/// `git reset --soft HEAD~1`: move the head branch back one commit and
/// return that commit's files to the staging area.
pub fn reset(nodes: &[Node]) -> TransformOutput {
    let Some((current, tip)) = head(nodes).and_then(|h| Some((h, h.tip()?))) else {
        return TransformOutput::unchanged(nodes, "fatal: ambiguous argument 'HEAD~1'");
    };
    let Some(tip_node) = commit_in(nodes, Zone::Local, tip) else {
        return TransformOutput::unchanged(nodes, "fatal: ambiguous argument 'HEAD~1'");
    };
    let Some(parent) = tip_node.tip() else {
        return TransformOutput::unchanged(
            nodes,
            "fatal: ambiguous argument 'HEAD~1': unknown revision",
        );
    };

    let parent_node = commit_in(nodes, Zone::Local, parent);
    let mut out = nodes.to_vec();
    let mut transitions = Vec::new();

    let parent_row = parent_node.map_or(current.position.y - ROW_SPACING, |p| p.position.y);
    move_branch(&mut out, &current.id, parent, parent_row);
    if let Some(p) = parent_node {
        transitions.push(Transition::new(tip_node.id.clone(), p.id.clone()));
    }

    if tip.starts_with("commit-") {
        for file in out
            .iter_mut()
            .filter(|n| n.is_file_in(Zone::Staging) && n.status == Some(FileStatus::Committed))
        {
            file.status = Some(FileStatus::Staged);
            transitions.push(Transition::new(tip_node.id.clone(), file.id.clone()));
        }
    }

    let summary = format!("HEAD is now at {parent}");
    TransformOutput::new(out, transitions, summary)
}

/// `git revert HEAD`: add a commit undoing the head tip.
pub fn revert(nodes: &[Node]) -> TransformOutput {
    let Some((current, tip)) = head(nodes).and_then(|h| Some((h, h.tip()?))) else {
        return TransformOutput::unchanged(nodes, "fatal: bad revision 'HEAD'");
    };
    let Some(tip_node) = commit_in(nodes, Zone::Local, tip) else {
        return TransformOutput::unchanged(nodes, "fatal: bad revision 'HEAD'");
    };
    if tip_node.links.len() > 1 {
        return TransformOutput::unchanged(
            nodes,
            format!("error: commit {tip} is a merge but no -m option was given."),
        );
    }

    let serial = next_serial(nodes, "revert");
    let id = format!("revert-{serial}");
    let row = next_commit_row(nodes, Zone::Local);
    let label = format!("Revert \"{}\"", tip_node.label);

    let mut out = nodes.to_vec();
    out.push(Node::commit(
        id.clone(),
        label.clone(),
        Zone::Local,
        vec![tip.to_string()],
        Position::new(current.position.x, row),
    ));
    move_branch(&mut out, &current.id, &id, row);

    let mut transitions = vec![Transition::new(tip_node.id.clone(), id.clone())];
    transitions.extend(working_files(nodes).map(|f| Transition::new(id.clone(), f.id.clone())));

    TransformOutput::new(out, transitions, format!("[{} {id}] {label}", current.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initial_nodes;

    fn find<'a>(nodes: &'a [Node], id: &str) -> &'a Node {
        nodes
            .iter()
            .find(|n| n.id == id)
            .unwrap_or_else(|| panic!("missing node {id}"))
    }

    fn head_tip(nodes: &[Node]) -> String {
        head(nodes).and_then(Node::tip).unwrap().to_string()
    }

    fn run(steps: &[fn(&[Node]) -> TransformOutput]) -> Vec<Node> {
        steps
            .iter()
            .fold(initial_nodes(), |nodes, step| step(&nodes).nodes)
    }

    #[test]
    fn add_stages_dirty_files_only() {
        let result = add(&initial_nodes());

        let staged: Vec<&Node> = result
            .nodes
            .iter()
            .filter(|n| n.zone == Zone::Staging)
            .collect();
        let ids: Vec<&str> = staged.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["staged-file1", "staged-file2"]);
        assert!(staged.iter().all(|n| n.status == Some(FileStatus::Staged)));
        assert_eq!(find(&result.nodes, "staged-file1").position, Position::new(250.0, 100.0));

        assert_eq!(result.transitions.len(), 2);
        assert_eq!(result.transitions[0].from, "file1");
        assert_eq!(result.transitions[0].to, "staged-file1");
        assert_eq!(
            result.transitions[0].path,
            Some(vec![Position::new(100.0, 100.0), Position::new(250.0, 100.0)])
        );
    }

    #[test]
    fn add_keeps_the_working_copy() {
        let result = add(&initial_nodes());
        assert_eq!(find(&result.nodes, "file1").status, Some(FileStatus::Modified));
        assert_eq!(result.nodes.len(), initial_nodes().len() + 2);
    }

    #[test]
    fn add_twice_is_a_no_op() {
        let once = add(&initial_nodes());
        let twice = add(&once.nodes);
        assert_eq!(twice.nodes, once.nodes);
        assert!(twice.transitions.is_empty());
        assert_eq!(twice.summary, "nothing added to commit");
    }

    #[test]
    fn commit_without_staged_files_is_clean() {
        let result = commit(&initial_nodes());
        assert_eq!(result.nodes, initial_nodes());
        assert!(result.transitions.is_empty());
        assert_eq!(result.summary, "nothing to commit, working tree clean");
    }

    #[test]
    fn commit_records_staged_files_on_head() {
        let staged = add(&initial_nodes()).nodes;
        let result = commit(&staged);

        let created = find(&result.nodes, "commit-1");
        assert_eq!(created.kind, NodeKind::Commit);
        assert_eq!(created.label, "Commit 1");
        assert_eq!(created.links, vec!["commit-main"]);
        assert_eq!(created.position, Position::new(350.0, 250.0));

        let main = find(&result.nodes, "branch-main");
        assert_eq!(main.links, vec!["commit-1"]);
        assert_eq!(main.position.y, 300.0);

        for id in ["staged-file1", "staged-file2", "file1", "file2"] {
            assert_eq!(find(&result.nodes, id).status, Some(FileStatus::Committed));
        }
        assert_eq!(result.transitions.len(), 2);
        assert!(result.transitions.iter().all(|t| t.to == "commit-1"));
        assert_eq!(result.summary, "[main commit-1] Commit 1, 2 files changed");
    }

    #[test]
    fn branch_creates_unique_names_without_switching() {
        let first = branch(&initial_nodes());
        let created = find(&first.nodes, "branch-feature");
        assert_eq!(created.links, vec!["commit-main"]);
        assert!(!created.head);
        assert_eq!(created.position, Position::new(390.0, 200.0));
        assert_eq!(head(&first.nodes).map(|h| h.id.as_str()), Some("branch-main"));

        let second = branch(&first.nodes);
        assert_eq!(find(&second.nodes, "branch-feature-2").label, "feature-2");
    }

    #[test]
    fn checkout_cycles_through_branches() {
        let nodes = run(&[branch]);
        let switched = checkout(&nodes);
        assert_eq!(head(&switched.nodes).map(|h| h.label.as_str()), Some("feature"));
        assert_eq!(switched.transitions[0].from, "branch-main");
        assert_eq!(switched.transitions[0].to, "branch-feature");
        assert_eq!(switched.transitions.len(), 4);

        let back = checkout(&switched.nodes);
        assert_eq!(head(&back.nodes).map(|h| h.label.as_str()), Some("main"));
    }

    #[test]
    fn checkout_with_one_branch_is_unchanged() {
        let result = checkout(&initial_nodes());
        assert_eq!(result.nodes, initial_nodes());
        assert_eq!(result.summary, "Already on 'main'");
    }

    #[test]
    fn merge_fast_forwards_when_possible() {
        // feature gets a commit, main has none of its own.
        let nodes = run(&[branch, checkout, add, commit, checkout]);
        let result = merge(&nodes);
        assert_eq!(head_tip(&result.nodes), "commit-1");
        assert_eq!(result.nodes.len(), nodes.len());
        assert!(result.summary.contains("fast-forward"));
    }

    #[test]
    fn merge_creates_two_parent_commit_when_diverged() {
        let nodes = run(&[branch, add, commit, checkout, revert, checkout]);
        let result = merge(&nodes);

        let created = find(&result.nodes, "merge-1");
        assert_eq!(created.links, vec!["commit-1", "revert-1"]);
        assert_eq!(created.label, "Merge feature into main");
        assert_eq!(head_tip(&result.nodes), "merge-1");
        assert_eq!(result.transitions.len(), 2);
    }

    #[test]
    fn merge_without_candidates_is_up_to_date() {
        let result = merge(&initial_nodes());
        assert_eq!(result.nodes, initial_nodes());
        assert_eq!(result.summary, "Already up to date.");
    }

    #[test]
    fn push_is_rejected_until_remote_work_is_fetched() {
        let nodes = run(&[add, commit]);
        let result = push(&nodes);
        assert_eq!(result.nodes, nodes);
        assert!(result.summary.contains("(fetch first)"));
    }

    #[test]
    fn push_after_pull_publishes_missing_commits() {
        let nodes = run(&[add, commit, pull]);
        assert_eq!(head_tip(&nodes), "merge-1");

        let result = push(&nodes);
        assert!(result.nodes.iter().any(|n| n.id == "remote-commit-1"));
        assert!(result.nodes.iter().any(|n| n.id == "remote-merge-1"));
        assert_eq!(find(&result.nodes, "remote-origin").links, vec!["merge-1"]);
        assert_eq!(
            result.transitions.last().map(|t| (t.from.as_str(), t.to.as_str())),
            Some(("branch-main", "remote-origin"))
        );

        let again = push(&result.nodes);
        assert_eq!(again.summary, "Everything up-to-date");
    }

    #[test]
    fn push_of_new_branch_creates_tracking_ref() {
        let nodes = run(&[pull, branch, checkout, add, commit]);
        let result = push(&nodes);
        let created = find(&result.nodes, "remote-branch-feature");
        assert_eq!(created.kind, NodeKind::Remote);
        assert_eq!(created.label, "origin/feature");
        assert_eq!(created.links, vec!["commit-1"]);
        assert!(result.summary.starts_with("* [new branch]"));
    }

    #[test]
    fn fetch_copies_remote_commits_into_tracking_column() {
        let result = fetch(&initial_nodes());
        let copy = find(&result.nodes, "local-upstream-1");
        assert_eq!(copy.zone, Zone::Local);
        assert_eq!(copy.position, Position::new(450.0, 250.0));
        assert_eq!(copy.links, vec!["commit-main"]);
        assert_eq!(result.transitions.len(), 1);

        let again = fetch(&result.nodes);
        assert!(again.transitions.is_empty());
    }

    #[test]
    fn pull_fast_forwards_onto_upstream() {
        let result = pull(&initial_nodes());
        assert_eq!(head_tip(&result.nodes), "upstream-1");
        assert_eq!(result.transitions.len(), 2);
    }

    #[test]
    fn clone_checks_out_files_from_upstream() {
        let result = clone(&initial_nodes());
        assert!(result.nodes.iter().any(|n| n.id == "local-upstream-1"));
        let from_ref = result
            .transitions
            .iter()
            .filter(|t| t.from == "remote-origin")
            .count();
        assert_eq!(from_ref, 3);

        let again = clone(&result.nodes);
        assert!(again.transitions.is_empty());
    }

    #[test]
    fn clone_fast_forwards_the_checked_out_branch() {
        let result = clone(&initial_nodes());
        assert_eq!(head_tip(&result.nodes), "upstream-1");
        assert!(result
            .transitions
            .iter()
            .any(|t| t.from == "commit-main" && t.to == "local-upstream-1"));

        let again = clone(&result.nodes);
        assert_eq!(head_tip(&again.nodes), "upstream-1");
    }

    #[test]
    fn clone_leaves_a_diverged_branch_in_place() {
        let nodes = run(&[add, commit]);
        let result = clone(&nodes);
        assert_eq!(head_tip(&result.nodes), "commit-1");
    }

    #[test]
    fn reset_soft_restages_files() {
        let nodes = run(&[add, commit]);
        let result = reset(&nodes);
        assert_eq!(head_tip(&result.nodes), "commit-main");
        assert_eq!(find(&result.nodes, "staged-file1").status, Some(FileStatus::Staged));
        assert!(result.nodes.iter().any(|n| n.id == "commit-1"));

        let recommit = commit(&result.nodes);
        assert!(recommit.nodes.iter().any(|n| n.id == "commit-2"));
    }

    #[test]
    fn reset_at_root_is_refused() {
        let result = reset(&initial_nodes());
        assert_eq!(result.nodes, initial_nodes());
        assert!(result.transitions.is_empty());
    }

    #[test]
    fn revert_adds_an_inverse_commit() {
        let nodes = run(&[add, commit]);
        let result = revert(&nodes);
        let created = find(&result.nodes, "revert-1");
        assert_eq!(created.label, "Revert \"Commit 1\"");
        assert_eq!(created.links, vec!["commit-1"]);
        assert_eq!(head_tip(&result.nodes), "revert-1");
    }

    #[test]
    fn revert_refuses_merge_commits() {
        let nodes = run(&[add, commit, pull]);
        let result = revert(&nodes);
        assert_eq!(result.nodes, nodes);
        assert!(result.summary.contains("is a merge"));
    }
}
