//! The Idle / Selected / Animating state machine over a node graph.

use super::phase::{Phase, PhaseChange, PhaseHistory};
use super::scene::Scene;
use super::ticket::{Scheduled, Ticket, TicketBook};
use crate::config::Config;
use crate::core::{initial_nodes, Node, Transition, Zoom};
use crate::registry::{Action, ActionKind, Registry, TransformOutput};
use crate::validation::check_transform;
use chrono::Utc;
use std::time::Duration;
use stillwater::validation::Validation;
use tracing::{debug, trace, warn};

/// A transform computed by `execute` and waiting for its animation to end.
#[derive(Clone, Debug)]
struct Pending {
    ticket: Ticket,
    action: ActionKind,
    output: TransformOutput,
}

/// Owns the node graph and applies actions to it.
///
/// The phase is derived from state: Animating while a commit is pending,
/// Selected while an action is selected, Idle otherwise. Readers see the
/// pre-transform nodes for the whole animation and the post-transform nodes
/// once [`commit`](Simulation::commit) lands; never a mix.
///
/// # Example
///
/// ```rust
/// use gitfit::engine::{Phase, Simulation};
/// use gitfit::registry::ActionKind;
///
/// let mut sim = Simulation::new();
/// sim.select(ActionKind::Add);
/// let scheduled = sim.execute().unwrap();
/// assert_eq!(sim.phase(), Phase::Animating);
///
/// assert!(sim.commit(scheduled.ticket));
/// assert!(sim.nodes().iter().any(|n| n.id == "staged-file1"));
/// assert_eq!(sim.phase(), Phase::Selected);
/// ```
#[derive(Debug)]
pub struct Simulation {
    registry: Registry,
    baseline: Vec<Node>,
    nodes: Vec<Node>,
    selected: Option<ActionKind>,
    pending: Option<Pending>,
    tickets: TicketBook,
    animation: Duration,
    history: PhaseHistory,
    zoom: Zoom,
    show_area_labels: bool,
    last_summary: Option<String>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Standard registry, default starting graph, default timing.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_registry(Registry::standard(), initial_nodes(), config.animation())
    }

    /// A simulation over a custom registry and starting graph.
    pub fn with_registry(registry: Registry, baseline: Vec<Node>, animation: Duration) -> Self {
        Self {
            registry,
            nodes: baseline.clone(),
            baseline,
            selected: None,
            pending: None,
            tickets: TicketBook::new(),
            animation,
            history: PhaseHistory::new(),
            zoom: Zoom::default(),
            show_area_labels: true,
            last_summary: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Animating
        } else if self.selected.is_some() {
            Phase::Selected
        } else {
            Phase::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// The committed node list.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Transitions being animated; empty unless Animating.
    pub fn transitions(&self) -> &[Transition] {
        self.pending
            .as_ref()
            .map(|pending| pending.output.transitions.as_slice())
            .unwrap_or(&[])
    }

    /// Node list that will be committed when the animation ends.
    pub fn pending_nodes(&self) -> Option<&[Node]> {
        self.pending
            .as_ref()
            .map(|pending| pending.output.nodes.as_slice())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selected(&self) -> Option<&Action> {
        self.selected.and_then(|kind| self.registry.get(kind))
    }

    pub fn animation(&self) -> Duration {
        self.animation
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    /// Console line of the last committed or refused action.
    pub fn last_summary(&self) -> Option<&str> {
        self.last_summary.as_deref()
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

    pub fn show_area_labels(&self) -> bool {
        self.show_area_labels
    }

    /// Flip zone banner visibility, returning the new value.
    pub fn toggle_area_labels(&mut self) -> bool {
        self.show_area_labels = !self.show_area_labels;
        self.show_area_labels
    }

    fn note(&mut self, before: Phase) {
        let after = self.phase();
        if before != after {
            trace!(from = %before, to = %after, "phase change");
            self.history.push(PhaseChange {
                from: before,
                to: after,
                at: Utc::now(),
                action: self.selected,
            });
        }
    }

    /// Choose an action. Ignored while animating or for kinds the registry
    /// does not hold.
    pub fn select(&mut self, kind: ActionKind) -> bool {
        if self.is_animating() {
            trace!(action = %kind, "selection ignored while animating");
            return false;
        }
        if self.registry.get(kind).is_none() {
            debug!(action = %kind, "selection of unregistered action ignored");
            return false;
        }

        let before = self.phase();
        self.selected = Some(kind);
        debug!(action = %kind, "action selected");
        self.note(before);
        true
    }

    /// Clear the selection. Ignored while animating.
    pub fn deselect(&mut self) -> bool {
        if self.is_animating() || self.selected.is_none() {
            return false;
        }
        let before = self.phase();
        self.selected = None;
        self.note(before);
        true
    }

    /// Run the selected action's transform and schedule its commit.
    ///
    /// A no-op returning `None` when nothing is selected or an animation is
    /// already in flight.
    pub fn execute(&mut self) -> Option<Scheduled> {
        if self.is_animating() {
            trace!("execute ignored while animating");
            return None;
        }
        let Some(action) = self.selected() else {
            trace!("execute ignored without a selection");
            return None;
        };

        let kind = action.kind;
        let output = action.apply(&self.nodes);
        debug!(
            action = %kind,
            transitions = output.transitions.len(),
            summary = %output.summary,
            "transform computed"
        );

        let before = self.phase();
        let ticket = self.tickets.issue();
        self.pending = Some(Pending {
            ticket,
            action: kind,
            output,
        });
        self.note(before);

        Some(Scheduled {
            ticket,
            after: self.animation,
        })
    }

    /// Apply the pending transform if `ticket` is the one last scheduled.
    ///
    /// Returns whether anything was committed. Stale tickets, from before a
    /// reset or a later execution, are ignored.
    pub fn commit(&mut self, ticket: Ticket) -> bool {
        if self.pending.as_ref().map(|pending| pending.ticket) != Some(ticket) {
            debug!(ticket = ticket.id(), "stale commit ignored");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        if let Some(action) = self.registry.get(pending.action) {
            if let Validation::Failure(violations) =
                check_transform(action, &self.nodes, &pending.output)
            {
                for violation in &violations {
                    warn!(
                        action = %pending.action,
                        %violation,
                        "transform produced a malformed graph"
                    );
                }
            }
        }

        let before = Phase::Animating;
        self.nodes = pending.output.nodes;
        self.last_summary = Some(pending.output.summary);
        debug!(action = %pending.action, nodes = self.nodes.len(), "transform committed");
        self.note(before);
        true
    }

    /// Restore the starting graph, clear the selection and invalidate any
    /// pending commit.
    pub fn reset(&mut self) {
        let before = self.phase();
        if let Some(pending) = self.pending.take() {
            debug!(ticket = pending.ticket.id(), "pending commit cancelled by reset");
        }
        self.selected = None;
        self.nodes = self.baseline.clone();
        self.last_summary = None;
        debug!("simulation reset");
        self.note(before);
    }

    /// Everything the render layer needs for one frame.
    pub fn scene(&self) -> Scene {
        Scene::capture(self)
    }
}
