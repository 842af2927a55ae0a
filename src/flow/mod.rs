//! Step-by-step walkthroughs of common workflows.
//!
//! A [`Flow`] is a fixed list of commands with a short explanation each. A
//! [`FlowPlayer`] reveals them one at a time, advancing automatically every
//! step delay until paused or complete.

use crate::config::Config;
use crate::core::Position;
use crate::engine::{Animated, Scheduled, Ticket, TicketBook};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

crate::vocabulary! {
    /// What a flow step does.
    pub enum StepKind {
        Commit => "commit",
        Branch => "branch",
        Checkout => "checkout",
        Merge => "merge",
        Pull => "pull",
        Push => "push",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowStep {
    pub id: String,
    pub kind: StepKind,
    pub command: String,
    pub message: String,
    pub position: Position,
}

impl FlowStep {
    fn new(id: &str, kind: StepKind, command: &str, message: &str, x: f64, y: f64) -> Self {
        Self {
            id: id.to_string(),
            kind,
            command: command.to_string(),
            message: message.to_string(),
            position: Position::new(x, y),
        }
    }
}

/// A titled sequence of steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub title: String,
    pub description: String,
    pub steps: Vec<FlowStep>,
}

impl Flow {
    /// Create a branch and commit on it.
    pub fn branching() -> Self {
        use StepKind::*;
        Self {
            title: "Git Branching Workflow".into(),
            description: "Learn how to create and work with branches".into(),
            steps: vec![
                FlowStep::new(
                    "init",
                    Commit,
                    "git init",
                    "Initialize a new Git repository",
                    200.0,
                    50.0,
                ),
                FlowStep::new(
                    "add",
                    Commit,
                    "git add index.html",
                    "Stage changes to index.html",
                    200.0,
                    100.0,
                ),
                FlowStep::new(
                    "commit",
                    Commit,
                    "git commit -m \"Initial commit\"",
                    "Create the first commit",
                    200.0,
                    150.0,
                ),
                FlowStep::new(
                    "branch",
                    Branch,
                    "git branch feature",
                    "Create a new branch named \"feature\"",
                    200.0,
                    200.0,
                ),
                FlowStep::new(
                    "checkout",
                    Checkout,
                    "git checkout feature",
                    "Switch to the feature branch",
                    300.0,
                    250.0,
                ),
                FlowStep::new(
                    "commit-feature",
                    Commit,
                    "git commit -m \"Add new feature\"",
                    "Commit changes on the feature branch",
                    300.0,
                    300.0,
                ),
            ],
        }
    }

    /// Bring a feature branch up to date and merge it back.
    pub fn merging() -> Self {
        use StepKind::*;
        Self {
            title: "Git Merge Workflow".into(),
            description: "Learn how to merge branches together".into(),
            steps: vec![
                FlowStep::new(
                    "checkout-main",
                    Checkout,
                    "git checkout main",
                    "Switch to the main branch",
                    100.0,
                    50.0,
                ),
                FlowStep::new(
                    "pull",
                    Pull,
                    "git pull origin main",
                    "Pull latest changes from remote",
                    100.0,
                    100.0,
                ),
                FlowStep::new(
                    "checkout-feature",
                    Checkout,
                    "git checkout feature",
                    "Switch to feature branch",
                    200.0,
                    150.0,
                ),
                FlowStep::new(
                    "merge-main",
                    Merge,
                    "git merge main",
                    "Merge main into feature to resolve conflicts",
                    150.0,
                    200.0,
                ),
                FlowStep::new(
                    "checkout-main-again",
                    Checkout,
                    "git checkout main",
                    "Switch back to main branch",
                    100.0,
                    250.0,
                ),
                FlowStep::new(
                    "merge-feature",
                    Merge,
                    "git merge feature",
                    "Merge feature into main",
                    150.0,
                    300.0,
                ),
            ],
        }
    }

    pub fn step(&self, id: &str) -> Option<&FlowStep> {
        self.steps.iter().find(|step| step.id == id)
    }
}

/// Outcome of an automatic advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the step at this index.
    Moved(usize),
    /// The last step finished; the player stopped.
    Completed,
    /// The ticket was cancelled or superseded.
    Stale,
}

/// Plays a [`Flow`] one step at a time.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use gitfit::flow::{Advance, Flow, FlowPlayer};
///
/// let mut player = FlowPlayer::new(Flow::branching(), Duration::from_secs(2));
/// let scheduled = player.play().unwrap();
/// assert_eq!(player.advance(scheduled.ticket), Advance::Moved(1));
/// assert_eq!(player.current_step().map(|s| s.id.as_str()), Some("add"));
/// ```
#[derive(Clone, Debug)]
pub struct FlowPlayer {
    flow: Flow,
    current: usize,
    paused: bool,
    complete: bool,
    pending: Option<Ticket>,
    tickets: TicketBook,
    step_delay: Duration,
}

impl FlowPlayer {
    pub fn new(flow: Flow, step_delay: Duration) -> Self {
        Self {
            flow,
            current: 0,
            paused: false,
            complete: false,
            pending: None,
            tickets: TicketBook::new(),
            step_delay,
        }
    }

    pub fn with_config(flow: Flow, config: &Config) -> Self {
        Self::new(flow, config.flow_step())
    }

    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> Option<&FlowStep> {
        self.flow.steps.get(self.current)
    }

    /// Steps revealed so far, including the current one.
    pub fn visible_steps(&self) -> &[FlowStep] {
        let end = (self.current + 1).min(self.flow.steps.len());
        &self.flow.steps[..end]
    }

    /// Command shown under the diagram.
    pub fn caption(&self) -> &str {
        if self.complete {
            "Complete!"
        } else {
            self.current_step().map_or("", |step| step.command.as_str())
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether an advance is scheduled.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.flow.steps.len()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current > 0
    }

    /// Schedule the next automatic advance.
    ///
    /// Returns `None` when paused, complete, empty or already scheduled.
    pub fn play(&mut self) -> Option<Scheduled> {
        if self.paused || self.complete || self.pending.is_some() || self.flow.steps.is_empty() {
            return None;
        }
        let ticket = self.tickets.issue();
        self.pending = Some(ticket);
        trace!(step = self.current, ticket = ticket.id(), "advance scheduled");
        Some(Scheduled {
            ticket,
            after: self.step_delay,
        })
    }

    /// Apply a scheduled advance.
    pub fn advance(&mut self, ticket: Ticket) -> Advance {
        if self.pending != Some(ticket) {
            trace!(ticket = ticket.id(), "stale advance ignored");
            return Advance::Stale;
        }
        self.pending = None;

        if self.can_go_next() {
            self.current += 1;
            Advance::Moved(self.current)
        } else {
            self.complete = true;
            debug!(flow = %self.flow.title, "flow complete");
            Advance::Completed
        }
    }

    /// Pause or resume. Pausing cancels the scheduled advance.
    pub fn toggle_pause(&mut self) -> Option<Scheduled> {
        self.pending = None;
        self.paused = !self.paused;
        self.play()
    }

    /// Rewind to the first step and start playing.
    pub fn reset(&mut self) -> Option<Scheduled> {
        self.pending = None;
        self.current = 0;
        self.paused = false;
        self.complete = false;
        self.play()
    }

    /// Move forward one step by hand, restarting the timer.
    pub fn next(&mut self) -> Option<Scheduled> {
        if !self.can_go_next() {
            return None;
        }
        self.current += 1;
        self.restart()
    }

    /// Move back one step by hand, restarting the timer.
    pub fn prev(&mut self) -> Option<Scheduled> {
        if !self.can_go_prev() {
            return None;
        }
        self.current -= 1;
        self.restart()
    }

    fn restart(&mut self) -> Option<Scheduled> {
        self.pending = None;
        self.complete = false;
        self.play()
    }
}

impl Animated for FlowPlayer {
    fn fire(&mut self, ticket: Ticket) -> Option<Scheduled> {
        match self.advance(ticket) {
            Advance::Moved(_) => self.play(),
            Advance::Completed | Advance::Stale => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> FlowPlayer {
        FlowPlayer::new(Flow::branching(), Duration::from_millis(2000))
    }

    fn run_to_end(player: &mut FlowPlayer) {
        let mut next = player.play();
        while let Some(scheduled) = next {
            next = player.fire(scheduled.ticket);
        }
    }

    #[test]
    fn presets_have_six_steps() {
        assert_eq!(Flow::branching().steps.len(), 6);
        assert_eq!(Flow::merging().steps.len(), 6);
        assert_eq!(
            Flow::merging().step("pull").map(|s| s.kind),
            Some(StepKind::Pull)
        );
    }

    #[test]
    fn auto_advance_runs_to_completion() {
        let mut player = player();
        run_to_end(&mut player);
        assert!(player.is_complete());
        assert_eq!(player.current(), 5);
        assert_eq!(player.caption(), "Complete!");
        assert!(player.play().is_none());
    }

    #[test]
    fn pause_cancels_the_scheduled_advance() {
        let mut player = player();
        let scheduled = player.play().unwrap();
        assert!(player.toggle_pause().is_none());
        assert!(player.is_paused());
        assert_eq!(player.advance(scheduled.ticket), Advance::Stale);
        assert_eq!(player.current(), 0);

        let resumed = player.toggle_pause().unwrap();
        assert_ne!(resumed.ticket, scheduled.ticket);
        assert_eq!(player.advance(resumed.ticket), Advance::Moved(1));
    }

    #[test]
    fn reset_rewinds_and_replays() {
        let mut player = player();
        run_to_end(&mut player);
        let scheduled = player.reset().unwrap();
        assert_eq!(player.current(), 0);
        assert!(!player.is_complete());
        assert_eq!(scheduled.after, Duration::from_millis(2000));
    }

    #[test]
    fn manual_navigation_clamps_to_bounds() {
        let mut player = player();
        assert!(player.prev().is_none());
        assert_eq!(player.current(), 0);

        for _ in 0..10 {
            player.next();
        }
        assert_eq!(player.current(), 5);
        assert!(!player.can_go_next());
    }

    #[test]
    fn manual_navigation_supersedes_pending_advance() {
        let mut player = player();
        let first = player.play().unwrap();
        let second = player.next().unwrap();
        assert_eq!(player.advance(first.ticket), Advance::Stale);
        assert_eq!(player.advance(second.ticket), Advance::Moved(2));
    }

    #[test]
    fn visible_steps_grow_with_progress() {
        let mut player = player();
        assert_eq!(player.visible_steps().len(), 1);
        player.next();
        player.next();
        assert_eq!(player.visible_steps().len(), 3);
        assert_eq!(player.caption(), "git commit -m \"Initial commit\"");
    }

    #[test]
    fn empty_flow_never_schedules() {
        let flow = Flow {
            title: "empty".into(),
            description: String::new(),
            steps: Vec::new(),
        };
        let mut player = FlowPlayer::new(flow, Duration::from_millis(10));
        assert!(player.play().is_none());
        assert!(player.visible_steps().is_empty());
        assert_eq!(player.caption(), "");
    }
}
