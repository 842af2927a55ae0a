//! Simulation phases and their history.

use crate::registry::ActionKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

crate::vocabulary! {
    /// Where the simulation stands.
    pub enum Phase {
        /// No action selected, nothing animating.
        Idle => "idle",
        /// An action is chosen but not yet executed.
        Selected => "selected",
        /// A transform is being animated; selection is frozen.
        Animating => "animating",
    }
}

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    pub at: DateTime<Utc>,
    /// Action selected when the change happened.
    pub action: Option<ActionKind>,
}

/// Ordered history of the most recent phase changes.
///
/// At most `limit` changes are kept; recording past the limit drops the
/// oldest one. [`push`](PhaseHistory::push) records in place, while
/// [`record`](PhaseHistory::record) leaves `self` untouched and returns the
/// extended history.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use gitfit::engine::{Phase, PhaseChange, PhaseHistory};
///
/// let history = PhaseHistory::new().record(PhaseChange {
///     from: Phase::Idle,
///     to: Phase::Selected,
///     at: Utc::now(),
///     action: None,
/// });
///
/// assert_eq!(history.path(), vec![Phase::Idle, Phase::Selected]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    changes: VecDeque<PhaseChange>,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    PhaseHistory::DEFAULT_LIMIT
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }
}

impl PhaseHistory {
    pub const DEFAULT_LIMIT: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    /// An empty history keeping at most `limit` changes (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            changes: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record a change in place, evicting the oldest one when full.
    pub fn push(&mut self, change: PhaseChange) {
        while self.changes.len() >= self.limit {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: PhaseChange) -> Self {
        let mut next = self.clone();
        next.push(change);
        next
    }

    /// Phases traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<Phase> {
        self.changes
            .front()
            .map(|first| first.from)
            .into_iter()
            .chain(self.changes.iter().map(|change| change.to))
            .collect()
    }

    /// Time between the first and last change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    /// Retained changes, oldest first.
    pub fn changes(&self) -> impl ExactSizeIterator<Item = &PhaseChange> + '_ {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
