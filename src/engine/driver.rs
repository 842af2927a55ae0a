//! Imperative shell: owns the timers that drive a pure state machine.
//!
//! The machines in this crate never sleep. They hand back a [`Scheduled`]
//! request and expect to be called again with its ticket once the delay has
//! elapsed. A [`Driver`] runs that loop on a tokio task and aborts it on
//! reset or drop, so a late callback can never touch a machine that moved on.

use super::phase::Phase;
use super::scene::Scene;
use super::simulation::Simulation;
use super::ticket::{Scheduled, Ticket};
use crate::core::Node;
use crate::flow::FlowPlayer;
use crate::registry::ActionKind;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::trace;

/// A state machine whose deferred work is driven by tickets.
pub trait Animated: Send + 'static {
    /// Called once a scheduled delay has elapsed. May ask for another call.
    fn fire(&mut self, ticket: Ticket) -> Option<Scheduled>;
}

impl Animated for Simulation {
    fn fire(&mut self, ticket: Ticket) -> Option<Scheduled> {
        self.commit(ticket);
        None
    }
}

/// Owns a machine and at most one timer task for it.
///
/// Methods that schedule work must be called from within a tokio runtime.
pub struct Driver<M: Animated> {
    machine: Arc<Mutex<M>>,
    task: Option<JoinHandle<()>>,
}

impl<M: Animated> Driver<M> {
    pub fn new(machine: M) -> Self {
        Self {
            machine: Arc::new(Mutex::new(machine)),
            task: None,
        }
    }

    /// Read the machine under its lock.
    pub fn read<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&*self.machine.lock())
    }

    /// Mutate the machine under its lock, scheduling whatever it asks for.
    pub fn update(&mut self, f: impl FnOnce(&mut M) -> Option<Scheduled>) -> bool {
        let scheduled = f(&mut *self.machine.lock());
        match scheduled {
            Some(scheduled) => {
                self.schedule(scheduled);
                true
            }
            None => false,
        }
    }

    /// Whether a timer task is still running.
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Abort the running timer task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            trace!("timer task aborted");
            task.abort();
        }
    }

    /// Wait until the running timer task, and anything it rescheduled, is done.
    pub async fn settle(&mut self) {
        if let Some(task) = self.task.take() {
            match task.await {
                Ok(()) => {}
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                Err(_) => trace!("timer task was cancelled before it settled"),
            }
        }
    }

    fn schedule(&mut self, scheduled: Scheduled) {
        self.cancel();
        let machine = Arc::clone(&self.machine);
        self.task = Some(tokio::spawn(async move {
            let mut next = Some(scheduled);
            while let Some(Scheduled { ticket, after }) = next {
                tokio::time::sleep(after).await;
                next = machine.lock().fire(ticket);
            }
        }));
    }
}

impl<M: Animated> Drop for Driver<M> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Driver<Simulation> {
    pub fn select(&self, kind: ActionKind) -> bool {
        self.machine.lock().select(kind)
    }

    pub fn deselect(&self) -> bool {
        self.machine.lock().deselect()
    }

    /// Execute the selected action and commit it when the animation ends.
    /// Returns whether an execution started.
    pub fn execute(&mut self) -> bool {
        self.update(Simulation::execute)
    }

    /// Cancel any pending commit, then restore the starting graph.
    pub fn reset(&mut self) {
        self.cancel();
        self.machine.lock().reset();
    }

    pub fn phase(&self) -> Phase {
        self.machine.lock().phase()
    }

    pub fn nodes(&self) -> Vec<Node> {
        self.machine.lock().nodes().to_vec()
    }

    pub fn scene(&self) -> Scene {
        self.machine.lock().scene()
    }
}

impl Driver<FlowPlayer> {
    /// Start auto-advancing from the current step.
    pub fn play(&mut self) -> bool {
        self.update(FlowPlayer::play)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.cancel();
        self.update(FlowPlayer::toggle_pause)
    }

    pub fn reset(&mut self) -> bool {
        self.cancel();
        self.update(FlowPlayer::reset)
    }

    pub fn next(&mut self) -> bool {
        self.update(FlowPlayer::next)
    }

    pub fn prev(&mut self) -> bool {
        self.update(FlowPlayer::prev)
    }

    pub fn current(&self) -> usize {
        self.machine.lock().current()
    }

    pub fn is_complete(&self) -> bool {
        self.machine.lock().is_complete()
    }
}
