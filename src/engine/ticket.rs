//! Cancellable tokens for deferred work.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one scheduled commit or advance.
///
/// Tickets are only ever compared for equality; a ticket that no longer
/// matches the owner's pending one is stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing tickets.
#[derive(Clone, Debug, Default)]
pub struct TicketBook {
    issued: u64,
}

impl TicketBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }
}

/// Request to call back with `ticket` once `after` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: Ticket,
    pub after: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_never_reissued() {
        let mut book = TicketBook::new();
        let first = book.issue();
        let second = book.issue();
        assert_ne!(first, second);
        assert!(second.id() > first.id());
    }
}
