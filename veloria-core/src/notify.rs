//! Change notifications between stores and whoever renders them.
//!
//! Notifications are coarse: a `Change` only says which kind of data was
//! written, and subscribers are expected to reload it.

use std::fmt;

use tokio::sync::broadcast;

const BUS_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    Clients,
    Events,
    Services,
    Avatar,
    Profile,
    Plan,
    Language,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Change::Clients => "clients",
            Change::Events => "events",
            Change::Services => "services",
            Change::Avatar => "avatar",
            Change::Profile => "profile",
            Change::Plan => "plan",
            Change::Language => "language",
        };
        write!(f, "{}-change", name)
    }
}

/// Cloneable handle to a broadcast channel of `Change`s.
#[derive(Debug, Clone)]
pub struct ChangeBus {
    tx: broadcast::Sender<Change>,
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BUS_CAPACITY);
        ChangeBus { tx }
    }

    /// Notify every current subscriber. Having none is fine.
    pub fn publish(&self, change: Change) {
        tracing::debug!(%change, "publishing change");
        let _ = self.tx.send(change);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.tx.subscribe()
    }
}
