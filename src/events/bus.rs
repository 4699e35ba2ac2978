//! Single-consumer event channel between image windows and their container.
//!
//! Every window gets its own [`EventPublisher`]; the container keeps the
//! [`EventBus`] and drains it on the main thread. The receiver is not `Sync`,
//! so the Bevy shell stores the bus as a non-send resource.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::SyncEvent;

pub struct EventBus {
    sender: Sender<SyncEvent>,
    receiver: Receiver<SyncEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Publishers are cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<SyncEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds a sender itself, so Disconnected cannot happen while it lives
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events in publish order.
    pub fn drain(&self) -> Vec<SyncEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable sending half of the [`EventBus`].
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<SyncEvent>,
}

impl EventPublisher {
    /// Publish an event. If the bus is gone the app is shutting down and the
    /// event is dropped.
    pub fn publish(&self, event: SyncEvent) {
        let _ = self.sender.send(event);
    }
}
