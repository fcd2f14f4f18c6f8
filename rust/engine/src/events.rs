use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::game::Game;

/// Notification emitted after every successfully applied action.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    UpdatedGame(Game),
}

/// Fan-out bus for engine events.
///
/// Subscribers receive every event published after they subscribe. Delivery
/// is fire-and-forget: publishing never blocks, and a subscriber that has
/// dropped its receiver is pruned on the next publish.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Sender<Event>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        rx
    }

    pub fn publish(&self, event: &Event) {
        let mut subscribers = self.subscribers.lock().expect("subscriber lock poisoned");
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .len()
    }

    /// A closure suitable for the engine's `send_event` hook.
    pub fn send_hook(&self) -> Box<dyn FnMut(Event) + Send> {
        let bus = self.clone();
        Box::new(move |event| bus.publish(&event))
    }
}
