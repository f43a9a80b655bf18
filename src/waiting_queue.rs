// FIFO waiting list of guests asking for a room type.
// Display-only: nothing is ever dequeued or matched to a freed room.
// The requested type is kept as the guest wrote it, it is never checked against the catalog.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingEntry {
    pub name: String,
    pub room_type: String,
    pub date: String,
}

#[derive(Debug, Default)]
pub struct WaitingQueue {
    entries: VecDeque<WaitingEntry>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn enqueue(&mut self, name: &str, room_type: &str, date: &str) {
        self.entries.push_back(WaitingEntry {
            name: name.to_string(),
            room_type: room_type.to_string(),
            date: date.to_string(),
        });
        debug!(guest = name, room_type, position = self.entries.len(), "guest waitlisted");
    }

    // Head to tail, leaves the queue intact
    pub fn list_all(&self) -> Vec<&WaitingEntry> {
        self.entries.iter().collect()
    }
}
