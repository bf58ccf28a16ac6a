//! Live WebSocket connection bookkeeping.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// Registry of open WebSocket connections, keyed by connection id.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: DashMap<Uuid, DateTime<Utc>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new connection and return its id.
    pub fn register(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.connections.insert(id, Utc::now());
        id
    }

    pub fn deregister(&self, id: Uuid) {
        self.connections.remove(&id);
    }

    pub fn count(&self) -> usize {
        self.connections.len()
    }
}
