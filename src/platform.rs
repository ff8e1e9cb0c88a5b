//! Host-platform seams for Chargecap
//!
//! This module provides the two contact points with the host automation
//! platform: a registry holding the entities produced at setup, and a
//! broadcast bus carrying state-persist notifications so observers can
//! update immediately after a successful write.

use crate::number::ChargeLimitNumber;
use tokio::sync::broadcast;

/// A persisted entity state change
#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdate {
    /// Unique id of the entity whose state changed
    pub unique_id: String,

    /// New displayed value, if any
    pub value: Option<f64>,
}

/// Broadcast channel for streaming entity state changes
#[derive(Debug, Clone)]
pub struct StateBus {
    tx: broadcast::Sender<StateUpdate>,
}

impl StateBus {
    /// Create a bus with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a state change. Lagging or absent receivers are not an error.
    pub fn publish(&self, update: StateUpdate) {
        let _ = self.tx.send(update);
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> broadcast::Receiver<StateUpdate> {
        self.tx.subscribe()
    }
}

impl Default for StateBus {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Registry of entities produced during platform setup
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<ChargeLimitNumber>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of entities. Always succeeds; there is no
    /// partial-failure signaling at this layer.
    pub fn add_entities(&mut self, entities: Vec<ChargeLimitNumber>) {
        self.entities.extend(entities);
    }

    /// Look up an entity by its unique id
    pub fn get(&self, unique_id: &str) -> Option<&ChargeLimitNumber> {
        self.entities.iter().find(|e| e.unique_id() == unique_id)
    }

    /// Number of registered entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over registered entities
    pub fn iter(&self) -> impl Iterator<Item = &ChargeLimitNumber> {
        self.entities.iter()
    }
}
