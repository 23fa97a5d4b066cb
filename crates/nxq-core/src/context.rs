// crates/nxq-core/src/context.rs
//
// Per-block execution context handed to module hooks.
//
// Carries the block height and an append-only event buffer. Events are
// fire-and-forget from the emitter's point of view; downstream indexers
// read them after the block commits.

use serde::{Deserialize, Serialize};

/// A typed event with ordered key/value attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event type, e.g. `mint`.
    pub kind: String,
    /// Attributes in emission order.
    pub attributes: Vec<(String, String)>,
}

impl Event {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    /// Builder-style attribute append.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((key.into(), value.to_string()));
        self
    }

    /// Look up the first attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Collects events emitted while processing a block.
#[derive(Debug, Clone, Default)]
pub struct EventManager {
    events: Vec<Event>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All emitted events of a given type.
    pub fn events_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Drain the buffer, e.g. when the block is committed.
    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

/// Execution context for a single block.
#[derive(Debug, Clone, Default)]
pub struct BlockContext {
    /// Height of the block being processed.
    pub height: u64,
    /// Events emitted during this block.
    pub events: EventManager,
}

impl BlockContext {
    pub fn new(height: u64) -> Self {
        Self {
            height,
            events: EventManager::new(),
        }
    }
}
