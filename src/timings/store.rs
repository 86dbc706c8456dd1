//! The shared timings store.
//!
//! A [`TimingsStore`] is the single source of truth for the six prayer times of
//! one running application. It is created explicitly and handed to every surface
//! that needs it; cloning the handle shares the same underlying snapshot, so there
//! is no ambient global to look up.
//!
//! None of the operations can fail. Writes are whole-value replacements made
//! under one lock, so a reader sees either the old snapshot or the new one and
//! never a mix. The store performs no validation of the time strings; callers that
//! want it use [`super::validation`] before committing.
//!
//! Any holder of a handle may write. Restricting writes to the admin editor is a
//! convention of the surfaces, not something the store enforces.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::events::TimingsEvent;
use super::{Prayer, TimingsSnapshot};

#[derive(Debug)]
struct StoreState {
    snapshot: TimingsSnapshot,
    subscribers: Vec<Sender<TimingsEvent>>,
}

impl StoreState {
    /// Deliver an event to every live subscriber, dropping the disconnected ones.
    fn publish(&mut self, event: TimingsEvent) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

/// Cloneable handle to the shared prayer timings.
#[derive(Debug, Clone)]
pub struct TimingsStore {
    state: Arc<RwLock<StoreState>>,
}

impl Default for TimingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingsStore {
    /// Create a store holding the default timings.
    pub fn new() -> Self {
        Self::with_snapshot(TimingsSnapshot::default())
    }

    /// Create a store seeded with `snapshot`, e.g. timings read from config.
    pub fn with_snapshot(snapshot: TimingsSnapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                snapshot,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> TimingsSnapshot {
        self.read().snapshot.clone()
    }

    /// Replace the whole snapshot.
    pub fn set(&self, snapshot: TimingsSnapshot) {
        let mut state = self.write();
        state.snapshot = snapshot.clone();
        state.publish(TimingsEvent::replaced(snapshot));
    }

    /// Replace exactly one prayer time, leaving the other five untouched.
    pub fn set_field(&self, prayer: Prayer, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.write();
        let previous = state.snapshot.set(prayer, value.clone());
        state.publish(TimingsEvent::field_changed(prayer, previous, value));
    }

    /// Register for change notifications.
    ///
    /// Every subsequent `set` and `set_field` sends one event. Dropping the
    /// receiver unsubscribes; the sender is discarded on the next write.
    pub fn subscribe(&self) -> Receiver<TimingsEvent> {
        let (sender, receiver) = mpsc::channel();
        self.write().subscribers.push(sender);
        receiver
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.read().subscribers.len()
    }

    /// Whether `other` is a handle to the same underlying store.
    pub fn shares_state_with(&self, other: &TimingsStore) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    // A panic while holding the lock cannot leave a half-written snapshot, since
    // every write is a single assignment, so poisoned guards are used as-is.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
