//! Change notifications published by the timings store.
//!
//! Subscribing is optional. Display surfaces are expected to call
//! [`TimingsStore::get`](super::store::TimingsStore::get) on their own render
//! cycle; events only tell an already-mounted surface that a re-read is worthwhile.

use serde::{Deserialize, Serialize};

use super::{Prayer, TimingsSnapshot};

/// A committed write to the timings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum TimingsEvent {
    /// The whole snapshot was replaced through `set`.
    Replaced {
        /// The snapshot as committed
        snapshot: TimingsSnapshot,
    },

    /// A single prayer time was replaced through `set_field`.
    FieldChanged {
        prayer: Prayer,
        /// The value held before the write
        previous: String,
        /// The value held after the write
        value: String,
    },
}

impl TimingsEvent {
    pub fn replaced(snapshot: TimingsSnapshot) -> Self {
        TimingsEvent::Replaced { snapshot }
    }

    pub fn field_changed(prayer: Prayer, previous: String, value: String) -> Self {
        TimingsEvent::FieldChanged {
            prayer,
            previous,
            value,
        }
    }

    /// The prayers whose values this event may have changed.
    pub fn affected(&self) -> Vec<Prayer> {
        match self {
            TimingsEvent::Replaced { .. } => Prayer::ALL.to_vec(),
            TimingsEvent::FieldChanged { prayer, .. } => vec![*prayer],
        }
    }
}
