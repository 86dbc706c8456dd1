//! Admin timings editor, the only surface that writes to the store.
//!
//! The editor pre-populates its fields from the store when opened. In
//! [`EditMode::Live`] each edit is committed immediately with `set_field`, the
//! way a text field commits per keystroke; there is no undo and cancelling keeps
//! what was typed. In [`EditMode::Draft`] edits collect in a local copy that is
//! committed as a whole with `set` on save and thrown away on cancel.
//!
//! The store never validates. The editor checks times on save: under
//! [`ValidationPolicy::Lenient`] problems come back as warnings, under
//! [`ValidationPolicy::Strict`] they reject the save. In live mode a rejected save
//! cannot take back edits that were already committed.

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::admin::AdminSession;
use crate::constants::{DAILY_TIME_PLACEHOLDER, JUMMAH_TIME_PLACEHOLDER};
use crate::timings::store::TimingsStore;
use crate::timings::validation::snapshot_issues;
use crate::timings::{Prayer, TimingsSnapshot};

/// When edits reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Every edit is committed immediately
    #[default]
    Live,
    /// Edits are committed together on save
    Draft,
}

impl EditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditMode::Live => "live",
            EditMode::Draft => "draft",
        }
    }
}

/// How the editor reacts to times that are not valid times of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    #[default]
    Lenient,
    Strict,
}

impl ValidationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Lenient
        }
    }
}

/// One input field as presented to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorField {
    pub prayer: Prayer,
    pub label: String,
    pub value: String,
    pub placeholder: &'static str,
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// The snapshot the store holds after the save
    pub snapshot: TimingsSnapshot,
    /// Validation problems that did not block the save
    pub warnings: Vec<String>,
}

pub struct TimingsEditor {
    store: TimingsStore,
    session: AdminSession,
    mode: EditMode,
    policy: ValidationPolicy,
    draft: TimingsSnapshot,
}

impl TimingsEditor {
    /// Open the editor, pre-populating every field from the store.
    pub fn open(
        store: TimingsStore,
        session: AdminSession,
        mode: EditMode,
        policy: ValidationPolicy,
    ) -> Self {
        let draft = store.get();
        Self {
            store,
            session,
            mode,
            policy,
            draft,
        }
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// The values currently shown in the form.
    pub fn current(&self) -> TimingsSnapshot {
        match self.mode {
            EditMode::Live => self.store.get(),
            EditMode::Draft => self.draft.clone(),
        }
    }

    /// The five daily prayer fields followed by the Jummah field.
    pub fn fields(&self) -> Vec<EditorField> {
        self.current()
            .iter()
            .map(|(prayer, value)| EditorField {
                prayer,
                label: if prayer.is_jummah() {
                    "Jummah Prayer Time".to_string()
                } else {
                    prayer.as_str().to_string()
                },
                value: value.to_string(),
                placeholder: if prayer.is_jummah() {
                    JUMMAH_TIME_PLACEHOLDER
                } else {
                    DAILY_TIME_PLACEHOLDER
                },
            })
            .collect()
    }

    /// Replace the text of one field.
    pub fn edit(&mut self, prayer: Prayer, text: impl Into<String>) {
        match self.mode {
            EditMode::Live => self.store.set_field(prayer, text),
            EditMode::Draft => {
                self.draft.set(prayer, text);
            }
        }
    }

    /// Replace the text of the field named `name`; unknown names are rejected.
    pub fn edit_named(&mut self, name: &str, text: impl Into<String>) -> Result<Prayer> {
        let prayer: Prayer = name.parse()?;
        self.edit(prayer, text);
        Ok(prayer)
    }

    /// Whether the form holds edits the store has not seen.
    pub fn has_unsaved_changes(&self) -> bool {
        self.mode == EditMode::Draft && self.draft != self.store.get()
    }

    /// Validate according to the policy and commit the form.
    pub fn save(&mut self) -> Result<SaveReport> {
        let candidate = self.current();
        let warnings = snapshot_issues(&candidate);

        if self.policy == ValidationPolicy::Strict && !warnings.is_empty() {
            bail!("Timings not saved: {}", warnings.join("; "));
        }

        if self.mode == EditMode::Draft {
            self.store.set(candidate.clone());
        }

        Ok(SaveReport {
            snapshot: candidate,
            warnings,
        })
    }

    /// Close the form without saving, returning what the store now holds.
    pub fn cancel(self) -> TimingsSnapshot {
        self.store.get()
    }
}
