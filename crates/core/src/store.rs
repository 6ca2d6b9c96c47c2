//! In-memory note store with lazy expiry and per-note checklist locking.
//!
//! Membership (add, delete, purge) goes through a [`DashMap`]. Each note's
//! checklist sits behind its own [`Mutex`], so checklist mutations on one
//! note never wait on another note. Immutable note fields live outside the
//! lock and can be read during a purge without touching any note mutex.
//!
//! Expired notes are removed when [`NoteStore::get_all`] runs; nothing else
//! reclaims them unless a caller drives [`NoteStore::purge_expired`]
//! periodically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::model::{Checklist, NewChecklistItem, Note};
use crate::types::{new_id, NoteId, Timestamp};

/// Default retention window in seconds (10 minutes).
pub const DEFAULT_RETENTION_SECS: i64 = 600;

/// Store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Seconds a note lives after creation. Non-positive disables expiry.
    pub retention_secs: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            retention_secs: DEFAULT_RETENTION_SECS,
        }
    }
}

impl StoreConfig {
    /// The retention window, or `None` when expiry is disabled.
    pub fn retention(&self) -> Option<chrono::Duration> {
        (self.retention_secs > 0).then(|| chrono::Duration::seconds(self.retention_secs))
    }
}

struct NoteEntry {
    id: NoteId,
    created_at: Timestamp,
    /// Insertion sequence; breaks ties between equal `created_at` values.
    seq: u64,
    text: String,
    checklist: Mutex<Option<Checklist>>,
}

impl NoteEntry {
    fn snapshot(&self) -> Note {
        Note {
            id: self.id.clone(),
            created_at: self.created_at,
            text: self.text.clone(),
            checklist: self.checklist.lock().clone(),
        }
    }
}

/// Thread-safe in-memory note store.
///
/// Designed to be wrapped in `Arc` and shared across request handlers.
pub struct NoteStore {
    config: StoreConfig,
    clock: Arc<dyn Clock>,
    entries: DashMap<NoteId, Arc<NoteEntry>>,
    next_seq: AtomicU64,
}

impl NoteStore {
    /// Create an empty store using wall-clock time.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an empty store with a custom time source.
    pub fn with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            entries: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Number of notes currently held, including any not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a note. A non-empty `checklist_items` attaches a checklist
    /// stamped with the creation time.
    pub fn add(&self, text: impl Into<String>, checklist_items: Vec<NewChecklistItem>) -> Note {
        let created_at = self.clock.now();
        let checklist =
            (!checklist_items.is_empty()).then(|| Checklist::from_items(checklist_items, created_at));

        let entry = Arc::new(NoteEntry {
            id: new_id(),
            created_at,
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            text: text.into(),
            checklist: Mutex::new(checklist),
        });
        let note = entry.snapshot();
        self.entries.insert(entry.id.clone(), entry);

        tracing::debug!(note_id = %note.id, "Note added");
        note
    }

    /// Remove a note. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Purge expired notes, then return the rest ordered by creation time.
    pub fn get_all(&self) -> Vec<Note> {
        self.purge_expired();

        let mut entries: Vec<Arc<NoteEntry>> = self
            .entries
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        entries.sort_by_key(|entry| (entry.created_at, entry.seq));

        entries.iter().map(|entry| entry.snapshot()).collect()
    }

    /// Remove every note created at or before `now - retention`.
    ///
    /// Returns the number of notes removed. A no-op when expiry is disabled.
    pub fn purge_expired(&self) -> usize {
        let Some(retention) = self.config.retention() else {
            return 0;
        };
        let cutoff = self.clock.now() - retention;

        let mut purged = 0;
        self.entries.retain(|_, entry| {
            let keep = entry.created_at > cutoff;
            if !keep {
                purged += 1;
            }
            keep
        });

        if purged > 0 {
            tracing::info!(purged, "Expired notes purged");
        }
        purged
    }

    /// Replace the note's checklist wholesale with fresh items.
    pub fn set_checklist(
        &self,
        note_id: &str,
        items: Vec<NewChecklistItem>,
    ) -> Result<Note, CoreError> {
        let entry = self.entry(note_id)?;
        let now = self.clock.now();
        {
            let mut checklist = entry.checklist.lock();
            let mut replacement = Checklist::from_items(items, now);
            // updated_at stays monotonic across replacement.
            if let Some(prev) = checklist.as_ref().and_then(|c| c.updated_at) {
                replacement.touch(prev);
            }
            *checklist = Some(replacement);
        }

        tracing::debug!(note_id, "Checklist replaced");
        Ok(entry.snapshot())
    }

    /// Read the note's checklist.
    ///
    /// A missing note and a note without a checklist both yield
    /// [`CoreError::NotFound`]; the `entity` field tells them apart.
    pub fn get_checklist(&self, note_id: &str) -> Result<Checklist, CoreError> {
        let entry = self.entry(note_id)?;
        let checklist = entry.checklist.lock().clone();
        checklist.ok_or_else(|| CoreError::not_found("Checklist", note_id))
    }

    /// Detach the note's checklist. `false` only when the note is missing.
    pub fn delete_checklist(&self, note_id: &str) -> bool {
        let Ok(entry) = self.entry(note_id) else {
            return false;
        };
        *entry.checklist.lock() = None;
        true
    }

    /// Append an item, creating an empty checklist first if needed.
    pub fn add_checklist_item(
        &self,
        note_id: &str,
        text: impl Into<String>,
    ) -> Result<Checklist, CoreError> {
        let entry = self.entry(note_id)?;
        let now = self.clock.now();

        let mut guard = entry.checklist.lock();
        let checklist = guard.get_or_insert_with(Checklist::default);
        let item_id = checklist.push_item(text, now).id.clone();

        tracing::debug!(note_id, item_id = %item_id, "Checklist item added");
        Ok(checklist.clone())
    }

    /// Apply a partial update to one item.
    ///
    /// `updated_at` is refreshed only if `text` or `done` was supplied.
    pub fn update_checklist_item(
        &self,
        note_id: &str,
        item_id: &str,
        text: Option<String>,
        done: Option<bool>,
    ) -> Result<Checklist, CoreError> {
        let entry = self.entry(note_id)?;
        let now = self.clock.now();

        let mut guard = entry.checklist.lock();
        let checklist = guard
            .as_mut()
            .ok_or_else(|| CoreError::not_found("Checklist", note_id))?;
        let item = checklist
            .item_mut(item_id)
            .ok_or_else(|| CoreError::not_found("ChecklistItem", item_id))?;

        let mut changed = false;
        if let Some(text) = text {
            item.text = text;
            changed = true;
        }
        if let Some(done) = done {
            item.done = done;
            changed = true;
        }
        if changed {
            checklist.touch(now);
            tracing::debug!(note_id, item_id, "Checklist item updated");
        }

        Ok(checklist.clone())
    }

    /// Remove one item. `false` when the note, checklist, or item is missing.
    pub fn delete_checklist_item(&self, note_id: &str, item_id: &str) -> bool {
        self.remove_checklist_item(note_id, item_id).is_ok()
    }

    /// Like [`delete_checklist_item`](Self::delete_checklist_item), but the
    /// error names whichever of note, checklist, or item was missing.
    pub fn remove_checklist_item(&self, note_id: &str, item_id: &str) -> Result<(), CoreError> {
        let entry = self.entry(note_id)?;
        let now = self.clock.now();

        let mut guard = entry.checklist.lock();
        let checklist = guard
            .as_mut()
            .ok_or_else(|| CoreError::not_found("Checklist", note_id))?;
        if !checklist.remove_item(item_id, now) {
            return Err(CoreError::not_found("ChecklistItem", item_id));
        }

        tracing::debug!(note_id, item_id, "Checklist item removed");
        Ok(())
    }

    /// Clone the entry handle out of the map so the shard lock is released
    /// before the per-note mutex is taken.
    fn entry(&self, note_id: &str) -> Result<Arc<NoteEntry>, CoreError> {
        self.entries
            .get(note_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| CoreError::not_found("Note", note_id))
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
