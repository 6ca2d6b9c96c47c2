//! Note, checklist, and checklist item types.
//!
//! Serialized with camelCase field names (`createdAt`, `updatedAt`). An
//! absent checklist or update timestamp is `None` and serializes as `null`.

use serde::{Deserialize, Serialize};

use crate::types::{new_id, NoteId, Timestamp};

/// A timestamped text record with an optional checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub created_at: Timestamp,
    pub text: String,
    pub checklist: Option<Checklist>,
}

/// Ordered list of items attached to a note.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub items: Vec<ChecklistItem>,
    pub updated_at: Option<Timestamp>,
}

/// A single text + done-flag entry within a checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub done: bool,
}

/// Input for building a checklist item. The id is always generated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewChecklistItem {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl From<&str> for NewChecklistItem {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            done: false,
        }
    }
}

impl From<String> for NewChecklistItem {
    fn from(text: String) -> Self {
        Self { text, done: false }
    }
}

impl ChecklistItem {
    /// Create an item with a fresh id.
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            done,
        }
    }
}

impl Checklist {
    /// Build a checklist from input items, stamping `updated_at` with `now`.
    pub fn from_items(items: Vec<NewChecklistItem>, now: Timestamp) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| ChecklistItem::new(item.text, item.done))
                .collect(),
            updated_at: Some(now),
        }
    }

    /// Record a mutation at `now`. Never moves `updated_at` backwards.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = Some(match self.updated_at {
            Some(prev) if prev > now => prev,
            _ => now,
        });
    }

    /// Append a new item and return a reference to it.
    pub fn push_item(&mut self, text: impl Into<String>, now: Timestamp) -> &ChecklistItem {
        self.items.push(ChecklistItem::new(text, false));
        self.touch(now);
        &self.items[self.items.len() - 1]
    }

    /// Look up an item by id for mutation.
    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut ChecklistItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Remove an item by id, preserving the order of the rest.
    ///
    /// Returns `true` if an item was removed.
    pub fn remove_item(&mut self, item_id: &str, now: Timestamp) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        let removed = self.items.len() != before;
        if removed {
            self.touch(now);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    #[test]
    fn test_from_items_generates_distinct_ids() {
        let now = Utc::now();
        let checklist = Checklist::from_items(
            vec!["passport".into(), NewChecklistItem { text: "tickets".into(), done: true }],
            now,
        );

        assert_eq!(checklist.items.len(), 2);
        assert_eq!(checklist.items[0].text, "passport");
        assert!(!checklist.items[0].done);
        assert_eq!(checklist.items[1].text, "tickets");
        assert!(checklist.items[1].done);
        assert_ne!(checklist.items[0].id, checklist.items[1].id);
        assert!(!checklist.items[0].id.is_empty());
        assert_eq!(checklist.updated_at, Some(now));
    }

    #[test]
    fn test_touch_never_moves_backwards() {
        let now = Utc::now();
        let mut checklist = Checklist::default();
        assert_eq!(checklist.updated_at, None);

        checklist.touch(now);
        checklist.touch(now - Duration::seconds(5));
        assert_eq!(checklist.updated_at, Some(now));

        let later = now + Duration::seconds(1);
        checklist.touch(later);
        assert_eq!(checklist.updated_at, Some(later));
    }

    #[test]
    fn test_remove_missing_item_leaves_timestamp() {
        let now = Utc::now();
        let mut checklist = Checklist::from_items(vec!["a".into()], now);

        assert!(!checklist.remove_item("missing", now + Duration::seconds(1)));
        assert_eq!(checklist.items.len(), 1);
        assert_eq!(checklist.updated_at, Some(now));
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: "n1".into(),
            created_at: Utc::now(),
            text: "hello".into(),
            checklist: None,
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "n1");
        assert!(json["createdAt"].is_string());
        assert!(json["checklist"].is_null());
    }

    #[test]
    fn test_new_item_done_defaults_to_false() {
        let item: NewChecklistItem = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
        assert_eq!(item, NewChecklistItem::from("x"));
    }
}
