//! JSON note-array storage adapter.
//!
//! # Responsibility
//! - Encode the whole note collection into one storage slot.
//! - Decode it once at startup, failing closed on bad data.
//!
//! # Invariants
//! - An absent slot loads as an empty collection.
//! - A corrupt or unreadable slot loads as an empty collection and is logged.
//! - `save` always writes the full collection.

use crate::model::note_list::NoteList;
use crate::repo::slot_repo::{SlotRepository, StoreError, StoreResult};
use log::{debug, error, warn};

/// Default slot key holding the note array.
pub const DEFAULT_NOTES_KEY: &str = "notes";

/// Note collection persistence over a slot repository.
pub struct NoteStore<S: SlotRepository> {
    slots: S,
    key: String,
}

impl<S: SlotRepository> NoteStore<S> {
    /// Creates a store bound to the default `notes` slot.
    pub fn new(slots: S) -> Self {
        Self::with_key(slots, DEFAULT_NOTES_KEY)
    }

    pub fn with_key(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Loads the collection, surfacing read and decode failures.
    pub fn try_load(&self) -> StoreResult<NoteList> {
        match self.slots.read_slot(&self.key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
            None => Ok(NoteList::new()),
        }
    }

    /// Loads the collection, falling back to empty on any failure.
    pub fn load(&self) -> NoteList {
        match self.try_load() {
            Ok(notes) => {
                debug!(
                    "event=notes_load module=store status=ok key={} count={}",
                    self.key,
                    notes.len()
                );
                notes
            }
            Err(StoreError::Corrupt(err)) => {
                warn!(
                    "event=notes_load module=store status=corrupt key={} error={}",
                    self.key, err
                );
                NoteList::new()
            }
            Err(err) => {
                error!(
                    "event=notes_load module=store status=error key={} error={}",
                    self.key, err
                );
                NoteList::new()
            }
        }
    }

    /// Persists the full collection snapshot.
    pub fn save(&self, notes: &NoteList) -> StoreResult<()> {
        let encoded = serde_json::to_string(notes).map_err(StoreError::Encode)?;
        self.slots.write_slot(&self.key, &encoded)?;
        debug!(
            "event=notes_save module=store status=ok key={} count={}",
            self.key,
            notes.len()
        );
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::{Note, NoteColor};
    use crate::model::note_list::NoteList;
    use crate::repo::slot_repo::{InMemorySlotRepository, SlotRepository, StoreError};

    #[test]
    fn absent_slot_loads_empty() {
        let store = NoteStore::new(InMemorySlotRepository::new());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_slot_fails_closed() {
        let slots = InMemorySlotRepository::new();
        slots.write_slot("notes", "{not json").unwrap();
        let store = NoteStore::new(&slots);

        assert!(matches!(store.try_load(), Err(StoreError::Corrupt(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_color_value_counts_as_corrupt() {
        let slots = InMemorySlotRepository::new();
        slots
            .write_slot("notes", r#"[{"id":1,"title":"","text":"x","color":"red"}]"#)
            .unwrap();
        assert!(NoteStore::new(&slots).load().is_empty());
    }

    #[test]
    fn save_writes_plain_json_array() {
        let slots = InMemorySlotRepository::new();
        let store = NoteStore::with_key(&slots, "board");
        let notes = NoteList::from_notes(vec![Note::new(5, "t", "body", NoteColor::Green)]);

        store.save(&notes).unwrap();

        assert_eq!(
            slots.read_slot("board").unwrap().as_deref(),
            Some(r#"[{"id":5,"title":"t","text":"body","color":"green"}]"#)
        );
        assert_eq!(store.load(), notes);
    }
}
