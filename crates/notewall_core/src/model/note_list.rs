//! Ordered note collection.
//!
//! # Responsibility
//! - Hold notes in user-controlled order.
//! - Apply add/update/delete/reorder/recolor mutations.
//!
//! # Invariants
//! - Ids are unique; `add` mints a fresh id when the clock value is taken.
//! - `reorder` is a splice move: untouched notes keep their relative order.
//! - Mutations report whether the collection changed so the owner can
//!   re-persist exactly once per change.

use crate::model::note::{now_epoch_ms, Note, NoteColor, NoteId, NoteValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from note collection mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListError {
    /// Incoming record fails validation.
    Invalid(NoteValidationError),
    /// Replacement record carries a different id than the target.
    IdMismatch { expected: NoteId, actual: NoteId },
}

impl Display for NoteListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::IdMismatch { expected, actual } => write!(
                f,
                "replacement note id {actual} does not match target id {expected}"
            ),
        }
    }
}

impl Error for NoteListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::IdMismatch { .. } => None,
        }
    }
}

impl From<NoteValidationError> for NoteListError {
    fn from(value: NoteValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// User-ordered collection of notes.
///
/// Serialized transparently as a JSON array of note records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-persisted notes without re-validating them.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<NoteId> {
        self.notes.iter().map(|note| note.id).collect()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.position(id).is_some()
    }

    /// Owned copy of the current order, for observers and persistence.
    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn into_vec(self) -> Vec<Note> {
        self.notes
    }

    /// Appends a note stamped with the current time as its id.
    ///
    /// The id carried by `note` is ignored.
    ///
    /// # Errors
    /// - `Invalid(BlankText)` when the note text is blank.
    pub fn add(&mut self, note: Note) -> Result<NoteId, NoteListError> {
        self.add_at(note, now_epoch_ms())
    }

    /// Appends a note using `now_ms` as the preferred id.
    ///
    /// When `now_ms` is already taken the next id above the current maximum
    /// is used instead.
    pub fn add_at(&mut self, mut note: Note, now_ms: NoteId) -> Result<NoteId, NoteListError> {
        note.validate()?;
        note.id = self.next_free_id(now_ms);
        let id = note.id;
        self.notes.push(note);
        Ok(id)
    }

    /// Replaces the record matching `id`.
    ///
    /// Returns `Ok(false)` when no record matches.
    pub fn update(&mut self, id: NoteId, note: Note) -> Result<bool, NoteListError> {
        if note.id != id {
            return Err(NoteListError::IdMismatch {
                expected: id,
                actual: note.id,
            });
        }
        note.validate()?;

        match self.notes.iter_mut().find(|current| current.id == id) {
            Some(slot) => {
                *slot = note;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the record matching `id`; returns whether one was removed.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    /// Moves `dragged_id` into the slot `target_id` occupied before the move.
    ///
    /// No-op when the ids are equal or either is missing.
    pub fn reorder(&mut self, dragged_id: NoteId, target_id: NoteId) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged_id), self.position(target_id)) else {
            return false;
        };

        let dragged = self.notes.remove(from);
        self.notes.insert(to, dragged);
        true
    }

    /// Sets only the color of the record matching `id`.
    ///
    /// Returns whether a record matched.
    pub fn set_color(&mut self, id: NoteId, color: NoteColor) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.color = color;
                true
            }
            None => false,
        }
    }

    fn next_free_id(&self, preferred: NoteId) -> NoteId {
        if !self.contains(preferred) {
            return preferred;
        }
        self.notes
            .iter()
            .map(|note| note.id)
            .max()
            .map_or(preferred, |max| max.saturating_add(1))
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
