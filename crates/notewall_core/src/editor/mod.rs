//! Full-screen note editor state.
//!
//! # Responsibility
//! - Hold the title/text draft for one note.
//! - Turn a valid draft into a complete note record on save.
//!
//! # Invariants
//! - Blank draft text never produces a record; the editor stays open.
//! - Editing reuses the backing note id; creating mints a new one.
//! - Color follows `ColorPolicy`; the default rerolls on every save.

use crate::model::note::{is_blank, now_epoch_ms, Note, NoteColor, NoteId};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// How the editor assigns color when saving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Pick a random palette color on every save, including edits.
    #[default]
    Reroll,
    /// Random color for new notes; edits keep the existing color.
    PreserveOnEdit,
}

/// Editor save failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorError {
    /// Draft text is empty or whitespace only.
    BlankText,
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "cannot save a note with blank text"),
        }
    }
}

impl Error for EditorError {}

/// Whether the editor is backed by an existing note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Creating,
    Editing(Note),
}

/// Draft state for the full note editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEditor {
    mode: EditorMode,
    title: String,
    text: String,
    color_policy: ColorPolicy,
}

impl NoteEditor {
    /// Opens the editor, seeding the draft from `note` or leaving it blank.
    pub fn open(note: Option<Note>, color_policy: ColorPolicy) -> Self {
        match note {
            Some(note) => Self {
                title: note.title.clone(),
                text: note.text.clone(),
                mode: EditorMode::Editing(note),
                color_policy,
            },
            None => Self {
                mode: EditorMode::Creating,
                title: String::new(),
                text: String::new(),
                color_policy,
            },
        }
    }

    pub fn creating(color_policy: ColorPolicy) -> Self {
        Self::open(None, color_policy)
    }

    pub fn editing(note: Note, color_policy: ColorPolicy) -> Self {
        Self::open(Some(note), color_policy)
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// The note being edited, if any.
    pub fn backing_note(&self) -> Option<&Note> {
        match &self.mode {
            EditorMode::Editing(note) => Some(note),
            EditorMode::Creating => None,
        }
    }

    pub fn backing_id(&self) -> Option<NoteId> {
        self.backing_note().map(|note| note.id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether `save` would currently succeed.
    pub fn can_save(&self) -> bool {
        !is_blank(&self.text)
    }

    /// Builds the note record for the current draft.
    ///
    /// # Errors
    /// - `BlankText` when the draft text is whitespace only.
    pub fn save(&self) -> Result<Note, EditorError> {
        self.save_with(&mut rand::rng(), now_epoch_ms())
    }

    /// Same as [`save`](Self::save) with an explicit generator and clock.
    pub fn save_with<R: Rng + ?Sized>(&self, rng: &mut R, now_ms: NoteId) -> Result<Note, EditorError> {
        if !self.can_save() {
            return Err(EditorError::BlankText);
        }

        let rolled = NoteColor::random_with(rng);
        let (id, color) = match &self.mode {
            EditorMode::Creating => (now_ms, rolled),
            EditorMode::Editing(original) => {
                let color = match self.color_policy {
                    ColorPolicy::Reroll => rolled,
                    ColorPolicy::PreserveOnEdit => original.color,
                };
                if color != original.color {
                    debug!(
                        "event=color_rerolled module=editor status=ok note_id={} from={} to={}",
                        original.id, original.color, color
                    );
                }
                (original.id, color)
            }
        };

        Ok(Note::new(id, self.title.clone(), self.text.clone(), color))
    }

    /// Discards the draft.
    pub fn cancel(self) {
        debug!(
            "event=editor_cancel module=editor status=ok editing={}",
            self.is_editing()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorPolicy, EditorError, NoteEditor};
    use crate::model::note::{Note, NoteColor};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn open_seeds_draft_from_backing_note() {
        let note = Note::new(11, "Trip", "pack bags", NoteColor::Blue);
        let editor = NoteEditor::editing(note.clone(), ColorPolicy::Reroll);
        assert_eq!(editor.title(), "Trip");
        assert_eq!(editor.text(), "pack bags");
        assert_eq!(editor.backing_note(), Some(&note));
    }

    #[test]
    fn creating_starts_blank_and_rejects_blank_save() {
        let mut editor = NoteEditor::creating(ColorPolicy::Reroll);
        assert_eq!(editor.title(), "");
        assert_eq!(editor.save(), Err(EditorError::BlankText));
        editor.set_text("  \n ");
        assert_eq!(editor.save(), Err(EditorError::BlankText));
    }

    #[test]
    fn create_save_mints_id_from_clock() {
        let mut editor = NoteEditor::creating(ColorPolicy::Reroll);
        editor.set_title("t");
        editor.set_text("body");
        let mut rng = StdRng::seed_from_u64(3);
        let note = editor.save_with(&mut rng, 1_234).unwrap();
        assert_eq!(note.id, 1_234);
        assert_eq!(note.title, "t");
        assert_eq!(note.text, "body");
    }

    #[test]
    fn edit_save_keeps_id_and_rerolls_color_by_default() {
        let original = Note::new(9, "a", "b", NoteColor::Orange);
        let mut editor = NoteEditor::editing(original, ColorPolicy::Reroll);
        editor.set_text("changed");

        let mut seen = Vec::new();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..64 {
            let note = editor.save_with(&mut rng, 500).unwrap();
            assert_eq!(note.id, 9);
            assert_eq!(note.text, "changed");
            seen.push(note.color);
        }
        assert!(seen.iter().any(|color| *color != NoteColor::Orange));
    }

    #[test]
    fn preserve_policy_keeps_existing_color() {
        let original = Note::new(9, "a", "b", NoteColor::Purple);
        let editor = NoteEditor::editing(original, ColorPolicy::PreserveOnEdit);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16 {
            assert_eq!(
                editor.save_with(&mut rng, 0).unwrap().color,
                NoteColor::Purple
            );
        }
    }
}
