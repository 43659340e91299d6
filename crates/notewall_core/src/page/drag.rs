//! Drag-to-reorder session state.

use crate::model::note::NoteId;

/// Which note is currently being dragged.
///
/// Set on drag start; only the drop handler consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    dragging: Option<NoteId>,
}

impl DragSession {
    pub fn start(&mut self, note_id: NoteId) {
        self.dragging = Some(note_id);
    }

    pub fn dragging(&self) -> Option<NoteId> {
        self.dragging
    }

    /// Whether `note_id` should render with the dragging style.
    pub fn is_dragging(&self, note_id: NoteId) -> bool {
        self.dragging == Some(note_id)
    }

    /// Ends the session, returning the dragged id.
    pub fn take(&mut self) -> Option<NoteId> {
        self.dragging.take()
    }
}
