//! Notes page composition root.
//!
//! # Responsibility
//! - Own the canonical note list, loaded once from the store.
//! - Route user gestures to list, editor, menu and drag state.
//! - Persist the full list after every change that touches it.
//!
//! # Invariants
//! - The editor view is active iff an editor draft exists.
//! - The drag session is cleared by every drop, including no-op drops.
//! - A persist happens only when the list actually changed.

mod drag;

pub use drag::DragSession;

use crate::editor::{ColorPolicy, EditorError, NoteEditor};
use crate::menu::radial::RadialGeometry;
use crate::menu::{ContextMenu, MenuOutcome, RootEntry};
use crate::model::note::{NoteColor, NoteId};
use crate::model::note_list::{NoteList, NoteListError};
use crate::repo::note_store::NoteStore;
use crate::repo::slot_repo::{SlotRepository, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which surface the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Editor,
}

/// Page-level knobs taken from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageOptions {
    pub color_policy: ColorPolicy,
    pub menu_geometry: RadialGeometry,
}

/// Errors surfaced by page gestures.
#[derive(Debug)]
pub enum PageError {
    /// Persisting the list failed; the in-memory list keeps the change.
    Store(StoreError),
    /// Editor save was refused; the editor stays open.
    Editor(EditorError),
    /// List mutation was refused.
    List(NoteListError),
    /// Gesture targets a note that is not in the list.
    NoteNotFound(NoteId),
    /// Gesture needs the editor view.
    EditorClosed,
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Editor(err) => write!(f, "{err}"),
            Self::List(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::EditorClosed => write!(f, "editor is not open"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Editor(err) => Some(err),
            Self::List(err) => Some(err),
            Self::NoteNotFound(_) | Self::EditorClosed => None,
        }
    }
}

impl From<StoreError> for PageError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<EditorError> for PageError {
    fn from(value: EditorError) -> Self {
        Self::Editor(value)
    }
}

impl From<NoteListError> for PageError {
    fn from(value: NoteListError) -> Self {
        Self::List(value)
    }
}

pub type PageResult<T> = Result<T, PageError>;

/// One user gesture forwarded by a front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    OpenNewNote,
    OpenEditor(NoteId),
    EditTitle(String),
    EditText(String),
    Save,
    Cancel,
    Delete(NoteId),
    DragStart(NoteId),
    DragOver(NoteId),
    Drop(NoteId),
    DragEnd,
    ContextMenu { x: f64, y: f64, note_id: NoteId },
    ClickOutside,
    MenuClick { dx: f64, dy: f64 },
    MenuActivate(RootEntry),
    MenuBack,
    MenuSelectColor(NoteColor),
}

/// Notes page state over a slot repository.
pub struct NotesPage<S: SlotRepository> {
    store: NoteStore<S>,
    notes: NoteList,
    editor: Option<NoteEditor>,
    menu: ContextMenu,
    drag: DragSession,
    color_policy: ColorPolicy,
}

impl<S: SlotRepository> NotesPage<S> {
    /// Loads the list from `store` and starts on the list view.
    pub fn load(store: NoteStore<S>, options: PageOptions) -> Self {
        let notes = store.load();
        info!(
            "event=page_load module=page status=ok key={} count={}",
            store.key(),
            notes.len()
        );
        Self {
            store,
            notes,
            editor: None,
            menu: ContextMenu::new(options.menu_geometry),
            drag: DragSession::default(),
            color_policy: options.color_policy,
        }
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }

    pub fn view(&self) -> View {
        if self.editor.is_some() {
            View::Editor
        } else {
            View::List
        }
    }

    pub fn editor(&self) -> Option<&NoteEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut NoteEditor> {
        self.editor.as_mut()
    }

    pub fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Applies one gesture; returns whether the note list changed.
    pub fn handle(&mut self, gesture: Gesture) -> PageResult<bool> {
        match gesture {
            Gesture::OpenNewNote => {
                self.open_new_note();
                Ok(false)
            }
            Gesture::OpenEditor(id) => self.open_editor(id).map(|()| false),
            Gesture::EditTitle(title) => {
                self.editor_mut()
                    .ok_or(PageError::EditorClosed)?
                    .set_title(title);
                Ok(false)
            }
            Gesture::EditText(text) => {
                self.editor_mut()
                    .ok_or(PageError::EditorClosed)?
                    .set_text(text);
                Ok(false)
            }
            Gesture::Save => self.save_editor().map(|_| true),
            Gesture::Cancel => {
                self.cancel_editor();
                Ok(false)
            }
            Gesture::Delete(id) => self.delete_note(id),
            Gesture::DragStart(id) => {
                self.drag_start(id);
                Ok(false)
            }
            Gesture::DragOver(id) => {
                self.drag_over(id);
                Ok(false)
            }
            Gesture::Drop(id) => self.drop_on(id),
            Gesture::DragEnd => {
                self.drag_end();
                Ok(false)
            }
            Gesture::ContextMenu { x, y, note_id } => {
                self.context_menu(x, y, note_id);
                Ok(false)
            }
            Gesture::ClickOutside => {
                self.click_outside();
                Ok(false)
            }
            Gesture::MenuClick { dx, dy } => self.menu_click(dx, dy),
            Gesture::MenuActivate(entry) => self.menu_activate(entry),
            Gesture::MenuBack => {
                self.menu_back();
                Ok(false)
            }
            Gesture::MenuSelectColor(color) => self.menu_select_color(color),
        }
    }

    /// Switches to the editor with a blank draft.
    pub fn open_new_note(&mut self) {
        self.menu.close();
        self.editor = Some(NoteEditor::creating(self.color_policy));
        debug!("event=editor_open module=page status=ok mode=create");
    }

    /// Switches to the editor seeded from note `id`.
    pub fn open_editor(&mut self, id: NoteId) -> PageResult<()> {
        let note = self.notes.get(id).cloned().ok_or(PageError::NoteNotFound(id))?;
        self.menu.close();
        self.editor = Some(NoteEditor::editing(note, self.color_policy));
        debug!("event=editor_open module=page status=ok mode=edit note_id={id}");
        Ok(())
    }

    /// Saves the draft into the list and returns to the list view.
    ///
    /// # Errors
    /// - `Editor(BlankText)` when the draft is blank; the editor stays open
    ///   and the list is untouched.
    /// - `NoteNotFound` when the edited note was deleted meanwhile; the
    ///   editor stays open and nothing is persisted.
    /// - `Store` when persisting fails after the list was updated.
    pub fn save_editor(&mut self) -> PageResult<NoteId> {
        let editor = self.editor.as_ref().ok_or(PageError::EditorClosed)?;
        let note = editor.save()?;
        let id = match editor.backing_id() {
            Some(id) => {
                if !self.notes.update(id, note)? {
                    // Note vanished while the editor was open: keep the draft.
                    return Err(PageError::NoteNotFound(id));
                }
                id
            }
            None => self.notes.add(note)?,
        };
        self.editor = None;
        self.persist("note_save", id)?;
        Ok(id)
    }

    /// Drops the draft and returns to the list view.
    pub fn cancel_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            editor.cancel();
        }
    }

    pub fn delete_note(&mut self, id: NoteId) -> PageResult<bool> {
        if !self.notes.delete(id) {
            return Ok(false);
        }
        self.persist("note_delete", id)?;
        Ok(true)
    }

    /// Starts dragging `id`; ignored for unknown notes.
    pub fn drag_start(&mut self, id: NoteId) -> bool {
        if !self.notes.contains(id) {
            return false;
        }
        self.drag.start(id);
        true
    }

    /// Whether a drop on `target_id` would be accepted: a drag is active and
    /// the target is a listed note.
    pub fn drag_over(&self, target_id: NoteId) -> bool {
        self.drag.dragging().is_some() && self.notes.contains(target_id)
    }

    /// Drops the dragged note onto `target_id`, ending the drag session.
    pub fn drop_on(&mut self, target_id: NoteId) -> PageResult<bool> {
        let Some(dragged_id) = self.drag.take() else {
            return Ok(false);
        };
        if !self.notes.reorder(dragged_id, target_id) {
            debug!(
                "event=note_reorder module=page status=noop dragged_id={dragged_id} target_id={target_id}"
            );
            return Ok(false);
        }
        self.persist("note_reorder", dragged_id)?;
        Ok(true)
    }

    /// Abandons a drag that ended outside any note.
    pub fn drag_end(&mut self) {
        self.drag.take();
    }

    /// Opens the context menu for `note_id` at a screen position.
    pub fn context_menu(&mut self, x: f64, y: f64, note_id: NoteId) -> bool {
        if self.view() != View::List || !self.notes.contains(note_id) {
            return false;
        }
        self.menu.open(x, y, note_id);
        true
    }

    pub fn click_outside(&mut self) {
        self.menu.close();
    }

    /// Shows the color ring of an open menu.
    pub fn menu_enter_colors(&mut self) -> MenuOutcome {
        self.menu.enter_colors()
    }

    /// Returns an open menu to its root ring.
    pub fn menu_back(&mut self) -> MenuOutcome {
        self.menu.back()
    }

    pub fn menu_activate(&mut self, entry: RootEntry) -> PageResult<bool> {
        let outcome = self.menu.activate(entry);
        self.apply_menu_outcome(outcome)
    }

    pub fn menu_click(&mut self, dx: f64, dy: f64) -> PageResult<bool> {
        let outcome = self.menu.click(dx, dy);
        self.apply_menu_outcome(outcome)
    }

    pub fn menu_select_color(&mut self, color: NoteColor) -> PageResult<bool> {
        let outcome = self.menu.select_color(color);
        self.apply_menu_outcome(outcome)
    }

    /// Recolors a note directly, as the color menu does.
    pub fn set_color(&mut self, id: NoteId, color: NoteColor) -> PageResult<bool> {
        if !self.notes.set_color(id, color) {
            return Ok(false);
        }
        self.persist("note_color", id)?;
        Ok(true)
    }

    fn apply_menu_outcome(&mut self, outcome: MenuOutcome) -> PageResult<bool> {
        match outcome {
            MenuOutcome::ColorSelected { note_id, color } => self.set_color(note_id, color),
            MenuOutcome::Ignored | MenuOutcome::Closed | MenuOutcome::Navigated(_) => Ok(false),
        }
    }

    fn persist(&self, event: &'static str, note_id: NoteId) -> PageResult<()> {
        self.store.save(&self.notes)?;
        info!(
            "event={event} module=page status=ok note_id={note_id} count={}",
            self.notes.len()
        );
        Ok(())
    }
}
