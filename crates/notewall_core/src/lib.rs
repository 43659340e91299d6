//! Core state and persistence for the notewall notes board.
//! Front-ends forward gestures to [`NotesPage`] and render its state.

pub mod config;
pub mod db;
pub mod editor;
pub mod logging;
pub mod menu;
pub mod model;
pub mod page;
pub mod repo;
pub mod route;

pub use config::{ConfigError, NotewallConfig};
pub use editor::{ColorPolicy, EditorError, EditorMode, NoteEditor};
pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use menu::radial::{RadialGeometry, RingHit, Wedge};
pub use menu::{ContextMenu, MenuAnchor, MenuLevel, MenuOutcome, RootEntry};
pub use model::note::{Note, NoteColor, NoteId, NoteValidationError};
pub use model::note_list::{NoteList, NoteListError};
pub use page::{DragSession, Gesture, NotesPage, PageError, PageOptions, PageResult, View};
pub use repo::note_store::{NoteStore, DEFAULT_NOTES_KEY};
pub use repo::slot_repo::{
    InMemorySlotRepository, SlotRepository, SqliteSlotRepository, StoreError, StoreResult,
};
pub use route::Route;

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
