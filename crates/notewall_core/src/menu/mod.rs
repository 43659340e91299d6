//! Right-click radial context menu state.
//!
//! # Responsibility
//! - Track the open/closed overlay, its anchor and target note.
//! - Navigate the two levels (root entries, color swatches).
//! - Turn clicks into menu outcomes; only color selection mutates notes.
//!
//! # Invariants
//! - Every `open` starts at `MenuLevel::Root`.
//! - Selecting a color or any root action closes the menu.
//! - Rename/duplicate/delete entries are presentational only.

pub mod radial;

use crate::model::note::{NoteColor, NoteId};
use radial::{wedges, RadialGeometry, RingHit, Wedge};

/// Screen position the menu was opened at, and the note it targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuAnchor {
    pub x: f64,
    pub y: f64,
    pub note_id: NoteId,
}

/// Navigation level of an open menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLevel {
    Root,
    Colors,
}

/// Entries on the root ring, in wedge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootEntry {
    Rename,
    Duplicate,
    ChangeColor,
    Delete,
}

impl RootEntry {
    pub const ALL: [RootEntry; 4] = [
        RootEntry::Rename,
        RootEntry::Duplicate,
        RootEntry::ChangeColor,
        RootEntry::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Duplicate => "Duplicate",
            Self::ChangeColor => "Change color",
            Self::Delete => "Delete",
        }
    }
}

/// Result of one menu interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Menu was not open; nothing happened.
    Ignored,
    Closed,
    Navigated(MenuLevel),
    ColorSelected { note_id: NoteId, color: NoteColor },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenMenu {
    anchor: MenuAnchor,
    level: MenuLevel,
}

/// Radial context menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMenu {
    state: Option<OpenMenu>,
    geometry: RadialGeometry,
}

impl ContextMenu {
    pub fn new(geometry: RadialGeometry) -> Self {
        Self {
            state: None,
            geometry,
        }
    }

    pub fn geometry(&self) -> &RadialGeometry {
        &self.geometry
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn anchor(&self) -> Option<MenuAnchor> {
        self.state.map(|state| state.anchor)
    }

    pub fn level(&self) -> Option<MenuLevel> {
        self.state.map(|state| state.level)
    }

    /// Opens (or re-anchors) the menu at root level.
    pub fn open(&mut self, x: f64, y: f64, note_id: NoteId) {
        self.state = Some(OpenMenu {
            anchor: MenuAnchor { x, y, note_id },
            level: MenuLevel::Root,
        });
    }

    pub fn close(&mut self) -> MenuOutcome {
        match self.state.take() {
            Some(_) => MenuOutcome::Closed,
            None => MenuOutcome::Ignored,
        }
    }

    /// Number of wedges on the current level.
    pub fn entry_count(&self) -> usize {
        match self.level() {
            Some(MenuLevel::Root) => RootEntry::ALL.len(),
            Some(MenuLevel::Colors) => NoteColor::ALL.len(),
            None => 0,
        }
    }

    /// Wedges for the current level, for rendering.
    pub fn wedges(&self) -> Vec<Wedge> {
        wedges(self.entry_count())
    }

    pub fn enter_colors(&mut self) -> MenuOutcome {
        self.navigate(MenuLevel::Colors)
    }

    pub fn back(&mut self) -> MenuOutcome {
        self.navigate(MenuLevel::Root)
    }

    /// Activates a root entry. Only `ChangeColor` does something beyond
    /// closing the menu.
    pub fn activate(&mut self, entry: RootEntry) -> MenuOutcome {
        match entry {
            RootEntry::ChangeColor => self.enter_colors(),
            RootEntry::Rename | RootEntry::Duplicate | RootEntry::Delete => self.close(),
        }
    }

    /// Picks a color for the target note and closes the menu.
    pub fn select_color(&mut self, color: NoteColor) -> MenuOutcome {
        match self.state.take() {
            Some(state) => MenuOutcome::ColorSelected {
                note_id: state.anchor.note_id,
                color,
            },
            None => MenuOutcome::Ignored,
        }
    }

    /// Handles a click at `(dx, dy)` relative to the anchor.
    ///
    /// Outside the ring closes the menu; the center hole goes back from the
    /// color level and closes from root.
    pub fn click(&mut self, dx: f64, dy: f64) -> MenuOutcome {
        let Some(level) = self.level() else {
            return MenuOutcome::Ignored;
        };

        match (self.geometry.hit_test(dx, dy, self.entry_count()), level) {
            (RingHit::Outside, _) | (RingHit::Hole, MenuLevel::Root) => self.close(),
            (RingHit::Hole, MenuLevel::Colors) => self.back(),
            (RingHit::Wedge(index), MenuLevel::Root) => self.activate(RootEntry::ALL[index]),
            (RingHit::Wedge(index), MenuLevel::Colors) => self.select_color(NoteColor::ALL[index]),
        }
    }

    fn navigate(&mut self, level: MenuLevel) -> MenuOutcome {
        match self.state.as_mut() {
            Some(state) => {
                state.level = level;
                MenuOutcome::Navigated(level)
            }
            None => MenuOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContextMenu, MenuLevel, MenuOutcome, RootEntry};
    use crate::model::note::NoteColor;

    #[test]
    fn reopen_resets_to_root() {
        let mut menu = ContextMenu::default();
        menu.open(10.0, 20.0, 1);
        assert_eq!(menu.enter_colors(), MenuOutcome::Navigated(MenuLevel::Colors));
        menu.close();
        menu.open(30.0, 40.0, 2);
        assert_eq!(menu.level(), Some(MenuLevel::Root));
        assert_eq!(menu.anchor().map(|anchor| anchor.note_id), Some(2));
    }

    #[test]
    fn decorative_entries_only_close() {
        for entry in [RootEntry::Rename, RootEntry::Duplicate, RootEntry::Delete] {
            let mut menu = ContextMenu::default();
            menu.open(0.0, 0.0, 5);
            assert_eq!(menu.activate(entry), MenuOutcome::Closed);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn select_color_reports_target_and_closes() {
        let mut menu = ContextMenu::default();
        menu.open(0.0, 0.0, 7);
        menu.activate(RootEntry::ChangeColor);
        assert_eq!(
            menu.select_color(NoteColor::Green),
            MenuOutcome::ColorSelected {
                note_id: 7,
                color: NoteColor::Green
            }
        );
        assert!(!menu.is_open());
        assert_eq!(menu.select_color(NoteColor::Blue), MenuOutcome::Ignored);
    }

    #[test]
    fn clicks_walk_both_levels() {
        let mut menu = ContextMenu::default();
        menu.open(100.0, 100.0, 3);

        // third root wedge (180..270) is "Change color"
        assert_eq!(
            menu.click(-60.0, 50.0),
            MenuOutcome::Navigated(MenuLevel::Colors)
        );
        assert_eq!(menu.click(0.0, 0.0), MenuOutcome::Navigated(MenuLevel::Root));
        menu.click(-60.0, 50.0);
        assert_eq!(
            menu.click(60.0, 50.0),
            MenuOutcome::ColorSelected {
                note_id: 3,
                color: NoteColor::Green
            }
        );
        assert_eq!(menu.click(0.0, 0.0), MenuOutcome::Ignored);
    }
}
