//! Note record model.
//!
//! # Responsibility
//! - Define the canonical note record persisted in the storage slot.
//! - Provide the fixed color palette and random color assignment.
//!
//! # Invariants
//! - `id` is a creation timestamp in epoch milliseconds.
//! - `text` must not be blank for a saved note.
//! - `color` is always one of the four palette values.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable note identifier (creation time in epoch milliseconds).
pub type NoteId = i64;

/// Label shown for notes saved without a title.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Color tag for a note card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    Blue,
    Green,
    Purple,
    Orange,
}

impl NoteColor {
    /// Palette in menu order.
    pub const ALL: [NoteColor; 4] = [
        NoteColor::Blue,
        NoteColor::Green,
        NoteColor::Purple,
        NoteColor::Orange,
    ];

    /// Returns the lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Parses a wire name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "purple" => Some(Self::Purple),
            "orange" => Some(Self::Orange),
            _ => None,
        }
    }

    /// Picks a palette color using the thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// Picks a palette color using the provided generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl Display for NoteColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for a note record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Text is empty or whitespace only.
    BlankText,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankText => write!(f, "note text must not be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// Persisted note record.
///
/// Field names and order match the stored JSON shape:
/// `{"id":..,"title":..,"text":..,"color":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
    pub color: NoteColor,
}

impl Note {
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        text: impl Into<String>,
        color: NoteColor,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            color,
        }
    }

    /// Checks record invariants that hold for every saved note.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if is_blank(&self.text) {
            return Err(NoteValidationError::BlankText);
        }
        Ok(())
    }

    /// Title used by list rendering; blank titles fall back to `Untitled`.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED_LABEL
        } else {
            self.title.as_str()
        }
    }
}

/// Returns whether `text` has no visible content.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Current wall-clock time in epoch milliseconds, used to mint note ids.
pub fn now_epoch_ms() -> NoteId {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| NoteId::try_from(elapsed.as_millis()).unwrap_or(NoteId::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{is_blank, Note, NoteColor, NoteValidationError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn color_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&NoteColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        let parsed: NoteColor = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(parsed, NoteColor::Orange);
    }

    #[test]
    fn unknown_color_is_rejected_on_decode() {
        assert!(serde_json::from_str::<NoteColor>("\"red\"").is_err());
        assert_eq!(NoteColor::parse(" GREEN "), Some(NoteColor::Green));
        assert_eq!(NoteColor::parse("red"), None);
    }

    #[test]
    fn random_color_stays_in_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            assert!(NoteColor::ALL.contains(&NoteColor::random_with(&mut rng)));
        }
    }

    #[test]
    fn note_json_matches_storage_shape() {
        let note = Note::new(1_700_000_000_000, "Groceries", "milk", NoteColor::Blue);
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"id":1700000000000,"title":"Groceries","text":"milk","color":"blue"}"#
        );
    }

    #[test]
    fn validate_rejects_whitespace_text() {
        let note = Note::new(1, "t", " \n\t", NoteColor::Green);
        assert_eq!(note.validate(), Err(NoteValidationError::BlankText));
        assert!(is_blank(""));
    }

    #[test]
    fn display_title_falls_back_to_untitled() {
        let note = Note::new(1, "  ", "body", NoteColor::Green);
        assert_eq!(note.display_title(), "Untitled");
    }
}
