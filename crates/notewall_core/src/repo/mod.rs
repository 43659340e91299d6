//! Persistence layer for the note collection.
//!
//! # Responsibility
//! - Define the key-value slot contract the note store writes through.
//! - Keep SQLite and JSON details out of the page/model layers.
//!
//! # Invariants
//! - The whole collection lives in one slot as a JSON array.
//! - Loading never fails the caller: unreadable slots load as empty.

pub mod note_store;
pub mod slot_repo;
