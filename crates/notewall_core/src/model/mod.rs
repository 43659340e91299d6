//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its color tag.
//! - Own the ordered, user-arranged note collection.
//!
//! # Invariants
//! - Note ids are unique within one collection.
//! - Every stored note has non-blank text.
//! - Collection order is user-controlled and never sorted implicitly.

pub mod note;
pub mod note_list;
