use notewall_core::db::{open_db, open_db_in_memory};
use notewall_core::{
    Note, NoteColor, NoteList, NoteStore, SlotRepository, SqliteSlotRepository, StoreError,
};

fn sample() -> NoteList {
    NoteList::from_notes(vec![
        Note::new(1, "a", "first", NoteColor::Blue),
        Note::new(2, "", "second", NoteColor::Green),
        Note::new(3, "c", "third\nline", NoteColor::Purple),
    ])
}

#[test]
fn saved_snapshot_reloads_equal_after_each_mutation() {
    let conn = open_db_in_memory().unwrap();
    let store = NoteStore::new(SqliteSlotRepository::try_new(&conn).unwrap());
    let mut notes = sample();

    store.save(&notes).unwrap();
    assert_eq!(store.try_load().unwrap(), notes);

    notes.reorder(1, 3);
    store.save(&notes).unwrap();
    assert_eq!(store.try_load().unwrap(), notes);

    notes.set_color(2, NoteColor::Orange);
    store.save(&notes).unwrap();
    assert_eq!(store.try_load().unwrap(), notes);

    notes.delete(3);
    store.save(&notes).unwrap();
    assert_eq!(store.try_load().unwrap().ids(), vec![2, 1]);
}

#[test]
fn notes_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    {
        let conn = open_db(&path).unwrap();
        let store = NoteStore::new(SqliteSlotRepository::try_new(&conn).unwrap());
        store.save(&sample()).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = NoteStore::new(SqliteSlotRepository::try_new(&conn).unwrap());
    assert_eq!(store.load(), sample());
}

#[test]
fn corrupt_sqlite_slot_loads_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotRepository::try_new(&conn).unwrap();
    slots.write_slot("notes", "[{\"id\":").unwrap();

    let store = NoteStore::new(slots);
    assert!(matches!(store.try_load(), Err(StoreError::Corrupt(_))));
    assert!(store.load().is_empty());
}

#[test]
fn custom_key_is_isolated_from_default_slot() {
    let conn = open_db_in_memory().unwrap();
    let default_store = NoteStore::new(SqliteSlotRepository::try_new(&conn).unwrap());
    let board_store =
        NoteStore::with_key(SqliteSlotRepository::try_new(&conn).unwrap(), "board");

    board_store.save(&sample()).unwrap();

    assert!(default_store.load().is_empty());
    assert_eq!(board_store.load().len(), 3);
}
