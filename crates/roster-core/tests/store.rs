//! Integration tests for the record store.

use roster_core::{CoreError, RecordStore, seed_records};
use roster_model::{Draft, Record, RecordId, RecordPatch};

fn ann() -> Draft {
    Draft {
        name: "Ann".to_string(),
        email: "a@b.c".to_string(),
        age: "22".to_string(),
        gender: "female".to_string(),
        status: "active".to_string(),
        date: "2022-03-03".to_string(),
        ..Draft::default()
    }
}

fn seeded() -> RecordStore {
    RecordStore::from_records(seed_records()).expect("seed ids are unique")
}

#[test]
fn create_appends_one_record_with_fresh_id() {
    let mut store = seeded();
    let existing: Vec<RecordId> = store.records().iter().map(|r| r.id).collect();

    let created = store.create(&ann()).expect("fresh id").clone();

    assert_eq!(store.len(), 3);
    assert!(!existing.contains(&created.id));
    assert!(!created.is_checked);
    assert_eq!(created.name, "Ann");
    assert_eq!(store.records().last(), Some(&created));
}

#[test]
fn update_merges_present_fields_only() {
    let mut store = seeded();
    let patch = RecordPatch {
        email: Some("johnny@example.com".to_string()),
        is_checked: Some(false),
        ..RecordPatch::new()
    };
    assert!(store.update(RecordId::new(1), patch));

    let record = store.get(RecordId::new(1)).expect("record 1");
    assert_eq!(record.email, "johnny@example.com");
    assert!(!record.is_checked);
    assert_eq!(record.name, "John Doe");
    assert_eq!(record.age, "25");
}

#[test]
fn update_of_missing_id_changes_nothing() {
    let mut store = seeded();
    let before = store.records().to_vec();
    assert!(!store.update(RecordId::new(99), RecordPatch::from(ann())));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn delete_of_missing_id_changes_nothing() {
    let mut store = seeded();
    let before = store.records().to_vec();
    assert!(store.delete(RecordId::new(99)).is_none());
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn delete_keeps_order_of_the_rest() {
    let mut store = seeded();
    store.create(&ann()).expect("fresh id");
    let removed = store.delete(RecordId::new(2)).expect("record 2");
    assert_eq!(removed.name, "Jane Doe");
    let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Ann"]);
}

#[test]
fn duplicate_copies_everything_but_the_id() {
    let mut store = seeded();
    let source = store.get(RecordId::new(1)).cloned().expect("record 1");

    let copy = store
        .duplicate(RecordId::new(1))
        .expect("fresh id")
        .cloned()
        .expect("copy");

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.with_id(source.id), source);
    assert_eq!(store.len(), 3);
    assert_eq!(store.records().last(), Some(&copy));
}

#[test]
fn duplicate_of_missing_id_is_a_no_op() {
    let mut store = seeded();
    assert!(matches!(store.duplicate(RecordId::new(42)), Ok(None)));
    assert_eq!(store.len(), 2);
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let mut store = seeded();
    store.create(&ann()).expect("fresh id");
    store.duplicate(RecordId::new(1)).expect("fresh id");
    store.delete(RecordId::new(3));
    store.create(&ann()).expect("fresh id");
    store.duplicate(RecordId::new(4)).expect("fresh id");

    let mut ids: Vec<RecordId> = store.records().iter().map(|r| r.id).collect();
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[test]
fn last_id_is_handed_out_once() {
    let near_end = Record::from_draft(RecordId::new(u64::MAX - 1), &ann());
    let mut store = RecordStore::from_records(vec![near_end]).expect("unique ids");

    let last = store.create(&ann()).expect("one id left").id;
    assert_eq!(last, RecordId::new(u64::MAX));

    assert!(matches!(store.create(&ann()), Err(CoreError::IdsExhausted)));
    assert!(matches!(
        store.duplicate(RecordId::new(u64::MAX - 1)),
        Err(CoreError::IdsExhausted)
    ));
    assert_eq!(store.len(), 2);
    assert_ne!(store.records()[0].id, store.records()[1].id);
}

#[test]
fn seed_at_the_last_id_accepts_no_new_records() {
    let last = Record::from_draft(RecordId::new(u64::MAX), &ann());
    let mut store = RecordStore::from_records(vec![last]).expect("unique ids");
    assert!(matches!(store.create(&ann()), Err(CoreError::IdsExhausted)));
    assert_eq!(store.len(), 1);
}
