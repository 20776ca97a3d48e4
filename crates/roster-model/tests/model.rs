//! Tests for roster-model types.

use roster_model::{
    Draft, Field, Gender, ModelError, Record, RecordId, RecordPatch, SortKey, Status,
};

#[test]
fn field_names_parse_case_insensitively() {
    assert_eq!("Email".parse::<Field>(), Ok(Field::Email));
    assert_eq!("isChecked".parse::<Field>(), Ok(Field::IsChecked));
    assert_eq!("is_checked".parse::<Field>(), Ok(Field::IsChecked));
    assert_eq!(
        "phone".parse::<Field>(),
        Err(ModelError::UnknownField("phone".to_string()))
    );
}

#[test]
fn sort_keys_accept_column_titles() {
    assert_eq!("Age".parse::<SortKey>(), Ok(SortKey::Age));
    assert_eq!("ID".parse::<SortKey>(), Ok(SortKey::Id));
    assert!(matches!(
        "phone".parse::<SortKey>(),
        Err(ModelError::UnknownSortKey(_))
    ));
}

#[test]
fn record_id_parse_rejects_garbage() {
    assert_eq!("42".parse::<RecordId>(), Ok(RecordId::new(42)));
    assert!("-1".parse::<RecordId>().is_err());
    assert!("abc".parse::<RecordId>().is_err());
}

#[test]
fn record_deserializes_numeric_age_and_camel_case_flag() {
    let json = r#"{
        "id": 1,
        "name": "John Doe",
        "email": "john@example.com",
        "age": 25,
        "gender": "male",
        "status": "active",
        "date": "2022-01-01",
        "isChecked": true
    }"#;
    let record: Record = serde_json::from_str(json).expect("deserialize record");
    assert_eq!(record.id, RecordId::new(1));
    assert_eq!(record.age, "25");
    assert!(record.is_checked);

    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(value["isChecked"], serde_json::Value::Bool(true));
    assert_eq!(value["age"], serde_json::Value::String("25".to_string()));
}

#[test]
fn record_from_draft_copies_every_field() {
    let draft = Draft {
        name: "Ann".to_string(),
        email: "a@b.c".to_string(),
        age: "22".to_string(),
        gender: "female".to_string(),
        status: "active".to_string(),
        date: "2022-03-03".to_string(),
        is_checked: false,
    };
    let record = Record::from_draft(RecordId::new(9), &draft);
    assert_eq!(Draft::from_record(&record), draft);
    assert_eq!(record.id, RecordId::new(9));
}

#[test]
fn full_patch_from_draft_overwrites_everything() {
    let draft = Draft::default();
    let patch = RecordPatch::from(draft.clone());
    assert!(!patch.is_empty());
    assert_eq!(patch.gender.as_deref(), Some("male"));
    assert!(RecordPatch::new().is_empty());
}

#[test]
fn choice_sets_round_trip_through_their_stored_value() {
    for gender in Gender::ALL {
        assert_eq!(gender.as_str().parse::<Gender>(), Ok(gender));
    }
    for status in Status::ALL {
        assert_eq!(status.as_str().parse::<Status>(), Ok(status));
    }
    assert_eq!(Status::Inactive.label(), "In Active");
}
