//! Integration tests for the session controller.

use roster_core::{
    FormMode, Ignored, Intent, Outcome, PageNav, Session, SessionOptions, SubmitBlock,
};
use roster_model::{Field, FieldValue, Record, RecordId, SortConfig, SortKey};

fn set(session: &mut Session, field: Field, value: &str) {
    let outcome = session.apply(Intent::ChangeField {
        field,
        value: FieldValue::text(value),
    });
    assert_eq!(outcome, Outcome::FieldChanged(field));
}

fn fill_ann(session: &mut Session) {
    set(session, Field::Name, "Ann");
    set(session, Field::Email, "a@b.c");
    set(session, Field::Age, "22");
    set(session, Field::Gender, "female");
    set(session, Field::Status, "active");
    set(session, Field::Date, "2022-03-03");
}

fn people(count: u64) -> Vec<Record> {
    (1..=count)
        .map(|id| Record {
            id: RecordId::new(id),
            name: format!("Person{id:02}"),
            email: format!("p{id}@example.com"),
            age: "20".to_string(),
            gender: "other".to_string(),
            status: "active".to_string(),
            date: "2022-01-01".to_string(),
            is_checked: false,
        })
        .collect()
}

#[test]
fn fresh_session_shows_seed_sorted_by_name_descending() {
    let session = Session::default();
    let view = session.table_view();
    let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Jane Doe"]);
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.summary.age, 55);
    assert_eq!(session.form().mode(), FormMode::Idle);
}

#[test]
fn create_flow_appends_record() {
    let mut session = Session::default();
    assert_eq!(
        session.apply(Intent::RequestCreate),
        Outcome::FormOpened(FormMode::Creating)
    );
    fill_ann(&mut session);
    assert!(session.form().is_form_valid());

    let outcome = session.apply(Intent::SubmitDraft);

    assert_eq!(outcome, Outcome::Created(RecordId::new(3)));
    assert_eq!(session.store().len(), 3);
    let created = session.store().get(RecordId::new(3)).expect("created");
    assert_eq!(created.name, "Ann");
    assert!(!created.is_checked);
    assert_eq!(session.form().mode(), FormMode::Idle);
    assert!(session.form().draft().is_none());
}

#[test]
fn submit_of_empty_form_is_blocked_by_form_rules() {
    let mut session = Session::default();
    session.apply(Intent::RequestCreate);
    let outcome = session.apply(Intent::SubmitDraft);
    assert_eq!(
        outcome,
        Outcome::SubmitBlocked(SubmitBlock::FormInvalid(vec![
            Field::Name,
            Field::Email,
            Field::Age,
            Field::Status,
            Field::Date,
        ]))
    );
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.form().mode(), FormMode::Creating);
}

#[test]
fn stale_blur_error_blocks_until_blurred_again() {
    let mut session = Session::default();
    session.apply(Intent::RequestCreate);
    assert_eq!(
        session.apply(Intent::BlurField(Field::Name)),
        Outcome::FieldBlurred {
            field: Field::Name,
            error: Some("name is required".to_string()),
        }
    );
    fill_ann(&mut session);
    assert!(session.form().is_form_valid());

    assert_eq!(
        session.apply(Intent::SubmitDraft),
        Outcome::SubmitBlocked(SubmitBlock::FieldErrors(vec![Field::Name]))
    );

    session.apply(Intent::BlurField(Field::Name));
    assert_eq!(
        session.apply(Intent::SubmitDraft),
        Outcome::Created(RecordId::new(3))
    );
    assert!(session.form().errors().is_clear());
}

#[test]
fn field_errors_survive_a_new_create_request() {
    let mut session = Session::default();
    session.apply(Intent::RequestCreate);
    session.apply(Intent::BlurField(Field::Email));
    session.apply(Intent::RequestCreate);
    assert_eq!(
        session.form().errors().message(Field::Email),
        Some("email is required")
    );
}

#[test]
fn edit_flow_updates_in_place() {
    let mut session = Session::default();
    assert_eq!(
        session.apply(Intent::RequestEdit(RecordId::new(1))),
        Outcome::FormOpened(FormMode::Editing(RecordId::new(1)))
    );
    assert_eq!(
        session.form().draft().map(|d| d.name.as_str()),
        Some("John Doe")
    );
    set(&mut session, Field::Name, "Johnny");
    session.apply(Intent::ChangeField {
        field: Field::IsChecked,
        value: FieldValue::Flag(false),
    });

    assert_eq!(
        session.apply(Intent::SubmitDraft),
        Outcome::Updated {
            id: RecordId::new(1),
            applied: true
        }
    );
    let record = session.store().get(RecordId::new(1)).expect("record 1");
    assert_eq!(record.name, "Johnny");
    assert!(!record.is_checked);
    assert_eq!(record.email, "john@example.com");
    assert_eq!(session.store().records()[0].id, RecordId::new(1));
}

#[test]
fn submitting_an_edit_of_a_deleted_record_goes_idle() {
    let mut session = Session::default();
    session.apply(Intent::RequestEdit(RecordId::new(2)));
    session.apply(Intent::RequestDelete(RecordId::new(2)));
    assert_eq!(
        session.apply(Intent::SubmitDraft),
        Outcome::Updated {
            id: RecordId::new(2),
            applied: false
        }
    );
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.form().mode(), FormMode::Idle);
}

#[test]
fn missing_ids_are_ignored() {
    let mut session = Session::default();
    let missing = RecordId::new(77);
    for intent in [
        Intent::RequestEdit(missing),
        Intent::RequestDelete(missing),
        Intent::RequestDuplicate(missing),
    ] {
        assert_eq!(
            session.apply(intent),
            Outcome::Ignored(Ignored::NotFound(missing))
        );
    }
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.form().mode(), FormMode::Idle);
}

#[test]
fn duplicate_appends_copy() {
    let mut session = Session::default();
    assert_eq!(
        session.apply(Intent::RequestDuplicate(RecordId::new(1))),
        Outcome::Duplicated {
            source: RecordId::new(1),
            copy: RecordId::new(3),
        }
    );
    let copy = session.store().get(RecordId::new(3)).expect("copy");
    assert_eq!(copy.name, "John Doe");
    assert!(copy.is_checked);
}

#[test]
fn field_input_while_idle_is_ignored() {
    let mut session = Session::default();
    assert_eq!(
        session.apply(Intent::ChangeField {
            field: Field::Name,
            value: FieldValue::text("x"),
        }),
        Outcome::Ignored(Ignored::FormClosed)
    );
    assert_eq!(
        session.apply(Intent::BlurField(Field::Name)),
        Outcome::Ignored(Ignored::FormClosed)
    );
}

#[test]
fn wrong_value_kind_is_ignored() {
    let mut session = Session::default();
    session.apply(Intent::RequestCreate);
    assert_eq!(
        session.apply(Intent::ChangeField {
            field: Field::IsChecked,
            value: FieldValue::text("yes"),
        }),
        Outcome::Ignored(Ignored::WrongValueKind(Field::IsChecked))
    );
}

#[test]
fn sort_intent_toggles_direction() {
    let mut session = Session::default();
    let outcome = session.apply(Intent::ChangeSort(SortKey::Age));
    assert_eq!(
        outcome,
        Outcome::SortChanged {
            sort: SortConfig::ascending(SortKey::Age),
            page: 1
        }
    );
    session.apply(Intent::ChangeSort(SortKey::Age));
    assert_eq!(session.sort(), SortConfig::descending(SortKey::Age));
    let ages: Vec<String> = session
        .table_view()
        .rows
        .into_iter()
        .map(|r| r.age)
        .collect();
    assert_eq!(ages, vec!["30", "25"]);
}

#[test]
fn page_navigation_respects_bounds() {
    let mut session = Session::with_records(people(12), SessionOptions::default()).unwrap();
    assert_eq!(
        session.apply(Intent::ChangePage(PageNav::Previous)),
        Outcome::Ignored(Ignored::PageOutOfRange {
            target: 0,
            total_pages: 3
        })
    );
    assert_eq!(
        session.apply(Intent::ChangePage(PageNav::Last)),
        Outcome::PageChanged(3)
    );
    assert_eq!(session.table_view().rows.len(), 2);
    assert_eq!(
        session.apply(Intent::ChangePage(PageNav::Next)),
        Outcome::Ignored(Ignored::PageOutOfRange {
            target: 4,
            total_pages: 3
        })
    );
    assert_eq!(
        session.apply(Intent::ChangePage(PageNav::To(2))),
        Outcome::PageChanged(2)
    );
}

#[test]
fn narrowing_search_reclamps_page() {
    let mut session = Session::with_records(people(12), SessionOptions::default()).unwrap();
    session.apply(Intent::ChangePage(PageNav::Last));
    assert_eq!(
        session.apply(Intent::ChangeSearch("person07".to_string())),
        Outcome::SearchChanged { page: 1 }
    );
    let view = session.table_view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn search_without_matches_leaves_no_valid_page() {
    let mut session = Session::default();
    session.apply(Intent::ChangeSearch("zzz".to_string()));
    let view = session.table_view();
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(
        session.apply(Intent::ChangePage(PageNav::First)),
        Outcome::Ignored(Ignored::PageOutOfRange {
            target: 1,
            total_pages: 0
        })
    );
}

#[test]
fn deleting_the_last_row_of_a_page_reclamps() {
    let mut session = Session::with_records(people(6), SessionOptions::default()).unwrap();
    session.apply(Intent::ChangeSort(SortKey::Id));
    session.apply(Intent::ChangePage(PageNav::To(2)));
    session.apply(Intent::RequestDelete(RecordId::new(6)));
    assert_eq!(session.view_state().current_page, 1);
    assert_eq!(session.table_view().rows.len(), 5);
}

#[test]
fn options_control_page_size_and_initial_sort() {
    let options = SessionOptions::new()
        .with_items_per_page(0)
        .with_initial_sort(SortConfig::ascending(SortKey::Id));
    let session = Session::with_records(people(3), options).unwrap();
    let view = session.table_view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows[0].id, RecordId::new(1));
}

#[test]
fn duplicate_seed_ids_are_rejected() {
    let mut records = people(2);
    records[1].id = RecordId::new(1);
    assert!(Session::with_records(records, SessionOptions::default()).is_err());
}

#[test]
fn edit_that_leaves_the_search_reclamps() {
    let mut session = Session::with_records(people(6), SessionOptions::default()).unwrap();
    session.apply(Intent::ChangeSort(SortKey::Id));
    session.apply(Intent::ChangeSearch("person".to_string()));
    session.apply(Intent::ChangePage(PageNav::To(2)));
    assert_eq!(session.table_view().rows[0].id, RecordId::new(6));

    session.apply(Intent::RequestEdit(RecordId::new(6)));
    set(&mut session, Field::Name, "Zed");
    assert_eq!(
        session.apply(Intent::SubmitDraft),
        Outcome::Updated {
            id: RecordId::new(6),
            applied: true
        }
    );

    let view = session.table_view();
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.rows.len(), 5);
}

#[test]
fn duplicate_without_free_id_is_ignored() {
    let mut records = people(1);
    records[0].id = RecordId::new(u64::MAX);
    let mut session = Session::with_records(records, SessionOptions::default()).unwrap();
    assert_eq!(
        session.apply(Intent::RequestDuplicate(RecordId::new(u64::MAX))),
        Outcome::Ignored(Ignored::IdsExhausted)
    );
    assert_eq!(session.store().len(), 1);
}
