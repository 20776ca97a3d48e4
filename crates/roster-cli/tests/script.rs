//! Integration tests for script parsing, replay and table rendering.

use roster_cli::render::{render_form, render_table};
use roster_cli::script::{RunOptions, ScriptErrorKind, parse_script, run_script};
use roster_core::{Session, SessionOptions};
use roster_model::{ModelError, Record, RecordId};

const CREATE_AND_EDIT: &str = "\
# create Ann, tripping over a stale blur error first
add
blur name
set name Ann
set email a@b.c
set age 22
set gender female
set status active
set date 2022-03-03
submit
blur name
submit

edit 1
set age 26
submit
delete 9
duplicate 2
sort age
page next
search doe
";

fn transcript(source: &str, session: &mut Session) -> String {
    let lines = parse_script(source).expect("script parses");
    let mut out = Vec::new();
    let options = RunOptions {
        echo: true,
        color: false,
    };
    run_script(session, &lines, options, &mut out).expect("write to buffer");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn echo_transcript() {
    let mut session = Session::default();
    let output = transcript(CREATE_AND_EDIT, &mut session);
    insta::assert_snapshot!(output.trim_end(), @r"
    > add
    new record form
    > blur name
    name: name is required
    > set name Ann
    name set
    > set email a@b.c
    email set
    > set age 22
    age set
    > set gender female
    gender set
    > set status active
    status set
    > set date 2022-03-03
    date set
    > submit
    submit blocked: errors on name
    > blur name
    name: ok
    > submit
    created record 3
    > edit 1
    editing record 1
    > set age 26
    age set
    > submit
    updated record 1
    > delete 9
    ignored: no record 9
    > duplicate 2
    duplicated record 2 as 4
    > sort age
    sorted by age ↑, page 1
    > page next
    ignored: page 2 is outside 1..=1
    > search doe
    search applied, page 1
    ");

    assert_eq!(session.store().len(), 4);
    let john = session.store().get(RecordId::new(1)).expect("record 1");
    assert_eq!(john.age, "26");
}

#[test]
fn parse_errors_carry_line_numbers() {
    let error = parse_script("add\n\n# comment\nfrobnicate 3\n").unwrap_err();
    assert_eq!(error.line, 4);
    assert_eq!(
        error.kind,
        ScriptErrorKind::UnknownCommand("frobnicate".to_string())
    );
    assert_eq!(error.to_string(), "line 4: unknown command `frobnicate`");

    let error = parse_script("edit one").unwrap_err();
    assert_eq!(error.line, 1);
    assert_eq!(
        error.kind,
        ScriptErrorKind::Model(ModelError::InvalidRecordId("one".to_string()))
    );
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    let lines = parse_script("\n  # nothing here\n\nshow\n").expect("parses");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].number, 4);
}

#[test]
fn table_shows_sort_arrow_summary_and_page() {
    let session = Session::default();
    let table = render_table(&session.table_view(), false);
    assert!(table.contains("Name ↓"));
    assert!(table.contains("John Doe"));
    assert!(table.contains("jane@example.com"));
    assert!(table.contains("Total"));
    assert!(table.contains("55"));
    assert!(table.ends_with("Page 1 of 1"));
    assert!(!table.contains('\u{1b}'));
}

#[test]
fn empty_search_renders_no_data() {
    let mut session = Session::default();
    let lines = parse_script("search nobody-matches-this").expect("parses");
    let mut sink = Vec::new();
    run_script(&mut session, &lines, RunOptions::default(), &mut sink).expect("run");
    assert!(sink.is_empty());

    let table = render_table(&session.table_view(), false);
    assert!(table.starts_with("Search: \"nobody-matches-this\" (0 of 2 records)"));
    assert!(table.contains("No Data Found!"));
    assert!(table.ends_with("Page 1 of 0"));
    assert!(!table.contains("Total"));
}

#[test]
fn show_and_form_print_without_echo() {
    let mut session = Session::default();
    let lines = parse_script("add\nblur email\nform\nshow").expect("parses");
    let mut out = Vec::new();
    run_script(&mut session, &lines, RunOptions::default(), &mut out).expect("run");
    let output = String::from_utf8(out).expect("utf-8");
    assert!(!output.contains("> "));
    assert!(output.starts_with("New record"));
    assert!(output.contains("email is required"));
    assert!(output.contains("Submit: disabled"));
    assert!(output.contains("Page 1 of 1"));
}

#[test]
fn form_renders_closed_when_idle() {
    let session = Session::default();
    assert_eq!(render_form(session.form(), false), "Form closed");
}

#[test]
fn page_size_option_splits_the_table() {
    let records: Vec<Record> = (1..=3)
        .map(|id| Record {
            id: RecordId::new(id),
            name: format!("Person {id}"),
            email: format!("p{id}@example.com"),
            age: "40".to_string(),
            gender: "other".to_string(),
            status: "inactive".to_string(),
            date: "2023-05-01".to_string(),
            is_checked: false,
        })
        .collect();
    let options = SessionOptions::new().with_items_per_page(2);
    let mut session = Session::with_records(records, options).expect("unique ids");
    let lines = parse_script("page last").expect("parses");
    run_script(&mut session, &lines, RunOptions::default(), &mut Vec::new()).expect("run");
    let table = render_table(&session.table_view(), false);
    assert!(table.contains("Person 1"));
    assert!(!table.contains("Person 3"));
    assert!(table.ends_with("Page 2 of 2"));
}
