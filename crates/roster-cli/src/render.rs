//! Terminal rendering of table pages, the form, and intent outcomes.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_core::{FormMode, FormSession, Ignored, Outcome, SubmitBlock, TableView};
use roster_model::{Field, Gender, Record, SortKey, Status};

/// Table columns in display order.
const COLUMNS: [(SortKey, &str); 8] = [
    (SortKey::Id, "Id"),
    (SortKey::Name, "Name"),
    (SortKey::Email, "Email"),
    (SortKey::Age, "Age"),
    (SortKey::Gender, "Gender"),
    (SortKey::Date, "Date"),
    (SortKey::Status, "Status"),
    (SortKey::IsChecked, "Checked"),
];

const AGE_COLUMN: usize = 3;

/// Render one page of records with the sort indicator, age total and page line.
pub fn render_table(view: &TableView, color: bool) -> String {
    let mut table = new_table(color);
    table.set_header(
        COLUMNS
            .iter()
            .map(|(key, title)| {
                if *key == view.sort.key {
                    header_cell(&format!("{title} {}", view.sort.direction.arrow()))
                } else {
                    header_cell(title)
                }
            })
            .collect::<Vec<_>>(),
    );
    for row in &view.rows {
        table.add_row(record_cells(row));
    }
    if !view.rows.is_empty() {
        let mut total = vec![dim_cell(""); COLUMNS.len()];
        total[1] = Cell::new("Total").add_attribute(Attribute::Bold);
        total[AGE_COLUMN] = Cell::new(view.summary.age).add_attribute(Attribute::Bold);
        table.add_row(total);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, AGE_COLUMN, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);

    let mut out = String::new();
    if !view.search_term.is_empty() {
        let _ = writeln!(
            out,
            "Search: \"{}\" ({} of {} records)",
            view.search_term, view.filtered_count, view.total_count
        );
    }
    let _ = writeln!(out, "{table}");
    if view.rows.is_empty() {
        let _ = writeln!(out, "No Data Found!");
    } else if view.summary.unparsed_ages > 0 {
        let _ = writeln!(
            out,
            "{} age value(s) on this page are not numbers and were not summed",
            view.summary.unparsed_ages
        );
    }
    let _ = write!(out, "Page {} of {}", view.page, view.total_pages);
    out
}

/// Render the open form: each field with its draft value and blur error.
pub fn render_form(form: &FormSession, color: bool) -> String {
    let Some(draft) = form.draft() else {
        return "Form closed".to_string();
    };
    let title = match form.mode() {
        FormMode::Editing(id) => format!("Edit record {id}"),
        FormMode::Creating | FormMode::Idle => "New record".to_string(),
    };
    let mut table = new_table(color);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    for field in Field::ALL {
        let value = if field.is_flag() {
            yes_no(draft.is_checked).to_string()
        } else {
            draft.text(field).unwrap_or_default().to_string()
        };
        let error = match form.errors().message(field) {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(field.label()), Cell::new(value), error]);
    }
    let submit = if form.is_form_valid() {
        "enabled"
    } else {
        "disabled"
    };
    format!("{title}\n{table}\nSubmit: {submit}")
}

/// Render the list of form fields with their rules and choices.
pub fn render_fields(color: bool) -> String {
    let mut table = new_table(color);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Rule"),
        header_cell("Choices"),
    ]);
    for field in Field::ALL {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(field.label()),
            Cell::new(rule_text(field)),
            choices_cell(field),
        ]);
    }
    table.to_string()
}

/// One-line description of what an intent did.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created(id) => format!("created record {id}"),
        Outcome::Updated { id, applied: true } => format!("updated record {id}"),
        Outcome::Updated { id, applied: false } => {
            format!("record {id} no longer exists, nothing updated")
        }
        Outcome::SubmitBlocked(SubmitBlock::NotOpen) => "submit blocked: no open form".to_string(),
        Outcome::SubmitBlocked(SubmitBlock::FormInvalid(fields)) => {
            format!("submit blocked: invalid {}", field_list(fields))
        }
        Outcome::SubmitBlocked(SubmitBlock::FieldErrors(fields)) => {
            format!("submit blocked: errors on {}", field_list(fields))
        }
        Outcome::SubmitBlocked(SubmitBlock::IdsExhausted) => {
            "submit blocked: no record ids left".to_string()
        }
        Outcome::FormOpened(FormMode::Editing(id)) => format!("editing record {id}"),
        Outcome::FormOpened(_) => "new record form".to_string(),
        Outcome::FieldChanged(field) => format!("{field} set"),
        Outcome::FieldBlurred { field, error } => match error {
            Some(message) => format!("{field}: {message}"),
            None => format!("{field}: ok"),
        },
        Outcome::Deleted(id) => format!("deleted record {id}"),
        Outcome::Duplicated { source, copy } => format!("duplicated record {source} as {copy}"),
        Outcome::SearchChanged { page } => format!("search applied, page {page}"),
        Outcome::SortChanged { sort, page } => format!(
            "sorted by {} {}, page {page}",
            sort.key,
            sort.direction.arrow()
        ),
        Outcome::PageChanged(page) => format!("page {page}"),
        Outcome::Ignored(Ignored::NotFound(id)) => format!("ignored: no record {id}"),
        Outcome::Ignored(Ignored::FormClosed) => "ignored: no open form".to_string(),
        Outcome::Ignored(Ignored::WrongValueKind(field)) => {
            format!("ignored: wrong value kind for {field}")
        }
        Outcome::Ignored(Ignored::PageOutOfRange {
            target,
            total_pages,
        }) => format!("ignored: page {target} is outside 1..={total_pages}"),
        Outcome::Ignored(Ignored::IdsExhausted) => "ignored: no record ids left".to_string(),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn new_table(color: bool) -> Table {
    let mut table = Table::new();
    if color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    apply_table_style(&mut table);
    table
}

fn record_cells(record: &Record) -> Vec<Cell> {
    vec![
        Cell::new(record.id),
        Cell::new(&record.name),
        Cell::new(&record.email),
        Cell::new(&record.age),
        Cell::new(&record.gender),
        Cell::new(&record.date),
        Cell::new(&record.status),
        Cell::new(yes_no(record.is_checked)),
    ]
}

fn rule_text(field: Field) -> &'static str {
    match field {
        Field::Name | Field::Gender | Field::Status => "required",
        Field::Email => "required, name@domain.tld",
        Field::Age => "required, whole number",
        Field::Date => "required, YYYY-MM-DD",
        Field::IsChecked => "-",
    }
}

fn choices_cell(field: Field) -> Cell {
    let choices: Vec<&str> = match field {
        Field::Gender => Gender::ALL.iter().map(Gender::label).collect(),
        Field::Status => Status::ALL.iter().map(Status::label).collect(),
        Field::IsChecked => vec!["Yes", "No"],
        _ => return dim_cell("-"),
    };
    Cell::new(choices.join(", "))
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_outcomes_read_naturally() {
        let blurred = Outcome::FieldBlurred {
            field: Field::Email,
            error: Some("Invalid email format".to_string()),
        };
        assert_eq!(describe_outcome(&blurred), "email: Invalid email format");
        let clean = Outcome::FieldBlurred {
            field: Field::Email,
            error: None,
        };
        assert_eq!(describe_outcome(&clean), "email: ok");
    }

    #[test]
    fn every_field_has_a_rule() {
        let fields = render_fields(false);
        for field in Field::ALL {
            assert!(fields.contains(field.as_str()));
        }
        assert!(fields.contains("In Active"));
    }
}
