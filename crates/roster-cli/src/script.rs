//! Line-oriented scripts that drive a [`Session`].
//!
//! One command per line; blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! add
//! set name Ann Lee
//! set email ann@example.com
//! blur email
//! check on
//! submit
//! sort age
//! page next
//! show
//! ```

use std::io::{self, Write};

use thiserror::Error;
use tracing::{trace, warn};

use roster_core::{Intent, Outcome, PageNav, Session};
use roster_model::{Field, FieldValue, ModelError, RecordId, SortKey};

use crate::logging::redact_value;
use crate::render::{describe_outcome, render_form, render_table};

/// A parse failure with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    pub kind: ScriptErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptErrorKind {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("expected on or off, found `{0}`")]
    InvalidFlag(String),
    #[error("invalid page `{0}`")]
    InvalidPage(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// What a script line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Apply(Intent),
    /// Print the current table page.
    Show,
    /// Print the form and its field errors.
    Form,
}

/// A parsed, non-blank script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub text: String,
    pub command: ScriptCommand,
}

/// Parse a whole script, stopping at the first bad line.
///
/// # Errors
///
/// Returns the first line that does not parse.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let number = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let command = parse_command(text).map_err(|kind| ScriptError { line: number, kind })?;
        lines.push(ScriptLine {
            number,
            text: text.to_string(),
            command,
        });
    }
    Ok(lines)
}

/// Parse one trimmed, non-comment line.
///
/// # Errors
///
/// Returns the reason the line is not a valid command.
pub fn parse_command(text: &str) -> Result<ScriptCommand, ScriptErrorKind> {
    let (word, rest) = split_word(text);
    let intent = match word.to_lowercase().as_str() {
        "add" | "new" => {
            no_arguments(rest)?;
            Intent::RequestCreate
        }
        "edit" => Intent::RequestEdit(record_id("edit", rest)?),
        "delete" => Intent::RequestDelete(record_id("delete", rest)?),
        "duplicate" => Intent::RequestDuplicate(record_id("duplicate", rest)?),
        "set" => {
            let (name, value) = split_word(rest);
            if name.is_empty() {
                return Err(missing("set", "a field name and a value"));
            }
            let field: Field = name.parse()?;
            let value = if field.is_flag() {
                FieldValue::Flag(parse_flag(value)?)
            } else {
                FieldValue::text(value)
            };
            Intent::ChangeField { field, value }
        }
        "check" => Intent::ChangeField {
            field: Field::IsChecked,
            value: FieldValue::Flag(parse_flag(rest)?),
        },
        "blur" => {
            let (name, extra) = split_word(rest);
            if name.is_empty() {
                return Err(missing("blur", "a field name"));
            }
            no_arguments(extra)?;
            Intent::BlurField(name.parse()?)
        }
        "submit" => {
            no_arguments(rest)?;
            Intent::SubmitDraft
        }
        "search" => Intent::ChangeSearch(rest.to_string()),
        "sort" => {
            let (name, extra) = split_word(rest);
            if name.is_empty() {
                return Err(missing("sort", "a column name"));
            }
            no_arguments(extra)?;
            Intent::ChangeSort(name.parse::<SortKey>()?)
        }
        "page" => Intent::ChangePage(parse_page(rest)?),
        "show" => {
            no_arguments(rest)?;
            return Ok(ScriptCommand::Show);
        }
        "form" => {
            no_arguments(rest)?;
            return Ok(ScriptCommand::Form);
        }
        _ => return Err(ScriptErrorKind::UnknownCommand(word.to_string())),
    };
    Ok(ScriptCommand::Apply(intent))
}

/// Output settings for [`run_script`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print each line and its outcome.
    pub echo: bool,
    /// Allow ANSI styling in printed tables.
    pub color: bool,
}

/// Run parsed lines against `session`, writing output to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_script<W: Write>(
    session: &mut Session,
    lines: &[ScriptLine],
    options: RunOptions,
    out: &mut W,
) -> io::Result<()> {
    let RunOptions { echo, color } = options;
    for line in lines {
        match &line.command {
            ScriptCommand::Apply(intent) => {
                if let Intent::ChangeField {
                    field,
                    value: FieldValue::Text(text),
                } = intent
                {
                    trace!(line = line.number, %field, value = redact_value(text), "set field");
                }
                let outcome = session.apply(intent.clone());
                if matches!(outcome, Outcome::Ignored(_)) {
                    warn!(line = line.number, ?outcome, "command had no effect");
                }
                if echo {
                    writeln!(out, "> {}", line.text)?;
                    writeln!(out, "{}", describe_outcome(&outcome))?;
                }
            }
            ScriptCommand::Show => {
                if echo {
                    writeln!(out, "> {}", line.text)?;
                }
                writeln!(out, "{}", render_table(&session.table_view(), color))?;
            }
            ScriptCommand::Form => {
                if echo {
                    writeln!(out, "> {}", line.text)?;
                }
                writeln!(out, "{}", render_form(session.form(), color))?;
            }
        }
    }
    Ok(())
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn missing(command: &'static str, expected: &'static str) -> ScriptErrorKind {
    ScriptErrorKind::MissingArgument { command, expected }
}

fn no_arguments(rest: &str) -> Result<(), ScriptErrorKind> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptErrorKind::UnexpectedArgument(rest.to_string()))
    }
}

fn record_id(command: &'static str, rest: &str) -> Result<RecordId, ScriptErrorKind> {
    let (id, extra) = split_word(rest);
    if id.is_empty() {
        return Err(missing(command, "a record id"));
    }
    no_arguments(extra)?;
    Ok(id.parse()?)
}

fn parse_flag(value: &str) -> Result<bool, ScriptErrorKind> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(ScriptErrorKind::InvalidFlag(value.to_string())),
    }
}

fn parse_page(value: &str) -> Result<PageNav, ScriptErrorKind> {
    match value.trim().to_lowercase().as_str() {
        "" => Err(missing("page", "first, prev, next, last or a number")),
        "first" => Ok(PageNav::First),
        "prev" | "previous" => Ok(PageNav::Previous),
        "next" => Ok(PageNav::Next),
        "last" => Ok(PageNav::Last),
        other => other
            .parse::<usize>()
            .map(PageNav::To)
            .map_err(|_| ScriptErrorKind::InvalidPage(value.to_string())),
    }
}
