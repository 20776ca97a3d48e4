//! Create/edit form state machine.
//!
//! ```text
//! Idle ──request_create──▶ Creating ──submit ok──▶ Idle
//!   │                         │
//!   └──request_edit(id)──▶ Editing(id) ──submit ok──▶ Idle
//! ```
//!
//! Create and edit requests are accepted from any state and overwrite the
//! draft. They do not touch the field error set; only a successful submit
//! clears it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use roster_model::{Draft, Field, FieldValue, Record, RecordId, RecordPatch};
use roster_validate::{FieldErrors, failing_fields};

use crate::store::RecordStore;

/// What the form is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Idle,
    Creating,
    Editing(RecordId),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Why a submit did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitBlock {
    /// The form is not open.
    NotOpen,
    /// Form-level rules fail for these fields.
    FormInvalid(Vec<Field>),
    /// These fields still hold a blur error.
    FieldErrors(Vec<Field>),
    /// The store has no fresh id left for a new record.
    IdsExhausted,
}

/// Result of [`FormSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    /// `applied` is false when the edited record no longer exists.
    Updated { id: RecordId, applied: bool },
    Blocked(SubmitBlock),
}

/// Draft, blur errors and mode of the record form.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    mode: FormMode,
    draft: Draft,
    errors: FieldErrors,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current draft, `None` while idle.
    pub fn draft(&self) -> Option<&Draft> {
        self.mode.is_open().then_some(&self.draft)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Start a new record with a default draft.
    pub fn request_create(&mut self) {
        self.draft = Draft::default();
        self.mode = FormMode::Creating;
        debug!("form opened for create");
    }

    /// Start editing `record`, copying its values into the draft.
    pub fn request_edit(&mut self, record: &Record) {
        self.draft = Draft::from_record(record);
        self.mode = FormMode::Editing(record.id);
        debug!(id = %record.id, "form opened for edit");
    }

    /// Set a draft value. Returns false while idle.
    ///
    /// # Errors
    ///
    /// Fails when the value kind does not match the field.
    pub fn change_field(&mut self, field: Field, value: FieldValue) -> roster_model::Result<bool> {
        if !self.mode.is_open() {
            return Ok(false);
        }
        self.draft.set(field, value)?;
        Ok(true)
    }

    /// Re-validate `field` and return its message, if any.
    ///
    /// Returns `None` while idle.
    pub fn blur_field(&mut self, field: Field) -> Option<&str> {
        if !self.mode.is_open() {
            return None;
        }
        self.errors.blur(field, &self.draft);
        self.errors.message(field)
    }

    /// Form-level validity of the current draft (false while idle).
    pub fn is_form_valid(&self) -> bool {
        self.mode.is_open() && failing_fields(&self.draft).is_empty()
    }

    /// Apply the draft to `store` if both validity gates pass.
    ///
    /// On success the draft and errors reset and the form goes idle. A blocked
    /// submit leaves everything as it was.
    pub fn submit(&mut self, store: &mut RecordStore) -> SubmitOutcome {
        if let Some(block) = self.submit_block() {
            debug!(?block, "submit blocked");
            return SubmitOutcome::Blocked(block);
        }
        let outcome = match self.mode {
            FormMode::Editing(id) => {
                let patch = RecordPatch::from(std::mem::take(&mut self.draft));
                let applied = store.update(id, patch);
                SubmitOutcome::Updated { id, applied }
            }
            FormMode::Creating | FormMode::Idle => match store.create(&self.draft) {
                Ok(record) => SubmitOutcome::Created(record.id),
                Err(error) => {
                    warn!(%error, "submit blocked");
                    return SubmitOutcome::Blocked(SubmitBlock::IdsExhausted);
                }
            },
        };
        self.draft = Draft::default();
        self.errors.reset();
        self.mode = FormMode::Idle;
        info!(?outcome, "draft submitted");
        outcome
    }

    fn submit_block(&self) -> Option<SubmitBlock> {
        if !self.mode.is_open() {
            return Some(SubmitBlock::NotOpen);
        }
        let failing = failing_fields(&self.draft);
        if !failing.is_empty() {
            return Some(SubmitBlock::FormInvalid(failing));
        }
        if !self.errors.is_clear() {
            return Some(SubmitBlock::FieldErrors(self.errors.fields_with_errors()));
        }
        None
    }
}
