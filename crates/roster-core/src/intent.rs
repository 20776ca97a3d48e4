//! User intents accepted by a [`Session`](crate::Session) and what they did.

use serde::{Deserialize, Serialize};

use roster_model::{Field, FieldValue, RecordId, SortConfig, SortKey};

use crate::form_session::{FormMode, SubmitBlock};
use crate::pager::PageNav;

/// An action coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    SubmitDraft,
    ChangeField { field: Field, value: FieldValue },
    BlurField(Field),
    RequestCreate,
    RequestEdit(RecordId),
    RequestDelete(RecordId),
    RequestDuplicate(RecordId),
    ChangeSearch(String),
    ChangeSort(SortKey),
    ChangePage(PageNav),
}

/// Why an intent changed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ignored {
    /// No record has this id.
    NotFound(RecordId),
    /// Field input arrived while no form is open.
    FormClosed,
    /// The value kind does not fit the field.
    WrongValueKind(Field),
    /// The page control points outside `1..=total_pages`.
    PageOutOfRange { target: usize, total_pages: usize },
    /// No fresh id is left for a copy.
    IdsExhausted,
}

/// What applying an intent did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Created(RecordId),
    /// `applied` is false when the edited record was deleted meanwhile.
    Updated { id: RecordId, applied: bool },
    SubmitBlocked(SubmitBlock),
    FormOpened(FormMode),
    FieldChanged(Field),
    FieldBlurred { field: Field, error: Option<String> },
    Deleted(RecordId),
    Duplicated { source: RecordId, copy: RecordId },
    SearchChanged { page: usize },
    SortChanged { sort: SortConfig, page: usize },
    PageChanged(usize),
    Ignored(Ignored),
}

impl Outcome {
    /// True if the intent changed records, form, or view state.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::Ignored(_) | Self::SubmitBlocked(_))
    }
}
