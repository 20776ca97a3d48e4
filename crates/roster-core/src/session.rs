//! Session controller.
//!
//! A [`Session`] owns the record store, the form, the sort and the view
//! state, and is the only place they change. Presentation layers feed it
//! [`Intent`]s and draw [`Session::table_view`].
//!
//! The view pipeline never clamps the current page. The session does it
//! after any intent that can shrink or reorder the result (search, sort,
//! delete, submit), so the page stays within `1..=max(total_pages, 1)`.

use tracing::{debug, info_span, warn};

use roster_model::{Field, FieldValue, Record, RecordId, SortConfig, SortKey};

use crate::error::Result;
use crate::form_session::{FormSession, SubmitOutcome};
use crate::intent::{Ignored, Intent, Outcome};
use crate::options::SessionOptions;
use crate::pager::{PageNav, clamp_page, total_pages};
use crate::store::RecordStore;
use crate::view::{TableView, ViewState, filter_records};

#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    form: FormSession,
    sort: SortConfig,
    view: ViewState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    /// Session over the built-in seed records.
    pub fn new(options: SessionOptions) -> Self {
        Self::with_store(RecordStore::seeded(), options)
    }

    /// Session over `records`, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if two records share an id.
    pub fn with_records(records: Vec<Record>, options: SessionOptions) -> Result<Self> {
        Ok(Self::with_store(RecordStore::from_records(records)?, options))
    }

    fn with_store(store: RecordStore, options: SessionOptions) -> Self {
        Self {
            store,
            form: FormSession::new(),
            sort: options.initial_sort,
            view: ViewState::new(options.items_per_page),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Rows and metadata for the current page.
    pub fn table_view(&self) -> TableView {
        TableView::build(self.store.records(), self.sort, &self.view)
    }

    /// Apply one user intent.
    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let span = info_span!("intent", kind = intent_name(&intent));
        let _guard = span.enter();
        let outcome = match intent {
            Intent::SubmitDraft => self.handle_submit(),
            Intent::ChangeField { field, value } => self.handle_change_field(field, value),
            Intent::BlurField(field) => self.handle_blur(field),
            Intent::RequestCreate => {
                self.form.request_create();
                Outcome::FormOpened(self.form.mode())
            }
            Intent::RequestEdit(id) => self.handle_edit(id),
            Intent::RequestDelete(id) => self.handle_delete(id),
            Intent::RequestDuplicate(id) => self.handle_duplicate(id),
            Intent::ChangeSearch(term) => self.handle_search(term),
            Intent::ChangeSort(key) => self.handle_sort(key),
            Intent::ChangePage(nav) => self.handle_page(nav),
        };
        debug!(?outcome, "intent applied");
        outcome
    }

    fn handle_submit(&mut self) -> Outcome {
        let outcome = match self.form.submit(&mut self.store) {
            SubmitOutcome::Created(id) => Outcome::Created(id),
            SubmitOutcome::Updated { id, applied } => Outcome::Updated { id, applied },
            SubmitOutcome::Blocked(block) => return Outcome::SubmitBlocked(block),
        };
        // An edit can move a record out of the search results.
        self.reclamp_page();
        outcome
    }

    fn handle_change_field(&mut self, field: Field, value: FieldValue) -> Outcome {
        match self.form.change_field(field, value) {
            Ok(true) => Outcome::FieldChanged(field),
            Ok(false) => Outcome::Ignored(Ignored::FormClosed),
            Err(_) => Outcome::Ignored(Ignored::WrongValueKind(field)),
        }
    }

    fn handle_blur(&mut self, field: Field) -> Outcome {
        if !self.form.mode().is_open() {
            return Outcome::Ignored(Ignored::FormClosed);
        }
        let error = self.form.blur_field(field).map(str::to_string);
        Outcome::FieldBlurred { field, error }
    }

    fn handle_edit(&mut self, id: RecordId) -> Outcome {
        match self.store.get(id) {
            Some(record) => {
                self.form.request_edit(record);
                Outcome::FormOpened(self.form.mode())
            }
            None => Outcome::Ignored(Ignored::NotFound(id)),
        }
    }

    fn handle_delete(&mut self, id: RecordId) -> Outcome {
        match self.store.delete(id) {
            Some(_) => {
                self.reclamp_page();
                Outcome::Deleted(id)
            }
            None => Outcome::Ignored(Ignored::NotFound(id)),
        }
    }

    fn handle_duplicate(&mut self, id: RecordId) -> Outcome {
        match self.store.duplicate(id) {
            Ok(Some(copy)) => Outcome::Duplicated {
                source: id,
                copy: copy.id,
            },
            Ok(None) => Outcome::Ignored(Ignored::NotFound(id)),
            Err(error) => {
                warn!(%id, %error, "duplicate failed");
                Outcome::Ignored(Ignored::IdsExhausted)
            }
        }
    }

    fn handle_search(&mut self, term: String) -> Outcome {
        self.view.search_term = term;
        self.reclamp_page();
        Outcome::SearchChanged {
            page: self.view.current_page,
        }
    }

    fn handle_sort(&mut self, key: SortKey) -> Outcome {
        self.sort = self.sort.toggled(key);
        self.reclamp_page();
        Outcome::SortChanged {
            sort: self.sort,
            page: self.view.current_page,
        }
    }

    fn handle_page(&mut self, nav: PageNav) -> Outcome {
        let total = self.total_pages();
        match nav.resolve(self.view.current_page, total) {
            Some(page) => {
                self.view.current_page = page;
                Outcome::PageChanged(page)
            }
            None => Outcome::Ignored(Ignored::PageOutOfRange {
                target: nav.target(self.view.current_page, total),
                total_pages: total,
            }),
        }
    }

    fn total_pages(&self) -> usize {
        let sorted: Vec<&Record> = self.store.records().iter().collect();
        let filtered = filter_records(sorted, &self.view.search_term).len();
        total_pages(filtered, self.view.items_per_page)
    }

    fn reclamp_page(&mut self) {
        let total = self.total_pages();
        let clamped = clamp_page(self.view.current_page, total);
        if clamped != self.view.current_page {
            debug!(
                from = self.view.current_page,
                to = clamped,
                total_pages = total,
                "page re-clamped"
            );
            self.view.current_page = clamped;
        }
    }
}

fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::SubmitDraft => "submit",
        Intent::ChangeField { .. } => "change_field",
        Intent::BlurField(_) => "blur_field",
        Intent::RequestCreate => "create",
        Intent::RequestEdit(_) => "edit",
        Intent::RequestDelete(_) => "delete",
        Intent::RequestDuplicate(_) => "duplicate",
        Intent::ChangeSearch(_) => "search",
        Intent::ChangeSort(_) => "sort",
        Intent::ChangePage(_) => "page",
    }
}
