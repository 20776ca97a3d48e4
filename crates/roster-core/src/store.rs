//! In-memory record store.
//!
//! Storage order is insertion order; sorting only affects the derived view.
//! Operations on a missing id are silent no-ops. Ids run up to `u64::MAX`;
//! once that id is handed out, creating or duplicating fails.

use std::collections::BTreeSet;

use tracing::debug;

use roster_model::{Draft, Record, RecordId, RecordPatch};

use crate::error::{CoreError, Result};
use crate::seed::seed_records;

/// Owns the ordered record collection and hands out ids.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<Record>,
    /// `None` once every id has been handed out.
    next_id: Option<RecordId>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Empty store; the first id handed out is 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: Some(RecordId::new(1)),
        }
    }

    /// Store holding the two built-in records.
    pub fn seeded() -> Self {
        let records = seed_records();
        let next_id = next_after(records.iter().map(|record| record.id).max());
        Self { records, next_id }
    }

    /// Store holding `records` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateId`] if two records share an id.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CoreError::DuplicateId(record.id));
            }
        }
        let next_id = next_after(seen.last().copied());
        Ok(Self { records, next_id })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Append a record built from `draft` under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdsExhausted`] when no fresh id is left.
    pub fn create(&mut self, draft: &Draft) -> Result<&Record> {
        let id = self.allocate_id()?;
        debug!(%id, "record created");
        Ok(self.push(Record::from_draft(id, draft)))
    }

    /// Merge `patch` into the record with `id`.
    ///
    /// Returns false (and changes nothing) when no such record exists.
    pub fn update(&mut self, id: RecordId, patch: RecordPatch) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.apply(patch);
                debug!(%id, "record updated");
                true
            }
            None => {
                debug!(%id, "update skipped, record not found");
                false
            }
        }
    }

    /// Remove the record with `id`, returning it if it existed.
    pub fn delete(&mut self, id: RecordId) -> Option<Record> {
        let index = self.records.iter().position(|record| record.id == id);
        match index {
            Some(index) => {
                debug!(%id, "record deleted");
                Some(self.records.remove(index))
            }
            None => {
                debug!(%id, "delete skipped, record not found");
                None
            }
        }
    }

    /// Append a copy of the record with `id` under a fresh id.
    ///
    /// Returns `Ok(None)` when no such record exists.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::IdsExhausted`] when no fresh id is left.
    pub fn duplicate(&mut self, id: RecordId) -> Result<Option<&Record>> {
        let Some(source) = self.get(id).cloned() else {
            debug!(%id, "duplicate skipped, record not found");
            return Ok(None);
        };
        let copy_id = self.allocate_id()?;
        debug!(source = %id, copy = %copy_id, "record duplicated");
        Ok(Some(self.push(source.with_id(copy_id))))
    }

    fn allocate_id(&mut self) -> Result<RecordId> {
        let id = self.next_id.ok_or(CoreError::IdsExhausted)?;
        self.next_id = id.next();
        Ok(id)
    }

    fn push(&mut self, record: Record) -> &Record {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }
}

fn next_after(highest: Option<RecordId>) -> Option<RecordId> {
    highest.map_or(Some(RecordId::new(1)), RecordId::next)
}
