//! Section editing store
//!
//! In-memory ordered collection of records for one resume section.
//! Insertion order is display order; nothing ever re-sorts. The store is
//! the only owner of its records: `list()` hands out a defensive copy,
//! and every mutation is visible to the next `list()` immediately.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{RecordFields, RecordId, ResumeRecord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Update/delete referenced an id absent from the collection.
    /// Surfaced to the caller, never a silent no-op.
    #[error("no record with id {0}")]
    NotFound(RecordId),
}

/// Ordered record collection for one section.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionStore {
    records: Vec<ResumeRecord>,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an existing ordered collection (snapshot load). Records
    /// arrive with their ids already assigned.
    pub fn from_records(records: Vec<ResumeRecord>) -> Self {
        Self { records }
    }

    /// Assign a fresh id and append the record at the end.
    ///
    /// Ids are random v4 UUIDs, so creation never races a clock and
    /// uniqueness holds across arbitrary create/delete sequences.
    pub fn create(&mut self, fields: RecordFields) -> RecordId {
        let id = Uuid::new_v4();
        self.records.push(ResumeRecord::new(id, fields));
        id
    }

    /// Replace the matching record in place, preserving its position in
    /// iteration order.
    pub fn update(&mut self, id: RecordId, fields: RecordFields) -> Result<(), StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *record = ResumeRecord::new(id, fields);
        Ok(())
    }

    /// Remove and return the matching record; later records close the gap.
    pub fn delete(&mut self, id: RecordId) -> Result<ResumeRecord, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.records.remove(index))
    }

    /// Borrow the record with the given id, if present.
    pub fn get(&self, id: RecordId) -> Option<&ResumeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Snapshot of the collection in display order. A defensive copy:
    /// caller mutation cannot touch store internals.
    pub fn list(&self) -> Vec<ResumeRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
