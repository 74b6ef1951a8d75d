//! Form staging buffer
//!
//! One mutable buffer per section editor, shared by the add and edit
//! dialogs. Every field is a plain string mirroring what the UI inputs
//! hold: `details` is one multi-line string, `tags` one comma-joined
//! string. The buffer never reaches a store directly; the field
//! normalizer converts it on save.

use serde::{Deserialize, Serialize};

/// Staging state for one open add/edit dialog.
///
/// Lifecycle: reset to empty on "add", hydrated from an existing record
/// on "edit" (arrays flattened by `normalize::record_to_buffer`),
/// discarded on save or cancel.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormBuffer {
    pub title: String,
    pub subtitle: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    /// Bullet points, one per line.
    pub details: String,
    /// Comma-separated short strings.
    pub tags: String,
}

impl FormBuffer {
    /// Clear every field back to the empty defaults (the "add" reset).
    pub fn reset(&mut self) {
        *self = FormBuffer::default();
    }

    /// Read a buffer slot by its schema field name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "subtitle" => Some(&self.subtitle),
            "startDate" => Some(&self.start_date),
            "endDate" => Some(&self.end_date),
            "location" => Some(&self.location),
            "details" => Some(&self.details),
            "tags" => Some(&self.tags),
            _ => None,
        }
    }

    /// Write a buffer slot by its schema field name.
    ///
    /// Returns `false` when no slot has that name; the caller decides
    /// whether that is an error (the section editor rejects it with
    /// `UnknownField`).
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "title" => &mut self.title,
            "subtitle" => &mut self.subtitle,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "location" => &mut self.location,
            "details" => &mut self.details,
            "tags" => &mut self.tags,
            _ => return false,
        };
        *slot = value;
        true
    }
}
