//! Record types shared by every list-based resume section.
//!
//! One generic shape serves education, experience, projects, and skill
//! categories; each section's form schema (see `editor::schema`) decides
//! which fields are actually exposed for editing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to a record when it enters a store.
///
/// Randomly generated (v4) so creation rate never races a clock; uniqueness
/// within the owning section is the only property callers may rely on.
pub type RecordId = Uuid;

/// One entry in a list-based resume section: a degree, a job, a project,
/// or a skill category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    /// Unique within the owning section; assigned at creation, never reused.
    pub id: RecordId,

    /// Primary line: institution, job title, project name, or skill
    /// category label.
    pub title: String,

    /// Secondary line: degree, company, or project affiliation.
    pub subtitle: String,

    /// Opaque date strings; the core never parses or validates them.
    pub start_date: String,
    pub end_date: String,

    /// Rendered right-aligned against the subtitle line when present.
    #[serde(default)]
    pub location: String,

    /// Ordered bullet points. Never contains blank entries after
    /// normalization; insertion order is display order.
    #[serde(default)]
    pub details: Vec<String>,

    /// Ordered short strings (project technologies, skills in a category).
    /// Same blank-free guarantee as `details`.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResumeRecord {
    /// Attach an identity to a field bundle, producing a store-ready record.
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        Self {
            id,
            title: fields.title,
            subtitle: fields.subtitle,
            start_date: fields.start_date,
            end_date: fields.end_date,
            location: fields.location,
            details: fields.details,
            tags: fields.tags,
        }
    }

    /// Copy of the editable fields, without the identity.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            location: self.location.clone(),
            details: self.details.clone(),
            tags: self.tags.clone(),
        }
    }

    /// The "start - end" run shown right-aligned on the title line.
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }

    /// Whether the record carries any date text at all.
    pub fn has_dates(&self) -> bool {
        !self.start_date.is_empty() || !self.end_date.is_empty()
    }
}

/// Editable field bundle for a record about to be created or updated:
/// [`ResumeRecord`] minus the identity. Produced by the field normalizer,
/// consumed by the stores.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub title: String,
    pub subtitle: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
