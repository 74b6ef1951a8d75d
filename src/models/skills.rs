//! Skills taxonomy
//!
//! Skills are edited through the same generic record store as the other
//! sections (one record per category: `title` is the category label,
//! `tags` the ordered skill list). The document builder converts those
//! records into this taxonomy shape for rendering.

use serde::{Deserialize, Serialize};

use super::record::ResumeRecord;

/// One category row: `"<label>: skill1, skill2, ..."` in the output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

/// Ordered mapping from category label to ordered skill strings.
/// Category order and skill order are both display order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillsTaxonomy {
    pub categories: Vec<SkillCategory>,
}

impl SkillsTaxonomy {
    /// Build the taxonomy from skill-section records, preserving record
    /// order as category order.
    pub fn from_records(records: &[ResumeRecord]) -> Self {
        Self {
            categories: records
                .iter()
                .map(|record| SkillCategory {
                    label: record.title.clone(),
                    skills: record.tags.clone(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
