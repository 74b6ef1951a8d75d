//! Aggregate resume document
//!
//! Built fresh from store snapshots on every render request; holds no
//! mutable state of its own. The layout composer walks this structure in
//! a fixed section order.

use serde::{Deserialize, Serialize};

use super::header::ResumeHeader;
use super::record::ResumeRecord;
use super::skills::SkillsTaxonomy;

/// The full resume as one immutable tree: header, the three list
/// sections in display order, and the skills taxonomy.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub header: ResumeHeader,
    pub education: Vec<ResumeRecord>,
    pub experience: Vec<ResumeRecord>,
    pub projects: Vec<ResumeRecord>,
    pub skills: SkillsTaxonomy,
}

impl ResumeDocument {
    /// Pure aggregation: snapshots in, one fresh document out.
    ///
    /// No validation happens here; the field normalizer already
    /// guarantees blank-free `details`/`tags`. Empty sections simply
    /// render as empty sequences downstream.
    pub fn build(
        header: ResumeHeader,
        education: Vec<ResumeRecord>,
        experience: Vec<ResumeRecord>,
        projects: Vec<ResumeRecord>,
        skills: &[ResumeRecord],
    ) -> Self {
        Self {
            header,
            education,
            experience,
            projects,
            skills: SkillsTaxonomy::from_records(skills),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{RecordFields, ResumeRecord};
    use uuid::Uuid;

    fn record(title: &str, tags: &[&str]) -> ResumeRecord {
        ResumeRecord::new(
            Uuid::new_v4(),
            RecordFields {
                title: title.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_build_converts_skill_records_in_order() {
        let skills = vec![record("Languages", &["Rust", "Go"]), record("Tools", &["Git"])];
        let doc = ResumeDocument::build(
            ResumeHeader::default(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            &skills,
        );

        assert_eq!(doc.skills.categories.len(), 2);
        assert_eq!(doc.skills.categories[0].label, "Languages");
        assert_eq!(doc.skills.categories[0].skills, vec!["Rust", "Go"]);
        assert_eq!(doc.skills.categories[1].label, "Tools");
    }

    #[test]
    fn test_build_does_not_consume_skill_records() {
        let skills = vec![record("Languages", &["Rust"])];
        let _doc = ResumeDocument::build(
            ResumeHeader::default(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            &skills,
        );
        // The slice is borrowed, not moved; callers keep their snapshot.
        assert_eq!(skills.len(), 1);
    }
}
