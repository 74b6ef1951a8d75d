//! Resume session
//!
//! The bundle the WASM layer owns as its source of truth: the header
//! plus one [`SectionEditor`] per section, addressed by [`SectionKind`].
//! Also defines the snapshot shape the external persistence sink
//! round-trips as JSON.

use serde::{Deserialize, Serialize};

use super::{EditorError, SectionEditor};
use crate::models::{sample, ResumeDocument, ResumeHeader, ResumeRecord, SectionKind};

/// Serde round-trip form of the full resume, in display order. This is
/// the format handed to (and accepted from) the persistence sink.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSnapshot {
    pub header: ResumeHeader,
    pub education: Vec<ResumeRecord>,
    pub experience: Vec<ResumeRecord>,
    pub projects: Vec<ResumeRecord>,
    pub skills: Vec<ResumeRecord>,
}

/// One editing session: header fields plus the four section editors.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResumeSession {
    header: ResumeHeader,
    education: SectionEditor,
    experience: SectionEditor,
    projects: SectionEditor,
    skills: SectionEditor,
}

impl ResumeSession {
    /// Empty session: blank header, no records anywhere.
    pub fn new() -> Self {
        Self {
            header: ResumeHeader::default(),
            education: SectionEditor::new(SectionKind::Education),
            experience: SectionEditor::new(SectionKind::Experience),
            projects: SectionEditor::new(SectionKind::Projects),
            skills: SectionEditor::new(SectionKind::Skills),
        }
    }

    /// Session pre-filled with the starter resume so the preview has
    /// something to show before the user types anything.
    pub fn sample() -> Self {
        let mut session = Self::new();
        session.header = sample::sample_header();
        for fields in sample::sample_education() {
            session.education.store_mut().create(fields);
        }
        for fields in sample::sample_experience() {
            session.experience.store_mut().create(fields);
        }
        for fields in sample::sample_projects() {
            session.projects.store_mut().create(fields);
        }
        for fields in sample::sample_skills() {
            session.skills.store_mut().create(fields);
        }
        session
    }

    /// Rebuild a session from a persisted snapshot; record ids are kept.
    pub fn from_snapshot(snapshot: ResumeSnapshot) -> Self {
        Self {
            header: snapshot.header,
            education: SectionEditor::from_records(SectionKind::Education, snapshot.education),
            experience: SectionEditor::from_records(SectionKind::Experience, snapshot.experience),
            projects: SectionEditor::from_records(SectionKind::Projects, snapshot.projects),
            skills: SectionEditor::from_records(SectionKind::Skills, snapshot.skills),
        }
    }

    /// Capture the full resume for the persistence sink. Open dialog
    /// state is deliberately not part of the snapshot.
    pub fn snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot {
            header: self.header.clone(),
            education: self.education.list(),
            experience: self.experience.list(),
            projects: self.projects.list(),
            skills: self.skills.list(),
        }
    }

    pub fn header(&self) -> &ResumeHeader {
        &self.header
    }

    /// Write one header field from a UI change event.
    pub fn set_header_field(&mut self, name: &str, value: String) -> Result<(), EditorError> {
        if !self.header.set_field(name, value) {
            return Err(EditorError::UnknownField {
                section: "header",
                field: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn editor(&self, kind: SectionKind) -> &SectionEditor {
        match kind {
            SectionKind::Education => &self.education,
            SectionKind::Experience => &self.experience,
            SectionKind::Projects => &self.projects,
            SectionKind::Skills => &self.skills,
        }
    }

    pub fn editor_mut(&mut self, kind: SectionKind) -> &mut SectionEditor {
        match kind {
            SectionKind::Education => &mut self.education,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Projects => &mut self.projects,
            SectionKind::Skills => &mut self.skills,
        }
    }

    /// Assemble the immutable document for one render request from
    /// store snapshots captured now. Read-only over the stores, so it
    /// can be re-run any number of times.
    pub fn build_document(&self) -> ResumeDocument {
        ResumeDocument::build(
            self.header.clone(),
            self.education.list(),
            self.experience.list(),
            self.projects.list(),
            &self.skills.list(),
        )
    }
}

impl Default for ResumeSession {
    fn default() -> Self {
        Self::new()
    }
}
