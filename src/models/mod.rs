//! Core data model for the resume editor
//!
//! Everything here is plain serde-serializable state: records, the form
//! staging buffer, the document header, the skills taxonomy, and the
//! aggregate document handed to the layout composer.

pub mod document;
pub mod form;
pub mod header;
pub mod record;
pub mod sample;
pub mod section;
pub mod skills;

// Re-export commonly used types
pub use document::ResumeDocument;
pub use form::FormBuffer;
pub use header::ResumeHeader;
pub use record::{RecordFields, RecordId, ResumeRecord};
pub use section::SectionKind;
pub use skills::{SkillCategory, SkillsTaxonomy};
