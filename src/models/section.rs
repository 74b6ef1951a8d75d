//! Section identity
//!
//! The set of resume sections is closed; everything that addresses a
//! section (stores, schemas, the WASM boundary) goes through this enum.

use serde::{Deserialize, Serialize};

/// One named category of resume content.
///
/// Crosses the WASM boundary as a `u8` discriminant (see
/// `api::helpers::section_from_u8`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Education = 1,
    Experience = 2,
    Projects = 3,
    Skills = 4,
}

impl SectionKind {
    /// Every section, in document display order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
    ];

    /// Heading text shown above the section in the rendered document.
    pub fn display_title(&self) -> &'static str {
        match self {
            SectionKind::Education => "Education",
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Technical Skills",
        }
    }

    /// Stable lowercase name used in logs and snapshot keys.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
        }
    }
}
