//! Semantic style roles
//!
//! The closed set of roles the layout composer attaches styles to. The
//! stylesheet must define every one of them exactly once; `init`
//! rejects anything else, so an unknown role can never survive past
//! startup.

use serde::Serialize;

/// A semantic label resolved to a concrete attribute bundle by the
/// stylesheet. The discriminant doubles as the rule-table index.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StyleRole {
    Page = 0,
    Header,
    Name,
    Role,
    ContactInfo,
    ContactItem,
    ContactText,
    Icon,
    Section,
    SectionTitle,
    Subsection,
    ItemTitle,
    ItemSubtitle,
    ItemDetails,
    BulletPoint,
    DateLine,
    RightAlign,
    InlineRow,
    SkillsContainer,
    SkillCategory,
    SkillCategoryLabel,
    SkillItem,
}

impl StyleRole {
    pub const COUNT: usize = 22;

    /// Every role, in rule-table order.
    pub const ALL: [StyleRole; StyleRole::COUNT] = [
        StyleRole::Page,
        StyleRole::Header,
        StyleRole::Name,
        StyleRole::Role,
        StyleRole::ContactInfo,
        StyleRole::ContactItem,
        StyleRole::ContactText,
        StyleRole::Icon,
        StyleRole::Section,
        StyleRole::SectionTitle,
        StyleRole::Subsection,
        StyleRole::ItemTitle,
        StyleRole::ItemSubtitle,
        StyleRole::ItemDetails,
        StyleRole::BulletPoint,
        StyleRole::DateLine,
        StyleRole::RightAlign,
        StyleRole::InlineRow,
        StyleRole::SkillsContainer,
        StyleRole::SkillCategory,
        StyleRole::SkillCategoryLabel,
        StyleRole::SkillItem,
    ];

    /// Key used for this role in the stylesheet document.
    pub fn name(&self) -> &'static str {
        match self {
            StyleRole::Page => "page",
            StyleRole::Header => "header",
            StyleRole::Name => "name",
            StyleRole::Role => "role",
            StyleRole::ContactInfo => "contactInfo",
            StyleRole::ContactItem => "contactItem",
            StyleRole::ContactText => "contactText",
            StyleRole::Icon => "icon",
            StyleRole::Section => "section",
            StyleRole::SectionTitle => "sectionTitle",
            StyleRole::Subsection => "subsection",
            StyleRole::ItemTitle => "itemTitle",
            StyleRole::ItemSubtitle => "itemSubtitle",
            StyleRole::ItemDetails => "itemDetails",
            StyleRole::BulletPoint => "bulletPoint",
            StyleRole::DateLine => "dateLine",
            StyleRole::RightAlign => "rightAlign",
            StyleRole::InlineRow => "inlineRow",
            StyleRole::SkillsContainer => "skillsContainer",
            StyleRole::SkillCategory => "skillCategory",
            StyleRole::SkillCategoryLabel => "skillCategoryLabel",
            StyleRole::SkillItem => "skillItem",
        }
    }

    /// Inverse of [`StyleRole::name`], for stylesheet parsing.
    pub fn from_name(name: &str) -> Option<StyleRole> {
        StyleRole::ALL.iter().copied().find(|role| role.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_discriminant_in_order() {
        for (index, role) in StyleRole::ALL.iter().enumerate() {
            assert_eq!(*role as usize, index);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for role in StyleRole::ALL {
            assert_eq!(StyleRole::from_name(role.name()), Some(role));
        }
        assert_eq!(StyleRole::from_name("marquee"), None);
    }
}
