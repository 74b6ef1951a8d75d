//! Document walk
//!
//! Deterministic traversal of the resume in fixed section order: header,
//! education, experience, projects, skills. Per record: title line with
//! the date range right-aligned, subtitle line with the location
//! right-aligned, then the indented bullet block. Projects inline their
//! technology run after the title; skills render one category row each,
//! skills joined with ", " and no trailing separator.

use crate::models::{ResumeDocument, ResumeHeader, ResumeRecord, SectionKind, SkillsTaxonomy};
use crate::style::{StyleRole, Stylesheet};

use super::tree::{Element, PageSetup, RenderDocument};

const EMAIL_ICON: &str = "/assets/icons/email.png";
const PHONE_ICON: &str = "/assets/icons/phone.png";
const LINKEDIN_ICON: &str = "/assets/icons/linkedin.png";
const GITHUB_ICON: &str = "/assets/icons/github.png";

/// Emit the full render document for one resume snapshot.
///
/// Read-only and repeatable: identical inputs produce a byte-identical
/// serialized tree (no clock reads, no unordered maps anywhere).
pub fn compose(doc: &ResumeDocument, sheet: &Stylesheet) -> RenderDocument {
    let mut children = vec![header_block(&doc.header, sheet)];

    children.push(record_section(
        SectionKind::Education.display_title(),
        &doc.education,
        false,
        sheet,
    ));
    children.push(record_section(
        SectionKind::Experience.display_title(),
        &doc.experience,
        false,
        sheet,
    ));
    children.push(record_section(
        SectionKind::Projects.display_title(),
        &doc.projects,
        true,
        sheet,
    ));
    children.push(skills_section(&doc.skills, sheet));

    RenderDocument {
        page: PageSetup {
            size: sheet.page_size().to_string(),
            style: sheet.resolve(StyleRole::Page).clone(),
        },
        fonts: sheet.fonts().to_vec(),
        root: Element::boxed(Default::default(), children),
    }
}

fn header_block(header: &ResumeHeader, sheet: &Stylesheet) -> Element {
    let mut children = vec![
        Element::text(sheet.resolve(StyleRole::Name).clone(), &header.name),
        Element::text(sheet.resolve(StyleRole::Role).clone(), &header.role),
    ];

    let mut contact = Vec::new();
    if !header.email.is_empty() {
        contact.push(contact_text(EMAIL_ICON, &header.email, sheet));
    }
    if !header.phone.is_empty() {
        contact.push(contact_text(PHONE_ICON, &header.phone, sheet));
    }
    if !header.linkedin.is_empty() {
        contact.push(contact_link(LINKEDIN_ICON, &header.linkedin, "LinkedIn", sheet));
    }
    if !header.github.is_empty() {
        contact.push(contact_link(GITHUB_ICON, &header.github, "GitHub", sheet));
    }
    children.push(Element::boxed(
        sheet.resolve(StyleRole::ContactInfo).clone(),
        contact,
    ));

    Element::boxed(sheet.resolve(StyleRole::Header).clone(), children)
}

fn contact_text(icon: &str, text: &str, sheet: &Stylesheet) -> Element {
    Element::boxed(
        sheet.resolve(StyleRole::ContactItem).clone(),
        vec![
            icon_image(icon, sheet),
            Element::text(sheet.resolve(StyleRole::ContactText).clone(), text),
        ],
    )
}

fn contact_link(icon: &str, href: &str, anchor: &str, sheet: &Stylesheet) -> Element {
    Element::boxed(
        sheet.resolve(StyleRole::ContactItem).clone(),
        vec![
            icon_image(icon, sheet),
            Element::Link {
                style: sheet.resolve(StyleRole::ContactText).clone(),
                href: href.to_string(),
                content: anchor.to_string(),
            },
        ],
    )
}

fn icon_image(source: &str, sheet: &Stylesheet) -> Element {
    Element::Image {
        style: sheet.resolve(StyleRole::Icon).clone(),
        source: source.to_string(),
    }
}

/// One list section: underlined heading, then one subsection per record
/// in store order. `inline_tags` selects the project headline variant.
fn record_section(
    title: &str,
    records: &[ResumeRecord],
    inline_tags: bool,
    sheet: &Stylesheet,
) -> Element {
    let mut children = vec![Element::text(
        sheet.resolve(StyleRole::SectionTitle).clone(),
        title,
    )];
    children.extend(
        records
            .iter()
            .map(|record| entry_block(record, inline_tags, sheet)),
    );
    Element::boxed(sheet.resolve(StyleRole::Section).clone(), children)
}

fn entry_block(record: &ResumeRecord, inline_tags: bool, sheet: &Stylesheet) -> Element {
    let mut children = vec![title_line(record, inline_tags, sheet)];

    if !record.subtitle.is_empty() || !record.location.is_empty() {
        children.push(subtitle_line(record, sheet));
    }
    if !record.details.is_empty() {
        children.push(bullet_block(&record.details, sheet));
    }

    Element::boxed(sheet.resolve(StyleRole::Subsection).clone(), children)
}

/// `title ............ start - end`, the date range right-aligned on
/// the same visual line. Projects widen the left side to
/// `title | tech1, tech2` with the technology run in the subtitle face.
fn title_line(record: &ResumeRecord, inline_tags: bool, sheet: &Stylesheet) -> Element {
    let title_style = sheet.resolve(StyleRole::ItemTitle).clone();
    let left = if inline_tags && !record.tags.is_empty() {
        Element::boxed(
            sheet.resolve(StyleRole::InlineRow).clone(),
            vec![
                Element::text(title_style, format!("{} | ", record.title)),
                Element::text(
                    sheet.resolve(StyleRole::ItemSubtitle).clone(),
                    record.tags.join(", "),
                ),
            ],
        )
    } else {
        Element::text(title_style, &record.title)
    };

    let mut children = vec![left];
    if record.has_dates() {
        children.push(Element::text(
            sheet.resolve_merged(StyleRole::DateLine, StyleRole::RightAlign),
            record.date_range(),
        ));
    }
    Element::boxed(sheet.resolve(StyleRole::DateLine).clone(), children)
}

/// `subtitle ............ location`, both in the italic subtitle face.
fn subtitle_line(record: &ResumeRecord, sheet: &Stylesheet) -> Element {
    Element::boxed(
        sheet.resolve(StyleRole::DateLine).clone(),
        vec![
            Element::text(sheet.resolve(StyleRole::ItemSubtitle).clone(), &record.subtitle),
            Element::text(
                sheet.resolve_merged(StyleRole::ItemSubtitle, StyleRole::RightAlign),
                &record.location,
            ),
        ],
    )
}

/// Indented block, one "- " bullet per detail entry.
fn bullet_block(details: &[String], sheet: &Stylesheet) -> Element {
    let bullet_style = sheet.resolve(StyleRole::BulletPoint);
    Element::boxed(
        sheet.resolve(StyleRole::ItemDetails).clone(),
        details
            .iter()
            .map(|detail| Element::text(bullet_style.clone(), format!("- {}", detail)))
            .collect(),
    )
}

fn skills_section(skills: &SkillsTaxonomy, sheet: &Stylesheet) -> Element {
    let rows = skills
        .categories
        .iter()
        .map(|category| {
            Element::boxed(
                sheet.resolve(StyleRole::SkillCategory).clone(),
                vec![
                    Element::text(
                        sheet.resolve(StyleRole::SkillCategoryLabel).clone(),
                        format!("{}: ", category.label),
                    ),
                    Element::text(
                        sheet.resolve(StyleRole::SkillItem).clone(),
                        category.skills.join(", "),
                    ),
                ],
            )
        })
        .collect();

    Element::boxed(
        sheet.resolve(StyleRole::Section).clone(),
        vec![
            Element::text(
                sheet.resolve(StyleRole::SectionTitle).clone(),
                SectionKind::Skills.display_title(),
            ),
            Element::boxed(sheet.resolve(StyleRole::SkillsContainer).clone(), rows),
        ],
    )
}
