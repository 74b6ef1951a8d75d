// Layout composition: fixed section order, right-aligned date runs,
// the project technology headline, skills separator policy, and
// byte-for-byte determinism of the emitted tree.

use resume_editor_wasm::layout::{compose, Element};
use resume_editor_wasm::models::{
    RecordFields, ResumeDocument, ResumeHeader, ResumeRecord,
};
use resume_editor_wasm::style::{self, TextAlign};
use uuid::Uuid;

fn record(fields: RecordFields) -> ResumeRecord {
    ResumeRecord::new(Uuid::new_v4(), fields)
}

fn sample_document() -> ResumeDocument {
    let header = ResumeHeader {
        name: "Jordan Blake".to_string(),
        role: "Software Engineer".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "+1 555 010 2030".to_string(),
        linkedin: "https://linkedin.com/in/jordan".to_string(),
        github: "https://github.com/jordan".to_string(),
    };
    let education = vec![record(RecordFields {
        title: "State University".to_string(),
        subtitle: "B.Tech in Computer Science".to_string(),
        start_date: "2019".to_string(),
        end_date: "2023".to_string(),
        location: "Springfield".to_string(),
        ..Default::default()
    })];
    let experience = vec![record(RecordFields {
        title: "Software Engineer".to_string(),
        subtitle: "Acme Corp".to_string(),
        start_date: "2023".to_string(),
        end_date: "Present".to_string(),
        location: "Remote".to_string(),
        details: vec!["Shipped billing".to_string(), "Cut latency".to_string()],
        ..Default::default()
    })];
    let projects = vec![record(RecordFields {
        title: "Resume Builder".to_string(),
        start_date: "2024".to_string(),
        end_date: "2024".to_string(),
        details: vec!["Live PDF preview".to_string()],
        tags: vec!["Rust".to_string(), "WebAssembly".to_string()],
        ..Default::default()
    })];
    let skills = vec![
        record(RecordFields {
            title: "Languages".to_string(),
            tags: vec!["Rust".to_string(), "Go".to_string(), "Python".to_string()],
            ..Default::default()
        }),
        record(RecordFields {
            title: "Tools".to_string(),
            tags: vec!["Git".to_string()],
            ..Default::default()
        }),
    ];
    ResumeDocument::build(header, education, experience, projects, &skills)
}

/// Depth-first collection of every text leaf's content.
fn collect_text(element: &Element, out: &mut Vec<String>) {
    match element {
        Element::Box { children, .. } => {
            for child in children {
                collect_text(child, out);
            }
        }
        Element::Text { content, .. } => out.push(content.clone()),
        Element::Link { content, .. } => out.push(content.clone()),
        Element::Image { .. } => {}
    }
}

fn all_text(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    collect_text(root, &mut out);
    out
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let sheet = style::init().unwrap();
    let tree = compose(&sample_document(), sheet);
    let texts = all_text(&tree.root);

    let position = |needle: &str| {
        texts
            .iter()
            .position(|t| t == needle)
            .unwrap_or_else(|| panic!("'{}' missing from composed tree", needle))
    };

    let name = position("Jordan Blake");
    let education = position("Education");
    let experience = position("Experience");
    let projects = position("Projects");
    let skills = position("Technical Skills");
    assert!(name < education && education < experience, "header, then education, then experience");
    assert!(experience < projects && projects < skills, "projects before skills");
}

#[test]
fn test_date_range_is_right_aligned_on_the_title_line() {
    let sheet = style::init().unwrap();
    let tree = compose(&sample_document(), sheet);

    fn find_date_leaf(element: &Element) -> Option<&Element> {
        match element {
            Element::Text { content, .. } if content == "2019 - 2023" => Some(element),
            Element::Box { children, .. } => children.iter().find_map(find_date_leaf),
            _ => None,
        }
    }

    let leaf = find_date_leaf(&tree.root).expect("education date range must be emitted");
    match leaf {
        Element::Text { style, .. } => {
            assert_eq!(style.text_align, Some(TextAlign::Right), "date run must right-align");
            assert_eq!(
                style.font_family.as_deref(),
                Some("IBMPReg"),
                "merged date style keeps the date-line face"
            );
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_project_headline_inlines_technologies() {
    let sheet = style::init().unwrap();
    let tree = compose(&sample_document(), sheet);
    let texts = all_text(&tree.root);

    assert!(
        texts.iter().any(|t| t == "Resume Builder | "),
        "project title must carry the separator before the tech run"
    );
    assert!(
        texts.iter().any(|t| t == "Rust, WebAssembly"),
        "technologies join with ', ' on the headline"
    );
}

#[test]
fn test_skills_join_without_trailing_separator() {
    let sheet = style::init().unwrap();
    let tree = compose(&sample_document(), sheet);
    let texts = all_text(&tree.root);

    assert!(texts.iter().any(|t| t == "Languages: "), "category label ends with ': '");
    assert!(
        texts.iter().any(|t| t == "Rust, Go, Python"),
        "skills join with ', ' and no trailing separator"
    );
    assert!(
        !texts.iter().any(|t| t.ends_with(", ") && t.starts_with("Rust")),
        "no trailing ', ' after the last skill"
    );
}

#[test]
fn test_empty_details_emit_no_bullet_block() {
    let sheet = style::init().unwrap();
    let tree = compose(&sample_document(), sheet);
    let texts = all_text(&tree.root);

    let bullets: Vec<&String> = texts.iter().filter(|t| t.starts_with("- ")).collect();
    // One experience with two bullets, one project with one; the
    // education entry has no details and must add none.
    assert_eq!(bullets.len(), 3, "only records with details produce bullets");
    assert!(bullets.contains(&&"- Shipped billing".to_string()));
}

#[test]
fn test_header_skips_empty_contact_fields() {
    let sheet = style::init().unwrap();
    let mut doc = sample_document();
    doc.header.phone.clear();
    doc.header.github.clear();

    let tree = compose(&doc, sheet);
    let texts = all_text(&tree.root);
    assert!(texts.iter().any(|t| t == "jordan@example.com"));
    assert!(!texts.iter().any(|t| t == "GitHub"), "empty github link must be skipped");
    assert!(texts.iter().any(|t| t == "LinkedIn"));
}

#[test]
fn test_composition_is_deterministic() {
    let sheet = style::init().unwrap();
    let doc = sample_document();

    let first = serde_json::to_string(&compose(&doc, sheet)).unwrap();
    let second = serde_json::to_string(&compose(&doc, sheet)).unwrap();
    assert_eq!(first, second, "identical document and stylesheet must emit identical bytes");
}

#[test]
fn test_render_document_carries_page_and_fonts() {
    let sheet = style::init().unwrap();
    let tree = compose(&sample_document(), sheet);

    assert_eq!(tree.page.size, "A4");
    assert_eq!(tree.page.style.padding, Some(20.0));
    assert_eq!(tree.fonts.len(), 4, "the four Plex faces must be in the manifest");
}
