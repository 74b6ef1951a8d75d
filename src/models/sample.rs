//! Starter resume
//!
//! `initEditor` seeds the session with this pre-filled sample so the
//! preview renders something immediately; `loadResume` replaces it with
//! a persisted snapshot.

use super::header::ResumeHeader;
use super::record::RecordFields;

pub fn sample_header() -> ResumeHeader {
    ResumeHeader {
        name: "Jordan Blake".to_string(),
        role: "Software Engineer".to_string(),
        email: "jordan.blake@example.com".to_string(),
        phone: "+1 555 010 2030".to_string(),
        linkedin: "https://www.linkedin.com/in/jordanblake".to_string(),
        github: "https://github.com/jordanblake".to_string(),
    }
}

pub fn sample_education() -> Vec<RecordFields> {
    vec![RecordFields {
        title: "State University".to_string(),
        subtitle: "B.Tech in Computer Science".to_string(),
        start_date: "2019".to_string(),
        end_date: "2023".to_string(),
        location: "Springfield".to_string(),
        ..Default::default()
    }]
}

pub fn sample_experience() -> Vec<RecordFields> {
    vec![RecordFields {
        title: "Software Engineer".to_string(),
        subtitle: "Acme Corp".to_string(),
        start_date: "Jun 2023".to_string(),
        end_date: "Present".to_string(),
        location: "Remote".to_string(),
        details: vec![
            "Built and maintained internal billing services".to_string(),
            "Cut report generation time by 40% through query batching".to_string(),
        ],
        ..Default::default()
    }]
}

pub fn sample_projects() -> Vec<RecordFields> {
    vec![RecordFields {
        title: "Resume Builder".to_string(),
        start_date: "2024".to_string(),
        end_date: "2024".to_string(),
        details: vec![
            "Structured editor with live PDF preview".to_string(),
            "Deterministic layout pipeline over typed records".to_string(),
        ],
        tags: vec!["Rust".to_string(), "WebAssembly".to_string(), "React".to_string()],
        ..Default::default()
    }]
}

pub fn sample_skills() -> Vec<RecordFields> {
    vec![
        RecordFields {
            title: "Languages".to_string(),
            tags: vec![
                "Rust".to_string(),
                "TypeScript".to_string(),
                "Python".to_string(),
            ],
            ..Default::default()
        },
        RecordFields {
            title: "Tools".to_string(),
            tags: vec!["Git".to_string(), "Docker".to_string(), "PostgreSQL".to_string()],
            ..Default::default()
        },
    ]
}
