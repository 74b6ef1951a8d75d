//! Style resolver
//!
//! Process-wide style configuration: an embedded YAML document defining
//! the page geometry, the font registration manifest, and one attribute
//! bundle per semantic role. Parsed and validated exactly once into a
//! [`OnceCell`]; after a successful `init` every role resolves
//! infallibly by table index, and nothing can redefine a rule.

pub mod fonts;
pub mod roles;
pub mod rules;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

pub use fonts::FontAsset;
pub use roles::StyleRole;
pub use rules::{
    AlignItems, FlexDirection, FlexWrap, FontWeight, JustifyContent, StyleAttrs, TextAlign,
};

const STYLESHEET_SOURCE: &str = include_str!("stylesheet.yaml");

/// Fatal configuration failure. Surfaced at startup; rendering is never
/// invoked against a stylesheet that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("stylesheet parse failure: {0}")]
    Parse(String),

    #[error("stylesheet defines unknown role '{0}'")]
    UnknownRole(String),

    #[error("stylesheet defines role '{0}' more than once")]
    DuplicateRole(String),

    #[error("stylesheet is missing role '{0}'")]
    MissingRole(&'static str),

    #[error("font family '{0}' registered twice with conflicting attributes")]
    ConflictingFont(String),
}

#[derive(Deserialize)]
struct RawStylesheet {
    page: RawPage,
    fonts: Vec<FontAsset>,
    roles: Vec<RawRole>,
}

#[derive(Deserialize)]
struct RawPage {
    size: String,
}

#[derive(Deserialize)]
struct RawRole {
    role: String,
    #[serde(flatten)]
    attrs: StyleAttrs,
}

/// Validated, immutable style configuration.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    page_size: String,
    fonts: Vec<FontAsset>,
    // Indexed by role discriminant; validation guarantees full coverage.
    rules: Vec<StyleAttrs>,
}

impl Stylesheet {
    /// The attribute bundle for a role. Total after init.
    pub fn resolve(&self, role: StyleRole) -> &StyleAttrs {
        &self.rules[role as usize]
    }

    /// Two rules layered, overlay winning. The composed "date line,
    /// right-aligned" style in the document is built this way.
    pub fn resolve_merged(&self, base: StyleRole, overlay: StyleRole) -> StyleAttrs {
        self.resolve(base).merge(self.resolve(overlay))
    }

    /// Fonts the external renderer must register before first render.
    pub fn fonts(&self) -> &[FontAsset] {
        &self.fonts
    }

    /// Named page size handed to the renderer (e.g. "A4").
    pub fn page_size(&self) -> &str {
        &self.page_size
    }
}

fn load(source: &str) -> Result<Stylesheet, ConfigError> {
    let raw: RawStylesheet =
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let fonts = fonts::dedup_fonts(raw.fonts)?;

    let mut slots: Vec<Option<StyleAttrs>> = vec![None; StyleRole::COUNT];
    for entry in raw.roles {
        let role = StyleRole::from_name(&entry.role)
            .ok_or_else(|| ConfigError::UnknownRole(entry.role.clone()))?;
        let slot = &mut slots[role as usize];
        if slot.is_some() {
            return Err(ConfigError::DuplicateRole(entry.role));
        }
        *slot = Some(entry.attrs);
    }

    let mut rules = Vec::with_capacity(StyleRole::COUNT);
    for role in StyleRole::ALL {
        match slots[role as usize].take() {
            Some(attrs) => rules.push(attrs),
            None => return Err(ConfigError::MissingRole(role.name())),
        }
    }

    Ok(Stylesheet {
        page_size: raw.page.size,
        fonts,
        rules,
    })
}

static SHEET: OnceCell<Stylesheet> = OnceCell::new();

/// Parse and validate the embedded stylesheet, once per process.
///
/// Idempotent: repeated calls return the same cached sheet. There is no
/// teardown; the configuration is immutable for the process lifetime.
pub fn init() -> Result<&'static Stylesheet, ConfigError> {
    SHEET.get_or_try_init(|| load(STYLESHEET_SOURCE))
}
