//! Named font registration
//!
//! The external renderer loads fonts by family name before the first
//! render; this manifest tells it what to load. Families must be
//! registered once — a second entry for the same family is tolerated
//! only when it is byte-identical, otherwise startup fails.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// One font the renderer must register prior to rendering.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FontAsset {
    /// Family name referenced by `StyleAttrs::font_family`.
    pub family: String,
    /// Asset path the renderer fetches the face from.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Drop exact duplicate registrations, reject conflicting ones.
pub fn dedup_fonts(fonts: Vec<FontAsset>) -> Result<Vec<FontAsset>, ConfigError> {
    let mut kept: Vec<FontAsset> = Vec::with_capacity(fonts.len());
    for font in fonts {
        match kept.iter().find(|existing| existing.family == font.family) {
            None => kept.push(font),
            Some(existing) if *existing == font => {}
            Some(_) => {
                return Err(ConfigError::ConflictingFont(font.family));
            }
        }
    }
    Ok(kept)
}
