//! Renderer-ready element tree
//!
//! The declarative structure handed across the boundary to the external
//! paginated renderer: nested styled boxes with text/image/link leaves.
//! Styles arrive fully resolved — the renderer never sees role tags.
//! Everything serializes with stable field order, so an identical
//! document and stylesheet always produce a byte-identical tree.

use serde::{Deserialize, Serialize};

use crate::style::{FontAsset, StyleAttrs};

/// One node of the output tree.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Nested container; layout behavior comes from its style attrs.
    Box {
        style: StyleAttrs,
        children: Vec<Element>,
    },
    /// Text leaf.
    Text { style: StyleAttrs, content: String },
    /// Image leaf (contact icons).
    Image { style: StyleAttrs, source: String },
    /// Hyperlink leaf with anchor text.
    Link {
        style: StyleAttrs,
        href: String,
        content: String,
    },
}

impl Element {
    pub fn boxed(style: StyleAttrs, children: Vec<Element>) -> Element {
        Element::Box { style, children }
    }

    pub fn text(style: StyleAttrs, content: impl Into<String>) -> Element {
        Element::Text {
            style,
            content: content.into(),
        }
    }
}

/// Fixed page geometry consumed by the external renderer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSetup {
    /// Named size, e.g. "A4".
    pub size: String,
    /// Page-level style (padding, base font, background).
    pub style: StyleAttrs,
}

/// The complete render output: page setup, the fonts to register before
/// rendering, and the element tree rooted at the page content.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderDocument {
    pub page: PageSetup,
    pub fonts: Vec<FontAsset>,
    pub root: Element,
}
