//! Style attribute bundles
//!
//! The concrete visual attributes a role resolves to. Every field is
//! optional; absent attributes are inherited or defaulted by the
//! external renderer, so serialization skips them to keep the emitted
//! tree small and stable.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
    Extralight,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FlexWrap {
    Wrap,
    NoWrap,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AlignItems {
    Center,
    FlexEnd,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum JustifyContent {
    Center,
    SpaceBetween,
}

/// One role's visual attributes. Sizes and spacing are in points, the
/// unit the paginated renderer works in.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl StyleAttrs {
    /// Layer `overlay` on top of `self`: every attribute the overlay
    /// sets wins, everything else is kept. This is how composed roles
    /// like "date line, right-aligned" are built from two rules.
    pub fn merge(&self, overlay: &StyleAttrs) -> StyleAttrs {
        macro_rules! pick {
            ($field:ident) => {
                overlay.$field.clone().or_else(|| self.$field.clone())
            };
        }
        StyleAttrs {
            font_family: pick!(font_family),
            font_size: pick!(font_size),
            font_weight: pick!(font_weight),
            color: pick!(color),
            background_color: pick!(background_color),
            padding: pick!(padding),
            padding_left: pick!(padding_left),
            padding_bottom: pick!(padding_bottom),
            margin_top: pick!(margin_top),
            margin_bottom: pick!(margin_bottom),
            margin_left: pick!(margin_left),
            border_bottom_width: pick!(border_bottom_width),
            border_bottom_color: pick!(border_bottom_color),
            text_align: pick!(text_align),
            flex_direction: pick!(flex_direction),
            flex_wrap: pick!(flex_wrap),
            align_items: pick!(align_items),
            justify_content: pick!(justify_content),
            width: pick!(width),
            height: pick!(height),
        }
    }
}
