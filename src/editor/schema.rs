//! Per-section form schemas
//!
//! One static descriptor table per section drives the generic list
//! editor: the UI queries the table to build each dialog instead of
//! hard-coding a form per section, and the controller uses it to reject
//! writes to fields a section does not expose.

use serde::Serialize;

use crate::models::SectionKind;

/// Widget class the UI should render for a field.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    /// Single-line text input.
    Text,
    /// Multi-line textarea; the buffer holds one bullet per line.
    Multiline,
    /// Single-line input holding a comma-separated list.
    TagList,
}

/// Descriptor for one dialog field.
#[derive(Serialize, Clone, Debug)]
pub struct FieldSpec {
    /// Buffer slot name, also the `name` in UI change events.
    pub name: &'static str,
    /// Label shown next to the widget.
    pub label: &'static str,
    pub widget: WidgetKind,
    pub placeholder: &'static str,
}

/// The dialog fields for a section, in display order.
pub fn section_schema(kind: SectionKind) -> &'static [FieldSpec] {
    match kind {
        SectionKind::Education => &[
            FieldSpec {
                name: "title",
                label: "Institution",
                widget: WidgetKind::Text,
                placeholder: "Enter institution name",
            },
            FieldSpec {
                name: "subtitle",
                label: "Degree",
                widget: WidgetKind::Text,
                placeholder: "Enter degree",
            },
            FieldSpec {
                name: "startDate",
                label: "Start Date",
                widget: WidgetKind::Text,
                placeholder: "",
            },
            FieldSpec {
                name: "endDate",
                label: "End Date",
                widget: WidgetKind::Text,
                placeholder: "",
            },
            FieldSpec {
                name: "location",
                label: "Location",
                widget: WidgetKind::Text,
                placeholder: "Enter location",
            },
        ],
        SectionKind::Experience => &[
            FieldSpec {
                name: "title",
                label: "Job Title",
                widget: WidgetKind::Text,
                placeholder: "Enter job title",
            },
            FieldSpec {
                name: "subtitle",
                label: "Company",
                widget: WidgetKind::Text,
                placeholder: "Enter company name",
            },
            FieldSpec {
                name: "startDate",
                label: "Start Date",
                widget: WidgetKind::Text,
                placeholder: "",
            },
            FieldSpec {
                name: "endDate",
                label: "End Date",
                widget: WidgetKind::Text,
                placeholder: "",
            },
            FieldSpec {
                name: "location",
                label: "Location",
                widget: WidgetKind::Text,
                placeholder: "Enter location",
            },
            FieldSpec {
                name: "details",
                label: "Details",
                widget: WidgetKind::Multiline,
                placeholder: "Enter details separated by new lines",
            },
        ],
        SectionKind::Projects => &[
            FieldSpec {
                name: "title",
                label: "Title",
                widget: WidgetKind::Text,
                placeholder: "Enter project title",
            },
            FieldSpec {
                name: "subtitle",
                label: "Affiliation",
                widget: WidgetKind::Text,
                placeholder: "Enter company or affiliation",
            },
            FieldSpec {
                name: "startDate",
                label: "Start Date",
                widget: WidgetKind::Text,
                placeholder: "",
            },
            FieldSpec {
                name: "endDate",
                label: "End Date",
                widget: WidgetKind::Text,
                placeholder: "",
            },
            FieldSpec {
                name: "details",
                label: "Details",
                widget: WidgetKind::Multiline,
                placeholder: "Enter details separated by new lines",
            },
            FieldSpec {
                name: "tags",
                label: "Technologies",
                widget: WidgetKind::TagList,
                placeholder: "Enter technologies separated by commas",
            },
        ],
        SectionKind::Skills => &[
            FieldSpec {
                name: "title",
                label: "Category",
                widget: WidgetKind::Text,
                placeholder: "Enter category label",
            },
            FieldSpec {
                name: "tags",
                label: "Skills",
                widget: WidgetKind::TagList,
                placeholder: "Enter skills separated by commas",
            },
        ],
    }
}

/// Whether the section's dialog exposes a field with this name.
pub fn has_field(kind: SectionKind, name: &str) -> bool {
    section_schema(kind).iter().any(|spec| spec.name == name)
}
