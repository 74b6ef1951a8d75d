//! Resume Editor WASM API
//!
//! The JavaScript-facing boundary. The UI sends discrete events
//! (dialog open/close, field changes, save/confirm) and reads
//! snapshots; the paginated renderer consumes the composed element
//! tree. All data crosses the boundary through serde.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, validation, error handling, and logging
//! - `session`: session lifecycle (init, snapshot load/save, header)
//! - `forms`: the per-section add/edit/delete dialog operations
//! - `render`: document composition and the font manifest

pub mod forms;
pub mod helpers;
pub mod render;
pub mod session;

pub use forms::{
    cancel_dialog, confirm_delete, dialog_state, form_snapshot, list_records, open_add_dialog,
    open_delete_dialog, open_edit_dialog, save_dialog, section_schema_js, set_form_field,
};
pub use render::{font_manifest, render_document, render_document_json};
pub use session::{
    header_snapshot, init_editor, load_resume, resume_to_json, set_header_field,
};
