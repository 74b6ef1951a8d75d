//! Resume Editor WASM Module
//!
//! Structured resume editing core: per-section record stores behind a
//! dialog state machine, field normalization between form text and
//! structured records, and a deterministic pipeline that composes the
//! resume into the element tree consumed by the external paginated
//! renderer.

pub mod api;
pub mod editor;
pub mod layout;
pub mod models;
pub mod normalize;
pub mod store;
pub mod style;

// Re-export commonly used types
pub use editor::{DialogState, EditorError, ResumeSession, ResumeSnapshot, SectionEditor};
pub use models::{
    FormBuffer, RecordFields, RecordId, ResumeDocument, ResumeHeader, ResumeRecord, SectionKind,
};
pub use store::{SectionStore, StoreError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Resume Editor WASM module initialized");
}
