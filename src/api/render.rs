//! Render API
//!
//! Builds the immutable document from store snapshots captured at call
//! time and hands the composed element tree to JavaScript, either as a
//! structured value or as JSON for the persistence/export sink.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{operation_error, serialize};
use crate::api::session::with_session;
use crate::layout;
use crate::wasm_log;

/// Compose the full render tree for the current resume.
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document() -> Result<JsValue, JsValue> {
    wasm_log!("renderDocument called");
    let sheet = crate::style::init().map_err(|e| operation_error("renderDocument", e))?;
    with_session("renderDocument", |session| {
        let doc = session.build_document();
        let tree = layout::compose(&doc, sheet);
        serialize(&tree, "renderDocument")
    })
}

/// Same tree as [`render_document`], serialized to a JSON string.
/// Byte-identical across calls for an unchanged resume.
#[wasm_bindgen(js_name = renderDocumentJson)]
pub fn render_document_json() -> Result<String, JsValue> {
    let sheet = crate::style::init().map_err(|e| operation_error("renderDocumentJson", e))?;
    with_session("renderDocumentJson", |session| {
        let doc = session.build_document();
        let tree = layout::compose(&doc, sheet);
        serde_json::to_string(&tree).map_err(|e| operation_error("renderDocumentJson", e))
    })
}

/// Fonts the renderer must register before the first render.
#[wasm_bindgen(js_name = fontManifest)]
pub fn font_manifest() -> Result<JsValue, JsValue> {
    let sheet = crate::style::init().map_err(|e| operation_error("fontManifest", e))?;
    serialize(&sheet.fonts(), "fontManifest")
}
