//! Session lifecycle API
//!
//! The WASM module owns the editing session as its canonical source of
//! truth, the same way the UI never holds authoritative state. The
//! mutex exists only because statics must be `Sync`; the WASM runtime
//! is single-threaded and the lock is never contended.

use wasm_bindgen::prelude::*;
use std::sync::Mutex;
use lazy_static::lazy_static;

use crate::api::helpers::{operation_error, serialize, validation_error};
use crate::editor::{ResumeSession, ResumeSnapshot};
use crate::{wasm_info, wasm_log};

// WASM-owned session storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Option<ResumeSession>> = Mutex::new(None);
}

/// Run a closure against the live session, surfacing a context-tagged
/// error when no session has been initialized yet.
pub(crate) fn with_session<R>(
    context: &str,
    f: impl FnOnce(&mut ResumeSession) -> Result<R, JsValue>,
) -> Result<R, JsValue> {
    let mut guard = SESSION
        .lock()
        .map_err(|_| validation_error(format!("{}: session lock poisoned", context)))?;
    match guard.as_mut() {
        Some(session) => f(session),
        None => Err(validation_error(format!(
            "{}: no session (call initEditor first)",
            context
        ))),
    }
}

/// Start a fresh session seeded with the starter resume and validate
/// the stylesheet up front, so a broken style config fails here and
/// never mid-render.
#[wasm_bindgen(js_name = initEditor)]
pub fn init_editor() -> Result<(), JsValue> {
    wasm_info!("initEditor called");
    crate::style::init().map_err(|e| operation_error("initEditor", e))?;
    let mut guard = SESSION
        .lock()
        .map_err(|_| validation_error("initEditor: session lock poisoned"))?;
    *guard = Some(ResumeSession::sample());
    Ok(())
}

/// Replace the session with a persisted snapshot (JSON from the
/// external persistence sink).
#[wasm_bindgen(js_name = loadResume)]
pub fn load_resume(json: &str) -> Result<(), JsValue> {
    wasm_info!("loadResume called ({} bytes)", json.len());
    let snapshot: ResumeSnapshot = serde_json::from_str(json)
        .map_err(|e| operation_error("loadResume: malformed snapshot", e))?;
    let mut guard = SESSION
        .lock()
        .map_err(|_| validation_error("loadResume: session lock poisoned"))?;
    *guard = Some(ResumeSession::from_snapshot(snapshot));
    Ok(())
}

/// Serialize the full resume for the persistence sink.
#[wasm_bindgen(js_name = resumeToJson)]
pub fn resume_to_json() -> Result<String, JsValue> {
    with_session("resumeToJson", |session| {
        serde_json::to_string(&session.snapshot())
            .map_err(|e| operation_error("resumeToJson", e))
    })
}

/// Current header fields.
#[wasm_bindgen(js_name = headerSnapshot)]
pub fn header_snapshot() -> Result<JsValue, JsValue> {
    with_session("headerSnapshot", |session| {
        serialize(session.header(), "headerSnapshot")
    })
}

/// Write one header field from a UI change event.
#[wasm_bindgen(js_name = setHeaderField)]
pub fn set_header_field(name: &str, value: String) -> Result<(), JsValue> {
    wasm_log!("setHeaderField: {}", name);
    with_session("setHeaderField", |session| {
        session
            .set_header_field(name, value)
            .map_err(|e| operation_error("setHeaderField", e))
    })
}
