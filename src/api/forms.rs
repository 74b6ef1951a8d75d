//! Dialog and form API
//!
//! One `#[wasm_bindgen]` function per UI event in the add/edit/delete
//! flow, addressed by section discriminant. These are thin wrappers:
//! every transition rule lives in `editor::SectionEditor`.

use wasm_bindgen::prelude::*;
use js_sys;

use crate::api::helpers::{operation_error, parse_record_id, section_from_u8, serialize};
use crate::api::session::with_session;
use crate::editor::schema::section_schema;
use crate::{wasm_info, wasm_log};

/// Records of a section in display order, as a JavaScript array.
#[wasm_bindgen(js_name = listRecords)]
pub fn list_records(section: u8) -> Result<js_sys::Array, JsValue> {
    let kind = section_from_u8(section)?;
    with_session("listRecords", |session| {
        let records = session.editor(kind).list();
        let array = js_sys::Array::new();
        for record in &records {
            array.push(&serialize(record, "listRecords")?);
        }
        Ok(array)
    })
}

/// Field descriptors the UI uses to build the section's dialog.
#[wasm_bindgen(js_name = sectionSchema)]
pub fn section_schema_js(section: u8) -> Result<JsValue, JsValue> {
    let kind = section_from_u8(section)?;
    serialize(&section_schema(kind), "sectionSchema")
}

#[wasm_bindgen(js_name = openAddDialog)]
pub fn open_add_dialog(section: u8) -> Result<(), JsValue> {
    let kind = section_from_u8(section)?;
    wasm_info!("openAddDialog: {}", kind.name());
    with_session("openAddDialog", |session| {
        session.editor_mut(kind).open_add();
        Ok(())
    })
}

#[wasm_bindgen(js_name = openEditDialog)]
pub fn open_edit_dialog(section: u8, id: &str) -> Result<(), JsValue> {
    let kind = section_from_u8(section)?;
    let id = parse_record_id(id)?;
    wasm_info!("openEditDialog: {} {}", kind.name(), id);
    with_session("openEditDialog", |session| {
        session
            .editor_mut(kind)
            .open_edit(id)
            .map_err(|e| operation_error("openEditDialog", e))
    })
}

#[wasm_bindgen(js_name = openDeleteDialog)]
pub fn open_delete_dialog(section: u8, id: &str) -> Result<(), JsValue> {
    let kind = section_from_u8(section)?;
    let id = parse_record_id(id)?;
    wasm_info!("openDeleteDialog: {} {}", kind.name(), id);
    with_session("openDeleteDialog", |session| {
        session
            .editor_mut(kind)
            .open_delete(id)
            .map_err(|e| operation_error("openDeleteDialog", e))
    })
}

/// Mirror one keystroke into the form buffer. The store is never
/// touched here.
#[wasm_bindgen(js_name = setFormField)]
pub fn set_form_field(section: u8, name: &str, value: String) -> Result<(), JsValue> {
    let kind = section_from_u8(section)?;
    with_session("setFormField", |session| {
        session
            .editor_mut(kind)
            .set_field(name, value)
            .map_err(|e| operation_error("setFormField", e))
    })
}

/// Current form buffer contents (controlled-input values).
#[wasm_bindgen(js_name = formSnapshot)]
pub fn form_snapshot(section: u8) -> Result<JsValue, JsValue> {
    let kind = section_from_u8(section)?;
    with_session("formSnapshot", |session| {
        serialize(session.editor(kind).buffer(), "formSnapshot")
    })
}

/// Which dialog is open for the section, if any.
#[wasm_bindgen(js_name = dialogState)]
pub fn dialog_state(section: u8) -> Result<JsValue, JsValue> {
    let kind = section_from_u8(section)?;
    with_session("dialogState", |session| {
        serialize(&session.editor(kind).dialog(), "dialogState")
    })
}

/// Commit the open add/edit dialog. Returns the affected record id, or
/// `null` when no form dialog was open.
#[wasm_bindgen(js_name = saveDialog)]
pub fn save_dialog(section: u8) -> Result<Option<String>, JsValue> {
    let kind = section_from_u8(section)?;
    wasm_log!("saveDialog: {}", kind.name());
    with_session("saveDialog", |session| {
        session
            .editor_mut(kind)
            .save()
            .map(|id| id.map(|id| id.to_string()))
            .map_err(|e| operation_error("saveDialog", e))
    })
}

/// Close the open dialog, discarding buffer changes.
#[wasm_bindgen(js_name = cancelDialog)]
pub fn cancel_dialog(section: u8) -> Result<(), JsValue> {
    let kind = section_from_u8(section)?;
    with_session("cancelDialog", |session| {
        session.editor_mut(kind).cancel();
        Ok(())
    })
}

/// Commit the delete confirmation. Returns the removed record id, or
/// `null` when no confirmation was open.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete(section: u8) -> Result<Option<String>, JsValue> {
    let kind = section_from_u8(section)?;
    wasm_log!("confirmDelete: {}", kind.name());
    with_session("confirmDelete", |session| {
        session
            .editor_mut(kind)
            .confirm_delete()
            .map(|removed| removed.map(|record| record.id.to_string()))
            .map_err(|e| operation_error("confirmDelete", e))
    })
}
