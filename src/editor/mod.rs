//! Section editor controller
//!
//! One [`SectionEditor`] per resume section: it owns the section's
//! store, the shared add/edit form buffer, and the dialog state machine.
//! At most one dialog is open at a time; opening a dialog implicitly
//! closes whichever was open, so mutual exclusion is enforced here and
//! not left to caller discipline. Field edits touch only the buffer; the
//! store is touched exclusively on save/confirm.

pub mod schema;
pub mod session;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FormBuffer, RecordId, ResumeRecord, SectionKind};
use crate::normalize;
use crate::store::{SectionStore, StoreError};

pub use schema::{section_schema, FieldSpec, WidgetKind};
pub use session::{ResumeSession, ResumeSnapshot};

/// Which dialog, if any, is currently open for a section.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DialogState {
    #[default]
    Idle,
    AddOpen,
    EditOpen,
    DeleteConfirm,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The section's schema exposes no field with this name.
    #[error("section {section} has no field named '{field}'")]
    UnknownField { section: &'static str, field: String },
}

/// Controller for one section's add/edit/delete dialogs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SectionEditor {
    kind: SectionKind,
    store: SectionStore,
    dialog: DialogState,
    selected: Option<RecordId>,
    buffer: FormBuffer,
}

impl SectionEditor {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            store: SectionStore::new(),
            dialog: DialogState::Idle,
            selected: None,
            buffer: FormBuffer::default(),
        }
    }

    /// Adopt an existing collection (snapshot load); dialogs start closed.
    pub fn from_records(kind: SectionKind, records: Vec<ResumeRecord>) -> Self {
        Self {
            kind,
            store: SectionStore::from_records(records),
            dialog: DialogState::Idle,
            selected: None,
            buffer: FormBuffer::default(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn selected(&self) -> Option<RecordId> {
        self.selected
    }

    pub fn buffer(&self) -> &FormBuffer {
        &self.buffer
    }

    pub fn store(&self) -> &SectionStore {
        &self.store
    }

    /// Direct store access for seeding and snapshot plumbing. Dialog
    /// flows never use this; they commit through `save`/`confirm_delete`.
    pub(crate) fn store_mut(&mut self) -> &mut SectionStore {
        &mut self.store
    }

    /// Snapshot of the section's records in display order.
    pub fn list(&self) -> Vec<ResumeRecord> {
        self.store.list()
    }

    /// Open the add dialog with an empty buffer and no selection.
    pub fn open_add(&mut self) {
        self.close_dialog();
        self.buffer.reset();
        self.dialog = DialogState::AddOpen;
        log::debug!("[{}] add dialog opened", self.kind.name());
    }

    /// Open the edit dialog, hydrating the buffer from the record.
    ///
    /// A missing id aborts the transition: the dialog stays closed and
    /// `NotFound` is surfaced.
    pub fn open_edit(&mut self, id: RecordId) -> Result<(), EditorError> {
        self.close_dialog();
        let record = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        self.buffer = normalize::record_to_buffer(record);
        self.selected = Some(id);
        self.dialog = DialogState::EditOpen;
        log::debug!("[{}] edit dialog opened for {}", self.kind.name(), id);
        Ok(())
    }

    /// Open the delete confirmation; the buffer is untouched.
    pub fn open_delete(&mut self, id: RecordId) -> Result<(), EditorError> {
        self.close_dialog();
        if self.store.get(id).is_none() {
            return Err(StoreError::NotFound(id).into());
        }
        self.selected = Some(id);
        self.dialog = DialogState::DeleteConfirm;
        log::debug!("[{}] delete confirm opened for {}", self.kind.name(), id);
        Ok(())
    }

    /// Write one buffer slot from a UI change event. Only the buffer is
    /// touched; the store never sees keystrokes.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), EditorError> {
        if !schema::has_field(self.kind, name) || !self.buffer.set_field(name, value) {
            return Err(EditorError::UnknownField {
                section: self.kind.name(),
                field: name.to_string(),
            });
        }
        if !matches!(self.dialog, DialogState::AddOpen | DialogState::EditOpen) {
            // Tolerated (the write is harmless, the buffer is reset on
            // the next open) but it means the UI and controller disagree
            // about what is on screen.
            log::warn!(
                "[{}] field '{}' edited with no form dialog open",
                self.kind.name(),
                name
            );
        }
        Ok(())
    }

    /// Commit the open add/edit dialog: normalize the buffer, create or
    /// update, close. Returns the affected record id, or `None` when no
    /// form dialog was open (logged and ignored).
    pub fn save(&mut self) -> Result<Option<RecordId>, EditorError> {
        let fields = normalize::buffer_to_fields(&self.buffer);
        let id = match self.dialog {
            DialogState::AddOpen => {
                debug_assert!(self.selected.is_none());
                self.store.create(fields)
            }
            DialogState::EditOpen => {
                let Some(id) = self.selected else {
                    log::warn!("[{}] edit dialog open without a selection", self.kind.name());
                    self.close_dialog();
                    return Ok(None);
                };
                self.store.update(id, fields)?;
                id
            }
            DialogState::Idle | DialogState::DeleteConfirm => {
                log::warn!("[{}] save with no form dialog open", self.kind.name());
                return Ok(None);
            }
        };
        self.close_dialog();
        log::debug!("[{}] saved record {}", self.kind.name(), id);
        Ok(Some(id))
    }

    /// Close the open dialog and discard buffer changes; the store is
    /// untouched.
    pub fn cancel(&mut self) {
        if self.dialog != DialogState::Idle {
            log::debug!("[{}] dialog cancelled", self.kind.name());
        }
        self.close_dialog();
    }

    /// Commit the delete confirmation. Returns the removed record, or
    /// `None` when no confirmation was open.
    pub fn confirm_delete(&mut self) -> Result<Option<ResumeRecord>, EditorError> {
        if self.dialog != DialogState::DeleteConfirm {
            log::warn!("[{}] delete confirm with no dialog open", self.kind.name());
            return Ok(None);
        }
        let Some(id) = self.selected else {
            log::warn!("[{}] delete confirm open without a selection", self.kind.name());
            self.close_dialog();
            return Ok(None);
        };
        let removed = self.store.delete(id)?;
        self.close_dialog();
        log::debug!("[{}] deleted record {}", self.kind.name(), id);
        Ok(Some(removed))
    }

    fn close_dialog(&mut self) {
        self.dialog = DialogState::Idle;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_one_project() -> (SectionEditor, RecordId) {
        let mut editor = SectionEditor::new(SectionKind::Projects);
        editor.open_add();
        editor.set_field("title", "X".to_string()).unwrap();
        editor.set_field("details", "a\nb\n".to_string()).unwrap();
        editor.set_field("tags", "go, rust,".to_string()).unwrap();
        let id = editor.save().unwrap().expect("add dialog was open");
        (editor, id)
    }

    #[test]
    fn test_add_then_list_normalizes_fields() {
        let (editor, id) = editor_with_one_project();
        let listed = editor.list();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].title, "X");
        assert_eq!(listed[0].details, vec!["a", "b"]);
        assert_eq!(listed[0].tags, vec!["go", "rust"]);
        assert_eq!(editor.dialog(), DialogState::Idle);
    }

    #[test]
    fn test_edit_preserves_id_and_position() {
        let (mut editor, first) = editor_with_one_project();
        editor.open_add();
        editor.set_field("title", "Second".to_string()).unwrap();
        editor.save().unwrap();

        editor.open_edit(first).unwrap();
        assert_eq!(editor.buffer().details, "a\nb");
        assert_eq!(editor.buffer().tags, "go, rust");
        editor.set_field("title", "Y".to_string()).unwrap();
        editor.save().unwrap();

        let listed = editor.list();
        assert_eq!(listed[0].id, first);
        assert_eq!(listed[0].title, "Y");
        assert_eq!(listed[1].title, "Second");
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let (mut editor, id) = editor_with_one_project();
        editor.open_edit(id).unwrap();
        editor.set_field("title", "scratch".to_string()).unwrap();
        editor.cancel();

        assert_eq!(editor.list()[0].title, "X");
        assert_eq!(editor.dialog(), DialogState::Idle);
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn test_keystrokes_never_touch_the_store() {
        let (mut editor, id) = editor_with_one_project();
        editor.open_edit(id).unwrap();
        editor.set_field("title", "half-typed".to_string()).unwrap();

        // Nothing committed yet.
        assert_eq!(editor.list()[0].title, "X");
    }

    #[test]
    fn test_opening_a_dialog_closes_the_previous_one() {
        let (mut editor, id) = editor_with_one_project();
        editor.open_delete(id).unwrap();
        assert_eq!(editor.dialog(), DialogState::DeleteConfirm);

        editor.open_add();
        assert_eq!(editor.dialog(), DialogState::AddOpen);
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.buffer(), &FormBuffer::default());
    }

    #[test]
    fn test_confirm_delete_removes_selected_record() {
        let (mut editor, id) = editor_with_one_project();
        editor.open_delete(id).unwrap();
        let removed = editor.confirm_delete().unwrap().expect("confirm was open");

        assert_eq!(removed.id, id);
        assert!(editor.list().is_empty());
    }

    #[test]
    fn test_delete_cancel_keeps_record() {
        let (mut editor, id) = editor_with_one_project();
        editor.open_delete(id).unwrap();
        editor.cancel();
        assert_eq!(editor.list().len(), 1);
    }

    #[test]
    fn test_edit_missing_id_surfaces_not_found() {
        let (mut editor, id) = editor_with_one_project();
        editor.open_delete(id).unwrap();
        editor.confirm_delete().unwrap();

        let err = editor.open_edit(id).unwrap_err();
        assert_eq!(err, EditorError::Store(StoreError::NotFound(id)));
        assert_eq!(editor.dialog(), DialogState::Idle);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut editor = SectionEditor::new(SectionKind::Skills);
        editor.open_add();
        let err = editor.set_field("subtitle", "x".to_string()).unwrap_err();
        assert!(matches!(err, EditorError::UnknownField { .. }));
    }

    #[test]
    fn test_save_with_no_dialog_is_a_noop() {
        let (mut editor, _) = editor_with_one_project();
        assert_eq!(editor.save().unwrap(), None);
        assert_eq!(editor.list().len(), 1);
    }
}
