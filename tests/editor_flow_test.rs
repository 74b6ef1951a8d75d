// End-to-end dialog flows: add/edit/delete through the section editor,
// with normalization happening on save and never on keystroke.

use resume_editor_wasm::editor::{DialogState, EditorError, SectionEditor};
use resume_editor_wasm::models::SectionKind;
use resume_editor_wasm::store::StoreError;

fn add_project(editor: &mut SectionEditor, title: &str, details: &str, tags: &str) -> resume_editor_wasm::RecordId {
    editor.open_add();
    editor.set_field("title", title.to_string()).unwrap();
    editor.set_field("details", details.to_string()).unwrap();
    editor.set_field("tags", tags.to_string()).unwrap();
    editor.save().unwrap().expect("save with add dialog open must commit")
}

#[test]
fn test_add_then_list_normalizes_free_text() {
    let mut editor = SectionEditor::new(SectionKind::Projects);
    let id = add_project(&mut editor, "X", "a\nb\n", "go, rust,");

    let listed = editor.list();
    assert_eq!(listed.len(), 1, "exactly one record after one add");
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].details, vec!["a", "b"], "blank trailing line must be dropped");
    assert_eq!(listed[0].tags, vec!["go", "rust"], "trailing comma must not produce a blank tag");
}

#[test]
fn test_edit_round_trips_through_the_form_buffer() {
    let mut editor = SectionEditor::new(SectionKind::Projects);
    let id = add_project(&mut editor, "X", "a\nb", "go, rust");

    editor.open_edit(id).unwrap();
    assert_eq!(editor.dialog(), DialogState::EditOpen);
    assert_eq!(editor.buffer().details, "a\nb", "details must hydrate as one newline-joined string");
    assert_eq!(editor.buffer().tags, "go, rust", "tags must hydrate comma-joined");

    editor.set_field("title", "Y".to_string()).unwrap();
    editor.save().unwrap();

    let listed = editor.list();
    assert_eq!(listed[0].id, id, "update must preserve the record id");
    assert_eq!(listed[0].title, "Y");
    assert_eq!(listed[0].details, vec!["a", "b"], "untouched fields survive the round trip");
}

#[test]
fn test_update_never_reorders() {
    let mut editor = SectionEditor::new(SectionKind::Projects);
    let a = add_project(&mut editor, "A", "", "");
    let b = add_project(&mut editor, "B", "", "");

    editor.open_edit(a).unwrap();
    editor.set_field("title", "A2".to_string()).unwrap();
    editor.save().unwrap();

    let ids: Vec<_> = editor.list().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a, b], "updating the first record must not move it");
}

#[test]
fn test_delete_then_edit_surfaces_not_found() {
    let mut editor = SectionEditor::new(SectionKind::Projects);
    let id = add_project(&mut editor, "X", "", "");

    editor.open_delete(id).unwrap();
    assert_eq!(editor.dialog(), DialogState::DeleteConfirm);
    let removed = editor.confirm_delete().unwrap().expect("confirm was open");
    assert_eq!(removed.id, id);

    assert_eq!(
        editor.open_edit(id),
        Err(EditorError::Store(StoreError::NotFound(id))),
        "editing a deleted record must fail loudly"
    );
    assert_eq!(editor.dialog(), DialogState::Idle, "failed open must leave the dialog closed");
}

#[test]
fn test_cancel_paths_never_mutate() {
    let mut editor = SectionEditor::new(SectionKind::Experience);
    editor.open_add();
    editor.set_field("title", "Engineer".to_string()).unwrap();
    let id = editor.save().unwrap().unwrap();

    editor.open_edit(id).unwrap();
    editor.set_field("title", "scratch".to_string()).unwrap();
    editor.cancel();
    assert_eq!(editor.list()[0].title, "Engineer", "cancelled edit must not commit");

    editor.open_delete(id).unwrap();
    editor.cancel();
    assert_eq!(editor.list().len(), 1, "cancelled delete must keep the record");
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_one_dialog_open_at_a_time() {
    let mut editor = SectionEditor::new(SectionKind::Projects);
    let id = add_project(&mut editor, "X", "", "");

    editor.open_edit(id).unwrap();
    editor.open_delete(id).unwrap();
    assert_eq!(
        editor.dialog(),
        DialogState::DeleteConfirm,
        "opening delete must implicitly close the edit dialog"
    );

    editor.open_add();
    assert_eq!(editor.dialog(), DialogState::AddOpen);
    assert_eq!(editor.selected(), None, "add flow carries no selection");
}

#[test]
fn test_skills_section_uses_category_and_tags() {
    let mut editor = SectionEditor::new(SectionKind::Skills);
    editor.open_add();
    editor.set_field("title", "Languages".to_string()).unwrap();
    editor.set_field("tags", " , Rust , , Go".to_string()).unwrap();
    editor.save().unwrap();

    let listed = editor.list();
    assert_eq!(listed[0].title, "Languages");
    assert_eq!(listed[0].tags, vec!["Rust", "Go"], "blank tokens dropped, order kept");

    // The skills dialog exposes no date fields.
    editor.open_add();
    assert!(matches!(
        editor.set_field("startDate", "2020".to_string()),
        Err(EditorError::UnknownField { .. })
    ));
}
