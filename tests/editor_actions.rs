use egui::pos2;

use template_designer::element::ElementPatch;
use template_designer::state::Mode;
use template_designer::template::{Template, TemplateKind, TemplateProperty};
use template_designer::{Editor, ElementId};

fn editor_with_template() -> Editor {
    let mut editor = Editor::new();
    editor
        .load_template(Template::new("Party", TemplateKind::Invitation))
        .unwrap();
    editor
}

#[test]
fn add_undo_redo_scenario() {
    let mut editor = editor_with_template();

    let id = editor.add_text_element(pos2(100.0, 100.0), Some("Hello".into()));
    assert_eq!(editor.template().unwrap().elements.len(), 1);
    assert!(editor.can_undo());

    editor.undo();
    assert!(editor.template().unwrap().elements.is_empty());
    assert!(editor.can_redo());

    editor.redo();
    let template = editor.template().unwrap();
    assert_eq!(template.elements.len(), 1);
    // Redo restores the exact snapshot, element id included.
    assert!(template.find_element(id).is_some());
}

#[test]
fn undo_then_redo_restores_exact_snapshots() {
    let mut editor = editor_with_template();
    let before = editor.template().unwrap().clone();

    editor.add_shape_element(pos2(50.0, 50.0), None);
    let after = editor.template().unwrap().clone();
    assert_ne!(before, after);

    editor.undo();
    assert_eq!(editor.template().unwrap(), &before);

    editor.redo();
    assert_eq!(editor.template().unwrap(), &after);
}

#[test]
fn duplicate_offsets_copy_and_selects_it() {
    let mut editor = editor_with_template();
    let original = editor.add_text_element(pos2(100.0, 100.0), None);
    let original_z = editor
        .template()
        .unwrap()
        .find_element(original)
        .unwrap()
        .z_index();

    editor.duplicate_element(original);

    let template = editor.template().unwrap();
    assert_eq!(template.elements.len(), 2);
    let copy_id = editor.selected_element_id().expect("copy is selected");
    assert_ne!(copy_id, original);

    let copy = template.find_element(copy_id).unwrap();
    assert_eq!(copy.position(), pos2(120.0, 120.0));
    assert!(copy.z_index() > original_z);
}

#[test]
fn remove_clears_selection() {
    let mut editor = editor_with_template();
    let id = editor.add_shape_element(pos2(10.0, 10.0), None);
    editor.select(Some(id));
    assert!(editor.selected_element().is_some());

    editor.remove_element(id);
    assert!(editor.selected_element_id().is_none());
    assert!(editor.template().unwrap().elements.is_empty());
}

#[test]
fn stale_selection_resolves_to_none() {
    let mut editor = editor_with_template();
    let id = editor.add_text_element(pos2(10.0, 10.0), None);
    editor.select(Some(id));

    // Undo removes the element but the weak selection id survives.
    editor.undo();
    assert_eq!(editor.selected_element_id(), Some(id));
    assert!(editor.selected_element().is_none());
}

#[test]
fn zoom_is_clamped() {
    let mut editor = editor_with_template();
    editor.set_zoom(100.0);
    assert_eq!(editor.zoom(), 5.0);
    editor.set_zoom(-3.0);
    assert_eq!(editor.zoom(), 0.1);
}

#[test]
fn update_for_unknown_id_still_records_a_boundary() {
    let mut editor = editor_with_template();
    let before = editor.template().unwrap().clone();
    let ghost: ElementId = "abc-00000001".parse().unwrap();

    editor.update_element(ghost, ElementPatch::content("nobody home"));

    assert_eq!(editor.template().unwrap(), &before);
    assert!(editor.can_undo());
    editor.undo();
    assert_eq!(editor.template().unwrap(), &before);
}

#[test]
fn ui_actions_do_not_touch_history() {
    let mut editor = editor_with_template();
    editor.set_mode(Mode::Shape);
    editor.set_zoom(2.0);
    editor.toggle_grid();
    editor.toggle_snap_to_grid();
    editor.set_grid_size(25);
    editor.select(None);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn new_edit_clears_redo() {
    let mut editor = editor_with_template();
    editor.add_text_element(pos2(0.0, 0.0), None);
    editor.undo();
    assert!(editor.can_redo());

    editor.add_shape_element(pos2(0.0, 0.0), None);
    assert!(!editor.can_redo());
}

#[test]
fn position_updates_snap_when_enabled() {
    let mut editor = editor_with_template();
    let id = editor.add_shape_element(pos2(0.0, 0.0), None);
    editor.toggle_snap_to_grid();

    editor.update_element(id, ElementPatch::position(pos2(13.0, 57.0)));
    let element = editor.template().unwrap().find_element(id).unwrap();
    assert_eq!(element.position(), pos2(10.0, 60.0));
}

#[test]
fn position_updates_pass_through_when_snap_disabled() {
    let mut editor = editor_with_template();
    let id = editor.add_shape_element(pos2(0.0, 0.0), None);

    editor.update_element(id, ElementPatch::position(pos2(13.0, 57.0)));
    let element = editor.template().unwrap().find_element(id).unwrap();
    assert_eq!(element.position(), pos2(13.0, 57.0));
}

#[test]
fn content_actions_are_noops_without_template() {
    let mut editor = Editor::new();
    editor.add_text_element(pos2(0.0, 0.0), None);
    let ghost: ElementId = "1-00000001".parse().unwrap();
    editor.remove_element(ghost);
    editor.duplicate_element(ghost);

    assert!(editor.template().is_none());
    assert!(!editor.can_undo());
}

#[test]
fn undo_redo_on_empty_history_are_noops() {
    let mut editor = editor_with_template();
    let before = editor.template().unwrap().clone();
    editor.undo();
    editor.redo();
    assert_eq!(editor.template().unwrap(), &before);
}

#[test]
fn template_property_updates_are_undoable() {
    let mut editor = editor_with_template();
    editor.update_template_property(TemplateProperty::Name("Renamed".into()));
    assert_eq!(editor.template().unwrap().name, "Renamed");

    editor.undo();
    assert_eq!(editor.template().unwrap().name, "Party");

    editor.redo();
    assert_eq!(editor.template().unwrap().name, "Renamed");
}

#[test]
fn loading_a_template_starts_a_fresh_session() {
    let mut editor = editor_with_template();
    let id = editor.add_text_element(pos2(0.0, 0.0), None);
    editor.select(Some(id));
    assert!(editor.can_undo());

    editor
        .load_template(Template::new("Next", TemplateKind::Ticket))
        .unwrap();
    assert_eq!(editor.template().unwrap().name, "Next");
    assert!(editor.selected_element_id().is_none());
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}
