use egui::Pos2;

use crate::editor::Editor;
use crate::element::{Element, ElementPatch};
use crate::geometry::topmost_element_at;
use crate::id_generator::ElementId;
use crate::state::Mode;

/// Ephemeral pointer-tracking state. Lives outside the reducer: the drag
/// itself is not undoable content, only the position updates it emits are.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        element_id: ElementId,
        last_pointer: Pos2,
    },
}

/// Translates canvas pointer events into controller calls.
///
/// Pointer positions arrive in screen space relative to the canvas origin;
/// deltas are divided by the current zoom to land in document space. Moves
/// are delta-based: the captured pointer position is reset after every step.
#[derive(Debug, Default)]
pub struct CanvasInput {
    drag: DragState,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, editor: &mut Editor, pointer: Pos2) {
        let doc_pos = Self::to_document(editor, pointer);
        match editor.mode() {
            Mode::Select => {
                let hit = editor.template().and_then(|t| topmost_element_at(t, doc_pos));
                // A press on empty canvas clears the selection.
                editor.select(hit);
                if let Some(element_id) = hit {
                    self.drag = DragState::Dragging {
                        element_id,
                        last_pointer: pointer,
                    };
                }
            }
            Mode::Text => {
                let id = editor.add_text_element(doc_pos, None);
                editor.select(Some(id));
            }
            Mode::Image => {
                let id = editor.add_image_element(doc_pos, None);
                editor.select(Some(id));
            }
            Mode::Shape => {
                let id = editor.add_shape_element(doc_pos, None);
                editor.select(Some(id));
            }
            // Viewport panning is handled by the canvas scroll area.
            Mode::Pan => {}
        }
    }

    pub fn pointer_moved(&mut self, editor: &mut Editor, pointer: Pos2) {
        let DragState::Dragging {
            element_id,
            last_pointer,
        } = self.drag
        else {
            return;
        };
        let Some(current) = editor
            .template()
            .and_then(|t| t.find_element(element_id))
            .map(Element::position)
        else {
            // The dragged element vanished under us (deleted or undone away).
            log::warn!("drag target {element_id} is gone, releasing drag");
            self.drag = DragState::Idle;
            return;
        };
        let delta = (pointer - last_pointer) / editor.zoom();
        editor.update_element(element_id, ElementPatch::position(current + delta));
        self.drag = DragState::Dragging {
            element_id,
            last_pointer: pointer,
        };
    }

    /// Must run on every pointer-release path, including releases outside
    /// the canvas, so a drag can never outlive its gesture.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// A double-click on a text element starts content editing. The caller
    /// owns the prompt and dispatches the resulting content patch.
    pub fn double_click(&mut self, editor: &Editor, pointer: Pos2) -> Option<ElementId> {
        self.drag = DragState::Idle;
        let doc_pos = Self::to_document(editor, pointer);
        let template = editor.template()?;
        let id = topmost_element_at(template, doc_pos)?;
        match template.find_element(id)? {
            Element::Text(_) => Some(id),
            _ => None,
        }
    }

    fn to_document(editor: &Editor, pointer: Pos2) -> Pos2 {
        (pointer.to_vec2() / editor.zoom()).to_pos2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Template, TemplateKind};

    fn editor_with_shape_at(pos: Pos2) -> (Editor, ElementId) {
        let mut editor = Editor::new();
        editor
            .load_template(Template::new("t", TemplateKind::Invitation))
            .unwrap();
        let id = editor.add_shape_element(pos, None);
        (editor, id)
    }

    #[test]
    fn press_selects_and_drag_moves_by_zoomed_delta() {
        let (mut editor, id) = editor_with_shape_at(Pos2::new(100.0, 100.0));
        editor.set_zoom(2.0);
        let mut canvas = CanvasInput::new();

        // Screen position of the center at 2x zoom.
        canvas.pointer_down(&mut editor, Pos2::new(200.0, 200.0));
        assert_eq!(editor.selected_element_id(), Some(id));
        assert!(canvas.is_dragging());

        canvas.pointer_moved(&mut editor, Pos2::new(220.0, 210.0));
        let moved = editor.template().unwrap().find_element(id).unwrap();
        assert_eq!(moved.position(), Pos2::new(110.0, 105.0));

        canvas.pointer_up();
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn press_on_empty_canvas_clears_selection() {
        let (mut editor, id) = editor_with_shape_at(Pos2::new(100.0, 100.0));
        editor.select(Some(id));
        let mut canvas = CanvasInput::new();

        canvas.pointer_down(&mut editor, Pos2::new(300.0, 300.0));
        assert_eq!(editor.selected_element_id(), None);
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn stale_drag_target_releases_the_drag() {
        let (mut editor, id) = editor_with_shape_at(Pos2::new(100.0, 100.0));
        let mut canvas = CanvasInput::new();
        canvas.pointer_down(&mut editor, Pos2::new(100.0, 100.0));
        assert!(canvas.is_dragging());

        editor.remove_element(id);
        canvas.pointer_moved(&mut editor, Pos2::new(120.0, 120.0));
        assert!(!canvas.is_dragging());
    }

    #[test]
    fn placement_mode_adds_and_selects() {
        let mut editor = Editor::new();
        editor
            .load_template(Template::new("t", TemplateKind::Invitation))
            .unwrap();
        editor.set_mode(Mode::Text);
        let mut canvas = CanvasInput::new();

        canvas.pointer_down(&mut editor, Pos2::new(50.0, 60.0));
        let selected = editor.selected_element().expect("new element selected");
        assert_eq!(selected.kind(), "text");
        assert_eq!(selected.position(), Pos2::new(50.0, 60.0));
    }

    #[test]
    fn double_click_resolves_text_elements_only() {
        let mut editor = Editor::new();
        editor
            .load_template(Template::new("t", TemplateKind::Invitation))
            .unwrap();
        let text_id = editor.add_text_element(Pos2::new(100.0, 100.0), None);
        let _shape = editor.add_shape_element(Pos2::new(300.0, 300.0), None);
        let mut canvas = CanvasInput::new();

        assert_eq!(
            canvas.double_click(&editor, Pos2::new(100.0, 100.0)),
            Some(text_id)
        );
        assert_eq!(canvas.double_click(&editor, Pos2::new(300.0, 300.0)), None);
    }
}
