use crate::editor::Editor;
use crate::id_generator::ElementId;
use crate::input::CanvasInput;
use crate::renderer;
use crate::state::Mode;

/// Canvas interaction outcome the app has to follow up on.
#[derive(Debug, Default)]
pub struct CanvasResponse {
    /// Text element the user double-clicked; the app opens the edit prompt.
    pub edit_text: Option<ElementId>,
}

/// The canvas itself: paints the current snapshot and feeds pointer events
/// into the interaction layer.
pub fn central_panel(
    editor: &mut Editor,
    canvas: &mut CanvasInput,
    ctx: &egui::Context,
) -> CanvasResponse {
    let mut canvas_response = CanvasResponse::default();

    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(canvas_size) = editor
            .template()
            .map(|t| egui::vec2(t.layout.width, t.layout.height) * editor.zoom())
        else {
            ui.label("No template loaded");
            return;
        };

        egui::ScrollArea::both()
            .drag_to_scroll(editor.mode() == Mode::Pan)
            .show(ui, |ui| {
                let (response, painter) =
                    ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
                let origin = response.rect.min;

                renderer::paint(&painter, origin, editor.state());

                let pointer = response
                    .interact_pointer_pos()
                    .map(|pos| pos - origin.to_vec2());
                if response.double_clicked() {
                    if let Some(pos) = pointer {
                        canvas_response.edit_text = canvas.double_click(editor, pos);
                    }
                } else if response.clicked() || response.drag_started() {
                    if let Some(pos) = pointer {
                        canvas.pointer_down(editor, pos);
                    }
                } else if response.dragged() {
                    if let Some(pos) = pointer {
                        canvas.pointer_moved(editor, pos);
                    }
                }
                // Releases outside the canvas still end the drag; listeners
                // must not outlive the gesture.
                if response.drag_stopped() || ctx.input(|i| i.pointer.any_released()) {
                    canvas.pointer_up();
                }
            });
    });

    canvas_response
}
