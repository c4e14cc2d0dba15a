use crate::editor::Editor;
use crate::element::ElementPatch;
use crate::id_generator::ElementId;
use crate::input::CanvasInput;
use crate::panels;
use crate::persistence::JsonFileStore;
use crate::template::{Template, TemplateKind};

/// In-progress text edit opened by double-clicking a text element. The draft
/// lives here until the user applies it, so typing does not spam the history.
struct TextEditSession {
    element_id: ElementId,
    draft: String,
}

/// Top-level eframe application: owns the controller, the canvas interaction
/// state and the template store, and wires the panels together each frame.
pub struct DesignerApp {
    editor: Editor,
    canvas: CanvasInput,
    store: JsonFileStore,
    text_edit: Option<TextEditSession>,
}

impl DesignerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut editor = Editor::default();
        editor.load_template(Template::new("Untitled", TemplateKind::Invitation));
        Self {
            editor,
            canvas: CanvasInput::default(),
            store: JsonFileStore::new("templates"),
            text_edit: None,
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let name = self
                    .editor
                    .template()
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                ui.label(egui::RichText::new(name).strong());
                ui.separator();
                if ui.button("Save").clicked() {
                    // Optimistic save: a failure is logged, not rolled back.
                    if let Err(err) = self.editor.save_template(&self.store) {
                        log::error!("save failed: {err}");
                    }
                }
            });
        });
    }

    fn text_edit_window(&mut self, ctx: &egui::Context) {
        let Some(session) = &mut self.text_edit else {
            return;
        };
        let mut apply = false;
        let mut cancel = false;
        egui::Window::new("Edit text")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.text_edit_multiline(&mut session.draft);
                ui.horizontal(|ui| {
                    apply = ui.button("Apply").clicked();
                    cancel = ui.button("Cancel").clicked();
                });
            });
        if apply {
            let patch = ElementPatch::content(session.draft.clone());
            let id = session.element_id;
            self.text_edit = None;
            self.editor.update_element(id, patch);
        } else if cancel {
            self.text_edit = None;
        }
    }
}

impl eframe::App for DesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.top_bar(ctx);
        panels::tools_panel(&mut self.editor, ctx);
        panels::properties_panel(&mut self.editor, ctx);
        let response = panels::central_panel(&mut self.editor, &mut self.canvas, ctx);

        if let Some(id) = response.edit_text {
            let draft = self
                .editor
                .template()
                .and_then(|t| t.find_element(id))
                .and_then(|el| match el {
                    crate::element::Element::Text(text) => Some(text.content.clone()),
                    _ => None,
                })
                .unwrap_or_default();
            self.text_edit = Some(TextEditSession { element_id: id, draft });
        }
        self.text_edit_window(ctx);
    }
}
