use egui::Pos2;

use crate::command::{Action, reduce};
use crate::element::{Element, ElementPatch, ShapeKind, factory};
use crate::error::EditorError;
use crate::geometry::apply_snapping;
use crate::id_generator::{self, ElementId};
use crate::persistence::{StoreError, TemplateStore, decode_template_payload};
use crate::state::{EditorState, Mode, ZoomPreset};
use crate::template::{Template, TemplateProperty};

/// Stateful façade over the reducer/history pair.
///
/// Owns the single [`EditorState`] value and is the only writer; consumers
/// read snapshots through `state()`/`template()` and mutate exclusively
/// through the operations below.
#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn template(&self) -> Option<&Template> {
        self.state.template.as_ref()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.state.selected_element()
    }

    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.state.selected_element_id
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    // --- loading & saving -------------------------------------------------

    /// Validate and load a template, starting a fresh editing session.
    pub fn load_template(&mut self, mut template: Template) -> Result<(), EditorError> {
        template.normalize()?;
        self.dispatch(Action::LoadTemplate(template));
        Ok(())
    }

    /// Decode an out-of-band JSON payload. On any decode or validation error
    /// the editor keeps its pre-load state; nothing is partially applied.
    pub fn load_payload(&mut self, json: &str) -> Result<(), EditorError> {
        let template = decode_template_payload(json)?;
        self.dispatch(Action::LoadTemplate(template));
        Ok(())
    }

    pub fn load_from_store(
        &mut self,
        store: &dyn TemplateStore,
        id: &str,
    ) -> Result<(), EditorError> {
        let mut template = store.load(id)?;
        template.normalize()?;
        self.dispatch(Action::LoadTemplate(template));
        Ok(())
    }

    /// Hand the current immutable snapshot to the persistence collaborator.
    ///
    /// Local state is untouched whether the save succeeds or fails; a failed
    /// save leaves the edits in place for the caller to retry.
    pub fn save_template(&self, store: &dyn TemplateStore) -> Result<(), StoreError> {
        match self.template() {
            Some(template) => store.save(template),
            None => Err(StoreError::NothingToSave),
        }
    }

    // --- element operations -----------------------------------------------

    pub fn select(&mut self, id: Option<ElementId>) {
        self.dispatch(Action::SelectElement(id));
    }

    fn next_z_index(&self) -> i32 {
        self.template().map(Template::next_z_index).unwrap_or(1)
    }

    /// Returns the new element's id so the caller can select it right away.
    pub fn add_text_element(&mut self, position: Pos2, content: Option<String>) -> ElementId {
        let id = id_generator::generate_id();
        let element = factory::create_text(id, position, self.next_z_index(), content);
        self.dispatch(Action::AddElement(element));
        id
    }

    pub fn add_image_element(&mut self, position: Pos2, image_url: Option<String>) -> ElementId {
        let id = id_generator::generate_id();
        let element = factory::create_image(id, position, self.next_z_index(), image_url);
        self.dispatch(Action::AddElement(element));
        id
    }

    pub fn add_shape_element(&mut self, position: Pos2, shape: Option<ShapeKind>) -> ElementId {
        let id = id_generator::generate_id();
        let element = factory::create_shape(id, position, self.next_z_index(), shape);
        self.dispatch(Action::AddElement(element));
        id
    }

    /// Position patches go through grid snapping before they reach the
    /// reducer; everything else passes straight through.
    pub fn update_element(&mut self, id: ElementId, mut patch: ElementPatch) {
        if let Some(position) = patch.position {
            patch.position = Some(apply_snapping(
                position,
                self.state.snap_to_grid,
                self.state.grid_size,
            ));
        }
        self.dispatch(Action::UpdateElement { id, patch });
    }

    pub fn remove_element(&mut self, id: ElementId) {
        self.dispatch(Action::RemoveElement(id));
    }

    pub fn duplicate_element(&mut self, id: ElementId) {
        self.dispatch(Action::DuplicateElement(id));
    }

    // --- history ----------------------------------------------------------

    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    pub fn redo(&mut self) {
        self.dispatch(Action::Redo);
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    // --- UI state ---------------------------------------------------------

    pub fn set_mode(&mut self, mode: Mode) {
        self.dispatch(Action::SetMode(mode));
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.dispatch(Action::SetZoom(zoom));
    }

    pub fn apply_zoom_preset(&mut self, preset: ZoomPreset) {
        self.set_zoom(preset.factor());
    }

    pub fn toggle_grid(&mut self) {
        self.dispatch(Action::ToggleGrid);
    }

    pub fn toggle_snap_to_grid(&mut self) {
        self.dispatch(Action::ToggleSnapToGrid);
    }

    pub fn set_grid_size(&mut self, size: u32) {
        self.dispatch(Action::SetGridSize(size));
    }

    pub fn update_template_property(&mut self, property: TemplateProperty) {
        self.dispatch(Action::UpdateTemplateProperty(property));
    }
}
