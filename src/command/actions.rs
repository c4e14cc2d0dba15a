use crate::element::{Element, ElementPatch};
use crate::id_generator::ElementId;
use crate::state::Mode;
use crate::template::{Template, TemplateProperty};

/// Every mutation the editor can perform, dispatched through the single
/// exhaustive-match transition function in [`super::reducer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole document and start a fresh session: selection and
    /// history are reset.
    LoadTemplate(Template),
    /// Selection is UI state, not undoable content.
    SelectElement(Option<ElementId>),
    AddElement(Element),
    UpdateElement { id: ElementId, patch: ElementPatch },
    RemoveElement(ElementId),
    /// Clone with a fresh id, offset position, top z-index; select the clone.
    DuplicateElement(ElementId),
    Undo,
    Redo,
    SetMode(Mode),
    /// Clamped to the zoom bounds before storing.
    SetZoom(f32),
    ToggleGrid,
    ToggleSnapToGrid,
    SetGridSize(u32),
    UpdateTemplateProperty(TemplateProperty),
}

impl Action {
    /// Whether this action records a history boundary before it runs.
    ///
    /// `UpdateElement` pushes even when the id no longer resolves, so an
    /// update against a stale id costs one empty undo step.
    pub fn pushes_history(&self) -> bool {
        matches!(
            self,
            Action::AddElement(_)
                | Action::UpdateElement { .. }
                | Action::RemoveElement(_)
                | Action::DuplicateElement(_)
                | Action::UpdateTemplateProperty(_)
        )
    }
}
