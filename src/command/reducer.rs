use crate::command::actions::Action;
use crate::element::DUPLICATE_OFFSET;
use crate::id_generator;
use crate::state::EditorState;

/// The editor's pure transition function: consumes the current state and an
/// action, produces the next state.
///
/// Content-changing actions snapshot the pre-mutation template and clear the
/// redo stack; UI actions (selection, mode, zoom, grid) leave history alone.
/// The one tolerated side effect is fresh-id generation inside
/// `DuplicateElement`.
pub fn reduce(mut state: EditorState, action: Action) -> EditorState {
    if action.pushes_history() {
        // Without a template there is nothing to apply or snapshot.
        let Some(template) = &state.template else {
            log::warn!("discarding {action:?}: no template loaded");
            return state;
        };
        state.history.push(template.clone());
    }

    match action {
        Action::LoadTemplate(template) => {
            log::info!("loading template `{}` ({})", template.name, template.id);
            state.template = Some(template);
            state.selected_element_id = None;
            state.history.clear();
        }
        Action::SelectElement(id) => {
            state.selected_element_id = id;
        }
        Action::AddElement(element) => {
            if let Some(template) = &mut state.template {
                template.elements.push(element);
            }
        }
        Action::UpdateElement { id, patch } => {
            match state.template.as_mut().and_then(|t| t.find_element_mut(id)) {
                Some(element) => element.apply_patch(&patch),
                // Unknown id leaves content untouched; the history boundary
                // pushed above stays.
                None => log::warn!("update for unknown element {id}"),
            }
        }
        Action::RemoveElement(id) => {
            if let Some(template) = &mut state.template {
                template.elements.retain(|el| el.id() != id);
            }
            if state.selected_element_id == Some(id) {
                state.selected_element_id = None;
            }
        }
        Action::DuplicateElement(id) => {
            if let Some(template) = &mut state.template {
                if let Some(mut clone) = template.find_element(id).cloned() {
                    let next_z = template.next_z_index();
                    let common = clone.common_mut();
                    common.id = id_generator::generate_id();
                    common.position += DUPLICATE_OFFSET;
                    common.z_index = next_z;
                    state.selected_element_id = Some(common.id);
                    template.elements.push(clone);
                } else {
                    log::warn!("duplicate for unknown element {id}");
                }
            }
        }
        Action::Undo => {
            if let Some(current) = state.template.take() {
                state.template = Some(state.history.undo(current));
            }
        }
        Action::Redo => {
            if let Some(current) = state.template.take() {
                state.template = Some(state.history.redo(current));
            }
        }
        Action::SetMode(mode) => {
            state.mode = mode;
        }
        Action::SetZoom(zoom) => {
            state.zoom = EditorState::clamp_zoom(zoom);
        }
        Action::ToggleGrid => {
            state.show_grid = !state.show_grid;
        }
        Action::ToggleSnapToGrid => {
            state.snap_to_grid = !state.snap_to_grid;
        }
        Action::SetGridSize(size) => {
            if size > 0 {
                state.grid_size = size;
            }
        }
        Action::UpdateTemplateProperty(property) => {
            if let Some(template) = &mut state.template {
                template.set_property(property);
            }
        }
    }

    state
}
