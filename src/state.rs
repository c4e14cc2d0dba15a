use serde::{Deserialize, Serialize};

use crate::command::History;
use crate::element::Element;
use crate::id_generator::ElementId;
use crate::template::Template;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;
pub const DEFAULT_GRID_SIZE: u32 = 10;

/// Interaction mode selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Select,
    Text,
    Image,
    Shape,
    Pan,
}

/// Named zoom levels offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPreset {
    Fit,
    Pct50,
    Pct100,
    Pct150,
    Pct200,
}

impl ZoomPreset {
    /// `Fit` is an approximate constant; the controller never measures the
    /// viewport.
    pub fn factor(self) -> f32 {
        match self {
            ZoomPreset::Fit => 0.85,
            ZoomPreset::Pct50 => 0.5,
            ZoomPreset::Pct100 => 1.0,
            ZoomPreset::Pct150 => 1.5,
            ZoomPreset::Pct200 => 2.0,
        }
    }
}

/// The whole editor state.
///
/// Reducer transitions replace this value; nothing mutates it in place
/// behind the controller's back. Consumers only ever see shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorState {
    pub template: Option<Template>,
    /// Weak reference: may point at an id that no longer resolves after a
    /// deletion or an undo. Lookups yield "no selection" on a miss.
    pub selected_element_id: Option<ElementId>,
    pub mode: Mode,
    pub zoom: f32,
    pub show_grid: bool,
    pub snap_to_grid: bool,
    pub grid_size: u32,
    pub history: History,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            template: None,
            selected_element_id: None,
            mode: Mode::Select,
            zoom: 1.0,
            show_grid: true,
            snap_to_grid: false,
            grid_size: DEFAULT_GRID_SIZE,
            history: History::new(),
        }
    }
}

impl EditorState {
    /// Recomputed from the id on every read; a stale selection is simply
    /// "none", never an error.
    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.selected_element_id?;
        self.template.as_ref()?.find_element(id)
    }

    pub fn clamp_zoom(zoom: f32) -> f32 {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}
