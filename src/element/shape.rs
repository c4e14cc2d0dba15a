use egui::Color32;
use serde::{Deserialize, Serialize};

use super::common::ElementCommon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub shape: ShapeKind,
    pub background_color: Color32,
    pub border_radius: f32,
    pub border_width: f32,
    pub border_color: Color32,
}

impl ShapeElement {
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.common.validate()?;
        if self.border_radius < 0.0 {
            return Err(format!(
                "shape element {} has negative border radius",
                self.common.id
            ));
        }
        if self.border_width < 0.0 {
            return Err(format!(
                "shape element {} has negative border width",
                self.common.id
            ));
        }
        Ok(())
    }
}
