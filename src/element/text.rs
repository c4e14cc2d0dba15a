use egui::Color32;
use serde::{Deserialize, Serialize};

use super::common::ElementCommon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// A flat-styled text block. Style attributes apply to the whole run; rich
/// formatting inside the content is out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(flatten)]
    pub common: ElementCommon,
    pub content: String,
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_align: TextAlign,
    pub color: Color32,
}

impl TextElement {
    pub(crate) fn validate(&self) -> Result<(), String> {
        self.common.validate()?;
        if self.font_size <= 0.0 {
            return Err(format!(
                "text element {} has non-positive font size {}",
                self.common.id, self.font_size
            ));
        }
        Ok(())
    }
}
