use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

pub(crate) mod common;
mod image;
mod shape;
mod text;

pub use common::{DUPLICATE_OFFSET, ElementCommon, Size};
pub use image::ImageElement;
pub use shape::{ShapeElement, ShapeKind};
pub use text::{FontStyle, FontWeight, TextAlign, TextElement};

use crate::id_generator::ElementId;

/// Element kind tags accepted in inbound payloads.
pub const KNOWN_KINDS: [&str; 3] = ["text", "image", "shape"];

/// One positioned, styled object on the canvas.
///
/// Closed sum: every consumer matches exhaustively, so adding a kind is a
/// compile-time-checked change rather than a string comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Element {
    Text(TextElement),
    Image(ImageElement),
    Shape(ShapeElement),
}

impl Element {
    pub fn common(&self) -> &ElementCommon {
        match self {
            Element::Text(t) => &t.common,
            Element::Image(i) => &i.common,
            Element::Shape(s) => &s.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ElementCommon {
        match self {
            Element::Text(t) => &mut t.common,
            Element::Image(i) => &mut i.common,
            Element::Shape(s) => &mut s.common,
        }
    }

    pub fn id(&self) -> ElementId {
        self.common().id
    }

    pub fn position(&self) -> Pos2 {
        self.common().position
    }

    pub fn z_index(&self) -> i32 {
        self.common().z_index
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::Image(_) => "image",
            Element::Shape(_) => "shape",
        }
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        match self {
            Element::Text(t) => t.validate(),
            Element::Image(i) => i.validate(),
            Element::Shape(s) => s.validate(),
        }
    }

    /// Merge a partial update into this element.
    ///
    /// Patch fields that do not apply to the variant are ignored. Values that
    /// would break an invariant (non-positive sizes, negative borders) are
    /// dropped; opacity is clamped instead.
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        let common = self.common_mut();
        if let Some(position) = patch.position {
            common.position = position;
        }
        if let Some(size) = patch.size {
            if size.width > 0.0 && size.height > 0.0 {
                common.size = size;
            }
        }
        if let Some(rotation) = patch.rotation {
            common.rotation = rotation;
        }
        if let Some(z_index) = patch.z_index {
            common.z_index = z_index;
        }
        if let Some(opacity) = patch.opacity {
            common.opacity = opacity.clamp(0.0, 1.0);
        }

        match self {
            Element::Text(t) => {
                if let Some(content) = &patch.content {
                    t.content = content.clone();
                }
                if let Some(font_family) = &patch.font_family {
                    t.font_family = font_family.clone();
                }
                if let Some(font_size) = patch.font_size {
                    if font_size > 0.0 {
                        t.font_size = font_size;
                    }
                }
                if let Some(font_weight) = patch.font_weight {
                    t.font_weight = font_weight;
                }
                if let Some(font_style) = patch.font_style {
                    t.font_style = font_style;
                }
                if let Some(text_align) = patch.text_align {
                    t.text_align = text_align;
                }
                if let Some(color) = patch.color {
                    t.color = color;
                }
            }
            Element::Image(i) => {
                if let Some(image_url) = &patch.image_url {
                    i.image_url = image_url.clone();
                }
            }
            Element::Shape(s) => {
                if let Some(shape) = patch.shape {
                    s.shape = shape;
                }
                if let Some(background_color) = patch.background_color {
                    s.background_color = background_color;
                }
                if let Some(border_radius) = patch.border_radius {
                    if border_radius >= 0.0 {
                        s.border_radius = border_radius;
                    }
                }
                if let Some(border_width) = patch.border_width {
                    if border_width >= 0.0 {
                        s.border_width = border_width;
                    }
                }
                if let Some(border_color) = patch.border_color {
                    s.border_color = border_color;
                }
            }
        }
    }
}

/// A partial element update; `None` fields are left untouched.
///
/// One flat bag of options instead of per-variant patch types keeps the
/// action surface small; `apply_patch` sorts out which fields matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub position: Option<Pos2>,
    pub size: Option<Size>,
    pub rotation: Option<f32>,
    pub z_index: Option<i32>,
    pub opacity: Option<f32>,
    pub content: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_align: Option<TextAlign>,
    pub color: Option<Color32>,
    pub image_url: Option<String>,
    pub shape: Option<ShapeKind>,
    pub background_color: Option<Color32>,
    pub border_radius: Option<f32>,
    pub border_width: Option<f32>,
    pub border_color: Option<Color32>,
}

impl ElementPatch {
    pub fn position(position: Pos2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Factory functions producing fully-populated elements with defaults.
pub mod factory {
    use super::*;

    pub const DEFAULT_FONT_FAMILY: &str = "Inter";
    pub const DEFAULT_FONT_SIZE: f32 = 16.0;
    pub const DEFAULT_TEXT_CONTENT: &str = "New text";

    /// Create a new text element centered on `position`.
    pub fn create_text(
        id: ElementId,
        position: Pos2,
        z_index: i32,
        content: Option<String>,
    ) -> Element {
        Element::Text(TextElement {
            common: ElementCommon::new(id, position, common::DEFAULT_TEXT_SIZE, z_index),
            content: content.unwrap_or_else(|| DEFAULT_TEXT_CONTENT.to_owned()),
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            text_align: TextAlign::Center,
            color: Color32::BLACK,
        })
    }

    /// Create a new image element centered on `position`.
    pub fn create_image(
        id: ElementId,
        position: Pos2,
        z_index: i32,
        image_url: Option<String>,
    ) -> Element {
        Element::Image(ImageElement {
            common: ElementCommon::new(id, position, common::DEFAULT_IMAGE_SIZE, z_index),
            image_url: image_url.unwrap_or_default(),
        })
    }

    /// Create a new shape element centered on `position`.
    pub fn create_shape(
        id: ElementId,
        position: Pos2,
        z_index: i32,
        shape: Option<ShapeKind>,
    ) -> Element {
        Element::Shape(ShapeElement {
            common: ElementCommon::new(id, position, common::DEFAULT_SHAPE_SIZE, z_index),
            shape: shape.unwrap_or(ShapeKind::Rectangle),
            background_color: Color32::from_rgb(0xcc, 0xcc, 0xcc),
            border_radius: 0.0,
            border_width: 0.0,
            border_color: Color32::BLACK,
        })
    }
}
