use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::id_generator::ElementId;

/// Offset applied to a duplicated element so the copy is visually
/// distinguishable from its source (document units).
pub const DUPLICATE_OFFSET: Vec2 = Vec2 { x: 20.0, y: 20.0 };

// Default sizes for freshly created elements, centered on the click point.
pub(crate) const DEFAULT_TEXT_SIZE: Size = Size { width: 200.0, height: 50.0 };
pub(crate) const DEFAULT_IMAGE_SIZE: Size = Size { width: 150.0, height: 150.0 };
pub(crate) const DEFAULT_SHAPE_SIZE: Size = Size { width: 100.0, height: 100.0 };

/// Element dimensions. Kept strictly positive by validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Fields shared by every element variant.
///
/// `position` is the element's center, not its top-left corner. `z_index` is
/// a paint-order hint independent of the element list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementCommon {
    pub id: ElementId,
    pub position: Pos2,
    pub size: Size,
    pub rotation: f32,
    pub z_index: i32,
    pub opacity: f32,
}

impl ElementCommon {
    pub fn new(id: ElementId, position: Pos2, size: Size, z_index: i32) -> Self {
        Self {
            id,
            position,
            size,
            rotation: 0.0,
            z_index,
            opacity: 1.0,
        }
    }

    /// Opacity is clamped into `[0, 1]` rather than rejected.
    pub fn clamp_opacity(&mut self) {
        self.opacity = self.opacity.clamp(0.0, 1.0);
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.size.width <= 0.0 || self.size.height <= 0.0 {
            return Err(format!(
                "element {} has non-positive size {}x{}",
                self.id, self.size.width, self.size.height
            ));
        }
        Ok(())
    }
}
