use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::EditorError;
use crate::id_generator::{self, ElementId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Invitation,
    Ticket,
}

/// Canvas background fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Background {
    Color { color: Color32 },
    Gradient { start: Color32, end: Color32, angle: f32 },
    Image { url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub background: Background,
}

/// The document being edited: layout plus an ordered list of elements.
///
/// Element order is insertion order; paint order is decided by `z_index`.
/// Templates move through the editor as immutable snapshots, every content
/// change producing a new value while the old one goes into history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub kind: TemplateKind,
    pub category: String,
    pub layout: Layout,
    pub elements: Vec<Element>,
}

impl Template {
    /// A blank portrait document with a white background.
    pub fn new(name: impl Into<String>, kind: TemplateKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind,
            category: String::new(),
            layout: Layout {
                width: 400.0,
                height: 600.0,
                background: Background::Color {
                    color: Color32::WHITE,
                },
            },
            elements: Vec::new(),
        }
    }

    pub fn find_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id() == id)
    }

    pub fn find_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id() == id)
    }

    pub fn max_z_index(&self) -> i32 {
        self.elements.iter().map(Element::z_index).max().unwrap_or(0)
    }

    pub fn next_z_index(&self) -> i32 {
        self.max_z_index() + 1
    }

    /// Check model invariants before the template enters the editor.
    ///
    /// Dimension violations are rejected; opacity is clamped instead. Every
    /// element id is registered with the generator so programmatic creation
    /// can never collide with loaded ids.
    pub fn normalize(&mut self) -> Result<(), EditorError> {
        if self.layout.width <= 0.0 || self.layout.height <= 0.0 {
            return Err(EditorError::InvalidTemplate(format!(
                "layout must have positive dimensions, got {}x{}",
                self.layout.width, self.layout.height
            )));
        }
        for element in &mut self.elements {
            element.validate().map_err(EditorError::InvalidTemplate)?;
            element.common_mut().clamp_opacity();
            id_generator::register_existing(element.id());
        }
        Ok(())
    }

    pub(crate) fn set_property(&mut self, property: TemplateProperty) {
        match property {
            TemplateProperty::Name(name) => self.name = name,
            TemplateProperty::Kind(kind) => self.kind = kind,
            TemplateProperty::Category(category) => self.category = category,
            TemplateProperty::Layout(layout) => self.layout = layout,
        }
    }
}

/// A top-level template field update (everything except the element list).
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateProperty {
    Name(String),
    Kind(TemplateKind),
    Category(String),
    Layout(Layout),
}
