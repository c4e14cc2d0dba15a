use crate::editor::Editor;
use crate::element::{Element, ElementPatch, FontStyle, FontWeight, ShapeKind, TextAlign};
use crate::template::{Background, TemplateKind, TemplateProperty};

/// Right-hand properties panel: template-level fields up top, the selected
/// element's fields below. Every change goes through the controller as an
/// `UpdateTemplateProperty` or element patch; the panel holds no state.
pub fn properties_panel(editor: &mut Editor, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            template_section(editor, ui);
            ui.separator();
            element_section(editor, ui);
        });
}

fn template_section(editor: &mut Editor, ui: &mut egui::Ui) {
    let Some(template) = editor.template() else {
        ui.label("No template loaded");
        return;
    };
    let mut name = template.name.clone();
    let mut category = template.category.clone();
    let kind = template.kind;
    let mut layout = template.layout.clone();
    let mut changes: Vec<TemplateProperty> = Vec::new();

    ui.label("Name");
    if ui.text_edit_singleline(&mut name).changed() {
        changes.push(TemplateProperty::Name(name));
    }
    ui.label("Category");
    if ui.text_edit_singleline(&mut category).changed() {
        changes.push(TemplateProperty::Category(category));
    }
    ui.horizontal(|ui| {
        for (value, label) in [
            (TemplateKind::Invitation, "Invitation"),
            (TemplateKind::Ticket, "Ticket"),
        ] {
            if ui.selectable_label(kind == value, label).clicked() && kind != value {
                changes.push(TemplateProperty::Kind(value));
            }
        }
    });

    let mut layout_changed = false;
    ui.horizontal(|ui| {
        ui.label("W");
        layout_changed |= ui
            .add(egui::DragValue::new(&mut layout.width).range(1.0..=4000.0))
            .changed();
        ui.label("H");
        layout_changed |= ui
            .add(egui::DragValue::new(&mut layout.height).range(1.0..=4000.0))
            .changed();
    });
    if let Background::Color { color } = &mut layout.background {
        ui.horizontal(|ui| {
            ui.label("Background");
            layout_changed |= egui::color_picker::color_edit_button_srgba(
                ui,
                color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed();
        });
    }
    if layout_changed {
        changes.push(TemplateProperty::Layout(layout));
    }

    for change in changes {
        editor.update_template_property(change);
    }
}

fn element_section(editor: &mut Editor, ui: &mut egui::Ui) {
    let Some(element) = editor.selected_element() else {
        ui.label("No selection");
        return;
    };
    let id = element.id();
    // Snapshot for the widgets; changes flow back as one patch.
    let element = element.clone();
    let common = element.common().clone();
    let mut patch = ElementPatch::default();

    ui.label(format!("Selected: {}", element.kind()));

    let mut position = common.position;
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label("X");
        changed |= ui.add(egui::DragValue::new(&mut position.x)).changed();
        ui.label("Y");
        changed |= ui.add(egui::DragValue::new(&mut position.y)).changed();
    });
    if changed {
        patch.position = Some(position);
    }

    let mut size = common.size;
    changed = false;
    ui.horizontal(|ui| {
        ui.label("W");
        changed |= ui
            .add(egui::DragValue::new(&mut size.width).range(1.0..=4000.0))
            .changed();
        ui.label("H");
        changed |= ui
            .add(egui::DragValue::new(&mut size.height).range(1.0..=4000.0))
            .changed();
    });
    if changed {
        patch.size = Some(size);
    }

    let mut rotation = common.rotation;
    if ui
        .add(egui::Slider::new(&mut rotation, -180.0..=180.0).text("Rotation"))
        .changed()
    {
        patch.rotation = Some(rotation);
    }
    let mut opacity = common.opacity;
    if ui
        .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
        .changed()
    {
        patch.opacity = Some(opacity);
    }
    let mut z_index = common.z_index;
    if ui
        .add(egui::DragValue::new(&mut z_index).prefix("z "))
        .changed()
    {
        patch.z_index = Some(z_index);
    }

    match &element {
        Element::Text(text) => {
            let mut content = text.content.clone();
            if ui.text_edit_multiline(&mut content).changed() {
                patch.content = Some(content);
            }
            let mut font_size = text.font_size;
            if ui
                .add(egui::Slider::new(&mut font_size, 4.0..=200.0).text("Font size"))
                .changed()
            {
                patch.font_size = Some(font_size);
            }
            ui.horizontal(|ui| {
                for (align, label) in [
                    (TextAlign::Left, "Left"),
                    (TextAlign::Center, "Center"),
                    (TextAlign::Right, "Right"),
                ] {
                    if ui.selectable_label(text.text_align == align, label).clicked() {
                        patch.text_align = Some(align);
                    }
                }
            });
            ui.horizontal(|ui| {
                let mut bold = text.font_weight == FontWeight::Bold;
                if ui.checkbox(&mut bold, "Bold").changed() {
                    patch.font_weight = Some(if bold {
                        FontWeight::Bold
                    } else {
                        FontWeight::Normal
                    });
                }
                let mut italic = text.font_style == FontStyle::Italic;
                if ui.checkbox(&mut italic, "Italic").changed() {
                    patch.font_style = Some(if italic {
                        FontStyle::Italic
                    } else {
                        FontStyle::Normal
                    });
                }
            });
            let mut color = text.color;
            ui.horizontal(|ui| {
                ui.label("Color");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    patch.color = Some(color);
                }
            });
        }
        Element::Image(image) => {
            let mut image_url = image.image_url.clone();
            ui.label("Image URL");
            if ui.text_edit_singleline(&mut image_url).changed() {
                patch.image_url = Some(image_url);
            }
        }
        Element::Shape(shape) => {
            ui.horizontal(|ui| {
                for (kind, label) in [
                    (ShapeKind::Rectangle, "Rectangle"),
                    (ShapeKind::Ellipse, "Ellipse"),
                ] {
                    if ui.selectable_label(shape.shape == kind, label).clicked() {
                        patch.shape = Some(kind);
                    }
                }
            });
            let mut background_color = shape.background_color;
            ui.horizontal(|ui| {
                ui.label("Fill");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut background_color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    patch.background_color = Some(background_color);
                }
            });
            let mut border_radius = shape.border_radius;
            if ui
                .add(egui::Slider::new(&mut border_radius, 0.0..=100.0).text("Corner radius"))
                .changed()
            {
                patch.border_radius = Some(border_radius);
            }
            let mut border_width = shape.border_width;
            if ui
                .add(egui::Slider::new(&mut border_width, 0.0..=20.0).text("Border width"))
                .changed()
            {
                patch.border_width = Some(border_width);
            }
            let mut border_color = shape.border_color;
            ui.horizontal(|ui| {
                ui.label("Border");
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut border_color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    patch.border_color = Some(border_color);
                }
            });
        }
    }

    if !patch.is_empty() {
        editor.update_element(id, patch);
    }
}
