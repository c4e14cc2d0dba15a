use egui::{
    Align2, Color32, FontFamily, FontId, Mesh, Painter, Pos2, Rect, Rounding, Stroke, Vec2,
};

use crate::element::{Element, ElementCommon, ImageElement, ShapeElement, ShapeKind, TextAlign,
    TextElement};
use crate::state::EditorState;
use crate::template::Background;

const GRID_LINE_COLOR: Color32 = Color32::from_rgb(210, 210, 210);
const SELECTION_COLOR: Color32 = Color32::from_rgb(0x3d, 0x7e, 0xff);
const PLACEHOLDER_COLOR: Color32 = Color32::from_rgb(150, 150, 150);

/// Paint one immutable editor snapshot onto the canvas.
///
/// Pure consumer: reads the state, never mutates it. Fidelity is
/// deliberately modest (no rasterization, no font weight/style mapping for
/// the embedded egui fonts); this is an editing preview, not final output.
pub fn paint(painter: &Painter, origin: Pos2, state: &EditorState) {
    let Some(template) = &state.template else {
        return;
    };
    let zoom = state.zoom;
    let doc_rect = Rect::from_min_size(
        origin,
        Vec2::new(template.layout.width, template.layout.height) * zoom,
    );

    paint_background(painter, doc_rect, &template.layout.background);
    if state.show_grid {
        paint_grid(painter, doc_rect, state.grid_size as f32 * zoom);
    }

    // Insertion order only breaks z_index ties.
    let mut ordered: Vec<(usize, &Element)> = template.elements.iter().enumerate().collect();
    ordered.sort_by_key(|(index, el)| (el.z_index(), *index));
    for (_, element) in ordered {
        paint_element(painter, origin, zoom, element);
    }

    if let Some(selected) = state.selected_element() {
        paint_selection(painter, origin, zoom, selected.common());
    }
}

fn paint_background(painter: &Painter, doc_rect: Rect, background: &Background) {
    match background {
        Background::Color { color } => {
            painter.rect_filled(doc_rect, 0.0, *color);
        }
        Background::Gradient { start, end, .. } => {
            // Vertical two-stop gradient; the angle is ignored in preview.
            let mut mesh = Mesh::default();
            mesh.colored_vertex(doc_rect.left_top(), *start);
            mesh.colored_vertex(doc_rect.right_top(), *start);
            mesh.colored_vertex(doc_rect.right_bottom(), *end);
            mesh.colored_vertex(doc_rect.left_bottom(), *end);
            mesh.add_triangle(0, 1, 2);
            mesh.add_triangle(0, 2, 3);
            painter.add(egui::Shape::mesh(mesh));
        }
        Background::Image { url } => {
            painter.rect_filled(doc_rect, 0.0, Color32::WHITE);
            painter.text(
                doc_rect.center(),
                Align2::CENTER_CENTER,
                url,
                FontId::new(12.0, FontFamily::Proportional),
                PLACEHOLDER_COLOR,
            );
        }
    }
}

fn paint_grid(painter: &Painter, doc_rect: Rect, step: f32) {
    if step < 2.0 {
        // Below this the grid is just noise.
        return;
    }
    let stroke = Stroke::new(0.5, GRID_LINE_COLOR);
    let mut x = doc_rect.left();
    while x <= doc_rect.right() {
        painter.line_segment([Pos2::new(x, doc_rect.top()), Pos2::new(x, doc_rect.bottom())], stroke);
        x += step;
    }
    let mut y = doc_rect.top();
    while y <= doc_rect.bottom() {
        painter.line_segment([Pos2::new(doc_rect.left(), y), Pos2::new(doc_rect.right(), y)], stroke);
        y += step;
    }
}

fn paint_element(painter: &Painter, origin: Pos2, zoom: f32, element: &Element) {
    match element {
        Element::Text(text) => paint_text(painter, origin, zoom, text),
        Element::Image(image) => paint_image(painter, origin, zoom, image),
        Element::Shape(shape) => paint_shape(painter, origin, zoom, shape),
    }
}

fn element_rect(origin: Pos2, zoom: f32, common: &ElementCommon) -> Rect {
    Rect::from_center_size(
        origin + common.position.to_vec2() * zoom,
        Vec2::new(common.size.width, common.size.height) * zoom,
    )
}

fn rotate_around(point: Pos2, center: Pos2, radians: f32) -> Pos2 {
    let (sin, cos) = radians.sin_cos();
    let offset = point - center;
    center + Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

fn paint_shape(painter: &Painter, origin: Pos2, zoom: f32, shape: &ShapeElement) {
    let rect = element_rect(origin, zoom, &shape.common);
    let fill = shape.background_color.gamma_multiply(shape.common.opacity);
    let stroke = if shape.border_width > 0.0 {
        Stroke::new(
            shape.border_width * zoom,
            shape.border_color.gamma_multiply(shape.common.opacity),
        )
    } else {
        Stroke::NONE
    };
    let radians = shape.common.rotation.to_radians();

    match shape.shape {
        ShapeKind::Rectangle if radians == 0.0 => {
            let rounding = Rounding::same(shape.border_radius * zoom);
            painter.rect_filled(rect, rounding, fill);
            if shape.border_width > 0.0 {
                painter.rect_stroke(rect, rounding, stroke);
            }
        }
        ShapeKind::Rectangle => {
            // Border radius is dropped for rotated rectangles in preview.
            let points = [
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ]
            .into_iter()
            .map(|p| rotate_around(p, rect.center(), radians))
            .collect();
            painter.add(egui::Shape::convex_polygon(points, fill, stroke));
        }
        ShapeKind::Ellipse => {
            let segments = 48;
            let points = (0..segments)
                .map(|i| {
                    let t = i as f32 / segments as f32 * std::f32::consts::TAU;
                    let local = Pos2::new(
                        rect.center().x + t.cos() * rect.width() / 2.0,
                        rect.center().y + t.sin() * rect.height() / 2.0,
                    );
                    rotate_around(local, rect.center(), radians)
                })
                .collect();
            painter.add(egui::Shape::convex_polygon(points, fill, stroke));
        }
    }
}

fn paint_text(painter: &Painter, origin: Pos2, zoom: f32, text: &TextElement) {
    let rect = element_rect(origin, zoom, &text.common);
    // Family, weight and style are not mapped onto the embedded egui fonts.
    let font_id = FontId::new(text.font_size * zoom, FontFamily::Proportional);
    let color = text.color.gamma_multiply(text.common.opacity);
    let (anchor_pos, anchor) = match text.text_align {
        TextAlign::Left => (Pos2::new(rect.left(), rect.center().y), Align2::LEFT_CENTER),
        TextAlign::Center => (rect.center(), Align2::CENTER_CENTER),
        TextAlign::Right => (Pos2::new(rect.right(), rect.center().y), Align2::RIGHT_CENTER),
    };
    painter.text(anchor_pos, anchor, &text.content, font_id, color);
}

fn paint_image(painter: &Painter, origin: Pos2, zoom: f32, image: &ImageElement) {
    // Placeholder frame; the bytes behind image_url are never fetched here.
    let rect = element_rect(origin, zoom, &image.common);
    let stroke = Stroke::new(1.0, PLACEHOLDER_COLOR.gamma_multiply(image.common.opacity));
    painter.rect_stroke(rect, 0.0, stroke);
    painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
    painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    let label = if image.image_url.is_empty() {
        "image"
    } else {
        image.image_url.as_str()
    };
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::new(11.0, FontFamily::Proportional),
        PLACEHOLDER_COLOR,
    );
}

fn paint_selection(painter: &Painter, origin: Pos2, zoom: f32, common: &ElementCommon) {
    let rect = element_rect(origin, zoom, common).expand(2.0);
    painter.rect_stroke(rect, 0.0, Stroke::new(1.5, SELECTION_COLOR));
}
