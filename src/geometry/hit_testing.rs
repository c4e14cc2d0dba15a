use egui::{Pos2, Vec2};

use crate::element::Element;
use crate::id_generator::ElementId;
use crate::template::Template;

/// Test whether a document-space point falls inside an element's bounding
/// box, taking its rotation (about the center) into account.
pub fn hit_test(element: &Element, pos: Pos2) -> bool {
    let common = element.common();
    let offset = pos - common.position;
    // Rotate the point back into the element's local frame.
    let (sin, cos) = (-common.rotation.to_radians()).sin_cos();
    let local = Vec2::new(
        offset.x * cos - offset.y * sin,
        offset.x * sin + offset.y * cos,
    );
    local.x.abs() <= common.size.width / 2.0 && local.y.abs() <= common.size.height / 2.0
}

/// Resolve the element a click lands on: highest `z_index` wins, with later
/// insertion breaking ties.
pub fn topmost_element_at(template: &Template, pos: Pos2) -> Option<ElementId> {
    template
        .elements
        .iter()
        .enumerate()
        .filter(|(_, el)| hit_test(el, pos))
        .max_by_key(|(index, el)| (el.z_index(), *index))
        .map(|(_, el)| el.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementPatch, factory};
    use crate::id_generator::generate_id;
    use crate::template::{Template, TemplateKind};

    #[test]
    fn axis_aligned_hit_and_miss() {
        // Default shape is 100x100 centered on (100, 100).
        let shape = factory::create_shape(generate_id(), Pos2::new(100.0, 100.0), 1, None);
        assert!(hit_test(&shape, Pos2::new(60.0, 140.0)));
        assert!(!hit_test(&shape, Pos2::new(160.0, 100.0)));
    }

    #[test]
    fn rotation_is_respected() {
        let mut text = factory::create_text(generate_id(), Pos2::new(0.0, 0.0), 1, None);
        // 200x50 block rotated a quarter turn: tall instead of wide.
        text.apply_patch(&ElementPatch {
            rotation: Some(90.0),
            ..ElementPatch::default()
        });
        assert!(hit_test(&text, Pos2::new(0.0, 80.0)));
        assert!(!hit_test(&text, Pos2::new(80.0, 0.0)));
    }

    #[test]
    fn topmost_prefers_higher_z() {
        let mut template = Template::new("t", TemplateKind::Invitation);
        let below = factory::create_shape(generate_id(), Pos2::new(50.0, 50.0), 1, None);
        let above = factory::create_shape(generate_id(), Pos2::new(50.0, 50.0), 2, None);
        let below_id = below.id();
        let above_id = above.id();
        template.elements.push(above);
        template.elements.push(below);

        assert_eq!(
            topmost_element_at(&template, Pos2::new(50.0, 50.0)),
            Some(above_id)
        );
        assert_ne!(
            topmost_element_at(&template, Pos2::new(50.0, 50.0)),
            Some(below_id)
        );
    }
}
