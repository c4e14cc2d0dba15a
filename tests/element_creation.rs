use std::collections::HashSet;

use egui::pos2;

use template_designer::element::{
    Element, ElementPatch, FontWeight, ShapeKind, Size, TextAlign, factory,
};
use template_designer::id_generator::{self, ElementId};

#[test]
fn text_factory_defaults() {
    let id = id_generator::generate_id();
    let element = factory::create_text(id, pos2(30.0, 40.0), 3, None);
    let Element::Text(text) = &element else {
        panic!("expected a text element");
    };

    assert_eq!(element.id(), id);
    assert_eq!(element.position(), pos2(30.0, 40.0));
    assert_eq!(element.z_index(), 3);
    assert_eq!(text.common.size, Size::new(200.0, 50.0));
    assert_eq!(text.common.rotation, 0.0);
    assert_eq!(text.common.opacity, 1.0);
    assert_eq!(text.content, factory::DEFAULT_TEXT_CONTENT);
    assert_eq!(text.font_family, factory::DEFAULT_FONT_FAMILY);
    assert_eq!(text.font_size, factory::DEFAULT_FONT_SIZE);
    assert_eq!(text.text_align, TextAlign::Center);
}

#[test]
fn image_factory_defaults() {
    let element = factory::create_image(id_generator::generate_id(), pos2(0.0, 0.0), 1, None);
    let Element::Image(image) = &element else {
        panic!("expected an image element");
    };
    assert_eq!(image.common.size, Size::new(150.0, 150.0));
    assert!(image.image_url.is_empty());
}

#[test]
fn shape_factory_defaults_to_rectangle() {
    let element = factory::create_shape(id_generator::generate_id(), pos2(0.0, 0.0), 1, None);
    let Element::Shape(shape) = &element else {
        panic!("expected a shape element");
    };
    assert_eq!(shape.shape, ShapeKind::Rectangle);
    assert_eq!(shape.common.size, Size::new(100.0, 100.0));
    assert_eq!(shape.border_width, 0.0);
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<ElementId> = (0..10_000).map(|_| id_generator::generate_id()).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn generation_stays_ahead_of_registered_ids() {
    let loaded: ElementId = "ffff-00000001".parse().unwrap();
    id_generator::register_existing(loaded);
    let fresh = id_generator::generate_id();
    assert!(fresh > loaded);
}

#[test]
fn patch_applies_matching_fields_only() {
    let mut element = factory::create_text(id_generator::generate_id(), pos2(0.0, 0.0), 1, None);

    let patch = ElementPatch {
        content: Some("Updated".into()),
        font_weight: Some(FontWeight::Bold),
        // Image and shape fields have no meaning on a text element.
        image_url: Some("https://example.com/a.png".into()),
        border_width: Some(4.0),
        ..ElementPatch::default()
    };
    element.apply_patch(&patch);

    let Element::Text(text) = &element else {
        panic!("patch must not change the variant");
    };
    assert_eq!(text.content, "Updated");
    assert_eq!(text.font_weight, FontWeight::Bold);
}

#[test]
fn patch_clamps_opacity() {
    let mut element = factory::create_shape(id_generator::generate_id(), pos2(0.0, 0.0), 1, None);
    element.apply_patch(&ElementPatch {
        opacity: Some(1.5),
        ..ElementPatch::default()
    });
    assert_eq!(element.common().opacity, 1.0);

    element.apply_patch(&ElementPatch {
        opacity: Some(-0.5),
        ..ElementPatch::default()
    });
    assert_eq!(element.common().opacity, 0.0);
}

#[test]
fn patch_rejects_degenerate_values() {
    let mut element = factory::create_text(id_generator::generate_id(), pos2(0.0, 0.0), 1, None);
    let original_size = element.common().size;

    element.apply_patch(&ElementPatch {
        size: Some(Size::new(-5.0, 10.0)),
        font_size: Some(0.0),
        ..ElementPatch::default()
    });

    assert_eq!(element.common().size, original_size);
    let Element::Text(text) = &element else {
        unreachable!();
    };
    assert_eq!(text.font_size, factory::DEFAULT_FONT_SIZE);
}

#[test]
fn empty_patch_is_detectable() {
    assert!(ElementPatch::default().is_empty());
    assert!(!ElementPatch::content("x").is_empty());
}
