use crate::editor::Editor;
use crate::state::{Mode, ZoomPreset};

/// Left-hand toolbar: mode switch, undo/redo, zoom presets, grid toggles and
/// operations on the current selection. Pure consumer of the controller.
pub fn tools_panel(editor: &mut Editor, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            for (mode, label) in [
                (Mode::Select, "Select"),
                (Mode::Text, "Text"),
                (Mode::Image, "Image"),
                (Mode::Shape, "Shape"),
                (Mode::Pan, "Pan"),
            ] {
                if ui.selectable_label(editor.mode() == mode, label).clicked() {
                    log::info!("mode selected from UI: {label}");
                    editor.set_mode(mode);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(editor.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    editor.undo();
                }
                if ui
                    .add_enabled(editor.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    editor.redo();
                }
            });
            ui.horizontal(|ui| {
                ui.label(format!("Undo steps: {}", editor.state().history.undo_depth()));
                ui.label(format!("Redo steps: {}", editor.state().history.redo_depth()));
            });
            ui.separator();

            ui.label("Zoom");
            ui.horizontal_wrapped(|ui| {
                for (preset, label) in [
                    (ZoomPreset::Fit, "Fit"),
                    (ZoomPreset::Pct50, "50%"),
                    (ZoomPreset::Pct100, "100%"),
                    (ZoomPreset::Pct150, "150%"),
                    (ZoomPreset::Pct200, "200%"),
                ] {
                    if ui.button(label).clicked() {
                        editor.apply_zoom_preset(preset);
                    }
                }
            });
            ui.label(format!("{:.0}%", editor.zoom() * 100.0));
            ui.separator();

            let mut show_grid = editor.state().show_grid;
            if ui.checkbox(&mut show_grid, "Show grid").changed() {
                editor.toggle_grid();
            }
            let mut snap_to_grid = editor.state().snap_to_grid;
            if ui.checkbox(&mut snap_to_grid, "Snap to grid").changed() {
                editor.toggle_snap_to_grid();
            }
            let mut grid_size = editor.state().grid_size;
            if ui
                .add(egui::Slider::new(&mut grid_size, 1..=100).text("Grid size"))
                .changed()
            {
                editor.set_grid_size(grid_size);
            }
            ui.separator();

            if let Some(id) = editor.selected_element_id() {
                ui.horizontal(|ui| {
                    if ui.button("Duplicate").clicked() {
                        editor.duplicate_element(id);
                    }
                    if ui.button("Delete").clicked() {
                        editor.remove_element(id);
                    }
                });
            }
        });
}
