//! Overlay window for the debug coordinate editor (`calibrate` builds).

use crate::calibrate::CoordinateEditor;

use super::{style, UiActions};

pub fn draw_calibrate_window(
    ctx: &egui::Context,
    editor: &CoordinateEditor,
    actions: &mut UiActions,
) {
    if !editor.is_active() {
        return;
    }

    let (latitude, longitude) = editor.coordinates();

    egui::Window::new("Coordinate Editor")
        .frame(style::panel_frame())
        .fixed_pos([16.0, 64.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Arrow keys rotate the globe directly.");
            ui.add_space(4.0);
            ui.monospace(format!("lat {:>9.4}", latitude));
            ui.monospace(format!("lon {:>9.4}", longitude));
            ui.add_space(6.0);
            if ui.button("Save to current event (S)").clicked() {
                actions.save_calibration = true;
            }
        });
}
