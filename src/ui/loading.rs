//! Loading screen overlay.

use crate::loader::LoadStatus;

use super::style;

/// Draw the loading overlay. Returns once the loader is ready; a failed
/// load keeps a permanent notice on screen.
pub fn draw_loading_overlay(ctx: &egui::Context, status: LoadStatus) {
    let text = match status {
        LoadStatus::Ready => return,
        LoadStatus::Loading { progress } => format!("{:.0} % loaded", progress),
        LoadStatus::Failed => "Something went wrong loading the globe.\nNavigation is disabled.".to_string(),
    };

    egui::Area::new(egui::Id::new("loading_overlay"))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(text)
                        .size(22.0)
                        .color(style::colors::TEXT_PRIMARY),
                );
            });
        });
}
