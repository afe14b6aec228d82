//! UI rendering using egui.
//!
//! The info panel, nav arrows, loading overlay, and projects gallery.
//! Drawing functions return their effects through `UiActions` so the
//! shell stays the single place that mutates application state.

pub mod info_panel;
pub mod loading;
pub mod projects;
pub mod style;

#[cfg(feature = "calibrate")]
pub mod calibrate;

use crate::choreographer::NavDirection;
use crate::constants::*;

/// Actions the UI wants to perform (returned to the shell)
#[derive(Default)]
pub struct UiActions {
    /// Arrow button pressed this frame
    pub advance: Option<NavDirection>,
    #[cfg(feature = "calibrate")]
    pub save_calibration: bool,
}

/// Draw the previous/next arrow controls.
///
/// `bottom_offset` raises them above the bottom edge; compact layouts
/// raise them further so the bottom panel does not cover them.
pub fn draw_nav_controls(
    ctx: &egui::Context,
    enabled: bool,
    bottom_offset: f32,
    actions: &mut UiActions,
) {
    egui::Area::new(egui::Id::new("nav_controls"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -bottom_offset))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 24.0;
                let prev = egui::Button::new(egui::RichText::new("\u{25c0}").size(20.0))
                    .min_size(egui::vec2(44.0, 44.0));
                let next = egui::Button::new(egui::RichText::new("\u{25b6}").size(20.0))
                    .min_size(egui::vec2(44.0, 44.0));
                if ui.add_enabled(enabled, prev).clicked() {
                    actions.advance = Some(NavDirection::Backward);
                }
                if ui.add_enabled(enabled, next).clicked() {
                    actions.advance = Some(NavDirection::Forward);
                }
            });
        });
}

/// Sanity bound so a bad offset cannot push the controls off screen.
pub fn clamp_controls_offset(offset: f32, screen_height: f32) -> f32 {
    offset.clamp(
        CONTROLS_BOTTOM_MARGIN,
        (screen_height * 0.5).max(CONTROLS_BOTTOM_MARGIN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_offset_clamped() {
        assert_eq!(clamp_controls_offset(10.0, 720.0), CONTROLS_BOTTOM_MARGIN);
        assert_eq!(clamp_controls_offset(5000.0, 720.0), 360.0);
        let normal = CONTROLS_BOTTOM_MARGIN + CONTROLS_COMPACT_RAISE;
        assert_eq!(clamp_controls_offset(normal, 720.0), normal);
    }
}
