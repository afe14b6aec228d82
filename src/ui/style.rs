//! Space-themed egui styling.
//!
//! Dark translucent panels over the starfield, soft blue accents.

use egui::epaint::Shadow;
use egui::{Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Space color palette
pub mod colors {
    use egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(12, 16, 24, 230);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 80, 110);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(225, 230, 240);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 150, 170);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(120, 170, 230);
}

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the space-themed style
pub fn space_style() -> Style {
    let mut style = Style::default();
    style.visuals = space_visuals();
    style
}

fn space_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::same(4.0);
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::PANEL_BG;

    visuals.selection.bg_fill = colors::TEXT_ACCENT.linear_multiply(0.4);
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

/// Frame used for the floating panels (info panel, gallery, overlays)
pub fn panel_frame() -> Frame {
    Frame::default()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .rounding(Rounding::same(4.0))
        .inner_margin(Margin::same(14.0))
}
