//! The sliding info panel view.
//!
//! Implements `PanelSurface`; the presenter decides *when* the panel
//! moves and what it says, this view owns the slide animation and the
//! egui drawing. Wide layouts slide in from the right edge, compact
//! layouts from the bottom.

use crate::catalog::LifeEvent;
use crate::constants::*;
use crate::surface::{PanelSurface, SlideAxis};
use crate::tween::ease_in_out_cubic;

use super::style;

struct PanelContent {
    name: String,
    age: String,
    description: String,
}

pub struct PanelView {
    axis: SlideAxis,
    target_shown: bool,
    /// 0 = fully hidden, 1 = fully shown
    progress: f32,
    content: Option<PanelContent>,
    swipe_hint: bool,
    controls_offset: f32,
}

impl PanelView {
    pub fn new() -> Self {
        Self {
            axis: SlideAxis::Horizontal,
            target_shown: false,
            progress: 0.0,
            content: None,
            swipe_hint: false,
            controls_offset: CONTROLS_BOTTOM_MARGIN,
        }
    }

    /// Advance the slide animation toward its target position.
    pub fn update(&mut self, dt: f32) {
        let step = dt / PANEL_SLIDE_DURATION;
        if self.target_shown {
            self.progress = (self.progress + step).min(1.0);
        } else {
            self.progress = (self.progress - step).max(0.0);
        }
    }

    pub fn controls_offset(&self) -> f32 {
        self.controls_offset
    }

    pub fn draw(&self, ctx: &egui::Context) {
        self.draw_swipe_hint(ctx);

        let content = match &self.content {
            Some(content) if self.progress > 0.0 => content,
            _ => return,
        };
        let slide = 1.0 - ease_in_out_cubic(self.progress);

        match self.axis {
            SlideAxis::Horizontal => {
                egui::Area::new(egui::Id::new("info_panel"))
                    .anchor(
                        egui::Align2::RIGHT_CENTER,
                        egui::vec2(slide * (PANEL_WIDTH + 40.0) - 20.0, 0.0),
                    )
                    .show(ctx, |ui| {
                        style::panel_frame().show(ui, |ui| {
                            ui.set_width(PANEL_WIDTH);
                            draw_content(ui, content);
                        });
                    });
            }
            SlideAxis::Vertical => {
                egui::Area::new(egui::Id::new("info_panel"))
                    .anchor(
                        egui::Align2::CENTER_BOTTOM,
                        egui::vec2(0.0, slide * (PANEL_HEIGHT_COMPACT + 40.0) - 12.0),
                    )
                    .show(ctx, |ui| {
                        style::panel_frame().show(ui, |ui| {
                            ui.set_width(ui.ctx().screen_rect().width() - 48.0);
                            ui.set_max_height(PANEL_HEIGHT_COMPACT);
                            draw_content(ui, content);
                        });
                    });
            }
        }
    }

    fn draw_swipe_hint(&self, ctx: &egui::Context) {
        if !self.swipe_hint {
            return;
        }
        egui::Area::new(egui::Id::new("swipe_hint"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -96.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("swipe to explore")
                        .italics()
                        .color(style::colors::TEXT_MUTED),
                );
            });
    }
}

impl Default for PanelView {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelSurface for PanelView {
    fn show_panel(&mut self, axis: SlideAxis) {
        self.axis = axis;
        self.target_shown = true;
    }

    fn hide_panel(&mut self, axis: SlideAxis) {
        self.axis = axis;
        self.target_shown = false;
    }

    fn set_axis(&mut self, axis: SlideAxis) {
        self.axis = axis;
    }

    fn set_panel_content(&mut self, event: &LifeEvent) {
        self.content = Some(PanelContent {
            name: event.name.clone(),
            age: event.age.clone(),
            description: event.description.clone(),
        });
    }

    fn set_swipe_hint_visible(&mut self, visible: bool) {
        self.swipe_hint = visible;
    }

    fn set_controls_offset(&mut self, offset: f32) {
        self.controls_offset = offset;
    }
}

fn draw_content(ui: &mut egui::Ui, content: &PanelContent) {
    ui.heading(&content.name);
    ui.label(
        egui::RichText::new(format!("Age: {}", content.age))
            .color(style::colors::TEXT_ACCENT),
    );
    ui.add_space(6.0);
    egui::ScrollArea::vertical()
        .max_height(PANEL_HEIGHT_COMPACT - 80.0)
        .show(ui, |ui| {
            ui.label(&content.description);
        });
}
