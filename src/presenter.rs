//! Info panel sequencing.
//!
//! The presenter owns *when* panel operations may happen; the panel view
//! owns how they look. Show happens only after a zoom-in completes, hide
//! only at a zoom-out boundary, and repopulation is deferred past the
//! hide slide's visual midpoint so stale text is never visible mid-slide.

use crate::catalog::EventCatalog;
use crate::constants::*;
use crate::events::NavEvent;
use crate::surface::{PanelSurface, SlideAxis};
use crate::viewport::ViewportMetrics;

struct PendingRepopulate {
    index: usize,
    /// Time until the hide slide passes its visual midpoint
    delay: f32,
}

/// Drives a `PanelSurface` off the choreographer's event stream.
pub struct InfoPanelPresenter {
    axis: SlideAxis,
    compact: bool,
    /// Whether the user has navigated at least once (controls the swipe hint)
    interacted: bool,
    pending: Option<PendingRepopulate>,
}

impl InfoPanelPresenter {
    pub fn new(metrics: &ViewportMetrics) -> Self {
        Self {
            axis: axis_for(metrics),
            compact: metrics.is_compact,
            interacted: false,
            pending: None,
        }
    }

    pub fn axis(&self) -> SlideAxis {
        self.axis
    }

    /// Populate the panel while it is fully hidden (startup only).
    pub fn prime(&self, catalog: &EventCatalog, surface: &mut dyn PanelSurface) {
        surface.set_panel_content(catalog.current());
        surface.set_swipe_hint_visible(self.compact && !self.interacted);
        surface.set_controls_offset(self.controls_offset());
    }

    /// React to a choreographer event.
    pub fn handle_event(&mut self, event: NavEvent, surface: &mut dyn PanelSurface) {
        match event {
            NavEvent::ZoomInStarted { .. } => {
                self.interacted = true;
                surface.set_swipe_hint_visible(false);
            }
            NavEvent::ZoomInCompleted { .. } => {
                surface.show_panel(self.axis);
            }
            NavEvent::ZoomOutStarted { .. } => {}
            NavEvent::ZoomOutCompleted { index } => {
                surface.hide_panel(self.axis);
                self.pending = Some(PendingRepopulate {
                    index,
                    delay: PANEL_SLIDE_DURATION * PANEL_SLIDE_MIDPOINT,
                });
            }
        }
    }

    /// Advance the deferred repopulation timer. The content swap happens
    /// only once the hide slide is past its midpoint.
    pub fn update(&mut self, dt: f32, catalog: &EventCatalog, surface: &mut dyn PanelSurface) {
        if let Some(pending) = &mut self.pending {
            pending.delay -= dt;
            if pending.delay <= 0.0 {
                let index = pending.index;
                self.pending = None;
                surface.set_panel_content(catalog.get(index));
            }
        }
    }

    /// Re-derive layout-dependent presentation after a resize. The new
    /// axis is pushed to the view immediately so an already-shown panel
    /// re-anchors without waiting for the next transition.
    pub fn sync_layout(&mut self, metrics: &ViewportMetrics, surface: &mut dyn PanelSurface) {
        self.axis = axis_for(metrics);
        self.compact = metrics.is_compact;
        surface.set_axis(self.axis);
        surface.set_swipe_hint_visible(self.compact && !self.interacted);
        surface.set_controls_offset(self.controls_offset());
    }

    fn controls_offset(&self) -> f32 {
        if self.compact {
            CONTROLS_BOTTOM_MARGIN + CONTROLS_COMPACT_RAISE
        } else {
            CONTROLS_BOTTOM_MARGIN
        }
    }
}

fn axis_for(metrics: &ViewportMetrics) -> SlideAxis {
    if metrics.is_compact {
        SlideAxis::Vertical
    } else {
        SlideAxis::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventCatalog;

    /// Records every surface call in order.
    #[derive(Default)]
    struct RecordingPanel {
        calls: Vec<String>,
        content: Option<String>,
    }

    impl PanelSurface for RecordingPanel {
        fn show_panel(&mut self, _axis: SlideAxis) {
            self.calls.push("show".to_string());
        }
        fn hide_panel(&mut self, _axis: SlideAxis) {
            self.calls.push("hide".to_string());
        }
        fn set_axis(&mut self, axis: SlideAxis) {
            self.calls.push(format!("axis:{:?}", axis));
        }
        fn set_panel_content(&mut self, event: &crate::catalog::LifeEvent) {
            self.calls.push(format!("content:{}", event.name));
            self.content = Some(event.name.clone());
        }
        fn set_swipe_hint_visible(&mut self, visible: bool) {
            self.calls.push(format!("hint:{}", visible));
        }
        fn set_controls_offset(&mut self, _offset: f32) {}
    }

    fn wide_metrics() -> ViewportMetrics {
        ViewportMetrics::recompute(1280.0, 720.0)
    }

    #[test]
    fn test_show_on_zoom_in_completion() {
        let mut presenter = InfoPanelPresenter::new(&wide_metrics());
        let mut panel = RecordingPanel::default();
        presenter.handle_event(NavEvent::ZoomInCompleted { index: 0 }, &mut panel);
        assert_eq!(panel.calls, vec!["show"]);
    }

    #[test]
    fn test_repopulate_deferred_past_midpoint() {
        let catalog = EventCatalog::builtin();
        let mut presenter = InfoPanelPresenter::new(&wide_metrics());
        let mut panel = RecordingPanel::default();

        presenter.handle_event(NavEvent::ZoomOutCompleted { index: 1 }, &mut panel);
        assert_eq!(panel.calls, vec!["hide"]);

        // Before the slide midpoint the old content must still be up.
        presenter.update(0.1, &catalog, &mut panel);
        assert!(panel.content.is_none());

        // Past the midpoint the content swaps to the new event.
        presenter.update(0.2, &catalog, &mut panel);
        assert_eq!(panel.content.as_deref(), Some(catalog.get(1).name.as_str()));
    }

    #[test]
    fn test_full_cycle_panel_matches_new_event() {
        let catalog = EventCatalog::builtin();
        let mut presenter = InfoPanelPresenter::new(&wide_metrics());
        let mut panel = RecordingPanel::default();

        presenter.prime(&catalog, &mut panel);
        assert_eq!(panel.content.as_deref(), Some(catalog.get(0).name.as_str()));

        presenter.handle_event(NavEvent::ZoomInStarted { index: 0 }, &mut panel);
        presenter.handle_event(NavEvent::ZoomInCompleted { index: 0 }, &mut panel);
        presenter.handle_event(NavEvent::ZoomOutCompleted { index: 1 }, &mut panel);
        presenter.update(1.0, &catalog, &mut panel);
        assert_eq!(panel.content.as_deref(), Some(catalog.get(1).name.as_str()));

        // hide happened before the content swap
        let hide_pos = panel.calls.iter().position(|c| c == "hide").unwrap();
        let swap_pos = panel
            .calls
            .iter()
            .rposition(|c| c.starts_with("content:"))
            .unwrap();
        assert!(hide_pos < swap_pos);
    }

    #[test]
    fn test_swipe_hint_only_in_compact_before_interaction() {
        let compact = ViewportMetrics::recompute(400.0, 800.0);
        let mut presenter = InfoPanelPresenter::new(&compact);
        let mut panel = RecordingPanel::default();

        presenter.prime(&EventCatalog::builtin(), &mut panel);
        assert!(panel.calls.contains(&"hint:true".to_string()));

        presenter.handle_event(NavEvent::ZoomInStarted { index: 0 }, &mut panel);
        assert_eq!(panel.calls.last().unwrap(), "hint:false");

        // Hint stays off after a resize once the user has interacted.
        panel.calls.clear();
        presenter.sync_layout(&compact, &mut panel);
        assert!(panel.calls.contains(&"hint:false".to_string()));
    }

    #[test]
    fn test_axis_follows_layout() {
        let mut presenter = InfoPanelPresenter::new(&wide_metrics());
        assert_eq!(presenter.axis(), SlideAxis::Horizontal);
        let mut panel = RecordingPanel::default();
        presenter.sync_layout(&ViewportMetrics::recompute(400.0, 800.0), &mut panel);
        assert_eq!(presenter.axis(), SlideAxis::Vertical);
    }

    #[test]
    fn test_resize_reanchors_shown_panel() {
        let mut presenter = InfoPanelPresenter::new(&wide_metrics());
        let mut panel = RecordingPanel::default();
        presenter.handle_event(NavEvent::ZoomInCompleted { index: 0 }, &mut panel);

        // Layout flips while the panel is up: the view must get the new
        // axis now, not at the next show/hide.
        panel.calls.clear();
        presenter.sync_layout(&ViewportMetrics::recompute(400.0, 800.0), &mut panel);
        assert!(panel.calls.contains(&"axis:Vertical".to_string()));

        presenter.sync_layout(&wide_metrics(), &mut panel);
        assert!(panel.calls.contains(&"axis:Horizontal".to_string()));
    }
}
