//! Presentation-surface interfaces the navigation core drives.
//!
//! The core never touches the renderer or the UI toolkit directly; it
//! writes animatable numeric properties through `SceneSurface` and panel
//! state through `PanelSurface`. Concrete implementations live in
//! `scene` and `ui::info_panel`.

use crate::catalog::LifeEvent;

/// Axis the info panel slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAxis {
    /// Wide layout: panel slides in from the right
    Horizontal,
    /// Compact layout: panel slides up from the bottom
    Vertical,
}

/// The render surface: camera distance plus subject placement.
/// Each property is an externally-animatable numeric target; the core
/// writes eased values every frame and does not own the render loop.
pub trait SceneSurface {
    fn set_camera_distance(&mut self, distance: f32);
    fn set_subject_offset(&mut self, x: f32, y: f32);
    /// Orientation in radians: pitch about the lateral axis, yaw about
    /// the vertical axis.
    fn set_subject_orientation(&mut self, pitch: f32, yaw: f32);
}

/// The layout surface: info panel, swipe hint, and control placement.
pub trait PanelSurface {
    fn show_panel(&mut self, axis: SlideAxis);
    fn hide_panel(&mut self, axis: SlideAxis);
    /// Re-anchor the panel without changing its shown/hidden target.
    /// Called when a resize flips the layout mid-display.
    fn set_axis(&mut self, axis: SlideAxis);
    fn set_panel_content(&mut self, event: &LifeEvent);
    fn set_swipe_hint_visible(&mut self, visible: bool);
    /// Raise the nav controls above the bottom edge by `offset` px.
    fn set_controls_offset(&mut self, offset: f32);
}
