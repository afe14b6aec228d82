//! Input arbitration: normalizes raw gestures into advance commands.
//!
//! Five channels feed in (mouse drag, touch swipe, scroll wheel, discrete
//! arrow buttons, and - in calibration builds - keyboard), and exactly one
//! command stream comes out. A cooldown after each accepted gesture keeps
//! overlapping input from reaching the choreographer; the choreographer's
//! own in-flight guard backs this up if the two timers drift.

use crate::choreographer::NavDirection;
use crate::constants::*;

/// Which pointer device class a press/release came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// The single live pointer scheme. Touch and mouse are never both live
/// for the same surface: compact layouts listen to touch, wide layouts to
/// mouse. Wheel and discrete buttons coexist with either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputScheme {
    Mouse,
    Touch,
}

impl InputScheme {
    pub fn for_compact_layout(is_compact: bool) -> Self {
        if is_compact {
            InputScheme::Touch
        } else {
            InputScheme::Mouse
        }
    }

    fn accepts(self, source: PointerSource) -> bool {
        matches!(
            (self, source),
            (InputScheme::Mouse, PointerSource::Mouse) | (InputScheme::Touch, PointerSource::Touch)
        )
    }
}

/// Serializes overlapping gestures into a clean advance-command stream.
pub struct InputArbiter {
    scheme: InputScheme,
    /// Set once the asset loader reports ready; all gestures are dropped
    /// before that (and forever if loading failed).
    ready: bool,
    cooldown_remaining: f32,
    /// Horizontal position where the active press started
    press_start_x: Option<f32>,
}

impl InputArbiter {
    pub fn new(scheme: InputScheme) -> Self {
        Self {
            scheme,
            ready: false,
            cooldown_remaining: 0.0,
            press_start_x: None,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn set_scheme(&mut self, scheme: InputScheme) {
        if self.scheme != scheme {
            self.scheme = scheme;
            self.press_start_x = None;
        }
    }

    pub fn scheme(&self) -> InputScheme {
        self.scheme
    }

    pub fn in_cooldown(&self) -> bool {
        self.cooldown_remaining > 0.0
    }

    /// Tick the cooldown timer.
    pub fn update(&mut self, dt: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }
    }

    /// Pointer press (mouse down / touch start).
    pub fn on_pointer_down(&mut self, source: PointerSource, x: f32) {
        if !self.scheme.accepts(source) {
            return;
        }
        self.press_start_x = Some(x);
    }

    /// Pointer release (mouse up / touch end). A horizontal travel below
    /// the swipe threshold is ignored as noise.
    pub fn on_pointer_up(&mut self, source: PointerSource, x: f32) -> Option<NavDirection> {
        if !self.scheme.accepts(source) {
            return None;
        }
        let start_x = self.press_start_x.take()?;
        let delta = x - start_x;
        if delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        let direction = if delta > 0.0 {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        };
        self.accept(direction)
    }

    /// Pointer cancelled by the platform (touch cancel): discard the
    /// active press without emitting anything.
    pub fn on_pointer_cancel(&mut self, source: PointerSource) {
        if self.scheme.accepts(source) {
            self.press_start_x = None;
        }
    }

    /// Scroll wheel: any delta counts as one discrete step.
    pub fn on_wheel(&mut self, delta_y: f32) -> Option<NavDirection> {
        if delta_y == 0.0 {
            return None;
        }
        let direction = if delta_y < 0.0 {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        };
        self.accept(direction)
    }

    /// Discrete arrow-button press.
    pub fn on_button(&mut self, direction: NavDirection) -> Option<NavDirection> {
        self.accept(direction)
    }

    fn accept(&mut self, direction: NavDirection) -> Option<NavDirection> {
        if !self.ready || self.cooldown_remaining > 0.0 {
            return None;
        }
        self.cooldown_remaining = GESTURE_COOLDOWN;
        Some(direction)
    }
}
