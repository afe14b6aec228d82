//! Navigation event system for decoupled communication between components.
//!
//! The choreographer emits events as transitions start and complete; the
//! presenter and UI consume them. This keeps the panel sequencing rules
//! out of the state machine itself.

/// Events emitted by the camera choreographer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// A zoom-in-and-center transition started for the event at `index`
    ZoomInStarted { index: usize },
    /// The zoom-in transition completed; the view is now zoomed in
    ZoomInCompleted { index: usize },
    /// A zoom-out-and-rotate transition started; the cursor has already
    /// advanced to `index`
    ZoomOutStarted { index: usize },
    /// The zoom-out transition completed; the view is now zoomed out
    ZoomOutCompleted { index: usize },
}

/// Simple event queue - events are pushed during update, drained at end of frame.
#[derive(Default)]
pub struct EventQueue {
    events: Vec<NavEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: NavEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = NavEvent> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
