//! The camera choreographer: the state machine that owns "which life
//! event is current" and runs the two camera transitions.
//!
//! Three states: zoomed out (initial), transitioning, zoomed in. A
//! transition, once accepted, always runs to completion; there is no
//! cancel path. Re-entrant requests while a transition is in flight are
//! rejected, which is the single most important invariant here.

use crate::catalog::{EventCatalog, LifeEvent};
use crate::constants::*;
use crate::events::{EventQueue, NavEvent};
use crate::surface::SceneSurface;
use crate::tween::Tween;
use crate::viewport::ViewportMetrics;

/// Direction to move through the event catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Forward,
    Backward,
}

impl NavDirection {
    pub fn step(self) -> i32 {
        match self {
            NavDirection::Forward => 1,
            NavDirection::Backward => -1,
        }
    }
}

/// Navigation state. Exactly one of these holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    ZoomedOut,
    Transitioning,
    ZoomedIn,
}

#[derive(Debug, Clone, Copy)]
enum TransitionKind {
    ZoomIn { index: usize },
    ZoomOut { index: usize },
}

/// One in-flight transition: a set of concurrent eased interpolations
/// plus the controlling countdown that decides completion.
struct ActiveTransition {
    kind: TransitionKind,
    distance: Tween,
    offset_x: Tween,
    offset_y: Tween,
    /// (pitch, yaw) easing, zoom-out only
    orientation: Option<(Tween, Tween)>,
    /// Remaining time on the controlling tween. The zoom-in focus pull
    /// deliberately runs longer than this and keeps easing afterwards.
    settle: f32,
}

/// Owns the zoom state and the camera/subject animation targets.
///
/// Exclusively mutates `NavState` and the catalog cursor; everything else
/// reads them.
pub struct Choreographer {
    state: NavState,
    metrics: ViewportMetrics,
    transition: Option<ActiveTransition>,
    /// Zoom-in focus pull still easing after the transition completed.
    /// Overwritten by the next transition, never blocks one.
    lingering_distance: Option<Tween>,
    /// Resize that arrived mid-transition; snapped at the next idle point.
    deferred_metrics: Option<ViewportMetrics>,
    distance: f32,
    offset: (f32, f32),
    orientation: (f32, f32),
}

/// Subject orientation for an event: pitch = latitude, yaw = negated
/// longitude, both in radians. This is an artistic mapping, not a
/// geographic projection; out-of-range longitudes are used as-is.
pub fn orientation_for(event: &LifeEvent) -> (f32, f32) {
    (
        event.latitude.to_radians(),
        -event.longitude.to_radians(),
    )
}

impl Choreographer {
    pub fn new(metrics: ViewportMetrics, catalog: &EventCatalog) -> Self {
        Self {
            state: NavState::ZoomedOut,
            metrics,
            transition: None,
            lingering_distance: None,
            deferred_metrics: None,
            distance: metrics.default_distance,
            offset: (0.0, 0.0),
            orientation: orientation_for(catalog.current()),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_zoomed_in(&self) -> bool {
        self.state == NavState::ZoomedIn
    }

    pub fn is_transition_in_flight(&self) -> bool {
        self.transition.is_some()
    }

    pub fn camera_distance(&self) -> f32 {
        self.distance
    }

    pub fn subject_offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn subject_orientation(&self) -> (f32, f32) {
        self.orientation
    }

    pub fn metrics(&self) -> &ViewportMetrics {
        &self.metrics
    }

    /// Push the current animation values to the render surface.
    pub fn apply_to(&self, scene: &mut dyn SceneSurface) {
        scene.set_camera_distance(self.distance);
        scene.set_subject_offset(self.offset.0, self.offset.1);
        scene.set_subject_orientation(self.orientation.0, self.orientation.1);
    }

    /// Handle an accepted gesture. Returns false (and does nothing) while
    /// a transition is in flight.
    ///
    /// From zoomed out, any direction starts the zoom-in-and-center
    /// transition; the direction only matters once zoomed in, where it
    /// advances the cursor immediately and starts zoom-out-and-rotate.
    pub fn request_advance(
        &mut self,
        direction: NavDirection,
        catalog: &mut EventCatalog,
        events: &mut EventQueue,
    ) -> bool {
        if self.transition.is_some() {
            return false;
        }

        match self.state {
            NavState::ZoomedOut => {
                let index = catalog.cursor();
                let (target_x, target_y) = self.metrics.focus_offset();
                self.lingering_distance = None;
                self.transition = Some(ActiveTransition {
                    kind: TransitionKind::ZoomIn { index },
                    distance: Tween::new(
                        self.distance,
                        self.metrics.close_distance,
                        FOCUS_PULL_DURATION,
                    ),
                    offset_x: Tween::new(self.offset.0, target_x, OFFSET_SHIFT_DURATION),
                    offset_y: Tween::new(self.offset.1, target_y, OFFSET_SHIFT_DURATION),
                    orientation: None,
                    settle: OFFSET_SHIFT_DURATION,
                });
                self.state = NavState::Transitioning;
                events.push(NavEvent::ZoomInStarted { index });
                true
            }
            NavState::ZoomedIn => {
                // The cursor advances before the animation that visualizes
                // it, so the upcoming event is already selected while the
                // globe is still settling.
                let (pitch, yaw) = orientation_for(catalog.advance(direction.step()));
                let index = catalog.cursor();
                self.lingering_distance = None;
                self.transition = Some(ActiveTransition {
                    kind: TransitionKind::ZoomOut { index },
                    distance: Tween::new(
                        self.distance,
                        self.metrics.default_distance,
                        ZOOM_OUT_DURATION,
                    ),
                    offset_x: Tween::new(self.offset.0, 0.0, ZOOM_OUT_DURATION),
                    offset_y: Tween::new(self.offset.1, 0.0, ZOOM_OUT_DURATION),
                    orientation: Some((
                        Tween::new(self.orientation.0, pitch, ZOOM_OUT_DURATION),
                        Tween::new(self.orientation.1, yaw, ZOOM_OUT_DURATION),
                    )),
                    settle: ZOOM_OUT_DURATION,
                });
                self.state = NavState::Transitioning;
                events.push(NavEvent::ZoomOutStarted { index });
                true
            }
            NavState::Transitioning => false,
        }
    }

    /// Advance all running interpolations and write the results to the
    /// render surface. Fires completion events and state changes.
    pub fn update(
        &mut self,
        dt: f32,
        catalog: &EventCatalog,
        scene: &mut dyn SceneSurface,
        events: &mut EventQueue,
    ) {
        if let Some(tween) = &mut self.lingering_distance {
            tween.advance(dt);
            self.distance = tween.value();
            if tween.finished() {
                self.lingering_distance = None;
            }
        }

        let mut completed = None;
        if let Some(tr) = &mut self.transition {
            tr.distance.advance(dt);
            tr.offset_x.advance(dt);
            tr.offset_y.advance(dt);
            self.distance = tr.distance.value();
            self.offset = (tr.offset_x.value(), tr.offset_y.value());
            if let Some((pitch, yaw)) = &mut tr.orientation {
                pitch.advance(dt);
                yaw.advance(dt);
                self.orientation = (pitch.value(), yaw.value());
            }

            tr.settle -= dt;
            if tr.settle <= 0.0 {
                completed = self.transition.take();
            }
        }

        if let Some(tr) = completed {
            self.offset = (tr.offset_x.end_value(), tr.offset_y.end_value());
            match tr.kind {
                TransitionKind::ZoomIn { index } => {
                    self.state = NavState::ZoomedIn;
                    // The focus pull outlives the transition.
                    if !tr.distance.finished() {
                        self.lingering_distance = Some(tr.distance);
                    } else {
                        self.distance = tr.distance.end_value();
                    }
                    events.push(NavEvent::ZoomInCompleted { index });
                }
                TransitionKind::ZoomOut { index } => {
                    self.state = NavState::ZoomedOut;
                    self.distance = tr.distance.end_value();
                    if let Some((pitch, yaw)) = tr.orientation {
                        self.orientation = (pitch.end_value(), yaw.end_value());
                    }
                    events.push(NavEvent::ZoomOutCompleted { index });
                }
            }
            if let Some(metrics) = self.deferred_metrics.take() {
                self.snap_to_metrics(metrics, catalog);
            }
        }

        self.apply_to(scene);
    }

    /// Recompute against a resized viewport. Snaps camera distance and
    /// subject orientation while idle; defers the snap to the next idle
    /// point if a transition is in flight.
    pub fn handle_resize(&mut self, metrics: ViewportMetrics, catalog: &EventCatalog) {
        if self.transition.is_some() {
            self.metrics = metrics;
            self.deferred_metrics = Some(metrics);
        } else {
            self.snap_to_metrics(metrics, catalog);
        }
    }

    fn snap_to_metrics(&mut self, metrics: ViewportMetrics, catalog: &EventCatalog) {
        self.metrics = metrics;
        self.lingering_distance = None;
        self.distance = match self.state {
            NavState::ZoomedIn => metrics.close_distance,
            _ => metrics.default_distance,
        };
        self.orientation = orientation_for(catalog.current());
    }

    /// Directly set the subject orientation, bypassing transitions.
    /// Used only by the debug coordinate editor.
    #[cfg(feature = "calibrate")]
    pub fn set_orientation_direct(&mut self, pitch: f32, yaw: f32) {
        self.orientation = (pitch, yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingScene {
        distance: f32,
        offset: (f32, f32),
        orientation: (f32, f32),
    }

    impl SceneSurface for RecordingScene {
        fn set_camera_distance(&mut self, distance: f32) {
            self.distance = distance;
        }
        fn set_subject_offset(&mut self, x: f32, y: f32) {
            self.offset = (x, y);
        }
        fn set_subject_orientation(&mut self, pitch: f32, yaw: f32) {
            self.orientation = (pitch, yaw);
        }
    }

    struct Fixture {
        choreographer: Choreographer,
        catalog: EventCatalog,
        scene: RecordingScene,
        events: EventQueue,
    }

    fn fixture() -> Fixture {
        // Wide layout: 1280x720
        let metrics = ViewportMetrics::recompute(1280.0, 720.0);
        let catalog = EventCatalog::builtin();
        let choreographer = Choreographer::new(metrics, &catalog);
        Fixture {
            choreographer,
            catalog,
            scene: RecordingScene::default(),
            events: EventQueue::new(),
        }
    }

    fn run(f: &mut Fixture, seconds: f32) {
        let dt = 1.0 / 60.0;
        let steps = (seconds / dt).ceil() as usize;
        for _ in 0..steps {
            f.choreographer
                .update(dt, &f.catalog, &mut f.scene, &mut f.events);
        }
    }

    fn request(f: &mut Fixture, direction: NavDirection) -> bool {
        f.choreographer
            .request_advance(direction, &mut f.catalog, &mut f.events)
    }

    #[test]
    fn test_initial_state() {
        let f = fixture();
        assert_eq!(f.choreographer.state(), NavState::ZoomedOut);
        let m = f.choreographer.metrics();
        assert_eq!(f.choreographer.camera_distance(), m.default_distance);
    }

    #[test]
    fn test_reject_while_in_flight() {
        let mut f = fixture();
        assert!(request(&mut f, NavDirection::Forward));
        assert_eq!(f.choreographer.state(), NavState::Transitioning);
        // Second request mid-transition: no-op, no duplicate cursor advance.
        assert!(!request(&mut f, NavDirection::Forward));
        run(&mut f, 0.5);
        assert!(!request(&mut f, NavDirection::Forward));
        assert_eq!(f.catalog.cursor(), 0);
    }

    #[test]
    fn test_zoom_in_completes_and_notifies() {
        let mut f = fixture();
        request(&mut f, NavDirection::Forward);
        run(&mut f, 1.6);
        assert_eq!(f.choreographer.state(), NavState::ZoomedIn);
        assert_eq!(f.catalog.cursor(), 0);
        let events: Vec<_> = f.events.drain().collect();
        assert!(events.contains(&NavEvent::ZoomInStarted { index: 0 }));
        assert!(events.contains(&NavEvent::ZoomInCompleted { index: 0 }));
        // Wide layout shifts the subject left.
        assert!((f.scene.offset.0 - (-0.25)).abs() < 1e-4);
        assert!(f.scene.offset.1.abs() < 1e-4);
    }

    #[test]
    fn test_focus_pull_outlives_zoom_in() {
        let mut f = fixture();
        let close = f.choreographer.metrics().close_distance;
        request(&mut f, NavDirection::Forward);
        run(&mut f, 1.6);
        assert_eq!(f.choreographer.state(), NavState::ZoomedIn);
        // Offset settled at 1.5s but the 3.3s focus pull is still easing.
        assert!(f.choreographer.camera_distance() > close + 1e-3);
        run(&mut f, 2.0);
        assert!((f.choreographer.camera_distance() - close).abs() < 1e-3);
    }

    #[test]
    fn test_full_cycle_advances_cursor() {
        let mut f = fixture();
        let default = f.choreographer.metrics().default_distance;

        request(&mut f, NavDirection::Forward);
        run(&mut f, 1.6);
        assert!(f.choreographer.is_zoomed_in());

        request(&mut f, NavDirection::Forward);
        // Cursor advances at request time, before the visual settles.
        assert_eq!(f.catalog.cursor(), 1);
        run(&mut f, 1.6);
        assert_eq!(f.choreographer.state(), NavState::ZoomedOut);
        assert!((f.scene.distance - default).abs() < 1e-3);

        let events: Vec<_> = f.events.drain().collect();
        assert!(events.contains(&NavEvent::ZoomOutStarted { index: 1 }));
        assert!(events.contains(&NavEvent::ZoomOutCompleted { index: 1 }));
    }

    #[test]
    fn test_backward_wraps() {
        let mut f = fixture();
        request(&mut f, NavDirection::Forward);
        run(&mut f, 1.6);
        request(&mut f, NavDirection::Backward);
        assert_eq!(f.catalog.cursor(), f.catalog.len() - 1);
    }

    #[test]
    fn test_orientation_targets_new_event() {
        let mut f = fixture();
        request(&mut f, NavDirection::Forward);
        run(&mut f, 1.6);
        request(&mut f, NavDirection::Forward);
        run(&mut f, 1.6);
        let event = f.catalog.current().clone();
        let (pitch, yaw) = f.choreographer.subject_orientation();
        // Out-of-range longitudes are mapped as-is, never wrapped.
        assert!((pitch - event.latitude.to_radians()).abs() < 1e-4);
        assert!((yaw - (-event.longitude.to_radians())).abs() < 1e-4);
    }

    #[test]
    fn test_resize_while_idle_snaps() {
        let mut f = fixture();
        let metrics = ViewportMetrics::recompute(640.0, 900.0);
        f.choreographer.handle_resize(metrics, &f.catalog);
        assert_eq!(f.choreographer.state(), NavState::ZoomedOut);
        assert_eq!(f.catalog.cursor(), 0);
        assert_eq!(f.choreographer.camera_distance(), metrics.default_distance);
    }

    #[test]
    fn test_resize_while_zoomed_in_snaps_close() {
        let mut f = fixture();
        request(&mut f, NavDirection::Forward);
        run(&mut f, 4.0);
        let metrics = ViewportMetrics::recompute(2000.0, 900.0);
        f.choreographer.handle_resize(metrics, &f.catalog);
        assert!(f.choreographer.is_zoomed_in());
        assert_eq!(f.choreographer.camera_distance(), metrics.close_distance);
    }

    #[test]
    fn test_resize_during_transition_is_deferred() {
        let mut f = fixture();
        let old_close = f.choreographer.metrics().close_distance;
        request(&mut f, NavDirection::Forward);
        run(&mut f, 0.5);
        let metrics = ViewportMetrics::recompute(640.0, 900.0);
        f.choreographer.handle_resize(metrics, &f.catalog);
        // Still mid-flight: no snap yet.
        assert!(f.choreographer.is_transition_in_flight());
        assert_ne!(f.choreographer.camera_distance(), metrics.close_distance);
        // Snap lands at the completion boundary.
        run(&mut f, 1.2);
        assert!(f.choreographer.is_zoomed_in());
        assert_eq!(f.choreographer.camera_distance(), metrics.close_distance);
        assert_ne!(metrics.close_distance, old_close);
    }

    #[test]
    fn test_scene_receives_values_every_update() {
        let mut f = fixture();
        run(&mut f, 0.1);
        assert_eq!(f.scene.distance, f.choreographer.camera_distance());
        let (pitch, yaw) = f.choreographer.subject_orientation();
        assert_eq!(f.scene.orientation, (pitch, yaw));
    }
}
