//! Tuning constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! The camera-framing constants are tuned empirically for visual parity
//! and must not be changed casually.

// =============================================================================
// CAMERA FRAMING
// =============================================================================

/// Base camera distance is `max(DISTANCE_FLOOR, DISTANCE_ASPECT_BASE - aspect)`
pub const DISTANCE_ASPECT_BASE: f32 = 3.0;
/// Lower bound on the base camera distance
pub const DISTANCE_FLOOR: f32 = 2.0;
/// Zoomed-in distance as a fraction of the default distance
pub const CLOSE_DISTANCE_RATIO: f32 = 0.6;
/// Distance multiplier applied in compact layout to compensate for narrow framing
pub const COMPACT_DISTANCE_SCALE: f32 = 1.2;
/// Width at or below which the compact (mobile-like) layout is used, logical px
pub const COMPACT_WIDTH_THRESHOLD: f32 = 768.0;
/// Fallback aspect ratio when the viewport height is degenerate
pub const FALLBACK_ASPECT: f32 = 1.0;
/// Vertical camera field of view in degrees
pub const CAMERA_FOV_DEG: f32 = 45.0;

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Duration of the zoom-in focus pull (camera distance), seconds
pub const FOCUS_PULL_DURATION: f32 = 3.3;
/// Duration of the subject offset shift during zoom-in, seconds.
/// This is the controlling tween: the transition completes when it does.
pub const OFFSET_SHIFT_DURATION: f32 = 1.5;
/// Duration of the zoom-out-and-rotate transition, seconds
pub const ZOOM_OUT_DURATION: f32 = 1.5;
/// Horizontal subject offset when zoomed in on a wide layout
pub const FOCUS_OFFSET_X_WIDE: f32 = -0.25;
/// Vertical subject offset when zoomed in on a compact layout
pub const FOCUS_OFFSET_Y_COMPACT: f32 = -0.5;

// =============================================================================
// INPUT
// =============================================================================

/// Minimum horizontal drag/swipe distance for a gesture to count, logical px
pub const SWIPE_THRESHOLD: f32 = 50.0;
/// Dead time after an accepted gesture during which further gestures are
/// dropped, seconds. Matches the longest controlling transition duration.
pub const GESTURE_COOLDOWN: f32 = 1.5;

// =============================================================================
// INFO PANEL
// =============================================================================

/// Duration of the panel slide animation, seconds
pub const PANEL_SLIDE_DURATION: f32 = 0.5;
/// Fraction of the slide after which content changes are no longer visible
pub const PANEL_SLIDE_MIDPOINT: f32 = 0.5;
/// Panel width on wide layouts, logical px
pub const PANEL_WIDTH: f32 = 380.0;
/// Panel height on compact layouts, logical px
pub const PANEL_HEIGHT_COMPACT: f32 = 260.0;
/// How far the nav arrows sit above the bottom edge, logical px
pub const CONTROLS_BOTTOM_MARGIN: f32 = 24.0;
/// Extra raise applied to the nav arrows in compact layout so the
/// bottom-sliding panel does not cover them
pub const CONTROLS_COMPACT_RAISE: f32 = 48.0;

// =============================================================================
// SCENE
// =============================================================================

/// Number of points in the starfield
pub const STAR_COUNT: usize = 12000;
/// Half-extent of the cube the starfield is scattered in, world units
pub const STARFIELD_SPREAD: f32 = 1000.0;
/// Starfield spin rate, radians per second (-0.00008 rad per frame at 60 fps)
pub const STARFIELD_SPIN_RATE: f32 = -0.0048;
/// Uniform scale applied to the globe subject
pub const SUBJECT_SCALE: f32 = 0.4;
/// Angular spacing of wireframe rings, degrees
pub const GLOBE_RING_STEP_DEG: f32 = 20.0;
/// Line segments per wireframe ring
pub const GLOBE_RING_SEGMENTS: usize = 48;
/// Ambient scene animation speed multiplier
pub const ANIMATION_SPEED: f32 = 0.25;

// =============================================================================
// WINDOW / TIMING
// =============================================================================

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
/// Cap on per-frame dt to prevent animation snapping after long frames
pub const MAX_ANIMATION_DT: f32 = 0.1;

// =============================================================================
// CALIBRATION (debug coordinate editor)
// =============================================================================

/// Manual rotation step per arrow-key press, degrees
#[cfg(feature = "calibrate")]
pub const CALIBRATE_STEP_DEG: f32 = 1.0;
