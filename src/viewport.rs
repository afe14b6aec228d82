//! Viewport-derived camera framing parameters.
//!
//! Recomputed on every resize; never stored longer than the next resize.

use crate::constants::*;

/// Camera distances and layout mode derived from the window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    pub height: f32,
    /// Camera distance when zoomed out
    pub default_distance: f32,
    /// Camera distance when zoomed in; always `default_distance * 0.6`
    pub close_distance: f32,
    /// Narrow-viewport (mobile-like) presentation mode
    pub is_compact: bool,
}

impl ViewportMetrics {
    /// Derive framing parameters from the window dimensions.
    ///
    /// The floor of 2 and the 3-minus-aspect base keep the subject framed
    /// consistently across aspect ratios; both constants are empirical.
    pub fn recompute(width: f32, height: f32) -> Self {
        let aspect = if height <= 0.0 {
            FALLBACK_ASPECT
        } else {
            width / height
        };
        let base = (DISTANCE_ASPECT_BASE - aspect).max(DISTANCE_FLOOR);
        let is_compact = width <= COMPACT_WIDTH_THRESHOLD;
        let scale = if is_compact { COMPACT_DISTANCE_SCALE } else { 1.0 };

        Self {
            width,
            height,
            default_distance: base * scale,
            close_distance: base * CLOSE_DISTANCE_RATIO * scale,
            is_compact,
        }
    }

    /// Subject screen-space offset target when zoomed in.
    /// Wide layouts shift the globe left to make room for the side panel;
    /// compact layouts shift it up for the bottom panel.
    pub fn focus_offset(&self) -> (f32, f32) {
        if self.is_compact {
            (0.0, FOCUS_OFFSET_Y_COMPACT)
        } else {
            (FOCUS_OFFSET_X_WIDE, 0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_distance_ratio_holds() {
        for (w, h) in [(1280.0, 720.0), (768.0, 1024.0), (2560.0, 1080.0), (400.0, 900.0)] {
            let m = ViewportMetrics::recompute(w, h);
            assert!((m.close_distance - m.default_distance * 0.6).abs() < 1e-5);
            assert!(m.close_distance < m.default_distance);
        }
    }

    #[test]
    fn test_wide_aspect_hits_floor() {
        // aspect > 1 pushes 3 - aspect below the floor of 2
        let m = ViewportMetrics::recompute(2560.0, 1080.0);
        assert!((m.default_distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_narrow_aspect_uses_formula() {
        // 768x1024: aspect 0.75, base 2.25, compact scale 1.2
        let m = ViewportMetrics::recompute(768.0, 1024.0);
        assert!(m.is_compact);
        assert!((m.default_distance - 2.25 * 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_compact_threshold() {
        assert!(ViewportMetrics::recompute(768.0, 1024.0).is_compact);
        assert!(!ViewportMetrics::recompute(769.0, 1024.0).is_compact);
    }

    #[test]
    fn test_zero_height_falls_back() {
        let m = ViewportMetrics::recompute(1280.0, 0.0);
        // Fallback aspect of 1: base = max(2, 3 - 1) = 2
        assert!((m.default_distance - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_focus_offset_by_layout() {
        let wide = ViewportMetrics::recompute(1280.0, 720.0);
        assert_eq!(wide.focus_offset(), (-0.25, 0.0));
        let compact = ViewportMetrics::recompute(400.0, 800.0);
        assert_eq!(compact.focus_offset(), (0.0, -0.5));
    }
}
