//! Time-based eased interpolation of a single numeric property.

/// Cubic in-out easing.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// A running interpolation from one value to another over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance the tween by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
    }

    /// Current eased value. A non-positive duration yields the end value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.end;
        }
        let t = ease_in_out_cubic(self.elapsed / self.duration);
        self.start + (self.end - self.start) * t
    }

    pub fn finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_tween_runs_to_end() {
        let mut tween = Tween::new(2.0, 1.2, 1.5);
        assert_eq!(tween.value(), 2.0);
        for _ in 0..90 {
            tween.advance(1.0 / 60.0);
        }
        assert!(tween.finished());
        assert!((tween.value() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_tween_clamps_overshoot() {
        let mut tween = Tween::new(0.0, 1.0, 0.5);
        tween.advance(10.0);
        assert!(tween.finished());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let tween = Tween::new(0.0, 3.0, 0.0);
        assert!(tween.finished());
        assert_eq!(tween.value(), 3.0);
    }
}
