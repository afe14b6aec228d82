//! Staged startup asset loading with progress reporting.
//!
//! The shell performs one stage per frame and reports completion or
//! failure here; the loading overlay reads the progress percentage and
//! the input arbiter reads readiness. A failed load is non-fatal but
//! permanent: navigation input stays rejected, since there is nothing
//! to animate.

/// Startup work items, performed in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    /// Life-event catalog (optional `assets/events.json` override)
    Catalog,
    /// Procedural scene geometry (starfield, globe wireframe)
    SceneGeometry,
}

const STAGES: [LoadStage; 2] = [LoadStage::Catalog, LoadStage::SceneGeometry];

/// Terminal-or-progress status reported to the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus {
    Loading { progress: f32 },
    Ready,
    Failed,
}

pub struct AssetLoader {
    completed: usize,
    failed: bool,
}

impl AssetLoader {
    pub fn new() -> Self {
        Self {
            completed: 0,
            failed: false,
        }
    }

    /// The next stage to perform, if any.
    pub fn next_stage(&self) -> Option<LoadStage> {
        if self.failed {
            return None;
        }
        STAGES.get(self.completed).copied()
    }

    pub fn complete_stage(&mut self) {
        if !self.failed && self.completed < STAGES.len() {
            self.completed += 1;
            log::debug!("asset loading {:.0}% complete", self.progress());
        }
    }

    /// Record a terminal failure. Navigation stays disabled from here on.
    pub fn fail(&mut self, message: &str) {
        log::error!("asset loading failed: {}", message);
        self.failed = true;
    }

    /// Load progress in percent.
    pub fn progress(&self) -> f32 {
        self.completed as f32 / STAGES.len() as f32 * 100.0
    }

    pub fn status(&self) -> LoadStatus {
        if self.failed {
            LoadStatus::Failed
        } else if self.completed >= STAGES.len() {
            LoadStatus::Ready
        } else {
            LoadStatus::Loading {
                progress: self.progress(),
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status() == LoadStatus::Ready
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_complete_in_order() {
        let mut loader = AssetLoader::new();
        assert_eq!(loader.next_stage(), Some(LoadStage::Catalog));
        assert!(!loader.is_ready());
        loader.complete_stage();
        assert_eq!(loader.next_stage(), Some(LoadStage::SceneGeometry));
        assert_eq!(loader.status(), LoadStatus::Loading { progress: 50.0 });
        loader.complete_stage();
        assert!(loader.is_ready());
        assert_eq!(loader.next_stage(), None);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut loader = AssetLoader::new();
        loader.complete_stage();
        loader.fail("missing model");
        assert_eq!(loader.status(), LoadStatus::Failed);
        assert_eq!(loader.next_stage(), None);
        // Completing more stages after failure never yields readiness.
        loader.complete_stage();
        assert_eq!(loader.status(), LoadStatus::Failed);
    }
}
