//! The rendered scene: starfield point cloud plus a wireframe globe.
//!
//! Implements `SceneSurface` so the choreographer can drive camera
//! distance, subject offset, and subject orientation as plain numeric
//! properties. Drawing goes through the egui painter; there is no
//! separate render pipeline to manage.

use crate::constants::*;
use crate::surface::SceneSurface;
use glam::{Mat3, Vec3};
use rand::Rng;

const STAR_COLOR: egui::Color32 = egui::Color32::from_rgb(235, 235, 245);
const WIRE_FRONT: egui::Color32 = egui::Color32::from_rgba_premultiplied(110, 160, 210, 200);
const WIRE_BACK: egui::Color32 = egui::Color32::from_rgba_premultiplied(30, 45, 60, 60);
const CLOUD_BAND: egui::Color32 = egui::Color32::from_rgba_premultiplied(150, 150, 160, 70);
const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(235, 120, 90);

/// Minimum projection depth; points closer than this are culled.
const NEAR_PLANE: f32 = 0.05;

pub struct GlobeScene {
    camera_distance: f32,
    subject_offset: (f32, f32),
    /// (pitch, yaw) in radians
    orientation: (f32, f32),
    stars: Vec<Vec3>,
    star_spin: f32,
    cloud_phase: f32,
    /// Wireframe polylines on the subject sphere
    rings: Vec<Vec<Vec3>>,
}

impl GlobeScene {
    pub fn new() -> Self {
        Self {
            camera_distance: DISTANCE_FLOOR,
            subject_offset: (0.0, 0.0),
            orientation: (0.0, 0.0),
            stars: Vec::new(),
            star_spin: 0.0,
            cloud_phase: 0.0,
            rings: Vec::new(),
        }
    }

    /// Generate the starfield and globe wireframe. Performed once as a
    /// loading stage.
    pub fn generate(&mut self) {
        let mut rng = rand::thread_rng();
        self.stars = (0..STAR_COUNT)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-STARFIELD_SPREAD..STARFIELD_SPREAD),
                    rng.gen_range(-STARFIELD_SPREAD..STARFIELD_SPREAD),
                    rng.gen_range(-STARFIELD_SPREAD..STARFIELD_SPREAD),
                )
            })
            .collect();
        self.rings = build_rings();
    }

    pub fn is_generated(&self) -> bool {
        !self.stars.is_empty() && !self.rings.is_empty()
    }

    /// Advance ambient animation (starfield spin, cloud band drift).
    pub fn update(&mut self, dt: f32) {
        self.star_spin += STARFIELD_SPIN_RATE * dt;
        self.cloud_phase += ANIMATION_SPEED * dt;
    }

    pub fn draw(&self, painter: &egui::Painter, rect: egui::Rect) {
        let center = rect.center();
        let focal = 0.5 * rect.height() / (CAMERA_FOV_DEG.to_radians() * 0.5).tan();

        let project = |p: Vec3| -> Option<(egui::Pos2, f32)> {
            let depth = self.camera_distance - p.z;
            if depth <= NEAR_PLANE {
                return None;
            }
            let x = center.x + p.x * focal / depth;
            let y = center.y - p.y * focal / depth;
            Some((egui::pos2(x, y), depth))
        };

        // Starfield, spinning slowly about the vertical axis.
        let star_rot = Mat3::from_rotation_y(self.star_spin);
        for star in &self.stars {
            let p = star_rot * *star;
            if let Some((pos, depth)) = project(p) {
                if rect.contains(pos) {
                    let size = (160.0 / depth).clamp(0.4, 1.6);
                    painter.circle_filled(pos, size, STAR_COLOR);
                }
            }
        }

        // Globe wireframe, oriented to the current event and shifted by
        // the subject offset.
        let (pitch, yaw) = self.orientation;
        let rot = Mat3::from_rotation_x(pitch) * Mat3::from_rotation_y(yaw);
        let offset = Vec3::new(self.subject_offset.0, self.subject_offset.1, 0.0);
        for ring in &self.rings {
            for pair in ring.windows(2) {
                let a = rot * pair[0] + offset;
                let b = rot * pair[1] + offset;
                let color = if (a.z + b.z) * 0.5 > 0.0 {
                    WIRE_FRONT
                } else {
                    WIRE_BACK
                };
                if let (Some((pa, _)), Some((pb, _))) = (project(a), project(b)) {
                    painter.line_segment([pa, pb], egui::Stroke::new(1.0, color));
                }
            }
        }

        // Drifting cloud band above the equator, independent of the
        // subject orientation.
        let cloud_rot = Mat3::from_rotation_y(self.cloud_phase);
        let cloud = circle_points(SUBJECT_SCALE * 1.06, 0.12, GLOBE_RING_SEGMENTS);
        for pair in cloud.windows(2) {
            let a = cloud_rot * pair[0] + offset;
            let b = cloud_rot * pair[1] + offset;
            if (a.z + b.z) * 0.5 > 0.0 {
                if let (Some((pa, _)), Some((pb, _))) = (project(a), project(b)) {
                    painter.line_segment([pa, pb], egui::Stroke::new(2.0, CLOUD_BAND));
                }
            }
        }

        // The focused location always faces the camera.
        if let Some((pos, _)) = project(Vec3::new(0.0, 0.0, SUBJECT_SCALE) + offset) {
            painter.circle_filled(pos, 4.0, MARKER_COLOR);
        }
    }
}

impl Default for GlobeScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSurface for GlobeScene {
    fn set_camera_distance(&mut self, distance: f32) {
        self.camera_distance = distance;
    }

    fn set_subject_offset(&mut self, x: f32, y: f32) {
        self.subject_offset = (x, y);
    }

    fn set_subject_orientation(&mut self, pitch: f32, yaw: f32) {
        self.orientation = (pitch, yaw);
    }
}

/// Latitude rings and meridians of the subject sphere.
fn build_rings() -> Vec<Vec<Vec3>> {
    let mut rings = Vec::new();
    let radius = SUBJECT_SCALE;
    let step = GLOBE_RING_STEP_DEG;

    // Latitude rings (excluding the degenerate poles)
    let mut lat = -90.0 + step;
    while lat < 90.0 - 1e-3 {
        let phi = lat.to_radians();
        rings.push(circle_points(radius * phi.cos(), radius * phi.sin(), GLOBE_RING_SEGMENTS));
        lat += step;
    }

    // Meridians (full circles through both poles)
    let mut lon: f32 = 0.0;
    while lon < 180.0 - 1e-3 {
        let theta = lon.to_radians();
        let points = (0..=GLOBE_RING_SEGMENTS)
            .map(|i| {
                let t = i as f32 / GLOBE_RING_SEGMENTS as f32 * std::f32::consts::TAU;
                Vec3::new(
                    radius * t.cos() * theta.sin(),
                    radius * t.sin(),
                    radius * t.cos() * theta.cos(),
                )
            })
            .collect();
        rings.push(points);
        lon += step;
    }

    rings
}

/// A horizontal circle of the given radius at the given height.
fn circle_points(radius: f32, y: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * std::f32::consts::TAU;
            Vec3::new(radius * t.cos(), y, radius * t.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_populates_geometry() {
        let mut scene = GlobeScene::new();
        assert!(!scene.is_generated());
        scene.generate();
        assert!(scene.is_generated());
        assert_eq!(scene.stars.len(), STAR_COUNT);
        assert!(scene
            .stars
            .iter()
            .all(|s| s.abs().max_element() <= STARFIELD_SPREAD));
    }

    #[test]
    fn test_rings_lie_on_sphere() {
        for ring in build_rings() {
            for p in ring {
                assert!((p.length() - SUBJECT_SCALE).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_surface_setters() {
        let mut scene = GlobeScene::new();
        scene.set_camera_distance(2.4);
        scene.set_subject_offset(-0.25, 0.0);
        scene.set_subject_orientation(0.3, -1.2);
        assert_eq!(scene.camera_distance, 2.4);
        assert_eq!(scene.subject_offset, (-0.25, 0.0));
        assert_eq!(scene.orientation, (0.3, -1.2));
    }
}
