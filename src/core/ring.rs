use super::constants::{RING_RADIUS, RING_SEGMENTS};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

/// Closed polyline around the origin in the XY plane. The last vertex repeats
/// the first so consecutive pairs cover the whole circle.
pub fn circle_vertices(segments: usize, radius: f32) -> Vec<Vec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Vec3::new(theta.cos() * radius, theta.sin() * radius, 0.0)
        })
        .collect()
}

/// Animation state of one ring in the field.
///
/// The base layout is captured at creation and never changes; `vertices` is
/// restored from it whenever the ring is reborn. Scale is a single scalar so
/// the x/y/z axes can never drift apart.
#[derive(Clone, Debug)]
pub struct Ring {
    base: Vec<Vec3>,
    pub vertices: Vec<Vec3>,
    pub scale: f32,
    pub opacity: f32,
    pub rotation: Vec2,
    pub depth: f32,
}

impl Ring {
    /// Ring `index` starts at its staggered base scale so the field looks
    /// populated from the first frame.
    pub fn new(index: usize) -> Self {
        let base = circle_vertices(RING_SEGMENTS, RING_RADIUS);
        Self {
            vertices: base.clone(),
            base,
            scale: Self::base_scale(index),
            opacity: 1.0,
            rotation: Vec2::ZERO,
            depth: 0.0,
        }
    }

    #[inline]
    pub fn base_scale(index: usize) -> f32 {
        1.0 + index as f32
    }

    pub fn base_vertices(&self) -> &[Vec3] {
        &self.base
    }

    pub fn reset_vertices(&mut self) {
        self.vertices.clone_from(&self.base);
    }

    /// Push every vertex component by `+offset` or `-offset`, one coin flip
    /// per vertex per axis.
    pub fn jitter_vertices<R: Rng + ?Sized>(&mut self, offset: f32, rng: &mut R) {
        let mut flip = |v: &mut f32| {
            if rng.gen_bool(0.5) {
                *v += offset;
            } else {
                *v -= offset;
            }
        };
        for v in &mut self.vertices {
            flip(&mut v.x);
            flip(&mut v.y);
            flip(&mut v.z);
        }
    }

    #[inline]
    pub fn grow(&mut self, amount: f32) {
        self.scale += amount;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0),
            Vec3::new(0.0, 0.0, self.depth),
        )
    }

    /// Current vertices transformed into world space.
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        let model = self.model_matrix();
        self.vertices.iter().map(move |v| model.transform_point3(*v))
    }

    /// Consecutive world-space vertex pairs, one per polyline segment.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.world_vertices().zip(self.world_vertices().skip(1))
    }
}
