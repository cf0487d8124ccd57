use super::bands::BandLevels;
use super::config::{FieldConfig, OpacityPolicy};
use super::constants::{
    FRAME_PHASE_PERIOD, FREQ_OPACITY_MAX, FREQ_OPACITY_PHASE_HI, FREQ_OPACITY_PHASE_LO,
    GROWTH_AMPLITUDE_DIVISOR, MIN_TINT, PHASE_BIAS, PHASE_MAX, PHASE_RETAIN,
    ROTATION_PHASE_DIVISOR,
};
use super::math::remap;
use super::ring::Ring;
use super::settings::Settings;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smoothed low-band energy feeding ring rotation and phase-driven opacity.
///
/// `t' = 0.0025 + low + 0.75 * t` with `low` clamped to [0, 1]. The value is
/// clamped to its fixed point so long sessions stay numerically meaningful.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseAccumulator {
    value: f32,
}

impl PhaseAccumulator {
    pub fn advance(&mut self, low: f32) -> f32 {
        let low = if low.is_nan() { 0.0 } else { low.clamp(0.0, 1.0) };
        self.value = (PHASE_BIAS + low + PHASE_RETAIN * self.value).clamp(0.0, PHASE_MAX);
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// What happened during one animation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub reborn: usize,
    pub spikes: usize,
}

/// Owns the per-ring animation state and advances it once per frame.
pub struct RingField<R = StdRng> {
    config: FieldConfig,
    rings: Vec<Ring>,
    phase: PhaseAccumulator,
    frame: u32,
    rng: R,
}

impl RingField<StdRng> {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> RingField<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        let rings = (0..config.ring_count).map(Ring::new).collect();
        Self {
            config,
            rings,
            phase: PhaseAccumulator::default(),
            frame: 0,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn ring_mut(&mut self, index: usize) -> Option<&mut Ring> {
        self.rings.get_mut(index)
    }

    pub fn phase(&self) -> f32 {
        self.phase.value()
    }

    /// Frame counter used by the rotation drift, already wrapped.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn step(&mut self, levels: BandLevels, settings: &Settings) -> FrameReport {
        let levels = levels.clamped();
        let t = self.phase.advance(levels.low);
        let offset = remap(levels.low, 0.0, 1.0, 0.0, self.config.jitter_max_offset);
        let expiry = self.config.expiry_scale();
        let growth = self.config.growth_base + levels.amplitude / GROWTH_AMPLITUDE_DIVISOR;
        let spike = self.config.spike.is_some_and(|rule| rule.fires(&levels));
        let frame = self.frame as f32;
        let mut report = FrameReport::default();

        for (i, ring) in self.rings.iter_mut().enumerate() {
            if ring.scale > expiry {
                ring.reset_vertices();
                if settings.freq_vertices {
                    ring.jitter_vertices(offset, &mut self.rng);
                }
                ring.scale = Ring::base_scale(i);
                ring.depth = if settings.create_cone { i as f32 } else { 0.0 };
                ring.opacity = self.config.rebirth_opacity;
                report.reborn += 1;
            }

            ring.grow(growth);

            match self.config.opacity_policy {
                OpacityPolicy::Decay { step } => {
                    ring.opacity = (ring.opacity - step).max(0.0);
                }
                OpacityPolicy::PhaseDriven => {
                    let freq_op = remap(
                        t,
                        FREQ_OPACITY_PHASE_LO,
                        FREQ_OPACITY_PHASE_HI,
                        0.0,
                        FREQ_OPACITY_MAX,
                    )
                    .clamp(0.0, FREQ_OPACITY_MAX);
                    ring.opacity = freq_op;
                    ring.grow(freq_op);
                }
            }

            if spike {
                ring.opacity = levels.amplitude;
                ring.grow(levels.amplitude);
                report.spikes += 1;
            }

            let drift = std::f32::consts::FRAC_PI_2 * (frame * i as f32 / ROTATION_PHASE_DIVISOR);
            ring.rotation.x = if settings.freq_rotate_x {
                drift.sin() + t
            } else {
                0.0
            };
            ring.rotation.y = if settings.freq_rotate_y {
                drift.cos() + t
            } else {
                0.0
            };
        }

        self.frame = (self.frame + 1) % FRAME_PHASE_PERIOD;
        report
    }
}

/// Line colour for the whole field: white, or band energies as RGB when
/// `colour_frequencies` is on.
pub fn ring_tint(levels: &BandLevels, settings: &Settings) -> Vec3 {
    if !settings.colour_frequencies {
        return Vec3::ONE;
    }
    let l = levels.clamped();
    Vec3::new(l.low, l.mid, l.high).max(Vec3::splat(MIN_TINT))
}
