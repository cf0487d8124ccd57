use super::bands::BandLevels;
use super::constants::*;

/// How ring opacity evolves between rebirths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityPolicy {
    /// Fade by a fixed step each frame, floored at zero.
    Decay { step: f32 },
    /// Opacity follows the phase accumulator and the same value speeds up growth.
    PhaseDriven,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpikeSource {
    Amplitude,
    SubBand,
}

/// Extra growth and an opacity flash when a level crosses a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpikeRule {
    pub source: SpikeSource,
    pub threshold: f32,
}

impl SpikeRule {
    pub fn fires(&self, levels: &BandLevels) -> bool {
        let value = match self.source {
            SpikeSource::Amplitude => levels.amplitude,
            SpikeSource::SubBand => levels.sub,
        };
        value > self.threshold
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub ring_count: usize,
    pub expiry_margin: f32,
    pub rebirth_opacity: f32,
    pub growth_base: f32,
    pub opacity_policy: OpacityPolicy,
    pub spike: Option<SpikeRule>,
    pub jitter_max_offset: f32,
    pub auto_recenter_frames: Option<u32>,
}

impl FieldConfig {
    /// Scale above which a ring is reborn.
    #[inline]
    pub fn expiry_scale(&self) -> f32 {
        self.ring_count as f32 + self.expiry_margin
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}

/// Named parameter sets for the ring field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    Classic,
    #[default]
    Pulse,
    SubPulse,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Pulse, Preset::SubPulse];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Pulse => "pulse",
            Preset::SubPulse => "sub-pulse",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn config(self) -> FieldConfig {
        let base = FieldConfig {
            ring_count: DEFAULT_RING_COUNT,
            expiry_margin: EXPIRY_MARGIN,
            rebirth_opacity: 0.0,
            growth_base: GROWTH_BASE,
            opacity_policy: OpacityPolicy::PhaseDriven,
            spike: None,
            jitter_max_offset: JITTER_MAX_OFFSET,
            auto_recenter_frames: None,
        };
        match self {
            Preset::Classic => base,
            Preset::Pulse => FieldConfig {
                rebirth_opacity: PULSE_REBIRTH_OPACITY,
                opacity_policy: OpacityPolicy::Decay {
                    step: OPACITY_DECAY_STEP,
                },
                spike: Some(SpikeRule {
                    source: SpikeSource::Amplitude,
                    threshold: SPIKE_THRESHOLD_AMPLITUDE,
                }),
                auto_recenter_frames: Some(AUTO_RECENTER_FRAMES),
                ..base
            },
            Preset::SubPulse => FieldConfig {
                rebirth_opacity: PULSE_REBIRTH_OPACITY,
                opacity_policy: OpacityPolicy::Decay {
                    step: OPACITY_DECAY_STEP,
                },
                spike: Some(SpikeRule {
                    source: SpikeSource::SubBand,
                    threshold: SPIKE_THRESHOLD_SUB,
                }),
                auto_recenter_frames: Some(AUTO_RECENTER_FRAMES),
                ..base
            },
        }
    }
}
