// Host-side tests for the ring field animator, band reduction and presets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod math {
    include!("../src/core/math.rs");
}
mod bands {
    include!("../src/core/bands.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod ring {
    include!("../src/core/ring.rs");
}
mod settings {
    include!("../src/core/settings.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use bands::*;
use config::*;
use constants::*;
use field::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ring::*;
use settings::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn seeded(config: FieldConfig) -> RingField<StdRng> {
    RingField::with_rng(config, StdRng::seed_from_u64(7))
}

fn silence() -> BandLevels {
    BandLevels::default()
}

fn amplitude(a: f32) -> BandLevels {
    BandLevels {
        amplitude: a,
        ..BandLevels::default()
    }
}

#[test]
fn rings_start_staggered_and_opaque() {
    let field = seeded(Preset::Pulse.config());
    assert_eq!(field.rings().len(), DEFAULT_RING_COUNT);
    for (i, r) in field.rings().iter().enumerate() {
        assert_eq!(r.scale, 1.0 + i as f32);
        assert_eq!(r.opacity, 1.0);
        assert_eq!(r.depth, 0.0);
    }
    assert_eq!(field.frame(), 0);
}

#[test]
fn expired_ring_is_reborn_at_its_base_scale() {
    let mut field = seeded(Preset::Pulse.config());
    let expiry = field.config().expiry_scale();
    if let Some(r) = field.ring_mut(5) {
        r.scale = expiry + 0.5;
        r.opacity = 0.0;
    }
    let report = field.step(silence(), &Settings::default());
    assert_eq!(report.reborn, 1);
    let r = &field.rings()[5];
    // Rebirth resets to 1 + index, then this frame's growth is applied
    assert!(approx(r.scale, Ring::base_scale(5) + GROWTH_BASE));
    // Rebirth opacity 0.3, then one decay step
    assert!(approx(r.opacity, PULSE_REBIRTH_OPACITY - OPACITY_DECAY_STEP));
}

#[test]
fn ring_at_expiry_boundary_is_not_reborn() {
    let mut field = seeded(Preset::Pulse.config());
    let expiry = field.config().expiry_scale();
    if let Some(r) = field.ring_mut(0) {
        r.scale = expiry;
    }
    let report = field.step(silence(), &Settings::default());
    assert_eq!(report.reborn, 0);
    assert!(field.rings()[0].scale > expiry);
}

#[test]
fn growth_per_frame_stays_within_bounds_below_spike() {
    for a in [0.0, 0.1, 0.25, 0.5, SPIKE_THRESHOLD_AMPLITUDE] {
        let mut field = seeded(Preset::Pulse.config());
        let before = field.rings()[0].scale;
        let report = field.step(amplitude(a), &Settings::default());
        let delta = field.rings()[0].scale - before;
        assert_eq!(report.spikes, 0, "amplitude {} must not spike", a);
        assert!((0.1 - 1e-5..=0.2 + 1e-5).contains(&delta), "delta {}", delta);
        assert!(approx(delta, GROWTH_BASE + a / GROWTH_AMPLITUDE_DIVISOR));
    }
}

#[test]
fn silence_fades_rings_without_spikes_or_rotation() {
    let mut field = seeded(Preset::Pulse.config());
    let settings = Settings::default();
    let mut prev: Vec<f32> = field.rings().iter().map(|r| r.opacity).collect();
    for _ in 0..50 {
        let report = field.step(silence(), &settings);
        assert_eq!(report.spikes, 0);
        // Rings near the end of the field may be reborn within 50 frames
        for (i, r) in field.rings().iter().enumerate().take(90) {
            assert!(r.opacity <= prev[i] + 1e-6);
            assert!(r.opacity >= 0.0);
            assert_eq!(r.rotation.x, 0.0);
            assert_eq!(r.rotation.y, 0.0);
            prev[i] = r.opacity;
        }
    }
    assert!(field.rings()[..90].iter().all(|r| r.opacity == 0.0));
}

#[test]
fn loud_frame_spikes_without_rebirth() {
    let mut field = seeded(Preset::Pulse.config());
    let n = field.config().ring_count as f32;
    if let Some(r) = field.ring_mut(0) {
        r.scale = n + 2.0;
    }
    let report = field.step(amplitude(0.8), &Settings::default());
    assert_eq!(report.reborn, 0);
    assert_eq!(report.spikes, DEFAULT_RING_COUNT);
    let r = &field.rings()[0];
    assert!(approx(r.scale, n + 2.0 + GROWTH_BASE + 0.08 + 0.8));
    assert!(approx(r.opacity, 0.8));
}

#[test]
fn sub_pulse_spikes_on_sub_band_only() {
    let mut field = seeded(Preset::SubPulse.config());
    let report = field.step(amplitude(0.9), &Settings::default());
    assert_eq!(report.spikes, 0);
    let sub = BandLevels {
        sub: 0.8,
        ..BandLevels::default()
    };
    let report = field.step(sub, &Settings::default());
    assert_eq!(report.spikes, DEFAULT_RING_COUNT);
}

#[test]
fn classic_opacity_follows_phase() {
    let mut field = seeded(Preset::Classic.config());
    field.step(silence(), &Settings::default());
    assert!(field.rings().iter().all(|r| r.opacity == 0.0));

    let loud_low = BandLevels {
        low: 1.0,
        ..BandLevels::default()
    };
    for _ in 0..40 {
        field.step(loud_low, &Settings::default());
    }
    assert!(approx(field.rings()[0].opacity, FREQ_OPACITY_MAX));
}

#[test]
fn phase_follows_recurrence() {
    let lows = [0.0, 0.3, 1.0, 0.5, 0.2, 0.9];
    let mut field = seeded(Preset::Pulse.config());
    let mut expected = 0.0f32;
    for &low in &lows {
        expected = PHASE_BIAS + low + PHASE_RETAIN * expected;
        let levels = BandLevels {
            low,
            ..BandLevels::default()
        };
        field.step(levels, &Settings::default());
        assert!(approx(field.phase(), expected));
    }
}

#[test]
fn phase_accumulator_clamps_input_and_value() {
    let mut p = PhaseAccumulator::default();
    for _ in 0..200 {
        p.advance(5.0);
    }
    assert!(p.value() <= PHASE_MAX + 1e-5);
    assert!(approx(p.value(), PHASE_MAX));

    let mut q = PhaseAccumulator::default();
    assert!(approx(q.advance(f32::NAN), PHASE_BIAS));
    assert!(approx(q.advance(-3.0), PHASE_BIAS + PHASE_RETAIN * PHASE_BIAS));
}

#[test]
fn rotation_follows_phase_when_enabled() {
    let mut field = seeded(Preset::Pulse.config());
    let settings = Settings {
        freq_rotate_x: true,
        freq_rotate_y: true,
        ..Settings::default()
    };
    field.step(silence(), &settings);
    // Frame 0: drift is zero for every ring
    for r in field.rings() {
        assert!(approx(r.rotation.x, PHASE_BIAS));
        assert!(approx(r.rotation.y, 1.0 + PHASE_BIAS));
    }
}

#[test]
fn cone_places_reborn_rings_at_their_index() {
    let settings = Settings {
        create_cone: true,
        ..Settings::default()
    };
    let mut field = seeded(Preset::Pulse.config());
    if let Some(r) = field.ring_mut(7) {
        r.scale = 1_000.0;
    }
    field.step(silence(), &settings);
    assert_eq!(field.rings()[7].depth, 7.0);
    assert_eq!(field.rings()[6].depth, 0.0);

    // Turning the cone off flattens rings as they are reborn
    if let Some(r) = field.ring_mut(7) {
        r.scale = 1_000.0;
    }
    field.step(silence(), &Settings::default());
    assert_eq!(field.rings()[7].depth, 0.0);
}

#[test]
fn jitter_moves_every_component_by_the_offset() {
    let settings = Settings {
        freq_vertices: true,
        ..Settings::default()
    };
    let loud_low = BandLevels {
        low: 1.0,
        ..BandLevels::default()
    };
    let mut field = seeded(Preset::Pulse.config());
    if let Some(r) = field.ring_mut(3) {
        r.scale = 1_000.0;
    }
    field.step(loud_low, &settings);
    let r = &field.rings()[3];
    for (v, b) in r.vertices.iter().zip(r.base_vertices()) {
        let d = *v - *b;
        for c in [d.x, d.y, d.z] {
            assert!(approx(c.abs(), JITTER_MAX_OFFSET), "component offset {}", c);
        }
    }
}

#[test]
fn jitter_signs_vary_per_vertex_and_per_axis() {
    let settings = Settings {
        freq_vertices: true,
        ..Settings::default()
    };
    let loud_low = BandLevels {
        low: 1.0,
        ..BandLevels::default()
    };
    let mut field = RingField::with_rng(Preset::Pulse.config(), StdRng::seed_from_u64(1));
    if let Some(r) = field.ring_mut(4) {
        r.scale = 1_000.0;
    }
    field.step(loud_low, &settings);
    let r = &field.rings()[4];
    let patterns: Vec<[bool; 3]> = r
        .vertices
        .iter()
        .zip(r.base_vertices())
        .map(|(v, b)| {
            let d = *v - *b;
            [d.x > 0.0, d.y > 0.0, d.z > 0.0]
        })
        .collect();
    let mixed = patterns
        .iter()
        .filter(|p| !(p[0] == p[1] && p[1] == p[2]))
        .count();
    assert!(mixed > 0, "every vertex shared one sign across its axes");
    assert!(
        patterns.iter().any(|p| *p != patterns[0]),
        "every vertex got the same sign pattern"
    );
}

#[test]
fn rebirth_without_jitter_restores_base_vertices() {
    let mut field = seeded(Preset::Pulse.config());
    if let Some(r) = field.ring_mut(2) {
        r.vertices.iter_mut().for_each(|v| v.x += 1.0);
        r.scale = 1_000.0;
    }
    field.step(silence(), &Settings::default());
    let r = &field.rings()[2];
    assert_eq!(r.vertices.as_slice(), r.base_vertices());
}

#[test]
fn frame_counter_wraps() {
    let config = FieldConfig {
        ring_count: 1,
        ..Preset::Pulse.config()
    };
    let mut field = seeded(config);
    for _ in 0..FRAME_PHASE_PERIOD {
        field.step(silence(), &Settings::default());
    }
    assert_eq!(field.frame(), 0);
}

#[test]
fn out_of_range_levels_are_clamped() {
    let mut field = seeded(Preset::Pulse.config());
    let before = field.rings()[0].scale;
    let wild = BandLevels {
        amplitude: f32::NAN,
        low: 7.0,
        ..BandLevels::default()
    };
    field.step(wild, &Settings::default());
    assert!(approx(field.rings()[0].scale - before, GROWTH_BASE));
    assert!(approx(field.phase(), PHASE_BIAS + 1.0));
}

#[test]
fn tint_is_white_unless_colour_frequencies() {
    let levels = BandLevels {
        low: 0.9,
        mid: 0.05,
        high: 0.5,
        ..BandLevels::default()
    };
    assert_eq!(ring_tint(&levels, &Settings::default()), glam::Vec3::ONE);
    let settings = Settings {
        colour_frequencies: true,
        ..Settings::default()
    };
    let tint = ring_tint(&levels, &settings);
    assert!(approx(tint.x, 0.9));
    assert!(approx(tint.y, MIN_TINT));
    assert!(approx(tint.z, 0.5));
}

// --- band reduction ---

#[test]
fn average_clamps_ranges_to_the_buffer() {
    let buf = [255u8; 4];
    assert!(approx(average(&buf, BandRange::new(2, 10)), 1.0));
    assert_eq!(average(&buf, BandRange::new(10, 20)), 0.0);
    assert_eq!(average(&buf, BandRange::new(3, 1)), 0.0);
    assert_eq!(average(&[], BandRange::new(0, 4)), 0.0);
    let ramp = [0u8, 51, 102, 153];
    assert!(approx(average(&ramp, BandRange::new(0, 4)), 0.3));
}

#[test]
fn hz_ranges_map_to_bins() {
    let bands = Bands::for_analyser(44_100.0, 1024);
    assert_eq!(bands.sub, BandRange::new(1, 3));
    assert_eq!(bands.low, BandRange::new(3, 12));
    assert_eq!(bands.mid, BandRange::new(12, 93));
    assert_eq!(bands.high, BandRange::new(93, 279));
    assert_eq!(
        bands.amplitude,
        BandRange::new(AMPLITUDE_FROM_BIN, AMPLITUDE_TO_BIN)
    );
    assert!(BandRange::from_hz(20.0, 60.0, 0.0, 1024).is_empty());
    assert_eq!(
        BandRange::from_hz(0.0, 50_000.0, 44_100.0, 1024),
        BandRange::new(0, 1024)
    );
}

#[test]
fn silent_waveform_reads_as_mid_amplitude() {
    let bands = Bands::for_analyser(48_000.0, 1024);
    let freqs = vec![0u8; 1024];
    let waveform = vec![128u8; 2048];
    let levels = BandLevels::measure(&freqs, &waveform, &bands);
    assert_eq!(levels.low, 0.0);
    assert!(approx(levels.amplitude, 128.0 / 255.0));
}

// --- presets ---

#[test]
fn presets_parse_by_name() {
    for p in Preset::ALL {
        assert_eq!(Preset::from_name(p.name()), Some(p));
    }
    assert_eq!(Preset::from_name(" Sub-Pulse "), Some(Preset::SubPulse));
    assert_eq!(Preset::from_name("CLASSIC"), Some(Preset::Classic));
    assert_eq!(Preset::from_name("strobe"), None);
    assert_eq!(Preset::default(), Preset::Pulse);
}

#[test]
fn preset_configs_differ_where_expected() {
    let classic = Preset::Classic.config();
    assert_eq!(classic.opacity_policy, OpacityPolicy::PhaseDriven);
    assert!(classic.spike.is_none());
    assert_eq!(classic.rebirth_opacity, 0.0);
    assert!(classic.auto_recenter_frames.is_none());

    let pulse = FieldConfig::default();
    assert_eq!(pulse, Preset::Pulse.config());
    assert_eq!(pulse.auto_recenter_frames, Some(AUTO_RECENTER_FRAMES));
    assert_eq!(pulse.expiry_scale(), DEFAULT_RING_COUNT as f32 + EXPIRY_MARGIN);

    let sub_pulse = Preset::SubPulse.config();
    assert_eq!(sub_pulse.auto_recenter_frames, Some(AUTO_RECENTER_FRAMES));
    assert_eq!(
        sub_pulse.spike.map(|r| r.source),
        Some(SpikeSource::SubBand)
    );
    assert_eq!(sub_pulse.rebirth_opacity, PULSE_REBIRTH_OPACITY);

    let rule = SpikeRule {
        source: SpikeSource::Amplitude,
        threshold: 0.6,
    };
    assert!(!rule.fires(&amplitude(0.6)));
    assert!(rule.fires(&amplitude(0.61)));
}

// --- ring geometry ---

#[test]
fn circle_is_closed_with_constant_radius() {
    let verts = circle_vertices(RING_SEGMENTS, RING_RADIUS);
    assert_eq!(verts.len(), RING_SEGMENTS + 1);
    assert!(verts[0].distance(verts[RING_SEGMENTS]) < 1e-5);
    assert!(verts.iter().all(|v| approx(v.length(), RING_RADIUS) && v.z == 0.0));
}

#[test]
fn world_vertices_apply_scale_and_depth() {
    let mut r = Ring::new(1);
    assert_eq!(r.scale, 2.0);
    r.depth = 5.0;
    let first = r.world_vertices().next();
    let Some(p) = first else {
        panic!("ring has no vertices");
    };
    assert!(approx(p.x, RING_RADIUS * 2.0));
    assert!(approx(p.y, 0.0));
    assert!(approx(p.z, 5.0));
}

#[test]
fn segments_pair_consecutive_world_vertices() {
    let mut r = Ring::new(2);
    r.depth = 4.0;
    let world: Vec<glam::Vec3> = r.world_vertices().collect();
    let segs: Vec<(glam::Vec3, glam::Vec3)> = r.segments().collect();
    assert_eq!(segs.len(), RING_SEGMENTS);
    for (i, (a, b)) in segs.iter().enumerate() {
        assert_eq!(*a, world[i]);
        assert_eq!(*b, world[i + 1]);
    }
    // Closed loop: the last segment ends where the first began
    assert!(segs[RING_SEGMENTS - 1].1.distance(segs[0].0) < 1e-4);
}
