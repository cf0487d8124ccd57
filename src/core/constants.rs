// Ring field tuning constants shared by the animator, the camera rig and the
// host-side tests.

// Ring geometry
pub const RING_SEGMENTS: usize = 100; // polyline segments per ring (vertices = segments + 1)
pub const RING_RADIUS: f32 = 0.5;
pub const DEFAULT_RING_COUNT: usize = 100;

// Growth
pub const GROWTH_BASE: f32 = 0.1; // per-frame scale increase at silence
pub const GROWTH_AMPLITUDE_DIVISOR: f32 = 10.0; // amplitude / divisor is added on top
pub const EXPIRY_MARGIN: f32 = 3.0; // ring is reborn once scale > ring_count + margin

// Opacity
pub const OPACITY_DECAY_STEP: f32 = 0.05;
pub const PULSE_REBIRTH_OPACITY: f32 = 0.3;
pub const FREQ_OPACITY_PHASE_LO: f32 = 2.0;
pub const FREQ_OPACITY_PHASE_HI: f32 = 4.0;
pub const FREQ_OPACITY_MAX: f32 = 0.8;

// Spikes
pub const SPIKE_THRESHOLD_AMPLITUDE: f32 = 0.6;
pub const SPIKE_THRESHOLD_SUB: f32 = 0.7;

// Vertex jitter applied on rebirth, scaled by low-band energy
pub const JITTER_MAX_OFFSET: f32 = 0.005;

// Phase accumulator: t' = bias + low + retain * t
pub const PHASE_BIAS: f32 = 0.0025;
pub const PHASE_RETAIN: f32 = 0.75;
// Fixed point of the recurrence for low = 1.0; t never exceeds it for clamped input.
pub const PHASE_MAX: f32 = (PHASE_BIAS + 1.0) / (1.0 - PHASE_RETAIN);

// Per-ring rotation drift: sin(pi/2 * frame * i / divisor)
pub const ROTATION_PHASE_DIVISOR: f32 = 10_000.0;
// sin/cos of the drift term repeat exactly every 40000 frames for integer ring indices.
pub const FRAME_PHASE_PERIOD: u32 = 40_000;

// Minimum channel value when rings are tinted by band levels
pub const MIN_TINT: f32 = 0.15;

// Frequency bands in Hz (converted to bins once the analyser is known)
pub const SUB_BAND_HZ: (f32, f32) = (20.0, 60.0);
pub const LOW_BAND_HZ: (f32, f32) = (60.0, 250.0);
pub const MID_BAND_HZ: (f32, f32) = (250.0, 2_000.0);
pub const HIGH_BAND_HZ: (f32, f32) = (2_000.0, 6_000.0);

// Waveform bins averaged into the amplitude value
pub const AMPLITUDE_FROM_BIN: usize = 225;
pub const AMPLITUDE_TO_BIN: usize = 256;

// Camera
pub const CAMERA_DISTANCE: f32 = 220.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2_000.0;
pub const CAMERA_ROTATION_STEP: f32 = 0.01; // radians per frame for the axis-rotation toggles
pub const AUTO_RECENTER_FRAMES: u32 = 1_200;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = std::f32::consts::PI; // radians per viewport height dragged
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // fraction of distance per wheel delta unit
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 1_500.0;
pub const ORBIT_PHI_EPSILON: f32 = 0.01;
