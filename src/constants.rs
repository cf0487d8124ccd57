// Web front-end tuning constants: analyser sizing, DOM hooks and
// post-processing parameters.
// Analyser
pub const ANALYSER_FFT_SIZE: u32 = 2048; // waveform = 2048 bytes, frequencies = 1024 bins
pub const ANALYSER_SMOOTHING: f64 = 0.8;

// Bundled default track, relative to the page
pub const DEFAULT_TRACK_URL: &str = "assets/afx-cottage3e.mp3";

// URL query parameter selecting the field preset
pub const PRESET_QUERY_KEY: &str = "preset";

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const DROP_ZONE_ID: &str = "dropZone";
pub const CONTROLS_ID: &str = "controls";
pub const FPS_ID: &str = "fps";
pub const DEFAULT_SELECTOR: &str = ".default";
pub const LOADING_SELECTOR: &str = ".loading";
pub const PARENT_SELECTOR: &str = ".parent";

// FPS readout refresh window (seconds)
pub const FPS_WINDOW_SEC: f64 = 1.0;

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.35;
pub const BLOOM_STRENGTH: f32 = 1.2;
pub const BOX_BLUR_TEXELS: [f32; 2] = [2.0, 2.0];
pub const KALEIDOSCOPE_SIDES: f32 = 4.0;
pub const KALEIDOSCOPE_ANGLE_DEG: f32 = 45.0;

// Frame clear colour
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
