use super::constants::{
    AMPLITUDE_FROM_BIN, AMPLITUDE_TO_BIN, HIGH_BAND_HZ, LOW_BAND_HZ, MID_BAND_HZ, SUB_BAND_HZ,
};

/// Half-open bin range `[from, to)` into an analyser buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandRange {
    pub from: usize,
    pub to: usize,
}

impl BandRange {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Convert a Hz range into frequency-bin indices for an analyser with
    /// `bin_count` bins spanning 0..nyquist.
    pub fn from_hz(min_hz: f32, max_hz: f32, sample_rate: f32, bin_count: usize) -> Self {
        let nyquist = sample_rate / 2.0;
        if nyquist <= 0.0 || bin_count == 0 {
            return Self::new(0, 0);
        }
        let to_index = |hz: f32| {
            ((hz / nyquist) * bin_count as f32)
                .round()
                .clamp(0.0, bin_count as f32) as usize
        };
        Self::new(to_index(min_hz), to_index(max_hz))
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }
}

/// Mean of `buffer[range]` normalized from byte values to [0, 1].
///
/// Bounds are clamped to the buffer; an empty or inverted range yields 0.
pub fn average(buffer: &[u8], range: BandRange) -> f32 {
    let end = range.to.min(buffer.len());
    let start = range.from.min(end);
    let slice = &buffer[start..end];
    if slice.is_empty() {
        return 0.0;
    }
    let sum: u32 = slice.iter().map(|&b| b as u32).sum();
    (sum as f32 / slice.len() as f32 / 255.0).clamp(0.0, 1.0)
}

/// Bin ranges for the four named frequency bands plus the waveform slice used
/// for amplitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bands {
    pub sub: BandRange,
    pub low: BandRange,
    pub mid: BandRange,
    pub high: BandRange,
    pub amplitude: BandRange,
}

impl Bands {
    pub fn for_analyser(sample_rate: f32, bin_count: usize) -> Self {
        let band = |(lo, hi): (f32, f32)| BandRange::from_hz(lo, hi, sample_rate, bin_count);
        Self {
            sub: band(SUB_BAND_HZ),
            low: band(LOW_BAND_HZ),
            mid: band(MID_BAND_HZ),
            high: band(HIGH_BAND_HZ),
            amplitude: BandRange::new(AMPLITUDE_FROM_BIN, AMPLITUDE_TO_BIN),
        }
    }
}

/// Per-frame scalar energies, each in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandLevels {
    pub sub: f32,
    pub low: f32,
    pub mid: f32,
    pub high: f32,
    pub amplitude: f32,
}

impl BandLevels {
    pub fn measure(freqs: &[u8], waveform: &[u8], bands: &Bands) -> Self {
        Self {
            sub: average(freqs, bands.sub),
            low: average(freqs, bands.low),
            mid: average(freqs, bands.mid),
            high: average(freqs, bands.high),
            amplitude: average(waveform, bands.amplitude),
        }
    }

    /// Copy with every level forced into [0, 1]; NaN becomes 0.
    pub fn clamped(self) -> Self {
        let c = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Self {
            sub: c(self.sub),
            low: c(self.low),
            mid: c(self.mid),
            high: c(self.high),
            amplitude: c(self.amplitude),
        }
    }
}
