/// Frames-per-second over a sliding window, refreshed once per window.
#[derive(Clone, Debug)]
pub struct FpsMeter {
    window_sec: f64,
    window_start: Option<f64>,
    frames: u32,
    fps: Option<f32>,
}

impl FpsMeter {
    pub fn new(window_sec: f64) -> Self {
        Self {
            window_sec: window_sec.max(1e-3),
            window_start: None,
            frames: 0,
            fps: None,
        }
    }

    /// Count a frame at `now_sec`. Returns the new reading when a window
    /// closes.
    pub fn tick(&mut self, now_sec: f64) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now_sec);
        self.frames += 1;
        let elapsed = now_sec - start;
        if elapsed < self.window_sec {
            return None;
        }
        let fps = (self.frames as f64 / elapsed) as f32;
        self.fps = Some(fps);
        self.frames = 0;
        self.window_start = Some(now_sec);
        Some(fps)
    }

    pub fn fps(&self) -> Option<f32> {
        self.fps
    }

    pub fn reset(&mut self) {
        self.window_start = None;
        self.frames = 0;
    }
}

pub fn format_fps(fps: f32) -> String {
    format!("{:.0} FPS", fps.max(0.0))
}
