/// Pointer and wheel input accumulated between frames for the orbit controls.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct OrbitInput {
    pub down: bool,
    pub last_x: f32,
    pub last_y: f32,
    pub drag_dx: f32,
    pub drag_dy: f32,
    pub wheel: f32,
}

/// Deltas consumed by one frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct OrbitDelta {
    pub dx: f32,
    pub dy: f32,
    pub wheel: f32,
}

impl OrbitDelta {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0 && self.wheel == 0.0
    }
}

impl OrbitInput {
    pub fn press(&mut self, x: f32, y: f32) {
        self.down = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Moves only count while the pointer is held.
    pub fn moved(&mut self, x: f32, y: f32) {
        if self.down {
            self.drag_dx += x - self.last_x;
            self.drag_dy += y - self.last_y;
        }
        self.last_x = x;
        self.last_y = y;
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    pub fn scroll(&mut self, delta_y: f32) {
        if delta_y.is_finite() {
            self.wheel += delta_y;
        }
    }

    pub fn take_delta(&mut self) -> OrbitDelta {
        let d = OrbitDelta {
            dx: self.drag_dx,
            dy: self.drag_dy,
            wheel: self.wheel,
        };
        self.drag_dx = 0.0;
        self.drag_dy = 0.0;
        self.wheel = 0.0;
        d
    }
}
