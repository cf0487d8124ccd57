/// Live toggles edited from the control panel and keyboard.
///
/// The frame loop reads these fresh every frame. `centre` is the only toggle
/// the loop itself writes: it fires once and clears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub freq_rotate_x: bool,
    pub freq_rotate_y: bool,
    pub freq_vertices: bool,
    pub create_cone: bool,
    pub blur_effect: bool,
    pub kaleidoscope: bool,
    pub colour_frequencies: bool,
    pub rotate_x: bool,
    pub rotate_y: bool,
    pub rotate_anti_x: bool,
    pub rotate_anti_y: bool,
    pub centre: bool,
    pub display_fps: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    FreqRotateX,
    FreqRotateY,
    FreqVertices,
    CreateCone,
    BlurEffect,
    Kaleidoscope,
    ColourFrequencies,
    RotateX,
    RotateY,
    RotateAntiX,
    RotateAntiY,
    Centre,
    DisplayFps,
}

impl Toggle {
    /// Panel order.
    pub const ALL: [Toggle; 13] = [
        Toggle::FreqRotateX,
        Toggle::FreqRotateY,
        Toggle::FreqVertices,
        Toggle::CreateCone,
        Toggle::BlurEffect,
        Toggle::Kaleidoscope,
        Toggle::ColourFrequencies,
        Toggle::RotateX,
        Toggle::RotateY,
        Toggle::RotateAntiX,
        Toggle::RotateAntiY,
        Toggle::Centre,
        Toggle::DisplayFps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::FreqRotateX => "freqRotateX",
            Toggle::FreqRotateY => "freqRotateY",
            Toggle::FreqVertices => "freqVertices",
            Toggle::CreateCone => "createCone",
            Toggle::BlurEffect => "blurEffect",
            Toggle::Kaleidoscope => "kaleidoscope",
            Toggle::ColourFrequencies => "colourFrequencies",
            Toggle::RotateX => "rotateX",
            Toggle::RotateY => "rotateY",
            Toggle::RotateAntiX => "rotateAntiX",
            Toggle::RotateAntiY => "rotateAntiY",
            Toggle::Centre => "centre",
            Toggle::DisplayFps => "displayFPS",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    /// Keyboard shortcut, case-insensitive.
    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            "x" | "X" => Some(Toggle::FreqRotateX),
            "y" | "Y" => Some(Toggle::FreqRotateY),
            "v" | "V" => Some(Toggle::FreqVertices),
            "o" | "O" => Some(Toggle::CreateCone),
            "b" | "B" => Some(Toggle::BlurEffect),
            "k" | "K" => Some(Toggle::Kaleidoscope),
            "q" | "Q" => Some(Toggle::ColourFrequencies),
            "c" | "C" => Some(Toggle::Centre),
            "f" | "F" => Some(Toggle::DisplayFps),
            "ArrowLeft" => Some(Toggle::RotateAntiX),
            "ArrowRight" => Some(Toggle::RotateX),
            "ArrowUp" => Some(Toggle::RotateY),
            "ArrowDown" => Some(Toggle::RotateAntiY),
            _ => None,
        }
    }
}

impl Settings {
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::FreqRotateX => self.freq_rotate_x,
            Toggle::FreqRotateY => self.freq_rotate_y,
            Toggle::FreqVertices => self.freq_vertices,
            Toggle::CreateCone => self.create_cone,
            Toggle::BlurEffect => self.blur_effect,
            Toggle::Kaleidoscope => self.kaleidoscope,
            Toggle::ColourFrequencies => self.colour_frequencies,
            Toggle::RotateX => self.rotate_x,
            Toggle::RotateY => self.rotate_y,
            Toggle::RotateAntiX => self.rotate_anti_x,
            Toggle::RotateAntiY => self.rotate_anti_y,
            Toggle::Centre => self.centre,
            Toggle::DisplayFps => self.display_fps,
        }
    }

    pub fn set(&mut self, toggle: Toggle, value: bool) {
        let slot = match toggle {
            Toggle::FreqRotateX => &mut self.freq_rotate_x,
            Toggle::FreqRotateY => &mut self.freq_rotate_y,
            Toggle::FreqVertices => &mut self.freq_vertices,
            Toggle::CreateCone => &mut self.create_cone,
            Toggle::BlurEffect => &mut self.blur_effect,
            Toggle::Kaleidoscope => &mut self.kaleidoscope,
            Toggle::ColourFrequencies => &mut self.colour_frequencies,
            Toggle::RotateX => &mut self.rotate_x,
            Toggle::RotateY => &mut self.rotate_y,
            Toggle::RotateAntiX => &mut self.rotate_anti_x,
            Toggle::RotateAntiY => &mut self.rotate_anti_y,
            Toggle::Centre => &mut self.centre,
            Toggle::DisplayFps => &mut self.display_fps,
        };
        *slot = value;
    }

    /// Invert a toggle and return its new value.
    pub fn flip(&mut self, toggle: Toggle) -> bool {
        let next = !self.get(toggle);
        self.set(toggle, next);
        next
    }

    /// Consume a pending recenter request.
    pub fn take_centre(&mut self) -> bool {
        std::mem::take(&mut self.centre)
    }
}

impl Settings {
    /// Keyboard press on a toggle. `centre` is a request, so a press only
    /// ever arms it; everything else flips.
    pub fn press(&mut self, toggle: Toggle) -> bool {
        if toggle == Toggle::Centre {
            self.centre = true;
            true
        } else {
            self.flip(toggle)
        }
    }
}

/// What a key press does to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Toggle(Toggle),
    TogglePanel,
    Fullscreen,
}

impl KeyAction {
    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            "h" | "H" => Some(KeyAction::TogglePanel),
            "Enter" => Some(KeyAction::Fullscreen),
            _ => Toggle::for_key(key).map(KeyAction::Toggle),
        }
    }
}
