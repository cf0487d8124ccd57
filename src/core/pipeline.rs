use super::settings::Settings;
use smallvec::SmallVec;

/// Full-screen post-processing pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostPass {
    Bloom,
    Fxaa,
    BoxBlur,
    Kaleidoscope,
}

impl PostPass {
    pub const ALL: [PostPass; 4] = [
        PostPass::Bloom,
        PostPass::Fxaa,
        PostPass::BoxBlur,
        PostPass::Kaleidoscope,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PostPass::Bloom => "bloom",
            PostPass::Fxaa => "fxaa",
            PostPass::BoxBlur => "box_blur",
            PostPass::Kaleidoscope => "kaleidoscope",
        }
    }

    /// WGSL fragment entry point in the post shader.
    pub fn fragment_entry(self) -> &'static str {
        match self {
            PostPass::Bloom => "fs_bloom",
            PostPass::Fxaa => "fs_fxaa",
            PostPass::BoxBlur => "fs_box_blur",
            PostPass::Kaleidoscope => "fs_kaleidoscope",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentMode {
    /// Rings straight to the swapchain.
    Direct,
    /// Rings to an off-screen target, then through the pass chain.
    Composited,
}

/// One of the two ping-pong off-screen targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offscreen {
    A,
    B,
}

impl Offscreen {
    pub fn other(self) -> Self {
        match self {
            Offscreen::A => Offscreen::B,
            Offscreen::B => Offscreen::A,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassTarget {
    Offscreen(Offscreen),
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassStep {
    pub pass: PostPass,
    pub read: Offscreen,
    pub write: PassTarget,
}

/// Ordered passes selected for this frame. Rebuilt from the toggles every
/// frame; nothing carries over between frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassChain(SmallVec<[PostPass; 4]>);

impl PassChain {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut passes = SmallVec::new();
        if settings.blur_effect {
            passes.extend([PostPass::Bloom, PostPass::Fxaa, PostPass::BoxBlur]);
        }
        if settings.kaleidoscope {
            passes.push(PostPass::Kaleidoscope);
        }
        Self(passes)
    }

    pub fn passes(&self) -> &[PostPass] {
        &self.0
    }

    pub fn mode(&self) -> PresentMode {
        if self.0.is_empty() {
            PresentMode::Direct
        } else {
            PresentMode::Composited
        }
    }

    /// Read/write targets for each pass. The scene is drawn into `A` first;
    /// passes ping-pong between the off-screen targets and the last one
    /// writes to the screen.
    pub fn plan(&self) -> SmallVec<[PassStep; 4]> {
        let n = self.0.len();
        let mut read = Offscreen::A;
        self.0
            .iter()
            .enumerate()
            .map(|(i, &pass)| {
                let write = if i + 1 == n {
                    PassTarget::Screen
                } else {
                    PassTarget::Offscreen(read.other())
                };
                let step = PassStep { pass, read, write };
                read = read.other();
                step
            })
            .collect()
    }
}
