use super::helpers;
use crate::core::Offscreen;
use wgpu;

/// Ping-pong off-screen colour targets for the composited path.
///
/// Both use the swapchain format so the ring and post pipelines can draw into
/// either an off-screen target or the screen.
pub(crate) struct RenderTargets {
    pub(crate) a_tex: wgpu::Texture,
    pub(crate) a_view: wgpu::TextureView,
    pub(crate) b_tex: wgpu::Texture,
    pub(crate) b_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (a_tex, a_view) =
            helpers::create_color_texture(device, "offscreen_a", width, height, format);
        let (b_tex, b_view) =
            helpers::create_color_texture(device, "offscreen_b", width, height, format);
        Self {
            a_tex,
            a_view,
            b_tex,
            b_view,
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) {
        (self.a_tex, self.a_view) =
            helpers::create_color_texture(device, "offscreen_a", width, height, format);
        (self.b_tex, self.b_view) =
            helpers::create_color_texture(device, "offscreen_b", width, height, format);
    }

    pub(crate) fn view(&self, which: Offscreen) -> &wgpu::TextureView {
        match which {
            Offscreen::A => &self.a_view,
            Offscreen::B => &self.b_view,
        }
    }
}
