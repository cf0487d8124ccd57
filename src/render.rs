use crate::constants::CLEAR_COLOR;
use crate::core::{PassChain, PassTarget, PresentMode, Ring};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod post;
mod rings;
mod targets;

use post::{PostResources, PostUniforms};
use rings::{RingResources, RingVertex};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    rings: RingResources,
    targets: RenderTargets,
    post: PostResources,
    vertices: Vec<RingVertex>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[render] surface {}x{} format={:?}", width, height, format);

        let rings = RingResources::new(&device, format);
        let targets = RenderTargets::new(&device, width, height, format);
        let post = PostResources::new(&device, format, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            rings,
            targets,
            post,
            vertices: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Off-screen targets and the bind groups that sample them
            self.targets
                .recreate(&self.device, width, height, self.config.format);
            self.post.rebuild_bind_groups(&self.device, &self.targets);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw the rings directly or through the post chain, depending on `chain`.
    pub fn render(
        &mut self,
        rings: &[Ring],
        tint: Vec3,
        view_proj: Mat4,
        chain: &PassChain,
    ) -> Result<(), wgpu::SurfaceError> {
        rings::build_line_vertices(rings, tint, &mut self.vertices);
        self.rings
            .upload(&self.device, &self.queue, view_proj, &self.vertices);

        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.reconfigure();
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        match chain.mode() {
            PresentMode::Direct => {
                self.rings.draw(&mut encoder, &view, self.clear_color);
            }
            PresentMode::Composited => {
                let u = PostUniforms::new(self.width, self.height);
                self.queue
                    .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&u));
                self.rings.draw(
                    &mut encoder,
                    self.targets.view(crate::core::Offscreen::A),
                    self.clear_color,
                );
                for step in chain.plan() {
                    let target = match step.write {
                        PassTarget::Offscreen(which) => self.targets.view(which),
                        PassTarget::Screen => &view,
                    };
                    post::blit(
                        &mut encoder,
                        step.pass.label(),
                        target,
                        self.post.pipeline(step.pass),
                        self.post.bind_group(step.read),
                    );
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
