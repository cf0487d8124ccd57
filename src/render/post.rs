use super::helpers;
use super::targets::RenderTargets;
use crate::constants::{
    BLOOM_STRENGTH, BLOOM_THRESHOLD, BOX_BLUR_TEXELS, KALEIDOSCOPE_ANGLE_DEG, KALEIDOSCOPE_SIDES,
};
use crate::core::{Offscreen, PostPass};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_texels: [f32; 2],
    bloom_threshold: f32,
    bloom_strength: f32,
    kaleido_sides: f32,
    kaleido_angle: f32,
}

impl PostUniforms {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: [width as f32, height as f32],
            blur_texels: BOX_BLUR_TEXELS,
            bloom_threshold: BLOOM_THRESHOLD,
            bloom_strength: BLOOM_STRENGTH,
            kaleido_sides: KALEIDOSCOPE_SIDES,
            kaleido_angle: KALEIDOSCOPE_ANGLE_DEG,
        }
    }
}

pub(crate) struct PostResources {
    bgl: wgpu::BindGroupLayout, // tex+sampler+uniform
    sampler: wgpu::Sampler,
    pub(crate) uniform_buffer: wgpu::Buffer,
    bloom: wgpu::RenderPipeline,
    fxaa: wgpu::RenderPipeline,
    box_blur: wgpu::RenderPipeline,
    kaleidoscope: wgpu::RenderPipeline,
    bg_from_a: wgpu::BindGroup,
    bg_from_b: wgpu::BindGroup,
}

impl PostResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        targets: &RenderTargets,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                helpers::uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("post_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("post_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = |pass: PostPass| {
            helpers::make_post_pipeline(
                device,
                &layout,
                &shader,
                pass.label(),
                pass.fragment_entry(),
                format,
            )
        };
        let bloom = pipeline(PostPass::Bloom);
        let fxaa = pipeline(PostPass::Fxaa);
        let box_blur = pipeline(PostPass::BoxBlur);
        let kaleidoscope = pipeline(PostPass::Kaleidoscope);

        let bg_from_a = make_bind_group(
            device,
            &bgl,
            &sampler,
            &uniform_buffer,
            targets.view(Offscreen::A),
            "post_bg_a",
        );
        let bg_from_b = make_bind_group(
            device,
            &bgl,
            &sampler,
            &uniform_buffer,
            targets.view(Offscreen::B),
            "post_bg_b",
        );

        Self {
            bgl,
            sampler,
            uniform_buffer,
            bloom,
            fxaa,
            box_blur,
            kaleidoscope,
            bg_from_a,
            bg_from_b,
        }
    }

    /// Bind groups reference the target views, so rebuild after a resize.
    pub(crate) fn rebuild_bind_groups(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        self.bg_from_a = make_bind_group(
            device,
            &self.bgl,
            &self.sampler,
            &self.uniform_buffer,
            targets.view(Offscreen::A),
            "post_bg_a",
        );
        self.bg_from_b = make_bind_group(
            device,
            &self.bgl,
            &self.sampler,
            &self.uniform_buffer,
            targets.view(Offscreen::B),
            "post_bg_b",
        );
    }

    pub(crate) fn pipeline(&self, pass: PostPass) -> &wgpu::RenderPipeline {
        match pass {
            PostPass::Bloom => &self.bloom,
            PostPass::Fxaa => &self.fxaa,
            PostPass::BoxBlur => &self.box_blur,
            PostPass::Kaleidoscope => &self.kaleidoscope,
        }
    }

    pub(crate) fn bind_group(&self, read: Offscreen) -> &wgpu::BindGroup {
        match read {
            Offscreen::A => &self.bg_from_a,
            Offscreen::B => &self.bg_from_b,
        }
    }
}

fn make_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    uniform_buffer: &wgpu::Buffer,
    view: &wgpu::TextureView,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bind_group: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bind_group, &[]);
    r.draw(0..3, 0..1);
}
