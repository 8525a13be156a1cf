use pixels::wgpu;

use crate::core::data::quad::QuadVertex;
use crate::core::filtering::{FilterMode, Sampling};

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

fn wgpu_filter(sampling: Sampling) -> wgpu::FilterMode {
    match sampling {
        Sampling::Nearest => wgpu::FilterMode::Nearest,
        Sampling::Linear => wgpu::FilterMode::Linear,
    }
}

/// Sampler settings for `mode`. Plain modes clamp sampling to the base level.
#[must_use]
pub fn sampler_descriptor(mode: FilterMode) -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("Image Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu_filter(mode.mag_filter()),
        min_filter: wgpu_filter(mode.min_filter()),
        mipmap_filter: wgpu_filter(mode.mipmap_filter()),
        lod_max_clamp: if mode.uses_mipmaps() { 32.0 } else { 0.0 },
        ..Default::default()
    }
}

/// Shader, sampler and layout used to draw the image quad.
#[derive(Debug)]
pub struct ImagePipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    filter_mode: FilterMode,
}

impl ImagePipeline {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat, filter_mode: FilterMode) -> Self {
        let sampler = device.create_sampler(&sampler_descriptor(filter_mode));

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Image Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("image.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Image Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Image Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Image Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRIBUTES,
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        tracing::debug!(filter = %filter_mode, ?target_format, "image pipeline created");

        Self {
            pipeline,
            bind_group_layout,
            sampler,
            filter_mode,
        }
    }

    #[must_use]
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub(crate) fn render_pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Binds one texture view with this pipeline's sampler.
    pub(crate) fn bind_texture(&self, device: &wgpu::Device, view: &wgpu::TextureView) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Image Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_modes_never_leave_the_base_level() {
        for mode in [FilterMode::Nearest, FilterMode::Linear] {
            let descriptor = sampler_descriptor(mode);
            assert_eq!(descriptor.lod_max_clamp, 0.0);
        }
    }

    #[test]
    fn sampler_follows_filter_table() {
        let descriptor = sampler_descriptor(FilterMode::LinearMipmapNearest);

        assert_eq!(descriptor.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(descriptor.mipmap_filter, wgpu::FilterMode::Nearest);
        assert_eq!(descriptor.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(descriptor.address_mode_u, wgpu::AddressMode::ClampToEdge);
        assert!(descriptor.lod_max_clamp > 0.0);
    }

    #[test]
    fn magnification_is_always_nearest() {
        for &mode in FilterMode::ALL {
            assert_eq!(sampler_descriptor(mode).mag_filter, wgpu::FilterMode::Nearest);
        }
    }
}
