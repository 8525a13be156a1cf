use pixels::wgpu;
use pixels::wgpu::util::DeviceExt;

use crate::core::actions::generate_mipmaps::generate_mip_chain;
use crate::core::actions::plan_texture_slices::{plan_texture_slices, smaller_slice_size};
use crate::core::data::quad::{slice_quad, RECTANGLE_INDICES};
use crate::core::data::rgba_image::RgbaImage;
use crate::core::data::texture_slice::TextureSlice;
use crate::errors::ViewerError;
use crate::presenters::pixels::pipeline::ImagePipeline;

/// One uploaded texture and the part of the quad it covers.
#[derive(Debug)]
struct SliceTexture {
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    _texture: wgpu::Texture,
}

/// The image on the GPU: a single texture when it fits, a grid of slices when
/// it does not.
#[derive(Debug)]
pub struct ImageTexture {
    slices: Vec<SliceTexture>,
    index_buffer: wgpu::Buffer,
}

impl ImageTexture {
    /// Uploads `image`, preferring one texture and falling back to slicing when
    /// the image exceeds the device limit or the allocation runs out of memory.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pipeline: &ImagePipeline,
        image: &RgbaImage,
    ) -> Result<Self, ViewerError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(ViewerError::TextureAllocation { width, height });
        }

        let max_size = device.limits().max_texture_dimension_2d;

        let mut slice_size = if width <= max_size && height <= max_size {
            let whole = [TextureSlice::whole(width, height)];
            if let Some(texture) = Self::try_upload(device, queue, pipeline, image, &whole)? {
                return Ok(texture);
            }
            tracing::warn!(width, height, "texture allocation failed, retrying sliced");
            smaller_slice_size(width.max(height))
        } else {
            tracing::warn!(width, height, max_size, "image exceeds the texture size limit, slicing");
            Some(max_size)
        };

        while let Some(size) = slice_size {
            let plan = plan_texture_slices(width, height, size);
            if let Some(texture) = Self::try_upload(device, queue, pipeline, image, &plan)? {
                return Ok(texture);
            }
            slice_size = smaller_slice_size(size);
            tracing::warn!(failed = size, next = ?slice_size, "sliced upload ran out of memory");
        }

        Err(ViewerError::TextureAllocation { width, height })
    }

    #[must_use]
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>, pipeline: &'a ImagePipeline) {
        pass.set_pipeline(pipeline.render_pipeline());
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        for slice in &self.slices {
            pass.set_bind_group(0, &slice.bind_group, &[]);
            pass.set_vertex_buffer(0, slice.vertex_buffer.slice(..));
            pass.draw_indexed(0..RECTANGLE_INDICES.len() as u32, 0, 0..1);
        }
    }

    /// Returns `None` if the device reported running out of memory.
    fn try_upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pipeline: &ImagePipeline,
        image: &RgbaImage,
        plan: &[TextureSlice],
    ) -> Result<Option<Self>, ViewerError> {
        let (width, height) = (image.width(), image.height());

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        let uploaded = plan
            .iter()
            .map(|&slice| Self::upload_slice(device, queue, pipeline, image, slice))
            .collect::<Result<Vec<_>, _>>();
        let out_of_memory = pollster::block_on(device.pop_error_scope());
        let slices = uploaded?;

        if let Some(error) = out_of_memory {
            tracing::warn!(%error, slices = plan.len(), "texture upload ran out of memory");
            return Ok(None);
        }

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Image Index Buffer"),
            contents: bytemuck::cast_slice(&RECTANGLE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        tracing::info!(
            width,
            height,
            slices = slices.len(),
            filter = %pipeline.filter_mode(),
            "image texture uploaded"
        );

        Ok(Some(Self {
            slices,
            index_buffer,
        }))
    }

    fn upload_slice(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pipeline: &ImagePipeline,
        image: &RgbaImage,
        slice: TextureSlice,
    ) -> Result<SliceTexture, ViewerError> {
        let base = if slice == TextureSlice::whole(image.width(), image.height()) {
            image.clone()
        } else {
            image.crop(slice.x, slice.y, slice.width, slice.height)?
        };

        let levels = if pipeline.filter_mode().uses_mipmaps() {
            generate_mip_chain(base)
        } else {
            vec![base]
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Image Texture"),
            size: wgpu::Extent3d {
                width: slice.width,
                height: slice.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            queue.write_texture(
                wgpu::ImageCopyTexture {
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level.buffer(),
                wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(level.row_bytes() as u32),
                    rows_per_image: Some(level.height()),
                },
                wgpu::Extent3d {
                    width: level.width(),
                    height: level.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = pipeline.bind_texture(device, &view);
        let vertices = slice_quad(slice, image.width(), image.height());
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Image Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        tracing::debug!(?slice, mip_levels = levels.len(), "texture slice uploaded");

        Ok(SliceTexture {
            bind_group,
            vertex_buffer,
            _texture: texture,
        })
    }
}
