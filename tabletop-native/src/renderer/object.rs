use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::scene::ShapeKind;

//
// ──────────────────────────────────────────────────────────────
//   Model Uniform (GPU side)
//
//   WGSL layout (textured.wgsl, group 1):
//     binding 0  model   : mat4x4<f32>   → 64 bytes
//     binding 1  texture : texture_2d<f32>
//     binding 2  sampler : sampler
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform
{
  pub model: [[f32; 4]; 4],
}

const _: () = assert!(std::mem::size_of::<ModelUniform>() == 64);

//
// ──────────────────────────────────────────────────────────────
//   DrawObject: one scene item ready to draw
// ──────────────────────────────────────────────────────────────
//

pub struct DrawObject
{
  pub shape: ShapeKind,
  pub bind_group: wgpu::BindGroup,
  _model_buffer: wgpu::Buffer,
}

impl DrawObject
{
  pub fn create(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    shape: ShapeKind,
    transform: Mat4,
    texture_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
  ) -> Self
  {
    let uniform = ModelUniform { model: transform.to_cols_array_2d() };

    let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some("Model Uniform Buffer"),
      contents: bytemuck::bytes_of(&uniform),
      usage: wgpu::BufferUsages::UNIFORM,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
      label: Some("Object BG"),
      layout,
      entries: &[
        wgpu::BindGroupEntry { binding: 0, resource: model_buffer.as_entire_binding() },
        wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(texture_view) },
        wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(sampler) },
      ],
    });

    Self { shape, bind_group, _model_buffer: model_buffer }
  }
}

pub fn create_object_bgl(device: &wgpu::Device) -> wgpu::BindGroupLayout
{
  device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Object BGL"),
    entries: &[
      wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::VERTEX,
        ty: wgpu::BindingType::Buffer {
          ty: wgpu::BufferBindingType::Uniform,
          has_dynamic_offset: false,
          min_binding_size: None,
        },
        count: None,
      },
      wgpu::BindGroupLayoutEntry {
        binding: 1,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
          sample_type: wgpu::TextureSampleType::Float { filterable: true },
          view_dimension: wgpu::TextureViewDimension::D2,
          multisampled: false,
        },
        count: None,
      },
      wgpu::BindGroupLayoutEntry {
        binding: 2,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
      },
    ],
  })
}
