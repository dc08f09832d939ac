use tabletop_core::Mesh;
use wgpu::util::DeviceExt;

pub struct GpuMesh
{
  pub vertex_buffer: wgpu::Buffer,
  pub index_buffer: wgpu::Buffer,
  pub index_count: u32,
}

impl GpuMesh
{
  /// Interleaved position/uv vertices and u32 triangle-list indices.
  pub fn upload(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self
  {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some(&format!("{label} Vertex Buffer")),
      contents: bytemuck::cast_slice(mesh.vertices()),
      usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some(&format!("{label} Index Buffer")),
      contents: bytemuck::cast_slice(mesh.indices()),
      usage: wgpu::BufferUsages::INDEX,
    });

    Self { vertex_buffer, index_buffer, index_count: mesh.index_count() as u32 }
  }

  pub fn layout() -> wgpu::VertexBufferLayout<'static>
  {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
      wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<tabletop_core::Vertex>() as u64,
      step_mode: wgpu::VertexStepMode::Vertex,
      attributes: &ATTRIBUTES,
    }
  }
}
