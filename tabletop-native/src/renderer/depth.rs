pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Depth attachment matching the surface size. Kept in place across
/// resizes; only the texture behind it is swapped.
pub struct DepthTarget
{
  pub view: wgpu::TextureView,
  extent: wgpu::Extent3d,
}

impl DepthTarget
{
  pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self
  {
    let extent = depth_extent(width, height);

    Self { view: create_view(device, extent), extent }
  }

  /// No-op when the size is unchanged.
  pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32)
  {
    let extent = depth_extent(width, height);
    if extent == self.extent
    {
      return;
    }

    self.view = create_view(device, extent);
    self.extent = extent;
  }
}

/// Opaque geometry: nearer fragments win and write their depth.
pub fn depth_stencil_state() -> wgpu::DepthStencilState
{
  wgpu::DepthStencilState {
    format: DEPTH_FORMAT,
    depth_write_enabled: true,
    depth_compare: wgpu::CompareFunction::Less,
    stencil: wgpu::StencilState::default(),
    bias: wgpu::DepthBiasState::default(),
  }
}

fn depth_extent(width: u32, height: u32) -> wgpu::Extent3d
{
  wgpu::Extent3d { width: width.max(1), height: height.max(1), depth_or_array_layers: 1 }
}

fn create_view(device: &wgpu::Device, extent: wgpu::Extent3d) -> wgpu::TextureView
{
  let texture = device.create_texture(&wgpu::TextureDescriptor {
    label: Some("Depth Texture"),
    size: extent,
    mip_level_count: 1,
    sample_count: 1,
    dimension: wgpu::TextureDimension::D2,
    format: DEPTH_FORMAT,
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    view_formats: &[],
  });

  texture.create_view(&wgpu::TextureViewDescriptor::default())
}
