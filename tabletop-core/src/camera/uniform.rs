use glam::Mat4;

use super::fly::FlyCamera;

//
// ──────────────────────────────────────────────────────────────
//   Camera Uniform (GPU side)
//
//   WGSL layout (textured.wgsl):
//     view_proj : mat4x4<f32>   → 64 bytes
//   Total: 64 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform
{
  pub view_proj: [[f32; 4]; 4], // 64 bytes
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 64);

impl CameraUniform
{
  pub fn from_camera(camera: &FlyCamera, aspect: f32) -> Self
  {
    let mat: Mat4 = camera.view_projection(aspect);
    Self { view_proj: mat.to_cols_array_2d() }
  }
}
