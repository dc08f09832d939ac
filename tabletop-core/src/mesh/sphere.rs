use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{ensure_index_range, ensure_positive, Mesh, MeshError, Vertex};

//
// ──────────────────────────────────────────────────────────────
//   Latitude/longitude sphere (Z = polar axis)
//
//   Stacks run from the +Z pole downward, sectors run around Z.
//   Each stack emits sectorCount + 1 vertices: the last one repeats
//   the first position with s = 1.0 so textures wrap without a seam.
// ──────────────────────────────────────────────────────────────
//

/// Horizontal widening applied to hemispheres (bowl, flour, spoon head).
pub const HALF_SPHERE_RIM_EXPANSION: f32 = 1.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage
{
  /// Stack angle sweeps π/2 → −π/2.
  Full,
  /// Stack angle sweeps π/2 → 0, z never goes below the rim.
  UpperHemisphere,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams
{
  pub radius: f32,
  pub sector_count: u32,
  pub stack_count: u32,
  pub coverage: Coverage,
  /// Scales the horizontal radius only; z keeps the plain radius.
  pub rim_expansion: f32,
}

impl SphereParams
{
  pub fn full(radius: f32, sector_count: u32, stack_count: u32) -> Self
  {
    Self { radius, sector_count, stack_count, coverage: Coverage::Full, rim_expansion: 1.0 }
  }

  pub fn half(radius: f32, sector_count: u32, stack_count: u32) -> Self
  {
    Self {
      radius,
      sector_count,
      stack_count,
      coverage: Coverage::UpperHemisphere,
      rim_expansion: HALF_SPHERE_RIM_EXPANSION,
    }
  }

  pub fn with_rim_expansion(mut self, rim_expansion: f32) -> Self
  {
    self.rim_expansion = rim_expansion;
    self
  }

  pub fn validate(&self) -> Result<(), MeshError>
  {
    if self.sector_count < 3
    {
      return Err(MeshError::TooFewSectors(self.sector_count));
    }

    if self.stack_count < 1
    {
      return Err(MeshError::TooFewStacks(self.stack_count));
    }

    ensure_positive(self.radius, MeshError::InvalidRadius)?;
    ensure_positive(self.rim_expansion, MeshError::InvalidRimExpansion)?;
    ensure_index_range(self.sector_count, self.stack_count)?;

    Ok(())
  }

  /// Latitude of stack `i`, in radians.
  fn stack_angle(&self, i: u32) -> f32
  {
    let stack_step = PI / self.stack_count as f32;

    match self.coverage
    {
      Coverage::Full => FRAC_PI_2 - i as f32 * stack_step,
      Coverage::UpperHemisphere => FRAC_PI_2 - (i as f32 * stack_step) / 2.0,
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

pub fn generate(params: &SphereParams) -> Result<Mesh, MeshError>
{
  params.validate()?;

  let vertices = build_vertices(params);
  let indices = build_indices(params.sector_count, params.stack_count);

  log::debug!(
    "sphere mesh ({:?}, r={}, {}x{}): {} vertices, {} triangles",
    params.coverage,
    params.radius,
    params.sector_count,
    params.stack_count,
    vertices.len(),
    indices.len() / 3
  );

  Ok(Mesh::new(vertices, indices))
}

//
// ──────────────────────────────────────────────────────────────
//   Geometry builders
// ──────────────────────────────────────────────────────────────
//

fn build_vertices(params: &SphereParams) -> Vec<Vertex>
{
  let sectors = params.sector_count;
  let stacks = params.stack_count;
  let sector_step = TAU / sectors as f32;

  let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);

  for i in 0..=stacks
  {
    let stack_angle = params.stack_angle(i);
    let xy = params.rim_expansion * params.radius * stack_angle.cos();
    let z = params.radius * stack_angle.sin();
    let t = i as f32 / stacks as f32;

    for j in 0..=sectors
    {
      let sector_angle = j as f32 * sector_step;
      let x = xy * sector_angle.cos();
      let y = xy * sector_angle.sin();
      let s = j as f32 / sectors as f32;

      vertices.push(Vertex::new([x, y, z], [s, t]));
    }
  }

  vertices
}

/// Two triangles per quad, except the first and last stack rows which
/// emit one each (the other would collapse onto the pole).
fn build_indices(sectors: u32, stacks: u32) -> Vec<u32>
{
  let quad_rows = stacks.saturating_sub(1) as usize;
  let mut indices = Vec::with_capacity(6 * sectors as usize * quad_rows);

  for i in 0..stacks
  {
    let mut k1 = i * (sectors + 1); // beginning of current stack
    let mut k2 = k1 + sectors + 1; // beginning of next stack

    for _ in 0..sectors
    {
      // k1 => k2 => k1+1
      if i != 0
      {
        indices.extend_from_slice(&[k1, k2, k1 + 1]);
      }

      // k1+1 => k2 => k2+1
      if i != stacks - 1
      {
        indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
      }

      k1 += 1;
      k2 += 1;
    }
  }

  indices
}
