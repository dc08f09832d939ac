use std::f32::consts::TAU;

use super::{ensure_index_range, ensure_positive, Mesh, MeshError, Vertex};

//
// ──────────────────────────────────────────────────────────────
//   Cylinder (Y = axis, centred on the origin)
//
//   Vertex order:
//     side bottom ring   slices + 1   (t = 0)
//     side top ring      slices + 1   (t = 1)
//     top cap            centre + slices + 1
//     bottom cap         centre + slices + 1
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams
{
  pub radius: f32,
  pub slice_count: u32,
  pub height: f32,
  pub caps: bool,
}

impl CylinderParams
{
  pub fn new(radius: f32, slice_count: u32, height: f32) -> Self
  {
    Self { radius, slice_count, height, caps: true }
  }

  pub fn without_caps(mut self) -> Self
  {
    self.caps = false;
    self
  }

  pub fn validate(&self) -> Result<(), MeshError>
  {
    if self.slice_count < 3
    {
      return Err(MeshError::TooFewSectors(self.slice_count));
    }

    ensure_positive(self.radius, MeshError::InvalidRadius)?;
    ensure_positive(self.height, MeshError::InvalidHeight)?;

    // Side plus both caps is 12 indices per slice, two quad rows' worth
    ensure_index_range(self.slice_count, 2)?;

    Ok(())
  }
}

pub fn generate(params: &CylinderParams) -> Result<Mesh, MeshError>
{
  params.validate()?;

  let slices = params.slice_count;
  let half_height = params.height * 0.5;
  let ring = ring_directions(slices);

  let mut vertices = Vec::new();
  let mut indices = Vec::new();

  push_side(&mut vertices, &mut indices, &ring, params.radius, half_height);

  if params.caps
  {
    push_cap(&mut vertices, &mut indices, &ring, params.radius, half_height, true);
    push_cap(&mut vertices, &mut indices, &ring, params.radius, -half_height, false);
  }

  log::debug!(
    "cylinder mesh (r={}, h={}, {} slices): {} vertices, {} triangles",
    params.radius,
    params.height,
    slices,
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

/// `(cos θ, sin θ)` for every slice boundary, seam included.
fn ring_directions(slices: u32) -> Vec<(f32, f32)>
{
  let step = TAU / slices as f32;
  (0..=slices)
    .map(|j| {
      let (sin, cos) = (j as f32 * step).sin_cos();
      (cos, sin)
    })
    .collect()
}

fn push_side(
  vertices: &mut Vec<Vertex>,
  indices: &mut Vec<u32>,
  ring: &[(f32, f32)],
  radius: f32,
  half_height: f32,
)
{
  let base = vertices.len() as u32;
  let columns = ring.len() as u32;
  let slices = columns - 1;

  for (t, y) in [(0.0, -half_height), (1.0, half_height)]
  {
    for (j, &(c, s)) in ring.iter().enumerate()
    {
      let u = j as f32 / slices as f32;
      vertices.push(Vertex::new([radius * c, y, radius * s], [u, t]));
    }
  }

  for j in 0..slices
  {
    let b0 = base + j;
    let b1 = b0 + 1;
    let t0 = b0 + columns;
    let t1 = t0 + 1;

    // Counter-clockwise seen from outside the tube
    indices.extend_from_slice(&[b0, t0, b1]);
    indices.extend_from_slice(&[b1, t0, t1]);
  }
}

fn push_cap(
  vertices: &mut Vec<Vertex>,
  indices: &mut Vec<u32>,
  ring: &[(f32, f32)],
  radius: f32,
  y: f32,
  facing_up: bool,
)
{
  let centre = vertices.len() as u32;
  vertices.push(Vertex::new([0.0, y, 0.0], [0.5, 0.5]));

  for &(c, s) in ring
  {
    vertices.push(Vertex::new([radius * c, y, radius * s], [0.5 + 0.5 * c, 0.5 + 0.5 * s]));
  }

  let slices = ring.len() as u32 - 1;

  for j in 0..slices
  {
    let a = centre + 1 + j;
    let b = a + 1;

    if facing_up
    {
      indices.extend_from_slice(&[centre, b, a]);
    }
    else
    {
      indices.extend_from_slice(&[centre, a, b]);
    }
  }
}
