pub mod cylinder;
pub mod primitives;
pub mod sphere;

//
// ──────────────────────────────────────────────────────────────
//   Vertex layout: [x, y, z,  s, t]
// ──────────────────────────────────────────────────────────────
//

/// Number of `f32` fields per interleaved vertex.
pub const FLOATS_PER_VERTEX: usize = 5;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex
{
  pub position: [f32; 3],
  pub tex_coord: [f32; 2],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<Vertex>() == FLOATS_PER_VERTEX * 4);

impl Vertex
{
  pub const fn new(position: [f32; 3], tex_coord: [f32; 2]) -> Self
  {
    Self { position, tex_coord }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Errors
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError
{
  #[error("sector count must be at least 3, got {0}")]
  TooFewSectors(u32),

  #[error("stack count must be at least 1, got {0}")]
  TooFewStacks(u32),

  #[error("radius must be positive and finite, got {0}")]
  InvalidRadius(f32),

  #[error("rim expansion must be positive and finite, got {0}")]
  InvalidRimExpansion(f32),

  #[error("height must be positive and finite, got {0}")]
  InvalidHeight(f32),

  #[error("extent must be positive and finite, got {0}")]
  InvalidExtent(f32),

  #[error("{columns}x{rows} segments overflow 32-bit vertex indices")]
  TooManyVertices
  {
    columns: u32,
    rows: u32,
  },
}

pub(crate) fn ensure_positive(value: f32, err: fn(f32) -> MeshError) -> Result<f32, MeshError>
{
  if value.is_finite() && value > 0.0
  {
    Ok(value)
  }
  else
  {
    Err(err(value))
  }
}

/// A seam-duplicated grid of `columns x rows` quads has at most
/// `6 * columns * rows` indices and fewer vertices than that, so this
/// bound keeps every index and the draw count inside `u32`.
pub(crate) fn ensure_index_range(columns: u32, rows: u32) -> Result<u32, MeshError>
{
  columns
    .checked_mul(rows)
    .and_then(|quads| quads.checked_mul(6))
    .ok_or(MeshError::TooManyVertices { columns, rows })
}

//
// ──────────────────────────────────────────────────────────────
//   Mesh (CPU side, immutable once built)
// ──────────────────────────────────────────────────────────────
//

/// Interleaved vertices plus a triangle-list index buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh
{
  vertices: Vec<Vertex>,
  indices: Vec<u32>,
}

impl Mesh
{
  pub(crate) fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self
  {
    debug_assert!(indices.len() % 3 == 0);
    debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));

    Self { vertices, indices }
  }

  pub fn vertices(&self) -> &[Vertex]
  {
    &self.vertices
  }

  /// The vertex buffer as flat floats, `FLOATS_PER_VERTEX` per vertex.
  pub fn vertex_data(&self) -> &[f32]
  {
    bytemuck::cast_slice(&self.vertices)
  }

  pub fn indices(&self) -> &[u32]
  {
    &self.indices
  }

  pub fn vertex_count(&self) -> usize
  {
    self.vertices.len()
  }

  pub fn index_count(&self) -> usize
  {
    self.indices.len()
  }

  pub fn triangle_count(&self) -> usize
  {
    self.indices.len() / 3
  }

  /// Iterate triangles as index triples.
  pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_
  {
    self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn vertex_data_is_interleaved_position_then_uv()
  {
    let mesh = Mesh::new(
      vec![Vertex::new([1.0, 2.0, 3.0], [0.25, 0.75]), Vertex::new([4.0, 5.0, 6.0], [1.0, 0.0])],
      vec![],
    );

    assert_eq!(mesh.vertex_data(), &[1.0, 2.0, 3.0, 0.25, 0.75, 4.0, 5.0, 6.0, 1.0, 0.0]);
    assert_eq!(mesh.vertex_data().len(), mesh.vertex_count() * FLOATS_PER_VERTEX);
  }

  #[test]
  fn ensure_positive_rejects_zero_negative_and_nan()
  {
    assert_eq!(ensure_positive(0.5, MeshError::InvalidRadius), Ok(0.5));
    assert_eq!(ensure_positive(0.0, MeshError::InvalidRadius), Err(MeshError::InvalidRadius(0.0)));
    assert_eq!(
      ensure_positive(-1.0, MeshError::InvalidHeight),
      Err(MeshError::InvalidHeight(-1.0))
    );
    assert!(ensure_positive(f32::NAN, MeshError::InvalidExtent).is_err());
    assert!(ensure_positive(f32::INFINITY, MeshError::InvalidExtent).is_err());
  }

  #[test]
  fn index_range_accepts_the_largest_fitting_grid()
  {
    assert_eq!(ensure_index_range(500, 500), Ok(1_500_000));
    assert_eq!(ensure_index_range(u32::MAX / 6, 1), Ok(u32::MAX / 6 * 6));
    assert_eq!(
      ensure_index_range(u32::MAX / 6 + 1, 1),
      Err(MeshError::TooManyVertices { columns: u32::MAX / 6 + 1, rows: 1 })
    );
    assert!(ensure_index_range(70_000, 70_000).is_err());
  }

  #[test]
  fn triangles_groups_indices_in_triples()
  {
    let v = Vertex::new([0.0; 3], [0.0; 2]);
    let mesh = Mesh::new(vec![v; 4], vec![0, 1, 2, 2, 3, 0]);

    let tris: Vec<[u32; 3]> = mesh.triangles().collect();
    assert_eq!(tris, vec![[0, 1, 2], [2, 3, 0]]);
    assert_eq!(mesh.triangle_count(), 2);
  }
}
