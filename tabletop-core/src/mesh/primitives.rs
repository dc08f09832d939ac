use glam::Vec3;

use super::{ensure_positive, Mesh, MeshError, Vertex};

//
// ──────────────────────────────────────────────────────────────
//   Flat primitives (Y-up)
// ──────────────────────────────────────────────────────────────
//

/// Square in the XZ plane at height `y`, one full texture across it.
pub fn plane(half_extent: f32, y: f32) -> Result<Mesh, MeshError>
{
  let h = ensure_positive(half_extent, MeshError::InvalidExtent)?;

  let vertices = vec![
    Vertex::new([-h, y, -h], [0.0, 0.0]),
    Vertex::new([h, y, -h], [1.0, 0.0]),
    Vertex::new([h, y, h], [1.0, 1.0]),
    Vertex::new([-h, y, h], [0.0, 1.0]),
  ];

  // Counter-clockwise seen from above
  let indices = vec![0, 2, 1, 0, 3, 2];

  Ok(Mesh::new(vertices, indices))
}

// (outward axis, s axis, t axis). The texture axes follow the butter
// block's layout, so some faces show the image mirrored from outside.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
  (Vec3::X, Vec3::Y, Vec3::NEG_Z),     // right   (X+)
  (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z), // left    (X-)
  (Vec3::Y, Vec3::X, Vec3::NEG_Z),     // top     (Y+)
  (Vec3::NEG_Y, Vec3::X, Vec3::NEG_Z), // bottom  (Y-)
  (Vec3::Z, Vec3::X, Vec3::Y),         // front   (Z+)
  (Vec3::NEG_Z, Vec3::X, Vec3::Y),     // back    (Z-)
];

/// Axis-aligned box centred on the origin. Faces do not share vertices
/// so every face gets the whole texture.
pub fn cuboid(half_extents: Vec3) -> Result<Mesh, MeshError>
{
  for extent in half_extents.to_array()
  {
    ensure_positive(extent, MeshError::InvalidExtent)?;
  }

  let mut vertices = Vec::with_capacity(24);
  let mut indices = Vec::with_capacity(36);

  for (normal, s_axis, t_axis) in FACES
  {
    let base = vertices.len() as u32;

    for (ss, st) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
    {
      let corner = (normal + s_axis * ss + t_axis * st) * half_extents;
      let uv = [(ss + 1.0) * 0.5, (st + 1.0) * 0.5];
      vertices.push(Vertex::new(corner.to_array(), uv));
    }

    // Corners run s then t; flip when that turns away from the normal
    let quad = if s_axis.cross(t_axis).dot(normal) > 0.0
    {
      [0, 1, 2, 0, 2, 3]
    }
    else
    {
      [0, 2, 1, 0, 3, 2]
    };

    indices.extend(quad.map(|i| base + i));
  }

  Ok(Mesh::new(vertices, indices))
}
