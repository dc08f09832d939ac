use glam::{Mat4, Vec3};
use tabletop_core::mesh::cylinder::{self, CylinderParams};
use tabletop_core::mesh::primitives;
use tabletop_core::mesh::sphere::{self, SphereParams};
use tabletop_core::{Mesh, MeshError};

use crate::config::MeshConfig;

//
// ──────────────────────────────────────────────────────────────
//   Shapes and textures
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind
{
  Table,
  Butter,
  SpoonHandle,
  SpoonHead,
  Bowl,
  Flour,
  Egg,
}

impl ShapeKind
{
  pub const ALL: [ShapeKind; 7] = [
    ShapeKind::Table,
    ShapeKind::Butter,
    ShapeKind::SpoonHandle,
    ShapeKind::SpoonHead,
    ShapeKind::Bowl,
    ShapeKind::Flour,
    ShapeKind::Egg,
  ];

  pub fn build(self, res: &MeshConfig) -> Result<Mesh, MeshError>
  {
    let (sectors, stacks) = (res.sphere_sectors, res.sphere_stacks);

    match self
    {
      ShapeKind::Table => primitives::plane(5.0, -1.0),
      ShapeKind::Butter => primitives::cuboid(Vec3::new(0.2, 0.6, 0.4)),
      ShapeKind::SpoonHandle =>
      {
        cylinder::generate(&CylinderParams::new(0.3, res.cylinder_slices, 5.0))
      }
      ShapeKind::SpoonHead => sphere::generate(&SphereParams::half(0.75, sectors, stacks)),
      ShapeKind::Bowl => sphere::generate(&SphereParams::half(1.0, sectors, stacks)),
      ShapeKind::Flour => sphere::generate(&SphereParams::half(0.99, sectors, stacks)),
      ShapeKind::Egg => sphere::generate(&SphereParams::full(0.5, sectors, stacks)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind
{
  Table,
  Egg,
  Spoon,
  Flour,
  BowlPattern,
  Butter,
}

impl TextureKind
{
  pub const ALL: [TextureKind; 6] = [
    TextureKind::Table,
    TextureKind::Egg,
    TextureKind::Spoon,
    TextureKind::Flour,
    TextureKind::BowlPattern,
    TextureKind::Butter,
  ];

  pub fn file_name(self) -> &'static str
  {
    match self
    {
      TextureKind::Table => "table.jpg",
      TextureKind::Egg => "egg.jpg",
      TextureKind::Spoon => "spoon.jpg",
      TextureKind::Flour => "flour.jpg",
      TextureKind::BowlPattern => "bowlpattern.jpg",
      TextureKind::Butter => "butter.jpg",
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Draw list
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneItem
{
  pub shape: ShapeKind,
  pub texture: TextureKind,
  pub transform: Mat4,
}

impl SceneItem
{
  fn new(shape: ShapeKind, texture: TextureKind, transform: Mat4) -> Self
  {
    Self { shape, texture, transform }
  }
}

/// Generate every shape once; items share meshes by `ShapeKind`.
pub fn build_meshes(res: &MeshConfig) -> Result<Vec<(ShapeKind, Mesh)>, MeshError>
{
  ShapeKind::ALL.iter().map(|&shape| Ok((shape, shape.build(res)?))).collect()
}

/// The table with butter, spoon, a bowl of flour and three eggs.
/// Hemispheres are turned 90° about X so their dome points down.
pub fn kitchen_scene() -> Vec<SceneItem>
{
  let bowl = translate(0.0, -0.4, 0.0) * rotate_x(90.0) * translate(-2.0, -3.5, -0.4);

  vec![
    SceneItem::new(ShapeKind::Table, TextureKind::Table, Mat4::IDENTITY),
    SceneItem::new(
      ShapeKind::Butter,
      TextureKind::Butter,
      translate(-1.0, -0.77, -1.0) * rotate_z(-90.0) * rotate_x(-90.0),
    ),
    SceneItem::new(
      ShapeKind::SpoonHandle,
      TextureKind::Spoon,
      translate(0.0, -0.65, -0.1) * rotate_x(-90.0),
    ),
    SceneItem::new(
      ShapeKind::SpoonHead,
      TextureKind::Spoon,
      translate(0.0, -0.65, 0.0) * rotate_x(90.0) * translate(0.0, -3.2, -0.4),
    ),
    SceneItem::new(ShapeKind::Bowl, TextureKind::BowlPattern, bowl),
    SceneItem::new(ShapeKind::Flour, TextureKind::Flour, bowl),
    SceneItem::new(ShapeKind::Egg, TextureKind::Egg, translate(-3.0, -0.47, -2.0)),
    SceneItem::new(ShapeKind::Egg, TextureKind::Egg, translate(-2.0, -0.47, -1.5)),
    SceneItem::new(ShapeKind::Egg, TextureKind::Egg, translate(-3.5, -0.47, -1.0)),
  ]
}

fn translate(x: f32, y: f32, z: f32) -> Mat4
{
  Mat4::from_translation(Vec3::new(x, y, z))
}

fn rotate_x(degrees: f32) -> Mat4
{
  Mat4::from_rotation_x(degrees.to_radians())
}

fn rotate_z(degrees: f32) -> Mat4
{
  Mat4::from_rotation_z(degrees.to_radians())
}
