//! Procedural meshes and the free-fly camera behind the tabletop scene.
//!
//! Nothing in here talks to a window or a GPU device. The native crate
//! uploads [`Mesh`] buffers and feeds input deltas into [`FlyCamera`].

pub mod camera;
pub mod clock;
pub mod mesh;

pub use camera::{CameraUniform, FlyCamera, MoveDirection, WORLD_UP};
pub use clock::FrameClock;
pub use mesh::{Mesh, MeshError, Vertex};
