mod fly;
mod uniform;

pub use fly::{FlyCamera, MoveDirection, WORLD_UP, Z_FAR, Z_NEAR};
pub use uniform::CameraUniform;
