mod core;
mod depth;
mod mesh;
mod object;
mod texture;

pub use self::core::Renderer;
