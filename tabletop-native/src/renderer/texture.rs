use std::path::Path;

use anyhow::Context;

//
// ──────────────────────────────────────────────────────────────
//   Constants
// ──────────────────────────────────────────────────────────────
//

const TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

// 2x2 magenta/black checker for textures that fail to load
const FALLBACK_SIZE: u32 = 2;
#[rustfmt::skip]
const FALLBACK_PIXELS: [u8; 16] = [
  255, 0, 255, 255,   0, 0, 0, 255,
  0, 0, 0, 255,       255, 0, 255, 255,
];

//
// ──────────────────────────────────────────────────────────────
//   Texture
// ──────────────────────────────────────────────────────────────
//

pub struct Texture
{
  pub view: wgpu::TextureView,
}

impl Texture
{
  /// Decode an image file and upload it. A file that cannot be read
  /// is replaced by a checker so the rest of the scene still draws.
  pub fn load(device: &wgpu::Device, queue: &wgpu::Queue, path: &Path) -> Self
  {
    let label = path.display().to_string();

    match decode(path)
    {
      Ok(image) =>
      {
        let (width, height) = image.dimensions();
        log::info!("loaded texture {label} ({width}x{height})");
        Self::from_rgba(device, queue, &label, width, height, image.as_raw())
      }

      Err(err) =>
      {
        log::warn!("Failed to load texture: {err:#}");
        Self::from_rgba(device, queue, &label, FALLBACK_SIZE, FALLBACK_SIZE, &FALLBACK_PIXELS)
      }
    }
  }

  pub fn from_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
  ) -> Self
  {
    let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
      label: Some(label),
      size,
      mip_level_count: 1,
      sample_count: 1,
      dimension: wgpu::TextureDimension::D2,
      format: TEXTURE_FORMAT,
      usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
      view_formats: &[],
    });

    queue.write_texture(
      wgpu::TexelCopyTextureInfo {
        texture: &texture,
        mip_level: 0,
        origin: wgpu::Origin3d::ZERO,
        aspect: wgpu::TextureAspect::All,
      },
      pixels,
      wgpu::TexelCopyBufferLayout {
        offset: 0,
        bytes_per_row: Some(4 * width),
        rows_per_image: Some(height),
      },
      size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    Self { view }
  }
}

/// Repeat-wrapping, linearly filtered sampler shared by every surface.
pub fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler
{
  device.create_sampler(&wgpu::SamplerDescriptor {
    label: Some("Surface Sampler"),
    address_mode_u: wgpu::AddressMode::Repeat,
    address_mode_v: wgpu::AddressMode::Repeat,
    address_mode_w: wgpu::AddressMode::Repeat,
    mag_filter: wgpu::FilterMode::Linear,
    min_filter: wgpu::FilterMode::Linear,
    ..Default::default()
  })
}

//
// ──────────────────────────────────────────────────────────────
//   Decoding
// ──────────────────────────────────────────────────────────────
//

/// Flipped vertically so t = 0 is the bottom row of the image.
fn decode(path: &Path) -> anyhow::Result<image::RgbaImage>
{
  let image =
    image::open(path).with_context(|| format!("could not decode {}", path.display()))?;

  Ok(image.flipv().into_rgba8())
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn fallback_checker_is_a_full_rgba_square()
  {
    assert_eq!(FALLBACK_PIXELS.len() as u32, FALLBACK_SIZE * FALLBACK_SIZE * 4);
    assert_eq!(&FALLBACK_PIXELS[0..4], &FALLBACK_PIXELS[12..16]);
    assert_ne!(&FALLBACK_PIXELS[0..4], &FALLBACK_PIXELS[4..8]);
  }

  #[test]
  fn missing_file_reports_its_path()
  {
    let err = decode(Path::new("images/no-such-texture.jpg")).unwrap_err();
    assert!(format!("{err:#}").contains("no-such-texture.jpg"));
  }

  #[test]
  fn decoded_image_is_flipped_vertically()
  {
    let mut source = image::RgbaImage::new(1, 2);
    source.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    source.put_pixel(0, 1, image::Rgba([0, 0, 255, 255]));

    let path = std::env::temp_dir().join(format!("tabletop-flip-{}.png", std::process::id()));
    source.save(&path).unwrap();

    let decoded = decode(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(decoded.get_pixel(0, 0), &image::Rgba([0, 0, 255, 255]));
    assert_eq!(decoded.get_pixel(0, 1), &image::Rgba([255, 0, 0, 255]));
  }
}
