use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tabletop.json";

//
// ──────────────────────────────────────────────────────────────
//   Config sections (every field optional in the file)
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig
{
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub meshes: MeshConfig,

  /// Directory holding the scene's jpg textures.
  pub asset_dir: PathBuf,
  pub clear_color: [f64; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig
{
  pub title: String,
  pub width: u32,
  pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig
{
  /// World units per second.
  pub move_speed: f32,
  /// Degrees per pixel of cursor travel.
  pub mouse_sensitivity: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeshConfig
{
  pub sphere_sectors: u32,
  pub sphere_stacks: u32,
  pub cylinder_slices: u32,
}

impl Default for AppConfig
{
  fn default() -> Self
  {
    Self {
      window: WindowConfig::default(),
      camera: CameraConfig::default(),
      meshes: MeshConfig::default(),
      asset_dir: PathBuf::from("images"),
      clear_color: [0.2, 0.3, 0.3],
    }
  }
}

impl Default for WindowConfig
{
  fn default() -> Self
  {
    Self { title: "Tabletop".to_string(), width: 800, height: 600 }
  }
}

impl Default for CameraConfig
{
  fn default() -> Self
  {
    Self { move_speed: 2.5, mouse_sensitivity: 0.1 }
  }
}

impl Default for MeshConfig
{
  fn default() -> Self
  {
    Self { sphere_sectors: 500, sphere_stacks: 500, cylinder_slices: 100 }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Loading
// ──────────────────────────────────────────────────────────────
//

impl AppConfig
{
  /// An explicit path must exist. Without one, `tabletop.json` in the
  /// working directory is used if present, otherwise the defaults.
  pub fn load(path: Option<PathBuf>) -> anyhow::Result<Self>
  {
    let path = match path
    {
      Some(path) => path,
      None if Path::new(DEFAULT_CONFIG_FILE).is_file() => PathBuf::from(DEFAULT_CONFIG_FILE),
      None =>
      {
        log::info!("no {DEFAULT_CONFIG_FILE} found, using built-in settings");
        return Ok(Self::default());
      }
    };

    let text = fs::read_to_string(&path)
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    let config = Self::from_json(&text)
      .with_context(|| format!("failed to parse config file {}", path.display()))?;

    log::info!("loaded config from {}", path.display());
    Ok(config)
  }

  pub fn from_json(text: &str) -> anyhow::Result<Self>
  {
    let config: Self = serde_json::from_str(text)?;

    if config.window.width == 0 || config.window.height == 0
    {
      anyhow::bail!(
        "window size must be non-zero, got {}x{}",
        config.window.width,
        config.window.height
      );
    }

    Ok(config)
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn empty_object_gives_defaults()
  {
    let config = AppConfig::from_json("{}").unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.camera.move_speed, 2.5);
    assert_eq!(config.camera.mouse_sensitivity, 0.1);
    assert_eq!(config.meshes.sphere_sectors, 500);
    assert_eq!(config.asset_dir, PathBuf::from("images"));
  }

  #[test]
  fn partial_sections_keep_remaining_defaults()
  {
    let config = AppConfig::from_json(
      r#"{ "camera": { "move_speed": 5.0 }, "meshes": { "sphere_stacks": 64 } }"#,
    )
    .unwrap();

    assert_eq!(config.camera.move_speed, 5.0);
    assert_eq!(config.camera.mouse_sensitivity, 0.1);
    assert_eq!(config.meshes.sphere_stacks, 64);
    assert_eq!(config.meshes.sphere_sectors, 500);
  }

  #[test]
  fn unknown_fields_are_rejected()
  {
    assert!(AppConfig::from_json(r#"{ "camera": { "zoom": 2.0 } }"#).is_err());
    assert!(AppConfig::from_json(r#"{ "fullscreen": true }"#).is_err());
  }

  #[test]
  fn zero_window_size_is_rejected()
  {
    let err = AppConfig::from_json(r#"{ "window": { "width": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
  }

  #[test]
  fn missing_explicit_file_is_an_error()
  {
    let err = AppConfig::load(Some(PathBuf::from("does/not/exist.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.json"));
  }
}
