mod app;
mod config;
mod input;
mod renderer;
mod scene;

use std::path::PathBuf;

// wgpu_hal is very chatty at info; naga only matters when a shader breaks
const DEFAULT_LOG_FILTER: &str = "info,wgpu_hal=off,naga=warn";

fn main() -> anyhow::Result<()>
{
  // Set RUST_LOG to override, e.g. RUST_LOG=tabletop=debug,wgpu=debug
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
    .init();

  let config = config::AppConfig::load(std::env::args_os().nth(1).map(PathBuf::from))?;

  app::run(config)
}
