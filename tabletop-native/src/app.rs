use std::sync::Arc;

use tabletop_core::{FlyCamera, FrameClock, Mesh};
use winit::{
  application::ApplicationHandler,
  dpi::LogicalSize,
  event::{DeviceEvent, DeviceId, WindowEvent},
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  window::{CursorGrabMode, Window, WindowId},
};

use crate::config::AppConfig;
use crate::input::camera_control::apply_input_to_camera;
use crate::input::InputState;
use crate::renderer::Renderer;
use crate::scene::{self, SceneItem, ShapeKind};

pub fn run(config: AppConfig) -> anyhow::Result<()>
{
  let meshes = scene::build_meshes(&config.meshes)?;
  let event_loop = EventLoop::new()?;
  let mut app = TabletopApp::new(config, meshes);

  event_loop.run_app(&mut app)?;

  match app.fatal.take()
  {
    Some(err) => Err(err),
    None => Ok(()),
  }
}

struct TabletopApp
{
  config: AppConfig,
  window: Option<Arc<Window>>,
  renderer: Option<Renderer>,

  // CPU meshes, handed to the renderer once and then dropped
  pending_meshes: Vec<(ShapeKind, Mesh)>,
  scene: Vec<SceneItem>,

  camera: FlyCamera,
  clock: FrameClock,
  input: InputState,
  // Raw mouse motion is only looked at while the window has focus
  focused: bool,

  fatal: Option<anyhow::Error>,
}

impl TabletopApp
{
  fn new(config: AppConfig, meshes: Vec<(ShapeKind, Mesh)>) -> Self
  {
    Self {
      config,
      window: None,
      renderer: None,
      pending_meshes: meshes,
      scene: scene::kitchen_scene(),
      camera: FlyCamera::default(),
      clock: FrameClock::new(),
      input: InputState::new(),
      focused: true,
      fatal: None,
    }
  }

  fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()>
  {
    if self.window.is_some()
    {
      return Ok(());
    }

    let settings = &self.config.window;
    let attrs = Window::default_attributes()
      .with_title(settings.title.clone())
      .with_inner_size(LogicalSize::new(settings.width, settings.height));
    let window = Arc::new(event_loop.create_window(attrs)?);

    capture_cursor(&window);

    let renderer = pollster::block_on(Renderer::new(
      window.clone(),
      &self.config,
      &self.pending_meshes,
      &self.scene,
    ))?;
    self.pending_meshes.clear();

    log::info!("scene ready: {} draw items", self.scene.len());

    self.window = Some(window);
    self.renderer = Some(renderer);
    self.clock = FrameClock::new();

    Ok(())
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w,
      _ => return,
    };

    self.input.handle_event(&event);

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        if let Some(renderer) = &mut self.renderer
        {
          renderer.resize(size.width, size.height);
        }

        window.request_redraw();
      }

      WindowEvent::Focused(true) =>
      {
        self.focused = true;
        capture_cursor(window);
      }

      WindowEvent::Focused(false) =>
      {
        self.focused = false;
      }

      _ =>
      {}
    }
  }

  fn frame(&mut self, elwt: &ActiveEventLoop)
  {
    if self.input.quit_requested
    {
      elwt.exit();
      return;
    }

    if let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer)
    {
      let dt = self.clock.tick();
      apply_input_to_camera(&self.input, &mut self.camera, dt, &self.config.camera);

      renderer.update_camera(&self.camera);
      renderer.render();
      window.request_redraw();
      self.input.end_frame();
    }
  }
}

impl ApplicationHandler for TabletopApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Poll);

    if let Err(err) = self.init_window_and_renderer(event_loop)
    {
      log::error!("startup failed: {err:#}");
      self.fatal = Some(err);
      event_loop.exit();
    }
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent)
  {
    if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event
    {
      if self.focused && self.window.is_some()
      {
        self.input.add_mouse_motion(dx, dy);
      }
    }
  }

  fn about_to_wait(&mut self, event_loop: &ActiveEventLoop)
  {
    self.frame(event_loop);
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Helpers
// ──────────────────────────────────────────────────────────────
//

/// Hide the pointer and pin it for mouse look. Look reads raw motion,
/// so `Confined` only serves platforms without `Locked`.
fn capture_cursor(window: &Window)
{
  let grabbed = window
    .set_cursor_grab(CursorGrabMode::Locked)
    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

  if let Err(err) = grabbed
  {
    log::warn!("could not capture cursor: {err}");
  }

  window.set_cursor_visible(false);
}
