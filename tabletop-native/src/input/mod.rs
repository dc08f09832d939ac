pub mod camera_control;

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

// Trackpads report pixels; roughly one wheel notch
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

/// Per-frame snapshot of the keys and pointer the fly camera cares about.
#[derive(Debug, Default)]
pub struct InputState
{
  // Virtual pointer position, set when the mouse moved this frame.
  // Built from raw motion deltas so it is not bounded by the window.
  pub cursor: Option<(f32, f32)>,
  virtual_cursor: (f64, f64),
  // Set when the pointer reference is no longer valid
  pub cursor_lost: bool,

  pub scroll: f32,

  pub forward_held: bool,
  pub backward_held: bool,
  pub left_held: bool,
  pub right_held: bool,
  pub up_held: bool,
  pub down_held: bool,

  pub quit_requested: bool,
}

impl InputState
{
  pub fn new() -> Self
  {
    Self::default()
  }

  pub fn handle_event(&mut self, event: &WindowEvent)
  {
    match event
    {
      WindowEvent::Focused(false) =>
      {
        self.release_all();
        self.cursor_lost = true;
      }

      WindowEvent::MouseWheel { delta, .. } => match delta
      {
        MouseScrollDelta::LineDelta(_, y) => self.scroll += *y,
        MouseScrollDelta::PixelDelta(p) => self.scroll += p.y as f32 / PIXELS_PER_SCROLL_LINE,
      },

      WindowEvent::KeyboardInput { event, .. } =>
      {
        if let PhysicalKey::Code(code) = event.physical_key
        {
          self.set_key(code, event.state == ElementState::Pressed);
        }
      }

      _ =>
      {}
    }
  }

  /// Accumulate a raw pointer delta (device units, y down).
  pub fn add_mouse_motion(&mut self, dx: f64, dy: f64)
  {
    self.virtual_cursor.0 += dx;
    self.virtual_cursor.1 += dy;
    self.cursor = Some((self.virtual_cursor.0 as f32, self.virtual_cursor.1 as f32));
  }

  /// Returns false for keys the viewer does not use.
  pub fn set_key(&mut self, code: KeyCode, pressed: bool) -> bool
  {
    match code
    {
      KeyCode::KeyW => self.forward_held = pressed,
      KeyCode::KeyS => self.backward_held = pressed,
      KeyCode::KeyA => self.left_held = pressed,
      KeyCode::KeyD => self.right_held = pressed,
      KeyCode::KeyQ => self.up_held = pressed,
      KeyCode::KeyE => self.down_held = pressed,
      KeyCode::Escape => self.quit_requested |= pressed,
      _ => return false,
    }

    true
  }

  fn release_all(&mut self)
  {
    self.forward_held = false;
    self.backward_held = false;
    self.left_held = false;
    self.right_held = false;
    self.up_held = false;
    self.down_held = false;
  }

  pub fn end_frame(&mut self)
  {
    self.cursor = None;
    self.cursor_lost = false;
    self.scroll = 0.0;
  }
}
