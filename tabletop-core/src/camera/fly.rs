use glam::{Mat4, Vec2, Vec3};

//
// ──────────────────────────────────────────────────────────────
//   Free-fly camera (right-handed, Y-up)
//
//   Orientation comes from cumulative yaw/pitch in degrees:
//     front = (cos yaw · cos pitch,  sin pitch,  sin yaw · cos pitch)
//   Yaw −90° looks down −Z. No roll is modelled.
// ──────────────────────────────────────────────────────────────
//

pub const WORLD_UP: Vec3 = Vec3::Y;

//
// ──────────────────────────────────────────────────────────────
//   Constants
// ──────────────────────────────────────────────────────────────
//

const PITCH_LIMIT: f32 = 89.0; // stays short of the poles, no flip
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;
const YAW_WRAP: f32 = 360.0;

pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

const DEFAULT_POSITION: Vec3 = Vec3::new(-1.0, 0.0, 5.0);
const DEFAULT_YAW: f32 = -90.0;
const DEFAULT_PITCH: f32 = 0.0;
const DEFAULT_FOV: f32 = FOV_MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection
{
  Forward,
  Backward,
  Left,
  Right,
  Up,
  Down,
}

#[derive(Debug, Clone)]
pub struct FlyCamera
{
  pub position: Vec3,

  yaw: f32,
  pitch: f32,
  fov: f32,
  front: Vec3,

  // None until the first cursor event arrives
  last_cursor: Option<Vec2>,
}

impl Default for FlyCamera
{
  fn default() -> Self
  {
    Self::new(DEFAULT_POSITION)
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl FlyCamera
{
  pub fn new(position: Vec3) -> Self
  {
    Self {
      position,
      yaw: DEFAULT_YAW,
      pitch: DEFAULT_PITCH,
      fov: DEFAULT_FOV,
      front: front_from_angles(DEFAULT_YAW, DEFAULT_PITCH),
      last_cursor: None,
    }
  }

  pub fn yaw(&self) -> f32
  {
    self.yaw
  }

  pub fn pitch(&self) -> f32
  {
    self.pitch
  }

  /// Vertical field of view in degrees.
  pub fn fov(&self) -> f32
  {
    self.fov
  }

  /// Unit view direction.
  pub fn front(&self) -> Vec3
  {
    self.front
  }

  /// Horizontal strafe axis, `normalize(front × WORLD_UP)`.
  pub fn right(&self) -> Vec3
  {
    self.front.cross(WORLD_UP).normalize()
  }

  /// Rotate by a mouse delta already expressed with "screen up" positive.
  pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32, sensitivity: f32)
  {
    self.yaw += dx * sensitivity;
    self.pitch = (self.pitch + dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

    // Keep yaw bounded; % preserves sign so the direction is unchanged
    if self.yaw.abs() > YAW_WRAP
    {
      self.yaw %= YAW_WRAP;
    }

    self.front = front_from_angles(self.yaw, self.pitch);
  }

  /// Feed an absolute cursor position. The first call only records the
  /// reference point; later calls rotate by the movement since the last one.
  pub fn cursor_moved(&mut self, x: f32, y: f32, sensitivity: f32)
  {
    let current = Vec2::new(x, y);
    let last = self.last_cursor.replace(current).unwrap_or(current);

    // Window y grows downward
    let dx = current.x - last.x;
    let dy = last.y - current.y;

    self.apply_mouse_delta(dx, dy, sensitivity);
  }

  /// Forget the cursor reference, e.g. after the window loses focus.
  pub fn reset_cursor(&mut self)
  {
    self.last_cursor = None;
  }

  /// Scrolling up (positive) narrows the view.
  pub fn apply_scroll_delta(&mut self, dy: f32)
  {
    self.fov = (self.fov - dy).clamp(FOV_MIN, FOV_MAX);
  }

  /// Translate by `distance` world units. Strafing stays in the
  /// horizontal plane and vertical moves follow `WORLD_UP`, whatever the pitch.
  pub fn fly(&mut self, direction: MoveDirection, distance: f32)
  {
    let axis = match direction
    {
      MoveDirection::Forward => self.front,
      MoveDirection::Backward => -self.front,
      MoveDirection::Right => self.right(),
      MoveDirection::Left => -self.right(),
      MoveDirection::Up => WORLD_UP,
      MoveDirection::Down => -WORLD_UP,
    };

    self.position += axis * distance;
  }

  pub fn view_matrix(&self) -> Mat4
  {
    Mat4::look_at_rh(self.position, self.position + self.front, WORLD_UP)
  }

  /// Perspective with a [0, 1] depth range.
  pub fn projection_matrix(&self, aspect: f32) -> Mat4
  {
    Mat4::perspective_rh(self.fov.to_radians(), aspect, Z_NEAR, Z_FAR)
  }

  pub fn view_projection(&self, aspect: f32) -> Mat4
  {
    self.projection_matrix(aspect) * self.view_matrix()
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Spherical → cartesian helper
// ──────────────────────────────────────────────────────────────
//

fn front_from_angles(yaw_deg: f32, pitch_deg: f32) -> Vec3
{
  let (sin_yaw, cos_yaw) = yaw_deg.to_radians().sin_cos();
  let (sin_pitch, cos_pitch) = pitch_deg.to_radians().sin_cos();

  Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
}

#[cfg(test)]
mod tests
{
  use super::*;

  const EPS: f32 = 1e-5;

  #[test]
  fn default_camera_looks_down_negative_z()
  {
    let cam = FlyCamera::default();

    assert_eq!(cam.yaw(), -90.0);
    assert_eq!(cam.pitch(), 0.0);
    assert_eq!(cam.fov(), 45.0);
    assert_eq!(cam.position, Vec3::new(-1.0, 0.0, 5.0));
    assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
  }

  #[test]
  fn pitch_clamps_at_89_degrees()
  {
    let mut cam = FlyCamera::default();
    cam.apply_mouse_delta(0.0, 950.0, 0.1);

    assert_eq!(cam.pitch(), 89.0);
    assert!((cam.front().y - 89.0_f32.to_radians().sin()).abs() < EPS);

    cam.apply_mouse_delta(0.0, -5000.0, 0.1);
    assert_eq!(cam.pitch(), -89.0);
  }

  #[test]
  fn front_stays_normalized()
  {
    let mut cam = FlyCamera::default();

    for step in 0..50
    {
      cam.apply_mouse_delta(37.0, (step as f32 - 25.0) * 9.0, 0.1);
      assert!((cam.front().length() - 1.0).abs() < EPS);
    }
  }

  #[test]
  fn yaw_right_turns_towards_positive_x()
  {
    let mut cam = FlyCamera::default();
    cam.apply_mouse_delta(900.0, 0.0, 0.1);

    assert!((cam.yaw() - 0.0).abs() < EPS);
    assert!(cam.front().abs_diff_eq(Vec3::X, EPS));
  }

  #[test]
  fn yaw_wraps_without_changing_direction()
  {
    let mut cam = FlyCamera::default();
    cam.apply_mouse_delta(3700.0, 0.0, 0.1); // -90 + 370 = 280
    assert!((cam.yaw() - 280.0).abs() < 1e-3);

    cam.apply_mouse_delta(1000.0, 0.0, 0.1); // 380 -> 20
    assert!((cam.yaw() - 20.0).abs() < 1e-3);
    assert!(cam.front().abs_diff_eq(front_from_angles(380.0, 0.0), 1e-4));
  }

  #[test]
  fn scroll_clamps_field_of_view()
  {
    let mut cam = FlyCamera::default();

    cam.apply_scroll_delta(100.0);
    assert_eq!(cam.fov(), 1.0);

    cam.apply_scroll_delta(-3.0);
    assert_eq!(cam.fov(), 4.0);

    cam.apply_scroll_delta(-100.0);
    assert_eq!(cam.fov(), 45.0);
  }

  #[test]
  fn first_cursor_event_is_only_a_reference()
  {
    let mut cam = FlyCamera::default();
    cam.cursor_moved(400.0, 300.0, 0.1);

    assert_eq!(cam.yaw(), -90.0);
    assert_eq!(cam.pitch(), 0.0);

    // Far-away first position still produces no jump
    let mut cam = FlyCamera::default();
    cam.cursor_moved(1900.0, -40.0, 0.1);
    assert_eq!(cam.yaw(), -90.0);
    assert_eq!(cam.pitch(), 0.0);
  }

  #[test]
  fn cursor_moving_up_raises_pitch()
  {
    let mut cam = FlyCamera::default();
    cam.cursor_moved(400.0, 300.0, 0.1);
    cam.cursor_moved(410.0, 250.0, 0.1);

    assert!((cam.yaw() + 89.0).abs() < EPS);
    assert!((cam.pitch() - 5.0).abs() < EPS);
  }

  #[test]
  fn reset_cursor_rearms_the_reference()
  {
    let mut cam = FlyCamera::default();
    cam.cursor_moved(0.0, 0.0, 0.1);
    cam.reset_cursor();
    cam.cursor_moved(500.0, 500.0, 0.1);

    assert_eq!(cam.yaw(), -90.0);
    assert_eq!(cam.pitch(), 0.0);
  }

  #[test]
  fn forward_follows_front()
  {
    let mut cam = FlyCamera::new(Vec3::ZERO);
    cam.fly(MoveDirection::Forward, 2.0);
    assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), EPS));

    cam.fly(MoveDirection::Backward, 2.0);
    assert!(cam.position.abs_diff_eq(Vec3::ZERO, EPS));
  }

  #[test]
  fn strafe_and_vertical_moves_ignore_pitch()
  {
    let mut cam = FlyCamera::new(Vec3::ZERO);
    cam.apply_mouse_delta(0.0, 600.0, 0.1); // pitch 60

    cam.fly(MoveDirection::Right, 1.0);
    assert!(cam.position.y.abs() < EPS);
    assert!(cam.position.abs_diff_eq(Vec3::X, EPS));

    cam.fly(MoveDirection::Left, 1.0);
    cam.fly(MoveDirection::Up, 0.5);
    assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), EPS));

    cam.fly(MoveDirection::Down, 1.5);
    assert!(cam.position.abs_diff_eq(Vec3::new(0.0, -1.0, 0.0), EPS));
  }

  #[test]
  fn view_matrix_maps_look_target_onto_negative_z()
  {
    let cam = FlyCamera::default();
    let view = cam.view_matrix();

    let eye = view.transform_point3(cam.position);
    let ahead = view.transform_point3(cam.position + cam.front() * 3.0);

    assert!(eye.abs_diff_eq(Vec3::ZERO, EPS));
    assert!(ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), EPS));
  }

  #[test]
  fn projection_uses_fov_and_fixed_clip_planes()
  {
    let mut cam = FlyCamera::default();
    cam.apply_scroll_delta(15.0);

    let expected = Mat4::perspective_rh(30.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
    assert!(cam.projection_matrix(4.0 / 3.0).abs_diff_eq(expected, 1e-6));

    let near = cam.projection_matrix(1.0).project_point3(Vec3::new(0.0, 0.0, -Z_NEAR));
    let far = cam.projection_matrix(1.0).project_point3(Vec3::new(0.0, 0.0, -Z_FAR));
    assert!(near.z.abs() < 1e-4);
    assert!((far.z - 1.0).abs() < 1e-4);
  }
}
