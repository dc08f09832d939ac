use tabletop_core::{FlyCamera, MoveDirection};

use crate::config::CameraConfig;
use crate::input::InputState;

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

pub fn apply_input_to_camera(
  input: &InputState,
  camera: &mut FlyCamera,
  dt: f32,
  settings: &CameraConfig,
)
{
  apply_look(input, camera, settings.mouse_sensitivity);
  apply_zoom(input, camera);
  apply_movement(input, camera, settings.move_speed * dt);
}

//
// ──────────────────────────────────────────────────────────────
//   Input handlers
// ──────────────────────────────────────────────────────────────
//

fn apply_look(input: &InputState, camera: &mut FlyCamera, sensitivity: f32)
{
  if input.cursor_lost
  {
    camera.reset_cursor();
  }

  if let Some((x, y)) = input.cursor
  {
    camera.cursor_moved(x, y, sensitivity);
  }
}

fn apply_zoom(input: &InputState, camera: &mut FlyCamera)
{
  if input.scroll == 0.0
  {
    return;
  }

  camera.apply_scroll_delta(input.scroll);
}

fn apply_movement(input: &InputState, camera: &mut FlyCamera, distance: f32)
{
  let bindings = [
    (input.forward_held, MoveDirection::Forward),
    (input.backward_held, MoveDirection::Backward),
    (input.left_held, MoveDirection::Left),
    (input.right_held, MoveDirection::Right),
    (input.up_held, MoveDirection::Up),
    (input.down_held, MoveDirection::Down),
  ];

  for (held, direction) in bindings
  {
    if held
    {
      camera.fly(direction, distance);
    }
  }
}

#[cfg(test)]
mod tests
{
  use glam::Vec3;

  use super::*;

  fn settings() -> CameraConfig
  {
    CameraConfig { move_speed: 2.5, mouse_sensitivity: 0.1 }
  }

  #[test]
  fn forward_key_moves_speed_times_dt()
  {
    let mut camera = FlyCamera::new(Vec3::ZERO);
    let input = InputState { forward_held: true, ..InputState::default() };

    apply_input_to_camera(&input, &mut camera, 0.5, &settings());

    assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.25), 1e-5));
  }

  #[test]
  fn opposite_keys_cancel_out()
  {
    let mut camera = FlyCamera::new(Vec3::ZERO);
    let input = InputState {
      left_held: true,
      right_held: true,
      up_held: true,
      down_held: true,
      ..InputState::default()
    };

    apply_input_to_camera(&input, &mut camera, 1.0, &settings());

    assert!(camera.position.abs_diff_eq(Vec3::ZERO, 1e-5));
  }

  #[test]
  fn q_rises_and_e_sinks()
  {
    let mut camera = FlyCamera::new(Vec3::ZERO);

    let up = InputState { up_held: true, ..InputState::default() };
    apply_input_to_camera(&up, &mut camera, 0.4, &settings());
    assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-5));

    let down = InputState { down_held: true, ..InputState::default() };
    apply_input_to_camera(&down, &mut camera, 0.2, &settings());
    assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), 1e-5));
  }

  #[test]
  fn cursor_positions_drive_look_after_first_frame()
  {
    let mut camera = FlyCamera::default();

    let first = InputState { cursor: Some((400.0, 300.0)), ..InputState::default() };
    apply_input_to_camera(&first, &mut camera, 0.016, &settings());
    assert_eq!(camera.yaw(), -90.0);

    let second = InputState { cursor: Some((450.0, 280.0)), ..InputState::default() };
    apply_input_to_camera(&second, &mut camera, 0.016, &settings());
    assert!((camera.yaw() + 85.0).abs() < 1e-4);
    assert!((camera.pitch() - 2.0).abs() < 1e-4);
  }

  #[test]
  fn lost_cursor_does_not_cause_a_jump()
  {
    let mut camera = FlyCamera::default();

    let first = InputState { cursor: Some((400.0, 300.0)), ..InputState::default() };
    apply_input_to_camera(&first, &mut camera, 0.016, &settings());

    let back = InputState { cursor: Some((10.0, 10.0)), cursor_lost: true, ..InputState::default() };
    apply_input_to_camera(&back, &mut camera, 0.016, &settings());

    assert_eq!(camera.yaw(), -90.0);
    assert_eq!(camera.pitch(), 0.0);
  }

  #[test]
  fn mouse_motion_turns_past_a_full_revolution()
  {
    let mut camera = FlyCamera::default();
    let mut input = InputState::new();

    // First motion only sets the reference point
    input.add_mouse_motion(500.0, 0.0);
    apply_input_to_camera(&input, &mut camera, 0.016, &settings());
    input.end_frame();
    assert_eq!(camera.yaw(), -90.0);

    // 10 x 500 px at 0.1 deg/px is 500 degrees, far wider than a window
    for _ in 0..10
    {
      input.add_mouse_motion(250.0, 0.0);
      input.add_mouse_motion(250.0, 0.0);
      apply_input_to_camera(&input, &mut camera, 0.016, &settings());
      input.end_frame();
    }

    // -90 + 500 = 410, wrapped once
    assert!((camera.yaw() - 50.0).abs() < 1e-3);
    assert_eq!(camera.pitch(), 0.0);
  }

  #[test]
  fn frames_without_motion_leave_the_view_alone()
  {
    let mut camera = FlyCamera::default();
    let mut input = InputState::new();

    input.add_mouse_motion(3.0, 4.0);
    apply_input_to_camera(&input, &mut camera, 0.016, &settings());
    input.end_frame();

    input.add_mouse_motion(0.0, -30.0);
    apply_input_to_camera(&input, &mut camera, 0.016, &settings());
    input.end_frame();
    apply_input_to_camera(&input, &mut camera, 0.016, &settings());

    // Moving the mouse up (negative y) raises the view
    assert!((camera.pitch() - 3.0).abs() < 1e-4);
    assert_eq!(camera.yaw(), -90.0);
  }

  #[test]
  fn scroll_zooms_in()
  {
    let mut camera = FlyCamera::default();
    let input = InputState { scroll: 5.0, ..InputState::default() };

    apply_input_to_camera(&input, &mut camera, 0.016, &settings());

    assert_eq!(camera.fov(), 40.0);
  }
}
