use glam::Vec3;

use crate::camera::{CameraPose, RotationOrder};
use crate::config::ControllerConfig;
use crate::input::MovementIntent;
use crate::look::LookState;

// Below this the camera is looking (almost) straight up or down
// and the horizontal heading can no longer be read from it.
const HORIZONTAL_EPSILON: f32 = 1e-6;

const WORLD_UP: Vec3 = Vec3::Y;

//
// ──────────────────────────────────────────────────────────────
//   Motion updater
// ──────────────────────────────────────────────────────────────
//

pub struct MotionUpdater
{
  last_forward: Vec3,
}

impl Default for MotionUpdater
{
  fn default() -> Self
  {
    Self::new()
  }
}

impl MotionUpdater
{
  pub fn new() -> Self
  {
    Self { last_forward: Vec3::NEG_Z }
  }

  pub fn step(
    &mut self,
    intent: MovementIntent,
    look: &LookState,
    config: &ControllerConfig,
    pose: &mut CameraPose,
  )
  {
    apply_look(look, pose);

    let forward = self.horizontal_forward(pose.world_direction());
    let right = strafe_basis(forward);

    let speed = config.speed();
    pose.position += forward * (intent.forward.value() * speed);
    pose.position += right * (intent.strafe.value() * speed);

    // f32::max also replaces a NaN height with the floor
    pose.position.y = pose.position.y.max(config.min_height());
  }

  /// Facing direction flattened onto the ground plane.
  fn horizontal_forward(&mut self, facing: Vec3) -> Vec3
  {
    let flat = Vec3::new(facing.x, 0.0, facing.z);
    let len = flat.length();

    if !(len > HORIZONTAL_EPSILON)
    {
      log::trace!("facing is vertical, keeping heading {:?}", self.last_forward);
      return self.last_forward;
    }

    self.last_forward = flat / len;
    self.last_forward
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Helpers
// ──────────────────────────────────────────────────────────────
//

fn apply_look(look: &LookState, pose: &mut CameraPose)
{
  pose.set_rotation(look.pitch, look.yaw, 0.0, RotationOrder::Yxz);
}

/// Positive strafe direction: up × forward, which points to the viewer's left.
fn strafe_basis(forward: Vec3) -> Vec3
{
  WORLD_UP.cross(forward).normalize()
}
