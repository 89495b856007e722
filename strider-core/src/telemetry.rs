use std::f32::consts::TAU;
use std::fmt;

use glam::Vec3;

use crate::camera::CameraPose;
use crate::look::LookState;

/// Display-only snapshot of where the viewer is and which way they face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseReadout
{
  pub position: Vec3,

  /// Yaw reduced into [0°, 360°).
  pub heading_deg: f32,
  pub pitch_deg: f32,
}

impl PoseReadout
{
  pub fn new(pose: &CameraPose, look: &LookState) -> Self
  {
    Self { position: pose.position, heading_deg: wrap_heading(look.yaw), pitch_deg: look.pitch.to_degrees() }
  }
}

fn wrap_heading(yaw: f32) -> f32
{
  let deg = yaw.rem_euclid(TAU).to_degrees();

  // rem_euclid can round up to exactly TAU for tiny negative inputs
  if deg >= 360.0 { 0.0 } else { deg }
}

impl fmt::Display for PoseReadout
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
  {
    let p = self.position;
    write!(
      f,
      "pos ({:.2}, {:.2}, {:.2})  heading {:.1}°  pitch {:+.1}°",
      p.x, p.y, p.z, self.heading_deg, self.pitch_deg
    )
  }
}
