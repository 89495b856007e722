use std::f32::consts::FRAC_PI_2;

//
// ──────────────────────────────────────────────────────────────
//   Sensitivity constants
// ──────────────────────────────────────────────────────────────
//

pub const LOOK_SENSITIVITY: f32 = 0.002; // radians per input unit
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

/// Relative pointer motion for one move event. Missing axes count as no motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseDelta
{
  pub dx: Option<f32>,
  pub dy: Option<f32>,
}

impl MouseDelta
{
  pub fn new(dx: f32, dy: f32) -> Self
  {
    Self { dx: Some(dx), dy: Some(dy) }
  }

  /// Absent and non-finite components both read as zero.
  pub fn resolved(self) -> (f32, f32)
  {
    (finite_or_zero(self.dx), finite_or_zero(self.dy))
  }
}

fn finite_or_zero(v: Option<f32>) -> f32
{
  v.filter(|v| v.is_finite()).unwrap_or(0.0)
}

//
// ──────────────────────────────────────────────────────────────
//   Look state
//
//   Yaw accumulates without bound; wrap it only when showing it.
//   A turn that would overflow it to infinity is dropped.
//   Pitch stops at straight up and straight down.
// ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookState
{
  pub yaw: f32,
  pub pitch: f32,
}

impl LookState
{
  pub fn new() -> Self
  {
    Self::default()
  }

  pub fn apply(&mut self, delta: MouseDelta)
  {
    let (dx, dy) = delta.resolved();

    let yaw = self.yaw - dx * LOOK_SENSITIVITY;
    if yaw.is_finite()
    {
      self.yaw = yaw;
    }

    self.pitch = (self.pitch - dy * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
  }
}

#[cfg(test)]
mod tests
{
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn moving_right_turns_right_and_moving_down_looks_down()
  {
    let mut look = LookState::new();
    look.apply(MouseDelta::new(100.0, 50.0));
    assert_abs_diff_eq!(look.yaw, -0.2, epsilon = 1e-6);
    assert_abs_diff_eq!(look.pitch, -0.1, epsilon = 1e-6);
  }

  #[test]
  fn missing_axes_count_as_zero()
  {
    let mut look = LookState::new();
    look.apply(MouseDelta { dx: Some(10.0), dy: None });
    look.apply(MouseDelta { dx: None, dy: None });
    assert_abs_diff_eq!(look.yaw, -0.02, epsilon = 1e-6);
    assert_eq!(look.pitch, 0.0);
  }

  #[test]
  fn non_finite_deltas_are_dropped()
  {
    let mut look = LookState::new();
    look.apply(MouseDelta::new(f32::NAN, f32::INFINITY));
    look.apply(MouseDelta::new(f32::NEG_INFINITY, f32::NAN));
    assert_eq!(look, LookState::new());
  }

  #[test]
  fn pitch_stays_inside_the_poles()
  {
    let deltas = [1.0e9, -1.0e9, 3.0e38, -3.0e38, 785.0, -785.4, 0.5, -12345.6];
    let mut look = LookState::new();

    for dy in deltas.iter().cycle().take(64)
    {
      look.apply(MouseDelta::new(0.0, *dy));
      assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&look.pitch), "pitch {}", look.pitch);
    }
  }

  #[test]
  fn pitch_saturates_at_the_pole()
  {
    let mut look = LookState::new();
    look.apply(MouseDelta::new(0.0, -1.0e6));
    assert_eq!(look.pitch, PITCH_LIMIT);

    look.apply(MouseDelta::new(0.0, -10.0));
    assert_eq!(look.pitch, PITCH_LIMIT);

    look.apply(MouseDelta::new(0.0, 10.0));
    assert!(look.pitch < PITCH_LIMIT);
  }

  #[test]
  fn yaw_is_not_wrapped()
  {
    let mut look = LookState::new();
    for _ in 0..10
    {
      look.apply(MouseDelta::new(-1000.0, 0.0));
    }
    assert_abs_diff_eq!(look.yaw, 20.0, epsilon = 1e-3);
  }

  #[test]
  fn yaw_stays_finite_under_huge_turns()
  {
    let mut look = LookState::new();
    for _ in 0..1000
    {
      look.apply(MouseDelta::new(-3.0e38, 0.0));
      assert!(look.yaw.is_finite());
    }
    assert!(look.yaw > 0.0);

    // The turn that would overflow is dropped but pitch still applies.
    let before = look.yaw;
    look.apply(MouseDelta::new(-3.0e38, 100.0));
    assert_eq!(look.yaw, before);
    assert_abs_diff_eq!(look.pitch, -0.2, epsilon = 1e-6);
  }
}
