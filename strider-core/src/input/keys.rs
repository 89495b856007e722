//
// ──────────────────────────────────────────────────────────────
//   Control keys
//
//   Codes are platform key-code names of the physical key, so
//   the layout (QWERTY, AZERTY, ...) does not move the bindings.
// ──────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis
{
  Forward,
  Strafe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKey
{
  Forward,
  Back,
  Left,
  Right,
}

impl ControlKey
{
  pub fn from_code(code: &str) -> Option<Self>
  {
    match code
    {
      "KeyW" | "ArrowUp" => Some(ControlKey::Forward),
      "KeyS" | "ArrowDown" => Some(ControlKey::Back),
      "KeyA" | "ArrowLeft" => Some(ControlKey::Left),
      "KeyD" | "ArrowRight" => Some(ControlKey::Right),
      _ => None,
    }
  }

  pub fn axis(self) -> Axis
  {
    match self
    {
      ControlKey::Forward | ControlKey::Back => Axis::Forward,
      ControlKey::Left | ControlKey::Right => Axis::Strafe,
    }
  }

  /// Left is the positive strafe direction.
  pub fn direction(self) -> AxisIntent
  {
    match self
    {
      ControlKey::Forward | ControlKey::Left => AxisIntent::Positive,
      ControlKey::Back | ControlKey::Right => AxisIntent::Negative,
    }
  }
}

/// Discrete request along one movement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisIntent
{
  Negative,
  #[default]
  Idle,
  Positive,
}

impl AxisIntent
{
  pub fn value(self) -> f32
  {
    match self
    {
      AxisIntent::Negative => -1.0,
      AxisIntent::Idle => 0.0,
      AxisIntent::Positive => 1.0,
    }
  }
}
