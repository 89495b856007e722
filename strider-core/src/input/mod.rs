mod keys;

pub use keys::{Axis, AxisIntent, ControlKey};

use crate::host::{CaptureTarget, InputHost};

/// Per-axis movement request derived from the held movement keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MovementIntent
{
  pub forward: AxisIntent,
  pub strafe: AxisIntent,
}

impl MovementIntent
{
  fn axis_mut(&mut self, axis: Axis) -> &mut AxisIntent
  {
    match axis
    {
      Axis::Forward => &mut self.forward,
      Axis::Strafe => &mut self.strafe,
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Input capture state
//
//   Same-axis keys are not counted: the last key-down wins, and
//   releasing any key on an axis idles it even if its synonym
//   or opposite is still held.
// ──────────────────────────────────────────────────────────────
//

pub struct InputState
{
  pub intent: MovementIntent,
  pub pointer_captured: bool,

  target: CaptureTarget,
}

impl InputState
{
  pub fn new(target: CaptureTarget) -> Self
  {
    Self { intent: MovementIntent::default(), pointer_captured: false, target }
  }

  pub fn target(&self) -> CaptureTarget
  {
    self.target
  }

  pub fn handle_key_down(&mut self, code: &str)
  {
    if let Some(key) = ControlKey::from_code(code)
    {
      *self.intent.axis_mut(key.axis()) = key.direction();
    }
  }

  pub fn handle_key_up(&mut self, code: &str)
  {
    if let Some(key) = ControlKey::from_code(code)
    {
      *self.intent.axis_mut(key.axis()) = AxisIntent::Idle;
    }
  }

  /// A user click on the viewport asks the host for the pointer if we don't hold it.
  pub fn handle_click(&self, host: &mut dyn InputHost)
  {
    if self.pointer_captured
    {
      return;
    }

    log::debug!("requesting pointer capture for {:?}", self.target);
    host.request_pointer_capture(self.target);
  }

  pub fn handle_capture_change(&mut self, captured: Option<CaptureTarget>)
  {
    let now = captured == Some(self.target);

    if now != self.pointer_captured
    {
      log::debug!("pointer capture {}", if now { "acquired" } else { "released" });
    }

    self.pointer_captured = now;
  }
}

#[cfg(test)]
mod tests
{
  use super::*;
  use crate::host::{Channel, SubscriptionId};

  #[derive(Default)]
  struct CaptureRequests(Vec<CaptureTarget>);

  impl InputHost for CaptureRequests
  {
    fn subscribe(&mut self, _channel: Channel) -> SubscriptionId
    {
      SubscriptionId(0)
    }

    fn unsubscribe(&mut self, _id: SubscriptionId) {}

    fn request_pointer_capture(&mut self, target: CaptureTarget)
    {
      self.0.push(target);
    }
  }

  fn state() -> InputState
  {
    InputState::new(CaptureTarget(7))
  }

  #[test]
  fn key_down_sets_direction()
  {
    let mut input = state();
    input.handle_key_down("KeyW");
    input.handle_key_down("KeyD");
    assert_eq!(input.intent.forward, AxisIntent::Positive);
    assert_eq!(input.intent.strafe, AxisIntent::Negative);

    input.handle_key_down("ArrowDown");
    input.handle_key_down("ArrowLeft");
    assert_eq!(input.intent.forward, AxisIntent::Negative);
    assert_eq!(input.intent.strafe, AxisIntent::Positive);
  }

  #[test]
  fn releasing_one_synonym_idles_the_axis()
  {
    let mut input = state();
    input.handle_key_down("KeyW");
    input.handle_key_down("ArrowUp");
    input.handle_key_up("KeyW");
    assert_eq!(input.intent.forward, AxisIntent::Idle);
  }

  #[test]
  fn releasing_the_opposite_key_idles_the_axis()
  {
    let mut input = state();
    input.handle_key_down("KeyA");
    input.handle_key_down("KeyD");
    input.handle_key_up("KeyA");
    assert_eq!(input.intent.strafe, AxisIntent::Idle);
  }

  #[test]
  fn key_up_leaves_other_axis_alone()
  {
    let mut input = state();
    input.handle_key_down("KeyW");
    input.handle_key_down("KeyA");
    input.handle_key_up("KeyA");
    assert_eq!(input.intent.forward, AxisIntent::Positive);
  }

  #[test]
  fn unknown_codes_are_ignored()
  {
    let mut input = state();
    input.handle_key_down("KeyW");
    input.handle_key_up("Space");
    input.handle_key_down("NotAKey");
    assert_eq!(input.intent, MovementIntent { forward: AxisIntent::Positive, strafe: AxisIntent::Idle });
  }

  #[test]
  fn synonym_sequences_track_last_event()
  {
    // Every ordered pair of events on the forward axis.
    let events: [(bool, &str); 4] = [(true, "KeyW"), (true, "ArrowDown"), (false, "ArrowUp"), (false, "KeyS")];

    for first in events
    {
      for second in events
      {
        let mut input = state();
        for (down, code) in [first, second]
        {
          if down
          {
            input.handle_key_down(code);
          }
          else
          {
            input.handle_key_up(code);
          }
        }

        let expected = match second
        {
          (true, code) => ControlKey::from_code(code).unwrap().direction(),
          (false, _) => AxisIntent::Idle,
        };
        assert_eq!(input.intent.forward, expected, "{first:?} then {second:?}");
      }
    }
  }

  #[test]
  fn capture_flag_tracks_designated_target()
  {
    let mut input = state();
    input.handle_capture_change(Some(CaptureTarget(7)));
    assert!(input.pointer_captured);

    input.handle_capture_change(Some(CaptureTarget(8)));
    assert!(!input.pointer_captured);

    input.handle_capture_change(Some(CaptureTarget(7)));
    input.handle_capture_change(None);
    assert!(!input.pointer_captured);
  }

  #[test]
  fn click_requests_capture_only_when_released()
  {
    let mut host = CaptureRequests::default();
    let mut input = state();

    input.handle_click(&mut host);
    assert_eq!(host.0, vec![CaptureTarget(7)]);

    input.handle_capture_change(Some(CaptureTarget(7)));
    input.handle_click(&mut host);
    input.handle_click(&mut host);
    assert_eq!(host.0.len(), 1);
  }
}
