use std::fmt;

use strider_core::{CaptureTarget, Channel, FirstPersonController};
use winit::keyboard::KeyCode;

use super::{code_name, WinitHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction
{
  ReleasePointer,
  Down(&'static str),
  Up(&'static str),
  Ignore,
}

/// Escape gives the pointer back; auto-repeat would re-apply the same intent.
pub fn key_action(code: KeyCode, pressed: bool, repeat: bool) -> KeyAction
{
  if code == KeyCode::Escape
  {
    return if pressed { KeyAction::ReleasePointer } else { KeyAction::Ignore };
  }

  if repeat
  {
    return KeyAction::Ignore;
  }

  match code_name(code)
  {
    Some(name) if pressed => KeyAction::Down(name),
    Some(name) => KeyAction::Up(name),
    None => KeyAction::Ignore,
  }
}

/// What to report as captured after trying to grab the cursor for `target`.
pub fn grab_outcome<E: fmt::Display>(result: Result<(), E>, target: CaptureTarget) -> Option<CaptureTarget>
{
  match result
  {
    Ok(()) => Some(target),
    Err(e) =>
    {
      log::warn!("pointer capture failed: {e}");
      None
    }
  }
}

impl WinitHost
{
  pub fn notify_capture(&self, controller: &mut FirstPersonController, captured: Option<CaptureTarget>)
  {
    if self.listens(Channel::CaptureChange)
    {
      controller.handle_capture_change(captured);
    }
  }
}
