mod keymap;
mod pointer;

pub use keymap::code_name;
pub use pointer::{grab_outcome, key_action, KeyAction};

use strider_core::{CaptureTarget, Channel, InputHost, SubscriptionId, SubscriptionTable};
use winit::window::WindowId;

//
// ──────────────────────────────────────────────────────────────
//   winit host
//
//   winit has no pointer-lock event, so capture requests are
//   parked here and resolved by the app after the current event
//   with a cursor grab on the window.
// ──────────────────────────────────────────────────────────────
//

pub struct WinitHost
{
  subscriptions: SubscriptionTable,
  pending_capture: Option<CaptureTarget>,
}

impl WinitHost
{
  pub fn new() -> Self
  {
    Self { subscriptions: SubscriptionTable::new(), pending_capture: None }
  }

  pub fn listens(&self, channel: Channel) -> bool
  {
    self.subscriptions.is_subscribed(channel)
  }

  pub fn take_capture_request(&mut self) -> Option<CaptureTarget>
  {
    self.pending_capture.take()
  }
}

impl InputHost for WinitHost
{
  fn subscribe(&mut self, channel: Channel) -> SubscriptionId
  {
    self.subscriptions.insert(channel)
  }

  fn unsubscribe(&mut self, id: SubscriptionId)
  {
    if self.subscriptions.remove(id).is_none()
    {
      log::warn!("unsubscribe of unknown {:?}", id);
    }
  }

  fn request_pointer_capture(&mut self, target: CaptureTarget)
  {
    self.pending_capture = Some(target);
  }
}

pub fn window_target(id: WindowId) -> CaptureTarget
{
  CaptureTarget(u64::from(id))
}
