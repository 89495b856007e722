//! The seam between the controller and whatever owns the window and its event
//! stream. The host keeps a table of live subscriptions and only forwards events
//! on channels someone is listening to.

use std::collections::HashMap;

/// Opaque id of the surface the pointer is captured for (a window id, a canvas).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CaptureTarget(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel
{
  KeyDown,
  KeyUp,
  MouseMove,
  CaptureChange,
  Click,
}

impl Channel
{
  pub const ALL: [Channel; 5] =
    [Channel::KeyDown, Channel::KeyUp, Channel::MouseMove, Channel::CaptureChange, Channel::Click];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub trait InputHost
{
  fn subscribe(&mut self, channel: Channel) -> SubscriptionId;

  fn unsubscribe(&mut self, id: SubscriptionId);

  /// Ask the host to route the pointer exclusively to `target`. The outcome arrives
  /// later as a capture-change notification.
  fn request_pointer_capture(&mut self, target: CaptureTarget);
}

//
// ──────────────────────────────────────────────────────────────
//   Subscription bookkeeping for host implementations
// ──────────────────────────────────────────────────────────────
//

#[derive(Default)]
pub struct SubscriptionTable
{
  next_id: u64,
  live: HashMap<SubscriptionId, Channel>,
}

impl SubscriptionTable
{
  pub fn new() -> Self
  {
    Self::default()
  }

  pub fn insert(&mut self, channel: Channel) -> SubscriptionId
  {
    let id = SubscriptionId(self.next_id);
    self.next_id += 1;
    self.live.insert(id, channel);
    id
  }

  pub fn remove(&mut self, id: SubscriptionId) -> Option<Channel>
  {
    self.live.remove(&id)
  }

  pub fn is_subscribed(&self, channel: Channel) -> bool
  {
    self.live.values().any(|c| *c == channel)
  }

  pub fn len(&self) -> usize
  {
    self.live.len()
  }

  pub fn is_empty(&self) -> bool
  {
    self.live.is_empty()
  }
}
