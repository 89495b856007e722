use crate::camera::CameraPose;
use crate::config::ControllerConfig;
use crate::host::{CaptureTarget, Channel, InputHost, SubscriptionId};
use crate::input::{InputState, MovementIntent};
use crate::look::{LookState, MouseDelta};
use crate::motion::MotionUpdater;
use crate::telemetry::PoseReadout;

/// Everything that exists only while the controller is attached to a host.
struct Mounted
{
  input: InputState,
  look: LookState,
  motion: MotionUpdater,
  subscriptions: Vec<SubscriptionId>,
}

//
// ──────────────────────────────────────────────────────────────
//   First-person controller
//
//   The host calls the handlers from its event loop and
//   `on_frame` once per rendered frame, all on one thread.
//   A detached controller ignores every call.
// ──────────────────────────────────────────────────────────────
//

pub struct FirstPersonController
{
  config: ControllerConfig,
  mounted: Option<Mounted>,
}

impl FirstPersonController
{
  pub fn new(config: ControllerConfig) -> Self
  {
    Self { config, mounted: None }
  }

  pub fn config(&self) -> &ControllerConfig
  {
    &self.config
  }

  pub fn is_attached(&self) -> bool
  {
    self.mounted.is_some()
  }

  /// Subscribe to the host's input channels and start with fresh state.
  pub fn attach(&mut self, host: &mut dyn InputHost, target: CaptureTarget)
  {
    if self.mounted.is_some()
    {
      log::warn!("controller already attached, ignoring attach for {:?}", target);
      return;
    }

    let subscriptions = Channel::ALL.iter().map(|channel| host.subscribe(*channel)).collect();

    self.mounted = Some(Mounted {
      input: InputState::new(target),
      look: LookState::new(),
      motion: MotionUpdater::new(),
      subscriptions,
    });

    log::debug!("controller attached to {:?}", target);
  }

  /// Release every subscription and drop all input and look state.
  pub fn detach(&mut self, host: &mut dyn InputHost)
  {
    let Some(mounted) = self.mounted.take()
    else
    {
      return;
    };

    for id in mounted.subscriptions
    {
      host.unsubscribe(id);
    }

    log::debug!("controller detached from {:?}", mounted.input.target());
  }

  //
  // ──────────────────────────────────────────────────────────────
  //   Event handlers
  // ──────────────────────────────────────────────────────────────
  //

  pub fn handle_key_down(&mut self, code: &str)
  {
    if let Some(m) = &mut self.mounted
    {
      m.input.handle_key_down(code);
    }
  }

  pub fn handle_key_up(&mut self, code: &str)
  {
    if let Some(m) = &mut self.mounted
    {
      m.input.handle_key_up(code);
    }
  }

  pub fn handle_click(&mut self, host: &mut dyn InputHost)
  {
    if let Some(m) = &self.mounted
    {
      m.input.handle_click(host);
    }
  }

  pub fn handle_capture_change(&mut self, captured: Option<CaptureTarget>)
  {
    if let Some(m) = &mut self.mounted
    {
      m.input.handle_capture_change(captured);
    }
  }

  /// Uncaptured motion is dropped, not buffered.
  pub fn handle_mouse_move(&mut self, delta: MouseDelta)
  {
    if let Some(m) = &mut self.mounted
    {
      if m.input.pointer_captured
      {
        m.look.apply(delta);
      }
    }
  }

  //
  // ──────────────────────────────────────────────────────────────
  //   Per-frame update
  // ──────────────────────────────────────────────────────────────
  //

  /// Writes look and movement into `camera`. `speed` is per frame, so `dt` does
  /// not scale the step.
  pub fn on_frame(&mut self, _dt: f32, camera: &mut CameraPose)
  {
    if let Some(m) = &mut self.mounted
    {
      m.motion.step(m.input.intent, &m.look, &self.config, camera);
    }
  }

  //
  // ──────────────────────────────────────────────────────────────
  //   Read-only views
  // ──────────────────────────────────────────────────────────────
  //

  pub fn intent(&self) -> Option<MovementIntent>
  {
    self.mounted.as_ref().map(|m| m.input.intent)
  }

  pub fn look(&self) -> Option<LookState>
  {
    self.mounted.as_ref().map(|m| m.look)
  }

  pub fn pointer_captured(&self) -> bool
  {
    self.mounted.as_ref().is_some_and(|m| m.input.pointer_captured)
  }

  pub fn readout(&self, camera: &CameraPose) -> Option<PoseReadout>
  {
    self.mounted.as_ref().map(|m| PoseReadout::new(camera, &m.look))
  }
}
