use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use glam::Vec3;
use strider_core::{CameraPose, Channel, ControllerConfig, FirstPersonController, MouseDelta};
use winit::{
  application::ApplicationHandler,
  event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  keyboard::PhysicalKey,
  window::{CursorGrabMode, Window, WindowId},
};

use crate::input::{self, KeyAction, WinitHost};

//
// ──────────────────────────────────────────────────────────────
//   Scene defaults
// ──────────────────────────────────────────────────────────────
//

const START_POSITION: Vec3 = Vec3::new(0.0, -10.0, 10.0); // first frame lifts it onto the floor
const WALK_SPEED: f32 = 0.02;
const MIN_HEIGHT: f32 = 1.5;

const TITLE_REFRESH_FRAMES: u64 = 15;

pub fn run() -> anyhow::Result<()>
{
  let config = ControllerConfig::new(WALK_SPEED, MIN_HEIGHT)?;

  let event_loop = EventLoop::new().context("creating event loop")?;
  let mut app = StriderApp::new(config);

  event_loop.run_app(&mut app).context("running event loop")?;

  match app.error.take()
  {
    Some(err) => Err(err),
    None => Ok(()),
  }
}

struct StriderApp
{
  window: Option<Arc<Window>>,
  camera: CameraPose,
  controller: FirstPersonController,
  host: WinitHost,

  last_frame: Instant,
  frames: u64,
  error: Option<anyhow::Error>,
}

impl StriderApp
{
  fn new(config: ControllerConfig) -> Self
  {
    Self {
      window: None,
      camera: CameraPose::at(START_POSITION),
      controller: FirstPersonController::new(config),
      host: WinitHost::new(),
      last_frame: Instant::now(),
      frames: 0,
      error: None,
    }
  }

  fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()>
  {
    if self.window.is_some()
    {
      return Ok(());
    }

    let attrs = Window::default_attributes().with_title("Strider — click to look around");
    let window = Arc::new(event_loop.create_window(attrs).context("creating window")?);

    let size = window.inner_size();

    self.controller.attach(&mut self.host, input::window_target(window.id()));
    self.last_frame = Instant::now();

    log::info!("window ready ({}x{}), WASD / arrows to walk, Esc to release the mouse", size.width, size.height);

    self.window = Some(window);
    Ok(())
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w.clone(),
      _ => return,
    };

    match event
    {
      WindowEvent::CloseRequested =>
      {
        self.controller.detach(&mut self.host);
        elwt.exit();
      }

      WindowEvent::Focused(false) => self.release_pointer(&window),

      WindowEvent::KeyboardInput { event, .. } => self.handle_key(&window, &event),

      WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } =>
      {
        if self.host.listens(Channel::Click)
        {
          self.controller.handle_click(&mut self.host);
        }
      }

      WindowEvent::RedrawRequested => self.frame(&window),

      _ =>
      {}
    }

    self.apply_capture_request(&window);
  }

  fn handle_key(&mut self, window: &Window, event: &KeyEvent)
  {
    let PhysicalKey::Code(code) = event.physical_key
    else
    {
      return;
    };

    let pressed = event.state == ElementState::Pressed;

    match input::key_action(code, pressed, event.repeat)
    {
      KeyAction::ReleasePointer => self.release_pointer(window),
      KeyAction::Down(name) if self.host.listens(Channel::KeyDown) => self.controller.handle_key_down(name),
      KeyAction::Up(name) if self.host.listens(Channel::KeyUp) => self.controller.handle_key_up(name),
      _ =>
      {}
    }
  }

  //
  // ──────────────────────────────────────────────────────────────
  //   Pointer capture (cursor grab)
  // ──────────────────────────────────────────────────────────────
  //

  fn apply_capture_request(&mut self, window: &Window)
  {
    if self.host.take_capture_request().is_none()
    {
      return;
    }

    let grabbed = window
      .set_cursor_grab(CursorGrabMode::Locked)
      .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

    let captured = input::grab_outcome(grabbed, input::window_target(window.id()));
    if captured.is_some()
    {
      window.set_cursor_visible(false);
    }

    self.host.notify_capture(&mut self.controller, captured);
  }

  fn release_pointer(&mut self, window: &Window)
  {
    if !self.controller.pointer_captured()
    {
      return;
    }

    if let Err(e) = window.set_cursor_grab(CursorGrabMode::None)
    {
      log::warn!("releasing cursor grab failed: {e}");
    }
    window.set_cursor_visible(true);

    self.host.notify_capture(&mut self.controller, None);
  }

  //
  // ──────────────────────────────────────────────────────────────
  //   Frame
  // ──────────────────────────────────────────────────────────────
  //

  fn frame(&mut self, window: &Window)
  {
    let now = Instant::now();
    let dt = now.duration_since(self.last_frame).as_secs_f32();
    self.last_frame = now;

    self.controller.on_frame(dt, &mut self.camera);
    self.frames += 1;

    if self.frames % TITLE_REFRESH_FRAMES == 0
    {
      if let Some(readout) = self.controller.readout(&self.camera)
      {
        window.set_title(&format!("Strider — {readout}"));
        log::trace!("{readout} ({})", self.camera.order.token());
      }
    }
  }
}

impl ApplicationHandler for StriderApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);

    if let Err(err) = self.init_window(event_loop)
    {
      self.error = Some(err);
      event_loop.exit();
    }
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent)
  {
    if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event
    {
      if self.host.listens(Channel::MouseMove)
      {
        self.controller.handle_mouse_move(MouseDelta::new(dx as f32, dy as f32));
      }
    }
  }

  fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop)
  {
    if let Some(window) = &self.window
    {
      window.request_redraw();
    }
  }
}
