//! First-person navigation for a 3D scene viewer.
//!
//! [`FirstPersonController`] turns key, click, pointer-capture and mouse-motion
//! events into a [`CameraPose`]: look angles from mouse deltas while the pointer
//! is captured, ground-plane walking from WASD / arrow keys, and a floor the
//! camera never sinks below.

pub mod camera;
pub mod config;
pub mod controller;
pub mod host;
pub mod input;
pub mod look;
pub mod motion;
pub mod telemetry;

pub use camera::{CameraPose, RotationOrder};
pub use config::{ConfigError, ControllerConfig};
pub use controller::FirstPersonController;
pub use host::{CaptureTarget, Channel, InputHost, SubscriptionId, SubscriptionTable};
pub use input::{AxisIntent, MovementIntent};
pub use look::{LookState, MouseDelta};
pub use telemetry::PoseReadout;
