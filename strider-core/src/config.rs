use serde::Deserialize;
use thiserror::Error;

//
// ──────────────────────────────────────────────────────────────
//   Defaults
// ──────────────────────────────────────────────────────────────
//

pub const DEFAULT_SPEED: f32 = 0.02; // world units per frame
pub const DEFAULT_MIN_HEIGHT: f32 = 1.0; // world units above Y = 0

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError
{
  #[error("speed must be a finite, non-negative number (got {0})")]
  InvalidSpeed(f32),

  #[error("min_height must be a finite number (got {0})")]
  InvalidMinHeight(f32),
}

/// Construction-time settings of one controller instance.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig
{
  speed: f32,
  min_height: f32,
}

impl Default for ControllerConfig
{
  fn default() -> Self
  {
    Self { speed: DEFAULT_SPEED, min_height: DEFAULT_MIN_HEIGHT }
  }
}

impl ControllerConfig
{
  pub fn new(speed: f32, min_height: f32) -> Result<Self, ConfigError>
  {
    Self { speed, min_height }.validated()
  }

  /// Checks a config obtained through deserialization.
  pub fn validated(self) -> Result<Self, ConfigError>
  {
    if !self.speed.is_finite() || self.speed < 0.0
    {
      return Err(ConfigError::InvalidSpeed(self.speed));
    }

    if !self.min_height.is_finite()
    {
      return Err(ConfigError::InvalidMinHeight(self.min_height));
    }

    Ok(self)
  }

  pub fn speed(&self) -> f32
  {
    self.speed
  }

  pub fn min_height(&self) -> f32
  {
    self.min_height
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn defaults()
  {
    let config = ControllerConfig::default();
    assert_eq!(config.speed(), 0.02);
    assert_eq!(config.min_height(), 1.0);
  }

  #[test]
  fn rejects_bad_values()
  {
    assert_eq!(ControllerConfig::new(-1.0, 1.0), Err(ConfigError::InvalidSpeed(-1.0)));
    assert!(matches!(ControllerConfig::new(f32::NAN, 1.0), Err(ConfigError::InvalidSpeed(_))));
    assert_eq!(
      ControllerConfig::new(0.1, f32::INFINITY),
      Err(ConfigError::InvalidMinHeight(f32::INFINITY))
    );
    assert!(ControllerConfig::new(0.0, -5.0).is_ok());
  }

  #[test]
  fn partial_settings_fill_in_defaults()
  {
    let config: ControllerConfig = serde_json::from_str(r#"{ "min_height": 1.5 }"#).unwrap();
    let config = config.validated().unwrap();
    assert_eq!(config.speed(), DEFAULT_SPEED);
    assert_eq!(config.min_height(), 1.5);
  }

  #[test]
  fn error_messages_name_the_field()
  {
    let err = ControllerConfig::new(-2.0, 0.0).unwrap_err();
    assert!(err.to_string().starts_with("speed"));
  }
}
