use crate::keycode::KeyCode;
use crate::regs::{GEOMETRY_ALL, GEOMETRY_REGS};

/// Static gesture core configuration.
///
/// Defaults match the FT8719 firmware: five arm/disarm attempts one
/// millisecond apart, all six geometry registers set to `0xFF`.
///
/// # Example
/// ```no_run
/// use ft8719_gesture::{Config, KeyCode};
///
/// let config = Config::default()
///   .with_retry(8, 2)
///   .with_double_tap_key(KeyCode(0x2FF))
///   .with_double_tap_node(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Write/sleep/read-back cycles before giving up on the enable register.
  pub retry_attempts: u8,
  /// Sleep between the write and the read-back, in milliseconds.
  pub retry_delay_ms: u32,
  /// Registers written with `geometry_value` before enabling gesture mode.
  pub geometry: [u8; 6],
  pub geometry_value: u8,
  /// Key emitted for the double-click gesture.
  pub double_tap_key: KeyCode,
  /// Expose the integer double-tap accessor on the diagnostics surface.
  pub double_tap_node: bool,
  /// Drive the display reset hold together with awake mode toggles.
  pub reset_follows_mode: bool,
}

impl Config {
  pub const fn new() -> Self {
    Self {
      retry_attempts: 5,
      retry_delay_ms: 1,
      geometry: GEOMETRY_REGS,
      geometry_value: GEOMETRY_ALL,
      double_tap_key: KeyCode::KEY_DOUBLE_TAP,
      double_tap_node: false,
      reset_follows_mode: false,
    }
  }

  pub const fn with_retry(mut self, attempts: u8, delay_ms: u32) -> Self {
    self.retry_attempts = attempts;
    self.retry_delay_ms = delay_ms;
    self
  }

  pub const fn with_geometry(mut self, regs: [u8; 6], value: u8) -> Self {
    self.geometry = regs;
    self.geometry_value = value;
    self
  }

  pub const fn with_double_tap_key(mut self, key: KeyCode) -> Self {
    self.double_tap_key = key;
    self
  }

  pub const fn with_double_tap_node(mut self, enabled: bool) -> Self {
    self.double_tap_node = enabled;
    self
  }

  pub const fn with_reset_follows_mode(mut self, enabled: bool) -> Self {
    self.reset_follows_mode = enabled;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
