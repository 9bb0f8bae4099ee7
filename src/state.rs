/// User/policy intent for gesture wake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureMode {
  Armed,
  #[default]
  Disarmed,
}

impl GestureMode {
  pub const fn is_armed(self) -> bool {
    matches!(self, Self::Armed)
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Armed => "On",
      Self::Disarmed => "Off",
    }
  }
}

impl From<bool> for GestureMode {
  fn from(enable: bool) -> Self {
    if enable {
      Self::Armed
    } else {
      Self::Disarmed
    }
  }
}

/// Snapshot of the gesture state machine.
///
/// - `active` implies `mode == Armed`.
/// - `pending_toggle` only exists while `suspended`; every resume clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureState {
  pub(crate) mode: GestureMode,
  pub(crate) active: bool,
  pub(crate) pending_toggle: Option<bool>,
  pub(crate) suspended: bool,
}

impl GestureState {
  pub const fn new() -> Self {
    Self { mode: GestureMode::Disarmed, active: false, pending_toggle: None, suspended: false }
  }

  pub const fn mode(&self) -> GestureMode {
    self.mode
  }

  /// Gesture firmware confirmed running on the controller.
  pub const fn is_active(&self) -> bool {
    self.active
  }

  /// Toggle recorded while asleep, applied on the next resume.
  pub const fn pending_toggle(&self) -> Option<bool> {
    self.pending_toggle
  }

  pub const fn is_suspended(&self) -> bool {
    self.suspended
  }
}
