use core::fmt;

/// Outcome of [`crate::decode`] when a report carries no gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
  /// Byte 0 of the report is not the enable sentinel; an ordinary touch frame.
  GestureNotEnabled,
}

/// Errors from arming on suspend and disarming on resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
  /// Gesture mode is off; no register I/O was performed.
  NotEnabled,
  /// Gesture firmware was never confirmed active, nothing to tear down.
  NotActive,
  /// The enable register did not read back the requested value within the retry budget.
  DeviceNotResponding,
}

/// Errors from the interrupt-time report path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportError {
  /// Reports are only interpreted while the device is suspended.
  NotSuspended,
  /// Gesture mode is off.
  NotArmed,
  /// Ordinary touch frame, nothing to report.
  Ignorable,
}

/// Errors from a mode toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleError {
  /// The supply rail rejected the change. The mode itself was still updated.
  PowerRailFault,
}

/// Errors from the diagnostics surface. `E` is the register port error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagError<E> {
  /// Register transport failed.
  Io(E),
  /// The accessor is read-only.
  PermissionDenied,
  /// The accessor is not enabled in [`crate::Config`].
  Unsupported,
  /// The written value could not be parsed.
  InvalidInput,
  /// The write was routed to a mode toggle which failed.
  Toggle(ToggleError),
}

impl<E> From<ToggleError> for DiagError<E> {
  fn from(e: ToggleError) -> Self {
    Self::Toggle(e)
  }
}

impl fmt::Display for DecodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::GestureNotEnabled => f.write_str("gesture not enabled in firmware"),
    }
  }
}

impl fmt::Display for ControllerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotEnabled => f.write_str("gesture mode is disabled"),
      Self::NotActive => f.write_str("gesture mode is not active"),
      Self::DeviceNotResponding => f.write_str("controller did not confirm gesture enable register"),
    }
  }
}

impl fmt::Display for ReportError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotSuspended => f.write_str("device is not suspended"),
      Self::NotArmed => f.write_str("gesture mode is disabled"),
      Self::Ignorable => f.write_str("report carries no gesture"),
    }
  }
}

impl fmt::Display for ToggleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::PowerRailFault => f.write_str("power rail change rejected"),
    }
  }
}

impl<E: fmt::Debug> fmt::Display for DiagError<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "register access failed: {:?}", e),
      Self::PermissionDenied => f.write_str("read-only accessor"),
      Self::Unsupported => f.write_str("accessor not available"),
      Self::InvalidInput => f.write_str("invalid value"),
      Self::Toggle(e) => write!(f, "{}", e),
    }
  }
}
