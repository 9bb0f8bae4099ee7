//! Read/write accessors for inspecting and steering gesture mode at runtime.
//!
//! The [`core::fmt::Display`] impls render the same text the vendor sysfs
//! nodes print, so existing tooling that scrapes them keeps working.

use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::error::DiagError;
use crate::packet::{GestureEvent, GestureId, Point, MAX_POINTS};
use crate::platform::{DisplayReset, PowerRail, WakeIrq};
use crate::port::RegisterPort;
use crate::regs::Reg;
use crate::state::GestureMode;
use crate::GestureController;

/// Mode intent plus the live value of the enable register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeStatus {
  pub mode: GestureMode,
  pub enable_register: u8,
}

impl fmt::Display for ModeStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Gesture Mode:{}", self.mode.as_str())?;
    writeln!(f, "Reg(0x{:02X})={}", u8::from(Reg::GestureEnable), self.enable_register)
  }
}

/// Last decoded gesture, all six point slots included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointBuffer {
  pub classification: GestureId,
  pub point_count: u8,
  pub points: [Point; MAX_POINTS],
}

impl From<GestureEvent> for PointBuffer {
  fn from(event: GestureEvent) -> Self {
    Self { classification: event.classification, point_count: event.point_count, points: event.points }
  }
}

impl fmt::Display for PointBuffer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Gesture ID:{}", self.classification.code())?;
    writeln!(f, "Gesture PointNum:{}", self.point_count)?;
    writeln!(f, "Gesture Points Buffer:")?;
    for (i, p) in self.points.iter().enumerate() {
      write!(f, "{:3}({:4},{:4}) ", i, p.x, p.y)?;
      if (i + 1) % 4 == 0 {
        writeln!(f)?;
      }
    }
    writeln!(f)
  }
}

/// Runtime inspection of gesture mode and the last decoded gesture.
pub struct Diagnostics<'a, M: RawMutex, P, D, W, X, R> {
  controller: &'a GestureController<M, P, D, W, X, R>,
}

impl<M: RawMutex, P, D, W, X, R> GestureController<M, P, D, W, X, R> {
  pub fn diagnostics(&self) -> Diagnostics<'_, M, P, D, W, X, R> {
    Diagnostics { controller: self }
  }
}

impl<'a, M, P, D, W, X, R> Diagnostics<'a, M, P, D, W, X, R>
where
  M: RawMutex,
  P: RegisterPort,
  D: DelayNs,
  W: WakeIrq,
  X: DisplayReset,
  R: PowerRail,
{
  /// Mode intent and a fresh read of the enable register.
  pub async fn mode(&self) -> Result<ModeStatus, DiagError<P::Error>> {
    let mut inner = self.controller.inner.lock().await;
    let enable_register = inner.hw.port.read(Reg::GestureEnable.into()).await.map_err(DiagError::Io)?;
    Ok(ModeStatus { mode: inner.state.mode, enable_register })
  }

  /// Turn gesture wake on or off; same semantics as [`crate::ModeToggle::request`].
  pub async fn store_mode(&self, enable: bool) -> Result<(), DiagError<P::Error>> {
    self.controller.toggle().request(enable).await.map_err(DiagError::from)
  }

  /// Text form of [`Self::store_mode`]: `1`/`on` enables, `0`/`off` disables.
  pub async fn store_mode_str(&self, input: &str) -> Result<(), DiagError<P::Error>> {
    match input.trim() {
      "1" | "on" | "ON" | "On" => self.store_mode(true).await,
      "0" | "off" | "OFF" | "Off" => self.store_mode(false).await,
      _ => Err(DiagError::InvalidInput),
    }
  }

  /// Last decoded gesture, or an all-zero buffer before the first one.
  pub fn points(&self) -> PointBuffer {
    self.controller.last_event().unwrap_or_default().into()
  }

  /// The point buffer is read-only.
  pub fn store_points(&self, _input: &[u8]) -> Result<(), DiagError<P::Error>> {
    Err(DiagError::PermissionDenied)
  }

  /// Integer double-tap accessor: `1` while armed, `0` otherwise.
  pub async fn double_tap(&self) -> Result<u8, DiagError<P::Error>> {
    if !self.controller.double_tap_node() {
      return Err(DiagError::Unsupported);
    }
    Ok(self.controller.is_gesture_mode().await as u8)
  }

  /// Any non-zero value arms gesture wake.
  pub async fn store_double_tap(&self, value: i32) -> Result<(), DiagError<P::Error>> {
    if !self.controller.double_tap_node() {
      return Err(DiagError::Unsupported);
    }
    self.store_mode(value != 0).await
  }
}
