use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use log::debug;

use crate::error::ToggleError;
use crate::platform::{DisplayReset, PowerRail, WakeIrq};
use crate::port::RegisterPort;
use crate::GestureController;

/// `EV_SYN` event type of the host input layer.
pub const EV_SYN: u16 = 0x00;
/// `SYN_CONFIG` code, used by gesture policy services to switch wake gestures.
pub const SYN_CONFIG: u16 = 0x01;
/// Policy value asking to turn gesture wake off.
pub const WAKEUP_OFF: i32 = 4;
/// Policy value asking to turn gesture wake on.
pub const WAKEUP_ON: i32 = 5;

/// Entry point for enable/disable requests from user space or platform policy.
///
/// While the device is awake the mode changes immediately together with the
/// touch supply rail. While it sleeps the request is recorded and applied by
/// the next [`GestureController::resume`]; later requests replace earlier ones.
pub struct ModeToggle<'a, M: RawMutex, P, D, W, X, R> {
  controller: &'a GestureController<M, P, D, W, X, R>,
}

impl<M: RawMutex, P, D, W, X, R> GestureController<M, P, D, W, X, R> {
  pub fn toggle(&self) -> ModeToggle<'_, M, P, D, W, X, R> {
    ModeToggle { controller: self }
  }
}

impl<'a, M, P, D, W, X, R> ModeToggle<'a, M, P, D, W, X, R>
where
  M: RawMutex,
  P: RegisterPort,
  D: DelayNs,
  W: WakeIrq,
  X: DisplayReset,
  R: PowerRail,
{
  /// Request gesture wake on or off.
  ///
  /// A [`ToggleError::PowerRailFault`] still leaves the new mode in place.
  pub async fn request(&self, enable: bool) -> Result<(), ToggleError> {
    self.controller.inner.lock().await.request(enable)
  }

  /// Input-device event hook used by gesture policy services:
  /// `EV_SYN`/`SYN_CONFIG` with [`WAKEUP_ON`] or [`WAKEUP_OFF`]. Anything else is
  /// ignored. Returns whether the event was a toggle.
  pub async fn on_policy_event(&self, kind: u16, code: u16, value: i32) -> Result<bool, ToggleError> {
    if kind != EV_SYN || code != SYN_CONFIG {
      return Ok(false);
    }

    match value {
      WAKEUP_OFF => self.request(false).await.map(|_| true),
      WAKEUP_ON => self.request(true).await.map(|_| true),
      other => {
        debug!("ignoring gesture policy value {}", other);
        Ok(false)
      }
    }
  }

  pub async fn is_gesture_mode(&self) -> bool {
    self.controller.is_gesture_mode().await
  }
}
