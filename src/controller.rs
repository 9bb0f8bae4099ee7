use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use log::{debug, error, info, warn};

use crate::error::{ControllerError, DecodeError, ReportError, ToggleError};
use crate::keycode::{capabilities, KeyCode};
use crate::packet::{self, GestureEvent, REPORT_LEN};
use crate::platform::{DisplayReset, Hardware, PowerRail, WakeIrq};
use crate::port::RegisterPort;
use crate::regs::{Reg, DISABLE, ENABLE};
use crate::report::{EventReporter, InputSink};
use crate::state::{GestureMode, GestureState};
use crate::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
  Arm,
  Disarm,
}

impl Transition {
  const fn sentinel(self) -> u8 {
    match self {
      Self::Arm => ENABLE,
      Self::Disarm => DISABLE,
    }
  }
}

/// Everything guarded by the state lock: the state machine and the hardware it drives.
pub(crate) struct Inner<P, D, W, X, R> {
  pub(crate) state: GestureState,
  pub(crate) hw: Hardware<P, D, W, X, R>,
  pub(crate) config: Config,
}

impl<P, D, W, X, R> Inner<P, D, W, X, R>
where
  P: RegisterPort,
  D: DelayNs,
  W: WakeIrq,
  X: DisplayReset,
  R: PowerRail,
{
  async fn suspend(&mut self) -> Result<(), ControllerError> {
    info!("gesture suspend...");
    self.state.suspended = true;
    if let Err(e) = self.hw.reset.hold_high(true) {
      warn!("failed to hold display reset high: {:?}", e);
    }

    if !self.state.mode.is_armed() {
      info!("gesture is disabled");
      return Err(ControllerError::NotEnabled);
    }

    if self.program(Transition::Arm).await.is_none() {
      error!("enter into gesture (suspend) failed");
      self.state.active = false;
      return Err(ControllerError::DeviceNotResponding);
    }

    if let Err(e) = self.hw.wake.enable_wake() {
      warn!("enable wake irq failed: {:?}", e);
    }

    self.state.active = true;
    info!("enter into gesture (suspend) successfully");
    Ok(())
  }

  async fn resume(&mut self) -> Result<(), ControllerError> {
    info!("gesture resume...");
    self.state.suspended = false;

    let result = self.disarm().await;

    // Applied after the disarm sequence settles, whatever its outcome.
    if let Some(enable) = self.state.pending_toggle.take() {
      info!("applying deferred gesture toggle: {}", if enable { "enable" } else { "disable" });
      if let Err(e) = self.apply(enable) {
        warn!("deferred gesture toggle: {}", e);
      }
    }

    result
  }

  async fn disarm(&mut self) -> Result<(), ControllerError> {
    if !self.state.mode.is_armed() {
      if self.state.pending_toggle.is_some() {
        return Ok(());
      }
      debug!("gesture is disabled");
      return Err(ControllerError::NotEnabled);
    }

    if !self.state.active {
      debug!("gesture is not active, nothing to disarm");
      return Err(ControllerError::NotActive);
    }

    // Dropped before confirmation; a failed disarm must not look armed.
    self.state.active = false;
    if self.program(Transition::Disarm).await.is_none() {
      error!("exit gesture (resume) failed");
      return Err(ControllerError::DeviceNotResponding);
    }

    if let Err(e) = self.hw.wake.disable_wake() {
      warn!("disable wake irq failed: {:?}", e);
    }

    info!("resume from gesture successfully");
    Ok(())
  }

  /// Bounded write/sleep/read-back loop on the enable register. Returns the
  /// attempt number that confirmed, or `None` when the budget ran out.
  async fn program(&mut self, transition: Transition) -> Option<u8> {
    let target = transition.sentinel();

    for attempt in 1..=self.config.retry_attempts {
      if transition == Transition::Arm {
        self.write_geometry().await;
      }
      if let Err(e) = self.hw.port.write(Reg::GestureEnable.into(), target).await {
        debug!("attempt {}: enable write failed: {:?}", attempt, e);
      }

      self.hw.delay.delay_ms(self.config.retry_delay_ms).await;

      match self.hw.port.read(Reg::GestureEnable.into()).await {
        Ok(state) if state == target => return Some(attempt),
        Ok(state) => debug!("attempt {}: enable register reads {}, want {}", attempt, state, target),
        Err(e) => debug!("attempt {}: enable read failed: {:?}", attempt, e),
      }
    }

    None
  }

  async fn write_geometry(&mut self) {
    let value = self.config.geometry_value;
    for addr in self.config.geometry {
      if let Err(e) = self.hw.port.write(addr, value).await {
        debug!("geometry write 0x{:02x} failed: {:?}", addr, e);
      }
    }
  }

  async fn recover(&mut self) -> bool {
    if !(self.state.mode.is_armed() && self.state.active) {
      return false;
    }

    debug!("gesture recovery...");
    self.write_geometry().await;
    if let Err(e) = self.hw.port.write(Reg::GestureEnable.into(), ENABLE).await {
      warn!("gesture recovery: enable write failed: {:?}", e);
    }
    true
  }

  /// Mode change request; deferred while the device sleeps.
  pub(crate) fn request(&mut self, enable: bool) -> Result<(), ToggleError> {
    if self.state.suspended {
      if let Some(previous) = self.state.pending_toggle.replace(enable) {
        debug!("replacing deferred gesture toggle {} with {}", previous, enable);
      }
      info!("gesture mode will be {} on next wake", if enable { "enabled" } else { "disabled" });
      return Ok(());
    }

    self.apply(enable)
  }

  fn apply(&mut self, enable: bool) -> Result<(), ToggleError> {
    self.state.mode = GestureMode::from(enable);
    info!("{} gesture mode", if enable { "enable" } else { "disable" });

    if self.config.reset_follows_mode {
      if let Err(e) = self.hw.reset.hold_high(enable) {
        warn!("failed to change display reset hold: {:?}", e);
      }
    }

    self.hw.rail.set_enabled(enable).map_err(|e| {
      error!("failed to {} touch regulator: {:?}", if enable { "enable" } else { "disable" }, e);
      ToggleError::PowerRailFault
    })
  }
}

/// Gesture wake core: arms the controller on suspend, disarms on resume, and
/// turns interrupt-time reports into key events.
///
/// All state lives behind one async lock together with the hardware, so the
/// power-management path, the interrupt path, and [`crate::ModeToggle`] can
/// run from different tasks. Pick `M` to match: `CriticalSectionRawMutex`
/// across interrupt priorities, `NoopRawMutex` on a single executor.
pub struct GestureController<M: RawMutex, P, D, W, X, R> {
  pub(crate) inner: Mutex<M, Inner<P, D, W, X, R>>,
  last_event: BlockingMutex<M, Cell<Option<GestureEvent>>>,
  reporter: EventReporter,
  double_tap_node: bool,
}

impl<M: RawMutex, P, D, W, X, R> GestureController<M, P, D, W, X, R> {
  /// Gesture mode starts disarmed and the device awake.
  pub fn new(hw: Hardware<P, D, W, X, R>, config: Config) -> Self {
    Self {
      inner: Mutex::new(Inner { state: GestureState::new(), hw, config }),
      last_event: BlockingMutex::new(Cell::new(None)),
      reporter: EventReporter::new(config.double_tap_key),
      double_tap_node: config.double_tap_node,
    }
  }

  /// Release the hardware collaborators.
  pub fn into_inner(self) -> Hardware<P, D, W, X, R> {
    self.inner.into_inner().hw
  }

  /// Most recent decoded report.
  pub fn last_event(&self) -> Option<GestureEvent> {
    self.last_event.lock(|cell| cell.get())
  }

  pub fn reporter(&self) -> &EventReporter {
    &self.reporter
  }

  /// Keys the host input device must advertise.
  pub fn capabilities(&self) -> [KeyCode; 16] {
    capabilities(self.reporter.double_tap_key())
  }

  pub(crate) fn double_tap_node(&self) -> bool {
    self.double_tap_node
  }

  fn accept(&self, state: &GestureState, raw: &[u8; REPORT_LEN]) -> Result<GestureEvent, ReportError> {
    if !state.suspended {
      return Err(ReportError::NotSuspended);
    }
    if !state.mode.is_armed() {
      return Err(ReportError::NotArmed);
    }

    let event = match packet::decode(raw) {
      Ok(event) => event,
      Err(DecodeError::GestureNotEnabled) => {
        debug!("gesture not enabled in fw, don't process gesture");
        return Err(ReportError::Ignorable);
      }
    };

    debug!("gesture_id=0x{:02x}, point_num={}", event.classification.code(), event.point_count);
    self.last_event.lock(|cell| cell.set(Some(event)));
    Ok(event)
  }
}

impl<M, P, D, W, X, R> GestureController<M, P, D, W, X, R>
where
  M: RawMutex,
  P: RegisterPort,
  D: DelayNs,
  W: WakeIrq,
  X: DisplayReset,
  R: PowerRail,
{
  /// Power-management suspend hook: arm gesture detection.
  pub async fn suspend(&self) -> Result<(), ControllerError> {
    self.inner.lock().await.suspend().await
  }

  /// Power-management resume hook: disarm gesture detection and apply any
  /// toggle deferred while asleep.
  pub async fn resume(&self) -> Result<(), ControllerError> {
    self.inner.lock().await.resume().await
  }

  /// Decode a report read on interrupt while suspended.
  pub async fn on_report(&self, raw: &[u8; REPORT_LEN]) -> Result<GestureEvent, ReportError> {
    let inner = self.inner.lock().await;
    self.accept(&inner.state, raw)
  }

  /// Interrupt handler body: [`Self::on_report`] followed by key reporting.
  ///
  /// The state lock is held until the keys are emitted, so a concurrent
  /// [`Self::resume`] either runs first and the report is refused, or runs
  /// after the keys went out.
  pub async fn handle_report<S: InputSink + ?Sized>(
    &self,
    raw: &[u8; REPORT_LEN],
    sink: &mut S,
  ) -> Result<GestureEvent, ReportError> {
    let inner = self.inner.lock().await;
    let event = self.accept(&inner.state, raw)?;
    self.reporter.report(&event, sink);
    Ok(event)
  }

  /// Reprogram the gesture registers after a controller reset while armed
  /// and active. Returns whether anything was written.
  pub async fn recover(&self) -> bool {
    self.inner.lock().await.recover().await
  }

  /// Current state snapshot.
  pub async fn state(&self) -> GestureState {
    self.inner.lock().await.state
  }

  pub async fn is_gesture_mode(&self) -> bool {
    self.inner.lock().await.state.mode.is_armed()
  }
}
