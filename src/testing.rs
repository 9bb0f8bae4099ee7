//! Scriptable collaborators shared by the unit tests.

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::keycode::KeyCode;
use crate::platform::{DisplayReset, Hardware, PowerRail, WakeIrq};
use crate::port::RegisterPort;
use crate::report::InputSink;
use crate::{Config, GestureController};

pub(crate) fn init_log() {
  let _ = env_logger::builder().filter_level(log::LevelFilter::Debug).is_test(true).try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
  Write(u8, u8),
  Read(u8),
  Sleep(u32),
  WakeEnable,
  WakeDisable,
  Reset(bool),
  Rail(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fault;

/// Ordered record of every collaborator call.
#[derive(Clone, Default)]
pub(crate) struct Trace(Rc<RefCell<Vec<Op>>>);

impl Trace {
  fn push(&self, op: Op) {
    self.0.borrow_mut().push(op);
  }

  pub(crate) fn ops(&self) -> Vec<Op> {
    self.0.borrow().clone()
  }

  pub(crate) fn clear(&self) {
    self.0.borrow_mut().clear();
  }

  pub(crate) fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
    self.0.borrow().iter().filter(|op| pred(*op)).count()
  }

  pub(crate) fn register_io(&self) -> usize {
    self.count(|op| matches!(op, Op::Write(..) | Op::Read(_)))
  }
}

/// Register file stub. Reads echo the last write unless a scripted value is
/// queued or the address is stuck.
pub(crate) struct ScriptedPort {
  trace: Trace,
  regs: [u8; 256],
  script: VecDeque<Result<u8, Fault>>,
  stuck: Option<(u8, u8)>,
  fail_writes: bool,
}

impl ScriptedPort {
  pub(crate) fn new(trace: Trace) -> Self {
    Self { trace, regs: [0; 256], script: VecDeque::new(), stuck: None, fail_writes: false }
  }

  /// Every read of `addr` returns `value` regardless of writes.
  pub(crate) fn stuck(mut self, addr: u8, value: u8) -> Self {
    self.stuck = Some((addr, value));
    self
  }

  /// Queue read results consumed before falling back to the register file.
  pub(crate) fn script(mut self, reads: impl IntoIterator<Item = Result<u8, Fault>>) -> Self {
    self.script.extend(reads);
    self
  }

  pub(crate) fn failing_writes(mut self) -> Self {
    self.fail_writes = true;
    self
  }
}

impl RegisterPort for ScriptedPort {
  type Error = Fault;

  async fn read(&mut self, addr: u8) -> Result<u8, Self::Error> {
    self.trace.push(Op::Read(addr));
    if let Some(next) = self.script.pop_front() {
      return next;
    }
    match self.stuck {
      Some((stuck, value)) if stuck == addr => Ok(value),
      _ => Ok(self.regs[addr as usize]),
    }
  }

  async fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
    self.trace.push(Op::Write(addr, value));
    if self.fail_writes {
      return Err(Fault);
    }
    self.regs[addr as usize] = value;
    Ok(())
  }
}

/// Delay that records the requested time and yields once.
pub(crate) struct TraceDelay(pub(crate) Trace);

impl DelayNs for TraceDelay {
  async fn delay_ns(&mut self, ns: u32) {
    self.0.push(Op::Sleep(ns / 1_000_000));
    embassy_futures::yield_now().await;
  }

  async fn delay_ms(&mut self, ms: u32) {
    self.0.push(Op::Sleep(ms));
    embassy_futures::yield_now().await;
  }
}

pub(crate) struct TraceWake {
  trace: Trace,
  fail: bool,
}

impl WakeIrq for TraceWake {
  type Error = Fault;

  fn enable_wake(&mut self) -> Result<(), Self::Error> {
    self.trace.push(Op::WakeEnable);
    if self.fail {
      Err(Fault)
    } else {
      Ok(())
    }
  }

  fn disable_wake(&mut self) -> Result<(), Self::Error> {
    self.trace.push(Op::WakeDisable);
    if self.fail {
      Err(Fault)
    } else {
      Ok(())
    }
  }
}

pub(crate) struct TraceReset(Trace);

impl DisplayReset for TraceReset {
  type Error = Fault;

  fn hold_high(&mut self, hold: bool) -> Result<(), Self::Error> {
    self.0.push(Op::Reset(hold));
    Ok(())
  }
}

pub(crate) struct TraceRail {
  trace: Trace,
  fail: bool,
}

impl PowerRail for TraceRail {
  type Error = Fault;

  fn set_enabled(&mut self, on: bool) -> Result<(), Self::Error> {
    self.trace.push(Op::Rail(on));
    if self.fail {
      Err(Fault)
    } else {
      Ok(())
    }
  }
}

pub(crate) type TestHardware = Hardware<ScriptedPort, TraceDelay, TraceWake, TraceReset, TraceRail>;
pub(crate) type TestController = GestureController<NoopRawMutex, ScriptedPort, TraceDelay, TraceWake, TraceReset, TraceRail>;

/// Collaborator set with knobs for the advisory failure paths.
pub(crate) struct Bench {
  pub(crate) trace: Trace,
  pub(crate) wake_fails: bool,
  pub(crate) rail_fails: bool,
  pub(crate) config: Config,
}

impl Bench {
  pub(crate) fn new() -> Self {
    init_log();
    Self { trace: Trace::default(), wake_fails: false, rail_fails: false, config: Config::default() }
  }

  pub(crate) fn port(&self) -> ScriptedPort {
    ScriptedPort::new(self.trace.clone())
  }

  pub(crate) fn hardware(&self, port: ScriptedPort) -> TestHardware {
    Hardware::new(
      port,
      TraceDelay(self.trace.clone()),
      TraceWake { trace: self.trace.clone(), fail: self.wake_fails },
      TraceReset(self.trace.clone()),
      TraceRail { trace: self.trace.clone(), fail: self.rail_fails },
    )
  }

  pub(crate) fn controller(&self, port: ScriptedPort) -> TestController {
    GestureController::new(self.hardware(port), self.config)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SinkCall {
  Key(KeyCode, bool),
  Sync,
}

#[derive(Default)]
pub(crate) struct RecordingSink {
  pub(crate) calls: Vec<SinkCall>,
}

impl InputSink for RecordingSink {
  fn report_key(&mut self, code: KeyCode, pressed: bool) {
    self.calls.push(SinkCall::Key(code, pressed));
  }

  fn sync(&mut self) {
    self.calls.push(SinkCall::Sync);
  }
}
