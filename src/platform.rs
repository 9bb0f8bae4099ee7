//! Board-level collaborators the gesture core drives around register I/O.
//!
//! None of these carry gesture logic. Failures are advisory: the core logs
//! them and carries on, so implementations only need to report what went
//! wrong.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

/// Marks the touch interrupt line as a wake source for the host.
pub trait WakeIrq {
  type Error: core::fmt::Debug;

  fn enable_wake(&mut self) -> Result<(), Self::Error>;

  fn disable_wake(&mut self) -> Result<(), Self::Error>;
}

/// Holds the panel reset line high so the touch side keeps running while the
/// display is off.
pub trait DisplayReset {
  type Error: core::fmt::Debug;

  fn hold_high(&mut self, hold: bool) -> Result<(), Self::Error>;
}

/// Switches the touch controller supply needed for gesture scanning.
pub trait PowerRail {
  type Error: core::fmt::Debug;

  fn set_enabled(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// [`DisplayReset`] on a GPIO: held drives the pin high, released drives it low.
pub struct ResetHold<P> {
  pin: P,
}

impl<P> ResetHold<P> {
  pub fn new(pin: P) -> Self {
    Self { pin }
  }

  pub fn into_inner(self) -> P {
    self.pin
  }
}

impl<P: OutputPin> DisplayReset for ResetHold<P> {
  type Error = P::Error;

  fn hold_high(&mut self, hold: bool) -> Result<(), Self::Error> {
    if hold {
      self.pin.set_high()
    } else {
      self.pin.set_low()
    }
  }
}

/// Wake source that cannot be configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWake;

impl WakeIrq for NoWake {
  type Error = Infallible;

  fn enable_wake(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  fn disable_wake(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }
}

/// Board without a controllable panel reset line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoReset;

impl DisplayReset for NoReset {
  type Error = Infallible;

  fn hold_high(&mut self, _hold: bool) -> Result<(), Self::Error> {
    Ok(())
  }
}

/// Always-on touch supply.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRail;

impl PowerRail for NoRail {
  type Error = Infallible;

  fn set_enabled(&mut self, _on: bool) -> Result<(), Self::Error> {
    Ok(())
  }
}

/// Every collaborator the controller owns, bundled so it can sit behind one lock.
pub struct Hardware<P, D, W, X, R> {
  pub port: P,
  pub delay: D,
  pub wake: W,
  pub reset: X,
  pub rail: R,
}

impl<P, D, W, X, R> Hardware<P, D, W, X, R> {
  pub fn new(port: P, delay: D, wake: W, reset: X, rail: R) -> Self {
    Self { port, delay, wake, reset, rail }
  }
}
