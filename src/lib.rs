#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` wake-gesture core for the FocalTech FT8719 touch
//! controller.
//!
//! While the display is off the controller keeps scanning and can recognise
//! swipes, a double tap, and traced letters. This crate owns the part of the
//! driver with real protocol and state:
//!
//! - Arming gesture firmware on suspend and disarming it on resume, with a
//!   bounded write/sleep/read-back confirmation loop
//! - Deferring enable/disable requests that arrive while the device sleeps
//! - Decoding the 28 byte gesture report into a [`GestureEvent`]
//! - Emitting a wake + gesture key pair through an [`InputSink`]
//!
//! Register access goes through [`RegisterPort`] (an
//! `embedded-hal-async` I²C adapter is provided), sleeping through
//! `embedded_hal_async::delay::DelayNs`.
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use embedded_hal_async::{delay::DelayNs, i2c::{I2c, SevenBitAddress}};
//! use ft8719_gesture::{Config, GestureController, Hardware, I2cRegisters, InputSink, NoRail, NoReset, NoWake, REPORT_LEN};
//!
//! async fn example<I2C, D, S>(i2c: I2C, delay: D, sink: &mut S, report: [u8; REPORT_LEN])
//! where
//!   I2C: I2c<SevenBitAddress>,
//!   D: DelayNs,
//!   S: InputSink,
//! {
//!   let hw = Hardware::new(I2cRegisters::new(i2c), delay, NoWake, NoReset, NoRail);
//!   let gestures: GestureController<CriticalSectionRawMutex, _, _, _, _, _> =
//!     GestureController::new(hw, Config::default());
//!
//!   _ = gestures.toggle().request(true).await;
//!   _ = gestures.suspend().await;
//!   // on every touch interrupt while asleep:
//!   _ = gestures.handle_report(&report, sink).await;
//!   _ = gestures.resume().await;
//! }
//! ```
mod config;
mod controller;
mod diag;
mod error;
mod keycode;
mod packet;
mod platform;
mod port;
mod regs;
mod report;
mod state;
#[cfg(test)]
mod testing;
mod toggle;

pub use config::Config;
pub use controller::GestureController;
pub use diag::{Diagnostics, ModeStatus, PointBuffer};
pub use error::{ControllerError, DecodeError, DiagError, ReportError, ToggleError};
pub use keycode::{capabilities, gesture_key, KeyCode};
pub use packet::{decode, GestureEvent, GestureId, Point, MAX_POINTS, REPORT_LEN};
pub use platform::{DisplayReset, Hardware, NoRail, NoReset, NoWake, PowerRail, ResetHold, WakeIrq};
pub use port::{I2cRegisters, RegisterPort};
pub use regs::{DISABLE, ENABLE, GEOMETRY_ALL, GEOMETRY_REGS, I2C_ADDR};
pub use report::{EventReporter, InputSink};
pub use state::{GestureMode, GestureState};
pub use toggle::{ModeToggle, EV_SYN, SYN_CONFIG, WAKEUP_OFF, WAKEUP_ON};
