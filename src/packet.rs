//! Gesture report layout and decoding.
//!
//! The controller emits a fixed 28 byte report on every interrupt while the
//! gesture firmware runs:
//!
//! | offset | meaning                                   |
//! |--------|-------------------------------------------|
//! | 0      | gesture enable flag (`1` while armed)     |
//! | 1      | reserved                                  |
//! | 2      | gesture code                              |
//! | 3      | number of valid points                    |
//! | 4..28  | six point records `[xh, xl, yh, yl]`      |
//!
//! Only the low nibble of `xh`/`yh` is meaningful, giving 12-bit coordinates.

use crate::error::DecodeError;
use crate::regs::ENABLE;

/// Maximum number of trace points carried by one report.
pub const MAX_POINTS: usize = 6;
const HEADER_LEN: usize = 4;
const POINT_LEN: usize = 4;
/// Length of a raw gesture report in bytes.
pub const REPORT_LEN: usize = HEADER_LEN + POINT_LEN * MAX_POINTS;

/// Firmware gesture codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureId {
  Left,
  Right,
  Up,
  Down,
  DoubleClick,
  O,
  W,
  M,
  E,
  C,
  Z,
  L,
  S,
  V,
  /// Code outside the fixed table, kept verbatim.
  Unrecognized(u8),
}

impl GestureId {
  /// All recognised gestures, in firmware code order.
  pub const ALL: [GestureId; 14] = [
    GestureId::Left,
    GestureId::Right,
    GestureId::Up,
    GestureId::Down,
    GestureId::DoubleClick,
    GestureId::O,
    GestureId::W,
    GestureId::M,
    GestureId::E,
    GestureId::C,
    GestureId::Z,
    GestureId::L,
    GestureId::S,
    GestureId::V,
  ];

  pub const fn from_code(code: u8) -> Self {
    match code {
      0x20 => Self::Left,
      0x21 => Self::Right,
      0x22 => Self::Up,
      0x23 => Self::Down,
      0x24 => Self::DoubleClick,
      0x30 => Self::O,
      0x31 => Self::W,
      0x32 => Self::M,
      0x33 => Self::E,
      0x34 => Self::C,
      0x41 => Self::Z,
      0x44 => Self::L,
      0x46 => Self::S,
      0x54 => Self::V,
      other => Self::Unrecognized(other),
    }
  }

  pub const fn code(self) -> u8 {
    match self {
      Self::Left => 0x20,
      Self::Right => 0x21,
      Self::Up => 0x22,
      Self::Down => 0x23,
      Self::DoubleClick => 0x24,
      Self::O => 0x30,
      Self::W => 0x31,
      Self::M => 0x32,
      Self::E => 0x33,
      Self::C => 0x34,
      Self::Z => 0x41,
      Self::L => 0x44,
      Self::S => 0x46,
      Self::V => 0x54,
      Self::Unrecognized(code) => code,
    }
  }

  pub const fn is_recognized(self) -> bool {
    !matches!(self, Self::Unrecognized(_))
  }

  pub const fn is_swipe(self) -> bool {
    matches!(self, Self::Left | Self::Right | Self::Up | Self::Down)
  }

  pub const fn is_letter(self) -> bool {
    self.is_recognized() && !self.is_swipe() && !matches!(self, Self::DoubleClick)
  }
}

impl From<u8> for GestureId {
  fn from(code: u8) -> Self {
    Self::from_code(code)
  }
}

impl From<GestureId> for u8 {
  fn from(id: GestureId) -> Self {
    id.code()
  }
}

/// One 12-bit trace coordinate pair.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
  pub x: u16,
  pub y: u16,
}

impl Point {
  pub const fn new(x: u16, y: u16) -> Self {
    Self { x, y }
  }

  fn from_record(record: &[u8]) -> Self {
    Self::new(coordinate(record[0], record[1]), coordinate(record[2], record[3]))
  }
}

impl core::fmt::Debug for Point {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[inline]
const fn coordinate(high: u8, low: u8) -> u16 {
  (((high & 0x0F) as u16) << 8) | low as u16
}

/// A decoded gesture report.
///
/// `points` beyond `point_count` are zero. `point_count` is kept exactly as
/// reported and may exceed [`MAX_POINTS`]; use [`GestureEvent::points`] for
/// the valid slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureEvent {
  pub classification: GestureId,
  pub point_count: u8,
  pub points: [Point; MAX_POINTS],
}

impl GestureEvent {
  pub const fn new(classification: GestureId, point_count: u8, points: [Point; MAX_POINTS]) -> Self {
    Self { classification, point_count, points }
  }

  /// Points that carry meaning for this gesture.
  pub fn points(&self) -> &[Point] {
    &self.points[..self.valid_points()]
  }

  fn valid_points(&self) -> usize {
    usize::from(self.point_count).min(MAX_POINTS)
  }
}

impl Default for GestureEvent {
  fn default() -> Self {
    Self::new(GestureId::Unrecognized(0), 0, [Point::default(); MAX_POINTS])
  }
}

/// Decode a raw report.
///
/// [`DecodeError::GestureNotEnabled`] is the normal outcome for ordinary touch
/// frames and means there is nothing to report.
pub fn decode(raw: &[u8; REPORT_LEN]) -> Result<GestureEvent, DecodeError> {
  if raw[0] != ENABLE {
    return Err(DecodeError::GestureNotEnabled);
  }

  let classification = GestureId::from_code(raw[2]);
  let point_count = raw[3];

  let mut event = GestureEvent::new(classification, point_count, [Point::default(); MAX_POINTS]);
  let valid = event.valid_points();
  for (slot, record) in event.points[..valid].iter_mut().zip(raw[HEADER_LEN..].chunks_exact(POINT_LEN)) {
    *slot = Point::from_record(record);
  }

  Ok(event)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn report(flag: u8, code: u8, count: u8) -> [u8; REPORT_LEN] {
    let mut raw = [0u8; REPORT_LEN];
    raw[0] = flag;
    raw[2] = code;
    raw[3] = count;
    raw
  }

  #[test]
  fn decodes_letter_o_with_single_point() {
    let mut raw = report(ENABLE, 0x30, 1);
    raw[4..8].copy_from_slice(&[0x01, 0x02, 0x00, 0x03]);

    let event = decode(&raw).unwrap();
    assert_eq!(event.classification, GestureId::O);
    assert_eq!(event.point_count, 1);
    assert_eq!(event.points(), &[Point::new(0x102, 0x003)]);
  }

  #[test]
  fn high_nibble_is_masked() {
    let mut raw = report(ENABLE, 0x24, 1);
    raw[4..8].copy_from_slice(&[0xFA, 0xBC, 0x3F, 0xFF]);

    let event = decode(&raw).unwrap();
    assert_eq!(event.points()[0], Point::new(0xABC, 0xFFF));
  }

  #[test]
  fn disabled_flag_is_never_decoded() {
    for flag in [0u8, 2, 0x7F, 0xFF] {
      let mut raw = [0xAAu8; REPORT_LEN];
      raw[0] = flag;
      assert_eq!(decode(&raw), Err(DecodeError::GestureNotEnabled));
    }
  }

  #[test]
  fn unknown_codes_decode_as_unrecognized() {
    for code in 0..=u8::MAX {
      let event = decode(&report(ENABLE, code, 0)).unwrap();
      let known = GestureId::ALL.iter().any(|g| g.code() == code);
      assert_eq!(event.classification.is_recognized(), known);
      if !known {
        assert_eq!(event.classification, GestureId::Unrecognized(code));
      }
    }
  }

  #[test]
  fn points_past_count_stay_zero() {
    let mut raw = report(ENABLE, 0x20, 2);
    for b in raw[4..].iter_mut() {
      *b = 0x11;
    }

    let event = decode(&raw).unwrap();
    assert_eq!(event.points().len(), 2);
    assert!(event.points[2..].iter().all(|p| *p == Point::default()));
  }

  #[test]
  fn oversized_count_is_clamped() {
    let event = decode(&report(ENABLE, 0x21, 200)).unwrap();
    assert_eq!(event.point_count, 200);
    assert_eq!(event.points().len(), MAX_POINTS);
  }

  #[test]
  fn code_table_round_trips() {
    for id in GestureId::ALL {
      assert_eq!(GestureId::from_code(id.code()), id);
    }
    assert!(GestureId::Up.is_swipe());
    assert!(GestureId::V.is_letter());
    assert!(!GestureId::DoubleClick.is_letter());
  }
}
