/******************************************************************************
 * FocalTech FT8719 gesture register window                                   *
 * ========================================================================== *
 *   0xD0        gesture enable (1 = gesture firmware active, 0 = normal)     *
 *   0xD1..0xD8  gesture geometry / zone enables, 0xFF turns every zone on    *
*******************************************************************************/

/// Default 7-bit I²C address of FocalTech touch controllers.
pub const I2C_ADDR: u8 = 0x38;

/// Value of the enable register (and of report byte 0) while gesture mode is on.
pub const ENABLE: u8 = 1;
/// Value of the enable register while gesture mode is off.
pub const DISABLE: u8 = 0;

/// Value written to every geometry register while arming.
pub const GEOMETRY_ALL: u8 = 0xFF;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reg {
  GestureEnable = 0xD0,
  GeometryD1 = 0xD1,
  GeometryD2 = 0xD2,
  GeometryD5 = 0xD5,
  GeometryD6 = 0xD6,
  GeometryD7 = 0xD7,
  GeometryD8 = 0xD8,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

/// Geometry registers programmed during arming, in write order.
pub const GEOMETRY_REGS: [u8; 6] = [
  Reg::GeometryD1 as u8,
  Reg::GeometryD2 as u8,
  Reg::GeometryD5 as u8,
  Reg::GeometryD6 as u8,
  Reg::GeometryD7 as u8,
  Reg::GeometryD8 as u8,
];
