use crate::packet::GestureId;

/// Host input key code (Linux `input-event-codes` numbering).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u16);

impl KeyCode {
  pub const KEY_W: KeyCode = KeyCode(17);
  pub const KEY_E: KeyCode = KeyCode(18);
  pub const KEY_O: KeyCode = KeyCode(24);
  pub const KEY_S: KeyCode = KeyCode(31);
  pub const KEY_L: KeyCode = KeyCode(38);
  pub const KEY_Z: KeyCode = KeyCode(44);
  pub const KEY_C: KeyCode = KeyCode(46);
  pub const KEY_V: KeyCode = KeyCode(47);
  pub const KEY_M: KeyCode = KeyCode(50);
  pub const KEY_UP: KeyCode = KeyCode(103);
  pub const KEY_LEFT: KeyCode = KeyCode(105);
  pub const KEY_RIGHT: KeyCode = KeyCode(106);
  pub const KEY_DOWN: KeyCode = KeyCode(108);
  pub const KEY_POWER: KeyCode = KeyCode(116);
  pub const KEY_WAKEUP: KeyCode = KeyCode(143);
  /// Vendor double-tap code. Override with [`crate::Config::with_double_tap_key`]
  /// if the host input layer uses a different value.
  pub const KEY_DOUBLE_TAP: KeyCode = KeyCode(0x143);
}

impl From<KeyCode> for u16 {
  fn from(k: KeyCode) -> Self {
    k.0
  }
}

/// Fixed gesture to key mapping. `double_tap` stands in for the vendor code.
pub const fn gesture_key(id: GestureId, double_tap: KeyCode) -> Option<KeyCode> {
  match id {
    GestureId::Left => Some(KeyCode::KEY_LEFT),
    GestureId::Right => Some(KeyCode::KEY_RIGHT),
    GestureId::Up => Some(KeyCode::KEY_UP),
    GestureId::Down => Some(KeyCode::KEY_DOWN),
    GestureId::DoubleClick => Some(double_tap),
    GestureId::O => Some(KeyCode::KEY_O),
    GestureId::W => Some(KeyCode::KEY_W),
    GestureId::M => Some(KeyCode::KEY_M),
    GestureId::E => Some(KeyCode::KEY_E),
    GestureId::C => Some(KeyCode::KEY_C),
    GestureId::Z => Some(KeyCode::KEY_Z),
    GestureId::L => Some(KeyCode::KEY_L),
    GestureId::S => Some(KeyCode::KEY_S),
    GestureId::V => Some(KeyCode::KEY_V),
    GestureId::Unrecognized(_) => None,
  }
}

/// Keys the host input device must advertise: power, wakeup, then every gesture key.
pub fn capabilities(double_tap: KeyCode) -> [KeyCode; 16] {
  [
    KeyCode::KEY_POWER,
    KeyCode::KEY_WAKEUP,
    double_tap,
    KeyCode::KEY_UP,
    KeyCode::KEY_DOWN,
    KeyCode::KEY_LEFT,
    KeyCode::KEY_RIGHT,
    KeyCode::KEY_O,
    KeyCode::KEY_E,
    KeyCode::KEY_M,
    KeyCode::KEY_L,
    KeyCode::KEY_W,
    KeyCode::KEY_S,
    KeyCode::KEY_V,
    KeyCode::KEY_Z,
    KeyCode::KEY_C,
  ]
}
