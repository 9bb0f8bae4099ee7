use log::debug;

use crate::keycode::{gesture_key, KeyCode};
use crate::packet::GestureEvent;

/// Host input event sink.
pub trait InputSink {
  fn report_key(&mut self, code: KeyCode, pressed: bool);

  /// Frame barrier; everything reported before it is delivered together.
  fn sync(&mut self);
}

/// Turns decoded gestures into wake + gesture key pairs.
#[derive(Debug, Clone, Copy)]
pub struct EventReporter {
  double_tap: KeyCode,
}

impl EventReporter {
  pub const fn new(double_tap: KeyCode) -> Self {
    Self { double_tap }
  }

  pub const fn double_tap_key(&self) -> KeyCode {
    self.double_tap
  }

  pub const fn keycode(&self, event: &GestureEvent) -> Option<KeyCode> {
    gesture_key(event.classification, self.double_tap)
  }

  /// Emit the event on `sink`. Returns the gesture key, or `None` when the
  /// gesture is unrecognised and nothing was emitted.
  ///
  /// Order: wake press, key press, sync, wake release, key release, sync.
  pub fn report<S: InputSink + ?Sized>(&self, event: &GestureEvent, sink: &mut S) -> Option<KeyCode> {
    let Some(key) = self.keycode(event) else {
      debug!("dropping unrecognized gesture 0x{:02x}", event.classification.code());
      return None;
    };

    debug!("gesture 0x{:02x} -> key {}", event.classification.code(), key.0);
    sink.report_key(KeyCode::KEY_WAKEUP, true);
    sink.report_key(key, true);
    sink.sync();
    sink.report_key(KeyCode::KEY_WAKEUP, false);
    sink.report_key(key, false);
    sink.sync();

    Some(key)
  }
}

impl Default for EventReporter {
  fn default() -> Self {
    Self::new(KeyCode::KEY_DOUBLE_TAP)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::packet::{GestureId, Point, MAX_POINTS};
  use crate::testing::{RecordingSink, SinkCall};

  fn event(id: GestureId) -> GestureEvent {
    GestureEvent::new(id, 0, [Point::default(); MAX_POINTS])
  }

  #[test]
  fn double_click_emits_framed_pair() {
    let mut sink = RecordingSink::default();
    let key = EventReporter::default().report(&event(GestureId::DoubleClick), &mut sink);

    assert_eq!(key, Some(KeyCode::KEY_DOUBLE_TAP));
    assert_eq!(
      sink.calls,
      [
        SinkCall::Key(KeyCode::KEY_WAKEUP, true),
        SinkCall::Key(KeyCode::KEY_DOUBLE_TAP, true),
        SinkCall::Sync,
        SinkCall::Key(KeyCode::KEY_WAKEUP, false),
        SinkCall::Key(KeyCode::KEY_DOUBLE_TAP, false),
        SinkCall::Sync,
      ]
    );
  }

  #[test]
  fn unrecognized_emits_nothing() {
    let mut sink = RecordingSink::default();
    assert_eq!(EventReporter::default().report(&event(GestureId::Unrecognized(0x55)), &mut sink), None);
    assert!(sink.calls.is_empty());
  }

  #[test]
  fn configured_double_tap_key_is_used() {
    let mut sink = RecordingSink::default();
    EventReporter::new(KeyCode(0x2FF)).report(&event(GestureId::DoubleClick), &mut sink);
    assert_eq!(sink.calls[1], SinkCall::Key(KeyCode(0x2FF), true));
  }

  #[test]
  fn swipe_uses_arrow_key() {
    let mut sink = RecordingSink::default();
    EventReporter::default().report(&event(GestureId::Left), &mut sink);
    assert_eq!(sink.calls.len(), 6);
    assert_eq!(sink.calls[1], SinkCall::Key(KeyCode::KEY_LEFT, true));
    assert_eq!(sink.calls[4], SinkCall::Key(KeyCode::KEY_LEFT, false));
  }
}
