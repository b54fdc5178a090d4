use std::fmt::Display;

use crate::Midi;

/// Actions are inputs into the gesture state machine: pointer events, tagged with
/// the MIDI number of the pad they happened on where there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  /// A pointer button was pressed over a pad.
  PointerDown(Midi),

  /// A pointer button was released over a pad.
  PointerUp(Midi),

  /// The pointer moved onto a pad.
  PointerEnter(Midi),

  /// The pointer moved off a pad.
  PointerLeave(Midi),

  /// A pointer button was released somewhere on the keyboard surface, not
  /// necessarily over a pad.
  PointerReleased,

  /// The pointer left the keyboard surface entirely.
  PointerLeftSurface,
}

impl Display for Action {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use Action::*;
    match self {
      PointerDown(m) => write!(f, "PointerDown({m})"),
      PointerUp(m) => write!(f, "PointerUp({m})"),
      PointerEnter(m) => write!(f, "PointerEnter({m})"),
      PointerLeave(m) => write!(f, "PointerLeave({m})"),
      PointerReleased => write!(f, "PointerReleased"),
      PointerLeftSurface => write!(f, "PointerLeftSurface"),
    }
  }
}
