use std::fmt::Display;

use crate::Midi;

/// Effects are requests from the gesture state machine to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
  /// The note should start sounding.
  ActivateNote(Midi),

  /// The note should stop sounding.
  DeactivateNote(Midi),
}

impl Effect {
  pub fn midi(&self) -> Midi {
    match self {
      Effect::ActivateNote(m) | Effect::DeactivateNote(m) => *m,
    }
  }
}

impl Display for Effect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Effect::ActivateNote(m) => write!(f, "ActivateNote({m})"),
      Effect::DeactivateNote(m) => write!(f, "DeactivateNote({m})"),
    }
  }
}
