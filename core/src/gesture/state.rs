use std::fmt::Display;

use crate::gesture::actions::Action;
use crate::gesture::effects::Effect;
use crate::gesture::ActiveNotes;
use crate::settings::Mode;
use crate::Midi;

/// Whether a pointer is currently held down over the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
  /// No pointer is held. Enter and leave events are ignored.
  #[default]
  Up,

  /// A pointer is held down.
  Down {
    /// In Play mode, the note most recently started by the held pointer and not
    /// yet stopped. Releasing the pointer anywhere stops it, even if the pad's own
    /// leave event never arrived.
    over: Option<Midi>,
  },
}

impl Display for PointerState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PointerState::Up => write!(f, "Up"),
      PointerState::Down { over: None } => write!(f, "Down"),
      PointerState::Down { over: Some(m) } => write!(f, "Down(over {m})"),
    }
  }
}

impl PointerState {
  pub fn is_down(&self) -> bool {
    matches!(self, PointerState::Down { .. })
  }

  /// Applies an [Action] to the current state and returns the new state, along with
  /// any [Effect]s the host should perform, in order.
  ///
  /// `active` is the host's current set of sounding notes, used by Record mode to
  /// decide which way a toggle goes.
  pub fn next<A: ActiveNotes + ?Sized>(
    self,
    action: Action,
    mode: Mode,
    active: &A,
  ) -> (PointerState, Vec<Effect>) {
    use Action::*;
    use Effect::*;
    use Mode::*;
    use PointerState::*;

    match (mode, action, self) {
      // Enter and leave only matter while a pointer is held.
      (_, PointerEnter(_) | PointerLeave(_), Up) => (Up, vec![]),

      // Pressing a pad in Record mode toggles it.
      (Record, PointerDown(m), _) => (Down { over: None }, vec![toggle(m, active)]),

      // Releasing in Record mode never changes a note by itself.
      (Record, PointerUp(_) | PointerReleased | PointerLeftSurface, _) => (Up, vec![]),

      // Dragging onto a pad in Record mode toggles it too, painting a pattern.
      (Record, PointerEnter(m), Down { .. }) => (Down { over: None }, vec![toggle(m, active)]),

      (Record, PointerLeave(_), state) => (state, vec![]),

      // Pressing a pad in Play mode starts its note.
      (Play, PointerDown(m), _) => (Down { over: Some(m) }, vec![ActivateNote(m)]),

      // Releasing over a pad in Play mode stops its note.
      (Play, PointerUp(m), _) => (Up, vec![DeactivateNote(m)]),

      // Dragging onto a pad in Play mode starts its note. The previous pad is
      // stopped by its own leave event, which may arrive after this one.
      (Play, PointerEnter(m), Down { .. }) => (Down { over: Some(m) }, vec![ActivateNote(m)]),

      // Dragging off a pad in Play mode stops its note.
      (Play, PointerLeave(m), Down { over }) => {
        let over = over.filter(|o| *o != m);
        (Down { over }, vec![DeactivateNote(m)])
      }

      // Releasing anywhere, or leaving the surface, always ends the gesture and
      // silences anything the held pointer left sounding.
      (Play, PointerReleased | PointerLeftSurface, Down { over }) => {
        (Up, over.map(DeactivateNote).into_iter().collect())
      }

      (Play, PointerReleased | PointerLeftSurface, Up) => (Up, vec![]),
    }
  }
}

fn toggle<A: ActiveNotes + ?Sized>(midi: Midi, active: &A) -> Effect {
  if active.is_active(midi) {
    Effect::DeactivateNote(midi)
  } else {
    Effect::ActivateNote(midi)
  }
}
