//! Turns pointer events on pads into note activations and deactivations.
//!
//! The only state kept here is whether a pointer is held ([PointerState]). Whether a
//! note is sounding is always read from the host through [ActiveNotes], never
//! tracked locally, so the host remains the single source of truth.
//!
//! | Event              | Record                   | Play       |
//! |--------------------|--------------------------|------------|
//! | down on pad        | toggle                   | activate   |
//! | up on pad          | nothing                  | deactivate |
//! | enter while held   | toggle                   | activate   |
//! | leave while held   | nothing                  | deactivate |
pub mod actions;
pub mod effects;
pub mod state;

use std::collections::{BTreeSet, HashSet};

use log::debug;

pub use self::actions::Action;
pub use self::effects::Effect;
pub use self::state::PointerState;
use crate::settings::Mode;
use crate::Midi;

/// Read access to the host's set of currently sounding notes.
pub trait ActiveNotes {
  fn is_active(&self, midi: Midi) -> bool;
}

impl ActiveNotes for [Midi] {
  fn is_active(&self, midi: Midi) -> bool {
    self.contains(&midi)
  }
}

impl ActiveNotes for Vec<Midi> {
  fn is_active(&self, midi: Midi) -> bool {
    self.contains(&midi)
  }
}

impl ActiveNotes for HashSet<Midi> {
  fn is_active(&self, midi: Midi) -> bool {
    self.contains(&midi)
  }
}

impl ActiveNotes for BTreeSet<Midi> {
  fn is_active(&self, midi: Midi) -> bool {
    self.contains(&midi)
  }
}

/// Owns the shared pointer-held flag and advances it one [Action] at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gesture {
  state: PointerState,
}

impl Gesture {
  pub fn new() -> Gesture {
    Gesture::default()
  }

  pub fn state(&self) -> PointerState {
    self.state
  }

  pub fn is_pointer_down(&self) -> bool {
    self.state.is_down()
  }

  /// Feeds one pointer event through the state machine and returns the effects the
  /// host should apply, in order.
  pub fn dispatch<A: ActiveNotes + ?Sized>(
    &mut self,
    mode: Mode,
    action: Action,
    active: &A,
  ) -> Vec<Effect> {
    let (next, effects) = self.state.next(action, mode, active);
    if next != self.state || !effects.is_empty() {
      debug!(
        "gesture ({mode}): {} --[{action}]--> {next} {:?}",
        self.state, effects
      );
    }
    self.state = next;
    effects
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Applies effects to a note set the way a host would, so later events see the
  /// updated state.
  fn apply(active: &mut BTreeSet<Midi>, effects: &[Effect]) {
    for e in effects {
      match e {
        Effect::ActivateNote(m) => active.insert(*m),
        Effect::DeactivateNote(m) => active.remove(m),
      };
    }
  }

  #[test]
  fn play_glissando_scenario() {
    let mut gesture = Gesture::new();
    let active = BTreeSet::new();
    let (a, b) = (60, 65);

    assert_eq!(gesture.dispatch(Mode::Play, Action::PointerDown(a), &active), vec![Effect::ActivateNote(a)]);
    assert_eq!(gesture.dispatch(Mode::Play, Action::PointerLeave(a), &active), vec![Effect::DeactivateNote(a)]);
    assert_eq!(gesture.dispatch(Mode::Play, Action::PointerEnter(b), &active), vec![Effect::ActivateNote(b)]);
    assert_eq!(gesture.dispatch(Mode::Play, Action::PointerUp(b), &active), vec![Effect::DeactivateNote(b)]);
    assert!(!gesture.is_pointer_down());

    // the surface sees the same release bubble up afterwards; nothing else happens
    assert!(gesture.dispatch(Mode::Play, Action::PointerReleased, &active).is_empty());
  }

  #[test]
  fn play_glissando_with_enter_before_leave() {
    let mut gesture = Gesture::new();
    let mut active = BTreeSet::new();
    let (a, b) = (60, 65);
    let mut emitted = vec![];

    for action in [
      Action::PointerDown(a),
      Action::PointerEnter(b),
      Action::PointerLeave(a),
      Action::PointerUp(b),
      Action::PointerReleased,
    ] {
      let effects = gesture.dispatch(Mode::Play, action, &active);
      apply(&mut active, &effects);
      emitted.extend(effects);
    }

    assert_eq!(
      emitted,
      vec![
        Effect::ActivateNote(a),
        Effect::ActivateNote(b),
        Effect::DeactivateNote(a),
        Effect::DeactivateNote(b),
      ]
    );
    assert!(active.is_empty());
  }

  #[test]
  fn play_enter_then_leave_in_quick_succession_leaves_nothing_sounding() {
    let mut gesture = Gesture::new();
    let mut active = BTreeSet::new();

    for action in [
      Action::PointerDown(60),
      Action::PointerLeave(60),
      Action::PointerEnter(61),
      Action::PointerLeave(61),
      Action::PointerEnter(62),
      Action::PointerLeave(62),
      Action::PointerReleased,
    ] {
      let effects = gesture.dispatch(Mode::Play, action, &active);
      apply(&mut active, &effects);
    }

    assert!(active.is_empty());
    assert!(!gesture.is_pointer_down());
  }

  #[test]
  fn play_dropped_leave_is_resolved_by_release() {
    let mut gesture = Gesture::new();
    let mut active = BTreeSet::new();

    let effects = gesture.dispatch(Mode::Play, Action::PointerDown(60), &active);
    apply(&mut active, &effects);
    // the pointer wanders off the pad and off the keyboard, but the leave is lost
    let effects = gesture.dispatch(Mode::Play, Action::PointerLeftSurface, &active);
    apply(&mut active, &effects);

    assert!(active.is_empty());
    assert!(!gesture.is_pointer_down());
  }

  #[test]
  fn record_toggle_scenario() {
    let mut gesture = Gesture::new();
    let mut active = BTreeSet::new();

    let effects = gesture.dispatch(Mode::Record, Action::PointerDown(60), &active);
    assert_eq!(effects, vec![Effect::ActivateNote(60)]);
    apply(&mut active, &effects);
    assert!(gesture.dispatch(Mode::Record, Action::PointerUp(60), &active).is_empty());

    let effects = gesture.dispatch(Mode::Record, Action::PointerDown(60), &active);
    assert_eq!(effects, vec![Effect::DeactivateNote(60)]);
    apply(&mut active, &effects);
    assert!(gesture.dispatch(Mode::Record, Action::PointerUp(60), &active).is_empty());

    assert!(active.is_empty());
  }

  #[test]
  fn record_drag_paints_a_pattern() {
    let mut gesture = Gesture::new();
    let mut active: BTreeSet<Midi> = [61].into_iter().collect();

    for action in [
      Action::PointerDown(60),
      Action::PointerLeave(60),
      Action::PointerEnter(61),
      Action::PointerLeave(61),
      Action::PointerEnter(62),
      Action::PointerUp(62),
    ] {
      let effects = gesture.dispatch(Mode::Record, action, &active);
      apply(&mut active, &effects);
    }

    assert_eq!(active.into_iter().collect::<Vec<_>>(), vec![60, 62]);
  }

  #[test]
  fn host_may_refuse_activations() {
    // the host never adds the note, so a second press in Record mode activates again
    let mut gesture = Gesture::new();
    let active: Vec<Midi> = vec![];
    assert_eq!(
      gesture.dispatch(Mode::Record, Action::PointerDown(60), &active),
      vec![Effect::ActivateNote(60)]
    );
    gesture.dispatch(Mode::Record, Action::PointerUp(60), &active);
    assert_eq!(
      gesture.dispatch(Mode::Record, Action::PointerDown(60), &active),
      vec![Effect::ActivateNote(60)]
    );
  }

  #[test]
  fn hover_without_press_does_nothing() {
    let mut gesture = Gesture::new();
    let active: HashSet<Midi> = HashSet::new();
    for mode in Mode::ALL {
      assert!(gesture.dispatch(mode, Action::PointerEnter(60), &active).is_empty());
      assert!(gesture.dispatch(mode, Action::PointerLeave(60), &active).is_empty());
    }
  }
}
