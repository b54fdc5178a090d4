use std::collections::BTreeSet;

use error_stack::{report, Report, ResultExt};
use log::debug;

use isogrid_core::error::IsogridError;
use isogrid_core::gesture::Action;
use isogrid_core::keyboard::{Keyboard, KeyboardHost};
use isogrid_core::pitch::note_name;
use isogrid_core::settings::Settings;
use isogrid_core::Midi;

/// Keeps the set of sounding notes and a log of every change it was asked for.
#[derive(Debug, Default)]
struct ReplayHost {
  active: BTreeSet<Midi>,
  log: Vec<String>,
}

impl KeyboardHost for ReplayHost {
  fn note_activated(&mut self, midi: Midi) {
    self.active.insert(midi);
    self.log.push(format!("on  {midi} ({})", note_name(midi)));
  }

  fn note_deactivated(&mut self, midi: Midi) {
    self.active.remove(&midi);
    self.log.push(format!("off {midi} ({})", note_name(midi)));
  }
}

pub fn run_gesture(settings: &Settings, events: &[String]) -> Result<(), Report<IsogridError>> {
  let actions = events
    .iter()
    .map(|e| parse_event(e))
    .collect::<Result<Vec<_>, _>>()?;

  let host = replay(settings, &actions);
  for line in &host.log {
    println!("{line}");
  }
  let active: Vec<String> = host.active.iter().map(|m| m.to_string()).collect();
  println!("active: [{}]", active.join(", "));
  Ok(())
}

fn replay(settings: &Settings, actions: &[Action]) -> ReplayHost {
  let mut keyboard = Keyboard::new();
  let mut host = ReplayHost::default();
  for action in actions {
    let active = host.active.clone();
    keyboard.pointer(settings, *action, &active, &mut host);
    debug!("after {action}: pointer {}", keyboard.gesture().state());
  }
  host
}

/// Parses `down:<midi>`, `up:<midi>`, `enter:<midi>`, `leave:<midi>`, `release`
/// or `exit`.
fn parse_event(event: &str) -> Result<Action, Report<IsogridError>> {
  let invalid = || IsogridError::InvalidGestureEvent(event.to_string());

  let (kind, note) = match event.split_once(':') {
    Some((kind, note)) => (kind, Some(note)),
    None => (event, None),
  };

  let midi = |note: Option<&str>| -> Result<Midi, Report<IsogridError>> {
    let note = note.ok_or_else(|| report!(invalid()).attach_printable("missing midi note number"))?;
    note
      .trim()
      .parse::<Midi>()
      .map_err(|e| report!(invalid()).attach_printable(e.to_string()))
  };

  let action = match (kind.trim().to_lowercase().as_str(), note) {
    ("down", n) => Ok(Action::PointerDown(midi(n)?)),
    ("up", n) => Ok(Action::PointerUp(midi(n)?)),
    ("enter", n) => Ok(Action::PointerEnter(midi(n)?)),
    ("leave", n) => Ok(Action::PointerLeave(midi(n)?)),
    ("release", None) => Ok(Action::PointerReleased),
    ("exit", None) => Ok(Action::PointerLeftSurface),
    _ => Err(report!(invalid())),
  };
  action.attach_printable_lazy(|| format!("gesture event {event:?}"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use isogrid_core::settings::Mode;

  fn actions(events: &[&str]) -> Vec<Action> {
    events.iter().map(|e| parse_event(e).unwrap()).collect()
  }

  #[test]
  fn parses_every_event_kind() {
    assert_eq!(
      actions(&["down:60", "up:61", "enter:-3", "leave:200", "release", "exit"]),
      vec![
        Action::PointerDown(60),
        Action::PointerUp(61),
        Action::PointerEnter(-3),
        Action::PointerLeave(200),
        Action::PointerReleased,
        Action::PointerLeftSurface,
      ]
    );
  }

  #[test]
  fn rejects_malformed_events() {
    for bad in ["down", "down:", "down:C4", "press:60", "release:60", ""] {
      let err = parse_event(bad).unwrap_err();
      assert_eq!(
        err.current_context(),
        &IsogridError::InvalidGestureEvent(bad.to_string()),
        "{bad}"
      );
    }
  }

  #[test]
  fn play_glissando_leaves_nothing_sounding() {
    let settings = Settings::default().with_mode(Mode::Play);
    let host = replay(
      &settings,
      &actions(&["down:60", "leave:60", "enter:65", "up:65", "release"]),
    );
    assert_eq!(
      host.log,
      vec!["on  60 (C4)", "off 60 (C4)", "on  65 (F4)", "off 65 (F4)"]
    );
    assert!(host.active.is_empty());
  }

  #[test]
  fn record_clicks_toggle() {
    let settings = Settings::default();
    let host = replay(
      &settings,
      &actions(&["down:60", "up:60", "down:62", "up:62", "down:60", "up:60"]),
    );
    assert_eq!(host.active.into_iter().collect::<Vec<_>>(), vec![62]);
  }
}
