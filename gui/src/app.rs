use std::collections::BTreeSet;

use dioxus::prelude::*;
use log::{info, warn};

use isogrid_core::settings::{PartialSettings, Settings};
use isogrid_core::Midi;

use crate::components::keyboard::KeyboardGrid;
use crate::components::toolbar::Toolbar;

const MAIN_CSS: &str = include_str!("styles/main.css");

/// Optional JSON object with any subset of the settings fields.
pub const SETTINGS_ENV_VAR: &str = "ISOGRID_SETTINGS";

fn initial_settings() -> Settings {
  let Ok(json) = std::env::var(SETTINGS_ENV_VAR) else {
    return Settings::default();
  };
  match PartialSettings::from_json(&json).and_then(PartialSettings::resolve) {
    Ok(settings) => {
      info!("using settings from {SETTINGS_ENV_VAR}: {settings:?}");
      settings
    }
    Err(err) => {
      warn!("ignoring {SETTINGS_ENV_VAR}, using defaults: {err:?}");
      Settings::default()
    }
  }
}

/// Hosts a single keyboard. Owns the settings and the set of sounding notes, which
/// is the only place note state lives.
#[component]
pub fn App() -> Element {
  let mut settings = use_signal(initial_settings);
  let mut active_notes = use_signal(BTreeSet::<Midi>::new);

  let mut apply_settings = move |next: Settings| {
    if next.mode != settings.peek().mode && !active_notes.peek().is_empty() {
      info!("mode changed to {}, releasing all notes", next.mode);
      active_notes.write().clear();
    }
    settings.set(next);
  };

  let notes: Vec<Midi> = active_notes.read().iter().copied().collect();

  rsx! {
    style { {MAIN_CSS} }
    div { class: "app",
      Toolbar {
        settings: settings(),
        active_count: notes.len(),
        on_change: move |next| apply_settings(next),
        on_clear: move |_| {
          info!("clearing {} notes", active_notes.peek().len());
          active_notes.write().clear();
        },
      }
      div { class: "keyboard-container",
        KeyboardGrid {
          settings: settings(),
          active_notes: notes,
          on_note_activated: move |midi: Midi| {
            if active_notes.write().insert(midi) {
              info!("note on: {midi}");
            }
          },
          on_note_deactivated: move |midi: Midi| {
            if active_notes.write().remove(&midi) {
              info!("note off: {midi}");
            }
          },
          on_settings_changed: move |next: Settings| apply_settings(next),
        }
      }
    }
  }
}
