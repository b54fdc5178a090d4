//! The keyboard surface: measures its container, draws the visible pads, and turns
//! pointer events into note callbacks.
mod board;
mod pad;

use dioxus::prelude::*;
use log::debug;

use isogrid_core::gesture::Action;
use isogrid_core::keyboard::{Keyboard, KeyboardHost};
use isogrid_core::settings::{PanDirection, Settings};
use isogrid_core::Midi;

use crate::components::pan_controls::PanControls;
use crate::hooks::use_size_observer;
use board::Board;

const SURFACE_ID: &str = "isogrid-surface";

/// Touch input implicitly captures the pointer to the pad it went down on, which
/// would stop enter/leave events reaching the other pads during a drag.
const RELEASE_CAPTURE_JS: &str = r##"
  if (!window.__isogridCaptureReleased) {
    window.__isogridCaptureReleased = true;
    document.addEventListener("gotpointercapture", (e) => {
      if (e.target.closest && e.target.closest("#isogrid-surface")) {
        e.target.releasePointerCapture(e.pointerId);
      }
    });
  }
"##;

/// Forwards keyboard requests to the props' event handlers.
#[derive(Clone, Copy)]
struct PropsHost {
  on_note_activated: EventHandler<Midi>,
  on_note_deactivated: EventHandler<Midi>,
  on_settings_changed: Option<EventHandler<Settings>>,
}

impl KeyboardHost for PropsHost {
  fn note_activated(&mut self, midi: Midi) {
    self.on_note_activated.call(midi);
  }

  fn note_deactivated(&mut self, midi: Midi) {
    self.on_note_deactivated.call(midi);
  }

  fn settings_changed(&mut self, next: Settings) {
    match self.on_settings_changed {
      Some(handler) => handler.call(next),
      None => debug!("no settings handler, ignoring {next:?}"),
    }
  }
}

/// An isomorphic grid keyboard. The host owns `settings` and `active_notes` and is
/// told about every change through the event handlers. Pan controls are only shown
/// when `on_settings_changed` is given.
#[component]
pub fn KeyboardGrid(
  settings: Settings,
  active_notes: Vec<Midi>,
  on_note_activated: EventHandler<Midi>,
  on_note_deactivated: EventHandler<Midi>,
  on_settings_changed: Option<EventHandler<Settings>>,
) -> Element {
  let container_size = use_size_observer(SURFACE_ID.to_string());
  let mut keyboard = use_signal(Keyboard::new);
  use_hook(|| {
    document::eval(RELEASE_CAPTURE_JS);
  });

  use_effect(move || {
    let measured = container_size();
    keyboard.write().resize(measured);
  });

  let host = PropsHost {
    on_note_activated,
    on_note_deactivated,
    on_settings_changed,
  };

  let gesture_settings = settings.clone();
  let gesture_notes = active_notes.clone();
  let on_gesture = use_callback(move |action: Action| {
    let mut host = host;
    keyboard
      .write()
      .pointer(&gesture_settings, action, &gesture_notes, &mut host);
  });

  let pan_settings = settings.clone();
  let on_pan = use_callback(move |direction: PanDirection| {
    let mut host = host;
    keyboard.read().pan(&pan_settings, direction, &mut host);
  });

  let view = keyboard.read().view(&settings, &active_notes);

  rsx! {
    div { class: "keyboard-grid",
      div {
        id: SURFACE_ID,
        class: "keyboard-surface",
        onpointerup: move |_| on_gesture.call(Action::PointerReleased),
        onpointerleave: move |_| on_gesture.call(Action::PointerLeftSurface),
        onpointercancel: move |_| on_gesture.call(Action::PointerLeftSurface),
        oncontextmenu: move |evt: MouseEvent| evt.prevent_default(),

        Board { view: view, on_gesture: on_gesture }
      }
      if on_settings_changed.is_some() {
        PanControls {
          offset_x: settings.offset_x,
          offset_y: settings.offset_y,
          on_pan: on_pan,
        }
      }
    }
  }
}
