use dioxus::prelude::*;

use isogrid_core::color::ToneColorType;
use isogrid_core::pitch::note_name;
use isogrid_core::scale::Scale;
use isogrid_core::settings::{Mode, Settings};

use crate::components::common::LabeledDropdown;

/// Host-side controls for the settings the keyboard doesn't change itself.
#[component]
pub fn Toolbar(
  settings: Settings,
  active_count: usize,
  on_change: EventHandler<Settings>,
  on_clear: EventHandler<()>,
) -> Element {
  let base = settings.base_note;
  let root = note_name(base);

  let mode_settings = settings.clone();
  let scale_settings = settings.clone();
  let color_settings = settings.clone();
  let lower_settings = settings.clone();
  let raise_settings = settings.clone();

  rsx! {
    div { class: "toolbar",
      LabeledDropdown {
        label: "Mode",
        options: Mode::ALL.to_vec(),
        selected: settings.mode,
        onchange: move |mode: Mode| on_change.call(mode_settings.with_mode(mode)),
      }
      LabeledDropdown {
        label: "Scale",
        options: Scale::ALL.to_vec(),
        selected: settings.scale_highlight,
        onchange: move |scale_highlight: Scale| {
          on_change.call(Settings { scale_highlight, ..scale_settings.clone() })
        },
      }
      LabeledDropdown {
        label: "Colors",
        options: ToneColorType::ALL.to_vec(),
        selected: settings.tone_color_type,
        onchange: move |tone_color_type: ToneColorType| {
          on_change.call(Settings { tone_color_type, ..color_settings.clone() })
        },
      }
      div { class: "base-note",
        button {
          onclick: move |_| on_change.call(Settings { base_note: base.saturating_sub(1), ..lower_settings.clone() }),
          "-"
        }
        span { class: "base-note-name", "{root}" }
        button {
          onclick: move |_| on_change.call(Settings { base_note: base.saturating_add(1), ..raise_settings.clone() }),
          "+"
        }
      }
      button {
        class: "clear",
        disabled: active_count == 0,
        onclick: move |_| on_clear.call(()),
        "Clear ({active_count})"
      }
    }
  }
}
