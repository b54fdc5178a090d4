use dioxus::prelude::*;

use isogrid_core::gesture::Action;
use isogrid_core::keyboard::KeyboardView;

use super::pad::Pad;

/// Lays out a [KeyboardView] as rows of pads, top row first.
#[component]
pub fn Board(view: KeyboardView, on_gesture: EventHandler<Action>) -> Element {
  let size = view.key_length;

  rsx! {
    div { class: "board",
      for (r, row) in view.rows.iter().enumerate() {
        div {
          key: "{r}",
          class: "board-row",
          for pad in row.iter() {
            Pad {
              key: "{pad.midi}",
              midi: pad.midi,
              label: pad.label.clone(),
              fill_color: pad.color.fill,
              label_color: pad.color.text,
              in_scale: pad.color.in_scale,
              active: pad.active,
              size: size,
              on_gesture: on_gesture,
            }
          }
        }
      }
    }
  }
}
