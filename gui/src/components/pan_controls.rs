use dioxus::prelude::*;

use isogrid_core::settings::PanDirection;

const BUTTONS: [(PanDirection, &str, &str, &str); 4] = [
  (PanDirection::Left, "pan-left", "Down a semitone", "\u{2190}"),
  (PanDirection::Up, "pan-up", "Up a fourth", "\u{2191}"),
  (PanDirection::Down, "pan-down", "Down a fourth", "\u{2193}"),
  (PanDirection::Right, "pan-right", "Up a semitone", "\u{2192}"),
];

/// Arrow buttons that shift the grid by a semitone (left/right) or a fourth (up/down).
#[component]
pub fn PanControls(offset_x: i32, offset_y: i32, on_pan: EventHandler<PanDirection>) -> Element {
  rsx! {
    div { class: "pan-controls",
      for (direction, class, title, arrow) in BUTTONS {
        button {
          key: "{class}",
          class: "pan-button {class}",
          title: title,
          onclick: move |_| on_pan.call(direction),
          "{arrow}"
        }
      }
      span { class: "pan-offset", "({offset_x}, {offset_y})" }
    }
  }
}
