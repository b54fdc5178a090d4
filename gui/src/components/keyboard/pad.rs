use dioxus::prelude::*;
use palette::LinSrgb;

use isogrid_core::color::utils::ToHexColorStr;
use isogrid_core::gesture::Action;
use isogrid_core::sizing::KEY_MARGIN;
use isogrid_core::Midi;

/// One square key. Pointer events are reported as gesture [Action]s; the pad
/// itself keeps no state.
#[component]
pub fn Pad(
  midi: Midi,
  label: String,
  fill_color: LinSrgb,
  label_color: LinSrgb,
  in_scale: bool,
  active: bool,
  size: f64,
  on_gesture: EventHandler<Action>,
) -> Element {
  let fill = fill_color.to_hex_color();
  let text = label_color.to_hex_color();
  let class = match (active, in_scale) {
    (true, _) => "pad active",
    (false, true) => "pad",
    (false, false) => "pad out-of-scale",
  };

  rsx! {
    div {
      class: class,
      "data-midi": "{midi}",
      style: "width: {size}px; height: {size}px; margin: {KEY_MARGIN}px; background-color: {fill}; color: {text};",

      onpointerdown: move |evt: PointerEvent| {
        evt.prevent_default();
        on_gesture.call(Action::PointerDown(midi));
      },
      onpointerup: move |evt: PointerEvent| {
        evt.prevent_default();
        on_gesture.call(Action::PointerUp(midi));
      },
      onpointerenter: move |evt: PointerEvent| {
        evt.prevent_default();
        on_gesture.call(Action::PointerEnter(midi));
      },
      onpointerleave: move |evt: PointerEvent| {
        evt.prevent_default();
        on_gesture.call(Action::PointerLeave(midi));
      },

      span { class: "pad-label", "{label}" }
    }
  }
}
