use dioxus::prelude::*;

/// A `<select>` with a caption, for picking one of a fixed set of values by their
/// display name.
#[component]
pub fn LabeledDropdown<T: Clone + PartialEq + ToString + 'static>(
  label: String,
  options: Vec<T>,
  selected: T,
  onchange: EventHandler<T>,
) -> Element {
  let selected_str = selected.to_string();

  rsx! {
    label { class: "labeled-dropdown",
      span { class: "dropdown-label", "{label}" }
      select {
        class: "dropdown",
        value: "{selected_str}",
        onchange: move |evt| {
          let value = evt.value();
          if let Some(opt) = options.iter().find(|o| o.to_string() == value) {
            onchange.call(opt.clone());
          }
        },
        for option in options.iter() {
          option {
            key: "{option.to_string()}",
            value: "{option.to_string()}",
            selected: *option == selected,
            "{option.to_string()}"
          }
        }
      }
    }
  }
}
