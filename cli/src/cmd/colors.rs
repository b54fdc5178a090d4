use error_stack::Report;

use isogrid_core::color::color_for;
use isogrid_core::error::IsogridError;
use isogrid_core::pitch::PitchClass;
use isogrid_core::settings::Settings;

pub fn run_colors(settings: &Settings) -> Result<(), Report<IsogridError>> {
  println!(
    "root {}, scale {}, colors {}",
    PitchClass::of(settings.base_note),
    settings.scale_highlight,
    settings.tone_color_type
  );
  for line in color_table(settings) {
    println!("{line}");
  }
  Ok(())
}

/// One line per pitch class, starting from the root.
fn color_table(settings: &Settings) -> Vec<String> {
  let root = PitchClass::of(settings.base_note);
  (0..12)
    .map(|interval| {
      let pc = PitchClass::of(settings.base_note.wrapping_add(interval));
      let color = color_for(pc, root, settings.scale_highlight, settings.tone_color_type);
      format!(
        "{:<2} +{:<2} {} fill {} text {}",
        pc.name(),
        interval,
        if color.in_scale { "in " } else { "out" },
        color.fill_hex(),
        color.text_hex(),
      )
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use isogrid_core::scale::Scale;

  #[test]
  fn table_starts_at_the_root() {
    let settings = Settings {
      base_note: 62,
      ..Settings::default()
    };
    let table = color_table(&settings);
    assert_eq!(table.len(), 12);
    assert!(table[0].starts_with("D  +0  in  fill #ff0000"));
    assert!(table[1].starts_with("D# +1  out"));
  }

  #[test]
  fn table_for_the_highest_base_note_wraps() {
    let settings = Settings {
      base_note: i32::MAX,
      ..Settings::default()
    };
    assert_eq!(color_table(&settings).len(), 12);
  }

  #[test]
  fn chromatic_scale_is_all_in() {
    let settings = Settings {
      scale_highlight: Scale::Chromatic,
      ..Settings::default()
    };
    assert!(color_table(&settings).iter().all(|l| l.contains(" in ")));
  }
}
