use std::fmt::Display;
use std::str::FromStr;

use error_stack::{report, Report};
use serde::{Deserialize, Serialize};

use crate::error::{normalize_name, IsogridError};
use crate::pitch::PitchClass;

/// A musical scale to highlight, relative to the keyboard's base note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scale {
  #[default]
  Major,
  Minor,
  HarmonicMinor,
  MelodicMinor,
  Dorian,
  Phrygian,
  Lydian,
  Mixolydian,
  Locrian,
  MajorPentatonic,
  MinorPentatonic,
  Blues,
  WholeTone,
  /// Every pitch class is in the scale, so nothing is muted.
  Chromatic,
}

impl Scale {
  pub const ALL: [Scale; 14] = [
    Scale::Major,
    Scale::Minor,
    Scale::HarmonicMinor,
    Scale::MelodicMinor,
    Scale::Dorian,
    Scale::Phrygian,
    Scale::Lydian,
    Scale::Mixolydian,
    Scale::Locrian,
    Scale::MajorPentatonic,
    Scale::MinorPentatonic,
    Scale::Blues,
    Scale::WholeTone,
    Scale::Chromatic,
  ];

  /// Semitone intervals above the root, in ascending order, root included.
  pub fn intervals(&self) -> &'static [u8] {
    use Scale::*;
    match self {
      Major => &[0, 2, 4, 5, 7, 9, 11],
      Minor => &[0, 2, 3, 5, 7, 8, 10],
      HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
      MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
      Dorian => &[0, 2, 3, 5, 7, 9, 10],
      Phrygian => &[0, 1, 3, 5, 7, 8, 10],
      Lydian => &[0, 2, 4, 6, 7, 9, 11],
      Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
      Locrian => &[0, 1, 3, 5, 6, 8, 10],
      MajorPentatonic => &[0, 2, 4, 7, 9],
      MinorPentatonic => &[0, 3, 5, 7, 10],
      Blues => &[0, 3, 5, 6, 7, 10],
      WholeTone => &[0, 2, 4, 6, 8, 10],
      Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    }
  }

  /// Whether `pitch_class` belongs to this scale when built on `root`.
  ///
  /// ```rust
  /// use isogrid_core::pitch::PitchClass;
  /// use isogrid_core::scale::Scale;
  ///
  /// let d = PitchClass::of(62);
  /// assert!(Scale::Major.contains(PitchClass::of(66), d)); // F# in D major
  /// assert!(!Scale::Major.contains(PitchClass::of(65), d)); // F is not
  /// ```
  pub fn contains(&self, pitch_class: PitchClass, root: PitchClass) -> bool {
    self.intervals().contains(&pitch_class.interval_above(root))
  }

  pub fn name(&self) -> &'static str {
    use Scale::*;
    match self {
      Major => "Major",
      Minor => "Minor",
      HarmonicMinor => "Harmonic Minor",
      MelodicMinor => "Melodic Minor",
      Dorian => "Dorian",
      Phrygian => "Phrygian",
      Lydian => "Lydian",
      Mixolydian => "Mixolydian",
      Locrian => "Locrian",
      MajorPentatonic => "Major Pentatonic",
      MinorPentatonic => "Minor Pentatonic",
      Blues => "Blues",
      WholeTone => "Whole Tone",
      Chromatic => "Chromatic",
    }
  }
}

impl Display for Scale {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for Scale {
  type Err = Report<IsogridError>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = normalize_name(s);
    let aliases: &[(&str, Scale)] = &[
      ("ionian", Scale::Major),
      ("aeolian", Scale::Minor),
      ("naturalminor", Scale::Minor),
    ];

    Scale::ALL
      .iter()
      .find(|scale| normalize_name(scale.name()) == wanted)
      .copied()
      .or_else(|| {
        aliases
          .iter()
          .find(|(alias, _)| *alias == wanted)
          .map(|(_, scale)| *scale)
      })
      .ok_or_else(|| report!(IsogridError::UnknownScale(s.to_string())))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn members(scale: Scale, root: u8) -> Vec<u8> {
    let root = PitchClass::new(root).unwrap();
    PitchClass::all()
      .filter(|pc| scale.contains(*pc, root))
      .map(|pc| pc.index())
      .collect()
  }

  #[test]
  fn major_scale_on_c() {
    assert_eq!(members(Scale::Major, 0), vec![0, 2, 4, 5, 7, 9, 11]);
  }

  #[test]
  fn major_scale_is_transposed_by_root() {
    // G major: G A B C D E F#
    assert_eq!(members(Scale::Major, 7), vec![0, 2, 4, 6, 7, 9, 11]);
  }

  #[test]
  fn every_scale_contains_its_root() {
    for scale in Scale::ALL {
      for root in PitchClass::all() {
        assert!(scale.contains(root, root), "{scale} should contain its root");
      }
    }
  }

  #[test]
  fn intervals_are_ascending_and_in_octave() {
    for scale in Scale::ALL {
      let intervals = scale.intervals();
      assert!(intervals.windows(2).all(|w| w[0] < w[1]), "{scale}");
      assert!(intervals.iter().all(|i| *i < 12), "{scale}");
    }
  }

  #[test]
  fn chromatic_contains_everything() {
    assert_eq!(members(Scale::Chromatic, 5).len(), 12);
  }

  #[test]
  fn parses_names_loosely() {
    assert_eq!("major".parse::<Scale>().unwrap(), Scale::Major);
    assert_eq!("Harmonic Minor".parse::<Scale>().unwrap(), Scale::HarmonicMinor);
    assert_eq!("minor-pentatonic".parse::<Scale>().unwrap(), Scale::MinorPentatonic);
    assert_eq!("WHOLE_TONE".parse::<Scale>().unwrap(), Scale::WholeTone);
    assert_eq!("aeolian".parse::<Scale>().unwrap(), Scale::Minor);
    assert!("bebop".parse::<Scale>().is_err());
  }
}
