use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Midi;

/// Number of semitones in an octave.
pub const OCTAVE: i32 = 12;

const PITCH_NAMES: [&str; 12] = [
  "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// One of the twelve semitone positions within an octave, independent of octave.
///
/// The only ways to get one are [PitchClass::of], which reduces any MIDI number,
/// and [PitchClass::new], which rejects values outside of 0 ..= 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
  /// Reduces a MIDI number to its pitch class.
  ///
  /// Uses a Euclidean modulo, so negative input (e.g. after panning far down)
  /// still lands in 0 ..= 11.
  ///
  /// ```rust
  /// use isogrid_core::pitch::PitchClass;
  ///
  /// assert_eq!(PitchClass::of(60).index(), 0);
  /// assert_eq!(PitchClass::of(-1).index(), 11);
  /// ```
  pub fn of(midi: Midi) -> PitchClass {
    PitchClass(midi.rem_euclid(OCTAVE) as u8)
  }

  pub fn new(index: u8) -> Option<PitchClass> {
    if (index as i32) < OCTAVE {
      Some(PitchClass(index))
    } else {
      None
    }
  }

  pub fn index(&self) -> u8 {
    self.0
  }

  /// Number of semitones from `root` up to self, in 0 ..= 11.
  pub fn interval_above(&self, root: PitchClass) -> u8 {
    (self.0 as i32 - root.0 as i32).rem_euclid(OCTAVE) as u8
  }

  pub fn name(&self) -> &'static str {
    PITCH_NAMES[self.0 as usize]
  }

  /// All twelve pitch classes, starting from C.
  pub fn all() -> impl Iterator<Item = PitchClass> {
    (0..OCTAVE as u8).map(PitchClass)
  }
}

impl Display for PitchClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl From<PitchClass> for u8 {
  fn from(pc: PitchClass) -> Self {
    pc.0
  }
}

impl TryFrom<u8> for PitchClass {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    PitchClass::new(value).ok_or(format!("pitch class {value} out of range 0 ..= 11"))
  }
}

/// Shorthand for [PitchClass::of].
pub fn pitch_class_of(midi: Midi) -> PitchClass {
  PitchClass::of(midi)
}

/// Scientific pitch name for a MIDI number, with middle C (60) as "C4".
pub fn note_name(midi: Midi) -> String {
  let octave = midi.div_euclid(OCTAVE) - 1;
  format!("{}{}", PitchClass::of(midi).name(), octave)
}
