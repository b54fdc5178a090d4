//! Maps pitch classes to pad colors.
//!
//! Each pitch class is placed on a 12-step color wheel according to its interval
//! above the root. The [ToneColorType] decides the ordering around the wheel, and
//! pitch classes outside the highlighted [Scale] keep their hue but are muted
//! toward a dark gray.
pub mod palette;
pub mod utils;

use std::fmt::Display;
use std::str::FromStr;

use ::palette::LinSrgb;
use error_stack::{report, Report};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use self::palette::ColorPalette;
use self::utils::{blend, color_hex, text_color_for_bgcolor};
use crate::error::{normalize_name, IsogridError};
use crate::pitch::{PitchClass, OCTAVE};
use crate::scale::Scale;

/// How far out-of-scale colors are pulled toward [NEUTRAL].
const MUTE_AMOUNT: f32 = 0.7;

/// Dark gray (in linear RGB) that out-of-scale colors are blended toward.
const NEUTRAL: (f32, f32, f32) = (0.04, 0.04, 0.045);

/// Perfect fifth in semitones; stepping by it visits all twelve pitch classes.
const FIFTH: u8 = 7;

lazy_static! {
  static ref WHEEL: ColorPalette = ColorPalette::default_gradient(OCTAVE as usize);
}

/// Ordering used to assign wheel colors to pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToneColorType {
  /// Neighbors on the circle of fifths get neighboring colors, so the notes of
  /// any major scale form one contiguous arc of the wheel.
  #[default]
  CircleOfFifths,

  /// Neighboring semitones get neighboring colors.
  Chromatic,
}

impl ToneColorType {
  pub const ALL: [ToneColorType; 2] = [ToneColorType::CircleOfFifths, ToneColorType::Chromatic];

  /// Position on the color wheel for a pitch class `interval` semitones above the root.
  pub fn wheel_index(&self, interval: u8) -> usize {
    let interval = interval % OCTAVE as u8;
    match self {
      ToneColorType::CircleOfFifths => ((interval as usize) * FIFTH as usize) % OCTAVE as usize,
      ToneColorType::Chromatic => interval as usize,
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      ToneColorType::CircleOfFifths => "Circle of Fifths",
      ToneColorType::Chromatic => "Chromatic",
    }
  }
}

impl Display for ToneColorType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for ToneColorType {
  type Err = Report<IsogridError>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match normalize_name(s).as_str() {
      "circleoffifths" | "fifths" => Ok(ToneColorType::CircleOfFifths),
      "chromatic" => Ok(ToneColorType::Chromatic),
      _ => Err(report!(IsogridError::UnknownToneColorType(s.to_string()))),
    }
  }
}

/// The display treatment for one pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadColor {
  pub fill: LinSrgb,
  pub text: LinSrgb,
  pub in_scale: bool,
}

impl PadColor {
  pub fn fill_hex(&self) -> String {
    color_hex(self.fill)
  }

  pub fn text_hex(&self) -> String {
    color_hex(self.text)
  }
}

/// Picks the color for `pitch_class` on a keyboard rooted at `root`.
///
/// Membership in `scale` only depends on the interval above the root, never on the
/// color scheme; the scheme only changes the hue.
///
/// ```rust
/// use isogrid_core::color::{color_for, ToneColorType};
/// use isogrid_core::pitch::PitchClass;
/// use isogrid_core::scale::Scale;
///
/// let c = PitchClass::of(0);
/// let root = color_for(c, c, Scale::Major, ToneColorType::CircleOfFifths);
/// assert!(root.in_scale);
/// assert_eq!(root.fill_hex(), "#ff0000");
///
/// let c_sharp = color_for(PitchClass::of(1), c, Scale::Major, ToneColorType::Chromatic);
/// assert!(!c_sharp.in_scale);
/// ```
pub fn color_for(
  pitch_class: PitchClass,
  root: PitchClass,
  scale: Scale,
  scheme: ToneColorType,
) -> PadColor {
  let interval = pitch_class.interval_above(root);
  let in_scale = scale.contains(pitch_class, root);
  let hue = WHEEL.get(scheme.wheel_index(interval));

  let fill = if in_scale {
    hue
  } else {
    let (r, g, b) = NEUTRAL;
    blend(hue, LinSrgb::new(r, g, b), MUTE_AMOUNT)
  };

  PadColor {
    fill,
    text: text_color_for_bgcolor(fill),
    in_scale,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pc(i: u8) -> PitchClass {
    PitchClass::new(i).unwrap()
  }

  #[test]
  fn major_on_c_classifies_the_same_for_every_scheme() {
    let root = pc(0);
    for scheme in ToneColorType::ALL {
      let in_scale: Vec<u8> = PitchClass::all()
        .filter(|p| color_for(*p, root, Scale::Major, scheme).in_scale)
        .map(|p| p.index())
        .collect();
      let out_of_scale: Vec<u8> = PitchClass::all()
        .filter(|p| !color_for(*p, root, Scale::Major, scheme).in_scale)
        .map(|p| p.index())
        .collect();

      assert_eq!(in_scale, vec![0, 2, 4, 5, 7, 9, 11], "{scheme}");
      assert_eq!(out_of_scale, vec![1, 3, 6, 8, 10], "{scheme}");
    }
  }

  #[test]
  fn circle_of_fifths_puts_fifths_next_to_each_other() {
    let scheme = ToneColorType::CircleOfFifths;
    assert_eq!(scheme.wheel_index(0), 0);
    assert_eq!(scheme.wheel_index(7), 1);
    assert_eq!(scheme.wheel_index(2), 2);
    assert_eq!(scheme.wheel_index(5), 11);
  }

  #[test]
  fn both_schemes_visit_every_wheel_color_once() {
    for scheme in ToneColorType::ALL {
      let mut seen: Vec<usize> = (0..12).map(|i| scheme.wheel_index(i)).collect();
      seen.sort();
      assert_eq!(seen, (0..12).collect::<Vec<usize>>(), "{scheme}");
    }
  }

  #[test]
  fn schemes_differ_only_in_hue() {
    let root = pc(0);
    let g_fifths = color_for(pc(7), root, Scale::Major, ToneColorType::CircleOfFifths);
    let g_chromatic = color_for(pc(7), root, Scale::Major, ToneColorType::Chromatic);
    assert_eq!(g_fifths.in_scale, g_chromatic.in_scale);
    assert_ne!(g_fifths.fill_hex(), g_chromatic.fill_hex());
  }

  #[test]
  fn colors_are_relative_to_the_root() {
    // the root always gets the first wheel color, whatever pitch class it is
    for root in PitchClass::all() {
      let c = color_for(root, root, Scale::Major, ToneColorType::CircleOfFifths);
      assert_eq!(c.fill_hex(), "#ff0000");
    }
  }

  #[test]
  fn out_of_scale_colors_are_muted() {
    let root = pc(0);
    let muted = color_for(pc(1), root, Scale::Major, ToneColorType::Chromatic);
    let full = color_for(pc(1), root, Scale::Chromatic, ToneColorType::Chromatic);
    assert!(full.in_scale);
    assert!(!muted.in_scale);
    assert!(muted.fill.red < full.fill.red);
    assert_ne!(muted.fill_hex(), full.fill_hex());
  }

  #[test]
  fn parses_scheme_names() {
    assert_eq!(
      "circle-of-fifths".parse::<ToneColorType>().unwrap(),
      ToneColorType::CircleOfFifths
    );
    assert_eq!("Chromatic".parse::<ToneColorType>().unwrap(), ToneColorType::Chromatic);
    assert!("rainbow".parse::<ToneColorType>().is_err());
  }
}
