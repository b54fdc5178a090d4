use std::fmt::Display;
use std::str::FromStr;

use error_stack::{report, Report};
use serde::{Deserialize, Serialize};

use crate::color::ToneColorType;
use crate::error::{normalize_name, IsogridError};
use crate::scale::Scale;
use crate::Midi;

pub const DEFAULT_BASE_NOTE: Midi = 48; // C3
pub const DEFAULT_MAX_ROWS: usize = 13;
pub const DEFAULT_MAX_COLS: usize = 13;
pub const DEFAULT_KEY_LENGTH: f64 = 60.0;

/// How pointer gestures turn into note activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
  /// Click to toggle notes on and off, regardless of how long the pointer is held.
  #[default]
  Record,

  /// Notes sound only while the pointer is held over them.
  Play,
}

impl Mode {
  pub const ALL: [Mode; 2] = [Mode::Record, Mode::Play];
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Mode::Record => write!(f, "Record"),
      Mode::Play => write!(f, "Play"),
    }
  }
}

impl FromStr for Mode {
  type Err = Report<IsogridError>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match normalize_name(s).as_str() {
      "record" => Ok(Mode::Record),
      "play" => Ok(Mode::Play),
      _ => Err(report!(IsogridError::UnknownMode(s.to_string()))),
    }
  }
}

/// Which way a pan control shifts the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanDirection {
  /// `offset_x - 1`: every pad drops a semitone.
  Left,
  /// `offset_x + 1`: every pad rises a semitone.
  Right,
  /// `offset_y + 1`: every pad rises a fourth.
  Up,
  /// `offset_y - 1`: every pad drops a fourth.
  Down,
}

/// Complete keyboard configuration. Owned by the host and never mutated by the
/// keyboard itself; see [Settings::panned].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
  pub base_note: Midi,
  pub mode: Mode,
  pub offset_x: i32,
  pub offset_y: i32,
  pub max_rows: usize,
  pub max_cols: usize,
  pub key_length: f64,
  pub scale_highlight: Scale,
  pub tone_color_type: ToneColorType,
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      base_note: DEFAULT_BASE_NOTE,
      mode: Mode::default(),
      offset_x: 0,
      offset_y: 0,
      max_rows: DEFAULT_MAX_ROWS,
      max_cols: DEFAULT_MAX_COLS,
      key_length: DEFAULT_KEY_LENGTH,
      scale_highlight: Scale::default(),
      tone_color_type: ToneColorType::default(),
    }
  }
}

impl Settings {
  /// Returns a copy of self with the pan offset shifted one step. Offsets
  /// already at the ends of the `i32` range stay there.
  pub fn panned(&self, direction: PanDirection) -> Settings {
    let (dx, dy) = match direction {
      PanDirection::Left => (-1, 0),
      PanDirection::Right => (1, 0),
      PanDirection::Up => (0, 1),
      PanDirection::Down => (0, -1),
    };
    Settings {
      offset_x: self.offset_x.saturating_add(dx),
      offset_y: self.offset_y.saturating_add(dy),
      ..self.clone()
    }
  }

  pub fn with_mode(&self, mode: Mode) -> Settings {
    Settings {
      mode,
      ..self.clone()
    }
  }
}

/// Settings as supplied by a host, with any field left out.
///
/// Each absent field is defaulted on its own when resolving into [Settings];
/// unrecognized fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialSettings {
  pub base_note: Option<Midi>,
  pub mode: Option<Mode>,
  pub offset_x: Option<i32>,
  pub offset_y: Option<i32>,
  pub max_rows: Option<usize>,
  pub max_cols: Option<usize>,
  pub key_length: Option<f64>,
  pub scale_highlight: Option<Scale>,
  pub tone_color_type: Option<ToneColorType>,
}

impl PartialSettings {
  /// Parses a JSON object such as `{"baseNote": 60, "mode": "Play"}`.
  pub fn from_json(json: &str) -> Result<PartialSettings, Report<IsogridError>> {
    serde_json::from_str(json).map_err(|e| {
      report!(IsogridError::InvalidSettings(e.to_string()))
        .attach_printable(format!("settings json: {json}"))
    })
  }

  pub fn resolve(self) -> Result<Settings, Report<IsogridError>> {
    Settings::try_from(self)
  }
}

impl TryFrom<PartialSettings> for Settings {
  type Error = Report<IsogridError>;

  fn try_from(partial: PartialSettings) -> Result<Self, Self::Error> {
    let defaults = Settings::default();
    let key_length = partial.key_length.unwrap_or(defaults.key_length);
    if !key_length.is_finite() || key_length <= 0.0 {
      return Err(report!(IsogridError::InvalidKeyLength(key_length)));
    }

    Ok(Settings {
      base_note: partial.base_note.unwrap_or(defaults.base_note),
      mode: partial.mode.unwrap_or(defaults.mode),
      offset_x: partial.offset_x.unwrap_or(defaults.offset_x),
      offset_y: partial.offset_y.unwrap_or(defaults.offset_y),
      max_rows: partial.max_rows.unwrap_or(defaults.max_rows),
      max_cols: partial.max_cols.unwrap_or(defaults.max_cols),
      key_length,
      scale_highlight: partial.scale_highlight.unwrap_or(defaults.scale_highlight),
      tone_color_type: partial.tone_color_type.unwrap_or(defaults.tone_color_type),
    })
  }
}

impl From<Settings> for PartialSettings {
  fn from(s: Settings) -> Self {
    PartialSettings {
      base_note: Some(s.base_note),
      mode: Some(s.mode),
      offset_x: Some(s.offset_x),
      offset_y: Some(s.offset_y),
      max_rows: Some(s.max_rows),
      max_cols: Some(s.max_cols),
      key_length: Some(s.key_length),
      scale_highlight: Some(s.scale_highlight),
      tone_color_type: Some(s.tone_color_type),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_documented_values() {
    let s = Settings::default();
    assert_eq!(s.base_note, 48);
    assert_eq!(s.mode, Mode::Record);
    assert_eq!((s.offset_x, s.offset_y), (0, 0));
    assert_eq!((s.max_rows, s.max_cols), (13, 13));
    assert_eq!(s.key_length, 60.0);
    assert_eq!(s.scale_highlight, Scale::Major);
    assert_eq!(s.tone_color_type, ToneColorType::CircleOfFifths);
  }

  #[test]
  fn empty_partial_resolves_to_defaults() {
    let s = PartialSettings::default().resolve().unwrap();
    assert_eq!(s, Settings::default());
  }

  #[test]
  fn each_field_is_defaulted_independently() {
    let partial = PartialSettings::from_json(r#"{"baseNote": 60, "mode": "Play", "offsetY": -2}"#)
      .unwrap();
    let s = partial.resolve().unwrap();
    assert_eq!(s.base_note, 60);
    assert_eq!(s.mode, Mode::Play);
    assert_eq!(s.offset_y, -2);
    assert_eq!(s.offset_x, 0);
    assert_eq!(s.max_cols, 13);
    assert_eq!(s.tone_color_type, ToneColorType::CircleOfFifths);
  }

  #[test]
  fn enum_fields_use_variant_names() {
    let s = PartialSettings::from_json(
      r#"{"scaleHighlight": "MinorPentatonic", "toneColorType": "Chromatic"}"#,
    )
    .unwrap()
    .resolve()
    .unwrap();
    assert_eq!(s.scale_highlight, Scale::MinorPentatonic);
    assert_eq!(s.tone_color_type, ToneColorType::Chromatic);
  }

  #[test]
  fn unknown_fields_are_rejected() {
    let err = PartialSettings::from_json(r#"{"baseNote": 60, "tempo": 120}"#).unwrap_err();
    assert!(matches!(
      err.current_context(),
      IsogridError::InvalidSettings(_)
    ));
  }

  #[test]
  fn negative_extents_are_rejected() {
    assert!(PartialSettings::from_json(r#"{"maxRows": -1}"#).is_err());
  }

  #[test]
  fn non_positive_key_length_is_rejected() {
    for len in [0.0, -10.0, f64::INFINITY] {
      let partial = PartialSettings {
        key_length: Some(len),
        ..PartialSettings::default()
      };
      let err = partial.resolve().unwrap_err();
      assert_eq!(err.current_context(), &IsogridError::InvalidKeyLength(len));
    }
  }

  #[test]
  fn settings_round_trip_through_partial() {
    let s = Settings {
      base_note: 62,
      mode: Mode::Play,
      offset_x: 3,
      ..Settings::default()
    };
    let back = PartialSettings::from(s.clone()).resolve().unwrap();
    assert_eq!(back, s);
  }

  #[test]
  fn settings_serialize_with_camel_case_keys() {
    let json = serde_json::to_value(Settings::default()).unwrap();
    assert_eq!(json["baseNote"], 48);
    assert_eq!(json["toneColorType"], "CircleOfFifths");
    assert_eq!(json["mode"], "Record");
  }

  #[test]
  fn panning_shifts_only_the_offset() {
    let s = Settings::default();
    assert_eq!(s.panned(PanDirection::Right).offset_x, 1);
    assert_eq!(s.panned(PanDirection::Left).offset_x, -1);
    assert_eq!(s.panned(PanDirection::Up).offset_y, 1);
    assert_eq!(s.panned(PanDirection::Down).offset_y, -1);

    let panned = s.panned(PanDirection::Up);
    assert_eq!(
      Settings {
        offset_y: 0,
        ..panned
      },
      s
    );
  }

  #[test]
  fn panning_at_the_edge_of_the_range_does_not_overflow() {
    let s = PartialSettings::from_json(r#"{"offsetX": 2147483647, "offsetY": -2147483648}"#)
      .unwrap()
      .resolve()
      .unwrap();
    assert_eq!(s.panned(PanDirection::Right).offset_x, i32::MAX);
    assert_eq!(s.panned(PanDirection::Down).offset_y, i32::MIN);
    assert_eq!(s.panned(PanDirection::Left).offset_x, i32::MAX - 1);
  }

  #[test]
  fn parses_mode_names() {
    assert_eq!("PLAY".parse::<Mode>().unwrap(), Mode::Play);
    assert_eq!("record".parse::<Mode>().unwrap(), Mode::Record);
    assert!("loop".parse::<Mode>().is_err());
  }
}
