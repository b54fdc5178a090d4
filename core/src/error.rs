use error_stack::Context;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum IsogridError {
  InvalidSettings(String),
  InvalidKeyLength(f64),

  UnknownMode(String),
  UnknownScale(String),
  UnknownToneColorType(String),

  InvalidGestureEvent(String),
  InvalidContainerSize(String),
}

impl Context for IsogridError {}

impl Display for IsogridError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use IsogridError::*;
    match self {
      InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),

      InvalidKeyLength(len) => write!(f, "invalid key length {len}. Must be a finite number > 0"),

      UnknownMode(s) => write!(f, "unknown mode '{s}'. Expected one of: record, play"),

      UnknownScale(s) => write!(f, "unknown scale '{s}'"),

      UnknownToneColorType(s) => write!(
        f,
        "unknown tone color type '{s}'. Expected one of: circle-of-fifths, chromatic"
      ),

      InvalidGestureEvent(s) => write!(f, "invalid gesture event: {s}"),

      InvalidContainerSize(msg) => write!(f, "invalid container size: {msg}"),
    }
  }
}

/// Normalizes a user-supplied enum name for case, dash, underscore and whitespace
/// insensitive matching. "Circle of Fifths", "circle-of-fifths" and "CIRCLE_OF_FIFTHS"
/// all become "circleoffifths".
pub(crate) fn normalize_name(s: &str) -> String {
  s.chars()
    .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
    .flat_map(char::to_lowercase)
    .collect()
}
