//! Generates the isomorphic pitch grid.
//!
//! Moving one column to the right always adds [COLUMN_STEP] semitones and moving
//! one row up always adds [ROW_STEP] semitones, wherever you are on the grid.
//!
//! Rows are generated bottom-up from a "row start" pitch and then reversed, so
//! [Grid::rows] hands them out in render order (top row first):
//!
//! ```text
//!  row 2:  <34><35><36>   - generated last, rendered first
//!  row 1:  <29><30><31>
//!  row 0:  <24><25><26>   - generated first, starts at the anchor
//! ```
use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;
use crate::sizing::Extent;
use crate::Midi;

/// Semitones added per column to the right.
pub const COLUMN_STEP: i32 = 1;

/// Semitones added per row upward (a perfect fourth).
pub const ROW_STEP: i32 = 5;

/// Transposition applied to the base note to find the bottom-left pad.
///
/// Equal to `-(6 * COLUMN_STEP + 6 * ROW_STEP)`, which puts the base note on the
/// center pad (row 6, column 6) of the default 13 x 13 grid when both pan offsets
/// are zero.
pub const CENTERING_OFFSET: i32 = -(6 * COLUMN_STEP + 6 * ROW_STEP);

/// A single pad position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
  pub midi: Midi,
  pub pitch_class: PitchClass,
}

impl Cell {
  pub fn new(midi: Midi) -> Cell {
    Cell {
      midi,
      pitch_class: PitchClass::of(midi),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
  /// Render order: index 0 is the top row.
  rows: Vec<Vec<Cell>>,
}

impl Grid {
  /// Rows in render order, top row first.
  pub fn rows(&self) -> &[Vec<Cell>] {
    &self.rows
  }

  pub fn into_rows(self) -> Vec<Vec<Cell>> {
    self.rows
  }

  pub fn extent(&self) -> Extent {
    Extent {
      rows: self.rows.len(),
      cols: self.rows.first().map(|r| r.len()).unwrap_or(0),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  /// Looks up a cell by generation order, where row 0 is the bottom row.
  pub fn cell(&self, row_from_bottom: usize, col: usize) -> Option<Cell> {
    let row_count = self.rows.len();
    if row_from_bottom >= row_count {
      return None;
    }
    self.rows[row_count - 1 - row_from_bottom].get(col).copied()
  }

  /// All cells in render order, row by row.
  pub fn cells(&self) -> impl Iterator<Item = &Cell> {
    self.rows.iter().flatten()
  }
}

/// The pitch of the bottom-left pad for the given base note and pan offsets.
///
/// Any offsets are accepted; the arithmetic wraps at the ends of the `i32` range.
pub fn anchor_note(base_note: Midi, offset_x: i32, offset_y: i32) -> Midi {
  base_note
    .wrapping_add(CENTERING_OFFSET)
    .wrapping_add(offset_x.wrapping_mul(COLUMN_STEP))
    .wrapping_add(offset_y.wrapping_mul(ROW_STEP))
}

/// Builds a `rows x cols` grid of cells.
///
/// An extent with zero rows or zero columns produces an empty grid. Pitches are not
/// clamped to the MIDI range.
///
/// ```rust
/// use isogrid_core::grid::{generate_grid, CENTERING_OFFSET};
/// use isogrid_core::sizing::Extent;
///
/// let grid = generate_grid(60, 0, 0, Extent { rows: 1, cols: 1 });
/// assert_eq!(grid.cell(0, 0).map(|c| c.midi), Some(60 + CENTERING_OFFSET));
/// ```
pub fn generate_grid(base_note: Midi, offset_x: i32, offset_y: i32, extent: Extent) -> Grid {
  if extent.is_empty() {
    return Grid::default();
  }

  let mut row_start = anchor_note(base_note, offset_x, offset_y);
  let mut rows = Vec::with_capacity(extent.rows);
  for _ in 0..extent.rows {
    let mut midi = row_start;
    let mut row = Vec::with_capacity(extent.cols);
    for _ in 0..extent.cols {
      row.push(Cell::new(midi));
      midi = midi.wrapping_add(COLUMN_STEP);
    }
    rows.push(row);
    row_start = row_start.wrapping_add(ROW_STEP);
  }
  rows.reverse();

  Grid { rows }
}
