//! Works out how many pads fit into the hosting container.
//!
//! The configured `max_rows` / `max_cols` are upper bounds; the visible extent
//! shrinks to whatever fits so pads are never clipped.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Gap around each pad, in the same display units as `key_length`.
pub const KEY_MARGIN: f64 = 2.0;

/// Number of visible rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Extent {
  pub rows: usize,
  pub cols: usize,
}

impl Extent {
  pub fn new(rows: usize, cols: usize) -> Extent {
    Extent { rows, cols }
  }

  pub fn is_empty(&self) -> bool {
    self.rows == 0 || self.cols == 0
  }
}

/// Pixel box of the hosting container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxSize {
  pub width: f64,
  pub height: f64,
}

impl BoxSize {
  pub fn new(width: f64, height: f64) -> BoxSize {
    BoxSize { width, height }
  }
}

/// Edge length of the square each pad occupies, margins included.
pub fn pad_cell_size(key_length: f64) -> f64 {
  key_length + 2.0 * KEY_MARGIN
}

/// How many whole pads fit along `length`, floored at zero.
fn fit(length: f64, cell_size: f64) -> usize {
  let n = ((length - 2.0 * KEY_MARGIN) / cell_size).floor();
  // NaN and negative counts both saturate to 0 in the cast
  n.max(0.0) as usize
}

/// The largest extent that fits into `container` without exceeding the configured
/// maxima.
///
/// ```rust
/// use isogrid_core::settings::Settings;
/// use isogrid_core::sizing::{visible_extent, BoxSize, Extent};
///
/// let settings = Settings::default(); // 60 unit pads, at most 13 x 13
/// let extent = visible_extent(BoxSize::new(400.0, 10_000.0), &settings);
/// assert_eq!(extent, Extent::new(13, 6));
/// ```
pub fn visible_extent(container: BoxSize, settings: &Settings) -> Extent {
  let cell = pad_cell_size(settings.key_length);
  Extent {
    rows: fit(container.height, cell).min(settings.max_rows),
    cols: fit(container.width, cell).min(settings.max_cols),
  }
}

/// Remembers the last measured container box.
///
/// Measurements can be missing (e.g. the container isn't mounted yet). A missing
/// measurement never clears a previous one, and until the first real measurement
/// arrives the extent falls back to the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeTracker {
  container: Option<BoxSize>,
}

impl SizeTracker {
  pub fn new() -> SizeTracker {
    SizeTracker::default()
  }

  /// Records a new measurement. Returns true if the remembered box changed.
  pub fn observe(&mut self, measured: Option<BoxSize>) -> bool {
    match measured {
      Some(size) if self.container != Some(size) => {
        debug!("container resized to {}x{}", size.width, size.height);
        self.container = Some(size);
        true
      }
      Some(_) => false,
      None => {
        if self.container.is_none() {
          debug!("container not measurable yet");
        }
        false
      }
    }
  }

  pub fn extent(&self, settings: &Settings) -> Extent {
    match self.container {
      Some(size) => visible_extent(size, settings),
      None => Extent::new(settings.max_rows, settings.max_cols),
    }
  }
}
