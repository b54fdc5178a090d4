//! Composes sizing, grid generation, coloring, and gestures into one keyboard.
//!
//! [Keyboard] holds no note state and never changes [Settings]. It renders a
//! [KeyboardView] from whatever the host hands it, and reports what the user did
//! through a [KeyboardHost].
use log::debug;

use crate::color::{color_for, PadColor};
use crate::gesture::{Action, Effect, Gesture};
use crate::grid::generate_grid;
use crate::pitch::{note_name, PitchClass};
use crate::settings::{PanDirection, Settings};
use crate::sizing::{BoxSize, Extent, SizeTracker};
use crate::Midi;

pub use crate::gesture::ActiveNotes;

/// Receives what the keyboard wants to happen. Implemented by the host, which owns
/// the active notes and the settings.
///
/// Activation and deactivation must be idempotent on the host side: activating a
/// note that's already sounding, or deactivating one that isn't, is a no-op.
pub trait KeyboardHost {
  fn note_activated(&mut self, midi: Midi);

  fn note_deactivated(&mut self, midi: Midi);

  /// Called when a pan control is used, with the complete replacement settings.
  /// Hosts without pan controls can ignore it.
  fn settings_changed(&mut self, next: Settings) {
    debug!("settings change ignored by host: {next:?}");
  }
}

/// Everything needed to draw one pad.
#[derive(Debug, Clone, PartialEq)]
pub struct PadView {
  pub midi: Midi,
  pub pitch_class: PitchClass,
  pub label: String,
  pub color: PadColor,
  /// Whether the host reports this note as sounding.
  pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyboardView {
  pub extent: Extent,
  pub key_length: f64,
  /// Render order: index 0 is the top row.
  pub rows: Vec<Vec<PadView>>,
}

impl KeyboardView {
  pub fn pads(&self) -> impl Iterator<Item = &PadView> {
    self.rows.iter().flatten()
  }
}

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
  gesture: Gesture,
  size: SizeTracker,
}

impl Keyboard {
  pub fn new() -> Keyboard {
    Keyboard::default()
  }

  pub fn gesture(&self) -> &Gesture {
    &self.gesture
  }

  /// Records a new measurement of the container. `None` means it couldn't be
  /// measured (e.g. not mounted yet) and keeps the last known size.
  pub fn resize(&mut self, container: Option<BoxSize>) -> bool {
    self.size.observe(container)
  }

  pub fn extent(&self, settings: &Settings) -> Extent {
    self.size.extent(settings)
  }

  /// Builds the pads to render for the current settings and container size,
  /// highlighting the notes the host reports as active.
  pub fn view<A: ActiveNotes + ?Sized>(&self, settings: &Settings, active: &A) -> KeyboardView {
    let extent = self.extent(settings);
    let root = PitchClass::of(settings.base_note);
    let grid = generate_grid(settings.base_note, settings.offset_x, settings.offset_y, extent);

    let rows = grid
      .into_rows()
      .into_iter()
      .map(|row| {
        row
          .into_iter()
          .map(|cell| PadView {
            midi: cell.midi,
            pitch_class: cell.pitch_class,
            label: note_name(cell.midi),
            color: color_for(
              cell.pitch_class,
              root,
              settings.scale_highlight,
              settings.tone_color_type,
            ),
            active: active.is_active(cell.midi),
          })
          .collect()
      })
      .collect();

    KeyboardView {
      extent,
      key_length: settings.key_length,
      rows,
    }
  }

  /// Feeds a pointer event through the gesture state machine and forwards the
  /// resulting note changes to the host.
  pub fn pointer<A, H>(&mut self, settings: &Settings, action: Action, active: &A, host: &mut H)
  where
    A: ActiveNotes + ?Sized,
    H: KeyboardHost + ?Sized,
  {
    for effect in self.gesture.dispatch(settings.mode, action, active) {
      match effect {
        Effect::ActivateNote(m) => host.note_activated(m),
        Effect::DeactivateNote(m) => host.note_deactivated(m),
      }
    }
  }

  /// Asks the host to shift the grid one step. The keyboard's own settings value is
  /// untouched; the host decides whether to accept the new one.
  pub fn pan<H: KeyboardHost + ?Sized>(&self, settings: &Settings, direction: PanDirection, host: &mut H) {
    let next = settings.panned(direction);
    debug!("pan {direction:?}: offset is now ({}, {})", next.offset_x, next.offset_y);
    host.settings_changed(next);
  }
}
