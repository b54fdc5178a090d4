//! Layout, gesture, and coloring logic for an isomorphic grid keyboard.
//!
//! Pads are arranged so that one step to the right is always a semitone and one
//! row up is always a perfect fourth. The [keyboard::Keyboard] type ties the pieces
//! together into a view model plus an event emitter; the host application owns the
//! set of sounding notes and the [settings::Settings] value.
pub mod color;
pub mod error;
pub mod gesture;
pub mod grid;
pub mod keyboard;
pub mod pitch;
pub mod scale;
pub mod settings;
pub mod sizing;

/// A MIDI note number. Values outside of 0 ..= 127 are accepted and passed through
/// unchanged; clamping is up to the host.
pub type Midi = i32;
