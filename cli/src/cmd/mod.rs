mod colors;
mod gesture;
mod grid;

use clap::Subcommand;
use error_stack::Report;
use log::debug;

use isogrid_core::error::IsogridError;
use isogrid_core::settings::{PartialSettings, Settings};

use self::{colors::run_colors, gesture::run_gesture, grid::run_grid};

#[derive(Subcommand)]
pub enum CliCommand {
  /// Prints the note names of the pads a keyboard would show
  Grid {
    /// Number of rows to show. Must be given together with --cols
    #[clap(long, value_parser, requires = "cols", conflicts_with_all = &["width", "height"])]
    rows: Option<usize>,

    #[clap(long, value_parser, requires = "rows")]
    cols: Option<usize>,

    /// Width of the container to fit pads into. Must be given together with --height
    #[clap(long, value_parser, requires = "height", conflicts_with_all = &["rows", "cols"])]
    width: Option<f64>,

    #[clap(long, value_parser, requires = "width")]
    height: Option<f64>,

    /// Paint each pad in its color using 24-bit terminal colors
    #[clap(long, action)]
    color: bool,
  },

  /// Prints the color of each pitch class for the configured root, scale and color scheme
  Colors,

  /// Replays pointer events through the gesture state machine and prints the note
  /// changes. Events are down:<midi>, up:<midi>, enter:<midi>, leave:<midi>, release
  /// and exit.
  Gesture {
    #[clap(value_parser, required = true)]
    events: Vec<String>,
  },
}

impl CliCommand {
  pub fn run(&self, settings_json: Option<&str>) -> Result<(), Report<IsogridError>> {
    let settings = load_settings(settings_json)?;
    debug!("settings: {settings:?}");

    match self {
      Self::Grid {
        rows,
        cols,
        width,
        height,
        color,
      } => run_grid(&settings, (*rows, *cols), (*width, *height), *color),

      Self::Colors => run_colors(&settings),

      Self::Gesture { events } => run_gesture(&settings, events),
    }
  }
}

fn load_settings(json: Option<&str>) -> Result<Settings, Report<IsogridError>> {
  match json {
    Some(json) => PartialSettings::from_json(json)?.resolve(),
    None => Ok(Settings::default()),
  }
}
