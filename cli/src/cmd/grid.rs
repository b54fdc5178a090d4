use error_stack::{report, Report};
use log::debug;

use isogrid_core::color::utils::to_rgb8;
use isogrid_core::error::IsogridError;
use isogrid_core::keyboard::{Keyboard, KeyboardView, PadView};
use isogrid_core::settings::Settings;
use isogrid_core::sizing::BoxSize;
use isogrid_core::Midi;

const NO_ACTIVE_NOTES: [Midi; 0] = [];

pub fn run_grid(
  settings: &Settings,
  (rows, cols): (Option<usize>, Option<usize>),
  (width, height): (Option<f64>, Option<f64>),
  color: bool,
) -> Result<(), Report<IsogridError>> {
  let view = grid_view(settings, rows.zip(cols), width.zip(height))?;
  debug!("showing {} x {} pads", view.extent.rows, view.extent.cols);
  print!("{}", render(&view, color));
  Ok(())
}

/// Builds the view a keyboard would show: either exactly `rows` x `cols` pads, or as
/// many as fit into a `width` x `height` container, or the configured maximum.
fn grid_view(
  settings: &Settings,
  rows_cols: Option<(usize, usize)>,
  container: Option<(f64, f64)>,
) -> Result<KeyboardView, Report<IsogridError>> {
  let mut keyboard = Keyboard::new();

  if let Some((rows, cols)) = rows_cols {
    for (name, n) in [("rows", rows), ("cols", cols)] {
      if i32::try_from(n).is_err() {
        return Err(report!(IsogridError::InvalidSettings(format!(
          "--{name} {n} is larger than {}",
          i32::MAX
        ))));
      }
    }
    let settings = Settings {
      max_rows: rows,
      max_cols: cols,
      ..settings.clone()
    };
    return Ok(keyboard.view(&settings, &NO_ACTIVE_NOTES[..]));
  }

  if let Some((width, height)) = container {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
      return Err(report!(IsogridError::InvalidContainerSize(format!(
        "{width} x {height}"
      ))));
    }
    keyboard.resize(Some(BoxSize::new(width, height)));
  }

  Ok(keyboard.view(settings, &NO_ACTIVE_NOTES[..]))
}

fn render(view: &KeyboardView, color: bool) -> String {
  let mut out = String::new();
  for row in &view.rows {
    let cells: Vec<String> = row.iter().map(|pad| render_pad(pad, color)).collect();
    out.push_str(&cells.join(" "));
    out.push('\n');
  }
  out
}

fn render_pad(pad: &PadView, color: bool) -> String {
  if !color {
    return format!("{:>4}", pad.label);
  }
  let (br, bg, bb) = to_rgb8(pad.color.fill);
  let (fr, fg, fb) = to_rgb8(pad.color.text);
  format!(
    "\x1b[48;2;{br};{bg};{bb}m\x1b[38;2;{fr};{fg};{fb}m{:^5}\x1b[0m",
    pad.label
  )
}
