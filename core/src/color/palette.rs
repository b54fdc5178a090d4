use palette::{Gradient, LinSrgb};

/// Control points along an "RYB" color wheel, starting at red and moving through
/// purple, blue, green, and yellow back toward orange.
const RYB_WHEEL: [(u8, u8, u8); 12] = [
  (0xff, 0x00, 0x00),
  (0xbf, 0x00, 0x41),
  (0x80, 0x00, 0x80),
  (0x55, 0x30, 0x8d),
  (0x2a, 0x60, 0x99),
  (0x15, 0x84, 0x66),
  (0x00, 0xa9, 0x33),
  (0x81, 0xd4, 0x1a),
  (0xff, 0xff, 0x00),
  (0xff, 0xbf, 0x00),
  (0xff, 0x80, 0x00),
  (0xff, 0x40, 0x00),
];

/// A fixed number of colors sampled evenly from a gradient.
/// Indexing wraps around, so any integer index is valid.
#[derive(Debug, PartialEq)]
pub struct ColorPalette {
  divisions: usize,
  colors: Vec<LinSrgb>,
}

impl ColorPalette {
  pub fn new(gradient: Gradient<LinSrgb>, divisions: usize) -> Self {
    let colors = gradient.take(divisions).collect();
    ColorPalette { divisions, colors }
  }

  pub fn default_gradient(divisions: usize) -> Self {
    Self::new(wheel_gradient(), divisions)
  }

  pub fn get(&self, index: usize) -> LinSrgb {
    let index = index % self.divisions;
    self.colors[index]
  }
}

fn wheel_gradient() -> Gradient<LinSrgb> {
  // TODO: lerp over one of the Lab / Lch color spaces?
  let ryb_colors: Vec<LinSrgb<f32>> = RYB_WHEEL
    .iter()
    .map(|(r, g, b)| LinSrgb::<u8>::new(*r, *g, *b).into_format())
    .collect();

  Gradient::new(ryb_colors)
}
