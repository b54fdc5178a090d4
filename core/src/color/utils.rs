use palette::{IntoColor, LinSrgb, Srgb, Xyz};

/// Returns the color as a CSS-compatible hex string, with `#` prefix.
pub fn color_hex(col: LinSrgb) -> String {
  let col: LinSrgb<u8> = col.into_format();
  format!("#{col:x}")
}

/// Returns a legible text color for the given background color.
///
/// Returns white for "dark" colors (luminance < 0.5) and black for "bright" colors.
pub fn text_color_for_bgcolor(bg: LinSrgb) -> LinSrgb {
  let xyz: Xyz = Srgb::from_linear(bg).into_color();
  let luminance = xyz.y;
  if luminance < 0.5 {
    LinSrgb::new(1.0, 1.0, 1.0)
  } else {
    LinSrgb::new(0.0, 0.0, 0.0)
  }
}

/// Linear blend from `from` toward `to`. `amount` of 0 returns `from`, 1 returns `to`.
pub fn blend(from: LinSrgb, to: LinSrgb, amount: f32) -> LinSrgb {
  let t = amount.clamp(0.0, 1.0);
  LinSrgb::new(
    from.red + (to.red - from.red) * t,
    from.green + (to.green - from.green) * t,
    from.blue + (to.blue - from.blue) * t,
  )
}

/// Packs a color into 8-bit (r, g, b), e.g. for terminal escape codes.
pub fn to_rgb8(col: LinSrgb) -> (u8, u8, u8) {
  let c: LinSrgb<u8> = col.into_format();
  (c.red, c.green, c.blue)
}

pub trait ToHexColorStr {
  fn to_hex_color(&self) -> String;
}

impl ToHexColorStr for LinSrgb {
  fn to_hex_color(&self) -> String {
    color_hex(*self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hex_strings_are_lowercase_and_prefixed() {
    assert_eq!(color_hex(LinSrgb::new(1.0, 0.0, 0.0)), "#ff0000");
    assert_eq!(LinSrgb::new(0.0, 0.0, 1.0).to_hex_color(), "#0000ff");
  }

  #[test]
  fn text_color_contrasts_with_background() {
    assert_eq!(
      to_rgb8(text_color_for_bgcolor(LinSrgb::new(0.0, 0.0, 0.0))),
      (255, 255, 255)
    );
    assert_eq!(
      to_rgb8(text_color_for_bgcolor(LinSrgb::new(1.0, 1.0, 1.0))),
      (0, 0, 0)
    );
  }

  #[test]
  fn blend_endpoints() {
    let a = LinSrgb::new(1.0, 0.0, 0.0);
    let b = LinSrgb::new(0.0, 0.0, 1.0);
    assert_eq!(to_rgb8(blend(a, b, 0.0)), (255, 0, 0));
    assert_eq!(to_rgb8(blend(a, b, 1.0)), (0, 0, 255));
    assert_eq!(to_rgb8(blend(a, b, 7.0)), (0, 0, 255));
  }
}
