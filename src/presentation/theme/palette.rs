//! Color shading helpers.

use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Returns `color` with its lightness and saturation replaced.
#[must_use]
pub fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
    let mut hsl = to_hsl(color);
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb: Rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_hsl(color: Color) -> Hsl {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(i) => indexed_rgb(i),
        named => named_rgb(named),
    };
    Rgb::new(r, g, b).to_hsl()
}

const fn named_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        _ => (255, 255, 255),
    }
}

fn indexed_rgb(i: u8) -> (u8, u8, u8) {
    const BASIC: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    match i {
        0..=15 => named_rgb(BASIC[usize::from(i)]),
        16..=231 => {
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            let i = i - 16;
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_sets_lightness() {
        let Color::Rgb(r, g, b) = shade(Color::Cyan, 1.0, 0.0) else {
            panic!("expected RGB color");
        };
        assert_eq!((r, g, b), (255, 255, 255));
    }

    #[test]
    fn test_indexed_cube() {
        assert_eq!(indexed_rgb(208), (255, 135, 0));
        assert_eq!(indexed_rgb(16), (0, 0, 0));
        assert_eq!(indexed_rgb(231), (255, 255, 255));
        assert_eq!(indexed_rgb(1), (170, 0, 0));
        assert_eq!(indexed_rgb(255), (238, 238, 238));
    }
}
