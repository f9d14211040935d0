//! Linear RGB color values used by the rasterizer.

use ratatui::style::Color;

/// An opaque color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Source-over composite `top` with the given alpha onto `self`.
    pub fn over(self, top: Rgb, alpha: f32) -> Rgb {
        self.lerp(top, alpha.clamp(0.0, 1.0))
    }

    /// Screen blend: `1 - (1 - a)(1 - b)` per channel.
    pub fn screen(self, top: Rgb) -> Rgb {
        Rgb {
            r: 1.0 - (1.0 - self.r) * (1.0 - top.r),
            g: 1.0 - (1.0 - self.g) * (1.0 - top.g),
            b: 1.0 - (1.0 - self.b) * (1.0 - top.b),
        }
    }

    /// Convert to a terminal truecolor.
    pub fn to_color(self) -> Color {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::Rgb(channel(self.r), channel(self.g), channel(self.b))
    }
}

/// A color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(rgb: Rgb, alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        Rgba {
            rgb: self.rgb.lerp(other.rgb, t),
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }
}
