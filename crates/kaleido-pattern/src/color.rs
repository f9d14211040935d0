//! Color utility functions for the pattern.

use kaleido_core::Rgb;

/// Container background behind the pattern (gray-900).
pub const BACKDROP: Rgb = Rgb::from_hex(0x111827);

/// Particle saturation as a fraction.
pub const PARTICLE_SATURATION: f32 = 0.7;

/// Particle lightness as a fraction.
pub const PARTICLE_LIGHTNESS: f32 = 0.5;

/// Color of a particle with the given hue in degrees.
pub fn particle_color(hue: f32) -> Rgb {
    hsl_to_rgb(hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    if s == 0.0 {
        return Rgb::new(l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    Rgb::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5).to_color(), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5).to_color(), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5).to_color(), Color::Rgb(0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.5), Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_particle_color() {
        // hsl(0, 70%, 50%) is rgb(217, 38, 38)
        assert_eq!(particle_color(0.0).to_color(), Color::Rgb(217, 38, 38));
    }
}
