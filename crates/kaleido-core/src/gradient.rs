//! Radial gradient fills for the pattern triangles.

use crate::color::{Rgb, Rgba};

/// One end of a two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Rgb,
    pub opacity: f32,
}

/// A two-stop radial gradient centred on the filled shape's bounding box,
/// with a radius of half the box in each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    /// Stop at the center (offset 0%).
    pub inner: GradientStop,
    /// Stop at the rim (offset 100%) and beyond.
    pub outer: GradientStop,
}

impl RadialGradient {
    /// Sample the gradient at normalized radius `t`. Values past the rim pad
    /// with the outer stop.
    pub fn sample(&self, t: f32) -> Rgba {
        let inner = Rgba::new(self.inner.color, self.inner.opacity);
        let outer = Rgba::new(self.outer.color, self.outer.opacity);
        inner.lerp(outer, t.clamp(0.0, 1.0))
    }
}

/// The two named gradients the pattern alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientId {
    /// Indigo to violet.
    A,
    /// Emerald to blue.
    B,
}

impl GradientId {
    /// Gradient for the `index`-th shape in an alternating A, B, A, ... run.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            GradientId::A
        } else {
            GradientId::B
        }
    }

    /// Look up the gradient definition.
    pub fn gradient(self) -> RadialGradient {
        match self {
            GradientId::A => RadialGradient {
                inner: GradientStop {
                    color: Rgb::from_hex(0x4F46E5),
                    opacity: 0.8,
                },
                outer: GradientStop {
                    color: Rgb::from_hex(0x7C3AED),
                    opacity: 0.2,
                },
            },
            GradientId::B => RadialGradient {
                inner: GradientStop {
                    color: Rgb::from_hex(0x10B981),
                    opacity: 0.8,
                },
                outer: GradientStop {
                    color: Rgb::from_hex(0x3B82F6),
                    opacity: 0.2,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating() {
        let ids: Vec<_> = (0..6).map(GradientId::alternating).collect();
        use GradientId::{A, B};
        assert_eq!(ids, vec![A, B, A, B, A, B]);
    }

    #[test]
    fn test_sample_pads_past_rim() {
        let g = GradientId::A.gradient();
        assert!((g.sample(0.0).alpha - 0.8).abs() < 1e-6);
        assert!((g.sample(1.0).alpha - 0.2).abs() < 1e-6);
        assert_eq!(g.sample(3.0), g.sample(1.0));
        assert!((g.sample(0.5).alpha - 0.5).abs() < 1e-6);
    }
}
