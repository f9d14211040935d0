//! Easing curves for tweens.

/// Timing curve applied to each keyframe segment of a [`crate::Tween`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` (0.0-1.0) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier timing function at `t`.
///
/// The curve's x component is monotonic for control points in `0..=1`, so
/// bisection on the curve parameter always converges.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let bezier = |u: f32, p1: f32, p2: f32| {
        let v = 1.0 - u;
        3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
    };

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    let mut u = t;
    for _ in 0..32 {
        let x = bezier(u, x1, x2);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }

    bezier(u, y1, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < 1e-4);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ease_in_out_shape() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-3);
        // Slow start, slow finish
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
        // Monotonic
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = e.apply(i as f32 / 20.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
