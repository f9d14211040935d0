//! Triangle layout generator.
//!
//! Six equilateral triangles share a vertex at the group origin and are
//! rotated 60° apart, so together they tile a hexagon. Each triangle
//! rotates and scales about that shared vertex, so the hexagon only grows
//! and shrinks during the pulse.

use kaleido_core::{GradientId, Repeat, RepeatType, Tween, ViewportSize};

/// Number of triangles in the pattern.
pub const TRIANGLE_COUNT: usize = 6;

/// Rotation offset of each triangle, in degrees.
pub const ROTATION_OFFSETS: [f32; TRIANGLE_COUNT] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// Duration of one scale/opacity pulse.
pub const PULSE_PERIOD_MS: u64 = 10_000;

/// One triangle of the pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSpec {
    /// Initial rotation about the group origin, in degrees.
    pub rotation_offset: f32,
    /// Fill gradient.
    pub gradient: GradientId,
}

/// The six triangles for one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleLayout {
    /// Side length in logical pixels.
    pub triangle_size: f32,
    pub triangles: [TriangleSpec; TRIANGLE_COUNT],
}

/// Side length of each triangle: half the viewport's longer side.
pub fn triangle_size(viewport: ViewportSize) -> f32 {
    viewport.longest_side() / 2.0
}

/// Lay out the pattern for `viewport`. Callers guarantee the viewport has
/// been measured.
pub fn generate(viewport: ViewportSize) -> TriangleLayout {
    let triangles = std::array::from_fn(|i| TriangleSpec {
        rotation_offset: ROTATION_OFFSETS[i],
        gradient: GradientId::alternating(i),
    });

    TriangleLayout {
        triangle_size: triangle_size(viewport),
        triangles,
    }
}

impl TriangleLayout {
    /// Height of each triangle.
    pub fn triangle_height(&self) -> f32 {
        self.triangle_size * 3.0_f32.sqrt() / 2.0
    }

    /// Vertices of the unrotated path: (0,0), (s,0), (s/2, s·√3/2).
    pub fn vertices(&self) -> [(f32, f32); 3] {
        let s = self.triangle_size;
        [(0.0, 0.0), (s, 0.0), (s / 2.0, self.triangle_height())]
    }

    /// Path data in SVG syntax.
    pub fn path_data(&self) -> String {
        let [_, (x1, y1), (x2, y2)] = self.vertices();
        format!("M0,0 L{x1},{y1} L{x2},{y2} Z")
    }

    /// Center of the unrotated triangle's bounding box.
    pub fn bbox_center(&self) -> (f32, f32) {
        (self.triangle_size / 2.0, self.triangle_height() / 2.0)
    }

    /// Whether a point in unrotated triangle space lies inside the path.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let [a, b, c] = self.vertices();
        let edge = |(x0, y0): (f32, f32), (x1, y1): (f32, f32)| {
            (x1 - x0) * (y - y0) - (y1 - y0) * (x - x0)
        };
        let d0 = edge(a, b);
        let d1 = edge(b, c);
        let d2 = edge(c, a);
        (d0 >= 0.0 && d1 >= 0.0 && d2 >= 0.0) || (d0 <= 0.0 && d1 <= 0.0 && d2 <= 0.0)
    }

    /// Radial gradient coordinate of a point in unrotated triangle space:
    /// 0 at the bounding-box center, 1 on the ellipse inscribed in the box.
    pub fn gradient_radius(&self, x: f32, y: f32) -> f32 {
        let (cx, cy) = self.bbox_center();
        if cx <= 0.0 || cy <= 0.0 {
            return 1.0;
        }
        let dx = (x - cx) / cx;
        let dy = (y - cy) / cy;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Animated scale and opacity shared by every triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleFrame {
    pub scale: f32,
    pub opacity: f32,
}

/// Scale and opacity pulse of the triangles.
#[derive(Debug, Clone)]
pub struct TriangleAnimation {
    scale: Tween,
    opacity: Tween,
}

impl Default for TriangleAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl TriangleAnimation {
    /// Grow from nothing to full size while pulsing opacity, reversing every
    /// ten seconds forever.
    pub fn new() -> Self {
        Self {
            scale: Tween::between(0.0, 1.0, PULSE_PERIOD_MS)
                .repeat(Repeat::Infinite)
                .repeat_type(RepeatType::Reverse),
            opacity: Tween::new([0.7, 1.0, 0.7], PULSE_PERIOD_MS)
                .repeat(Repeat::Infinite)
                .repeat_type(RepeatType::Reverse),
        }
    }

    pub fn frame_at(&self, elapsed_ms: u64) -> TriangleFrame {
        TriangleFrame {
            scale: self.scale.value_at(elapsed_ms),
            opacity: self.opacity.value_at(elapsed_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_half_longest_side() {
        assert_eq!(triangle_size(ViewportSize::new(800.0, 600.0)), 400.0);
        assert_eq!(triangle_size(ViewportSize::new(600.0, 1000.0)), 500.0);
        assert_eq!(triangle_size(ViewportSize::new(1024.0, 768.0)), 512.0);
    }

    #[test]
    fn test_offsets_and_gradients() {
        let layout = generate(ViewportSize::new(1200.0, 800.0));
        assert_eq!(layout.triangles.len(), TRIANGLE_COUNT);

        let offsets: Vec<f32> = layout.triangles.iter().map(|t| t.rotation_offset).collect();
        assert_eq!(offsets, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);

        use GradientId::{A, B};
        let gradients: Vec<GradientId> = layout.triangles.iter().map(|t| t.gradient).collect();
        assert_eq!(gradients, vec![A, B, A, B, A, B]);
    }

    #[test]
    fn test_vertices_equilateral() {
        let layout = generate(ViewportSize::new(200.0, 100.0));
        let [a, b, c] = layout.vertices();
        let dist = |(x0, y0): (f32, f32), (x1, y1): (f32, f32)| {
            ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt()
        };
        assert!((dist(a, b) - 100.0).abs() < 1e-3);
        assert!((dist(b, c) - 100.0).abs() < 1e-3);
        assert!((dist(c, a) - 100.0).abs() < 1e-3);
        assert!(layout.path_data().starts_with("M0,0 L100,0 L50,"));
        assert!(layout.path_data().ends_with(" Z"));
    }

    #[test]
    fn test_contains() {
        let layout = generate(ViewportSize::new(200.0, 100.0));
        let (cx, cy) = layout.bbox_center();
        assert!(layout.contains(cx, cy));
        assert!(layout.contains(0.0, 0.0));
        assert!(!layout.contains(-1.0, 10.0));
        assert!(!layout.contains(5.0, 80.0));
        assert!(layout.gradient_radius(cx, cy) < 1e-6);
    }

    #[test]
    fn test_pulse_frames() {
        let anim = TriangleAnimation::new();
        let start = anim.frame_at(0);
        assert_eq!(start.scale, 0.0);
        assert!((start.opacity - 0.7).abs() < 1e-3);

        let mid = anim.frame_at(PULSE_PERIOD_MS / 2);
        assert!((mid.opacity - 1.0).abs() < 1e-3);

        let peak = anim.frame_at(PULSE_PERIOD_MS);
        assert!((peak.scale - 1.0).abs() < 1e-3);

        // Reverses back down
        let back = anim.frame_at(2 * PULSE_PERIOD_MS);
        assert!(back.scale.abs() < 1e-3);
    }
}
