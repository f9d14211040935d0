//! Particle field generator.
//!
//! Every particle is sampled independently with no seed of its own; the
//! whole field is thrown away and resampled whenever it is regenerated.

use kaleido_core::{Repeat, RepeatType, Rgb, Tween};

use crate::color::particle_color;

/// Number of particles in the field.
pub const PARTICLE_COUNT: usize = 20;

/// Particle diameter range in logical pixels.
pub const SIZE_RANGE_PX: (f32, f32) = (10.0, 30.0);

/// Maximum drift from the resting position, in logical pixels, either way.
pub const MAX_DRIFT_PX: f32 = 50.0;

/// Animation duration range in seconds.
pub const DURATION_RANGE_SEC: (f32, f32) = (5.0, 10.0);

/// A small circle drifting over the pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Diameter in logical pixels.
    pub size_px: f32,
    /// Hue in degrees; saturation and lightness are fixed.
    pub hue: f32,
    /// Left edge as a percentage of the container width.
    pub left_pct: f32,
    /// Top edge as a percentage of the container height.
    pub top_pct: f32,
    /// Horizontal drift target in logical pixels.
    pub drift_x: f32,
    /// Vertical drift target in logical pixels.
    pub drift_y: f32,
    /// Length of one drift cycle in seconds.
    pub anim_duration_sec: f32,
}

/// Animated state of a particle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    /// Horizontal offset from the resting position.
    pub offset_x: f32,
    /// Vertical offset from the resting position.
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Sample a fresh field of [`PARTICLE_COUNT`] particles.
pub fn generate(rng: &mut fastrand::Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::sample(rng)).collect()
}

fn uniform(rng: &mut fastrand::Rng, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.f32() * (hi - lo)
}

impl Particle {
    /// Sample one particle.
    pub fn sample(rng: &mut fastrand::Rng) -> Self {
        Self {
            size_px: uniform(rng, SIZE_RANGE_PX),
            // f32() is in [0, 1), so the hue never reaches 360
            hue: rng.f32() * 360.0,
            left_pct: rng.f32() * 100.0,
            top_pct: rng.f32() * 100.0,
            drift_x: uniform(rng, (-MAX_DRIFT_PX, MAX_DRIFT_PX)),
            drift_y: uniform(rng, (-MAX_DRIFT_PX, MAX_DRIFT_PX)),
            anim_duration_sec: uniform(rng, DURATION_RANGE_SEC),
        }
    }

    pub fn color(&self) -> Rgb {
        particle_color(self.hue)
    }

    fn duration_ms(&self) -> u64 {
        (self.anim_duration_sec * 1000.0).round() as u64
    }

    fn tween(&self, keyframes: impl Into<Vec<f32>>) -> Tween {
        Tween::new(keyframes, self.duration_ms())
            .repeat(Repeat::Infinite)
            .repeat_type(RepeatType::Reverse)
    }

    /// Animated state `elapsed_ms` after the particle appeared.
    pub fn frame_at(&self, elapsed_ms: u64) -> ParticleFrame {
        ParticleFrame {
            offset_x: self.tween([0.0, self.drift_x]).value_at(elapsed_ms),
            offset_y: self.tween([0.0, self.drift_y]).value_at(elapsed_ms),
            scale: self.tween([1.0, 1.5, 1.0]).value_at(elapsed_ms),
            opacity: self.tween([0.3, 0.7, 0.3]).value_at(elapsed_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_size() {
        let mut rng = fastrand::Rng::with_seed(7);
        assert_eq!(generate(&mut rng).len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_sampled_ranges() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..200 {
            for p in generate(&mut rng) {
                assert!((10.0..=30.0).contains(&p.size_px), "size {}", p.size_px);
                assert!((0.0..360.0).contains(&p.hue), "hue {}", p.hue);
                assert!((0.0..=100.0).contains(&p.left_pct));
                assert!((0.0..=100.0).contains(&p.top_pct));
                assert!((-50.0..=50.0).contains(&p.drift_x));
                assert!((-50.0..=50.0).contains(&p.drift_y));
                assert!((5.0..=10.0).contains(&p.anim_duration_sec));
            }
        }
    }

    #[test]
    fn test_regeneration_replaces_values() {
        let mut rng = fastrand::Rng::with_seed(3);
        let first = generate(&mut rng);
        let second = generate(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_frame_cycle() {
        let particle = Particle {
            size_px: 20.0,
            hue: 180.0,
            left_pct: 50.0,
            top_pct: 50.0,
            drift_x: 40.0,
            drift_y: -20.0,
            anim_duration_sec: 5.0,
        };

        let start = particle.frame_at(0);
        assert_eq!(start.offset_x, 0.0);
        assert_eq!(start.offset_y, 0.0);
        assert!((start.scale - 1.0).abs() < 1e-4);
        assert!((start.opacity - 0.3).abs() < 1e-4);

        let mid = particle.frame_at(2_500);
        assert!((mid.scale - 1.5).abs() < 1e-4);
        assert!((mid.opacity - 0.7).abs() < 1e-4);

        let end = particle.frame_at(5_000);
        assert!((end.offset_x - 40.0).abs() < 1e-3);
        assert!((end.offset_y + 20.0).abs() < 1e-3);

        // Drifts back on the reversed cycle
        let back = particle.frame_at(10_000);
        assert!(back.offset_x.abs() < 1e-3);
    }
}
