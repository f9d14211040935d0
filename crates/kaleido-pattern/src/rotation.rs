//! Rotation of the whole triangle group.

use kaleido_core::{Easing, Repeat, Tween};
use tracing::debug;

/// Time for one full turn of the pattern.
pub const ROTATION_PERIOD_MS: u64 = 60_000;

/// Linear, endlessly looping 0° to 360° turn.
pub fn rotation_tween() -> Tween {
    Tween::between(0.0, 360.0, ROTATION_PERIOD_MS)
        .easing(Easing::Linear)
        .repeat(Repeat::Infinite)
}

/// Drives the group rotation.
///
/// The animation is plain data owned by the controller, so it stops the
/// moment the controller is dropped.
#[derive(Debug, Default)]
pub struct RotationController {
    /// Running tween and the component time it started at.
    animation: Option<(Tween, u64)>,
    /// How many times [`RotationController::start`] has run.
    start_count: u32,
}

impl RotationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the rotation at component time `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.animation = Some((rotation_tween(), now_ms));
        self.start_count += 1;
        debug!(now_ms, "rotation started");
    }

    pub fn start_count(&self) -> u32 {
        self.start_count
    }

    /// Group rotation in degrees at component time `now_ms`.
    pub fn angle_at(&self, now_ms: u64) -> f32 {
        match &self.animation {
            Some((tween, started_at)) => tween.value_at(now_ms.saturating_sub(*started_at)),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_started() {
        let rotation = RotationController::new();
        assert_eq!(rotation.start_count(), 0);
        assert_eq!(rotation.angle_at(10_000), 0.0);
    }

    #[test]
    fn test_full_turn_per_minute() {
        let mut rotation = RotationController::new();
        rotation.start(1_000);
        assert_eq!(rotation.start_count(), 1);
        assert!(rotation.angle_at(1_000).abs() < 1e-3);
        assert!((rotation.angle_at(16_000) - 90.0).abs() < 1e-3);
        assert!((rotation.angle_at(46_000) - 270.0).abs() < 1e-3);
        assert!(rotation.angle_at(61_000).abs() < 1e-3);
        // Time before the start clamps to the first frame
        assert!(rotation.angle_at(0).abs() < 1e-3);
    }
}
