//! Kaleidoscope component state.

use std::rc::Rc;

use kaleido_core::ViewportSize;
use ratatui::{Frame, widgets::Paragraph};
use tracing::debug;

use crate::particles::{self, Particle, ParticleFrame};
use crate::raster;
use crate::rotation::RotationController;
use crate::tracker::{ResizeSignal, ViewportTracker};
use crate::triangles::{self, TriangleAnimation, TriangleFrame, TriangleLayout};

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Surface size the geometry was computed for.
    pub viewport: ViewportSize,
    pub layout: TriangleLayout,
    /// Rotation of the whole triangle group in degrees.
    pub rotation_deg: f32,
    pub triangle_frame: TriangleFrame,
    pub particles: Vec<(&'a Particle, ParticleFrame)>,
}

/// A mounted kaleidoscope.
///
/// Mounting subscribes to the host's resize signal and starts the rotation;
/// dropping the state unsubscribes and discards every animation.
#[derive(Debug)]
pub struct KaleidoscopeState {
    tracker: ViewportTracker,
    rotation: RotationController,
    triangle_animation: TriangleAnimation,
    particles: Vec<Particle>,
    /// Component time the current particle field appeared at.
    particles_spawned_ms: u64,
    /// Viewport size the particle field was generated for.
    last_size: ViewportSize,
    /// Number of times the particle field has been sampled.
    generations: u32,
    rng: fastrand::Rng,
}

impl KaleidoscopeState {
    /// Mount the component on a surface.
    pub fn mount(signal: &Rc<ResizeSignal>) -> Self {
        Self::with_rng(signal, fastrand::Rng::new())
    }

    /// Mount with a caller-provided random source.
    pub fn with_rng(signal: &Rc<ResizeSignal>, rng: fastrand::Rng) -> Self {
        let tracker = ViewportTracker::activate(signal);
        let mut rotation = RotationController::new();
        rotation.start(0);

        Self {
            tracker,
            rotation,
            triangle_animation: TriangleAnimation::new(),
            particles: Vec::new(),
            particles_spawned_ms: 0,
            last_size: ViewportSize::default(),
            generations: 0,
            rng,
        }
    }

    /// Size last reported by the viewport tracker.
    pub fn viewport(&self) -> ViewportSize {
        self.tracker.size()
    }

    pub fn rotation(&self) -> &RotationController {
        &self.rotation
    }

    /// Current particle field; empty until the first render pass.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// How many times the particle field has been sampled.
    pub fn generations(&self) -> u32 {
        self.generations
    }

    /// Run a render pass at component time `elapsed_ms`.
    ///
    /// Returns `None` while the viewport is unmeasured. The particle field
    /// is resampled whenever the viewport dimensions changed since the last
    /// pass.
    pub fn scene(&mut self, elapsed_ms: u64) -> Option<Scene<'_>> {
        let viewport = self.tracker.size();
        if !viewport.is_measured() {
            return None;
        }

        if viewport != self.last_size || self.particles.is_empty() {
            self.particles = particles::generate(&mut self.rng);
            self.particles_spawned_ms = elapsed_ms;
            self.last_size = viewport;
            self.generations += 1;
            debug!(
                width = viewport.width,
                height = viewport.height,
                generation = self.generations,
                "particle field regenerated"
            );
        }

        let particle_elapsed = elapsed_ms.saturating_sub(self.particles_spawned_ms);
        let particles = self
            .particles
            .iter()
            .map(|p| (p, p.frame_at(particle_elapsed)))
            .collect();

        Some(Scene {
            viewport,
            layout: triangles::generate(viewport),
            rotation_deg: self.rotation.angle_at(elapsed_ms),
            triangle_frame: self.triangle_animation.frame_at(elapsed_ms),
            particles,
        })
    }

    /// Render the kaleidoscope to the frame.
    pub fn render(&mut self, frame: &mut Frame, elapsed_ms: u64) {
        let area = frame.area();
        let Some(scene) = self.scene(elapsed_ms) else {
            return;
        };

        let canvas = raster::paint(&scene, area.width, area.height);
        frame.render_widget(Paragraph::new(canvas.to_lines()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted(width: f32, height: f32) -> (Rc<ResizeSignal>, KaleidoscopeState) {
        let signal = ResizeSignal::new(ViewportSize::new(width, height));
        let state = KaleidoscopeState::with_rng(&signal, fastrand::Rng::with_seed(1));
        (signal, state)
    }

    #[test]
    fn test_unmeasured_renders_nothing() {
        let (_signal, mut state) = mounted(0.0, 0.0);
        assert!(state.scene(0).is_none());
        assert!(state.particles().is_empty());

        let (_signal, mut state) = mounted(800.0, 0.0);
        assert!(state.scene(0).is_none());
    }

    #[test]
    fn test_particles_stable_without_resize() {
        let (_signal, mut state) = mounted(800.0, 600.0);
        state.scene(0);
        let first = state.particles().to_vec();
        state.scene(1_000);
        assert_eq!(state.particles(), first.as_slice());
        assert_eq!(state.generations(), 1);
    }

    #[test]
    fn test_resize_regenerates_particles() {
        let (signal, mut state) = mounted(800.0, 600.0);
        state.scene(0);
        let first = state.particles().to_vec();

        signal.emit(ViewportSize::new(1200.0, 800.0));
        let scene = state.scene(500).unwrap();
        assert_eq!(scene.layout.triangle_size, 600.0);
        assert_eq!(state.generations(), 2);
        assert_ne!(state.particles(), first.as_slice());
    }

    #[test]
    fn test_rotation_not_restarted_by_resize() {
        let (signal, mut state) = mounted(800.0, 600.0);
        state.scene(0);
        signal.emit(ViewportSize::new(400.0, 300.0));
        state.scene(100);
        assert_eq!(state.rotation().start_count(), 1);
    }

    #[test]
    fn test_scene_times() {
        let (_signal, mut state) = mounted(800.0, 600.0);
        let scene = state.scene(15_000).unwrap();
        assert!((scene.rotation_deg - 90.0).abs() < 1e-3);
        // Particle clocks start when the field is sampled
        for (particle, frame) in &scene.particles {
            assert_eq!(*frame, particle.frame_at(0));
        }
    }
}
