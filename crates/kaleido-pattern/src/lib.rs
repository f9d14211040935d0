//! Animated kaleidoscope for the terminal.
//!
//! Six gradient-filled triangles rotate slowly about the center of the
//! screen while twenty particles drift over a blurred copy of them. The
//! component is made of four parts:
//!
//! - [`ViewportTracker`] follows the host's [`ResizeSignal`]
//! - [`RotationController`] turns the triangle group once a minute
//! - [`triangles`] lays out the six triangles for a viewport
//! - [`particles`] samples the particle field
//!
//! [`KaleidoscopeState`] ties them together and renders into a ratatui
//! frame.

mod color;
pub mod particles;
pub mod raster;
mod rotation;
mod state;
mod tracker;
pub mod triangles;

pub use color::{BACKDROP, hsl_to_rgb, particle_color};
pub use rotation::{ROTATION_PERIOD_MS, RotationController, rotation_tween};
pub use state::{KaleidoscopeState, Scene};
pub use tracker::{ResizeSignal, Subscription, ViewportTracker};
