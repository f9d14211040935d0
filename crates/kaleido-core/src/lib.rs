//! Core types shared by the kaleido crates.
//!
//! Everything here is plain data: viewport measurements, colors, easing
//! curves and the declarative [`Tween`] used to describe every animation in
//! the pattern.

mod color;
mod easing;
mod gradient;
mod tween;
mod viewport;

pub use color::{Rgb, Rgba};
pub use easing::Easing;
pub use gradient::{GradientId, GradientStop, RadialGradient};
pub use tween::{Repeat, RepeatType, Tween};
pub use viewport::{CELL_HEIGHT_PX, CELL_WIDTH_PX, ViewportSize};
