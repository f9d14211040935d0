//! Declarative keyframe animations.
//!
//! A [`Tween`] is a pure function from elapsed time to a value: it holds no
//! clock of its own, so dropping it is all the cleanup an animation needs.

use crate::easing::Easing;

/// How many times a tween plays after the first run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Play once.
    #[default]
    Never,
    /// Play `n` extra times, then hold the final value.
    Count(u32),
    /// Never stop.
    Infinite,
}

/// What happens at the end of each cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatType {
    /// Jump back to the first keyframe.
    #[default]
    Loop,
    /// Play every other cycle backwards.
    Reverse,
}

/// Interpolates a value through evenly spaced keyframes over a duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    keyframes: Vec<f32>,
    duration_ms: u64,
    repeat: Repeat,
    repeat_type: RepeatType,
    easing: Easing,
}

impl Tween {
    /// Create a tween through `keyframes` over `duration_ms`, played once
    /// with ease-in-out.
    pub fn new(keyframes: impl Into<Vec<f32>>, duration_ms: u64) -> Self {
        Self {
            keyframes: keyframes.into(),
            duration_ms,
            repeat: Repeat::default(),
            repeat_type: RepeatType::default(),
            easing: Easing::default(),
        }
    }

    /// Create a two-keyframe tween.
    pub fn between(from: f32, to: f32, duration_ms: u64) -> Self {
        Self::new([from, to], duration_ms)
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn repeat_type(mut self, repeat_type: RepeatType) -> Self {
        self.repeat_type = repeat_type;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sample the tween `elapsed_ms` after it started.
    pub fn value_at(&self, elapsed_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return self.keyframes.last().copied().unwrap_or_default();
        }

        let extra_cycles = match self.repeat {
            Repeat::Never => Some(0),
            Repeat::Count(n) => Some(n as u64),
            Repeat::Infinite => None,
        };

        let mut cycle = elapsed_ms / self.duration_ms;
        let mut local = (elapsed_ms % self.duration_ms) as f32 / self.duration_ms as f32;

        if let Some(last) = extra_cycles
            && cycle > last
        {
            cycle = last;
            local = 1.0;
        }

        let progress = match self.repeat_type {
            RepeatType::Reverse if cycle % 2 == 1 => 1.0 - local,
            _ => local,
        };

        self.sample(progress)
    }

    /// Sample at overall progress `0.0..=1.0` across all keyframes.
    fn sample(&self, progress: f32) -> f32 {
        match self.keyframes.as_slice() {
            [] => 0.0,
            [only] => *only,
            frames => {
                let segments = (frames.len() - 1) as f32;
                let scaled = progress.clamp(0.0, 1.0) * segments;
                let index = (scaled.floor() as usize).min(frames.len() - 2);
                let t = self.easing.apply(scaled - index as f32);
                frames[index] + (frames[index + 1] - frames[index]) * t
            }
        }
    }
}
