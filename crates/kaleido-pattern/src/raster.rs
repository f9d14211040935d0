//! Software rasterizer targeting half-block terminal cells.
//!
//! Each terminal cell holds two vertically stacked dots drawn with `▀`: the
//! foreground colors the upper dot and the background the lower one.

use kaleido_core::{Rgb, ViewportSize};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::color::BACKDROP;
use crate::particles::{Particle, ParticleFrame};
use crate::state::Scene;
use crate::triangles::{TriangleFrame, TriangleLayout};

/// Scales below this are treated as invisible.
const MIN_SCALE: f32 = 1e-3;

/// Upper half block.
const HALF_BLOCK: &str = "▀";

/// A grid of dots covering the viewport.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    dots: Vec<Rgb>,
}

impl Canvas {
    /// Create a `width` × `height` dot canvas filled with `fill`.
    pub fn new(width: u16, height: u16, fill: Rgb) -> Self {
        Self {
            width,
            height,
            dots: vec![fill; width as usize * height as usize],
        }
    }

    /// Color of the dot at `(x, y)`, if it exists.
    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.dots[self.index(x, y)])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Logical pixels covered by one dot along each axis.
    fn dot_size(&self, viewport: ViewportSize) -> (f32, f32) {
        (
            viewport.width / self.width.max(1) as f32,
            viewport.height / self.height.max(1) as f32,
        )
    }

    /// Paint the triangle group rotated by `rotation_deg` about the viewport
    /// center.
    pub fn paint_triangles(
        &mut self,
        viewport: ViewportSize,
        layout: &TriangleLayout,
        rotation_deg: f32,
        frame: TriangleFrame,
    ) {
        if frame.scale < MIN_SCALE || frame.opacity <= 0.0 {
            return;
        }

        let (sx, sy) = self.dot_size(viewport);
        let (vcx, vcy) = viewport.center();

        // Inverse rotation for each triangle, applied per dot
        let inverse: Vec<(f32, f32, _)> = layout
            .triangles
            .iter()
            .map(|spec| {
                let angle = -(rotation_deg + spec.rotation_offset).to_radians();
                (angle.cos(), angle.sin(), spec.gradient.gradient())
            })
            .collect();

        for y in 0..self.height {
            for x in 0..self.width {
                let px = (x as f32 + 0.5) * sx - vcx;
                let py = (y as f32 + 0.5) * sy - vcy;
                let mut color = self.dots[self.index(x, y)];

                for &(cos, sin, gradient) in &inverse {
                    let rx = px * cos - py * sin;
                    let ry = px * sin + py * cos;
                    // Rotation and scale share the group origin vertex
                    let lx = rx / frame.scale;
                    let ly = ry / frame.scale;
                    if !layout.contains(lx, ly) {
                        continue;
                    }
                    let fill = gradient.sample(layout.gradient_radius(lx, ly));
                    color = color.over(fill.rgb, fill.alpha * frame.opacity);
                }

                let index = self.index(x, y);
                self.dots[index] = color;
            }
        }
    }

    /// Soften the canvas with a separable 1-2-1 blur.
    pub fn blur(&mut self) {
        let (w, h) = (self.width as usize, self.height as usize);
        if w == 0 || h == 0 {
            return;
        }

        let kernel = |a: Rgb, b: Rgb, c: Rgb| Rgb {
            r: (a.r + 2.0 * b.r + c.r) / 4.0,
            g: (a.g + 2.0 * b.g + c.g) / 4.0,
            b: (a.b + 2.0 * b.b + c.b) / 4.0,
        };

        let mut horizontal = self.dots.clone();
        for y in 0..h {
            for x in 0..w {
                let row = y * w;
                let left = self.dots[row + x.saturating_sub(1)];
                let right = self.dots[row + (x + 1).min(w - 1)];
                horizontal[row + x] = kernel(left, self.dots[row + x], right);
            }
        }

        for y in 0..h {
            for x in 0..w {
                let up = horizontal[y.saturating_sub(1) * w + x];
                let down = horizontal[(y + 1).min(h - 1) * w + x];
                self.dots[y * w + x] = kernel(up, horizontal[y * w + x], down);
            }
        }
    }

    /// Screen-blend a particle onto the canvas.
    pub fn paint_particle(
        &mut self,
        viewport: ViewportSize,
        particle: &Particle,
        frame: ParticleFrame,
    ) {
        let (sx, sy) = self.dot_size(viewport);
        let radius = particle.size_px / 2.0 * frame.scale;
        let cx = particle.left_pct / 100.0 * viewport.width + particle.size_px / 2.0 + frame.offset_x;
        let cy = particle.top_pct / 100.0 * viewport.height + particle.size_px / 2.0 + frame.offset_y;
        let color = particle.color();
        let edge = sx.min(sy).max(f32::EPSILON);

        let span = |center: f32, dot: f32, limit: u16| {
            let lo = ((center - radius) / dot).floor().max(0.0) as u16;
            let hi = ((center + radius) / dot).ceil().min(limit as f32) as u16;
            lo..hi
        };

        for y in span(cy, sy, self.height) {
            for x in span(cx, sx, self.width) {
                let dx = (x as f32 + 0.5) * sx - cx;
                let dy = (y as f32 + 0.5) * sy - cy;
                let distance = (dx * dx + dy * dy).sqrt();
                // Anti-aliased rim one dot wide
                let coverage = ((radius - distance) / edge + 0.5).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let index = self.index(x, y);
                let base = self.dots[index];
                self.dots[index] = base.over(base.screen(color), frame.opacity * coverage);
            }
        }
    }

    /// Convert to one line per terminal row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height.div_ceil(2))
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let top = self.get(x, row * 2).unwrap_or(BACKDROP);
                        let bottom = self.get(x, row * 2 + 1).unwrap_or(BACKDROP);
                        Span::styled(
                            HALF_BLOCK,
                            Style::new().fg(top.to_color()).bg(bottom.to_color()),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Rasterize a scene for a terminal area of `cols` × `rows` cells.
pub fn paint(scene: &Scene<'_>, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows.saturating_mul(2), BACKDROP);
    canvas.paint_triangles(
        scene.viewport,
        &scene.layout,
        scene.rotation_deg,
        scene.triangle_frame,
    );
    canvas.blur();
    for (particle, frame) in &scene.particles {
        canvas.paint_particle(scene.viewport, particle, *frame);
    }
    canvas
}
