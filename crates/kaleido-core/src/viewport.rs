//! Viewport measurements.

/// Nominal width of a terminal cell in logical pixels.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Nominal height of a terminal cell in logical pixels.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Dimensions of the display surface in logical pixels.
///
/// The default value is all zeros, meaning the surface has not been
/// measured yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a terminal size in cells to logical pixels.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self::new(cols as f32 * CELL_WIDTH_PX, rows as f32 * CELL_HEIGHT_PX)
    }

    /// Whether both dimensions have been measured as non-zero.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Length of the longer side.
    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }

    /// Center point of the surface.
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unmeasured() {
        assert!(!ViewportSize::default().is_measured());
        assert!(!ViewportSize::new(800.0, 0.0).is_measured());
        assert!(!ViewportSize::new(0.0, 600.0).is_measured());
        assert!(ViewportSize::new(800.0, 600.0).is_measured());
    }

    #[test]
    fn test_from_cells() {
        let size = ViewportSize::from_cells(100, 40);
        assert_eq!(size, ViewportSize::new(800.0, 640.0));
        assert_eq!(size.longest_side(), 800.0);
        assert_eq!(size.center(), (400.0, 320.0));
    }
}
