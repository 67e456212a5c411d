use std::ops::Sub;

/// A position in logical window coordinates. Origin is top-left, y grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl Sub for ScreenPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Logical window size.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: 0.5 * self.width,
            y: 0.5 * self.height,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
