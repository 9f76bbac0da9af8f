pub use kurbo::{Affine, Point, Vec2};

/// Sprite-space extent used by the deformation handlers for their region thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dims {
    pub width: f64,
    pub height: f64,
}

impl Dims {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// `y / height`, the vertical position as a fraction of the sprite.
    pub fn rel_y(self, y: f64) -> f64 {
        y / self.height
    }

    /// Horizontal distance from the vertical center line, normalized to the half width.
    pub fn center_distance(self, x: f64) -> f64 {
        let half = self.width / 2.0;
        (half - x).abs() / half
    }
}

/// Device-space bitmap size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn byte_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
    }
}

/// Integer grid cell a sprite-space coordinate falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub fn of(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i64,
            y: y.floor() as i64,
        }
    }

    /// Cell under a device-space pointer position at the given display scale.
    pub fn from_pointer(px: f64, py: f64, scale: u32) -> Self {
        let s = f64::from(scale.max(1));
        Self::of(px / s, py / s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
