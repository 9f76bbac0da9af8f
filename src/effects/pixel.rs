use crate::effects::pattern::Pattern;
use crate::foundation::color::Color;
use crate::foundation::core::Cell;
use crate::sprite::{Frame, Pixel};

const DIAGONALS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
const ORTHOGONALS: [(f64, f64); 4] = [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)];
const AXIAL_2: [(f64, f64); 4] = [(-2.0, 0.0), (2.0, 0.0), (0.0, -2.0), (0.0, 2.0)];

const ANTI_ALIAS_DIAGONAL: f64 = 0.3;
const ANTI_ALIAS_ORTHOGONAL: f64 = 0.4;
const DEFAULT_GLOW_ALPHA: f64 = 0.6;
const OVERLAY_BRIGHTEN: f64 = 1.3;

/// Optional treatments for a placed pixel, applied in field order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PixelEffects {
    pub shade: Option<f64>,
    pub anti_alias: bool,
    /// Glow ring color. An opaque color glows at 60% intensity.
    pub glow: Option<Color>,
    pub pattern: Option<Pattern>,
}

impl PixelEffects {
    pub fn shaded(factor: f64) -> Self {
        Self {
            shade: Some(factor),
            ..Self::default()
        }
    }

    pub fn with_anti_alias(mut self) -> Self {
        self.anti_alias = true;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_glow(mut self, glow: Color) -> Self {
        self.glow = Some(glow);
        self
    }
}

/// Places and erases single pixels on a frame, returning a new frame each time.
#[derive(Clone, Copy, Debug)]
pub struct PixelManipulator {
    scale: u32,
}

impl PixelManipulator {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Place `color` at sprite-space `(x, y)`.
    pub fn place(&self, frame: &Frame, x: f64, y: f64, color: Color, effects: &PixelEffects) -> Frame {
        let cell = Cell::of(x, y);
        let mut pixels = frame.pixels.clone();
        paint(&mut pixels, cell.x as f64, cell.y as f64, color, effects);
        frame.with_pixels(pixels)
    }

    /// Place at a device-space pointer position.
    pub fn place_at_pointer(
        &self,
        frame: &Frame,
        px: f64,
        py: f64,
        color: Color,
        effects: &PixelEffects,
    ) -> Frame {
        let cell = Cell::from_pointer(px, py, self.scale);
        let mut pixels = frame.pixels.clone();
        paint(&mut pixels, cell.x as f64, cell.y as f64, color, effects);
        frame.with_pixels(pixels)
    }

    /// Remove every pixel in the cell under a device-space pointer position.
    pub fn erase(&self, frame: &Frame, px: f64, py: f64) -> Frame {
        let target = Cell::from_pointer(px, py, self.scale);
        let pixels = frame
            .pixels
            .iter()
            .filter(|p| p.cell() != target)
            .cloned()
            .collect();
        frame.with_pixels(pixels)
    }
}

fn find(pixels: &[Pixel], cell: Cell) -> Option<usize> {
    pixels.iter().position(|p| p.cell() == cell)
}

fn set_or_push(pixels: &mut Vec<Pixel>, x: f64, y: f64, color: Color) {
    match find(pixels, Cell::of(x, y)) {
        Some(i) => pixels[i].color = color,
        None => pixels.push(Pixel::new(x, y, color)),
    }
}

/// In-place placement shared by the editor and the base-frame builder.
///
/// A new pixel keeps the exact `(x, y)` given; halos and rings sit at whole-cell offsets from it.
pub(crate) fn paint(pixels: &mut Vec<Pixel>, x: f64, y: f64, color: Color, effects: &PixelEffects) {
    let cell = Cell::of(x, y);
    let mut color = match effects.shade {
        Some(f) => color.shade(f),
        None => color,
    };

    let sample = effects.pattern.map(|p| p.sample(x, y));
    if let Some(s) = sample {
        color = color.shade(s.shade);
    }

    let solid = match find(pixels, cell) {
        Some(i) => {
            pixels[i].color = color;
            i
        }
        None => {
            pixels.push(Pixel::new(x, y, color));
            pixels.len() - 1
        }
    };

    if let Some(s) = sample.filter(|s| s.overlay_alpha > 0.0) {
        let overlay = color.shade(OVERLAY_BRIGHTEN).with_alpha(s.overlay_alpha);
        let layered = pixels
            .iter()
            .enumerate()
            .position(|(i, p)| i != solid && p.cell() == cell && p.color.is_translucent());
        match layered {
            Some(i) => pixels[i].color = overlay,
            None => pixels.push(Pixel::new(x, y, overlay)),
        }
    }

    if effects.anti_alias {
        for (ring, alpha) in [
            (DIAGONALS, ANTI_ALIAS_DIAGONAL),
            (ORTHOGONALS, ANTI_ALIAS_ORTHOGONAL),
        ] {
            for (dx, dy) in ring {
                let (nx, ny) = (x + dx, y + dy);
                if find(pixels, Cell::of(nx, ny)).is_none() {
                    pixels.push(Pixel::new(nx, ny, color.with_alpha(alpha)));
                }
            }
        }
    }

    if let Some(glow) = effects.glow {
        let intensity = glow.alpha.unwrap_or(DEFAULT_GLOW_ALPHA);
        for (ring, k) in [(ORTHOGONALS, 1.0), (DIAGONALS, 0.7), (AXIAL_2, 0.3)] {
            for (dx, dy) in ring {
                set_or_push(pixels, x + dx, y + dy, glow.with_alpha(intensity * k));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixel.rs"]
mod tests;
