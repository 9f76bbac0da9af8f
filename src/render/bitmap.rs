use crate::foundation::core::Canvas;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::composite::{PremulRgba8, over, unpremultiply};

/// Premultiplied RGBA8 raster, row-major, origin top-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Transparent bitmap. Zero or overflowing sizes are rejected.
    pub fn new(width: u32, height: u32) -> SpriteResult<Self> {
        let canvas = Canvas { width, height };
        if width == 0 || height == 0 {
            return Err(SpriteError::render(format!(
                "bitmap size must be non-zero, got {width}x{height}"
            )));
        }
        let len = canvas.byte_len().ok_or_else(|| {
            SpriteError::render(format!("bitmap size {width}x{height} overflows"))
        })?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremulRgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Source-over a `w×h` block of one color; the part outside the bitmap is dropped.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: PremulRgba8) {
        let Some((x0, x1)) = clip(x, w, self.width) else {
            return;
        };
        let Some((y0, y1)) = clip(y, h, self.height) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.index(px, py);
                let dst = [
                    self.data[i],
                    self.data[i + 1],
                    self.data[i + 2],
                    self.data[i + 3],
                ];
                self.data[i..i + 4].copy_from_slice(&over(dst, color));
            }
        }
    }

    /// Source-over `src` with its top-left corner at `(dx, dy)`.
    pub fn blit(&mut self, src: &Bitmap, dx: i64, dy: i64) {
        for sy in 0..src.height {
            let ty = dy.saturating_add(i64::from(sy));
            if ty < 0 || ty >= i64::from(self.height) {
                continue;
            }
            for sx in 0..src.width {
                let tx = dx.saturating_add(i64::from(sx));
                if tx < 0 || tx >= i64::from(self.width) {
                    continue;
                }
                let s = src.index(sx, sy);
                let color = [
                    src.data[s],
                    src.data[s + 1],
                    src.data[s + 2],
                    src.data[s + 3],
                ];
                self.fill_rect(tx, ty, 1, 1, color);
            }
        }
    }

    /// Smallest `(x, y, w, h)` rectangle holding every pixel with non-zero alpha.
    pub fn content_bounds(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.data[self.index(x, y) + 3] == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }

    /// Crop to the non-transparent content plus `padding` transparent pixels per side.
    ///
    /// A fully transparent bitmap trims to a `max(1, 2·padding)` square.
    pub fn trim(&self, padding: u32) -> Bitmap {
        let (x, y, w, h) = self.content_bounds().unwrap_or((0, 0, 0, 0));
        let width = w.saturating_add(padding.saturating_mul(2)).max(1);
        let height = h.saturating_add(padding.saturating_mul(2)).max(1);
        let mut out = Bitmap {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        };
        if w > 0 {
            out.blit(
                self,
                i64::from(padding) - i64::from(x),
                i64::from(padding) - i64::from(y),
            );
        }
        out
    }

    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }
}

fn clip(start: i64, len: u32, limit: u32) -> Option<(u32, u32)> {
    let lo = start.max(0);
    let hi = start.saturating_add(i64::from(len)).min(i64::from(limit));
    (lo < hi).then(|| (lo as u32, hi as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
