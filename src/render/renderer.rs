use crate::foundation::core::Canvas;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::bitmap::Bitmap;
use crate::render::blur::{bloom_sigma, blur_rgba8_premul};
use crate::render::composite::over_in_place;
use crate::sprite::{Frame, Pixel, SpriteConfig};

/// Translucent pixels below this alpha also feed the bloom layer.
const BLOOM_ALPHA: f64 = 0.5;

/// Rasterizes frames into `scale×scale` blocks on a `width·scale × height·scale` canvas.
#[derive(Clone, Copy, Debug)]
pub struct FrameRenderer {
    scale: u32,
    canvas: Canvas,
}

impl FrameRenderer {
    pub fn new(config: &SpriteConfig) -> SpriteResult<Self> {
        let canvas = config
            .width
            .checked_mul(config.scale)
            .zip(config.height.checked_mul(config.scale))
            .map(|(width, height)| Canvas { width, height })
            .ok_or_else(|| SpriteError::render("render surface size overflows"))?;
        // rejects zero and overflowing surfaces
        Bitmap::new(canvas.width, canvas.height)?;
        Ok(Self {
            scale: config.scale,
            canvas,
        })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn blank(&self) -> Bitmap {
        let Canvas { width, height } = self.canvas;
        Bitmap {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Opaque pixels first, then bloom, then translucent pixels, each group in frame order.
    #[tracing::instrument(skip(self, frame), fields(frame = %frame.id))]
    pub fn render(&self, frame: &Frame) -> Bitmap {
        let mut out = self.blank();
        let (opaque, translucent): (Vec<&Pixel>, Vec<&Pixel>) =
            frame.pixels.iter().partition(|p| !p.color.is_translucent());

        for p in &opaque {
            self.draw(&mut out, p);
        }

        let faint: Vec<&Pixel> = translucent
            .iter()
            .copied()
            .filter(|p| p.color.opacity() < BLOOM_ALPHA)
            .collect();
        if !faint.is_empty() {
            let mut bloom = self.blank();
            for p in faint {
                self.draw(&mut bloom, p);
            }
            let radius = self.scale / 2;
            let blurred = blur_rgba8_premul(
                &bloom.data,
                bloom.width,
                bloom.height,
                radius,
                bloom_sigma(radius),
            )
            .and_then(|b| over_in_place(&mut out.data, &b));
            if let Err(err) = blurred {
                tracing::warn!(%err, "skipping bloom layer");
            }
        }

        for p in &translucent {
            self.draw(&mut out, p);
        }
        out
    }

    fn draw(&self, target: &mut Bitmap, p: &Pixel) {
        let s = f64::from(self.scale);
        let (x, y) = ((p.x * s).round(), (p.y * s).round());
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        target.fill_rect(
            x as i64,
            y as i64,
            self.scale,
            self.scale,
            p.color.to_premul_rgba8(),
        );
    }

    /// All `frames` side by side, left to right, each `canvas.width` wide.
    #[tracing::instrument(skip(self, frames))]
    pub fn render_sheet<'a>(
        &self,
        frames: impl IntoIterator<Item = &'a Frame>,
    ) -> SpriteResult<Bitmap> {
        let frames: Vec<&Frame> = frames.into_iter().collect();
        if frames.is_empty() {
            return Err(SpriteError::render("sprite sheet needs at least one frame"));
        }
        let count = u32::try_from(frames.len())
            .map_err(|_| SpriteError::render("too many frames for a sprite sheet"))?;
        let width = self
            .canvas
            .width
            .checked_mul(count)
            .ok_or_else(|| SpriteError::render("sprite sheet width overflows"))?;
        let mut sheet = Bitmap::new(width, self.canvas.height)?;
        for (i, frame) in frames.into_iter().enumerate() {
            let x = i as i64 * i64::from(self.canvas.width);
            sheet.blit(&self.render(frame), x, 0);
        }
        Ok(sheet)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
