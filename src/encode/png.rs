use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{SpriteError, SpriteResult};
use crate::render::Bitmap;

/// Encode as a straight-alpha RGBA8 PNG.
pub fn encode_png(bitmap: &Bitmap) -> SpriteResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.to_straight_rgba8())
        .ok_or_else(|| SpriteError::render("bitmap buffer does not match its size"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

pub fn write_png(bitmap: &Bitmap, path: impl AsRef<Path>) -> SpriteResult<()> {
    let path = path.as_ref();
    let bytes = encode_png(bitmap)?;
    std::fs::write(path, bytes).with_context(|| format!("write png \"{}\"", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
