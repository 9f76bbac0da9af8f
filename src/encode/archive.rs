use std::io::{Cursor, Write};

use anyhow::Context;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::encode::png::encode_png;
use crate::foundation::error::SpriteResult;
use crate::render::FrameRenderer;
use crate::sprite::{AnimationState, CharacterSprite};

/// Transparent border kept around each trimmed frame.
pub const TRIM_PADDING: u32 = 1;

/// A named file destined for an archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// `{state}{ordinal}.png` with a 1-based ordinal.
pub fn entry_name(state: AnimationState, ordinal: usize) -> String {
    format!("{state}{ordinal}.png")
}

/// Every frame of `state`, rendered, trimmed and PNG-encoded, in generation order.
#[tracing::instrument(skip(renderer, sprite))]
pub fn animation_entries(
    renderer: &FrameRenderer,
    sprite: &CharacterSprite,
    state: AnimationState,
) -> SpriteResult<Vec<ArchiveEntry>> {
    sprite
        .frames_of(state)
        .enumerate()
        .map(|(i, frame)| {
            let bitmap = renderer.render(frame).trim(TRIM_PADDING);
            Ok(ArchiveEntry {
                name: entry_name(state, i + 1),
                bytes: encode_png(&bitmap)?,
            })
        })
        .collect()
}

pub fn zip_entries(entries: &[ArchiveEntry]) -> SpriteResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buf));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)
            .with_context(|| format!("start zip entry \"{}\"", entry.name))?;
        zip.write_all(&entry.bytes)
            .with_context(|| format!("write zip entry \"{}\"", entry.name))?;
    }
    zip.finish().context("finish zip archive")?;
    Ok(buf)
}

/// Deflate ZIP of the frames of each listed state.
pub fn export_animations(
    renderer: &FrameRenderer,
    sprite: &CharacterSprite,
    states: &[AnimationState],
) -> SpriteResult<Vec<u8>> {
    let mut entries = Vec::new();
    for &state in states {
        entries.extend(animation_entries(renderer, sprite, state)?);
    }
    zip_entries(&entries)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/archive.rs"]
mod tests;
