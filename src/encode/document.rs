use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{SpriteError, SpriteResult};
use crate::sprite::CharacterSprite;

pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Saved sprite: the sprite itself plus format version and save time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpriteDocument {
    pub sprite: CharacterSprite,
    #[serde(default)]
    pub version: String,
    /// RFC 3339 UTC time of the save.
    #[serde(default)]
    pub timestamp: String,
}

impl SpriteDocument {
    pub fn new(sprite: CharacterSprite) -> Self {
        Self {
            sprite,
            version: DOCUMENT_VERSION.to_owned(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> SpriteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SpriteError::serde(format!("failed to serialize sprite document: {e}")))
    }

    /// Parse a saved document, checking its shape first. Unknown versions load with a warning.
    #[tracing::instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> SpriteResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| SpriteError::format(format!("sprite document is not JSON: {e}")))?;

        let sprite = value
            .get("sprite")
            .filter(|s| s.is_object())
            .ok_or_else(|| SpriteError::format("missing \"sprite\" object"))?;
        if !sprite.get("frames").is_some_and(|f| f.is_array()) {
            return Err(SpriteError::format("\"sprite.frames\" must be an array"));
        }
        if sprite.get("config").is_none_or(|c| c.is_null()) {
            return Err(SpriteError::format("missing \"sprite.config\""));
        }

        match value.get("version").and_then(|v| v.as_str()) {
            Some(DOCUMENT_VERSION) => {}
            other => tracing::warn!(
                version = other.unwrap_or("<none>"),
                expected = DOCUMENT_VERSION,
                "loading sprite document with unknown version"
            ),
        }

        serde_json::from_value(value)
            .map_err(|e| SpriteError::format(format!("invalid sprite document: {e}")))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SpriteResult<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("write sprite document \"{}\"", path.display()))?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read sprite document \"{}\"", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/document.rs"]
mod tests;
