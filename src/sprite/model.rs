use std::collections::BTreeSet;
use std::f64::consts::PI;

use crate::character::CharacterConfig;
use crate::foundation::color::Color;
use crate::foundation::core::{Cell, Dims};
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::foundation::math::Fnv1a64;

pub const DEFAULT_BREATHING_INTENSITY: f64 = 1.5;
pub const DEFAULT_WALKING_SPEED: f64 = 3.0;
pub const DEFAULT_ATTACK_RANGE: f64 = PI * 1.5;

/// One animation cycle of a sprite. Serialized as its lowercase name.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Attack,
}

impl AnimationState {
    pub const ALL: [Self; 3] = [Self::Idle, Self::Walk, Self::Attack];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Attack => "attack",
        }
    }
}

impl std::fmt::Display for AnimationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnimationState {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle" => Ok(Self::Idle),
            "walk" => Ok(Self::Walk),
            "attack" => Ok(Self::Attack),
            other => Err(SpriteError::validation(format!(
                "unknown animation state \"{other}\" (expected idle, walk or attack)"
            ))),
        }
    }
}

/// A colored point in sprite space. Coordinates are fractional after deformation; the renderer
/// snaps them to the display grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
    /// Depth hint written by the walk deformation; never read by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    pub color: Color,
}

impl Pixel {
    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Self {
            x,
            y,
            z: None,
            color,
        }
    }

    pub fn cell(&self) -> Cell {
        Cell::of(self.x, self.y)
    }
}

/// One frame of one state. `id` is always `"{state}-{index}"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub id: String,
    pub pixels: Vec<Pixel>,
    pub state: AnimationState,
    pub index: u32,
}

impl Frame {
    pub fn new(state: AnimationState, index: u32, pixels: Vec<Pixel>) -> Self {
        Self {
            id: Self::frame_id(state, index),
            pixels,
            state,
            index,
        }
    }

    pub fn frame_id(state: AnimationState, index: u32) -> String {
        format!("{state}-{index}")
    }

    /// Same frame identity, different pixels.
    pub fn with_pixels(&self, pixels: Vec<Pixel>) -> Self {
        Self {
            id: self.id.clone(),
            pixels,
            state: self.state,
            index: self.index,
        }
    }

    /// Stable FNV-1a digest over every pixel's coordinate bits and color.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.id.as_bytes());
        h.write_u64(self.pixels.len() as u64);
        for p in &self.pixels {
            h.write_f64(p.x);
            h.write_f64(p.y);
            match p.z {
                Some(z) => {
                    h.write_u8(1);
                    h.write_f64(z);
                }
                None => h.write_u8(0),
            }
            h.write_bytes(&[p.color.r, p.color.g, p.color.b]);
            match p.color.alpha {
                Some(a) => {
                    h.write_u8(1);
                    h.write_f64(a);
                }
                None => h.write_u8(0),
            }
        }
        h.finish()
    }
}

/// Palette overrides for a single animation state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColorOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon: Option<Color>,
}

/// Per-state knobs. Only the tunable matching the state is read.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StateTuning {
    #[serde(alias = "breathingIntensity", skip_serializing_if = "Option::is_none")]
    pub breathing_intensity: Option<f64>,
    #[serde(alias = "walkingSpeed", skip_serializing_if = "Option::is_none")]
    pub walking_speed: Option<f64>,
    #[serde(alias = "attackRange", skip_serializing_if = "Option::is_none")]
    pub attack_range: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverride>,
}

impl StateTuning {
    /// Deformation magnitude for `state`, falling back to the stock value.
    pub fn tunable(tuning: Option<&Self>, state: AnimationState) -> f64 {
        let explicit = tuning.and_then(|t| match state {
            AnimationState::Idle => t.breathing_intensity,
            AnimationState::Walk => t.walking_speed,
            AnimationState::Attack => t.attack_range,
        });
        explicit.unwrap_or(match state {
            AnimationState::Idle => DEFAULT_BREATHING_INTENSITY,
            AnimationState::Walk => DEFAULT_WALKING_SPEED,
            AnimationState::Attack => DEFAULT_ATTACK_RANGE,
        })
    }
}

/// Frame count, playback delay and tuning for one state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    pub state: AnimationState,
    pub frames: u32,
    #[serde(alias = "frameDelay")]
    pub frame_delay_ms: u64,
    #[serde(default, alias = "config")]
    pub tuning: StateTuning,
}

/// Sprite-space size, display scale and the configured animation states.
///
/// Every field has a default, so `{}` is the stock 32x32 sprite at scale 10.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub animations: Vec<AnimationConfig>,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            scale: 10,
            animations: vec![
                AnimationConfig {
                    state: AnimationState::Idle,
                    frames: 8,
                    frame_delay_ms: 150,
                    tuning: StateTuning {
                        breathing_intensity: Some(1.2),
                        ..StateTuning::default()
                    },
                },
                AnimationConfig {
                    state: AnimationState::Walk,
                    frames: 12,
                    frame_delay_ms: 80,
                    tuning: StateTuning {
                        walking_speed: Some(2.5),
                        ..StateTuning::default()
                    },
                },
                AnimationConfig {
                    state: AnimationState::Attack,
                    frames: 10,
                    frame_delay_ms: 60,
                    tuning: StateTuning {
                        attack_range: Some(DEFAULT_ATTACK_RANGE),
                        ..StateTuning::default()
                    },
                },
            ],
        }
    }
}

impl SpriteConfig {
    pub fn dims(&self) -> Dims {
        Dims::new(self.width, self.height)
    }

    pub fn animation(&self, state: AnimationState) -> Option<&AnimationConfig> {
        self.animations.iter().find(|a| a.state == state)
    }

    pub fn tuning(&self, state: AnimationState) -> Option<&StateTuning> {
        self.animation(state).map(|a| &a.tuning)
    }

    /// Reject empty surfaces, empty or duplicated states and non-finite tunables.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SpriteError::validation(
                "sprite width/height must be non-zero",
            ));
        }
        if self.scale == 0 {
            return Err(SpriteError::validation("sprite scale must be non-zero"));
        }

        let mut seen = BTreeSet::new();
        for anim in &self.animations {
            if anim.frames == 0 {
                return Err(SpriteError::validation(format!(
                    "animation \"{}\" must have at least one frame",
                    anim.state
                )));
            }
            if !seen.insert(anim.state) {
                return Err(SpriteError::validation(format!(
                    "animation \"{}\" is configured more than once",
                    anim.state
                )));
            }
            for (name, v) in [
                ("breathing_intensity", anim.tuning.breathing_intensity),
                ("walking_speed", anim.tuning.walking_speed),
                ("attack_range", anim.tuning.attack_range),
            ] {
                if v.is_some_and(|v| !v.is_finite()) {
                    return Err(SpriteError::validation(format!(
                        "animation \"{}\" {name} must be finite",
                        anim.state
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn from_reader(reader: impl std::io::Read) -> SpriteResult<Self> {
        let cfg: Self = serde_json::from_reader(reader)
            .map_err(|e| SpriteError::validation(format!("invalid sprite config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> SpriteResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            SpriteError::validation(format!(
                "failed to open sprite config \"{}\": {e}",
                path.display()
            ))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }
}

/// A generated sprite: every frame of every configured state, in generation order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterSprite {
    pub frames: Vec<Frame>,
    pub width: u32,
    pub height: u32,
    pub config: SpriteConfig,
    #[serde(default, alias = "characterConfig")]
    pub character: CharacterConfig,
}

impl CharacterSprite {
    pub fn frames_of(&self, state: AnimationState) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(move |f| f.state == state)
    }

    pub fn frame_count(&self, state: AnimationState) -> usize {
        self.frames_of(state).count()
    }

    /// Position in `frames` of the `index`-th frame of `state`.
    pub fn position_of(&self, state: AnimationState, index: u32) -> Option<usize> {
        self.frames
            .iter()
            .position(|f| f.state == state && f.index == index)
    }

    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        for f in &self.frames {
            h.write_u64(f.fingerprint());
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/model.rs"]
mod tests;
