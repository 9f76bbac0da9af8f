//! Spriteforge procedurally generates pixel-art character sprites.
//!
//! A roll produces a [`CharacterConfig`] (palette and golden-ratio body proportions). From it:
//!
//! - [`SpriteGenerator`] builds one base frame per animation state and deforms it across the
//!   state's cycle (breathing idle, walk gait, attack swing)
//! - [`FrameRenderer`] rasterizes frames into premultiplied RGBA8 [`Bitmap`]s and sprite sheets
//! - [`EditorSession`] and [`Playback`] drive pixel editing and tick-based preview
//! - [`encode`] persists sprites as JSON and exports PNGs and ZIP archives
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod character;
pub mod effects;
pub mod encode;
pub mod generate;
pub mod render;
pub mod session;
pub mod sprite;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, Canvas, Cell, Dims, Point, Vec2};
pub use crate::foundation::error::{SpriteError, SpriteResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::rng::{RandomSource, Rng64, SequenceSource};
pub use crate::character::{
    CharacterConfig, CharacterGenerator, CharacterProportions, CharacterType, DetailedColors,
};
pub use crate::effects::{Pattern, PixelEffects, PixelManipulator};
pub use crate::encode::SpriteDocument;
pub use crate::generate::{AnimationFrameGenerator, BaseFrameGenerator, SpriteGenerator};
pub use crate::render::{Bitmap, FrameRenderer};
pub use crate::session::{EditorSession, Playback};
pub use crate::sprite::{
    AnimationConfig, AnimationState, CharacterSprite, ColorOverride, Frame, Pixel, SpriteConfig,
    StateTuning,
};
