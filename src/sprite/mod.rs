pub mod model;

pub use model::{
    AnimationConfig, AnimationState, CharacterSprite, ColorOverride, Frame, Pixel, SpriteConfig,
    StateTuning,
};
