pub mod base_frame;
pub mod deform;
pub mod sprite;

pub use base_frame::{BaseFrameGenerator, BodyLayout};
pub use deform::AnimationFrameGenerator;
pub use sprite::SpriteGenerator;
