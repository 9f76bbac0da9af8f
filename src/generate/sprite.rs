use crate::animation::rng::RandomSource;
use crate::character::{CharacterConfig, CharacterGenerator, CharacterType};
use crate::foundation::error::SpriteResult;
use crate::generate::base_frame::BaseFrameGenerator;
use crate::generate::deform::AnimationFrameGenerator;
use crate::sprite::{AnimationConfig, CharacterSprite, Frame, SpriteConfig};

/// Builds complete sprites: one base frame per configured state, deformed across its cycle.
#[derive(Clone, Debug)]
pub struct SpriteGenerator {
    config: SpriteConfig,
    base: BaseFrameGenerator,
    frames: AnimationFrameGenerator,
}

impl SpriteGenerator {
    pub fn new(config: SpriteConfig) -> SpriteResult<Self> {
        config.validate()?;
        Ok(Self {
            base: BaseFrameGenerator::new(&config),
            frames: AnimationFrameGenerator::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Frames of every configured animation, in configuration order.
    #[tracing::instrument(skip(self, character), fields(kind = %character.character_type))]
    pub fn generate(&self, character: CharacterConfig) -> CharacterSprite {
        let mut frames = Vec::new();
        for anim in &self.config.animations {
            frames.extend(self.animation_frames(anim, &character));
        }
        tracing::debug!(frames = frames.len(), "generated sprite");

        CharacterSprite {
            frames,
            width: self.config.width,
            height: self.config.height,
            config: self.config.clone(),
            character,
        }
    }

    /// Roll a character from `rng` and generate its sprite.
    pub fn generate_random<R: RandomSource>(
        &self,
        rng: R,
        character_type: Option<CharacterType>,
        theme: Option<&str>,
    ) -> CharacterSprite {
        let character = CharacterGenerator::new(rng).generate(character_type, theme);
        self.generate(character)
    }

    fn animation_frames(&self, anim: &AnimationConfig, character: &CharacterConfig) -> Vec<Frame> {
        let base = self.base.generate(anim.state, 0, character);
        let mut out = Vec::with_capacity(anim.frames as usize);
        for i in 1..anim.frames {
            out.push(
                self.frames
                    .deform(&base, anim.state, i, anim.frames, Some(&anim.tuning)),
            );
        }
        out.insert(0, base);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/sprite.rs"]
mod tests;
