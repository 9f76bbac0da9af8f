use std::time::Duration;

use crate::animation::rng::RandomSource;
use crate::character::{CharacterConfig, CharacterType};
use crate::effects::{PixelEffects, PixelManipulator};
use crate::foundation::color::Color;
use crate::foundation::error::{SpriteError, SpriteResult};
use crate::generate::SpriteGenerator;
use crate::render::{Bitmap, FrameRenderer};
use crate::sprite::{AnimationState, CharacterSprite, Frame, SpriteConfig};

/// Editing context: the owned sprite, the frame under the cursor and the active brush.
#[derive(Debug)]
pub struct EditorSession {
    generator: SpriteGenerator,
    renderer: FrameRenderer,
    manipulator: PixelManipulator,
    sprite: CharacterSprite,
    state: AnimationState,
    index: u32,
    brush: Color,
    effects: PixelEffects,
}

impl EditorSession {
    pub fn new(config: SpriteConfig, character: CharacterConfig) -> SpriteResult<Self> {
        let generator = SpriteGenerator::new(config)?;
        let sprite = generator.generate(character);
        Self::with_generator(generator, sprite)
    }

    /// Resume editing a previously generated or loaded sprite.
    pub fn from_sprite(sprite: CharacterSprite) -> SpriteResult<Self> {
        let generator = SpriteGenerator::new(sprite.config.clone())?;
        Self::with_generator(generator, sprite)
    }

    fn with_generator(generator: SpriteGenerator, sprite: CharacterSprite) -> SpriteResult<Self> {
        let renderer = FrameRenderer::new(generator.config())?;
        let manipulator = PixelManipulator::new(generator.config().scale);
        let state = sprite
            .frames
            .first()
            .map(|f| f.state)
            .unwrap_or_default();
        let brush = sprite.character.colors.primary;
        Ok(Self {
            generator,
            renderer,
            manipulator,
            sprite,
            state,
            index: 0,
            brush,
            effects: PixelEffects::default(),
        })
    }

    pub fn sprite(&self) -> &CharacterSprite {
        &self.sprite
    }

    pub fn into_sprite(self) -> CharacterSprite {
        self.sprite
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frame_index(&self) -> u32 {
        self.index
    }

    pub fn frame_count(&self) -> u32 {
        self.sprite.frame_count(self.state) as u32
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        let pos = self.sprite.position_of(self.state, self.index)?;
        self.sprite.frames.get(pos)
    }

    /// Configured delay between frames of the active state.
    pub fn frame_delay(&self) -> Option<Duration> {
        self.sprite
            .config
            .animation(self.state)
            .map(|a| Duration::from_millis(a.frame_delay_ms))
    }

    /// Switch to `state`, starting from its first frame.
    pub fn select_state(&mut self, state: AnimationState) -> SpriteResult<()> {
        if self.sprite.frame_count(state) == 0 {
            return Err(SpriteError::validation(format!(
                "sprite has no \"{state}\" frames"
            )));
        }
        self.state = state;
        self.index = 0;
        Ok(())
    }

    /// Step `delta` frames through the active state, wrapping at either end.
    pub fn navigate(&mut self, delta: i64) {
        let count = i64::from(self.frame_count());
        if count == 0 {
            return;
        }
        self.index = (i64::from(self.index) + delta).rem_euclid(count) as u32;
    }

    pub fn set_brush(&mut self, color: Color, effects: PixelEffects) {
        self.brush = color;
        self.effects = effects;
    }

    /// Paint the brush at a device-space pointer position. Returns whether a frame was edited.
    pub fn draw(&mut self, px: f64, py: f64) -> bool {
        let manipulator = self.manipulator;
        let (brush, effects) = (self.brush, self.effects.clone());
        self.edit(|frame| manipulator.place_at_pointer(frame, px, py, brush, &effects))
    }

    pub fn erase(&mut self, px: f64, py: f64) -> bool {
        let manipulator = self.manipulator;
        self.edit(|frame| manipulator.erase(frame, px, py))
    }

    fn edit(&mut self, f: impl FnOnce(&Frame) -> Frame) -> bool {
        let Some(pos) = self.sprite.position_of(self.state, self.index) else {
            return false;
        };
        let edited = f(&self.sprite.frames[pos]);
        self.sprite.frames[pos] = edited;
        true
    }

    /// `"{state} - Frame {n} of {total}"`, 1-based, with the configured frame total.
    pub fn frame_info(&self) -> String {
        let total = self
            .sprite
            .config
            .animation(self.state)
            .map_or(0, |a| a.frames);
        format!("{} - Frame {} of {}", self.state, self.index + 1, total)
    }

    /// Discard every frame and roll a new character.
    #[tracing::instrument(skip(self, rng))]
    pub fn reroll<R: RandomSource>(
        &mut self,
        rng: R,
        character_type: Option<CharacterType>,
        theme: Option<&str>,
    ) {
        self.sprite = self.generator.generate_random(rng, character_type, theme);
        self.brush = self.sprite.character.colors.primary;
        self.index = 0;
        if self.sprite.frame_count(self.state) == 0 {
            self.state = self
                .sprite
                .frames
                .first()
                .map(|f| f.state)
                .unwrap_or_default();
        }
    }

    pub fn render_current(&self) -> Option<Bitmap> {
        self.current_frame().map(|f| self.renderer.render(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
