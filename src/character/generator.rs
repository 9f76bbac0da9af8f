use std::f64::consts::TAU;

use crate::animation::rng::RandomSource;
use crate::character::model::{
    CharacterConfig, CharacterProportions, CharacterType, DetailedColors, GOLDEN_RATIO, Palette,
};
use crate::foundation::color::Color;

/// Per-channel spread of the palette jitter.
const COLOR_VARIATION: f64 = 12.0;
/// Lower bound of the proportion jitter factor, so rolled proportions stay positive.
const MIN_JITTER: f64 = 0.25;

/// Rolls characters: a palette with slight color jitter and proportions scattered
/// around the golden-ratio defaults.
#[derive(Debug)]
pub struct CharacterGenerator<R> {
    rng: R,
}

impl<R: RandomSource> CharacterGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    #[tracing::instrument(skip(self))]
    pub fn generate(
        &mut self,
        character_type: Option<CharacterType>,
        theme: Option<&str>,
    ) -> CharacterConfig {
        let character_type = character_type.unwrap_or_default();
        let palette = self.pick_palette(character_type, theme);
        tracing::debug!(palette = palette.name, "rolled character palette");

        let colors = DetailedColors {
            primary: self.vary_color(palette.colors.primary),
            secondary: self.vary_color(palette.colors.secondary),
            outline: palette.colors.outline,
        };

        CharacterConfig {
            character_type,
            colors,
            proportions: self.roll_proportions(),
        }
    }

    fn pick_palette(&mut self, character_type: CharacterType, theme: Option<&str>) -> Palette {
        let palettes = character_type.palettes();
        match theme {
            Some(name) => match character_type.palette(name) {
                Some(p) => *p,
                None => {
                    tracing::debug!(theme = name, "unknown theme, using the first palette");
                    palettes[0]
                }
            },
            None => {
                let i = (self.uniform() * palettes.len() as f64) as usize;
                palettes[i.min(palettes.len() - 1)]
            }
        }
    }

    /// Box-Muller style sample: `rho * cos(theta)` with `theta` and `rho` from two uniforms.
    fn gaussian(&mut self) -> f64 {
        let theta = TAU * self.uniform();
        let rho = (-2.0 * (1.0 - self.uniform()).ln()).sqrt();
        rho * theta.cos()
    }

    /// Next sample forced into `[0, 1)`, whatever the source returns.
    fn uniform(&mut self) -> f64 {
        let u = self.rng.next_f64();
        if u.is_finite() {
            u.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        }
    }

    fn vary_color(&mut self, base: Color) -> Color {
        let mut channel = |c: u8| -> u8 {
            let v = f64::from(c) + self.gaussian() * COLOR_VARIATION / 2.0;
            v.round().clamp(0.0, 255.0) as u8
        };
        let r = channel(base.r);
        let g = channel(base.g);
        let b = channel(base.b);
        Color::rgb(r, g, b)
    }

    fn jitter(&mut self, base: f64, variation: f64) -> f64 {
        base * (1.0 + self.gaussian() * variation).max(MIN_JITTER)
    }

    fn roll_proportions(&mut self) -> CharacterProportions {
        let d = CharacterProportions::default();
        let head_size = self.jitter(d.head_size, 0.08);
        let body_width = self.jitter(d.body_width, 0.1);
        let shoulder_width = self.jitter(d.shoulder_width, 0.12);
        let torso_length = self.jitter(d.torso_length, 0.1);

        let mut p = CharacterProportions {
            head_size,
            body_width,
            shoulder_width,
            torso_length,
            neck_width: self.jitter(d.neck_width, 0.05),
            waist_width: self.jitter(d.waist_width, 0.08),
            hip_width: self.jitter(d.hip_width, 0.08),
            arm_width: self.jitter(d.arm_width, 0.06),
            leg_width: self.jitter(d.leg_width, 0.06),
            muscle_definition: self.jitter(d.muscle_definition, 0.15),
            arm_length: torso_length * GOLDEN_RATIO * 0.8,
            leg_length: torso_length * GOLDEN_RATIO,
        };
        p.clamp_to_shoulders();
        p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/character/generator.rs"]
mod tests;
