use std::f64::consts::PI;

use crate::character::{CharacterConfig, CharacterProportions};
use crate::effects::pattern::Pattern;
use crate::effects::pixel::{PixelEffects, paint};
use crate::foundation::color::Color;
use crate::sprite::{AnimationState, Frame, Pixel, SpriteConfig};

/// Sprite-space measurements of the neutral pose, in whole cells.
///
/// Base measurements assume a 32-cell sprite and scale with `min(width, height) / 32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyLayout {
    pub cx: i64,
    pub cy: i64,
    pub head_top: i64,
    pub head_height: i64,
    pub head_half: i64,
    pub neck_y: i64,
    pub neck_half: i64,
    pub torso_top: i64,
    pub torso_len: i64,
    pub shoulder_half: i64,
    pub waist_half: i64,
    pub hip_half: i64,
    pub body_half: i64,
    pub arm_top: i64,
    pub arm_len: i64,
    pub arm_width: i64,
    pub hip_top: i64,
    pub leg_top: i64,
    pub leg_len: i64,
    pub leg_width: i64,
    pub leg_gap: i64,
    pub blade_len: i64,
}

impl BodyLayout {
    pub fn new(width: u32, height: u32, p: &CharacterProportions) -> Self {
        let u = f64::from(width.min(height)) / 32.0;
        let span = |v: f64, lo: i64, hi_units: f64| -> i64 {
            let hi = ((hi_units * u).round() as i64).max(lo);
            (v.round() as i64).clamp(lo, hi)
        };

        let cx = i64::from(width / 2);
        let cy = i64::from(height / 2);

        let head_height = span(5.0 * p.head_size * u, 3, 9.0);
        let head_half = span(2.5 * p.head_size * u, 1, 5.0);
        let torso_len = span(p.torso_length * 5.0 * u, 4, 12.0);
        let torso_top = cy - torso_len / 2;
        let neck_y = torso_top - 1;
        let neck_half = span(p.neck_width * 4.0 * u, 1, 3.0);
        let shoulder_half = span(p.shoulder_width * 4.0 * u, 2, 9.0);
        let waist_half = span(p.waist_width * 4.0 * u, 1, shoulder_half as f64 / u);
        let hip_half = span(p.hip_width * 4.0 * u, 1, shoulder_half as f64 / u);
        let hip_top = torso_top + torso_len;

        Self {
            cx,
            cy,
            head_top: neck_y - head_height,
            head_height,
            head_half,
            neck_y,
            neck_half,
            torso_top,
            torso_len,
            shoulder_half,
            waist_half,
            hip_half,
            body_half: span(p.body_width * 6.5 * u, 2, 9.0),
            arm_top: torso_top + torso_len / 2 - torso_len / 3,
            arm_len: span(p.arm_length * 3.0 * u, 2, 10.0),
            arm_width: span(p.arm_width * 9.0 * u, 1, 3.0),
            hip_top,
            leg_top: hip_top + 2,
            leg_len: span(p.leg_length * 3.0 * u, 2, 10.0),
            leg_width: span(p.leg_width * 10.0 * u, 1, 4.0),
            leg_gap: span(hip_half as f64 * 0.3, 0, 3.0),
            blade_len: span(8.0 * u, 3, 8.0),
        }
    }

    /// Column mirrored across the vertical center line.
    pub fn mirror(&self, x: i64) -> i64 {
        2 * self.cx - 1 - x
    }

    pub fn torso_half_at(&self, y: i64) -> i64 {
        let p = progress(y - self.torso_top, self.torso_len);
        let (s, w, h) = (
            self.shoulder_half as f64,
            self.waist_half as f64,
            self.hip_half as f64,
        );
        let half = if p <= 0.8 {
            s - (s - w) * (p / 0.8).powf(1.5)
        } else {
            w + (h - w) * ((p - 0.8) / 0.2)
        };
        (half.round() as i64).max(1)
    }

    pub fn head_half_at(&self, y: i64) -> i64 {
        let p = progress(y - self.head_top, self.head_height);
        let half = self.head_half as f64;
        let w = if p < 0.3 {
            half * (0.55 + 0.45 * (p / 0.3).sqrt())
        } else if p <= 0.8 {
            half
        } else {
            half * (1.0 - 0.35 * (p - 0.8) / 0.2)
        };
        (w.round() as i64).max(1)
    }
}

fn progress(step: i64, len: i64) -> f64 {
    if len <= 1 {
        0.0
    } else {
        step as f64 / (len - 1) as f64
    }
}

/// Colors resolved for one state.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Paints {
    body: Color,
    secondary: Color,
    outline: Color,
    blade: Color,
}

/// Synthesizes the undeformed pose of a character for a state.
#[derive(Clone, Debug)]
pub struct BaseFrameGenerator {
    config: SpriteConfig,
}

impl BaseFrameGenerator {
    pub fn new(config: &SpriteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn layout(&self, character: &CharacterConfig) -> BodyLayout {
        BodyLayout::new(self.config.width, self.config.height, &character.proportions)
    }

    #[tracing::instrument(skip(self, character))]
    pub fn generate(
        &self,
        state: AnimationState,
        frame_index: u32,
        character: &CharacterConfig,
    ) -> Frame {
        let paints = self.paints(state, character);
        let layout = self.layout(character);
        let muscle = character.proportions.muscle_definition;

        let mut b = Builder {
            pixels: Vec::new(),
            layout,
        };
        b.head(&paints);
        b.face(&paints);
        b.neck(&paints);
        b.torso(&paints, muscle);
        b.arms(&paints, muscle);
        b.legs(&paints);
        if state == AnimationState::Attack {
            b.weapon(&paints);
        }

        tracing::debug!(pixels = b.pixels.len(), "built base frame");
        Frame::new(state, frame_index, b.pixels)
    }

    fn paints(&self, state: AnimationState, character: &CharacterConfig) -> Paints {
        let c = &character.colors;
        let overrides = match self.config.tuning(state) {
            Some(t) => t.colors.clone().unwrap_or_default(),
            None => {
                tracing::debug!(%state, "no animation config for state, using palette defaults");
                Default::default()
            }
        };
        Paints {
            body: overrides.body.unwrap_or(c.primary),
            secondary: c.secondary,
            outline: overrides.outline.unwrap_or(c.outline),
            blade: overrides.weapon.unwrap_or(c.secondary),
        }
    }
}

struct Builder {
    pixels: Vec<Pixel>,
    layout: BodyLayout,
}

impl Builder {
    fn put(&mut self, x: f64, y: i64, color: Color, effects: &PixelEffects) {
        paint(&mut self.pixels, x, y as f64, color, effects);
    }

    /// One horizontal run `[x0, x1)`; the end columns are anti-aliased.
    fn run(
        &mut self,
        y: i64,
        x0: i64,
        x1: i64,
        color: Color,
        pattern: Option<Pattern>,
        shade: impl Fn(i64) -> f64,
    ) {
        for x in x0..x1 {
            let mut fx = PixelEffects::shaded(shade(x));
            fx.pattern = pattern;
            fx.anti_alias = x == x0 || x == x1 - 1;
            self.put(x as f64, y, color, &fx);
        }
    }

    fn head(&mut self, paints: &Paints) {
        let l = self.layout;
        let cx = l.cx as f64;
        for y in l.head_top..l.head_top + l.head_height {
            let half = l.head_half_at(y);
            self.run(y, l.cx - half, l.cx + half, paints.body, None, |x| {
                let dx = (x as f64 + 0.5 - cx).abs();
                1.0 - 0.1 * (dx / half as f64).min(1.0)
            });
        }
    }

    fn face(&mut self, paints: &Paints) {
        let l = self.layout;
        let at = |f: f64| l.head_top + (f * (l.head_height - 1) as f64).round() as i64;
        let eye_y = at(0.4);
        let spread = ((0.5 * l.head_half as f64).round() as i64).max(1);

        for x in [l.cx + spread - 1, l.mirror(l.cx + spread - 1)] {
            self.put(x as f64, eye_y, paints.outline, &PixelEffects::default());
            self.put(x as f64, eye_y - 1, paints.outline, &PixelEffects::shaded(0.7));
        }
        self.put(l.cx as f64, at(0.7), paints.outline, &PixelEffects::shaded(0.8));
    }

    fn neck(&mut self, paints: &Paints) {
        let l = self.layout;
        self.run(
            l.neck_y,
            l.cx - l.neck_half,
            l.cx + l.neck_half,
            paints.secondary,
            None,
            |_| 0.92,
        );
    }

    fn torso(&mut self, paints: &Paints, muscle: f64) {
        let l = self.layout;
        let cx = l.cx as f64;
        for y in l.torso_top..l.torso_top + l.torso_len {
            let half = l.torso_half_at(y);
            let ripple = ((y - l.torso_top) as f64 * 0.3).sin() * muscle * 0.03;
            self.run(
                y,
                l.cx - half,
                l.cx + half,
                paints.body,
                Some(Pattern::Plate),
                |x| {
                    let edge = ((x as f64 + 0.5 - cx).abs() / half as f64).min(1.0);
                    (1.0 + ripple) * (1.0 + 0.1 * edge)
                },
            );
        }
    }

    fn arms(&mut self, paints: &Paints, muscle: f64) {
        let l = self.layout;
        let inner = l.cx + l.body_half + 1;
        for step in 0..l.arm_len {
            let y = l.arm_top + step;
            let p = progress(step, l.arm_len);
            let width = arm_width_at(l.arm_width, p);
            let detail = 1.0 + (p * PI * 2.0).sin() * muscle * 0.05;

            for k in 0..width {
                let outer_edge = k == width - 1;
                let shade = if outer_edge { detail * 0.88 } else { detail };
                let fx = PixelEffects {
                    shade: Some(shade),
                    anti_alias: k == 0 || outer_edge,
                    ..PixelEffects::default()
                };
                let col = inner + k;
                self.put(col as f64, y, paints.body, &fx);
                self.put(l.mirror(col) as f64, y, paints.body, &fx);
            }
        }
    }

    fn legs(&mut self, paints: &Paints) {
        let l = self.layout;
        for (r, y) in (l.hip_top..l.leg_top).enumerate() {
            let half = (l.hip_half - r as i64).max(1);
            self.run(
                y,
                l.cx - half,
                l.cx + half,
                paints.secondary,
                Some(Pattern::Leather),
                |_| 1.0,
            );
        }

        for step in 0..l.leg_len {
            let y = l.leg_top + step;
            let p = progress(step, l.leg_len);
            let width = ((l.leg_width as f64 * (1.0 - 0.25 * p)).round() as i64).max(1);
            // whole cells keep both legs keyed to mirrored columns
            let curve = ((p * PI).sin() * 2.0).round() as i64;

            for k in 0..width {
                let fx = PixelEffects {
                    shade: Some(if k == width - 1 { 0.9 } else { 1.0 }),
                    anti_alias: k == 0 || k == width - 1,
                    ..PixelEffects::default()
                };
                let col = l.cx + l.leg_gap + k + curve;
                self.put(col as f64, y, paints.secondary, &fx);
                self.put(l.mirror(col) as f64, y, paints.secondary, &fx);
            }
        }
    }

    fn weapon(&mut self, paints: &Paints) {
        let l = self.layout;
        let hand_x = l.cx + l.body_half + 1 + arm_width_at(l.arm_width, 1.0);
        let hand_y = l.arm_top + l.arm_len - 1;
        let plain = PixelEffects::default();

        // handle, grip accents every 2 rows
        for (i, y) in (hand_y - 1..=hand_y + 1).enumerate() {
            let color = if i % 2 == 0 {
                paints.secondary.shade(0.8)
            } else {
                paints.outline
            };
            self.put(hand_x as f64, y, color, &plain);
        }
        self.put(hand_x as f64, hand_y + 2, paints.outline, &PixelEffects::shaded(0.8));

        let guard_y = hand_y - 2;
        for x in hand_x - 2..=hand_x + 2 {
            let (color, fx) = if x == hand_x {
                (paints.body, PixelEffects::shaded(1.2))
            } else {
                (paints.outline, PixelEffects::default())
            };
            self.put(x as f64, guard_y, color, &fx);
        }

        let blade_len = l.blade_len;
        for i in 0..blade_len {
            let y = guard_y - 1 - i;
            let x = hand_x + i / 3;
            let width = if i < blade_len / 2 { 2 } else { 1 };
            let tip = i == blade_len - 1;
            for k in 0..width {
                let edge = k == width - 1;
                let mut fx = PixelEffects::shaded(if edge { 1.3 } else { 1.0 });
                if tip {
                    fx.glow = Some(paints.blade.shade(1.4).with_alpha(0.5));
                }
                self.put((x + k) as f64, y, paints.blade, &fx);
            }
        }
    }
}

fn arm_width_at(base: i64, p: f64) -> i64 {
    ((base as f64 * (1.0 - 0.35 * p)).round() as i64).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/base_frame.rs"]
mod tests;
