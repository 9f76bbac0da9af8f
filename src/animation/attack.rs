use std::f64::consts::PI;

use crate::animation::ease::Ease;
use crate::animation::waveform;
use crate::foundation::core::{Affine, Dims, Point};
use crate::sprite::Pixel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackPhase {
    /// `[0, 0.2)`: wind-up.
    Anticipation,
    /// `[0.2, 0.6)`: the swing itself.
    Strike,
    /// `[0.6, 1]`: follow-through.
    Recovery,
}

impl AttackPhase {
    /// Phase at cycle time `t` together with the progress re-normalized to that phase.
    pub fn at(t: f64) -> (Self, f64) {
        if t < 0.2 {
            (Self::Anticipation, t * 5.0)
        } else if t < 0.6 {
            (Self::Strike, (t - 0.2) * 2.5)
        } else {
            (Self::Recovery, ((t - 0.6) * 2.5).min(1.0))
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AttackMotion {
    t: f64,
    phase: AttackPhase,
    progress: f64,
    swing_angle: f64,
    weight_shift: f64,
    body_rotation: f64,
    counter_balance: f64,
}

impl AttackMotion {
    pub fn at(t: f64, range: f64) -> Self {
        let (phase, p) = AttackPhase::at(t);
        // Each phase starts where the previous one ended.
        let (weight_shift, body_rotation, counter_balance) = match phase {
            AttackPhase::Anticipation => {
                let back = Ease::InBack.apply(p);
                (-back * 1.5, -p * 0.3, (p * PI).sin() * 0.5)
            }
            AttackPhase::Strike => {
                let expo = Ease::OutExpo.apply(p);
                (-1.5 + expo * 4.5, -0.3 + expo * 0.8, -(p * PI).sin())
            }
            AttackPhase::Recovery => {
                let settle = Ease::OutElastic.apply(p);
                (
                    3.0 - settle * 1.5,
                    0.5 - settle * 0.5 + (p * PI).sin() * 0.2,
                    -(p * PI).sin() * 0.3,
                )
            }
        };

        Self {
            t,
            phase,
            progress: p,
            swing_angle: range * waveform::attack_swing(t),
            weight_shift,
            body_rotation,
            counter_balance,
        }
    }

    pub fn phase(&self) -> (AttackPhase, f64) {
        (self.phase, self.progress)
    }

    pub fn swing_angle(&self) -> f64 {
        self.swing_angle
    }

    /// Rigid rotation of the weapon arm about the sprite center, with a slight radius breath.
    pub fn arm_transform(&self, dims: Dims) -> Affine {
        let c = dims.center().to_vec2();
        let radius = 1.0 + (self.t * PI).sin() * 0.1;
        Affine::translate(c)
            * Affine::rotate(self.swing_angle)
            * Affine::scale(radius)
            * Affine::translate(-c)
    }

    /// New position of a pixel whose undeformed position is `base`.
    pub fn position(&self, base: Point, dims: Dims) -> Point {
        let mut p = base;

        if base.x > dims.width * 0.6 && base.y < dims.height * 0.5 {
            p = self.arm_transform(dims) * base;
        }

        let rel = dims.rel_y(base.y);
        if base.y < dims.height * 0.8 {
            let body = (1.0 - rel).powf(1.2);
            let shifted = p.x + self.weight_shift * body - dims.width / 2.0;
            p.x += self.weight_shift * body + shifted * self.body_rotation * 0.1;
            p.y += shifted * self.body_rotation * 0.2;
        }

        if base.x < dims.width * 0.4 && base.y < dims.height * 0.5 {
            p.x += self.counter_balance * (1.0 - rel);
            p.y += self.counter_balance * 0.5 * (1.0 - rel);
        }

        p
    }
}

pub fn apply(pixels: &mut [Pixel], t: f64, range: f64, dims: Dims) {
    let motion = AttackMotion::at(t, range);
    for px in pixels {
        let p = motion.position(Point::new(px.x, px.y), dims);
        px.x = p.x;
        px.y = p.y;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/attack.rs"]
mod tests;
