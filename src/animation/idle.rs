use std::f64::consts::{PI, TAU};

use crate::animation::waveform;
use crate::foundation::core::{Dims, Point, Vec2};
use crate::sprite::Pixel;

/// Idle pose at one instant: breathing, upper-body sway and a slow arm drift.
#[derive(Clone, Copy, Debug)]
pub struct IdleMotion {
    breath: f64,
    sway: f64,
    sway_lift: f64,
    phase: f64,
}

impl IdleMotion {
    pub fn at(t: f64, intensity: f64) -> Self {
        let phase = t * TAU;
        Self {
            breath: waveform::breathing(t) * intensity,
            sway: phase.sin() * 0.2 + (phase * 0.5).sin() * 0.1,
            sway_lift: (phase * 1.5).sin() * 0.1,
            phase,
        }
    }

    /// Offset for a pixel whose undeformed position is `base`.
    pub fn offset(&self, base: Point, dims: Dims) -> Vec2 {
        let mut d = Vec2::ZERO;

        let rel = dims.rel_y(base.y);
        let breath_factor = (1.0 - rel * 2.0).max(0.0).powf(1.2);
        d.y += self.breath * breath_factor;

        let upper = dims.height * 0.7;
        if base.y < upper {
            let f = (1.0 - base.y / upper).powf(1.3);
            d.x += self.sway * f;
            d.y += self.sway_lift * f;
        }

        let left = base.x < dims.width * 0.3;
        if left || base.x > dims.width * 0.7 {
            let arm_factor = dims.center_distance(base.x);
            let rest = if left { PI } else { 0.0 };
            let arm_phase = self.phase + rest;
            d.y += (arm_swing(arm_phase) - arm_swing(rest)) * arm_factor;
            d.x += ((arm_phase * 0.5).cos() - (rest * 0.5).cos()) * 0.2 * arm_factor;
        }

        d
    }
}

fn arm_swing(phase: f64) -> f64 {
    (phase * 0.5).sin() * 0.4 + (phase * 0.25).sin() * 0.2
}

pub fn apply(pixels: &mut [Pixel], t: f64, intensity: f64, dims: Dims) {
    let motion = IdleMotion::at(t, intensity);
    for p in pixels {
        let d = motion.offset(Point::new(p.x, p.y), dims);
        p.x += d.x;
        p.y += d.y;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/idle.rs"]
mod tests;
