use std::f64::consts::{FRAC_PI_4, FRAC_PI_6, PI, TAU};

use crate::animation::ease::Ease;
use crate::animation::waveform;
use crate::foundation::core::{Dims, Point, Vec2};
use crate::sprite::Pixel;

const FORWARD_LEAN: f64 = 0.4;
const PRIMARY: f64 = 0.8;
const SECONDARY: f64 = 0.15;
const MICRO: f64 = 0.05;

/// Which half of the body a pixel belongs to, split at the vertical center line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn of(x: f64, dims: Dims) -> Self {
        if x < dims.width / 2.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Horizontal sign of "forward" for this side's limbs.
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Gait phase of a leg at cycle time `t`; the right leg runs half a cycle behind.
pub fn leg_phase(side: Side, t: f64) -> f64 {
    match side {
        Side::Left => t,
        Side::Right => (t + 0.5) % 1.0,
    }
}

/// Leg displacement at gait `phase`, before the side sign is applied to `x`.
///
/// `leg_factor` is 0 at the hip and 1 at the bottom of the sprite. Both legs share this function,
/// so the vertical motion of one leg at `t` equals the other's at `t + 0.5`.
pub fn leg_stride(phase: f64, leg_factor: f64, speed: f64) -> Vec2 {
    let stride = phase * TAU;
    let lift = ((phase + 0.25) % 1.0) * TAU;
    let ground = ((phase + 0.75) % 1.0) * TAU;

    let swing = waveform::walk_cycle(phase) * speed * 0.55
        + (stride * 2.0).sin() * 0.25
        + lift.sin() * 0.15;
    let knee_bend = (phase * PI).sin() * 1.4;
    let knee_rotation = stride.cos() * 0.15;
    let contact = ground.sin().max(0.0) * 0.8;

    let mut d = Vec2::new(swing * leg_factor * 0.9, 0.0);
    if swing <= 0.0 {
        let bend = if speed.abs() > f64::EPSILON {
            (swing / speed).abs() * 1.1
        } else {
            0.0
        };
        let lift_curve = Ease::InOutSine.apply(1.0 - leg_factor.powf(1.3));
        d.y -= bend * knee_bend * lift_curve;
        d.x += (bend * knee_rotation + 0.15) * leg_factor;
    } else {
        let landing = (stride + FRAC_PI_4).sin().max(0.0) * 0.8;
        d.y += landing * 0.15 * leg_factor + contact * 0.08 * leg_factor;
    }
    d
}

/// Walk-cycle displacement of one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
    pub delta: Vec2,
    pub dz: Option<f64>,
}

impl Displacement {
    fn push_z(&mut self, dz: f64) {
        self.dz = Some(self.dz.unwrap_or(0.0) + dz);
    }

    fn relative_to(self, rest: Self) -> Self {
        let dz = match (self.dz, rest.dz) {
            (Some(a), Some(b)) => Some(a - b),
            (a, None) => a,
            (None, Some(b)) => Some(-b),
        };
        Self {
            delta: self.delta - rest.delta,
            dz,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WalkMotion {
    t: f64,
    speed: f64,
    hip_sway: f64,
    torso_rotation: f64,
    vertical_bounce: f64,
}

impl WalkMotion {
    pub fn at(t: f64, speed: f64) -> Self {
        Self {
            t,
            speed,
            hip_sway: waveform::hip_sway(t),
            torso_rotation: waveform::torso_rotation(t),
            vertical_bounce: (t * TAU).sin().abs() * 0.3,
        }
    }

    /// Offset of a pixel from its base position, relative to the pose at `t = 0`.
    pub fn displace(&self, base: Point, dims: Dims) -> Displacement {
        let rest = Self::at(0.0, self.speed).pose(base, dims);
        self.pose(base, dims).relative_to(rest)
    }

    fn pose(&self, base: Point, dims: Dims) -> Displacement {
        let mut out = Displacement::default();
        self.lean(base, dims, &mut out);
        self.torso_twist(base, dims, &mut out);
        self.legs(base, dims, &mut out);
        self.arms(base, dims, &mut out);
        self.torso_bounce(base, dims, &mut out);
        out
    }

    fn lean(&self, base: Point, dims: Dims, out: &mut Displacement) {
        if base.y >= dims.height * 0.9 {
            return;
        }
        let rel = dims.rel_y(base.y);
        let cycle = self.t * TAU;
        let lean_factor = (1.0 - rel).powf(1.4);
        let lean = FORWARD_LEAN * (1.0 + cycle.sin() * SECONDARY);
        let lateral = (self.t * PI * 4.0).sin() * MICRO * (1.0 - rel);

        out.delta.x += lean * lean_factor + lateral;
        out.push_z(cycle.sin() * MICRO * (1.0 - rel));
    }

    fn torso_twist(&self, base: Point, dims: Dims, out: &mut Displacement) {
        let (lo, hi) = (dims.height * 0.3, dims.height * 0.7);
        if base.y <= lo || base.y >= hi {
            return;
        }
        let f = (base.y - lo) / (hi - lo);
        let rotation =
            self.torso_rotation * (1.0 - f.powf(1.2)) * dims.center_distance(base.x);
        let breathing = (self.t * PI * 3.0).sin() * 0.1 * (1.0 - f);

        out.delta.x += rotation * 1.8;
        out.delta.y += rotation.abs() * 0.4 + breathing;
    }

    fn legs(&self, base: Point, dims: Dims, out: &mut Displacement) {
        let hip = dims.height * 0.7;
        if base.y <= hip {
            return;
        }
        let leg_factor = (base.y - hip) / (dims.height * 0.3);
        let side = Side::of(base.x, dims);
        let stride = leg_stride(leg_phase(side, self.t), leg_factor, self.speed);

        out.delta.x += side.sign() * stride.x;
        out.delta.y += stride.y;
        out.delta.x += side.sign() * self.hip_sway * (1.0 - leg_factor.powf(1.3));
    }

    fn arms(&self, base: Point, dims: Dims, out: &mut Displacement) {
        let in_band = base.x < dims.width * 0.3 || base.x > dims.width * 0.7;
        if base.y >= dims.height * 0.5 || !in_band {
            return;
        }
        let side = Side::of(base.x, dims);
        let arm_factor = dims.center_distance(base.x);
        // Arms swing opposite to the leg on the same side.
        let phase = match side {
            Side::Left => (self.t + 0.5) % 1.0,
            Side::Right => self.t,
        };
        let eased = Ease::InOutSine.apply(phase);
        let cycle = phase * TAU;

        let swing = eased * self.speed * 0.5 * 0.8
            + cycle.sin() * 0.15 * eased
            + (cycle * 2.0).sin() * 0.04;

        let shoulder = cycle.sin() * 0.25 + cycle.cos() * 0.15;
        let elbow_phase = (phase + 0.25) % 1.0;
        let relaxed = if self.speed.abs() > f64::EPSILON {
            1.0 - swing.abs() / self.speed
        } else {
            1.0
        };
        let elbow = (elbow_phase * TAU + PI).sin() * 0.25 * Ease::InOutSine.apply(relaxed);
        let twist = cycle.sin() * 0.08;

        // Left arm mirrors the right one.
        let s = -side.sign();
        out.delta.x += s * swing * arm_factor;
        out.delta.y += shoulder * arm_factor;

        let elbow_top = dims.height * 0.3;
        if base.y > elbow_top {
            let ef = (base.y - elbow_top) / (dims.height * 0.2);
            out.delta.x -= s * (elbow * arm_factor * ef + twist * arm_factor * (1.0 - ef));
        }
        out.push_z(-s * (swing * 0.25 + elbow * 0.15) * arm_factor);

        let torso = self.torso_rotation * 0.8;
        out.delta.x += torso * arm_factor * 1.2;
        out.delta.y += torso.abs() * arm_factor * 0.4;
    }

    fn torso_bounce(&self, base: Point, dims: Dims, out: &mut Displacement) {
        let (lo, hi) = (dims.height * 0.5, dims.height * 0.7);
        if base.y < lo || base.y > hi {
            return;
        }
        let body = (base.y - lo) / (hi - lo);
        let horizontal = (base.x - dims.width / 2.0) / (dims.width / 2.0);
        let cycle = self.t * TAU;

        let primary = self.vertical_bounce * (1.0 - body.powf(1.4)) * 0.4;
        let secondary = (self.t * PI * 3.0).sin() * MICRO * 0.8 * (1.0 - body);
        let lateral = cycle.sin() * (1.0 - body) * PRIMARY * 0.4;
        let momentum = (cycle + FRAC_PI_6).sin() * SECONDARY * 0.7 * (1.0 - body);
        let breathing = (self.t * PI * 2.5).sin() * MICRO * 0.8 * (1.0 - body);

        let eased = Ease::InOutSine.apply(1.0 - body);
        out.delta.y += (primary + secondary) * eased + breathing;
        out.delta.x += (lateral + momentum) * eased + cycle.sin() * 0.08 * eased;
        out.push_z((cycle.sin() * SECONDARY + horizontal * MICRO) * (1.0 - body));
    }
}

pub fn apply(pixels: &mut [Pixel], t: f64, speed: f64, dims: Dims) {
    let motion = WalkMotion::at(t, speed);
    for p in pixels {
        let d = motion.displace(Point::new(p.x, p.y), dims);
        p.x += d.delta.x;
        p.y += d.delta.y;
        if let Some(dz) = d.dz.filter(|dz| *dz != 0.0) {
            p.z = Some(p.z.unwrap_or(0.0) + dz);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/walk.rs"]
mod tests;
