//! Composite periodic waveforms for gait, breathing and the weapon swing.
//!
//! Every function takes normalized cycle progress `t` in `[0, 1]` and is pure.

use std::f64::consts::{PI, TAU};

use crate::animation::ease::Ease;

/// Chest rise offset around zero: a main breath plus a slower variation and a micro tremor.
pub fn breathing(t: f64) -> f64 {
    (t * TAU).sin() * 0.05 + (t * PI * 1.5).sin() * 0.015 + (t * PI * 8.0).sin() * 0.005
}

/// Stride scalar with heel strike, toe push, stance pause and momentum terms.
pub fn walk_cycle(t: f64) -> f64 {
    let phase = t * TAU;
    let stride = phase.sin();

    let acceleration = stride.abs().powf(1.6) * stride.signum();
    let heel_strike = (phase * 2.0 - PI / 3.0).sin().max(0.0) * 0.25;
    let toe_push = (phase * 2.0 + PI / 3.0).sin().max(0.0) * 0.2;
    let stance = (phase * 2.0).cos() * 0.12 * (1.0 - stride.abs());
    let weight_transfer = (phase - PI / 4.0).sin() * 0.15;
    let ground_reaction = (phase * 2.0).sin().max(0.0) * 0.1;
    let momentum = (phase + PI / 6.0).sin() * 0.15;

    acceleration * 0.5 + stance + heel_strike - toe_push
        + weight_transfer
        + ground_reaction
        + momentum
}

pub fn hip_sway(t: f64) -> f64 {
    let main = (t * TAU).sin() * 0.25;
    let secondary = (t * PI * 4.0).sin() * 0.08;
    let stabilization = (t * PI * 6.0).sin() * 0.03;
    let resistance = main.abs().powf(1.2) * -0.05 * main.signum();
    main + secondary + stabilization + resistance
}

pub fn torso_rotation(t: f64) -> f64 {
    let main = (t * TAU - PI / 4.0).sin() * 0.15;
    let counter = (t * PI * 4.0 + PI / 6.0).sin() * 0.04;
    let stabilization = (t * PI * 6.0).sin() * 0.02;
    let resistance = main.abs().powf(1.3) * -0.03 * main.signum();
    main + counter + stabilization + resistance
}

/// Normalized weapon swing: pullback below zero, a fast strike overshooting to 1.2, then an
/// elastic settle back to 1. Continuous at the 0.2 and 0.6 phase boundaries.
pub fn attack_swing(t: f64) -> f64 {
    if t < 0.2 {
        Ease::InBack.apply(t * 5.0) * -0.2
    } else if t < 0.6 {
        -0.2 + Ease::OutExpo.apply((t - 0.2) * 2.5) * 1.4
    } else {
        1.2 - Ease::OutElastic.apply(((t - 0.6) * 2.5).min(1.0)) * 0.2
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/waveform.rs"]
mod tests;
