pub mod attack;
pub mod ease;
pub mod idle;
pub mod rng;
pub mod walk;
pub mod waveform;

use crate::foundation::core::Dims;
use crate::sprite::{AnimationState, Pixel};

/// Deform `pixels` in place to cycle time `t` of `state`.
pub fn apply_state(state: AnimationState, pixels: &mut [Pixel], t: f64, tunable: f64, dims: Dims) {
    match state {
        AnimationState::Idle => idle::apply(pixels, t, tunable, dims),
        AnimationState::Walk => walk::apply(pixels, t, tunable, dims),
        AnimationState::Attack => attack::apply(pixels, t, tunable, dims),
    }
}
