use crate::animation;
use crate::foundation::core::Dims;
use crate::sprite::{AnimationState, Frame, SpriteConfig, StateTuning};

/// Derives later animation frames from a base frame by moving its pixels.
#[derive(Clone, Copy, Debug)]
pub struct AnimationFrameGenerator {
    dims: Dims,
}

impl AnimationFrameGenerator {
    pub fn new(config: &SpriteConfig) -> Self {
        Self {
            dims: config.dims(),
        }
    }

    /// `frame_index / (total_frames - 1)` clamped to `[0, 1]`; single-frame cycles stay at 0.
    pub fn normalized_time(frame_index: u32, total_frames: u32) -> f64 {
        if total_frames <= 1 {
            return 0.0;
        }
        (f64::from(frame_index) / f64::from(total_frames - 1)).clamp(0.0, 1.0)
    }

    /// Copy of `base` with every pixel displaced to its position at `frame_index`.
    ///
    /// Colors are untouched. `t == 0` returns the base pixels unchanged.
    pub fn deform(
        &self,
        base: &Frame,
        state: AnimationState,
        frame_index: u32,
        total_frames: u32,
        tuning: Option<&StateTuning>,
    ) -> Frame {
        let t = Self::normalized_time(frame_index, total_frames);
        let mut pixels = base.pixels.clone();
        if t > 0.0 {
            let tunable = StateTuning::tunable(tuning, state);
            animation::apply_state(state, &mut pixels, t, tunable, self.dims);
        }
        Frame::new(state, frame_index, pixels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/deform.rs"]
mod tests;
