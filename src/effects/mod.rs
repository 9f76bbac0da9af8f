pub mod pattern;
pub mod pixel;

pub use pattern::{Pattern, PatternSample};
pub use pixel::{PixelEffects, PixelManipulator};
