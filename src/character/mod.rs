pub mod generator;
pub mod model;

pub use generator::CharacterGenerator;
pub use model::{
    CharacterConfig, CharacterProportions, CharacterType, DetailedColors, GOLDEN_RATIO, Palette,
    WARRIOR_PALETTES,
};
