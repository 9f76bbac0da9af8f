use crate::foundation::color::Color;
use crate::foundation::error::SpriteError;

pub const GOLDEN_RATIO: f64 = 1.618;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    #[default]
    Warrior,
}

impl CharacterType {
    pub const ALL: [Self; 1] = [Self::Warrior];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
        }
    }
}

impl std::fmt::Display for CharacterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CharacterType {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SpriteError::validation(format!("unknown character type \"{s}\"")))
    }
}

/// Body part multipliers relative to the stock warrior build.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CharacterProportions {
    #[serde(alias = "headSize")]
    pub head_size: f64,
    #[serde(alias = "bodyWidth")]
    pub body_width: f64,
    #[serde(alias = "armLength")]
    pub arm_length: f64,
    #[serde(alias = "legLength")]
    pub leg_length: f64,
    #[serde(alias = "shoulderWidth")]
    pub shoulder_width: f64,
    #[serde(alias = "torsoLength")]
    pub torso_length: f64,
    #[serde(alias = "neckWidth")]
    pub neck_width: f64,
    #[serde(alias = "waistWidth")]
    pub waist_width: f64,
    #[serde(alias = "hipWidth")]
    pub hip_width: f64,
    #[serde(alias = "armWidth")]
    pub arm_width: f64,
    #[serde(alias = "legWidth")]
    pub leg_width: f64,
    #[serde(alias = "muscleDefinition")]
    pub muscle_definition: f64,
}

impl Default for CharacterProportions {
    fn default() -> Self {
        Self {
            head_size: 1.1,
            body_width: 0.9,
            arm_length: GOLDEN_RATIO * 1.05,
            leg_length: GOLDEN_RATIO * 1.2,
            shoulder_width: 1.4,
            torso_length: GOLDEN_RATIO * 1.1,
            neck_width: 0.28,
            waist_width: 0.65,
            hip_width: 0.85,
            arm_width: 0.22,
            leg_width: 0.25,
            muscle_definition: 0.8,
        }
    }
}

impl CharacterProportions {
    /// Keep the V-shaped silhouette: waist, neck and hips never outgrow the shoulders.
    pub fn clamp_to_shoulders(&mut self) {
        self.waist_width = self.waist_width.min(self.shoulder_width * 0.75);
        self.neck_width = self.neck_width.min(self.shoulder_width * 0.3);
        self.hip_width = self.hip_width.min(self.shoulder_width * 0.95);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetailedColors {
    pub primary: Color,
    pub secondary: Color,
    pub outline: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub colors: DetailedColors,
}

const fn palette(name: &'static str, primary: u32, secondary: u32, outline: u32) -> Palette {
    const fn rgb(hex: u32) -> Color {
        Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
    Palette {
        name,
        colors: DetailedColors {
            primary: rgb(primary),
            secondary: rgb(secondary),
            outline: rgb(outline),
        },
    }
}

pub static WARRIOR_PALETTES: [Palette; 7] = [
    palette("Knight", 0x6D7B8D, 0x4A5664, 0x2F3640),
    palette("Golden", 0xFFD700, 0xDAA520, 0x8B4513),
    palette("Shadow", 0x2C3E50, 0x34495E, 0x1B2631),
    palette("Ruby", 0xE74C3C, 0xC0392B, 0x922B21),
    palette("Forest", 0x27AE60, 0x229954, 0x196F3D),
    palette("Royal", 0x3498DB, 0x2980B9, 0x1B4F72),
    palette("Mystic", 0x9B59B6, 0x8E44AD, 0x633974),
];

impl CharacterType {
    pub fn palettes(self) -> &'static [Palette] {
        match self {
            Self::Warrior => &WARRIOR_PALETTES,
        }
    }

    /// Palette by case-insensitive name.
    pub fn palette(self, name: &str) -> Option<&'static Palette> {
        self.palettes()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacterConfig {
    #[serde(rename = "type", default)]
    pub character_type: CharacterType,
    pub colors: DetailedColors,
    #[serde(default)]
    pub proportions: CharacterProportions,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            character_type: CharacterType::Warrior,
            colors: WARRIOR_PALETTES[0].colors,
            proportions: CharacterProportions::default(),
        }
    }
}
