use serde::{Deserialize, Serialize};

use crate::foundation::math::unit_to_u8;

/// Straight (non-premultiplied) sprite color.
///
/// `alpha == None` is an opaque color. `Some(a)` marks a translucent color, even at `a == 1.0`
/// (a full-intensity glow ring is still drawn in the translucent pass).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    pub fn is_translucent(self) -> bool {
        self.alpha.is_some()
    }

    /// Effective opacity in `[0, 1]`.
    pub fn opacity(self) -> f64 {
        self.alpha.map_or(1.0, |a| a.clamp(0.0, 1.0))
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha.clamp(0.0, 1.0)),
            ..self
        }
    }

    pub fn opaque(self) -> Self {
        Self {
            alpha: None,
            ..self
        }
    }

    /// Multiply each RGB channel by `factor`; alpha is untouched.
    pub fn shade(self, factor: f64) -> Self {
        fn channel(c: u8, factor: f64) -> u8 {
            (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: channel(self.r, factor),
            g: channel(self.g, factor),
            b: channel(self.b, factor),
            alpha: self.alpha,
        }
    }

    pub fn to_premul_rgba8(self) -> [u8; 4] {
        let a = self.opacity();
        [
            unit_to_u8(f64::from(self.r) / 255.0 * a),
            unit_to_u8(f64::from(self.g) / 255.0 * a),
            unit_to_u8(f64::from(self.b) / 255.0 * a),
            unit_to_u8(a),
        ]
    }

    pub fn to_hex(self) -> String {
        match self.alpha {
            None => format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            Some(a) => format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r,
                self.g,
                self.b,
                unit_to_u8(a)
            ),
        }
    }

    /// Hex (`#RRGGBB`, `#RRGGBBAA`) or CSS functional `rgb(r, g, b)` / `rgba(r, g, b, a)`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        else {
            return Self::parse_hex(t);
        };
        let args = args
            .strip_suffix(')')
            .ok_or_else(|| format!("unterminated color \"{t}\""))?;

        fn number(v: &str) -> Result<f64, String> {
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("invalid color component \"{v}\""))
        }
        fn channel(v: &str) -> Result<u8, String> {
            Ok(number(v)?.round().clamp(0.0, 255.0) as u8)
        }

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [r, g, b] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?)
                .with_alpha(number(a)?)),
            _ => Err(format!("expected 3 or 4 color components in \"{t}\"")),
        }
    }

    pub fn parse_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        if !s.is_ascii() {
            return Err("hex color must be ASCII".to_owned());
        }
        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => {
                let a = hex_byte(&s[6..8])?;
                Ok(Self::rgb(
                    hex_byte(&s[0..2])?,
                    hex_byte(&s[2..4])?,
                    hex_byte(&s[4..6])?,
                )
                .with_alpha(f64::from(a) / 255.0))
            }
            _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default)]
                alpha: Option<f64>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, alpha } => Ok(Self { r, g, b, alpha }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
