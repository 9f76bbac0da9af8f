use crate::animation::rng::cell_noise01;
use crate::foundation::core::Cell;

const LEATHER_SEED: u64 = 0x1EA7_4E12;
const WOOD_SEED: u64 = 0x000D_00D5;

/// Material surface texture applied on top of a placed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Chain,
    Plate,
    Cloth,
    Leather,
    Magic,
    Wood,
}

/// Brightness multiplier for the base pixel plus the opacity of a highlight layered on top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternSample {
    pub shade: f64,
    pub overlay_alpha: f64,
}

impl Pattern {
    pub const ALL: [Self; 6] = [
        Self::Chain,
        Self::Plate,
        Self::Cloth,
        Self::Leather,
        Self::Magic,
        Self::Wood,
    ];

    /// Sample at the current wall-clock time. Only `Magic` reads the clock.
    pub fn sample(self, x: f64, y: f64) -> PatternSample {
        let time_ms = match self {
            Self::Magic => std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
            _ => 0,
        };
        self.sample_at(x, y, time_ms)
    }

    pub fn sample_at(self, x: f64, y: f64, time_ms: u64) -> PatternSample {
        let Cell { x: cx, y: cy } = Cell::of(x, y);
        let (fx, fy) = (cx as f64, cy as f64);

        match self {
            Self::Chain => {
                // Offset rings: every other row shifts by one cell.
                let ring = (cx + (cy & 1)).rem_euclid(2) == 0;
                if ring {
                    PatternSample {
                        shade: 1.08,
                        overlay_alpha: 0.15,
                    }
                } else {
                    PatternSample {
                        shade: 0.9,
                        overlay_alpha: 0.0,
                    }
                }
            }
            Self::Plate => {
                if cy.rem_euclid(4) == 0 {
                    PatternSample {
                        shade: 0.88,
                        overlay_alpha: 0.0,
                    }
                } else if cy.rem_euclid(4) == 2 && cx.rem_euclid(4) == 0 {
                    // rivet
                    PatternSample {
                        shade: 1.1,
                        overlay_alpha: 0.2,
                    }
                } else {
                    PatternSample {
                        shade: 1.0 + (fx * 0.8).sin() * 0.04,
                        overlay_alpha: 0.0,
                    }
                }
            }
            Self::Cloth => PatternSample {
                shade: if (cx ^ cy) & 1 == 0 { 1.03 } else { 0.95 },
                overlay_alpha: 0.0,
            },
            Self::Leather => PatternSample {
                shade: 0.92 + cell_noise01(LEATHER_SEED, cx, cy) * 0.12,
                overlay_alpha: 0.0,
            },
            Self::Magic => {
                let phase = fx * 0.7 + fy * 0.5 + time_ms as f64 * 0.004;
                let wave = phase.sin();
                PatternSample {
                    shade: 1.0 + wave * 0.1,
                    overlay_alpha: 0.1 + (wave + 1.0) * 0.05,
                }
            }
            Self::Wood => {
                let grain = (fy * 1.3 + (fx * 0.4).sin() * 2.0).sin();
                PatternSample {
                    shade: 1.0 + grain * 0.08 + (cell_noise01(WOOD_SEED, cx, cy) - 0.5) * 0.04,
                    overlay_alpha: 0.0,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pattern.rs"]
mod tests;
