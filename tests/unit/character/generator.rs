use super::*;
use crate::animation::rng::{Rng64, SequenceSource};
use crate::character::WARRIOR_PALETTES;

#[test]
fn same_seed_same_character() {
    let a = CharacterGenerator::new(Rng64::new(42)).generate(None, None);
    let b = CharacterGenerator::new(Rng64::new(42)).generate(None, None);
    assert_eq!(a, b);
    let c = CharacterGenerator::new(Rng64::new(43)).generate(None, None);
    assert_ne!(a, c);
}

#[test]
fn zero_noise_roll_reproduces_the_stock_build() {
    let mut g = CharacterGenerator::new(SequenceSource::new(vec![0.0]));
    let cfg = g.generate(Some(CharacterType::Warrior), None);
    let knight = CharacterType::Warrior.palette("Knight").unwrap();

    assert_eq!(cfg.colors, knight.colors);
    let d = CharacterProportions::default();
    assert_eq!(cfg.proportions.head_size, d.head_size);
    assert_eq!(cfg.proportions.shoulder_width, d.shoulder_width);
    assert!((cfg.proportions.arm_length - d.torso_length * GOLDEN_RATIO * 0.8).abs() < 1e-12);
    assert!((cfg.proportions.leg_length - d.torso_length * GOLDEN_RATIO).abs() < 1e-12);
}

#[test]
fn named_theme_keeps_outline_and_stays_close() {
    let mut g = CharacterGenerator::new(Rng64::new(7));
    let cfg = g.generate(None, Some("ruby"));
    let ruby = CharacterType::Warrior.palette("Ruby").unwrap();
    assert_eq!(cfg.colors.outline, ruby.colors.outline);
    let dr = i32::from(cfg.colors.primary.r) - i32::from(ruby.colors.primary.r);
    assert!(dr.abs() < 60);
    assert!(!cfg.colors.primary.is_translucent());
}

#[test]
fn unknown_theme_falls_back_to_first_palette() {
    let mut g = CharacterGenerator::new(Rng64::new(1));
    let cfg = g.generate(None, Some("Neon"));
    assert_eq!(cfg.colors.outline, WARRIOR_PALETTES[0].colors.outline);
}

#[test]
fn proportions_respect_shoulder_clamps_for_any_seed() {
    for seed in 0..200 {
        let cfg = CharacterGenerator::new(Rng64::new(seed)).generate(None, None);
        let p = &cfg.proportions;
        assert!(p.waist_width <= p.shoulder_width * 0.75 + 1e-12);
        assert!(p.neck_width <= p.shoulder_width * 0.3 + 1e-12);
        assert!(p.hip_width <= p.shoulder_width * 0.95 + 1e-12);
        for v in [
            p.head_size,
            p.body_width,
            p.arm_length,
            p.leg_length,
            p.torso_length,
            p.arm_width,
            p.leg_width,
            p.muscle_definition,
        ] {
            assert!(v > 0.0, "seed {seed}");
        }
    }
}

#[test]
fn extreme_samples_never_go_negative() {
    // theta = 0 and U close to 1 give the largest positive jitter; theta = pi the largest negative.
    let mut g = CharacterGenerator::new(SequenceSource::new(vec![0.5, 0.999_999_999]));
    let cfg = g.generate(None, Some("Knight"));
    assert!(cfg.proportions.muscle_definition > 0.0);
    assert!(cfg.proportions.head_size > 0.0);
}
