use super::*;
use crate::animation::rng::{Rng64, SequenceSource};
use crate::sprite::AnimationState;

#[test]
fn new_rejects_invalid_config() {
    let cfg = SpriteConfig {
        scale: 0,
        ..SpriteConfig::default()
    };
    assert!(SpriteGenerator::new(cfg).is_err());
}

#[test]
fn every_state_gets_its_configured_frames() {
    let g = SpriteGenerator::new(SpriteConfig::default()).unwrap();
    let sprite = g.generate(CharacterConfig::default());

    assert_eq!(sprite.frames.len(), 8 + 12 + 10);
    for anim in &g.config().animations {
        let indices: Vec<u32> = sprite.frames_of(anim.state).map(|f| f.index).collect();
        assert_eq!(indices, (0..anim.frames).collect::<Vec<_>>());
    }

    let mut ids: Vec<&str> = sprite.frames.iter().map(|f| f.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), sprite.frames.len());
    assert_eq!((sprite.width, sprite.height), (32, 32));
}

#[test]
fn first_frame_of_each_state_is_the_base_frame() {
    let cfg = SpriteConfig::default();
    let g = SpriteGenerator::new(cfg.clone()).unwrap();
    let ch = CharacterConfig::default();
    let sprite = g.generate(ch.clone());

    let base = BaseFrameGenerator::new(&cfg).generate(AnimationState::Walk, 0, &ch);
    let first = sprite.frames_of(AnimationState::Walk).next().unwrap();
    assert_eq!(first, &base);
}

#[test]
fn single_frame_animation_is_just_the_base() {
    let mut cfg = SpriteConfig::default();
    cfg.animations.truncate(1);
    cfg.animations[0].frames = 1;
    let sprite = SpriteGenerator::new(cfg).unwrap().generate(CharacterConfig::default());
    assert_eq!(sprite.frames.len(), 1);
    assert_eq!(sprite.frames[0].id, "idle-0");
}

#[test]
fn seeded_generation_is_reproducible() {
    let g = SpriteGenerator::new(SpriteConfig::default()).unwrap();
    let a = g.generate_random(Rng64::new(7), None, None);
    let b = g.generate_random(Rng64::new(7), None, None);
    let c = g.generate_random(Rng64::new(8), None, None);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.character, b.character);
    assert_ne!(a.character, c.character);
}

#[test]
fn themed_generation_uses_the_named_palette() {
    let g = SpriteGenerator::new(SpriteConfig::default()).unwrap();
    let sprite = g.generate_random(SequenceSource::new(vec![0.5]), None, Some("shadow"));
    let shadow = CharacterType::Warrior.palette("shadow").unwrap();
    assert_eq!(sprite.character.colors.outline, shadow.colors.outline);
}
