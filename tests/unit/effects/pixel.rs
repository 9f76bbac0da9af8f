use super::*;
use crate::sprite::AnimationState;

fn empty() -> Frame {
    Frame::new(AnimationState::Idle, 0, Vec::new())
}

fn at(frame: &Frame, x: i64, y: i64) -> Vec<&Pixel> {
    frame
        .pixels
        .iter()
        .filter(|p| p.cell() == Cell { x, y })
        .collect()
}

#[test]
fn place_then_erase_at_pointer_round_trips() {
    let m = PixelManipulator::new(10);
    let base = empty();
    let placed = m.place(&base, 5.0, 5.0, Color::rgb(255, 0, 0), &PixelEffects::default());
    assert_eq!(placed.pixels.len(), 1);
    assert!(base.pixels.is_empty());

    let erased = m.erase(&placed, 50.0, 50.0);
    assert!(erased.pixels.is_empty());
    assert_eq!(erased.id, placed.id);
}

#[test]
fn erase_elsewhere_keeps_the_pixel() {
    let m = PixelManipulator::new(10);
    let placed = m.place(&empty(), 5.0, 5.0, Color::WHITE, &PixelEffects::default());
    assert_eq!(m.erase(&placed, 49.0, 60.0).pixels.len(), 1);
}

#[test]
fn place_overwrites_instead_of_duplicating() {
    let m = PixelManipulator::new(4);
    let a = m.place(&empty(), 2.0, 3.0, Color::BLACK, &PixelEffects::default());
    let b = m.place(&a, 2.7, 3.2, Color::WHITE, &PixelEffects::default());
    assert_eq!(b.pixels.len(), 1);
    assert_eq!(b.pixels[0].color, Color::WHITE);
}

#[test]
fn pointer_placement_divides_by_scale() {
    let m = PixelManipulator::new(10);
    let f = m.place_at_pointer(&empty(), 57.0, 21.0, Color::WHITE, &PixelEffects::default());
    assert_eq!((f.pixels[0].x, f.pixels[0].y), (5.0, 2.0));
}

#[test]
fn shade_multiplies_channels() {
    let m = PixelManipulator::new(1);
    let f = m.place(&empty(), 0.0, 0.0, Color::rgb(100, 200, 50), &PixelEffects::shaded(0.5));
    assert_eq!(f.pixels[0].color, Color::rgb(50, 100, 25));
}

#[test]
fn anti_alias_fills_only_free_neighbours() {
    let m = PixelManipulator::new(1);
    let solid = m.place(&empty(), 1.0, 0.0, Color::BLACK, &PixelEffects::default());
    let f = m.place(
        &solid,
        0.0,
        0.0,
        Color::WHITE,
        &PixelEffects::default().with_anti_alias(),
    );

    assert_eq!(f.pixels.len(), 9);
    assert_eq!(at(&f, 1, 0)[0].color, Color::BLACK);
    assert_eq!(at(&f, 1, 1)[0].color.alpha, Some(0.3));
    assert_eq!(at(&f, 0, 1)[0].color.alpha, Some(0.4));
}

#[test]
fn glow_overwrites_rings() {
    let m = PixelManipulator::new(1);
    let solid = m.place(&empty(), 5.0, 4.0, Color::BLACK, &PixelEffects::default());
    let f = m.place(
        &solid,
        5.0,
        5.0,
        Color::WHITE,
        &PixelEffects::default().with_glow(Color::rgb(0, 0, 255)),
    );

    // center + 4 orthogonal + 4 diagonal + 4 axial
    assert_eq!(f.pixels.len(), 13);
    let above = at(&f, 5, 4)[0];
    assert_eq!(above.color.b, 255);
    assert!((above.color.opacity() - 0.6).abs() < 1e-12);
    assert!((at(&f, 6, 6)[0].color.opacity() - 0.42).abs() < 1e-12);
    assert!((at(&f, 5, 7)[0].color.opacity() - 0.18).abs() < 1e-12);
}

#[test]
fn pattern_overlay_layers_one_translucent_pixel() {
    let m = PixelManipulator::new(1);
    let effects = PixelEffects::default().with_pattern(Pattern::Chain);
    let once = m.place(&empty(), 0.0, 0.0, Color::rgb(100, 100, 100), &effects);
    assert_eq!(once.pixels.len(), 2);
    assert!(!once.pixels[0].color.is_translucent());
    assert!(once.pixels[1].color.is_translucent());

    let twice = m.place(&once, 0.0, 0.0, Color::rgb(100, 100, 100), &effects);
    assert_eq!(twice.pixels.len(), 2);
}
