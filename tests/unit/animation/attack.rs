use super::*;

const RANGE: f64 = PI * 1.5;

fn dims() -> Dims {
    Dims::new(32, 32)
}

#[test]
fn phases_split_at_fifth_and_three_fifths() {
    assert_eq!(AttackPhase::at(0.1).0, AttackPhase::Anticipation);
    assert_eq!(AttackPhase::at(0.2).0, AttackPhase::Strike);
    let (phase, p) = AttackPhase::at(0.6);
    assert_eq!(phase, AttackPhase::Recovery);
    assert_eq!(p, 0.0);
    assert_eq!(AttackPhase::at(1.0).1, 1.0);
}

#[test]
fn swing_pulls_back_sweeps_past_range_and_settles() {
    assert!(AttackMotion::at(0.15, RANGE).swing_angle() < 0.0);
    let peak = AttackMotion::at(0.5999, RANGE).swing_angle();
    assert!(peak > RANGE && peak <= RANGE * 1.2 + 1e-9);
    let end = AttackMotion::at(1.0, RANGE).swing_angle();
    assert!((end - RANGE).abs() < 1e-9);
}

#[test]
fn phase_boundaries_are_continuous() {
    for edge in [0.2, 0.6] {
        let before = AttackMotion::at(edge - 1e-9, RANGE);
        let after = AttackMotion::at(edge, RANGE);
        assert!((before.swing_angle() - after.swing_angle()).abs() < 2e-2);
        assert!((before.weight_shift - after.weight_shift).abs() < 2e-2);
        assert!((before.body_rotation - after.body_rotation).abs() < 2e-2);
    }
}

#[test]
fn start_of_cycle_is_the_rest_pose() {
    let color = crate::foundation::color::Color::rgb(1, 1, 1);
    let base: Vec<Pixel> = [(24.0, 8.0), (6.0, 10.0), (16.0, 28.0), (12.3, 17.7)]
        .into_iter()
        .map(|(x, y)| Pixel::new(x, y, color))
        .collect();
    let mut px = base.clone();
    apply(&mut px, 0.0, RANGE, dims());
    assert_eq!(px, base);
}

#[test]
fn weapon_arm_rotates_about_center() {
    let m = AttackMotion::at(0.4, RANGE);
    let base = Point::new(26.0, 10.0);
    let rotated = m.arm_transform(dims()) * base;
    let c = dims().center();
    let r0 = (base - c).hypot();
    let r1 = (rotated - c).hypot();
    // Radius only breathes by up to ten percent.
    assert!(r1 >= r0 * 0.999 && r1 <= r0 * 1.101);
    assert!((rotated - base).hypot() > 1.0);
}

#[test]
fn lower_legs_are_left_alone() {
    let m = AttackMotion::at(0.45, RANGE);
    let base = Point::new(12.0, 29.0);
    assert_eq!(m.position(base, dims()), base);
}
