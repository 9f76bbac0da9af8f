use super::*;

#[test]
fn breathing_starts_at_rest_and_stays_small() {
    assert_eq!(breathing(0.0), 0.0);
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        assert!(breathing(t).abs() <= 0.07);
    }
}

#[test]
fn gait_waveforms_are_bounded() {
    for i in 0..=40 {
        let t = f64::from(i) / 40.0;
        assert!(walk_cycle(t).abs() < 2.0);
        assert!(hip_sway(t).abs() < 0.4);
        assert!(torso_rotation(t).abs() < 0.25);
    }
}

#[test]
fn gait_waveforms_are_periodic() {
    for f in [walk_cycle, hip_sway, torso_rotation] {
        assert!((f(0.0) - f(1.0)).abs() < 1e-9);
    }
}

#[test]
fn attack_swing_pulls_back_then_strikes() {
    assert!(attack_swing(0.15) < 0.0);
    assert!(attack_swing(0.55) > 0.9);
    assert!((attack_swing(1.0) - 1.0).abs() < 1e-9);
}

#[test]
fn attack_swing_overshoots_then_settles_without_jumps() {
    let peak = attack_swing(0.5999);
    assert!(peak > 1.0 && peak <= 1.2 + 1e-9);
    for edge in [0.2, 0.6] {
        assert!((attack_swing(edge - 1e-9) - attack_swing(edge)).abs() < 1e-2);
    }
    assert_eq!(attack_swing(0.0), 0.0);
}
