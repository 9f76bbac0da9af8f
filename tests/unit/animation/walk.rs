use super::*;

fn dims() -> Dims {
    Dims::new(32, 32)
}

#[test]
fn right_leg_runs_half_a_cycle_behind() {
    assert_eq!(leg_phase(Side::Left, 0.25), leg_phase(Side::Right, 0.75));
    assert_eq!(leg_phase(Side::Right, 0.0), 0.5);
}

#[test]
fn leg_vertical_motion_mirrors_between_sides() {
    let dy = |t, p| WalkMotion::at(t, 3.0).displace(p, dims()).delta.y;
    for y in [23.0, 26.0, 28.5] {
        let left = Point::new(12.0, y);
        let right = Point::new(20.0, y);
        let left_step = dy(0.25, left) - dy(0.0, left);
        let right_step = dy(0.75, right) - dy(0.5, right);
        assert!((left_step - right_step).abs() < 1e-12, "y={y}");
    }
}

#[test]
fn start_of_cycle_is_the_rest_pose() {
    let color = crate::foundation::color::Color::rgb(1, 1, 1);
    let base: Vec<Pixel> = [(16.0, 8.0), (20.0, 28.0), (4.0, 12.0), (11.3, 17.6), (26.0, 30.5)]
        .into_iter()
        .map(|(x, y)| Pixel::new(x, y, color))
        .collect();
    let mut px = base.clone();
    apply(&mut px, 0.0, 2.5, dims());
    assert_eq!(px, base);
}

#[test]
fn first_step_stays_close_to_the_rest_pose() {
    let color = crate::foundation::color::Color::rgb(1, 1, 1);
    let mut px = vec![Pixel::new(16.0, 8.0, color), Pixel::new(20.0, 28.0, color)];
    apply(&mut px, 1e-6, 2.5, dims());
    assert!((px[0].x - 16.0).abs() < 1e-3);
    assert!((px[1].y - 28.0).abs() < 1e-3);
}

#[test]
fn stride_has_lift_and_contact_sub_phases() {
    let lifting = leg_stride(0.75, 0.5, 3.0);
    let planted = leg_stride(0.25, 0.5, 3.0);
    assert!(lifting.x < 0.0);
    assert!(lifting.y < 0.0);
    assert!(planted.x > 0.0);
    assert!(planted.y >= 0.0);
}

#[test]
fn zero_speed_stays_finite() {
    let m = WalkMotion::at(0.6, 0.0);
    for (x, y) in [(4.0, 10.0), (16.0, 20.0), (12.0, 30.0)] {
        let d = m.displace(Point::new(x, y), dims());
        assert!(d.delta.x.is_finite());
        assert!(d.delta.y.is_finite());
    }
}

#[test]
fn apply_writes_depth_for_upper_body_only() {
    let color = crate::foundation::color::Color::rgb(1, 1, 1);
    let mut px = vec![Pixel::new(16.0, 10.0, color), Pixel::new(16.0, 31.0, color)];
    apply(&mut px, 0.3, 3.0, dims());
    assert!(px[0].z.is_some());
    assert!(px[1].z.is_none());
}
