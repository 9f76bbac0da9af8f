use super::*;

fn dims() -> Dims {
    Dims::new(32, 32)
}

#[test]
fn rest_pose_has_no_offset() {
    let m = IdleMotion::at(0.0, 1.5);
    for (x, y) in [(16.0, 4.0), (4.0, 10.0), (28.0, 12.0), (16.0, 30.0)] {
        let d = m.offset(Point::new(x, y), dims());
        assert!(d.hypot() < 1e-12, "({x}, {y}) moved by {d:?}");
    }
}

#[test]
fn breathing_only_reaches_the_upper_half() {
    let m = IdleMotion::at(0.25, 1.5);
    let feet = m.offset(Point::new(16.0, 28.0), dims());
    assert_eq!(feet, Vec2::ZERO);
    let chest = m.offset(Point::new(16.0, 8.0), dims());
    assert!(chest.y.abs() > 0.0);
}

#[test]
fn intensity_scales_breathing() {
    let base = Point::new(16.0, 8.0);
    let soft = IdleMotion::at(0.25, 1.0).offset(base, dims());
    let strong = IdleMotion::at(0.25, 2.0).offset(base, dims());
    assert!(strong.y.abs() > soft.y.abs());
}

#[test]
fn apply_moves_coordinates_only() {
    let color = crate::foundation::color::Color::rgb(9, 9, 9);
    let mut px = vec![Pixel::new(5.0, 6.0, color), Pixel::new(16.0, 8.0, color)];
    apply(&mut px, 0.4, 1.5, dims());
    assert!(px.iter().all(|p| p.color == color && p.z.is_none()));
    assert_ne!((px[0].x, px[0].y), (5.0, 6.0));
}
