use super::*;
use crate::foundation::color::Color;
use crate::sprite::AnimationState;

fn config(width: u32, height: u32, scale: u32) -> SpriteConfig {
    SpriteConfig {
        width,
        height,
        scale,
        ..SpriteConfig::default()
    }
}

fn frame(pixels: Vec<Pixel>) -> Frame {
    Frame::new(AnimationState::Idle, 0, pixels)
}

#[test]
fn new_rejects_unusable_surfaces() {
    assert!(FrameRenderer::new(&config(0, 32, 10)).is_err());
    assert!(FrameRenderer::new(&config(32, 32, 0)).is_err());
    assert!(FrameRenderer::new(&config(u32::MAX, 2, 2)).is_err());

    let r = FrameRenderer::new(&config(32, 32, 10)).unwrap();
    assert_eq!(r.canvas(), Canvas { width: 320, height: 320 });
}

#[test]
fn pixels_become_scaled_blocks() {
    let r = FrameRenderer::new(&config(4, 4, 3)).unwrap();
    let bm = r.render(&frame(vec![Pixel::new(1.0, 2.0, Color::rgb(255, 0, 0))]));
    assert_eq!(bm.pixel(3, 6), Some([255, 0, 0, 255]));
    assert_eq!(bm.pixel(5, 8), Some([255, 0, 0, 255]));
    assert_eq!(bm.pixel(6, 6), Some([0, 0, 0, 0]));
    assert_eq!(bm.pixel(2, 6), Some([0, 0, 0, 0]));
}

#[test]
fn fractional_positions_round_to_device_pixels() {
    let r = FrameRenderer::new(&config(4, 4, 10)).unwrap();
    let bm = r.render(&frame(vec![Pixel::new(0.46, 0.0, Color::WHITE)]));
    assert_eq!(bm.pixel(4, 0), Some([0, 0, 0, 0]));
    assert_eq!(bm.pixel(5, 0), Some([255, 255, 255, 255]));
}

#[test]
fn translucent_pixels_draw_over_opaque_ones() {
    let r = FrameRenderer::new(&config(2, 2, 2)).unwrap();
    let pixels = vec![
        Pixel::new(0.0, 0.0, Color::WHITE.with_alpha(0.6)),
        Pixel::new(0.0, 0.0, Color::BLACK),
    ];
    let bm = r.render(&frame(pixels));
    let [red, _, _, a] = bm.pixel(0, 0).unwrap();
    assert_eq!(a, 255);
    assert!(red > 100 && red < 255, "translucent white was hidden: {red}");
}

#[test]
fn faint_pixels_bloom_beyond_their_block() {
    let r = FrameRenderer::new(&config(8, 8, 10)).unwrap();
    let bm = r.render(&frame(vec![Pixel::new(4.0, 4.0, Color::WHITE.with_alpha(0.3))]));
    let [_, _, _, inside] = bm.pixel(45, 45).unwrap();
    let [_, _, _, halo] = bm.pixel(38, 45).unwrap();
    assert!(inside > 0);
    assert!(halo > 0);
}

#[test]
fn sheet_places_frames_side_by_side() {
    let r = FrameRenderer::new(&config(2, 2, 1)).unwrap();
    let a = frame(vec![Pixel::new(0.0, 0.0, Color::WHITE)]);
    let b = Frame::new(AnimationState::Idle, 1, vec![Pixel::new(1.0, 1.0, Color::BLACK)]);
    let sheet = r.render_sheet([&a, &b]).unwrap();
    assert_eq!((sheet.width, sheet.height), (4, 2));
    assert_eq!(sheet.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(sheet.pixel(3, 1), Some([0, 0, 0, 255]));
    assert!(r.render_sheet(std::iter::empty::<&Frame>()).is_err());
}

#[test]
fn pixels_beyond_any_surface_are_skipped() {
    let r = FrameRenderer::new(&config(4, 4, 10)).unwrap();
    let red = Color::rgb(255, 0, 0);
    let bm = r.render(&frame(vec![
        Pixel::new(1e300, -1e300, red),
        Pixel::new(f64::INFINITY, 1.0, red),
        Pixel::new(f64::NAN, 1.0, red.with_alpha(0.3)),
        Pixel::new(1.0, 1.0, red),
    ]));
    assert_eq!(bm.pixel(15, 15), Some([255, 0, 0, 255]));
    assert_eq!(bm.pixel(0, 0), Some([0, 0, 0, 0]));
}
