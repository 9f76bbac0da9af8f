use super::*;

#[test]
fn png_decodes_back_to_straight_pixels() {
    let mut bm = Bitmap::new(3, 2).unwrap();
    bm.fill_rect(1, 0, 1, 1, [255, 0, 0, 255]);
    bm.fill_rect(2, 1, 1, 1, [100, 50, 0, 200]);

    let bytes = encode_png(&bm).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(2, 1).0, [128, 64, 0, 200]);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}
