use vibe_core::artwork::skin_pixels;
use vibe_core::constants::{SKIN_ACCENTS, SKIN_COUNT};
use vibe_core::TexturePrefs;

fn row<'a>(pixels: &'a [u8], width: u32, row: u32) -> &'a [u8] {
    let stride = width as usize * 4;
    &pixels[row as usize * stride..(row as usize + 1) * stride]
}

#[test]
fn skin_pixels_are_tightly_packed_rgba8() {
    let prefs = TexturePrefs::default();
    for skin in 0..SKIN_COUNT {
        let pixels = skin_pixels(skin, 64, 128, &prefs);
        assert_eq!(pixels.len(), 64 * 128 * 4);
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}

#[test]
fn header_band_carries_the_accent_color() {
    let prefs = TexturePrefs::default();
    for (skin, accent) in SKIN_ACCENTS.iter().enumerate() {
        let pixels = skin_pixels(skin, 32, 256, &prefs);
        let top = row(&pixels, 32, 0);
        let expected = [
            (accent[0] * 255.0) as u8,
            (accent[1] * 255.0) as u8,
            (accent[2] * 255.0) as u8,
        ];
        assert_eq!(&top[0..3], &expected);
    }
}

#[test]
fn gradient_darkens_toward_the_bottom() {
    let pixels = skin_pixels(0, 32, 256, &TexturePrefs::default());
    let luma = |r: &[u8]| r[0] as u32 + r[1] as u32 + r[2] as u32;
    let mid = luma(row(&pixels, 32, 128));
    let bottom = luma(row(&pixels, 32, 255));
    assert!(mid > bottom, "screen content must fade into the background");
}

#[test]
fn flip_y_reverses_the_row_order() {
    let straight = skin_pixels(1, 16, 64, &TexturePrefs::default());
    let flipped = skin_pixels(
        1,
        16,
        64,
        &TexturePrefs {
            flip_y: true,
            ..TexturePrefs::default()
        },
    );
    assert_eq!(row(&straight, 16, 0), row(&flipped, 16, 63));
    assert_eq!(row(&straight, 16, 63), row(&flipped, 16, 0));
}

#[test]
fn skin_index_wraps_over_the_palette() {
    let prefs = TexturePrefs::default();
    // Seven-skin configurations reuse accents; pixel content must still be
    // defined for every index.
    let a = skin_pixels(1, 8, 8, &prefs);
    let b = skin_pixels(1 + SKIN_ACCENTS.len(), 8, 8, &prefs);
    assert_eq!(a, b);
}
