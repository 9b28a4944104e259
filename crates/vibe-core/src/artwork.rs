//! Procedural "app screen" artwork for the skins.
//!
//! Each skin is a vertical gradient from near-black into its accent color
//! with a solid header band, generated as tightly packed RGBA8 rows.

use crate::constants::SKIN_ACCENTS;
use crate::scene::TexturePrefs;

// Fraction of the screen height taken by the header band.
const HEADER_FRACTION: f32 = 0.12;

// Background the gradient sinks into.
const BASE_RGB: [f32; 3] = [0.03, 0.02, 0.06];

/// RGBA8 pixels for skin `index`, row 0 first.
///
/// With `prefs.flip_y` set the rows are emitted bottom-up, matching loaders
/// that address images from the lower-left corner. `prefs.srgb` does not
/// change the bytes; it selects the texture format at upload time.
pub fn skin_pixels(index: usize, width: u32, height: u32, prefs: &TexturePrefs) -> Vec<u8> {
    let accent = SKIN_ACCENTS[index % SKIN_ACCENTS.len()];
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    let denom = height.saturating_sub(1).max(1) as f32;
    for row in 0..height {
        let y = if prefs.flip_y { height - 1 - row } else { row };
        let t = y as f32 / denom;
        let rgb = if t < HEADER_FRACTION {
            accent
        } else {
            let fade = 1.0 - t;
            [
                BASE_RGB[0] + accent[0] * fade * 0.55,
                BASE_RGB[1] + accent[1] * fade * 0.55,
                BASE_RGB[2] + accent[2] * fade * 0.55,
            ]
        };
        for _ in 0..width {
            out.push(to_byte(rgb[0]));
            out.push(to_byte(rgb[1]));
            out.push(to_byte(rgb[2]));
            out.push(255);
        }
    }
    out
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}
