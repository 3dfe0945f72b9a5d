//! Accent color estimation.
//!
//! Server icons often sit on a black or transparent canvas, which would
//! dominate a plain average. Pixels close to black are treated as background
//! and skipped; the accent is the mean of everything else.

use super::{DecodedImage, Rgb};

/// Pixels within this channel-space radius of black count as background.
pub const BACKGROUND_RADIUS: u32 = 30;

/// Returns the mean color of all non-background pixels.
///
/// Sums are kept as integers and truncated once at the end, so the result
/// does not depend on iteration order. An image made only of background
/// pixels yields black.
pub fn dominant_color(image: &DecodedImage) -> Rgb {
    let threshold = BACKGROUND_RADIUS * BACKGROUND_RADIUS;

    let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
    for px in image.pixels() {
        if px.distance_sq(Rgb::BLACK) < threshold {
            continue;
        }
        r += px.r as u64;
        g += px.g as u64;
        b += px.b as u64;
        count += 1;
    }

    if count == 0 {
        return Rgb::BLACK;
    }

    Rgb::new((r / count) as u8, (g / count) as u8, (b / count) as u8)
}
