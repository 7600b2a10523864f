//! Green-background detection for the infographic.
//!
//! The source image frames its content with a saturated green border. The
//! predicate below separates that green from the white text and the content
//! artwork using plain channel thresholds; no neighborhood analysis is needed.

use image::{Rgb, RgbImage};

/// Green must exceed red by more than this margin.
const GREEN_OVER_RED: i16 = 20;
/// Green channel must exceed this floor.
const GREEN_FLOOR: u8 = 100;
/// Red channel must stay below this ceiling.
const RED_CEILING: u8 = 140;
/// Blue channel must exceed this floor.
const BLUE_FLOOR: u8 = 80;

/// Pointwise test for the infographic's green background color.
pub fn is_green(pixel: &Rgb<u8>) -> bool {
    let Rgb([r, g, b]) = *pixel;

    (g as i16) > (r as i16) + GREEN_OVER_RED && g > GREEN_FLOOR && r < RED_CEILING && b > BLUE_FLOOR
}

/// Boolean mask with the same row/column extent as the image it was built
/// from. Computed once over the full, uncropped image and read-only after.
pub struct GreenMask {
    width: u32,
    bits: Vec<bool>,
}

impl GreenMask {
    /// Evaluate the green predicate for every pixel of `img`.
    pub fn of(img: &RgbImage) -> Self {
        let bits = img.pixels().map(is_green).collect();

        Self {
            width: img.width(),
            bits,
        }
    }

    /// Whether the pixel at (`x`, `y`) matched the green predicate.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.width + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn border_green_matches() {
        // Sampled from the green frame of the source image.
        assert!(is_green(&Rgb([45, 160, 120])));
    }

    #[test]
    fn white_and_navy_do_not_match() {
        assert!(!is_green(&Rgb([255, 255, 255])));
        assert!(!is_green(&Rgb([26, 26, 46])));
    }

    #[test]
    fn thresholds_are_exclusive() {
        // g exactly r + 20 is not enough of a margin.
        assert!(!is_green(&Rgb([110, 130, 120])));
        assert!(is_green(&Rgb([110, 131, 120])));

        // g must exceed 100.
        assert!(!is_green(&Rgb([50, 100, 120])));
        assert!(is_green(&Rgb([50, 101, 120])));

        // r must stay below 140.
        assert!(!is_green(&Rgb([140, 200, 120])));
        assert!(is_green(&Rgb([139, 200, 120])));

        // b must exceed 80.
        assert!(!is_green(&Rgb([50, 160, 80])));
        assert!(is_green(&Rgb([50, 160, 81])));
    }

    #[test]
    fn mask_mirrors_pixel_positions() {
        let mut img = RgbImage::from_pixel(8, 4, Rgb([255, 255, 255]));
        img.put_pixel(3, 2, Rgb([45, 160, 120]));
        img.put_pixel(7, 0, Rgb([45, 160, 120]));

        let mask = GreenMask::of(&img);

        assert!(mask.contains(3, 2));
        assert!(mask.contains(7, 0));
        assert!(!mask.contains(0, 0));
        assert!(!mask.contains(2, 2));
    }
}
