//! The repair pipeline for the strategy-navigation infographic.
//!
//! All bounds and fill colors below were measured by hand against the one
//! 640x640 source image this tool exists for. They are data, not an
//! algorithm: the image has a thick green frame on all four sides, a title
//! band of white text on green starting near row 183, and a white poster
//! area from row 226 down to row 477.

use crate::mask::GreenMask;
use anyhow::{Context, Result};
use image::{imageops, Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// First kept row, just above the title text.
pub const CROP_TOP: u32 = 178;
/// One past the last kept row, end of the poster content.
pub const CROP_BOTTOM: u32 = 479;
/// First kept column.
pub const CROP_LEFT: u32 = 30;
/// One past the last kept column.
pub const CROP_RIGHT: u32 = 610;
/// First row of the white poster area; rows above it belong to the title band.
pub const CONTENT_TOP: u32 = 226;

/// Dark navy (#1a1a2e). The title is white text on green, so the green
/// background becomes dark to keep the text readable.
pub const TITLE_FILL: Rgb<u8> = Rgb([26, 26, 46]);
/// The poster area is white, so its leftover green edges blend into it.
pub const CONTENT_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Run the full repair on the file at `input`: recolor the green pixels
/// inside the kept area, crop to the content rectangle, back up the original
/// and overwrite it with the result.
pub fn run(input: &Path) -> Result<()> {
    let source = image::open(input)
        .with_context(|| format!("Failed to load image {}", input.display()))?;
    let mut img = source.to_rgb8();

    let (source_width, source_height) = img.dimensions();
    if source_width < CROP_RIGHT || source_height < CROP_BOTTOM {
        anyhow::bail!(
            "Image is {}x{} but the crop rectangle needs at least {}x{}; \
             refusing to run (was the tool already run on this file?)",
            source_width,
            source_height,
            CROP_RIGHT,
            CROP_BOTTOM
        );
    }

    let mask = GreenMask::of(&img);
    recolor_green_regions(&mut img, &mask);
    let cropped = crop_to_content(&img);

    let backup = back_up_original(input)?;
    cropped
        .save(input)
        .with_context(|| format!("Failed to save {}", input.display()))?;

    println!(
        "Saved: {}x{} (was {}x{})",
        cropped.width(),
        cropped.height(),
        source_width,
        source_height
    );
    println!("Original backed up to {}", backup.display());

    Ok(())
}

/// Overwrite masked pixels in the title band with navy and masked pixels in
/// the poster area with white, both restricted to the kept columns. Every
/// other pixel is left untouched.
pub fn recolor_green_regions(img: &mut RgbImage, mask: &GreenMask) {
    fill_masked_rows(img, mask, CROP_TOP, CONTENT_TOP, TITLE_FILL);
    fill_masked_rows(img, mask, CONTENT_TOP, CROP_BOTTOM, CONTENT_FILL);
}

fn fill_masked_rows(img: &mut RgbImage, mask: &GreenMask, top: u32, bottom: u32, fill: Rgb<u8>) {
    for y in top..bottom {
        for x in CROP_LEFT..CROP_RIGHT {
            if mask.contains(x, y) {
                img.put_pixel(x, y, fill);
            }
        }
    }
}

/// Extract the crop rectangle as a new buffer. Direct sub-array copy, no
/// resampling.
pub fn crop_to_content(img: &RgbImage) -> RgbImage {
    imageops::crop_imm(
        img,
        CROP_LEFT,
        CROP_TOP,
        CROP_RIGHT - CROP_LEFT,
        CROP_BOTTOM - CROP_TOP,
    )
    .to_image()
}

/// Sibling path with "-original" inserted between the stem and extension.
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match path.extension() {
        Some(ext) => path.with_file_name(format!("{stem}-original.{}", ext.to_string_lossy())),
        None => path.with_file_name(format!("{stem}-original")),
    }
}

/// Copy the untouched source file to its backup path before any overwrite.
pub fn back_up_original(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            path.display(),
            backup.display()
        )
    })?;

    Ok(backup)
}
