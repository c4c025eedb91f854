//! Cropping glyphs to their visible pixels.

use image::{RgbaImage, imageops};
use letterpress_core::{BoundingBox, Size};

/// Smallest box enclosing every pixel with non-zero alpha.
///
/// Returns `None` for fully transparent (or empty) images.
pub fn bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        match bbox.as_mut() {
            Some(bbox) => bbox.include(x, y),
            None => bbox = Some(BoundingBox::at(x, y)),
        }
    }
    bbox
}

/// Crop `image` to [`bounding_box`].
///
/// Fully transparent images are returned unchanged rather than cropped to
/// nothing.
pub fn trim(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    match bounding_box(image) {
        Some(bbox) if !bbox.covers(Size::new(width, height)) => {
            tracing::trace!("Trimming {}x{} glyph to {:?}", width, height, bbox);
            imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
        }
        _ => image.clone(),
    }
}
