use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};
use letterpress_core::Size;

use crate::error::{ComposeError, ComposeResult};

/// Resampling filter used for every glyph.
pub const GLYPH_FILTER: FilterType = FilterType::Lanczos3;

/// Scale `glyph` so its height is exactly `height`, keeping the aspect ratio.
///
/// The new width is `round(height * width / glyph_height)`, except that it
/// never drops below one pixel: a glyph thin enough to round to zero comes
/// out one pixel wide, so the aspect ratio then only holds within one pixel.
/// `letter` only labels the error for zero-sized glyphs.
///
/// Resampling runs on premultiplied alpha, so the colour of fully transparent
/// pixels never bleeds into visible edges.
pub fn scale_to_height(glyph: &RgbaImage, height: u32, letter: char) -> ComposeResult<RgbaImage> {
    let (width, glyph_height) = glyph.dimensions();
    let target = Size::new(width, glyph_height)
        .scaled_to_height(height)
        .ok_or(ComposeError::InvalidGlyph {
            letter,
            width,
            height: glyph_height,
        })?;

    if target == Size::new(width, glyph_height) {
        return Ok(glyph.clone());
    }

    let resized = imageops::resize(
        &premultiply(glyph),
        target.width,
        target.height,
        GLYPH_FILTER,
    );
    Ok(unpremultiply(&resized))
}

fn premultiply(image: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiply(image: &Rgba32FImage) -> RgbaImage {
    let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let alpha = to_u8(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        let a = a.clamp(0.0, 1.0);
        Rgba([to_u8(r / a), to_u8(g / a), to_u8(b / a), alpha])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_up_keeps_ratio() {
        let glyph = RgbaImage::from_pixel(40, 80, Rgba([0, 0, 0, 255]));
        let scaled = scale_to_height(&glyph, 100, 'A').unwrap();
        assert_eq!(scaled.dimensions(), (50, 100));
    }

    #[test]
    fn test_scale_down_rounds_width() {
        let glyph = RgbaImage::from_pixel(30, 70, Rgba([0, 0, 0, 255]));
        // 100 * 30 / 70 = 42.86
        let scaled = scale_to_height(&glyph, 100, 'A').unwrap();
        assert_eq!(scaled.dimensions(), (43, 100));
    }

    #[test]
    fn test_same_height_is_copy() {
        let mut glyph = RgbaImage::from_pixel(3, 5, Rgba([0, 0, 0, 255]));
        glyph.put_pixel(1, 2, Rgba([255, 0, 0, 128]));
        assert_eq!(scale_to_height(&glyph, 5, 'A').unwrap(), glyph);
    }

    #[test]
    fn test_transparent_color_does_not_bleed() {
        // Left half opaque red, right half invisible green.
        let glyph = RgbaImage::from_fn(20, 20, |x, _| {
            if x < 10 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 0])
            }
        });

        let scaled = scale_to_height(&glyph, 7, 'A').unwrap();
        assert_eq!(scaled.dimensions(), (7, 7));

        let visible: Vec<_> = scaled.pixels().filter(|p| p[3] > 0).collect();
        assert!(!visible.is_empty());
        for pixel in visible {
            assert_eq!(pixel[1], 0, "green leaked into {:?}", pixel);
            assert_eq!((pixel[0], pixel[2]), (255, 0), "edge colour drifted: {:?}", pixel);
        }
    }

    #[test]
    fn test_solid_color_survives_resampling() {
        let glyph = RgbaImage::from_pixel(12, 30, Rgba([40, 80, 120, 255]));
        let scaled = scale_to_height(&glyph, 45, 'A').unwrap();
        assert_eq!(scaled.dimensions(), (18, 45));
        assert!(scaled.pixels().all(|p| *p == Rgba([40, 80, 120, 255])));
    }

    #[test]
    fn test_zero_sized_glyph() {
        let glyph = RgbaImage::new(0, 0);
        let err = scale_to_height(&glyph, 100, 'K').unwrap_err();
        assert!(matches!(
            err,
            ComposeError::InvalidGlyph {
                letter: 'K',
                width: 0,
                height: 0
            }
        ));
    }
}
