//! Letter-to-image resolution.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{AssetError, AssetResult};
use crate::style::StyleSet;

/// Glyph files are looked up as `<letter>.<extension>`.
pub const DEFAULT_GLYPH_EXTENSION: &str = "png";

/// Resolves letters against a [`StyleSet`] and decodes them to RGBA.
///
/// The loader holds no per-request state and can be shared freely.
#[derive(Debug, Clone)]
pub struct GlyphLoader {
    extension: String,
}

impl Default for GlyphLoader {
    fn default() -> Self {
        Self {
            extension: DEFAULT_GLYPH_EXTENSION.to_string(),
        }
    }
}

impl GlyphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different file extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Filenames tried for `letter`, in order: uppercase, then lowercase.
    pub fn candidates(&self, letter: char) -> Vec<PathBuf> {
        let upper: String = letter.to_uppercase().collect();
        let lower: String = letter.to_lowercase().collect();

        let mut candidates = vec![PathBuf::from(format!("{}.{}", upper, self.extension))];
        if lower != upper {
            candidates.push(PathBuf::from(format!("{}.{}", lower, self.extension)));
        }
        candidates
    }

    /// Load the glyph for `letter`, decoding the first candidate that exists.
    ///
    /// Images without an alpha channel are converted to fully opaque RGBA.
    pub fn load(&self, style: &StyleSet, letter: char) -> AssetResult<RgbaImage> {
        let candidates = self.candidates(letter);
        let reader = style.reader();

        let Some(path) = candidates.iter().find(|path| reader.exists(path)) else {
            return Err(AssetError::GlyphNotFound {
                letter,
                candidates: candidates
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect(),
            });
        };

        tracing::trace!("Loading glyph '{}' from {}/{}", letter, style.name(), path.display());
        let bytes = reader.read_bytes(path)?;
        decode(path, &bytes)
    }
}

/// Decode image bytes into RGBA8.
pub fn decode(path: &Path, bytes: &[u8]) -> AssetResult<RgbaImage> {
    image::load_from_memory(bytes)
        .map(|image| image.into_rgba8())
        .map_err(|e| AssetError::DecodeError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryReader;
    use image::{ImageFormat, Rgb, RgbImage, Rgba};
    use std::io::Cursor;

    fn png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn test_candidates_order() {
        let loader = GlyphLoader::new();
        assert_eq!(
            loader.candidates('A'),
            vec![PathBuf::from("A.png"), PathBuf::from("a.png")]
        );
    }

    #[test]
    fn test_candidates_without_case() {
        let loader = GlyphLoader::new().with_extension("webp");
        assert_eq!(loader.candidates('7'), vec![PathBuf::from("7.webp")]);
    }

    #[test]
    fn test_prefers_uppercase() {
        let reader = MemoryReader::new()
            .with("A.png", png(&solid(3, 2, [255, 0, 0, 255])))
            .with("a.png", png(&solid(5, 5, [0, 255, 0, 255])));
        let style = StyleSet::from_memory("s", reader);

        let glyph = GlyphLoader::new().load(&style, 'A').unwrap();
        assert_eq!(glyph.dimensions(), (3, 2));
    }

    #[test]
    fn test_falls_back_to_lowercase() {
        let reader = MemoryReader::new().with("a.png", png(&solid(4, 6, [0, 0, 255, 255])));
        let style = StyleSet::from_memory("s", reader);

        let glyph = GlyphLoader::new().load(&style, 'A').unwrap();
        assert_eq!(glyph.dimensions(), (4, 6));
        assert_eq!(*glyph.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_missing_letter() {
        let style = StyleSet::from_memory("s", MemoryReader::new());
        let err = GlyphLoader::new().load(&style, 'T').unwrap_err();
        match err {
            AssetError::GlyphNotFound { letter, candidates } => {
                assert_eq!(letter, 'T');
                assert_eq!(candidates, vec!["T.png", "t.png"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rgb_becomes_opaque() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([10, 20, 30]));
        let mut bytes = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let glyph = decode(Path::new("X.png"), &bytes).unwrap();
        assert!(glyph.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode(Path::new("Q.png"), b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::DecodeError { path, .. } if path == "Q.png"));
    }
}
