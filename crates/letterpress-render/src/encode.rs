use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbaImage;
use image::codecs::png::PngEncoder;
use letterpress_assets::AssetError;

use crate::error::{ComposeError, ComposeResult};

/// Encode a canvas as RGBA PNG bytes.
pub fn encode_png(image: &RgbaImage) -> ComposeResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_with_encoder(PngEncoder::new(&mut bytes))
        .map_err(|e| ComposeError::Encode {
            message: e.to_string(),
        })?;
    Ok(bytes)
}

/// Write a canvas to `path` as PNG.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> ComposeResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| AssetError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    image
        .write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(|e| ComposeError::Encode {
            message: format!("{}: {}", path.display(), e),
        })?;
    writer.flush().map_err(|source| AssetError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
