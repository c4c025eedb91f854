//! Whole-request pipelines: style sets in, PNG out.

use std::path::{Path, PathBuf};

use letterpress_assets::StyleSet;
use letterpress_core::ComposeConfig;
use letterpress_render::{ComposeResult, CompositionRequest, Compositor, encode_png, save_png};

/// Compose `word` and return the PNG bytes, ready to send as `image/png`.
pub fn render_png(word: &str, styles: &[StyleSet], config: &ComposeConfig) -> ComposeResult<Vec<u8>> {
    let request = CompositionRequest::new(word, styles).with_config(*config);
    let canvas = Compositor::new().compose(&request)?;
    encode_png(&canvas)
}

/// Compose `word` from extracted style directories and write it to `output_path`.
///
/// Each directory may wrap its glyphs in a single nested folder. Returns the
/// path that was written.
pub fn generate_name_image<P: AsRef<Path>>(
    word: &str,
    style_dirs: &[P],
    output_path: impl AsRef<Path>,
    config: &ComposeConfig,
) -> ComposeResult<PathBuf> {
    let styles = style_dirs
        .iter()
        .map(StyleSet::open_dir)
        .collect::<Result<Vec<_>, _>>()?;

    let request = CompositionRequest::new(word, &styles).with_config(*config);
    let canvas = Compositor::new().compose(&request).inspect_err(|err| {
        tracing::warn!("Failed to compose '{}': {}", word, err);
    })?;

    let output_path = output_path.as_ref();
    save_png(&canvas, output_path)?;
    Ok(output_path.to_path_buf())
}
