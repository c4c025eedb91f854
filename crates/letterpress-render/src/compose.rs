//! Packing glyphs into a single word image.

use image::{Rgba, RgbaImage, imageops};
use letterpress_assets::{AssetError, GlyphLoader, StyleSet};
use letterpress_core::ComposeConfig;

use crate::error::{ComposeError, ComposeResult};
use crate::resize::scale_to_height;
use crate::trim::trim;

const TRANSPARENT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);
const WHITE_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Everything needed to compose one word.
#[derive(Debug, Clone)]
pub struct CompositionRequest<'a> {
    pub word: &'a str,
    /// Letter `i` is drawn from `styles[i % styles.len()]`.
    pub styles: &'a [StyleSet],
    pub config: ComposeConfig,
}

impl<'a> CompositionRequest<'a> {
    /// Create a request with the default [`ComposeConfig`].
    pub fn new(word: &'a str, styles: &'a [StyleSet]) -> Self {
        Self {
            word,
            styles,
            config: ComposeConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ComposeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.config.height = height;
        self
    }

    pub fn spacing(mut self, spacing: i32) -> Self {
        self.config.spacing = spacing;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.config.transparent = transparent;
        self
    }

    fn validate(&self) -> ComposeResult<()> {
        if self.word.is_empty() {
            return Err(ComposeError::invalid_request("word is empty"));
        }
        if self.styles.is_empty() {
            return Err(ComposeError::invalid_request("no style sets given"));
        }
        if self.config.height == 0 {
            return Err(ComposeError::invalid_request("height must be positive"));
        }
        Ok(())
    }
}

/// Turns a [`CompositionRequest`] into a finished canvas.
///
/// Holds no state between calls; one compositor can serve any number of
/// requests, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    loader: GlyphLoader,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(loader: GlyphLoader) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &GlyphLoader {
        &self.loader
    }

    /// Compose the word. Fails without partial output if any glyph is
    /// missing or unusable, or if the layout does not fit its canvas.
    pub fn compose(&self, request: &CompositionRequest<'_>) -> ComposeResult<RgbaImage> {
        request.validate()?;
        let ComposeConfig {
            height,
            spacing,
            transparent,
        } = request.config;

        let word = request.word.to_uppercase();
        tracing::debug!(
            "Composing '{}' from {} style set(s) at height {}",
            word,
            request.styles.len(),
            height
        );

        let glyphs = word
            .chars()
            .enumerate()
            .map(|(i, letter)| {
                let style_index = i % request.styles.len();
                self.prepare_glyph(&request.styles[style_index], style_index + 1, letter, height)
            })
            .collect::<ComposeResult<Vec<_>>>()?;

        let widths: Vec<u32> = glyphs.iter().map(|glyph| glyph.width()).collect();
        let (offsets, total_width) = layout(&widths, spacing)?;

        let background = if transparent {
            TRANSPARENT_BACKGROUND
        } else {
            WHITE_BACKGROUND
        };
        let mut canvas = RgbaImage::from_pixel(total_width, height, background);
        for (glyph, x) in glyphs.iter().zip(offsets) {
            imageops::overlay(&mut canvas, glyph, x, 0);
        }

        Ok(canvas)
    }

    /// Load, trim and scale a single glyph. `style_index` is 1-based and only
    /// used for error reporting.
    pub fn prepare_glyph(
        &self,
        style: &StyleSet,
        style_index: usize,
        letter: char,
        height: u32,
    ) -> ComposeResult<RgbaImage> {
        let glyph = self.loader.load(style, letter).map_err(|err| match err {
            AssetError::GlyphNotFound { letter, .. } => ComposeError::NotFound {
                letter,
                style_index,
            },
            other => ComposeError::Asset(other),
        })?;

        let trimmed = trim(&glyph);
        tracing::trace!(
            "Glyph '{}' from style {}: {:?} trimmed to {:?}",
            letter,
            style_index,
            glyph.dimensions(),
            trimmed.dimensions()
        );
        scale_to_height(&trimmed, height, letter)
    }
}

/// Horizontal offset of each glyph and the total canvas width.
///
/// Negative spacing may overlap glyphs, but every glyph must stay inside
/// `0..total_width`; anything else is rejected as an invalid request.
pub fn layout(widths: &[u32], spacing: i32) -> ComposeResult<(Vec<i64>, u32)> {
    let gaps = widths.len().saturating_sub(1) as i64;
    let total: i64 = widths.iter().map(|&w| w as i64).sum::<i64>() + spacing as i64 * gaps;
    if total <= 0 {
        return Err(ComposeError::invalid_request(format!(
            "spacing {} leaves no room for the glyphs (total width {})",
            spacing, total
        )));
    }
    let total_width = u32::try_from(total).map_err(|_| {
        ComposeError::invalid_request(format!("total width {} is too large", total))
    })?;

    let mut offsets = Vec::with_capacity(widths.len());
    let mut cursor: i64 = 0;
    for &width in widths {
        if cursor < 0 || cursor + width as i64 > total {
            return Err(ComposeError::invalid_request(format!(
                "spacing {} pushes a glyph outside the canvas (x = {}, width {}, canvas {})",
                spacing, cursor, width, total
            )));
        }
        offsets.push(cursor);
        cursor += width as i64 + spacing as i64;
    }

    Ok((offsets, total_width))
}

/// Compose `word` with a default [`Compositor`].
pub fn compose(
    word: &str,
    styles: &[StyleSet],
    height: u32,
    spacing: i32,
    transparent: bool,
) -> ComposeResult<RgbaImage> {
    let request = CompositionRequest::new(word, styles)
        .height(height)
        .spacing(spacing)
        .transparent(transparent);
    Compositor::new().compose(&request)
}
