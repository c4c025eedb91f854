//! Letterpress - compose words from per-letter glyph images
//!
//! Every letter of a word is looked up in a style set (a directory or an
//! in-memory collection of `A.png`, `B.png`, ...), trimmed to its visible
//! pixels, scaled to a common height and packed left to right into a single
//! RGBA image. With several style sets the letters alternate between them.
//!
//! # Quick Start
//!
//! ```ignore
//! use letterpress::prelude::*;
//!
//! let config = ComposeConfig::new().height(200).spacing(-5);
//! generate_name_image("Ada", &["styles/serif", "styles/script"], "ada.png", &config)?;
//!
//! // Or keep everything in memory:
//! let styles = [StyleSet::open_dir("styles/serif")?];
//! let png_bytes = render_png("Ada", &styles, &config)?;
//! ```

pub mod generate;

pub use letterpress_assets as assets;
pub use letterpress_core::{ComposeConfig, logging};
pub use letterpress_render as render;

pub use generate::{generate_name_image, render_png};

pub mod prelude {
    pub use crate::generate::{generate_name_image, render_png};
    pub use letterpress_assets::{GlyphLoader, MemoryReader, StyleSet};
    pub use letterpress_core::ComposeConfig;
    pub use letterpress_render::{
        ComposeError, ComposeResult, CompositionRequest, Compositor, compose,
    };
}
