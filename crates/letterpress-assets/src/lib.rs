//! Glyph sources for letterpress.
//!
//! A [`StyleSet`] maps letters to image files through a [`GlyphReader`], which
//! may be backed by a directory on disk or by in-memory bytes. [`GlyphLoader`]
//! resolves a letter against a style set and decodes it to RGBA.

pub mod error;
pub mod io;
pub mod loader;
pub mod style;

pub use error::{AssetError, AssetResult};
pub use io::{FileReader, GlyphReader, MemoryReader};
pub use loader::{DEFAULT_GLYPH_EXTENSION, GlyphLoader};
pub use style::StyleSet;
