//! Style sets - named collections of glyph files.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::AssetResult;
use crate::io::{FileReader, GlyphReader, MemoryReader};

/// A named collection of glyph images, one file per letter.
///
/// Cloning is cheap; clones share the same reader. The contents are treated
/// as immutable for as long as a composition uses them.
#[derive(Clone)]
pub struct StyleSet {
    name: String,
    reader: Arc<dyn GlyphReader>,
}

impl StyleSet {
    /// Create a style set over any reader.
    pub fn new(name: impl Into<String>, reader: impl GlyphReader + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Arc::new(reader),
        }
    }

    /// Open an extracted style directory, descending into a single nested folder.
    pub fn open_dir(dir: impl AsRef<Path>) -> AssetResult<Self> {
        let dir = dir.as_ref();
        let reader = FileReader::flattened(dir)?;
        let name = reader.base_path().display().to_string();
        Ok(Self::new(name, reader))
    }

    /// Create a style set backed by in-memory files.
    pub fn from_memory(name: impl Into<String>, reader: MemoryReader) -> Self {
        Self::new(name, reader)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reader(&self) -> &dyn GlyphReader {
        self.reader.as_ref()
    }
}

impl fmt::Debug for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSet")
            .field("name", &self.name)
            .field("root", &self.reader.display_root())
            .finish()
    }
}
