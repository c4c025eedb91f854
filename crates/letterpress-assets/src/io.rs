//! Byte-level access to glyph files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, AssetResult};

/// Trait for reading glyph files from some backing store.
///
/// Paths are relative to the root of the style set.
pub trait GlyphReader: Send + Sync {
    /// Read all bytes from a path.
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Human-readable location, used in diagnostics.
    fn display_root(&self) -> String;
}

/// Reads glyph files from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileReader {
    /// Base path for relative paths.
    base_path: PathBuf,
}

impl FileReader {
    /// Create a new file reader rooted at `base_path`.
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Create a reader for a directory produced by unpacking an archive.
    ///
    /// Archives often wrap their files in one top-level folder. When `dir`
    /// holds exactly one entry and that entry is a directory, the reader is
    /// rooted there instead.
    pub fn flattened(dir: impl AsRef<Path>) -> AssetResult<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AssetError::NotFound {
                path: dir.display().to_string(),
            });
        }

        let io_err = |source: std::io::Error| AssetError::IoError {
            path: dir.to_path_buf(),
            source,
        };
        let mut entries = std::fs::read_dir(dir)
            .map_err(io_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;

        if entries.len() == 1 {
            let only = entries.remove(0).path();
            if only.is_dir() {
                tracing::debug!("Descending into nested style folder {}", only.display());
                return Ok(Self::new(only));
            }
        }

        Ok(Self::new(dir))
    }

    /// The directory glyph paths are resolved against.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a path relative to the base path.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }
}

impl GlyphReader for FileReader {
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>> {
        let full_path = self.resolve_path(path);
        std::fs::read(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound {
                    path: full_path.display().to_string(),
                }
            } else {
                AssetError::IoError {
                    path: full_path.clone(),
                    source: e,
                }
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }

    fn display_root(&self) -> String {
        self.base_path.display().to_string()
    }
}

/// In-memory glyph files, keyed by path string.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryReader {
    /// Create a new empty memory reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes for a path.
    pub fn insert(&mut self, path: impl AsRef<str>, bytes: Vec<u8>) {
        self.files.insert(path.as_ref().to_string(), bytes);
    }

    /// Builder form of [`MemoryReader::insert`].
    pub fn with(mut self, path: impl AsRef<str>, bytes: Vec<u8>) -> Self {
        self.insert(path, bytes);
        self
    }
}

impl GlyphReader for MemoryReader {
    fn read_bytes(&self, path: &Path) -> AssetResult<Vec<u8>> {
        let key = path.to_string_lossy().to_string();
        self.files
            .get(&key)
            .cloned()
            .ok_or(AssetError::NotFound { path: key })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&*path.to_string_lossy())
    }

    fn display_root(&self) -> String {
        format!("memory://{} files", self.files.len())
    }
}
