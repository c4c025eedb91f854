//! Error types for glyph sources.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while resolving or decoding glyphs.
#[derive(Debug)]
pub enum AssetError {
    /// A file or directory does not exist.
    NotFound {
        /// The path that was looked up.
        path: String,
    },

    /// Failed to read data from disk.
    IoError {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The bytes could not be decoded as an image.
    DecodeError {
        /// The glyph file being decoded.
        path: String,
        /// Description of the error.
        message: String,
    },

    /// None of the candidate files for a letter exist in the style set.
    GlyphNotFound {
        /// The requested letter.
        letter: char,
        /// Every filename that was tried, in order.
        candidates: Vec<String>,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound { path } => {
                write!(f, "Not found: {}", path)
            }
            AssetError::IoError { path, source } => {
                write!(f, "IO error reading '{}': {}", path.display(), source)
            }
            AssetError::DecodeError { path, message } => {
                write!(f, "Failed to decode '{}': {}", path, message)
            }
            AssetError::GlyphNotFound { letter, candidates } => {
                write!(
                    f,
                    "Missing letter: {} (tried {})",
                    letter,
                    candidates.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

/// Result type alias for glyph source operations.
pub type AssetResult<T> = Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_not_found_display() {
        let err = AssetError::GlyphNotFound {
            letter: 'T',
            candidates: vec!["T.png".to_string(), "t.png".to_string()],
        };
        assert_eq!(err.to_string(), "Missing letter: T (tried T.png, t.png)");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = AssetError::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("boom"));
    }
}
