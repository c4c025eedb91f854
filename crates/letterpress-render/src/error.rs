use letterpress_assets::AssetError;

/// Errors that abort a composition.
#[derive(Debug)]
pub enum ComposeError {
    /// A letter has no glyph in the style set selected for it.
    NotFound {
        letter: char,
        /// 1-based position of the style set in the request.
        style_index: usize,
    },

    /// A glyph has no area, so its aspect ratio is undefined.
    InvalidGlyph {
        letter: char,
        width: u32,
        height: u32,
    },

    /// The request itself cannot be composed.
    InvalidRequest { reason: String },

    /// Reading or decoding a glyph failed.
    Asset(AssetError),

    /// Writing the finished canvas failed.
    Encode { message: String },
}

impl ComposeError {
    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        ComposeError::InvalidRequest {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::NotFound {
                letter,
                style_index,
            } => write!(f, "Missing letter: {} in style {}", letter, style_index),
            ComposeError::InvalidGlyph {
                letter,
                width,
                height,
            } => write!(
                f,
                "Invalid glyph for '{}': {}x{} cannot be scaled",
                letter, width, height
            ),
            ComposeError::InvalidRequest { reason } => write!(f, "Invalid request: {}", reason),
            ComposeError::Asset(err) => write!(f, "{}", err),
            ComposeError::Encode { message } => write!(f, "Failed to encode image: {}", message),
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComposeError::Asset(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AssetError> for ComposeError {
    fn from(err: AssetError) -> Self {
        ComposeError::Asset(err)
    }
}

pub type ComposeResult<T> = Result<T, ComposeError>;
