/// Default glyph height in pixels.
pub const DEFAULT_HEIGHT: u32 = 400;
/// Default gap between glyphs. Negative values pull glyphs together.
pub const DEFAULT_SPACING: i32 = -5;

/// Layout settings for a single composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeConfig {
    /// Every glyph is scaled to exactly this height.
    pub height: u32,
    /// Signed pixel offset between consecutive glyphs.
    pub spacing: i32,
    /// Transparent background when set, opaque white otherwise.
    pub transparent: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        ComposeConfig {
            height: DEFAULT_HEIGHT,
            spacing: DEFAULT_SPACING,
            transparent: true,
        }
    }
}

impl ComposeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComposeConfig::default();
        assert_eq!(config.height, 400);
        assert_eq!(config.spacing, -5);
        assert!(config.transparent);
    }

    #[test]
    fn test_builder() {
        let config = ComposeConfig::new().height(50).spacing(3).transparent(false);
        assert_eq!(
            config,
            ComposeConfig {
                height: 50,
                spacing: 3,
                transparent: false,
            }
        );
    }
}
