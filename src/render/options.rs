//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit the document title as a leading `# title` line
    pub include_title: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the title line.
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_title: true,
        }
    }
}
