use crate::settings::PlacementMode;
use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),   // Paths, instructions
    pub header: (u8, u8, u8),  // Titles, emphasis
    pub success: (u8, u8, u8), // Tagged counts
    pub error: (u8, u8, u8),   // Failures
}

impl ColorPalette {
    pub const CATPPUCCIN: Self = Self {
        muted: (108, 112, 134),   // Gray
        header: (148, 226, 213),  // Teal
        success: (166, 227, 161), // Green
        error: (243, 139, 168),   // Pink
    };
}

/// Formatting context passed through rendering pipeline
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::CATPPUCCIN }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let painted = Paint::rgb(text, r, g, b);
        if bold { painted.bold().to_string() } else { painted.to_string() }
    }

    pub fn format_header(&self, text: &str) -> String {
        self.paint(text, self.palette.header, true)
    }

    pub fn format_muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted, false)
    }

    pub fn format_path(&self, path: &str) -> String {
        self.paint(path, self.palette.muted, false)
    }

    pub fn format_error(&self, text: &str) -> String {
        self.paint(text, self.palette.error, true)
    }

    pub fn format_count(&self, n: usize) -> String {
        self.paint(&n.to_string(), self.palette.success, true)
    }

    pub fn format_mode(&self, mode: PlacementMode) -> String {
        self.paint(mode.label(), self.palette.header, true)
    }

    /// Tags are shown with their `#` and a color derived from the name.
    pub fn format_tag(&self, tag: &str) -> String {
        let shown = format!("#{tag}");
        self.paint(&shown, crate::tags::color_for_tag(tag), true)
    }

    pub fn format_tags(&self, tags: &[String]) -> String {
        tags.iter().map(|t| self.format_tag(t)).collect::<Vec<_>>().join(" ")
    }
}
