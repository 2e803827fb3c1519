//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for the comparison
//! tables. Color is disabled by `NO_COLOR` or `TERM=dumb`.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Tag colors (bold reverse video for high visibility badges)
    /// Bold reverse cyan for SHORTEST tags.
    pub const TAG_SHORTEST: &str = "\x1b[1;7;36m";
    /// Bold reverse green for ECO tags.
    pub const TAG_ECO: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for PREFERRED tags.
    pub const TAG_PREFERRED: &str = "\x1b[1;7;35m";

    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Green for savings.
    pub const GREEN: &str = "\x1b[32m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_shortest: &'static str,
    pub tag_eco: &'static str,
    pub tag_preferred: &'static str,
    pub white_bold: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_shortest: colors::TAG_SHORTEST,
            tag_eco: colors::TAG_ECO,
            tag_preferred: colors::TAG_PREFERRED,
            white_bold: colors::WHITE_BOLD,
            green: colors::GREEN,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_shortest: "",
            tag_eco: "",
            tag_preferred: "",
            white_bold: "",
            green: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/) and
/// the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
