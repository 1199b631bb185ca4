//! TUI theming support.
//!
//! The `Theme` struct defines the color palette for the TUI. It supports
//! the brand dark theme, a light variant, and automatic detection based
//! on the terminal environment.

use ratatui::style::Color;

use crate::cli::ThemeArg;

/// A collection of colors used for TUI components.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub danger: Color,
    pub success: Color,
    pub dim: Color,
    pub normal: Color,
    pub inverted_fg: Color,
}

impl Theme {
    /// Create the brand dark theme (default).
    ///
    /// Palette:
    /// - Primary: Gold (headers, borders, focused fields)
    /// - Secondary: Cyan (links, medium-strength indicator)
    /// - Danger: Red (validation errors)
    /// - Success: Green (strong-password indicator)
    /// - Dim: DarkGray (labels, hints)
    /// - Normal: White (main text)
    /// - Inverted FG: Black (text on colored background)
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(212, 175, 55),
            secondary: Color::Cyan,
            danger: Color::Red,
            success: Color::Green,
            dim: Color::DarkGray,
            normal: Color::White,
            inverted_fg: Color::Black,
        }
    }

    /// Create a high-contrast light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::Rgb(128, 96, 0),
            secondary: Color::Blue,
            danger: Color::Red,
            success: Color::Green,
            dim: Color::Gray,
            normal: Color::Black,
            inverted_fg: Color::White,
        }
    }

    /// Detect the terminal theme or fall back to dark.
    #[must_use]
    pub fn auto() -> Self {
        if is_light_terminal() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Resolve a CLI/config theme selection into a palette.
    #[must_use]
    pub fn from_arg(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::auto(),
            ThemeArg::Dark => Self::dark(),
            ThemeArg::Light => Self::light(),
        }
    }

    /// Check if this is a light theme.
    #[must_use]
    pub fn is_light(&self) -> bool {
        self.normal == Color::Black
    }
}

/// Simple heuristic to detect if the terminal is light-themed.
///
/// Checks `COLORFGBG`, set by some terminal emulators as "fg;bg" where bg
/// is a color index. Unset or unparsable means dark.
fn is_light_terminal() -> bool {
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        let parts: Vec<&str> = colorfgbg.split(';').collect();
        if let Some(bg) = parts.last() {
            if let Ok(bg_num) = bg.parse::<u32>() {
                // 0=black, 7=gray, 8=dark gray, 15=white
                return bg_num >= 7 && bg_num != 8;
            }
        }
    }
    false
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
