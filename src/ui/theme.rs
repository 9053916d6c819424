use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub favorite: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),       // Blue
            banner: ColorSpec::rgb(255, 159, 196),        // Magenta
            text: ColorSpec::rgb(169, 177, 214),          // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),    // Comment
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            favorite: ColorSpec::rgb(255, 202, 40),       // Yellow
            warning: ColorSpec::rgb(255, 158, 100),       // Orange
            error: ColorSpec::rgb(247, 118, 142),         // Red
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),       // Purple
            banner: ColorSpec::rgb(255, 121, 198),        // Pink
            text: ColorSpec::rgb(248, 248, 242),          // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),     // Comment
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(98, 114, 164),  // Comment
            favorite: ColorSpec::rgb(241, 250, 140),      // Yellow
            warning: ColorSpec::rgb(255, 184, 108),       // Orange
            error: ColorSpec::rgb(255, 85, 85),           // Red
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(144, 122, 169),       // Iris
            banner: ColorSpec::rgb(215, 130, 126),        // Rose
            text: ColorSpec::rgb(87, 82, 121),            // Text
            text_muted: ColorSpec::rgb(152, 147, 165),    // Muted
            border_active: ColorSpec::rgb(144, 122, 169), // Iris
            border_normal: ColorSpec::rgb(152, 147, 165), // Muted
            favorite: ColorSpec::rgb(234, 157, 52),       // Gold
            warning: ColorSpec::rgb(234, 157, 52),        // Gold
            error: ColorSpec::rgb(180, 99, 122),          // Love
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::rgb(137, 180, 250),       // Blue
            banner: ColorSpec::rgb(245, 194, 231),        // Pink
            text: ColorSpec::rgb(205, 214, 244),          // Text
            text_muted: ColorSpec::rgb(127, 132, 156),    // Overlay1
            border_active: ColorSpec::rgb(137, 180, 250), // Blue
            border_normal: ColorSpec::rgb(88, 91, 112),   // Surface2
            favorite: ColorSpec::rgb(249, 226, 175),      // Yellow
            warning: ColorSpec::rgb(250, 179, 135),       // Peach
            error: ColorSpec::rgb(243, 139, 168),         // Red
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
            "catppuccin-mocha".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_theme() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default().name, "tokyo-night");
        assert_eq!(
            ColorSpec::rgb(1, 2, 3).to_color(),
            Color::Rgb(1, 2, 3)
        );
    }
}
