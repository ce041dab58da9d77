use ratatui::style::Color;

use crate::model::UiConfig;

/// Color palette for the TUI, with dark and light variants.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xFA, 0xF5),
            text: Color::Rgb(0x33, 0x30, 0x60),
            text_bright: Color::Rgb(0x10, 0x10, 0x20),
            dim: Color::Rgb(0x9A, 0x97, 0xB8),
            highlight: Color::Rgb(0xC2, 0x18, 0x6E),
            yellow: Color::Rgb(0xB8, 0x86, 0x00),
            green: Color::Rgb(0x1E, 0x9E, 0x50),
            selection_bg: Color::Rgb(0xE8, 0xD8, 0xE8),
        }
    }

    /// Build the palette from config: the `theme` field picks the base
    /// variant, `[ui.colors]` entries override individual slots.
    pub fn from_config(ui: &UiConfig, night_mode: bool) -> Self {
        let mut theme = if night_mode { Theme::dark() } else { Theme::light() };

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color.
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_variants() {
        let ui = UiConfig::default();
        let dark = Theme::from_config(&ui, true);
        let light = Theme::from_config(&ui, false);
        assert_eq!(dark.background, Theme::dark().background);
        assert_eq!(light.background, Theme::light().background);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("bogus_slot".into(), "#112233".into());

        let theme = Theme::from_config(&ui, true);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Unchanged defaults still present.
        assert_eq!(theme.text, Theme::dark().text);
    }
}
