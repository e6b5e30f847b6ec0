use super::palette::shade;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Display mode of the dashboard, flipped by the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub appearance: Appearance,
    pub accent: Color,
    pub base_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub selection_style: Style,
    pub dimmed_style: Style,
    pub link_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("Cyan", Appearance::Dark)
    }
}

impl Theme {
    pub fn new(accent_color_str: &str, appearance: Appearance) -> Self {
        Self::from_color(parse_color(accent_color_str), appearance)
    }

    #[must_use]
    pub fn from_color(accent: Color, appearance: Appearance) -> Self {
        let (fg, bg, selection_bg, dimmed) = match appearance {
            Appearance::Dark => (
                Color::Reset,
                Color::Reset,
                shade(accent, 0.2, 0.3),
                Color::DarkGray,
            ),
            Appearance::Light => (
                Color::Rgb(30, 30, 30),
                Color::Rgb(245, 245, 240),
                shade(accent, 0.85, 0.5),
                Color::Gray,
            ),
        };
        // Bright accents wash out on a light background.
        let ink = match appearance {
            Appearance::Dark => accent,
            Appearance::Light => shade(accent, 0.3, 0.8),
        };

        Self {
            appearance,
            accent: ink,
            base_style: Style::default().fg(fg).bg(bg),
            border_style: Style::default().fg(dimmed),
            focused_border_style: Style::default().fg(ink).add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(dimmed),
            value_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            selection_style: Style::default().bg(selection_bg).fg(fg),
            dimmed_style: Style::default().fg(dimmed),
            link_style: Style::default()
                .fg(ink)
                .add_modifier(Modifier::UNDERLINED),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Cyan,
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let double = |i: usize| channel(s[i..=i].repeat(2).as_str());
            Some((double(0)?, double(1)?, double(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Cyan);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [Appearance::Dark, Appearance::Light] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
    }

    #[test]
    fn test_light_theme_has_background() {
        let theme = Theme::new("Cyan", Appearance::Light);
        assert_eq!(theme.base_style.bg, Some(Color::Rgb(245, 245, 240)));
        assert_eq!(Theme::default().appearance, Appearance::Dark);
    }
}
