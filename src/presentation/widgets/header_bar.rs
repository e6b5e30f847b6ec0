use crate::presentation::theme::{Appearance, Theme, shade};
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Long-form date used when the configured format is rejected.
pub const FALLBACK_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Formats `date` with a chrono `strftime` pattern.
///
/// Returns `None` when the pattern contains an invalid specifier.
#[must_use]
pub fn format_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Formats `date`, falling back to the long form on a bad pattern.
#[must_use]
pub fn date_text(date: NaiveDate, format: &str) -> String {
    format_date(date, format).unwrap_or_else(|| {
        tracing::warn!(format, "Invalid date format, using default");
        format_date(date, FALLBACK_DATE_FORMAT).unwrap_or_default()
    })
}

pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub date: Style,
    pub appearance: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let accent = theme.accent;
        let version_bg = match theme.appearance {
            Appearance::Dark => shade(accent, 0.08, 0.5),
            Appearance::Light => shade(accent, 0.85, 0.4),
        };
        let version_fg = match theme.appearance {
            Appearance::Dark => Color::White,
            Appearance::Light => Color::Black,
        };

        Self {
            background: theme.base_style,
            app_name: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(version_fg),
            date: theme.value_style,
            appearance: Style::default().bg(version_bg).fg(accent),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            date: Style::default().add_modifier(Modifier::BOLD),
            appearance: Style::default().fg(Color::DarkGray),
        }
    }
}

pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    date: &'a str,
    appearance: Appearance,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            date: "",
            appearance: Appearance::default(),
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn date(mut self, date: &'a str) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub const fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn right_spans(&self) -> (Vec<Span<'a>>, u16) {
        let date = format!(" {} ", self.date);
        let mode = format!(" {} ", self.appearance.label().to_uppercase());
        let width = u16::try_from(date.width() + 1 + mode.width()).unwrap_or(u16::MAX);
        let spans = vec![
            Span::styled(date, self.style.date),
            Span::raw(" "),
            Span::styled(mode, self.style.appearance),
        ];
        (spans, width)
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let name = format!(" {} ", self.app_name.to_uppercase());
        let version = format!(" v{} ", self.version);
        let left_width = u16::try_from(name.width() + 1 + version.width()).unwrap_or(u16::MAX);
        let left_line = Line::from(vec![
            Span::styled(name, self.style.app_name),
            Span::raw(" "),
            Span::styled(version, self.style.version),
        ]);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        let (right_spans, right_width) = self.right_spans();
        if right_width < area.width.saturating_sub(left_width) {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Line::from(right_spans)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_seventh() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date")
    }

    #[test]
    fn test_long_form_date() {
        assert_eq!(
            format_date(march_seventh(), FALLBACK_DATE_FORMAT).as_deref(),
            Some("Thursday, March 7, 2024")
        );
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(
            format_date(march_seventh(), "%Y-%m-%d").as_deref(),
            Some("2024-03-07")
        );
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert_eq!(format_date(march_seventh(), "%Q"), None);
        assert_eq!(date_text(march_seventh(), "%Q"), "Thursday, March 7, 2024");
    }

    #[test]
    fn test_header_renders_date_and_mode() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("onrails", "0.1.0")
            .date("Thursday, March 7, 2024")
            .appearance(Appearance::Light)
            .render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(row.starts_with(" ONRAILS "));
        assert!(row.contains("Thursday, March 7, 2024"));
        assert!(row.trim_end().ends_with("LIGHT"));
    }
}
