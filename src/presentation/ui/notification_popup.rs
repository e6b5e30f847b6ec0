use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Alert, Notification, NotificationLevel};
use crate::presentation::theme::Theme;

const MAX_TOAST_WIDTH: u16 = 60;
const MAX_ALERT_WIDTH: u16 = 50;

fn level_color(level: &NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.accent,
        NotificationLevel::Error => Color::Red,
    }
}

/// Rows needed to wrap `text` into `inner_width` columns.
fn wrapped_rows(text: &str, inner_width: u16) -> u16 {
    let inner_width = inner_width.max(1);
    let content_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    content_width.div_ceil(inner_width).max(1)
}

/// Transient toast in the top-right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.notification.title);
        let message = &self.notification.message;

        let max_popup_width = MAX_TOAST_WIDTH.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let lines = wrapped_rows(message, width.saturating_sub(2));
        let height = lines.saturating_add(2).clamp(3, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let popup_area = Rect::new(x, area.y + 2, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let color = level_color(&self.notification.level, self.theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(self.theme.base_style.fg(color));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

/// Centered modal that stays until dismissed.
pub struct AlertPopup<'a> {
    alert: &'a Alert,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    #[must_use]
    pub fn new(alert: &'a Alert, theme: &'a Theme) -> Self {
        Self { alert, theme }
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = "Enter to dismiss";
        let message = self.alert.message.as_str();

        let width = u16::try_from(message.width().max(hint.width()))
            .unwrap_or(u16::MAX)
            .saturating_add(6)
            .min(MAX_ALERT_WIDTH)
            .min(area.width);
        let rows = wrapped_rows(message, width.saturating_sub(4));
        let height = rows.saturating_add(4).min(area.height);

        let popup_area = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        );
        if popup_area.area() == 0 {
            return;
        }

        let color = level_color(&self.alert.level, self.theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(self.theme.base_style);

        let lines = vec![
            Line::styled(message, self.theme.value_style),
            Line::default(),
            Line::styled(hint, self.theme.dimmed_style),
        ];

        Clear.render(popup_area, buf);
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}
