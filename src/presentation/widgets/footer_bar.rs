use crate::domain::keybinding::Keybind;
use crate::presentation::theme::{Appearance, Theme, shade};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Panel shown as the leftmost footer badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusContext {
    #[default]
    Train,
    Weather,
    Sos,
    Emergency,
}

impl FocusContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Train => "TRAIN",
            Self::Weather => "WEATHER",
            Self::Sos => "SOS",
            Self::Emergency => "EMERGENCY",
        }
    }
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub focus_indicator: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let accent = theme.accent;
        let (key_bg, key_fg) = match theme.appearance {
            Appearance::Dark => (shade(accent, 0.08, 0.5), Color::White),
            Appearance::Light => (shade(accent, 0.85, 0.4), Color::Black),
        };

        Self {
            background: theme.base_style,
            label_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().bg(key_bg).fg(key_fg),
            focus_indicator: Style::default()
                .bg(key_bg)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            focus_indicator: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Short key label such as `C-t` or `S-Tab`.
#[must_use]
pub fn key_label(key: &KeyEvent) -> String {
    let mut label = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("C-");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        label.push_str("A-");
    }
    if key.code == KeyCode::BackTab
        || (key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, KeyCode::Char(_)))
    {
        label.push_str("S-");
    }

    match key.code {
        KeyCode::Char(c) => label.push(c),
        KeyCode::Enter => label.push_str("Enter"),
        KeyCode::Esc => label.push_str("Esc"),
        KeyCode::Tab | KeyCode::BackTab => label.push_str("Tab"),
        KeyCode::Up => label.push('↑'),
        KeyCode::Down => label.push('↓'),
        other => label.push_str(&other.to_string()),
    }
    label
}

/// Bottom bar with the focused panel and the bindings that apply to it.
///
/// Hints that do not fit the width are dropped whole.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    focus_context: Option<FocusContext>,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            focus_context: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub fn focus_context(mut self, context: FocusContext) -> Self {
        self.focus_context = Some(context);
        self
    }

    #[must_use]
    pub fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn spans(&self, max_width: usize) -> Vec<Span<'a>> {
        let mut spans = Vec::new();
        let mut used = 0;

        if let Some(context) = self.focus_context {
            let badge = format!(" {} ", context.display_name());
            used += badge.width();
            spans.push(Span::styled(badge, self.style.focus_indicator));
        }

        for binding in self.keybindings {
            let label = format!(" {} ", binding.label);
            let key = format!(" {} ", key_label(&binding.key));
            let width = 1 + label.width() + key.width();
            if used + width > max_width {
                break;
            }
            used += width;
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, self.style.label_style));
            spans.push(Span::styled(key, self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let row = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(row, self.style.background);

        let line = Line::from(self.spans(usize::from(area.width)));
        Paragraph::new(line).render(row, buf);
    }
}
