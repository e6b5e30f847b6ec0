//! Labelled display slots inside a bordered panel.

use crate::domain::RequestState;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// One label/value row. A `None` value renders as an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRow<'a> {
    pub label: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> FieldRow<'a> {
    #[must_use]
    pub const fn new(label: &'a str, value: Option<&'a str>) -> Self {
        Self { label, value }
    }
}

pub struct FieldList<'a> {
    title: &'a str,
    rows: Vec<FieldRow<'a>>,
    state: RequestState,
    theme: &'a Theme,
}

impl<'a> FieldList<'a> {
    #[must_use]
    pub fn new(title: &'a str, rows: Vec<FieldRow<'a>>, theme: &'a Theme) -> Self {
        Self {
            title,
            rows,
            state: RequestState::Idle,
            theme,
        }
    }

    #[must_use]
    pub const fn state(mut self, state: RequestState) -> Self {
        self.state = state;
        self
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(format!(" {} ", self.title))];
        match self.state {
            RequestState::Pending => {
                spans.push(Span::styled("loading… ", self.theme.dimmed_style));
            }
            RequestState::Failed => {
                spans.push(Span::styled("failed ", self.theme.dimmed_style));
            }
            RequestState::Idle | RequestState::Loaded => {}
        }
        Line::from(spans)
    }

    fn label_width(&self) -> usize {
        self.rows.iter().map(|r| r.label.width()).max().unwrap_or(0)
    }
}

impl Widget for FieldList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(self.title_line());
        let inner = block.inner(area);
        block.render(area, buf);

        let width = self.label_width();
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| {
                let pad = width.saturating_sub(row.label.width());
                Line::from(vec![
                    Span::styled(
                        format!("{}{}: ", row.label, " ".repeat(pad)),
                        self.theme.label_style,
                    ),
                    Span::styled(row.value.unwrap_or_default(), self.theme.value_style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .style(self.theme.base_style)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(list: FieldList<'_>, area: Rect) -> Vec<String> {
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf);
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_values_render_verbatim() {
        let theme = Theme::default();
        let rows = vec![
            FieldRow::new("Train", Some("Express 12")),
            FieldRow::new("Platform", Some("4.5")),
        ];
        let lines = rendered(
            FieldList::new("Train Status", rows, &theme),
            Rect::new(0, 0, 40, 4),
        );

        assert!(lines[1].contains("Train   : Express 12"));
        assert!(lines[2].contains("Platform: 4.5"));
    }

    #[test]
    fn test_unset_value_is_blank() {
        let theme = Theme::default();
        let rows = vec![FieldRow::new("City", None)];
        let lines = rendered(
            FieldList::new("Weather", rows, &theme).state(RequestState::Pending),
            Rect::new(0, 0, 30, 3),
        );

        assert!(lines[0].contains("loading"));
        assert_eq!(lines[1].trim_end_matches(['│', ' ']), "│City:");
    }
}
