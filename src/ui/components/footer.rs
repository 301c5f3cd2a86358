//! Footer component used for keybinding hints.

use crate::domain::Appearance;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const SEPARATOR: &str = "  ";

/// One keybinding hint, rendered as `[key] desc`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Hint {
    pub key: String,
    pub desc: String,
}

impl Hint {
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            desc: desc.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.chars().count() + 3 + self.desc.chars().count()
    }
}

/// Returns the footer height needed to show every hint at `screen_width`.
pub fn required_height(screen_width: u16, hints: &[Hint]) -> u16 {
    wrap(hints, usize::from(screen_width.max(1))).len().max(1) as u16
}

/// Renders hints centred in a bottom bar, wrapping between hints.
pub fn render(frame: &mut Frame<'_>, area: Rect, hints: &[Hint], appearance: Appearance) {
    let lines: Vec<Line<'static>> = wrap(hints, usize::from(area.width.max(1)))
        .into_iter()
        .map(|row| styled_line(row, appearance))
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn wrap(hints: &[Hint], width: usize) -> Vec<&[Hint]> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;

    for (index, hint) in hints.iter().enumerate() {
        let needed = if index == start {
            hint.width()
        } else {
            used + SEPARATOR.len() + hint.width()
        };

        if needed > width && index > start {
            rows.push(&hints[start..index]);
            start = index;
            used = hint.width();
        } else {
            used = needed;
        }
    }

    if start < hints.len() {
        rows.push(&hints[start..]);
    }
    rows
}

fn styled_line(hints: &[Hint], appearance: Appearance) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (index, hint) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, theme::dim(appearance)));
        }
        spans.push(Span::styled(format!("[{}]", hint.key), theme::accent(appearance)));
        spans.push(Span::styled(format!(" {}", hint.desc), theme::dim(appearance)));
    }
    Line::from(spans)
}
