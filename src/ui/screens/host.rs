//! Host panel showing what the owner of the search text observes.

use crate::app::state::AppState;
use crate::domain::Appearance;
use crate::ui::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let appearance = state.appearance;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::dim(appearance))
        .title(Span::styled(" Host ", theme::title(appearance)));

    let host_text = state.host_text();
    let text_span = if host_text.is_empty() {
        Span::styled("(empty)", theme::dim(appearance))
    } else {
        Span::styled(format!("{host_text:?}"), theme::label(appearance))
    };
    let focus = if state.is_field_focused() {
        "search field"
    } else {
        "none"
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("bound text   ", theme::dim(appearance)),
            text_span,
        ]),
        row("edits", state.edits().to_string(), appearance),
        row("focus", focus.to_owned(), appearance),
        row(
            "resigns",
            state.responders.resign_signals().to_string(),
            appearance,
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn row(name: &str, value: String, appearance: Appearance) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<13}"), theme::dim(appearance)),
        Span::styled(value, theme::info(appearance)),
    ])
}
