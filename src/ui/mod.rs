//! Top-level UI composition.

use crate::{
    app::state::AppState,
    ui::components::{
        footer,
        header::{self, HeaderModel},
        search_bar::{self, SearchBarProps},
    },
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};

pub mod components;
mod hints;
pub mod screens;
pub mod theme;
pub mod transition;

/// Draws the demo host and records where the search bar's controls landed.
pub fn render(frame: &mut Frame<'_>, state: &mut AppState) {
    let area = frame.area();
    let appearance = state.appearance;
    let hints = hints::build(state);

    frame.render_widget(Block::default().style(theme::background(appearance)), area);

    let root = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(state.size.bar_height()),
        Constraint::Min(6),
        Constraint::Length(footer::required_height(area.width, &hints)),
    ])
    .split(area);

    header::render(
        frame,
        root[0],
        &HeaderModel {
            app_label: "⌕ searchbar".to_owned(),
            context_label: format!(
                "{} · {} · {}",
                state.bar.style(),
                state.appearance,
                state.size
            ),
        },
        appearance,
    );

    let view = state.view();
    let bar_area = Layout::horizontal([Constraint::Min(0)])
        .horizontal_margin(1)
        .split(root[1])[0];
    state.hit_map = search_bar::render(
        frame,
        bar_area,
        SearchBarProps {
            view: &view,
            transitions: &state.transitions,
            appearance,
            size: state.size,
        },
    );

    screens::host::render(frame, root[2], state);
    footer::render(frame, root[3], &hints, appearance);
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::app::state::{AppState, HostOptions};
    use crate::domain::SearchBarStyle;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        state.sync_transitions();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..14 {
            for x in 0..60 {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn host_screen_shows_bar_and_bound_text() {
        let mut state = AppState::new(HostOptions {
            text: "rust".to_owned(),
            style: SearchBarStyle::CancelButton,
            ..HostOptions::default()
        });

        let screen = draw(&mut state);

        assert!(screen.contains("⌕ rust"));
        assert!(screen.contains("Cancel"));
        assert!(screen.contains("\"rust\""));
        assert!(state.hit_map.cancel_button.is_some());
    }

    #[test]
    fn clicking_recorded_cancel_clears_host_text() {
        let mut state = AppState::new(HostOptions {
            text: "rust".to_owned(),
            style: SearchBarStyle::CancelButton,
            ..HostOptions::default()
        });
        draw(&mut state);
        let cancel = state.hit_map.cancel_button.unwrap();

        state.click(cancel.x + 1, cancel.y + 1);
        state.settle_focus();

        assert_eq!(state.host_text(), "");
        assert!(draw(&mut state).contains("(empty)"));
    }
}
