//! Application runtime, event loop, and keyboard/mouse handling.

pub mod binding;
pub mod editor;
pub mod focus;
pub mod state;

use crate::app::state::{AppState, HostOptions};
use crate::ui;
use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};
use tracing::info;

const ANIMATION_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Runs the interactive demo host.
pub fn run(options: HostOptions) -> anyhow::Result<()> {
    info!(style = %options.style, appearance = %options.appearance, "starting search bar demo");
    let mut state = AppState::new(options);

    let mut terminal = setup_terminal()?;
    let result = run_event_loop(&mut terminal, &mut state);
    restore_terminal(&mut terminal)?;

    info!(text = %state.host_text(), edits = state.edits(), "search bar demo finished");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
) -> anyhow::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        state.tick(now.duration_since(last_frame));
        last_frame = now;

        state.sync_transitions();
        terminal.draw(|frame| ui::render(frame, state))?;

        if state.should_quit {
            break;
        }

        let timeout = if state.transitions.is_animating() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    handle_key_event(state, key_event);
                }
                Event::Mouse(mouse_event) => handle_mouse_event(state, mouse_event),
                _ => {}
            }
            state.settle_focus();
        }
    }

    Ok(())
}

fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.is_field_focused() {
        handle_field_key_event(state, key);
    } else {
        handle_host_key_event(state, key);
    }
}

fn handle_field_key_event(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.press_escape(),
        KeyCode::Enter | KeyCode::Tab => state.end_editing(),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(ch) => {
            if !ch.is_control() {
                state.type_char(ch);
            }
        }
        _ => {}
    }
}

fn handle_host_key_event(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Enter => state.focus_field(),
        KeyCode::Char('s') => state.toggle_style(),
        KeyCode::Char('a') => state.toggle_appearance(),
        KeyCode::Char('z') => state.cycle_size(),
        _ => {}
    }
}

fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        state.click(mouse.column, mouse.row);
    }
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(out);
    let terminal = Terminal::new(backend).context("failed to create ratatui terminal")?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;

    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}
