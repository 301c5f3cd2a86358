//! Footer hints for the current interaction mode.

use crate::app::state::AppState;
use crate::ui::components::footer::Hint;

pub fn build(state: &AppState) -> Vec<Hint> {
    if state.is_field_focused() {
        return field_hints(state);
    }

    vec![
        Hint::new("/", "focus search"),
        Hint::new("s", "switch style"),
        Hint::new("a", "appearance"),
        Hint::new("z", "size"),
        Hint::new("q", "quit"),
    ]
}

fn field_hints(state: &AppState) -> Vec<Hint> {
    let view = state.view();
    let mut hints = vec![
        Hint::new("type", "edit text"),
        Hint::new("backspace", "delete"),
    ];

    if view.field.clear_button.is_some() {
        hints.push(Hint::new("esc", "clear"));
    } else if view.cancel_button.is_some() {
        hints.push(Hint::new("esc", "cancel"));
    }
    hints.push(Hint::new("enter/tab", "done"));
    hints
}
