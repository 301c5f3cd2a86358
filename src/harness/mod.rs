//! Visual harness for deterministic rendering snapshots.

use crate::app::binding::TextBinding;
use crate::app::focus::ResponderChain;
use crate::app::state::search_bar::SearchBar;
use crate::domain::{Appearance, SizeCategory};
use crate::fixtures::{self, PreviewCase};
use crate::ui::components::search_bar::{self, SearchBarProps, SearchBarView};
use crate::ui::transition::Transitions;
use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde::Serialize;

/// Preview frame size, in terminal cells.
pub const PREVIEW_WIDTH: u16 = 48;
pub const PREVIEW_HEIGHT: u16 = 5;

#[derive(Debug, Serialize)]
struct PreviewRecord {
    name: String,
    appearance: Appearance,
    size: SizeCategory,
    view: SearchBarView,
}

/// Renders every preview case into plain text under `=== name ===` headers.
pub fn render_preview_dump(width: u16) -> anyhow::Result<String> {
    let mut out = String::new();
    for case in fixtures::preview_cases() {
        let frame = render_case_to_string(&case, width, PREVIEW_HEIGHT)
            .with_context(|| format!("failed to render preview `{}`", case.name))?;
        out.push_str(&format!("=== {} ===\n{frame}\n", case.name));
    }
    Ok(out)
}

/// Serializes the view tree of every preview case.
pub fn render_preview_json() -> anyhow::Result<String> {
    let records: Vec<PreviewRecord> = fixtures::preview_cases()
        .into_iter()
        .map(|case| {
            let view = mount(&case).view();
            PreviewRecord {
                name: case.name,
                appearance: case.appearance,
                size: case.size,
                view,
            }
        })
        .collect();

    serde_json::to_string_pretty(&records).context("failed to serialize preview views")
}

fn mount(case: &PreviewCase) -> SearchBar {
    SearchBar::new(TextBinding::detached(case.text), ResponderChain::new()).with_style(case.style)
}

fn render_case_to_string(case: &PreviewCase, width: u16, height: u16) -> anyhow::Result<String> {
    let bar = mount(case);
    let view = bar.view();
    let mut transitions = Transitions::default();
    transitions.observe(&view);

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).context("failed to create test terminal")?;

    terminal
        .draw(|frame| {
            let area = frame.area();
            search_bar::render(
                frame,
                area,
                SearchBarProps {
                    view: &view,
                    transitions: &transitions,
                    appearance: case.appearance,
                    size: case.size,
                },
            );
        })
        .context("failed to render frame")?;

    let buffer = terminal.backend().buffer().clone();

    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{PREVIEW_WIDTH, render_preview_dump, render_preview_json};
    use crate::fixtures::preview_cases;

    #[test]
    fn dump_contains_every_preview() {
        let dump = render_preview_dump(PREVIEW_WIDTH).expect("render should succeed");
        for case in preview_cases() {
            assert!(dump.contains(&format!("=== {} ===", case.name)));
        }
        assert!(dump.contains("=== Light, cancel text ==="));
        assert!(dump.contains("=== Dark, cancel text ==="));
    }

    #[test]
    fn dump_shows_placeholder_and_affordances() {
        let dump = render_preview_dump(PREVIEW_WIDTH).expect("render should succeed");
        let cancel = dump
            .split("=== Dark, cancel text ===")
            .nth(1)
            .expect("cancel preview present");
        assert!(cancel.contains("⌕ text"));
        assert!(cancel.contains("Cancel"));
        assert!(dump.contains("⌕ Search"));
        assert!(dump.contains("⊗"));
    }

    #[test]
    fn json_lists_view_trees() {
        let json = render_preview_json().expect("serialize should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), preview_cases().len());
        let last = records.last().unwrap();
        assert_eq!(last["name"], "Dark, cancel text");
        assert_eq!(last["appearance"], "dark");
        assert_eq!(last["view"]["cancel_button"]["label"], "Cancel");
        assert!(records[0]["view"]["field"]["clear_button"].is_null());
    }
}
