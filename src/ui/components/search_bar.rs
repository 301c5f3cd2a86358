use crate::app::state::search_bar::SearchBarState;
use crate::domain::{Appearance, SearchBarStyle, SizeCategory};
use crate::ui::theme;
use crate::ui::transition::{Transition, TransitionKind, Transitions};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use serde::Serialize;

pub const SEARCH_ICON: &str = "⌕";
pub const CLEAR_ICON: &str = "⊗";
pub const CANCEL_LABEL: &str = "Cancel";

const ICON_COLUMNS: u16 = 2;
const CLEAR_COLUMNS: u16 = 2;

/// Render tree of a search bar, derived purely from its state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct SearchBarView {
    pub field: FieldView,
    pub cancel_button: Option<CancelButtonView>,
}

/// The rounded input container and everything inside it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FieldView {
    pub icon: &'static str,
    pub content: FieldContent,
    pub editing: bool,
    pub clear_button: Option<ClearButtonView>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldContent {
    Text(String),
    Placeholder(String),
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ClearButtonView {
    pub icon: &'static str,
    pub transition: TransitionKind,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CancelButtonView {
    pub label: &'static str,
    pub transition: TransitionKind,
}

/// Builds the view tree for `state`.
pub fn build(state: &SearchBarState<'_>) -> SearchBarView {
    let show_affordance = state.should_show_clear_affordance();

    let content = if state.text.is_empty() {
        FieldContent::Placeholder(state.placeholder.to_owned())
    } else {
        FieldContent::Text(state.text.to_owned())
    };

    SearchBarView {
        field: FieldView {
            icon: SEARCH_ICON,
            content,
            editing: state.is_editing,
            clear_button: (show_affordance && state.style == SearchBarStyle::XButton).then_some(
                ClearButtonView {
                    icon: CLEAR_ICON,
                    transition: TransitionKind::Fade,
                },
            ),
        },
        cancel_button: (show_affordance && state.style == SearchBarStyle::CancelButton)
            .then_some(CancelButtonView {
                label: CANCEL_LABEL,
                transition: TransitionKind::SlideFromTrailing,
            }),
    }
}

pub struct SearchBarProps<'a> {
    pub view: &'a SearchBarView,
    pub transitions: &'a Transitions,
    pub appearance: Appearance,
    pub size: SizeCategory,
}

/// Screen regions of the tappable parts, as last drawn.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SearchBarHitMap {
    pub field: Rect,
    pub clear_button: Option<Rect>,
    pub cancel_button: Option<Rect>,
}

/// Part of the search bar under a screen position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HitTarget {
    ClearButton,
    CancelButton,
    Field,
}

impl SearchBarHitMap {
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.clear_button.is_some_and(|rect| rect.contains(position)) {
            return Some(HitTarget::ClearButton);
        }
        if self.cancel_button.is_some_and(|rect| rect.contains(position)) {
            return Some(HitTarget::CancelButton);
        }
        self.field.contains(position).then_some(HitTarget::Field)
    }
}

/// Draws `props.view`, including controls that are still animating out.
pub fn render(frame: &mut Frame<'_>, area: Rect, props: SearchBarProps<'_>) -> SearchBarHitMap {
    let appearance = props.appearance;
    frame.render_widget(Block::default().style(theme::background(appearance)), area);

    let height = props.size.bar_height().min(area.height);
    let bar = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };

    let cancel_label = format!(" {CANCEL_LABEL}");
    let cancel_amount = visible_amount(
        props.view.cancel_button.is_some(),
        props.transitions.cancel_button(),
    );
    let cancel_columns = revealed_columns(cancel_label.chars().count(), cancel_amount).min(bar.width);

    let [pill, cancel] = split_trailing(bar, cancel_columns);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::field_border(appearance))
        .style(theme::field(appearance));
    let inner = block.inner(pill);
    frame.render_widget(block, pill);

    let padding = props.size.horizontal_padding();
    let row = Rect {
        x: inner.x.saturating_add(padding),
        y: inner.y.saturating_add(props.size.vertical_padding()),
        width: inner.width.saturating_sub(padding * 2),
        height: inner.height.min(1),
    };

    let clear_amount = visible_amount(
        props.view.field.clear_button.is_some(),
        props.transitions.clear_button(),
    );
    let clear_columns = if clear_amount > 0.0 || props.view.field.clear_button.is_some() {
        CLEAR_COLUMNS
    } else {
        0
    };

    let columns = Layout::horizontal([
        Constraint::Length(ICON_COLUMNS),
        Constraint::Min(0),
        Constraint::Length(clear_columns),
    ])
    .split(row);
    let (icon_area, text_area, clear_area) = (columns[0], columns[1], columns[2]);

    frame.render_widget(
        Paragraph::new(Span::styled(props.view.field.icon, theme::field(appearance))),
        icon_area,
    );
    render_content(frame, text_area, &props.view.field, appearance);

    if clear_columns > 0 {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(CLEAR_ICON, theme::faded(appearance, clear_amount)),
            ]))
            .style(theme::field(appearance)),
            clear_area,
        );
    }

    if cancel_columns > 0 {
        let revealed: String = cancel_label.chars().take(usize::from(cancel_columns)).collect();
        frame.render_widget(
            Paragraph::new(Span::styled(revealed, theme::accent(appearance)))
                .style(theme::background(appearance)),
            Rect {
                y: row.y,
                height: row.height,
                ..cancel
            },
        );
    }

    SearchBarHitMap {
        field: pill,
        clear_button: props
            .view
            .field
            .clear_button
            .as_ref()
            .map(|_| clear_area)
            .filter(|rect| rect.width > 0),
        cancel_button: props
            .view
            .cancel_button
            .as_ref()
            .map(|_| cancel)
            .filter(|rect| rect.width > 0),
    }
}

fn render_content(frame: &mut Frame<'_>, area: Rect, field: &FieldView, appearance: Appearance) {
    let width = usize::from(area.width);
    let (text, style) = match &field.content {
        FieldContent::Text(text) => (text.as_str(), theme::label(appearance)),
        FieldContent::Placeholder(placeholder) => (placeholder.as_str(), theme::placeholder(appearance)),
    };

    let shown = match &field.content {
        // Keep the end of long input in view, leaving a column for the cursor.
        FieldContent::Text(_) => tail(text, width.saturating_sub(usize::from(field.editing))),
        FieldContent::Placeholder(_) => text,
    };

    if field.editing && area.width > 0 {
        let typed = match field.content {
            FieldContent::Text(_) => u16::try_from(columns(shown)).unwrap_or(u16::MAX),
            FieldContent::Placeholder(_) => 0,
        };
        frame.set_cursor_position(Position::new(
            area.x + typed.min(area.width - 1),
            area.y,
        ));
    }

    frame.render_widget(
        Paragraph::new(Span::styled(shown, style)).style(theme::field(appearance)),
        area,
    );
}

/// Terminal columns taken by `text`; wide characters count twice.
fn columns(text: &str) -> usize {
    Span::raw(text).width()
}

/// Longest suffix of `text` that fits in `width` columns.
fn tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        used += columns(&text[index..index + ch.len_utf8()]);
        if used > width {
            break;
        }
        start = index;
    }
    &text[start..]
}

fn visible_amount(in_view: bool, transition: &Transition) -> f32 {
    if transition.is_drawn() {
        transition.amount()
    } else if in_view {
        1.0
    } else {
        0.0
    }
}

fn revealed_columns(full: usize, amount: f32) -> u16 {
    (full as f32 * amount.clamp(0.0, 1.0)).round() as u16
}

fn split_trailing(area: Rect, trailing: u16) -> [Rect; 2] {
    let trailing = trailing.min(area.width);
    [
        Rect {
            width: area.width - trailing,
            ..area
        },
        Rect {
            x: area.x + area.width - trailing,
            width: trailing,
            ..area
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{
        CANCEL_LABEL, CLEAR_ICON, FieldContent, HitTarget, SearchBarProps, build, render, tail,
    };
    use crate::app::state::search_bar::SearchBarState;
    use crate::domain::{Appearance, SearchBarStyle, SizeCategory};
    use crate::ui::transition::Transitions;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;
    use serde_json::json;
    use std::time::Duration;

    fn state<'a>(text: &'a str, editing: bool, style: SearchBarStyle) -> SearchBarState<'a> {
        SearchBarState {
            text,
            is_editing: editing,
            placeholder: "Search",
            style,
        }
    }

    fn draw(state: &SearchBarState<'_>, transitions: &Transitions, width: u16) -> (Vec<String>, super::SearchBarHitMap) {
        let (lines, hit_map, _) = draw_sized(state, transitions, width, SizeCategory::Large);
        (lines, hit_map)
    }

    fn draw_sized(
        state: &SearchBarState<'_>,
        transitions: &Transitions,
        width: u16,
        size: SizeCategory,
    ) -> (Vec<String>, super::SearchBarHitMap, Position) {
        let height = size.bar_height();
        let view = build(state);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hit_map = super::SearchBarHitMap::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                hit_map = render(
                    frame,
                    area,
                    SearchBarProps {
                        view: &view,
                        transitions,
                        appearance: Appearance::Dark,
                        size,
                    },
                );
            })
            .unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        let buffer = terminal.backend().buffer().clone();
        let lines = (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect();
        (lines, hit_map, cursor)
    }

    #[test]
    fn empty_text_shows_placeholder() {
        let view = build(&state("", false, SearchBarStyle::XButton));
        assert_eq!(view.field.content, FieldContent::Placeholder("Search".to_owned()));
        assert!(view.field.clear_button.is_none());
        assert!(view.cancel_button.is_none());
    }

    #[test]
    fn text_replaces_placeholder() {
        let view = build(&state("rust", false, SearchBarStyle::XButton));
        assert_eq!(view.field.content, FieldContent::Text("rust".to_owned()));
    }

    #[test]
    fn each_style_only_ever_shows_its_own_affordance() {
        for text in ["", "abc"] {
            for editing in [false, true] {
                let x = build(&state(text, editing, SearchBarStyle::XButton));
                let cancel = build(&state(text, editing, SearchBarStyle::CancelButton));
                let expected = editing || !text.is_empty();

                assert_eq!(x.field.clear_button.is_some(), expected);
                assert!(x.cancel_button.is_none());
                assert_eq!(cancel.cancel_button.is_some(), expected);
                assert!(cancel.field.clear_button.is_none());
            }
        }
    }

    #[test]
    fn view_serializes_for_inspection() {
        let view = build(&state("abc", true, SearchBarStyle::CancelButton));
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(
            value,
            json!({
                "field": {
                    "icon": "⌕",
                    "content": { "kind": "text", "value": "abc" },
                    "editing": true,
                    "clear_button": null,
                },
                "cancel_button": {
                    "label": "Cancel",
                    "transition": "slide_from_trailing",
                },
            })
        );
    }

    #[test]
    fn renders_clear_icon_inside_the_field() {
        let (lines, hit_map) = draw(
            &state("abc", false, SearchBarStyle::XButton),
            &Transitions::default(),
            30,
        );
        assert!(lines[1].contains("⌕ abc"));
        assert!(lines[1].contains(CLEAR_ICON));
        assert!(!lines[1].contains(CANCEL_LABEL));

        let clear = hit_map.clear_button.unwrap();
        assert_eq!(hit_map.hit(clear.x + 1, clear.y), Some(HitTarget::ClearButton));
        assert!(hit_map.cancel_button.is_none());
    }

    #[test]
    fn renders_cancel_outside_the_field() {
        let (lines, hit_map) = draw(
            &state("abc", false, SearchBarStyle::CancelButton),
            &Transitions::default(),
            30,
        );
        assert!(lines[1].ends_with(" Cancel"));
        assert!(lines[0].trim_end().ends_with('╮'));
        assert!(!lines[1].contains(CLEAR_ICON));

        let cancel = hit_map.cancel_button.unwrap();
        assert_eq!(cancel.width, 7);
        assert_eq!(hit_map.hit(cancel.x + 2, 1), Some(HitTarget::CancelButton));
        assert_eq!(hit_map.hit(2, 1), Some(HitTarget::Field));
    }

    #[test]
    fn placeholder_renders_when_idle() {
        let (lines, hit_map) = draw(
            &state("", false, SearchBarStyle::CancelButton),
            &Transitions::default(),
            30,
        );
        assert!(lines[1].contains("⌕ Search"));
        assert!(!lines[1].contains(CANCEL_LABEL));
        assert_eq!(hit_map.hit(29, 1), Some(HitTarget::Field));
    }

    #[test]
    fn long_text_keeps_its_end_visible() {
        let text = "0123456789abcdefghijklmnopqrstuvwxyz";
        let (lines, _) = draw(&state(text, true, SearchBarStyle::XButton), &Transitions::default(), 24);
        assert!(lines[1].contains("xyz"));
        assert!(!lines[1].contains("0123"));
    }

    #[test]
    fn tail_counts_wide_characters_as_two_columns() {
        assert_eq!(tail("abc", 5), "abc");
        assert_eq!(tail("検索します", 5), "ます");
        assert_eq!(tail("a検索", 3), "索");
        assert_eq!(tail("a検索", 4), "検索");
    }

    #[test]
    fn long_wide_text_keeps_its_end_visible() {
        let text = "日本語のテキストを検索します終わり";
        let (lines, _, cursor) = draw_sized(
            &state(text, true, SearchBarStyle::XButton),
            &Transitions::default(),
            24,
            SizeCategory::Large,
        );

        let row: String = lines[1].chars().filter(|ch| *ch != ' ').collect();
        assert!(row.contains("索します終わり"), "{row}");
        assert!(!row.contains('検'));
        // Text starts at column 4; seven wide characters take fourteen columns.
        assert_eq!(cursor, Position::new(18, 1));
    }

    #[test]
    fn extra_small_size_drops_horizontal_padding() {
        let (lines, _, _) = draw_sized(
            &state("abc", false, SearchBarStyle::XButton),
            &Transitions::default(),
            30,
            SizeCategory::ExtraSmall,
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("│⌕ abc"), "{}", lines[1]);
    }

    #[test]
    fn large_size_pads_one_column() {
        let (lines, _, _) = draw_sized(
            &state("abc", false, SearchBarStyle::XButton),
            &Transitions::default(),
            30,
            SizeCategory::Large,
        );
        assert!(lines[1].starts_with("│ ⌕ abc"), "{}", lines[1]);
    }

    #[test]
    fn largest_size_centres_text_between_blank_rows() {
        let (lines, hit_map, _) = draw_sized(
            &state("abc", false, SearchBarStyle::XButton),
            &Transitions::default(),
            30,
            SizeCategory::ExtraExtraExtraLarge,
        );

        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("│  ⌕ abc"), "{}", lines[2]);
        for blank in [&lines[1], &lines[3]] {
            let inside: String = blank.chars().filter(|ch| !ch.is_whitespace()).collect();
            assert_eq!(inside, "││");
        }
        assert_eq!(hit_map.clear_button.map(|rect| rect.y), Some(2));
    }

    #[test]
    fn sliding_cancel_reveals_leading_columns_first() {
        let mut transitions = Transitions::new(Duration::from_millis(200));
        transitions.observe(&build(&state("", false, SearchBarStyle::CancelButton)));
        let editing = state("", true, SearchBarStyle::CancelButton);
        transitions.observe(&build(&editing));
        transitions.advance(Duration::from_millis(100));

        let (lines, hit_map) = draw(&editing, &transitions, 30);

        let cancel = hit_map.cancel_button.unwrap();
        assert_eq!(cancel.width, 4);
        assert!(lines[1].ends_with(" Can"));
    }

    #[test]
    fn leaving_control_is_drawn_but_not_tappable() {
        let mut transitions = Transitions::new(Duration::from_millis(200));
        transitions.observe(&build(&state("abc", false, SearchBarStyle::XButton)));
        let cleared = state("", false, SearchBarStyle::XButton);
        transitions.observe(&build(&cleared));
        transitions.advance(Duration::from_millis(50));

        let (lines, hit_map) = draw(&cleared, &transitions, 30);

        assert!(lines[1].contains(CLEAR_ICON));
        assert!(hit_map.clear_button.is_none());
    }
}
