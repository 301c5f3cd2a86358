//! One-line header naming the demo and its current configuration.

use crate::domain::Appearance;
use crate::ui::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Header payload consumed by the renderer.
#[derive(Debug, Clone)]
pub struct HeaderModel {
    pub app_label: String,
    pub context_label: String,
}

pub fn render(frame: &mut Frame<'_>, area: Rect, model: &HeaderModel, appearance: Appearance) {
    let line = Line::from(vec![
        Span::styled(format!(" {}", model.app_label), theme::title(appearance)),
        Span::styled(format!("  {}", model.context_label), theme::dim(appearance)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
