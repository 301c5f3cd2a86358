use crate::app::binding::TextBinding;
use crate::app::focus::FocusController;
use crate::domain::{DEFAULT_PLACEHOLDER, SearchBarStyle};
use crate::ui::components::search_bar::{self, SearchBarView};
use std::fmt;
use tracing::{debug, info};

/// Snapshot of everything the search bar renders from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SearchBarState<'a> {
    pub text: &'a str,
    pub is_editing: bool,
    pub placeholder: &'a str,
    pub style: SearchBarStyle,
}

impl SearchBarState<'_> {
    /// A clear affordance shows while editing or while there is text to clear.
    pub fn should_show_clear_affordance(&self) -> bool {
        self.is_editing || !self.text.is_empty()
    }
}

/// Inputs the search bar reacts to.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchBarEvent {
    /// The text field gained (`true`) or lost (`false`) focus.
    EditingChanged(bool),
    Insert(char),
    Backspace,
    ReplaceText(String),
    ClearIconTapped,
    CancelTapped,
}

/// Search field with a magnifying-glass icon and a style-dependent clear affordance.
pub struct SearchBar {
    text: TextBinding,
    is_editing: bool,
    placeholder: String,
    style: SearchBarStyle,
    focus: Box<dyn FocusController>,
}

impl SearchBar {
    pub fn new(text: TextBinding, focus: impl FocusController + 'static) -> Self {
        Self {
            text,
            is_editing: false,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            style: SearchBarStyle::default(),
            focus: Box::new(focus),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_style(mut self, style: SearchBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        self.text.get()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn style(&self) -> SearchBarStyle {
        self.style
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn state(&self) -> SearchBarState<'_> {
        SearchBarState {
            text: self.text.get(),
            is_editing: self.is_editing,
            placeholder: &self.placeholder,
            style: self.style,
        }
    }

    pub fn should_show_clear_affordance(&self) -> bool {
        self.state().should_show_clear_affordance()
    }

    /// Builds the current view tree.
    pub fn view(&self) -> SearchBarView {
        search_bar::build(&self.state())
    }

    pub fn handle(&mut self, event: SearchBarEvent) {
        match event {
            SearchBarEvent::EditingChanged(editing) => self.editing_changed(editing),
            SearchBarEvent::Insert(ch) => self.insert_char(ch),
            SearchBarEvent::Backspace => self.backspace(),
            SearchBarEvent::ReplaceText(text) => self.replace_text(text),
            SearchBarEvent::ClearIconTapped => self.tap_clear_icon(),
            SearchBarEvent::CancelTapped => self.tap_cancel(),
        }
    }

    pub fn editing_changed(&mut self, editing: bool) {
        if self.is_editing != editing {
            debug!(editing, "search bar editing changed");
        }
        self.is_editing = editing;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut text = self.text.get().to_owned();
        text.push(ch);
        self.text.set(text);
    }

    pub fn backspace(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let mut text = self.text.get().to_owned();
        text.pop();
        self.text.set(text);
    }

    pub fn replace_text(&mut self, text: String) {
        self.text.set(text);
    }

    /// Activates the inline clear icon, if it is part of the current view.
    pub fn tap_clear_icon(&mut self) {
        if self.view().field.clear_button.is_none() {
            debug!("ignoring tap on clear icon that is not shown");
            return;
        }
        self.cancel();
    }

    /// Activates the trailing Cancel button, if it is part of the current view.
    pub fn tap_cancel(&mut self) {
        if self.view().cancel_button.is_none() {
            debug!("ignoring tap on cancel button that is not shown");
            return;
        }
        self.cancel();
    }

    /// Clears the text and asks the active responder to give up focus.
    ///
    /// The resign signal is sent even if the field no longer holds focus.
    pub fn cancel(&mut self) {
        info!(style = %self.style, cleared = self.text.get().chars().count(), "search cancelled");
        self.text.set(String::new());
        self.focus.resign_active();
    }
}

impl fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBar")
            .field("text", &self.text)
            .field("is_editing", &self.is_editing)
            .field("placeholder", &self.placeholder)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}
