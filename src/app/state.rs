//! Demo host state: the text store, focus chain, and mounted search bar.

pub mod search_bar;

use crate::app::binding::TextBinding;
use crate::app::focus::ResponderChain;
use crate::domain::{Appearance, ResponderId, SearchBarStyle, SizeCategory};
use crate::ui::components::search_bar::{HitTarget, SearchBarHitMap, SearchBarView};
use crate::ui::transition::Transitions;
use search_bar::{SearchBar, SearchBarEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

/// Startup options for the host screen.
#[derive(Debug, Clone)]
pub struct HostOptions {
    pub text: String,
    pub placeholder: String,
    pub style: SearchBarStyle,
    pub appearance: Appearance,
    pub size: SizeCategory,
    pub animation: Duration,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            placeholder: crate::domain::DEFAULT_PLACEHOLDER.to_owned(),
            style: SearchBarStyle::default(),
            appearance: Appearance::default(),
            size: SizeCategory::default(),
            animation: crate::ui::transition::DEFAULT_DURATION,
        }
    }
}

/// What the host knows about its text; only the bar's change callback writes here.
#[derive(Debug, Clone, Default)]
pub struct HostModel {
    pub text: String,
    pub edits: u64,
}

#[derive(Debug)]
pub struct AppState {
    pub bar: SearchBar,
    pub transitions: Transitions,
    pub responders: ResponderChain,
    pub appearance: Appearance,
    pub size: SizeCategory,
    pub hit_map: SearchBarHitMap,
    pub should_quit: bool,
    model: Rc<RefCell<HostModel>>,
    placeholder: String,
    animation: Duration,
}

impl AppState {
    pub fn new(options: HostOptions) -> Self {
        let model = Rc::new(RefCell::new(HostModel {
            text: options.text,
            edits: 0,
        }));
        let responders = ResponderChain::new();
        let bar = mount_bar(&model, &responders, &options.placeholder, options.style);

        Self {
            bar,
            transitions: Transitions::new(options.animation),
            responders,
            appearance: options.appearance,
            size: options.size,
            hit_map: SearchBarHitMap::default(),
            should_quit: false,
            model,
            placeholder: options.placeholder,
            animation: options.animation,
        }
    }

    pub fn host_text(&self) -> String {
        self.model.borrow().text.clone()
    }

    pub fn edits(&self) -> u64 {
        self.model.borrow().edits
    }

    pub fn is_field_focused(&self) -> bool {
        self.responders.active() == Some(ResponderId::SearchField)
    }

    pub fn view(&self) -> SearchBarView {
        self.bar.view()
    }

    pub fn focus_field(&mut self) {
        if self.responders.become_active(ResponderId::SearchField) {
            self.bar.handle(SearchBarEvent::EditingChanged(true));
        }
    }

    /// Ends editing without touching the text.
    pub fn end_editing(&mut self) {
        if self.responders.clear() == Some(ResponderId::SearchField) {
            self.bar.handle(SearchBarEvent::EditingChanged(false));
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if self.is_field_focused() {
            self.bar.handle(SearchBarEvent::Insert(ch));
        }
    }

    pub fn backspace(&mut self) {
        if self.is_field_focused() {
            self.bar.handle(SearchBarEvent::Backspace);
        }
    }

    /// Escape activates whichever clear affordance is on screen.
    ///
    /// With neither shown, editing ends the same way Enter ends it, without a resign signal.
    pub fn press_escape(&mut self) {
        let view = self.bar.view();
        if view.field.clear_button.is_some() {
            self.bar.handle(SearchBarEvent::ClearIconTapped);
        } else if view.cancel_button.is_some() {
            self.bar.handle(SearchBarEvent::CancelTapped);
        } else {
            self.end_editing();
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        match self.hit_map.hit(column, row) {
            Some(HitTarget::ClearButton) => self.bar.handle(SearchBarEvent::ClearIconTapped),
            Some(HitTarget::CancelButton) => self.bar.handle(SearchBarEvent::CancelTapped),
            Some(HitTarget::Field) => self.focus_field(),
            None => self.end_editing(),
        }
    }

    /// Applies any resign signal the bar sent while handling the last event.
    pub fn settle_focus(&mut self) {
        if self.responders.settle() == Some(ResponderId::SearchField) {
            self.bar.handle(SearchBarEvent::EditingChanged(false));
        }
    }

    /// Re-mounts the bar with the other style; the host keeps its text.
    pub fn toggle_style(&mut self) {
        let style = self.bar.style().toggled();
        self.responders.clear();
        self.bar = mount_bar(&self.model, &self.responders, &self.placeholder, style);
        self.transitions = Transitions::new(self.animation);
        info!(%style, "search bar remounted");
    }

    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
        debug!(appearance = %self.appearance, "appearance changed");
    }

    pub fn cycle_size(&mut self) {
        self.size = self.size.next();
        debug!(size = %self.size, "size category changed");
    }

    /// Feeds the current view to the transition layer.
    pub fn sync_transitions(&mut self) {
        let view = self.bar.view();
        self.transitions.observe(&view);
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.transitions.advance(elapsed);
    }
}

fn mount_bar(
    model: &Rc<RefCell<HostModel>>,
    responders: &ResponderChain,
    placeholder: &str,
    style: SearchBarStyle,
) -> SearchBar {
    let sink = Rc::clone(model);
    let binding = TextBinding::new(model.borrow().text.clone(), move |text| {
        let mut model = sink.borrow_mut();
        model.text = text.to_owned();
        model.edits += 1;
    });

    SearchBar::new(binding, responders.clone())
        .with_placeholder(placeholder)
        .with_style(style)
}
