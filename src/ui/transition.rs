//! Appearance and disappearance animations for the clear affordances.
//!
//! The view tree says what is shown; this layer tracks how far along each
//! control is in showing or hiding, fed by visibility changes.

use crate::ui::components::search_bar::SearchBarView;
use serde::Serialize;
use std::time::Duration;
use tracing::trace;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    Fade,
    SlideFromTrailing,
}

/// Where a control is in its show/hide cycle; payloads are the visible amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Hidden,
    Entering(f32),
    Shown,
    Leaving(f32),
}

#[derive(Debug, Clone)]
pub struct Transition {
    kind: TransitionKind,
    phase: Phase,
    duration: Duration,
}

impl Transition {
    pub fn new(kind: TransitionKind, duration: Duration) -> Self {
        Self {
            kind,
            phase: Phase::Hidden,
            duration,
        }
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Visible amount in `[0, 1]`.
    pub fn amount(&self) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Shown => 1.0,
            Phase::Entering(amount) | Phase::Leaving(amount) => amount,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering(_) | Phase::Leaving(_))
    }

    /// Whether anything of the control should be drawn.
    pub fn is_drawn(&self) -> bool {
        !matches!(self.phase, Phase::Hidden)
    }

    /// Jumps straight to the end state for `visible`.
    pub fn snap(&mut self, visible: bool) {
        self.phase = if visible { Phase::Shown } else { Phase::Hidden };
    }

    /// Starts animating toward `visible`, reversing from the current amount mid-flight.
    pub fn set_visible(&mut self, visible: bool) {
        if self.duration.is_zero() {
            self.snap(visible);
            return;
        }

        let next = match (visible, self.phase) {
            (true, Phase::Hidden) => Phase::Entering(0.0),
            (true, Phase::Leaving(amount)) => Phase::Entering(amount),
            (false, Phase::Shown) => Phase::Leaving(1.0),
            (false, Phase::Entering(amount)) => Phase::Leaving(amount),
            (_, phase) => phase,
        };
        if next != self.phase {
            trace!(kind = ?self.kind, visible, "transition started");
        }
        self.phase = next;
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.duration.is_zero() {
            return;
        }
        let step = elapsed.as_secs_f32() / self.duration.as_secs_f32();

        self.phase = match self.phase {
            Phase::Entering(amount) if amount + step >= 1.0 => Phase::Shown,
            Phase::Entering(amount) => Phase::Entering(amount + step),
            Phase::Leaving(amount) if amount - step <= 0.0 => Phase::Hidden,
            Phase::Leaving(amount) => Phase::Leaving(amount - step),
            phase => phase,
        };
    }
}

/// Transition state for both clear affordances of one mounted search bar.
#[derive(Debug, Clone)]
pub struct Transitions {
    clear_button: Transition,
    cancel_button: Transition,
    observed: bool,
}

impl Transitions {
    pub fn new(duration: Duration) -> Self {
        Self {
            clear_button: Transition::new(TransitionKind::Fade, duration),
            cancel_button: Transition::new(TransitionKind::SlideFromTrailing, duration),
            observed: false,
        }
    }

    /// Feeds the latest view; the first view after mounting is shown without animation.
    pub fn observe(&mut self, view: &SearchBarView) {
        let clear_visible = view.field.clear_button.is_some();
        let cancel_visible = view.cancel_button.is_some();

        if !self.observed {
            self.clear_button.snap(clear_visible);
            self.cancel_button.snap(cancel_visible);
            self.observed = true;
            return;
        }

        self.clear_button.set_visible(clear_visible);
        self.cancel_button.set_visible(cancel_visible);
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.clear_button.advance(elapsed);
        self.cancel_button.advance(elapsed);
    }

    pub fn is_animating(&self) -> bool {
        self.clear_button.is_animating() || self.cancel_button.is_animating()
    }

    pub fn clear_button(&self) -> &Transition {
        &self.clear_button
    }

    pub fn cancel_button(&self) -> &Transition {
        &self.cancel_button
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, Transition, TransitionKind, Transitions};
    use crate::app::state::search_bar::SearchBarState;
    use crate::domain::SearchBarStyle;
    use crate::ui::components::search_bar::build;
    use std::time::Duration;

    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn fade_reaches_shown_after_duration() {
        let mut transition = Transition::new(TransitionKind::Fade, Duration::from_millis(200));
        transition.set_visible(true);
        assert_eq!(transition.phase(), Phase::Entering(0.0));

        transition.advance(MS_100);
        assert!((transition.amount() - 0.5).abs() < 1e-4);
        assert!(transition.is_animating());

        transition.advance(MS_100);
        assert_eq!(transition.phase(), Phase::Shown);
    }

    #[test]
    fn reversal_keeps_current_amount() {
        let mut transition =
            Transition::new(TransitionKind::SlideFromTrailing, Duration::from_millis(400));
        transition.set_visible(true);
        transition.advance(MS_100);

        transition.set_visible(false);
        assert!(matches!(transition.phase(), Phase::Leaving(amount) if (amount - 0.25).abs() < 1e-4));

        transition.advance(MS_100);
        assert_eq!(transition.phase(), Phase::Hidden);
        assert!(!transition.is_drawn());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut transition = Transition::new(TransitionKind::Fade, Duration::ZERO);
        transition.set_visible(true);
        assert_eq!(transition.phase(), Phase::Shown);
        transition.set_visible(false);
        assert_eq!(transition.phase(), Phase::Hidden);
    }

    #[test]
    fn first_observation_snaps_then_changes_animate() {
        let mut transitions = Transitions::new(Duration::from_millis(200));
        let shown = build(&SearchBarState {
            text: "abc",
            is_editing: false,
            placeholder: "Search",
            style: SearchBarStyle::CancelButton,
        });
        let hidden = build(&SearchBarState {
            text: "",
            is_editing: false,
            placeholder: "Search",
            style: SearchBarStyle::CancelButton,
        });

        transitions.observe(&shown);
        assert_eq!(transitions.cancel_button().phase(), Phase::Shown);
        assert!(!transitions.is_animating());

        transitions.observe(&hidden);
        assert_eq!(transitions.cancel_button().phase(), Phase::Leaving(1.0));
        assert_eq!(transitions.clear_button().phase(), Phase::Hidden);

        transitions.advance(Duration::from_millis(250));
        assert_eq!(transitions.cancel_button().phase(), Phase::Hidden);
    }

    #[test]
    fn repeated_observation_of_same_view_does_not_restart() {
        let mut transitions = Transitions::new(Duration::from_millis(200));
        let empty = build(&SearchBarState {
            text: "",
            is_editing: false,
            placeholder: "Search",
            style: SearchBarStyle::XButton,
        });
        let editing = build(&SearchBarState {
            text: "",
            is_editing: true,
            placeholder: "Search",
            style: SearchBarStyle::XButton,
        });

        transitions.observe(&empty);
        transitions.observe(&editing);
        transitions.advance(MS_100);
        transitions.observe(&editing);

        assert!((transitions.clear_button().amount() - 0.5).abs() < 1e-4);
    }
}
