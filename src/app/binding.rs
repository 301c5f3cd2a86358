//! Owned text value paired with a change callback.

use std::fmt;

/// Text the host owns, as seen by the search bar.
///
/// The bar keeps the current value and reports every edit through
/// `on_change`; the host's store is only updated from that callback.
pub struct TextBinding {
    value: String,
    on_change: Box<dyn FnMut(&str)>,
}

impl TextBinding {
    pub fn new(value: impl Into<String>, on_change: impl FnMut(&str) + 'static) -> Self {
        Self {
            value: value.into(),
            on_change: Box::new(on_change),
        }
    }

    /// A binding whose edits are not observed by anyone.
    pub fn detached(value: impl Into<String>) -> Self {
        Self::new(value, |_| {})
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Stores `value` and notifies the owner, even when the value is unchanged.
    pub fn set(&mut self, value: String) {
        self.value = value;
        (self.on_change)(&self.value);
    }
}

impl fmt::Debug for TextBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBinding")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
