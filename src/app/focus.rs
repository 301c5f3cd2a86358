//! Input focus ownership and the targetless "resign focus" broadcast.

use crate::domain::ResponderId;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Capability to relinquish input focus from whichever responder holds it.
pub trait FocusController {
    fn resign_active(&self);
}

/// Focus bookkeeping for a host screen.
///
/// Clones share state, so the host keeps one handle and injects another
/// into the search bar. Resign requests are queued and applied by the host
/// through [`ResponderChain::settle`].
#[derive(Debug, Clone, Default)]
pub struct ResponderChain {
    inner: Rc<RefCell<ResponderState>>,
}

#[derive(Debug, Default)]
struct ResponderState {
    active: Option<ResponderId>,
    pending_resign: bool,
    resign_signals: u64,
}

impl ResponderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `responder` the active one; returns false when it already was.
    pub fn become_active(&self, responder: ResponderId) -> bool {
        let mut state = self.inner.borrow_mut();
        if state.active == Some(responder) {
            return false;
        }
        debug!(?responder, "responder became active");
        state.active = Some(responder);
        true
    }

    pub fn active(&self) -> Option<ResponderId> {
        self.inner.borrow().active
    }

    /// Total resign signals received since creation.
    pub fn resign_signals(&self) -> u64 {
        self.inner.borrow().resign_signals
    }

    pub fn has_pending_resign(&self) -> bool {
        self.inner.borrow().pending_resign
    }

    /// Applies a queued resign request.
    ///
    /// Returns the responder that lost focus. With nobody active the request
    /// is absorbed and `None` is returned.
    pub fn settle(&self) -> Option<ResponderId> {
        let mut state = self.inner.borrow_mut();
        if !std::mem::take(&mut state.pending_resign) {
            return None;
        }

        let resigned = state.active.take();
        match resigned {
            Some(responder) => debug!(?responder, "responder resigned"),
            None => trace!("resign signal absorbed with no active responder"),
        }
        resigned
    }

    /// Drops focus directly, as the host does for a click outside the field.
    pub fn clear(&self) -> Option<ResponderId> {
        self.inner.borrow_mut().active.take()
    }
}

impl FocusController for ResponderChain {
    fn resign_active(&self) {
        let mut state = self.inner.borrow_mut();
        state.pending_resign = true;
        state.resign_signals += 1;
        trace!(signals = state.resign_signals, "resign signal queued");
    }
}
