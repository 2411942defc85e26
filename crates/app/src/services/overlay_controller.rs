//! Overlay controller: owns the modal session and the surface showing it.

use std::cell::RefCell;

use gallery_domain::error::SessionError;
use gallery_domain::id::{BindingId, SessionId};
use gallery_domain::markup::Markup;
use gallery_domain::session::{ModalSession, SessionState};

use crate::ports::OverlaySurface;

/// Single owner of the page's [`ModalSession`].
///
/// Every change to the session goes through this type so that the session
/// state and what the surface shows never drift apart.
pub struct OverlayController<S> {
    surface: S,
    session: RefCell<ModalSession>,
}

impl<S: OverlaySurface> OverlayController<S> {
    /// Create a controller with a closed session.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: RefCell::new(ModalSession::new()),
        }
    }

    /// Open a new session showing `content`, superseding any previous one.
    pub fn open(&self, content: Markup) -> SessionId {
        self.surface.show(&content);
        let session = self.session.borrow_mut().open(content);
        tracing::debug!(%session, "modal session opened");
        session
    }

    /// Replace the content of the current session and show it again.
    pub fn show(&self, content: Markup) -> SessionId {
        self.surface.show(&content);
        let mut current = self.session.borrow_mut();
        let reopened = !current.is_visible();
        let session = current.redisplay(content);
        if reopened {
            tracing::debug!(%session, "response applied to a session that was already closed");
        } else {
            tracing::debug!(%session, "modal content replaced");
        }
        session
    }

    /// Clear and hide the surface. Returns `false` (and leaves the surface
    /// alone) when the session was already closed.
    pub fn hide(&self) -> bool {
        let closed = self.session.borrow_mut().close();
        if closed {
            self.surface.hide();
            tracing::debug!("modal session closed");
        }
        closed
    }

    /// Focus the first usable control of the current content.
    pub fn focus_first_input(&self) {
        if self.is_visible() {
            self.surface.focus_first_input();
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.session.borrow().is_visible()
    }

    /// Snapshot of the session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.borrow().state().clone()
    }

    #[must_use]
    pub fn live_binding(&self) -> Option<BindingId> {
        self.session.borrow().live_binding()
    }

    /// See [`ModalSession::ensure_unbound`].
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the content is not waiting for a bind.
    pub fn ensure_unbound(&self) -> Result<(), SessionError> {
        self.session.borrow().ensure_unbound()
    }

    /// See [`ModalSession::attach`].
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the content is not waiting for a bind.
    pub fn attach(&self, form: Option<BindingId>) -> Result<(), SessionError> {
        self.session.borrow_mut().attach(form)
    }

    /// See [`ModalSession::check_submission`].
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when `binding` is not the live binding.
    pub fn check_submission(&self, binding: BindingId) -> Result<(), SessionError> {
        self.session.borrow().check_submission(binding)
    }
}
