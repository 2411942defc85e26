//! Modal session: the state machine behind the single page-wide overlay.
//!
//! ```text
//!            open / redisplay            attach
//!  Closed ───────────────────▶ Unbound ─────────▶ Bound
//!    ▲                            ▲                 │
//!    │          close             │   redisplay     │
//!    └────────────────────────────┴─────────────────┘
//! ```
//!
//! Injecting content always lands in `Unbound`, dropping whatever binding
//! existed before. Only `attach` reaches `Bound`, and only from `Unbound`, so
//! every injection is bound exactly once.

use crate::error::SessionError;
use crate::id::{BindingId, SessionId};
use crate::markup::Markup;

/// Where the modal session currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing is shown.
    #[default]
    Closed,
    /// Content is injected and visible but its form is not bound yet.
    Unbound { session: SessionId, content: Markup },
    /// Content is bound. `form` is `None` for fragments without a form.
    Bound {
        session: SessionId,
        content: Markup,
        form: Option<BindingId>,
    },
}

/// The single modal session of a page.
#[derive(Debug, Default)]
pub struct ModalSession {
    state: SessionState,
}

impl ModalSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, SessionState::Closed)
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        match &self.state {
            SessionState::Closed => None,
            SessionState::Unbound { session, .. } | SessionState::Bound { session, .. } => {
                Some(*session)
            }
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<&Markup> {
        match &self.state {
            SessionState::Closed => None,
            SessionState::Unbound { content, .. } | SessionState::Bound { content, .. } => {
                Some(content)
            }
        }
    }

    /// The binding whose submissions are currently accepted.
    #[must_use]
    pub fn live_binding(&self) -> Option<BindingId> {
        match &self.state {
            SessionState::Bound { form, .. } => *form,
            _ => None,
        }
    }

    /// Start a new session with `content`, superseding any previous one.
    pub fn open(&mut self, content: Markup) -> SessionId {
        let session = SessionId::new();
        self.state = SessionState::Unbound { session, content };
        session
    }

    /// Replace the content of the current session.
    ///
    /// When the session was closed in the meantime a new one is opened: late
    /// responses are applied rather than dropped.
    pub fn redisplay(&mut self, content: Markup) -> SessionId {
        match self.session_id() {
            Some(session) => {
                self.state = SessionState::Unbound { session, content };
                session
            }
            None => self.open(content),
        }
    }

    /// Check that the current content is waiting to be bound.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotOpen`] when closed and
    /// [`SessionError::AlreadyBound`] when the content was bound already.
    pub fn ensure_unbound(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Unbound { .. } => Ok(()),
            SessionState::Closed => Err(SessionError::NotOpen),
            SessionState::Bound { .. } => Err(SessionError::AlreadyBound),
        }
    }

    /// Record the outcome of binding the current content.
    ///
    /// # Errors
    ///
    /// Same as [`ModalSession::ensure_unbound`].
    pub fn attach(&mut self, form: Option<BindingId>) -> Result<(), SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Unbound { session, content } => {
                self.state = SessionState::Bound {
                    session,
                    content,
                    form,
                };
                Ok(())
            }
            SessionState::Closed => Err(SessionError::NotOpen),
            bound @ SessionState::Bound { .. } => {
                self.state = bound;
                Err(SessionError::AlreadyBound)
            }
        }
    }

    /// Close the session. Returns `false` when it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_visible();
        self.state = SessionState::Closed;
        was_open
    }

    /// Check that a submission from `binding` may proceed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotOpen`] when closed, [`SessionError::NoForm`]
    /// when the content has no form, or [`SessionError::StaleBinding`] when
    /// `binding` belongs to replaced content.
    pub fn check_submission(&self, binding: BindingId) -> Result<(), SessionError> {
        match &self.state {
            SessionState::Closed => Err(SessionError::NotOpen),
            SessionState::Bound { form: Some(live), .. } if *live == binding => Ok(()),
            SessionState::Bound { form: None, .. } => Err(SessionError::NoForm),
            _ => Err(SessionError::StaleBinding(binding)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(html: &str) -> Markup {
        Markup::new(html)
    }

    #[test]
    fn should_start_closed() {
        let session = ModalSession::new();
        assert_eq!(session.state(), &SessionState::Closed);
        assert!(!session.is_visible());
        assert!(session.content().is_none());
    }

    #[test]
    fn should_open_unbound() {
        let mut session = ModalSession::new();
        let id = session.open(markup("<form></form>"));
        assert!(matches!(
            session.state(),
            SessionState::Unbound { session: s, .. } if *s == id
        ));
        assert!(session.live_binding().is_none());
    }

    #[test]
    fn should_bind_after_open() {
        let mut session = ModalSession::new();
        session.open(markup("<form></form>"));
        let binding = BindingId::new();
        session.attach(Some(binding)).unwrap();
        assert_eq!(session.live_binding(), Some(binding));
        assert!(session.check_submission(binding).is_ok());
    }

    #[test]
    fn should_reject_second_attach_on_same_content() {
        let mut session = ModalSession::new();
        session.open(markup("<form></form>"));
        let first = BindingId::new();
        session.attach(Some(first)).unwrap();

        let result = session.attach(Some(BindingId::new()));
        assert_eq!(result, Err(SessionError::AlreadyBound));
        assert_eq!(session.live_binding(), Some(first));
    }

    #[test]
    fn should_report_whether_content_awaits_binding() {
        let mut session = ModalSession::new();
        assert_eq!(session.ensure_unbound(), Err(SessionError::NotOpen));
        session.open(markup("<form></form>"));
        assert_eq!(session.ensure_unbound(), Ok(()));
        session.attach(None).unwrap();
        assert_eq!(session.ensure_unbound(), Err(SessionError::AlreadyBound));
    }

    #[test]
    fn should_reject_attach_when_closed() {
        let mut session = ModalSession::new();
        assert_eq!(session.attach(None), Err(SessionError::NotOpen));
    }

    #[test]
    fn should_drop_binding_on_redisplay() {
        let mut session = ModalSession::new();
        let id = session.open(markup("<form>1</form>"));
        let old = BindingId::new();
        session.attach(Some(old)).unwrap();

        let same = session.redisplay(markup("<form>2</form>"));
        assert_eq!(same, id);
        assert!(session.live_binding().is_none());
        assert_eq!(
            session.check_submission(old),
            Err(SessionError::StaleBinding(old))
        );
    }

    #[test]
    fn should_reopen_when_redisplaying_closed_session() {
        let mut session = ModalSession::new();
        session.redisplay(markup("<p>late</p>"));
        assert!(session.is_visible());
        assert_eq!(session.content(), Some(&markup("<p>late</p>")));
    }

    #[test]
    fn should_supersede_previous_session_on_open() {
        let mut session = ModalSession::new();
        let first = session.open(markup("<form>a</form>"));
        session.attach(Some(BindingId::new())).unwrap();
        let second = session.open(markup("<form>b</form>"));
        assert_ne!(first, second);
        assert_eq!(session.content(), Some(&markup("<form>b</form>")));
        assert!(session.live_binding().is_none());
    }

    #[test]
    fn should_close_idempotently() {
        let mut session = ModalSession::new();
        session.open(markup("<p></p>"));
        assert!(session.close());
        assert!(!session.close());
        assert_eq!(session.state(), &SessionState::Closed);
    }

    #[test]
    fn should_reject_submission_for_formless_content() {
        let mut session = ModalSession::new();
        session.open(markup("<p>Deleted.</p>"));
        session.attach(None).unwrap();
        assert_eq!(
            session.check_submission(BindingId::new()),
            Err(SessionError::NoForm)
        );
    }

    #[test]
    fn should_reject_submission_when_closed() {
        let session = ModalSession::new();
        assert_eq!(
            session.check_submission(BindingId::new()),
            Err(SessionError::NotOpen)
        );
    }
}
