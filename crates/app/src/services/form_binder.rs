//! Fragment form binder: ties the form inside the overlay to the transport.
//!
//! Each injection of content gets exactly one bind. The binder hands out a
//! fresh [`BindingId`] every time, and only submissions carrying the live id
//! are turned into requests, so a listener left behind on replaced content
//! can never reach the server.

use std::cell::RefCell;

use gallery_domain::error::SessionError;
use gallery_domain::form::{FormSubmission, Request};
use gallery_domain::id::BindingId;

use crate::ports::{FormHost, OverlaySurface};
use crate::services::overlay_controller::OverlayController;

/// Binds the form of the current overlay content.
pub struct FormBinder<H> {
    host: H,
    /// Declared action of the live form.
    action: RefCell<Option<String>>,
}

impl<H: FormHost> FormBinder<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            action: RefCell::new(None),
        }
    }

    /// Bind the content currently shown by `overlay`.
    ///
    /// Content without a form is bound as read-only and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the overlay is closed or its content
    /// was bound already; the host is left untouched in that case.
    pub fn bind<S: OverlaySurface>(
        &self,
        overlay: &OverlayController<S>,
    ) -> Result<Option<BindingId>, SessionError> {
        overlay.ensure_unbound()?;

        let binding = BindingId::new();
        match self.host.bind_form(binding) {
            Some(action) => {
                overlay.attach(Some(binding))?;
                tracing::debug!(%binding, %action, "form bound");
                *self.action.borrow_mut() = Some(action);
                Ok(Some(binding))
            }
            None => {
                overlay.attach(None)?;
                tracing::debug!("content has no form, bound read-only");
                *self.action.borrow_mut() = None;
                Ok(None)
            }
        }
    }

    /// Turn a submission of `binding` into the request to send.
    ///
    /// An empty `action` on the submission falls back to the action recorded
    /// when the form was bound.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when `binding` is not the live binding.
    pub fn prepare<S: OverlaySurface>(
        &self,
        overlay: &OverlayController<S>,
        binding: BindingId,
        mut submission: FormSubmission,
    ) -> Result<Request, SessionError> {
        overlay.check_submission(binding)?;
        if submission.action.is_empty() {
            if let Some(action) = self.action.borrow().as_ref() {
                submission.action.clone_from(action);
            }
        }
        Ok(Request::submit(submission))
    }

    /// Drop the current binding, e.g. when the overlay is dismissed.
    pub fn release(&self) {
        if self.action.borrow_mut().take().is_some() {
            self.host.release_form();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeForms, RecordingSurface};
    use gallery_domain::form::Method;
    use gallery_domain::markup::Markup;
    use std::rc::Rc;

    struct Fixture {
        overlay: OverlayController<Rc<RecordingSurface>>,
        binder: FormBinder<Rc<FakeForms>>,
        forms: Rc<FakeForms>,
    }

    fn fixture(action: Option<&str>) -> Fixture {
        let forms = Rc::new(FakeForms::with_action(action));
        Fixture {
            overlay: OverlayController::new(Rc::new(RecordingSurface::default())),
            binder: FormBinder::new(Rc::clone(&forms)),
            forms,
        }
    }

    #[test]
    fn should_bind_form_in_fresh_content() {
        let fx = fixture(Some("/albums/new/"));
        fx.overlay.open(Markup::new("<form action='/albums/new/'></form>"));

        let binding = fx.binder.bind(&fx.overlay).unwrap().unwrap();
        assert_eq!(fx.overlay.live_binding(), Some(binding));
        assert_eq!(fx.forms.live_listener(), Some(binding));
        let request = fx
            .binder
            .prepare(&fx.overlay, binding, FormSubmission::default())
            .unwrap();
        assert_eq!(request.url, "/albums/new/");
    }

    #[test]
    fn should_treat_formless_content_as_read_only() {
        let fx = fixture(None);
        fx.overlay.open(Markup::new("<p>Done.</p>"));

        let result = fx.binder.bind(&fx.overlay).unwrap();
        assert!(result.is_none());
        assert!(fx.overlay.live_binding().is_none());
        assert!(fx.forms.live_listener().is_none());
    }

    #[test]
    fn should_refuse_to_bind_twice_without_touching_host() {
        let fx = fixture(Some("/a/"));
        fx.overlay.open(Markup::new("<form></form>"));
        fx.binder.bind(&fx.overlay).unwrap();

        let result = fx.binder.bind(&fx.overlay);
        assert_eq!(result, Err(SessionError::AlreadyBound));
        assert_eq!(fx.forms.bind_calls(), 1);
    }

    #[test]
    fn should_refuse_to_bind_closed_overlay() {
        let fx = fixture(Some("/a/"));
        assert_eq!(fx.binder.bind(&fx.overlay), Err(SessionError::NotOpen));
        assert_eq!(fx.forms.bind_calls(), 0);
    }

    #[test]
    fn should_prepare_post_to_form_action() {
        let fx = fixture(Some("/albums/5/edit/"));
        fx.overlay.open(Markup::new("<form></form>"));
        let binding = fx.binder.bind(&fx.overlay).unwrap().unwrap();

        let submission = FormSubmission::new("/albums/5/edit/").field("name", "Trip");
        let request = fx.binder.prepare(&fx.overlay, binding, submission).unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/albums/5/edit/");
    }

    #[test]
    fn should_fall_back_to_bound_action() {
        let fx = fixture(Some("/people/2/merge/"));
        fx.overlay.open(Markup::new("<form></form>"));
        let binding = fx.binder.bind(&fx.overlay).unwrap().unwrap();

        let request = fx
            .binder
            .prepare(&fx.overlay, binding, FormSubmission::default())
            .unwrap();
        assert_eq!(request.url, "/people/2/merge/");
    }

    #[test]
    fn should_reject_submission_from_replaced_content() {
        let fx = fixture(Some("/a/"));
        fx.overlay.open(Markup::new("<form>1</form>"));
        let old = fx.binder.bind(&fx.overlay).unwrap().unwrap();
        fx.overlay.show(Markup::new("<form>2</form>"));
        let new = fx.binder.bind(&fx.overlay).unwrap().unwrap();

        assert_ne!(old, new);
        let stale = fx
            .binder
            .prepare(&fx.overlay, old, FormSubmission::new("/a/"));
        assert_eq!(stale, Err(SessionError::StaleBinding(old)));
        assert_eq!(fx.forms.live_listener(), Some(new));
    }

    #[test]
    fn should_release_listener_once() {
        let fx = fixture(Some("/a/"));
        fx.overlay.open(Markup::new("<form></form>"));
        fx.binder.bind(&fx.overlay).unwrap();

        fx.binder.release();
        fx.binder.release();
        assert_eq!(fx.forms.release_calls(), 1);
        assert!(fx.forms.live_listener().is_none());
    }
}
