//! # gallery-adapter-headless
//!
//! In-memory page that implements every `gallery-app` port, for driving the
//! modal workflow without a browser.
//!
//! ## Simulated page
//!
//! | Port | Behaviour |
//! |------|-----------|
//! | `Transport` | Scripted responses per `(method, url)`, optionally deferred until the test resolves them |
//! | `OverlaySurface` | Holds the injected markup and visibility; dismiss is live while the markup has a `.cancel` control |
//! | `FormHost` | Finds the `<form>` in the markup; one submit listener on the current form |
//! | `Page` | Records navigations and notices; holds the main photo source |
//! | `Clock` | Manual clock, advanced by the test |
//!
//! Replacing the overlay content drops listeners attached to the old content,
//! the same way replacing DOM nodes does in a browser.
//!
//! ## Dependency rule
//!
//! Depends on `gallery-app` (port traits) and `gallery-domain` only.

mod scan;
mod transport;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use chrono::Duration;
use gallery_app::event::UiEvent;
use gallery_app::ports::{Clock, FormHost, OverlaySurface, Page, Transport};
use gallery_app::services::trigger_registry::TriggerRegistry;
use gallery_app::workflow::{ModalWorkflow, Ports};
use gallery_domain::error::TransportError;
use gallery_domain::form::{FormSubmission, Method, Request};
use gallery_domain::id::BindingId;
use gallery_domain::markup::Markup;
use gallery_domain::navigation::NavigationIndex;
use gallery_domain::time::Timestamp;

pub use transport::Responder;

/// Workflow running entirely on a [`HeadlessPage`].
pub type HeadlessWorkflow = ModalWorkflow<
    Rc<HeadlessPage>,
    Rc<HeadlessPage>,
    Rc<HeadlessPage>,
    Rc<HeadlessPage>,
    Rc<HeadlessPage>,
>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SubmitListener {
    binding: BindingId,
    action: String,
}

/// A page living in memory.
pub struct HeadlessPage {
    transport: transport::ScriptedTransport,
    content: RefCell<String>,
    visible: Cell<bool>,
    dismiss_bound: Cell<bool>,
    submit_listeners: RefCell<Vec<SubmitListener>>,
    focus_count: Cell<usize>,
    navigations: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
    photo: RefCell<Option<String>>,
    now: Cell<Timestamp>,
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self {
            transport: transport::ScriptedTransport::default(),
            content: RefCell::new(String::new()),
            visible: Cell::new(false),
            dismiss_bound: Cell::new(false),
            submit_listeners: RefCell::new(Vec::new()),
            focus_count: Cell::new(0),
            navigations: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
            photo: RefCell::new(None),
            now: Cell::new(Timestamp::default()),
        }
    }
}

impl HeadlessPage {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Build a workflow whose every port is this page.
    #[must_use]
    pub fn workflow(
        self: &Rc<Self>,
        triggers: TriggerRegistry,
        index: NavigationIndex,
    ) -> HeadlessWorkflow {
        ModalWorkflow::new(
            Ports {
                transport: Rc::clone(self),
                surface: Rc::clone(self),
                forms: Rc::clone(self),
                page: Rc::clone(self),
                clock: Rc::clone(self),
            },
            triggers,
            index,
        )
    }

    // -- transport script ---------------------------------------------------

    /// Answer the next `method url` request with a 2xx `body`.
    pub fn respond(&self, method: Method, url: &str, body: impl Into<String>) {
        self.transport.push(method, url, Ok(body.into()));
    }

    /// Answer the next `method url` request with a failure.
    pub fn fail(&self, method: Method, url: &str, error: TransportError) {
        self.transport.push(method, url, Err(error));
    }

    /// Hold the next `method url` request until the returned responder fires.
    #[must_use]
    pub fn defer(&self, method: Method, url: &str) -> Responder {
        self.transport.defer(method, url)
    }

    /// Every request sent so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        self.transport.requests()
    }

    // -- user actions -------------------------------------------------------

    /// Submit the form in the overlay, as a click on its submit button would.
    ///
    /// One event is produced per live listener on the current form.
    #[must_use]
    pub fn submit_form(&self, fields: &[(&str, &str)]) -> Vec<UiEvent> {
        self.submit_listeners
            .borrow()
            .iter()
            .map(|listener| UiEvent::FormSubmitted {
                binding: listener.binding,
                submission: FormSubmission {
                    action: listener.action.clone(),
                    fields: fields
                        .iter()
                        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                        .collect(),
                },
            })
            .collect()
    }

    /// Click the overlay's dismiss control, if one is bound.
    #[must_use]
    pub fn click_dismiss(&self) -> Option<UiEvent> {
        self.dismiss_bound.get().then_some(UiEvent::Dismissed)
    }

    /// Move the manual clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Put a main photo on the page.
    pub fn set_photo(&self, src: &str) {
        *self.photo.borrow_mut() = Some(src.to_string());
    }

    // -- observations -------------------------------------------------------

    #[must_use]
    pub fn overlay_content(&self) -> String {
        self.content.borrow().clone()
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.visible.get()
    }

    /// Number of submit listeners attached to the form currently shown.
    #[must_use]
    pub fn submit_listener_count(&self) -> usize {
        self.submit_listeners.borrow().len()
    }

    #[must_use]
    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    #[must_use]
    pub fn photo(&self) -> Option<String> {
        self.photo.borrow().clone()
    }
}

impl Transport for HeadlessPage {
    fn send(&self, request: &Request) -> impl Future<Output = Result<String, TransportError>> {
        self.transport.send(request)
    }
}

impl OverlaySurface for HeadlessPage {
    fn show(&self, content: &Markup) {
        *self.content.borrow_mut() = content.as_str().to_string();
        // The old form nodes are gone, and so are their listeners.
        self.submit_listeners.borrow_mut().clear();
        self.visible.set(true);
        self.dismiss_bound.set(scan::has_class(content.as_str(), "cancel"));
    }

    fn hide(&self) {
        self.content.borrow_mut().clear();
        self.submit_listeners.borrow_mut().clear();
        self.visible.set(false);
        self.dismiss_bound.set(false);
    }

    fn focus_first_input(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }
}

impl FormHost for HeadlessPage {
    fn bind_form(&self, binding: BindingId) -> Option<String> {
        let action = scan::form_action(&self.content.borrow())?;
        let mut listeners = self.submit_listeners.borrow_mut();
        listeners.clear();
        listeners.push(SubmitListener {
            binding,
            action: action.clone(),
        });
        Some(action)
    }

    fn release_form(&self) {
        self.submit_listeners.borrow_mut().clear();
    }
}

impl Page for HeadlessPage {
    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_string());
    }

    fn notify_failure(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn photo_source(&self) -> Option<String> {
        self.photo()
    }

    fn set_photo_source(&self, src: &str) {
        self.set_photo(src);
    }
}

impl Clock for HeadlessPage {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_bind_form_found_in_content() {
        let page = HeadlessPage::new();
        page.show(&Markup::new("<form action='/a/'></form>"));
        let binding = BindingId::new();
        assert_eq!(page.bind_form(binding).as_deref(), Some("/a/"));
        assert_eq!(page.submit_listener_count(), 1);

        let events = page.submit_form(&[("name", "x")]);
        assert!(matches!(
            &events[..],
            [UiEvent::FormSubmitted { binding: b, .. }] if *b == binding
        ));
    }

    #[test]
    fn should_drop_listeners_with_replaced_content() {
        let page = HeadlessPage::new();
        page.show(&Markup::new("<form action='/a/'></form>"));
        let _ = page.bind_form(BindingId::new());
        page.show(&Markup::new("<form action='/b/'></form>"));
        assert_eq!(page.submit_listener_count(), 0);
    }

    #[test]
    fn should_not_bind_formless_content() {
        let page = HeadlessPage::new();
        page.show(&Markup::new("<p>Deleted.</p>"));
        assert!(page.bind_form(BindingId::new()).is_none());
        assert_eq!(page.submit_listener_count(), 0);
    }

    #[test]
    fn should_only_dismiss_while_shown() {
        let page = HeadlessPage::new();
        assert!(page.click_dismiss().is_none());
        page.show(&Markup::new("<p></p>"));
        assert!(page.click_dismiss().is_none());
        page.show(&Markup::new("<a class='cancel'>Cancel</a>"));
        assert_eq!(page.click_dismiss(), Some(UiEvent::Dismissed));
        page.hide();
        assert!(page.click_dismiss().is_none());
    }

    #[tokio::test]
    async fn should_answer_unscripted_request_with_not_found() {
        let page = HeadlessPage::new();
        let request = Request::get("/nowhere/");
        let result = page.send(&request).await;
        assert!(matches!(
            result,
            Err(TransportError::Status { status: 404, .. })
        ));
        assert_eq!(page.requests().len(), 1);
    }

    #[tokio::test]
    async fn should_resolve_deferred_request_on_demand() {
        let page = HeadlessPage::new();
        let responder = page.defer(Method::Get, "/slow/");
        let request = Request::get("/slow/");
        let pending = page.send(&request);
        responder.ok("late");
        assert_eq!(pending.await, Ok("late".to_string()));
    }

    #[test]
    fn should_advance_manual_clock() {
        let page = HeadlessPage::new();
        let before = page.now();
        page.advance(Duration::milliseconds(250));
        assert_eq!(page.now() - before, Duration::milliseconds(250));
    }
}
