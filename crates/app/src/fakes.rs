//! In-memory port implementations shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;

use chrono::{TimeZone, Utc};
use gallery_domain::error::TransportError;
use gallery_domain::form::Request;
use gallery_domain::id::BindingId;
use gallery_domain::markup::Markup;
use gallery_domain::time::Timestamp;

use crate::ports::{Clock, FormHost, OverlaySurface, Page, Transport};

#[derive(Default)]
pub struct RecordingSurface {
    content: RefCell<String>,
    visible: Cell<bool>,
    show_calls: Cell<usize>,
    hide_calls: Cell<usize>,
    focus_calls: Cell<usize>,
}

impl RecordingSurface {
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn show_calls(&self) -> usize {
        self.show_calls.get()
    }

    pub fn hide_calls(&self) -> usize {
        self.hide_calls.get()
    }

    pub fn focus_calls(&self) -> usize {
        self.focus_calls.get()
    }
}

impl OverlaySurface for RecordingSurface {
    fn show(&self, content: &Markup) {
        *self.content.borrow_mut() = content.as_str().to_string();
        self.visible.set(true);
        self.show_calls.set(self.show_calls.get() + 1);
    }

    fn hide(&self) {
        self.content.borrow_mut().clear();
        self.visible.set(false);
        self.hide_calls.set(self.hide_calls.get() + 1);
    }

    fn focus_first_input(&self) {
        self.focus_calls.set(self.focus_calls.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeForms {
    action: Option<String>,
    live: Cell<Option<BindingId>>,
    bind_calls: Cell<usize>,
    release_calls: Cell<usize>,
}

impl FakeForms {
    pub fn with_action(action: Option<&str>) -> Self {
        Self {
            action: action.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn live_listener(&self) -> Option<BindingId> {
        self.live.get()
    }

    pub fn bind_calls(&self) -> usize {
        self.bind_calls.get()
    }

    pub fn release_calls(&self) -> usize {
        self.release_calls.get()
    }
}

impl FormHost for FakeForms {
    fn bind_form(&self, binding: BindingId) -> Option<String> {
        self.bind_calls.set(self.bind_calls.get() + 1);
        self.live.set(self.action.as_ref().map(|_| binding));
        self.action.clone()
    }

    fn release_form(&self) {
        self.release_calls.set(self.release_calls.get() + 1);
        self.live.set(None);
    }
}

#[derive(Default)]
pub struct RecordingPage {
    navigations: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
    photo: RefCell<Option<String>>,
}

impl RecordingPage {
    pub fn with_photo(src: &str) -> Self {
        Self {
            photo: RefCell::new(Some(src.to_string())),
            ..Self::default()
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn photo(&self) -> Option<String> {
        self.photo.borrow().clone()
    }
}

impl Page for RecordingPage {
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
        *self.photo.borrow_mut() = Some(src.to_string());
    }
}

#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<String, TransportError>>>,
    sent: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub fn respond(&self, response: Result<String, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn sent(&self) -> Vec<Request> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &Request) -> impl Future<Output = Result<String, TransportError>> {
        self.sent.borrow_mut().push(request.clone());
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())));
        async move { response }
    }
}

pub struct FixedClock(Timestamp);

impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        Self(Utc.timestamp_millis_opt(millis).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
