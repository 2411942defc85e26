//! Scripted transport: canned or deferred responses per `(method, url)`.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::future::Future;

use gallery_domain::error::TransportError;
use gallery_domain::form::{Method, Request};
use tokio::sync::oneshot;

type Response = Result<String, TransportError>;

/// Resolves a deferred request when the test decides to.
pub struct Responder(oneshot::Sender<Response>);

impl Responder {
    /// Complete the request with a 2xx body.
    pub fn ok(self, body: impl Into<String>) {
        let _ = self.0.send(Ok(body.into()));
    }

    /// Complete the request with a failure.
    pub fn fail(self, error: TransportError) {
        let _ = self.0.send(Err(error));
    }
}

enum Scripted {
    Ready(Response),
    Deferred(oneshot::Receiver<Response>),
}

#[derive(Default)]
pub(crate) struct ScriptedTransport {
    script: RefCell<HashMap<(Method, String), VecDeque<Scripted>>>,
    log: RefCell<Vec<Request>>,
}

impl ScriptedTransport {
    pub(crate) fn push(&self, method: Method, url: &str, response: Response) {
        self.queue(method, url, Scripted::Ready(response));
    }

    pub(crate) fn defer(&self, method: Method, url: &str) -> Responder {
        let (tx, rx) = oneshot::channel();
        self.queue(method, url, Scripted::Deferred(rx));
        Responder(tx)
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.log.borrow().clone()
    }

    fn queue(&self, method: Method, url: &str, scripted: Scripted) {
        self.script
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(scripted);
    }

    pub(crate) fn send(&self, request: &Request) -> impl Future<Output = Response> + use<> {
        self.log.borrow_mut().push(request.clone());
        let next = self
            .script
            .borrow_mut()
            .get_mut(&(request.method, request.url.clone()))
            .and_then(VecDeque::pop_front);
        if next.is_none() {
            tracing::debug!(method = %request.method, url = %request.url, "no scripted response");
        }

        async move {
            match next {
                Some(Scripted::Ready(response)) => response,
                Some(Scripted::Deferred(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(TransportError::Network("request abandoned".to_string()))),
                None => Err(TransportError::Status {
                    status: 404,
                    body: String::new(),
                }),
            }
        }
    }
}
