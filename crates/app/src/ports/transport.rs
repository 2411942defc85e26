//! Transport port: one asynchronous request, one raw response body.

use std::future::Future;
use std::rc::Rc;

use gallery_domain::error::TransportError;
use gallery_domain::form::Request;

/// Issues requests to the server.
///
/// A successful result is the raw body of a 2xx response; interpreting it is
/// left to the caller. Non-2xx answers and network failures are
/// [`TransportError`]s.
pub trait Transport {
    /// Send `request` and resolve to the response body.
    fn send(&self, request: &Request) -> impl Future<Output = Result<String, TransportError>>;
}

impl<T: Transport> Transport for Rc<T> {
    fn send(&self, request: &Request) -> impl Future<Output = Result<String, TransportError>> {
        (**self).send(request)
    }
}
