//! HTTP transport wrapping `gloo-net`.
//!
//! Every request is marked as AJAX so the server renders fragments instead of
//! full pages. POST requests also forward the CSRF token from its cookie.

use std::future::Future;

use gallery_app::ports::Transport;
use gallery_domain::error::TransportError;
use gallery_domain::form::{Method, Request};
use gloo_net::http::Request as HttpRequest;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::CsrfConfig;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Headers attached to `request`, given the current CSRF token.
pub(crate) fn headers(
    request: &Request,
    csrf: &CsrfConfig,
    token: Option<&str>,
) -> Vec<(String, String)> {
    let mut headers = vec![
        ("X-Requested-With".to_string(), "XMLHttpRequest".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ];
    if request.method == Method::Post {
        if let Some(token) = token {
            headers.push((csrf.header.clone(), token.to_string()));
        }
        if request.form.is_some() {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
        }
    }
    headers
}

/// Value of cookie `name` in a `document.cookie` string.
pub(crate) fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// [`Transport`] backed by the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    csrf: CsrfConfig,
}

impl GlooTransport {
    #[must_use]
    pub fn new(csrf: CsrfConfig) -> Self {
        Self { csrf }
    }

    fn csrf_token(&self) -> Option<String> {
        let cookies = web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        cookie_value(&cookies, &self.csrf.cookie)
    }

    fn build(&self, request: &Request) -> Result<HttpRequest, TransportError> {
        let token = match request.method {
            Method::Post => self.csrf_token(),
            Method::Get => None,
        };
        let builder = match request.method {
            Method::Get => HttpRequest::get(&request.url),
            Method::Post => HttpRequest::post(&request.url),
        };
        let builder = headers(request, &self.csrf, token.as_deref())
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        match request.body() {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|err| TransportError::Network(err.to_string()))
    }
}

impl Transport for GlooTransport {
    fn send(&self, request: &Request) -> impl Future<Output = Result<String, TransportError>> {
        let built = self.build(request);
        let url = request.url.clone();
        async move {
            let response = built?
                .send()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| TransportError::Body(err.to_string()))?;
            if response.ok() {
                Ok(body)
            } else {
                tracing::debug!(%url, status, "request failed");
                Err(TransportError::Status { status, body })
            }
        }
    }
}
