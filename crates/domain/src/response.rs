//! Fragment response: the tagged JSON result of every fetch and submit.
//!
//! The server answers with an object whose `action` field selects the
//! payload:
//!
//! ```json
//! { "action": "display",  "html": "<form>...</form>" }
//! { "action": "redirect", "url":  "/albums/5" }
//! ```
//!
//! Anything else (no `action`, an unknown `action`, a missing payload field,
//! or a body that is not a JSON object) is a [`ProtocolError`]. Responses
//! keyed only by the presence of `url` / `html` are not recognised.

use serde_json::Value;

use crate::error::ProtocolError;
use crate::markup::Markup;

const DISPLAY: &str = "display";
const REDIRECT: &str = "redirect";

/// A well-formed server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentResponse {
    /// Show `html` in the overlay and bind its form.
    Display { html: Markup },
    /// Leave the page for `url`.
    Redirect { url: String },
}

impl FragmentResponse {
    /// Parse a raw response body.
    ///
    /// # Errors
    ///
    /// Returns a [`ProtocolError`] when the body is not JSON or does not follow
    /// the tagged `action` protocol.
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }

    /// Interpret an already decoded JSON value.
    ///
    /// # Errors
    ///
    /// See [`FragmentResponse::parse`].
    pub fn from_value(value: &Value) -> Result<Self, ProtocolError> {
        let object = value.as_object().ok_or(ProtocolError::NotAnObject)?;
        let action = match object.get("action") {
            None | Some(Value::Null) => return Err(ProtocolError::MissingAction),
            Some(Value::String(action)) => action.as_str(),
            Some(other) => return Err(ProtocolError::UnknownAction(other.to_string())),
        };

        match action {
            DISPLAY => {
                let html = payload(object, DISPLAY, "html")?;
                Ok(Self::Display {
                    html: Markup::new(html),
                })
            }
            REDIRECT => {
                let url = payload(object, REDIRECT, "url")?;
                if url.trim().is_empty() {
                    return Err(ProtocolError::MissingPayload {
                        action: REDIRECT,
                        field: "url",
                    });
                }
                Ok(Self::Redirect {
                    url: url.to_string(),
                })
            }
            other => Err(ProtocolError::UnknownAction(other.to_string())),
        }
    }

    /// The protocol name of this response's action.
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Display { .. } => DISPLAY,
            Self::Redirect { .. } => REDIRECT,
        }
    }

    /// Check that this response is allowed for the flow that produced it.
    ///
    /// A fragment fetch only ever opens the modal, so `redirect` is rejected
    /// for [`Flow::Fetch`].
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnexpectedAction`] when the action is not
    /// valid for `flow`.
    pub fn admit(self, flow: Flow) -> Result<Self, ProtocolError> {
        match (flow, &self) {
            (Flow::Fetch, Self::Redirect { .. }) => Err(ProtocolError::UnexpectedAction {
                action: self.action(),
                flow: flow.as_str(),
            }),
            _ => Ok(self),
        }
    }
}

fn payload<'a>(
    object: &'a serde_json::Map<String, Value>,
    action: &'static str,
    field: &'static str,
) -> Result<&'a str, ProtocolError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingPayload { action, field })
}

/// Which kind of request produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// `GET` of a fragment after a trigger was activated.
    Fetch,
    /// `POST` of the form bound inside the overlay.
    Submit,
}

impl Flow {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Submit => "submit",
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single effect a response leads to.
#[derive(Debug)]
pub enum Outcome {
    /// Hide the modal and send the whole page to the URL. Terminal.
    Navigate(String),
    /// Replace the modal content, show it, and bind it again.
    Redisplay(Markup),
    /// Report a generic failure and leave the modal as it is.
    Fail(ProtocolError),
}

impl Outcome {
    /// Decide the outcome of a raw response body for the given flow.
    ///
    /// Exactly one variant results for any input.
    #[must_use]
    pub fn from_body(flow: Flow, body: &str) -> Self {
        match FragmentResponse::parse(body).and_then(|response| response.admit(flow)) {
            Ok(FragmentResponse::Display { html }) => Self::Redisplay(html),
            Ok(FragmentResponse::Redirect { url }) => Self::Navigate(url),
            Err(err) => Self::Fail(err),
        }
    }
}
