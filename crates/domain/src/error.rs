//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level error for everything the modal workflow can fail on.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// A request could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (offline, CORS, aborted, ...).
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("server answered with HTTP {status}")]
    Status {
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Raw text worth logging alongside the failure notice.
    #[must_use]
    pub fn diagnostic(&self) -> &str {
        match self {
            Self::Network(reason) | Self::Body(reason) => reason,
            Self::Status { body, .. } => body,
        }
    }
}

/// A response arrived but does not follow the tagged `action` protocol.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("response body is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("response has no `action` field")]
    MissingAction,

    #[error("unrecognised action `{0}`")]
    UnknownAction(String),

    #[error("`{action}` response is missing its `{field}` field")]
    MissingPayload {
        action: &'static str,
        field: &'static str,
    },

    #[error("`{action}` is not valid for a {flow} response")]
    UnexpectedAction {
        action: &'static str,
        flow: &'static str,
    },
}

/// An operation was attempted in a session state that does not allow it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no modal session is open")]
    NotOpen,

    #[error("the current content is already bound")]
    AlreadyBound,

    #[error("binding {0} is no longer live")]
    StaleBinding(crate::id::BindingId),

    #[error("the current content has no form to submit")]
    NoForm,
}
