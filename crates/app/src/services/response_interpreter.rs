//! Response interpreter: turns a response into exactly one effect.
//!
//! | outcome | effect |
//! |---|---|
//! | navigate | release the form, hide the overlay, send the page to the URL |
//! | redisplay | inject the markup, show it, bind it again |
//! | failure | one blocking notice; overlay untouched |
//!
//! Transport failures and protocol errors end up in the same notice; the raw
//! body or error text only goes to the log.

use gallery_domain::error::{GalleryError, TransportError};
use gallery_domain::id::BindingId;
use gallery_domain::response::{Flow, Outcome};

use crate::ports::{FormHost, OverlaySurface, Page};
use crate::services::form_binder::FormBinder;
use crate::services::overlay_controller::OverlayController;

/// Notice shown for any failed request.
pub const DEFAULT_FAILURE_NOTICE: &str = "Error processing request. Please try again later.";

/// What applying a response did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The page is navigating away; the session is over.
    Navigated,
    /// New content is shown and bound (`None` for read-only content).
    Redisplayed { binding: Option<BindingId> },
    /// A failure notice was shown.
    Failed,
}

/// Applies responses to the overlay, the binder and the page.
pub struct ResponseInterpreter<P> {
    page: P,
    notice: String,
}

impl<P: Page> ResponseInterpreter<P> {
    pub fn new(page: P) -> Self {
        Self {
            page,
            notice: DEFAULT_FAILURE_NOTICE.to_string(),
        }
    }

    /// Replace the failure notice text.
    #[must_use]
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = notice.into();
        self
    }

    /// Apply the result of a request made for `flow`.
    pub fn apply<S, H>(
        &self,
        flow: Flow,
        result: Result<String, TransportError>,
        overlay: &OverlayController<S>,
        binder: &FormBinder<H>,
    ) -> Applied
    where
        S: OverlaySurface,
        H: FormHost,
    {
        let body = match result {
            Ok(body) => body,
            Err(err) => {
                let raw = err.diagnostic().to_owned();
                self.report_failure(flow.as_str(), &GalleryError::from(err), &raw);
                return Applied::Failed;
            }
        };

        match Outcome::from_body(flow, &body) {
            Outcome::Navigate(url) => {
                binder.release();
                overlay.hide();
                tracing::info!(%flow, %url, "navigating");
                self.page.navigate(&url);
                Applied::Navigated
            }
            Outcome::Redisplay(html) => {
                match flow {
                    Flow::Fetch => overlay.open(html),
                    Flow::Submit => overlay.show(html),
                };
                let binding = match binder.bind(overlay) {
                    Ok(binding) => binding,
                    Err(err) => {
                        self.report_failure(flow.as_str(), &GalleryError::from(err), "");
                        return Applied::Failed;
                    }
                };
                if flow == Flow::Fetch {
                    overlay.focus_first_input();
                }
                Applied::Redisplayed { binding }
            }
            Outcome::Fail(err) => {
                self.report_failure(flow.as_str(), &GalleryError::from(err), &body);
                Applied::Failed
            }
        }
    }

    /// Log `error` with the raw response and show the failure notice.
    pub fn report_failure(&self, context: &str, error: &GalleryError, raw: &str) {
        tracing::warn!(context, error = %error, raw, "request failed");
        self.page.notify_failure(&self.notice);
    }
}
