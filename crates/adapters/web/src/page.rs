//! Window-level effects: navigation, notices, and the main photo.

use gallery_app::ports::Page;
use web_sys::{Document, Window};

/// [`Page`] over the browser window.
#[derive(Debug, Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
    photo_selector: String,
}

impl DomPage {
    pub(crate) fn new(window: Window, document: Document, photo_selector: &str) -> Self {
        Self {
            window,
            document,
            photo_selector: photo_selector.to_string(),
        }
    }

    fn photo(&self) -> Option<web_sys::Element> {
        self.document
            .query_selector(&self.photo_selector)
            .ok()
            .flatten()
    }
}

impl Page for DomPage {
    fn navigate(&self, url: &str) {
        if let Err(err) = self.window.location().set_href(url) {
            tracing::warn!(%url, error = ?err, "navigation failed");
        }
    }

    fn notify_failure(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(error = ?err, "failed to show notice");
        }
    }

    fn photo_source(&self) -> Option<String> {
        self.photo()?.get_attribute("src")
    }

    fn set_photo_source(&self, src: &str) {
        let Some(photo) = self.photo() else {
            return;
        };
        if let Err(err) = photo.set_attribute("src", src) {
            tracing::warn!(error = ?err, "failed to refresh photo");
        }
    }
}
