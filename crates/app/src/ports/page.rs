//! Page port: effects on the whole document outside the overlay.

use std::rc::Rc;

/// The surrounding page.
pub trait Page {
    /// Send the browser to `url`.
    fn navigate(&self, url: &str);

    /// Show a blocking failure notice to the user.
    fn notify_failure(&self, message: &str);

    /// Current source of the main photo, if the page displays one.
    fn photo_source(&self) -> Option<String>;

    /// Point the main photo at `src`.
    fn set_photo_source(&self, src: &str);
}

impl<T: Page> Page for Rc<T> {
    fn navigate(&self, url: &str) {
        (**self).navigate(url);
    }

    fn notify_failure(&self, message: &str) {
        (**self).notify_failure(message);
    }

    fn photo_source(&self) -> Option<String> {
        (**self).photo_source()
    }

    fn set_photo_source(&self, src: &str) {
        (**self).set_photo_source(src);
    }
}
