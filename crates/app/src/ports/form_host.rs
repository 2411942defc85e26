//! Form host port: routes submissions of the form inside the overlay.

use std::rc::Rc;

use gallery_domain::id::BindingId;

/// Gives access to the form inside the current overlay content.
pub trait FormHost {
    /// Locate the single form in the current content and intercept its
    /// submission: default navigation is prevented and the serialised fields
    /// are reported as a form submission tagged with `binding`.
    ///
    /// Any previously installed submit listener is removed first. Returns the
    /// form's declared action URL, or `None` when the content has no form.
    fn bind_form(&self, binding: BindingId) -> Option<String>;

    /// Remove the submit listener, if one is installed.
    fn release_form(&self);
}

impl<T: FormHost> FormHost for Rc<T> {
    fn bind_form(&self, binding: BindingId) -> Option<String> {
        (**self).bind_form(binding)
    }

    fn release_form(&self) {
        (**self).release_form();
    }
}
