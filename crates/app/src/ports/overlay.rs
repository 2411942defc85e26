//! Overlay port: the single modal surface of the page.

use std::rc::Rc;

use gallery_domain::markup::Markup;

/// The page-wide modal container and its content injection point.
pub trait OverlaySurface {
    /// Replace the content with `content`, make the surface visible, and bind
    /// the dismiss control found in the new content.
    ///
    /// The surface holds at most one dismiss handler: binding replaces the
    /// previous one instead of adding to it.
    fn show(&self, content: &Markup);

    /// Empty the content, hide the surface, and drop the dismiss handler.
    fn hide(&self);

    /// Focus the first enabled text input or select inside the content.
    fn focus_first_input(&self);
}

impl<T: OverlaySurface> OverlaySurface for Rc<T> {
    fn show(&self, content: &Markup) {
        (**self).show(content);
    }

    fn hide(&self) {
        (**self).hide();
    }

    fn focus_first_input(&self) {
        (**self).focus_first_input();
    }
}
