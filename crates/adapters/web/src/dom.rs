//! Small DOM helpers shared by the adapters.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::DomError;

pub(crate) fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

/// Element with `id`, as an [`HtmlElement`].
pub(crate) fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongElement {
            id: id.to_string(),
            expected: "an HTML element",
        })
}

/// Elements of a node list, in document order.
pub(crate) fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

/// An event listener that is removed from its target when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Whether a focused element with `tag` (upper or lower case) takes text input.
pub(crate) fn is_editable_tag(tag: &str) -> bool {
    ["input", "textarea", "select"]
        .iter()
        .any(|editable| tag.eq_ignore_ascii_case(editable))
}

/// Detached-from-layout scratch elements for browser tests.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod fixture {
    use web_sys::{Document, Element};

    pub(crate) fn document() -> Document {
        super::document(&super::window().unwrap()).unwrap()
    }

    /// Append a `<div>` holding `html` to the body and return it.
    pub(crate) fn mount(html: &str) -> Element {
        let document = document();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }
}
