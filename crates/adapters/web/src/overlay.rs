//! The overlay as DOM: a wrapper shown and hidden, a content element that
//! receives fragments, and dismiss controls inside the content.

use std::cell::RefCell;

use gallery_app::event::UiEvent;
use gallery_app::ports::OverlaySurface;
use gallery_domain::markup::Markup;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::OverlayConfig;
use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::sink::EventSink;

/// [`OverlaySurface`] over `#modal-wrapper` / `#modal`.
pub struct DomOverlay {
    wrapper: HtmlElement,
    content: Element,
    dismiss_selector: String,
    focus_selector: String,
    sink: EventSink,
    dismiss: RefCell<Vec<Listener>>,
}

impl DomOverlay {
    pub(crate) fn new(
        wrapper: HtmlElement,
        content: Element,
        config: &OverlayConfig,
        sink: EventSink,
    ) -> Self {
        Self {
            wrapper,
            content,
            dismiss_selector: config.dismiss_selector.clone(),
            focus_selector: config.focus_selector.clone(),
            sink,
            dismiss: RefCell::new(Vec::new()),
        }
    }

    fn set_displayed(&self, displayed: bool) {
        let value = if displayed { "block" } else { "none" };
        if let Err(err) = self.wrapper.style().set_property("display", value) {
            tracing::warn!(error = ?err, "failed to toggle overlay");
        }
    }

    fn bind_dismiss(&self) -> Result<(), DomError> {
        let controls = self.content.query_selector_all(&self.dismiss_selector)?;
        let mut slot = self.dismiss.borrow_mut();
        slot.clear();
        for control in dom::elements(&controls) {
            let sink = self.sink.clone();
            slot.push(Listener::attach(&control, "click", move |event| {
                event.prevent_default();
                sink.emit(UiEvent::Dismissed);
            })?);
        }
        Ok(())
    }
}

impl OverlaySurface for DomOverlay {
    fn show(&self, content: &Markup) {
        self.dismiss.borrow_mut().clear();
        self.content.set_inner_html(content.as_str());
        self.set_displayed(true);
        if let Err(err) = self.bind_dismiss() {
            tracing::warn!(error = %err, "failed to bind dismiss controls");
        }
    }

    fn hide(&self) {
        self.dismiss.borrow_mut().clear();
        self.content.set_inner_html("");
        self.set_displayed(false);
    }

    fn focus_first_input(&self) {
        let target = self
            .content
            .query_selector(&self.focus_selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if let Some(input) = target {
            if let Err(err) = input.focus() {
                tracing::warn!(error = ?err, "failed to focus overlay input");
            }
        }
    }
}
