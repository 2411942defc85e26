//! Arrow-key listener on the document.

use gallery_app::event::UiEvent;
use gallery_domain::navigation::{Direction, KeyPress};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, Window};

use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::sink::EventSink;

/// Report directional key presses as [`UiEvent::KeyPressed`].
pub(crate) fn listen(window: Window, document: &Document, sink: EventSink) -> Result<Listener, DomError> {
    let focus = document.clone();
    Listener::attach(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(press) = key_press(key, &window, &focus) {
            sink.emit(UiEvent::KeyPressed(press));
        }
    })
}

fn key_press(event: &KeyboardEvent, window: &Window, document: &Document) -> Option<KeyPress> {
    let direction =
        Direction::from_key(&event.key()).or_else(|| Direction::from_key_code(event.key_code()))?;

    let mut press = KeyPress::new(direction).scrolled_to(window.scroll_y().unwrap_or(0.0));
    if event.ctrl_key() || event.alt_key() || event.meta_key() {
        press = press.with_modifier();
    }
    if focus_is_editable(document) {
        press = press.in_editable();
    }
    Some(press)
}

fn focus_is_editable(document: &Document) -> bool {
    let Some(active) = document.active_element() else {
        return false;
    };
    if dom::is_editable_tag(&active.tag_name()) {
        return true;
    }
    active
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable)
}
