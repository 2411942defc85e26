//! Intercepts submission of the form inside the overlay content.

use std::cell::RefCell;

use gallery_app::event::UiEvent;
use gallery_app::ports::FormHost;
use gallery_domain::form::FormSubmission;
use gallery_domain::id::BindingId;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

use crate::dom::Listener;
use crate::error::DomError;
use crate::sink::EventSink;

/// [`FormHost`] over the overlay content element.
///
/// Holds at most one submit listener: binding a form removes the previous
/// listener first.
pub struct DomForms {
    content: Element,
    sink: EventSink,
    submit: RefCell<Option<Listener>>,
}

impl DomForms {
    pub(crate) fn new(content: Element, sink: EventSink) -> Self {
        Self {
            content,
            sink,
            submit: RefCell::new(None),
        }
    }

    fn find_form(&self) -> Option<HtmlFormElement> {
        self.content
            .query_selector("form")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    }
}

/// Successful controls of `form` in document order. File inputs are skipped.
pub(crate) fn form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, DomError> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?
        .ok_or_else(|| DomError::JavaScript("FormData is not iterable".to_string()))?;

    let mut fields = Vec::new();
    for entry in entries {
        let pair = js_sys::Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(fields)
}

impl FormHost for DomForms {
    fn bind_form(&self, binding: BindingId) -> Option<String> {
        self.release_form();
        let form = self.find_form()?;
        let action = form.get_attribute("action").unwrap_or_default();

        let sink = self.sink.clone();
        let target = form.clone();
        let declared = action.clone();
        let listener = Listener::attach(&form, "submit", move |event| {
            event.prevent_default();
            match form_fields(&target) {
                Ok(fields) => sink.emit(UiEvent::FormSubmitted {
                    binding,
                    submission: FormSubmission {
                        action: declared.clone(),
                        fields,
                    },
                }),
                Err(err) => tracing::warn!(%binding, error = %err, "failed to read form fields"),
            }
        });

        match listener {
            Ok(listener) => {
                *self.submit.borrow_mut() = Some(listener);
                Some(action)
            }
            Err(err) => {
                tracing::warn!(%binding, error = %err, "failed to intercept form submission");
                None
            }
        }
    }

    fn release_form(&self) {
        self.submit.borrow_mut().take();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn forms(html: &str) -> DomForms {
        DomForms::new(fixture::mount(html), EventSink::default())
    }

    #[wasm_bindgen_test]
    fn should_bind_declared_action() {
        let forms = forms("<form action='/albums/5/edit/'><input name='name'></form>");
        assert_eq!(
            forms.bind_form(BindingId::new()).as_deref(),
            Some("/albums/5/edit/")
        );
        assert!(forms.submit.borrow().is_some());
    }

    #[wasm_bindgen_test]
    fn should_keep_single_listener_across_rebinds() {
        let forms = forms("<form action='/a/'></form>");
        let _ = forms.bind_form(BindingId::new());
        let _ = forms.bind_form(BindingId::new());
        assert!(forms.submit.borrow().is_some());

        forms.release_form();
        assert!(forms.submit.borrow().is_none());
    }

    #[wasm_bindgen_test]
    fn should_not_bind_formless_content() {
        let forms = forms("<p>Deleted.</p>");
        assert!(forms.bind_form(BindingId::new()).is_none());
        assert!(forms.submit.borrow().is_none());
    }

    #[wasm_bindgen_test]
    fn should_read_fields_in_document_order() {
        let root = fixture::mount(
            "<form><input name='name' value='Summer'>\
             <select name='album'><option value='5' selected>Trip</option></select>\
             <input type='checkbox' name='public' value='on'>\
             <input name='tags' value='a'><input name='tags' value='b'></form>",
        );
        let form: HtmlFormElement = root.query_selector("form").unwrap().unwrap().dyn_into().unwrap();

        let fields = form_fields(&form).unwrap();
        let expected = [("name", "Summer"), ("album", "5"), ("tags", "a"), ("tags", "b")];
        assert_eq!(
            fields,
            expected
                .iter()
                .map(|(n, v)| ((*n).to_string(), (*v).to_string()))
                .collect::<Vec<_>>()
        );
    }
}
