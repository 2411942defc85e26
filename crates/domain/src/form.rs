//! Form submissions and the transport requests built from them.

use serde::{Deserialize, Serialize};

/// The serialised fields of a form, ready to be posted to its `action`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    /// The form's declared `action` URL.
    pub action: String,
    /// Successful controls in document order. Names may repeat.
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Encode the fields as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

/// HTTP method of a [`Request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A single request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// Body for form posts; `None` for fetches and fire-once actions.
    pub form: Option<FormSubmission>,
}

impl Request {
    /// Fetch a fragment.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            form: None,
        }
    }

    /// Post with no body.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            form: None,
        }
    }

    /// Post a form to its declared action.
    #[must_use]
    pub fn submit(form: FormSubmission) -> Self {
        Self {
            method: Method::Post,
            url: form.action.clone(),
            form: Some(form),
        }
    }

    /// Urlencoded body, if any.
    #[must_use]
    pub fn body(&self) -> Option<String> {
        self.form.as_ref().map(FormSubmission::encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_fields_in_order() {
        let form = FormSubmission::new("/albums/new/")
            .field("name", "Summer 2014")
            .field("tags", "beach&sun")
            .field("tags", "100%");
        assert_eq!(form.encode(), "name=Summer+2014&tags=beach%26sun&tags=100%25");
    }

    #[test]
    fn should_encode_empty_form_as_empty_body() {
        assert_eq!(FormSubmission::new("/x/").encode(), "");
    }

    #[test]
    fn should_target_form_action_when_submitting() {
        let form = FormSubmission::new("/albums/5/edit/").field("name", "Trip");
        let request = Request::submit(form);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/albums/5/edit/");
        assert_eq!(request.body().as_deref(), Some("name=Trip"));
    }

    #[test]
    fn should_build_bodiless_requests() {
        assert_eq!(Request::get("/a/").body(), None);
        assert_eq!(Request::post("/b/").method.to_string(), "POST");
    }
}
