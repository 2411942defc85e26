//! Discovers declarative triggers and directional anchors in the page.

use gallery_app::event::UiEvent;
use gallery_app::services::trigger_registry::TriggerRegistry;
use gallery_domain::navigation::{Direction, NavigationAnchor, NavigationIndex};
use gallery_domain::trigger::TriggerDescriptor;
use web_sys::{Document, Element};

use crate::config::TriggerConfig;
use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::sink::EventSink;

/// Triggers found in the page, with their click listeners.
pub(crate) struct Triggers {
    pub(crate) registry: TriggerRegistry,
    pub(crate) listeners: Vec<Listener>,
}

/// Register every `[data-modal]` element and intercept its clicks.
///
/// Elements with an unknown flow or without a target are skipped.
pub(crate) fn triggers(
    document: &Document,
    config: &TriggerConfig,
    sink: &EventSink,
) -> Result<Triggers, DomError> {
    let found = document.query_selector_all(&format!("[{}]", config.modal_attribute))?;
    let mut descriptors = Vec::new();
    let mut listeners = Vec::new();

    for element in dom::elements(&found) {
        let value = element
            .get_attribute(&config.modal_attribute)
            .unwrap_or_default();
        let Some(kind) = config.flow_kind(&value) else {
            tracing::warn!(%value, "unknown trigger kind, skipped");
            continue;
        };
        let Some(url) = target_url(&element) else {
            tracing::warn!(%kind, "trigger without href or data-url, skipped");
            continue;
        };

        let descriptor = TriggerDescriptor::new(kind, url);
        let id = descriptor.id;
        let sink = sink.clone();
        listeners.push(Listener::attach(&element, "click", move |event| {
            event.prevent_default();
            sink.emit(UiEvent::TriggerActivated(id));
        })?);
        descriptors.push(descriptor);
    }

    tracing::debug!(count = descriptors.len(), "triggers registered");
    Ok(Triggers {
        registry: TriggerRegistry::new(descriptors),
        listeners,
    })
}

/// `href`, or `data-url` for elements that are not links.
fn target_url(element: &Element) -> Option<String> {
    ["href", "data-url"]
        .iter()
        .filter_map(|name| element.get_attribute(name))
        .find(|url| !url.is_empty())
}

/// Collect `[data-navigate]` anchors in document order.
pub(crate) fn navigation(document: &Document, attribute: &str) -> Result<NavigationIndex, DomError> {
    let found = document.query_selector_all(&format!("[{attribute}]"))?;
    let anchors = dom::elements(&found).filter_map(|element| {
        let value = element.get_attribute(attribute)?;
        match value.parse::<Direction>() {
            Ok(direction) => Some(NavigationAnchor::new(direction, element.get_attribute("href"))),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring navigation anchor");
                None
            }
        }
    });
    Ok(NavigationIndex::new(anchors.collect::<Vec<_>>()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture;
    use gallery_domain::navigation::KeyPress;
    use gallery_domain::trigger::FlowKind;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn should_register_known_triggers_with_target() {
        let _root = fixture::mount(
            "<a data-scan-test='form' href='/albums/5/edit/'>Edit</a>\
             <a data-scan-test='rotate' href='/photos/1/rotate/'>Rotate</a>\
             <button data-scan-test='form' data-url='/albums/5/delete/'>Delete</button>\
             <a data-scan-test='form' href='' data-url='/albums/5/move/'>Move</a>\
             <a data-scan-test='share' href='/share/'>Share</a>\
             <a data-scan-test='form'>No target</a>",
        );
        let config = TriggerConfig {
            modal_attribute: "data-scan-test".to_string(),
            ..TriggerConfig::default()
        };

        let found = triggers(&fixture::document(), &config, &EventSink::default()).unwrap();

        let kinds: Vec<_> = found.registry.iter().map(|t| (t.kind, t.target_url.clone())).collect();
        assert_eq!(
            kinds,
            vec![
                (FlowKind::FetchDisplay, "/albums/5/edit/".to_string()),
                (FlowKind::FireOnce, "/photos/1/rotate/".to_string()),
                (FlowKind::FetchDisplay, "/albums/5/delete/".to_string()),
                (FlowKind::FetchDisplay, "/albums/5/move/".to_string()),
            ]
        );
        assert_eq!(found.listeners.len(), 4);
    }

    #[wasm_bindgen_test]
    fn should_index_anchors_in_document_order() {
        let _root = fixture::mount(
            "<a data-nav-test='right' href='/photos/2/'>A</a>\
             <a data-nav-test='right' href='/photos/3/'>B</a>\
             <a data-nav-test='sideways' href='/x/'>?</a>\
             <a data-nav-test='up' href='/albums/'>Up</a>",
        );

        let index = navigation(&fixture::document(), "data-nav-test").unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(
            index.resolve(&KeyPress::new(Direction::Right)),
            Some("/photos/3/")
        );
        assert_eq!(index.resolve(&KeyPress::new(Direction::Up)), Some("/albums/"));
    }
}
