//! # gallery-adapter-web
//!
//! Browser adapter: implements the `gallery-app` ports on top of the DOM and
//! `fetch`, scans the page for declarative triggers, and starts the workflow
//! when the wasm module loads.
//!
//! ## Page contract
//!
//! | Element | Role |
//! |---------|------|
//! | `[data-modal=form]` | Fetch a fragment from `href` and show it in the overlay |
//! | `[data-modal=rotate]` | POST to `href`, then reload the main photo |
//! | `[data-navigate=left\|up\|right\|down]` | Arrow-key targets; the last one per direction wins |
//! | `#modal-wrapper` / `#modal` | Overlay container and injection point |
//! | `.cancel` inside `#modal` | Dismiss control |
//! | `.photo-main .photo img` | Main photo refreshed after a rotation |
//!
//! Names are configurable through an inline JSON block, see [`config`].
//!
//! ## Dependency rule
//!
//! Depends on `gallery-app` (port traits) and `gallery-domain` only.

pub mod config;
mod dom;
pub mod error;
mod forms;
mod keyboard;
mod overlay;
mod page;
mod scan;
mod sink;
mod transport;

use std::cell::RefCell;
use std::rc::Rc;

use gallery_app::ports::clock::SystemClock;
use gallery_app::workflow::{ModalWorkflow, Ports};
use wasm_bindgen::prelude::*;

pub use config::{ClientConfig, ConfigError};
pub use error::DomError;
pub use forms::DomForms;
pub use overlay::DomOverlay;
pub use page::DomPage;
pub use transport::GlooTransport;

use dom::Listener;
use sink::EventSink;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Workflow running on the browser page.
pub type WebWorkflow =
    ModalWorkflow<GlooTransport, Rc<DomOverlay>, Rc<DomForms>, DomPage, SystemClock>;

/// Everything that must live as long as the page.
struct WebClient {
    _workflow: Rc<WebWorkflow>,
    _listeners: Vec<Listener>,
}

thread_local! {
    static CLIENT: RefCell<Option<WebClient>> = const { RefCell::new(None) };
}

/// Module entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the page lacks the
/// overlay elements.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = ClientConfig::from_document(&document).map_err(DomError::from)?;

    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.max_level())
            .build(),
    );

    let client = mount(&window, &document, &config)?;
    CLIENT.with(|slot| *slot.borrow_mut() = Some(client));
    tracing::info!("gallery client started");
    Ok(())
}

fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &ClientConfig,
) -> Result<WebClient, DomError> {
    let sink = EventSink::default();

    let wrapper = dom::html_element_by_id(document, &config.overlay.wrapper_id)?;
    let content = document
        .get_element_by_id(&config.overlay.content_id)
        .ok_or_else(|| DomError::MissingElement(config.overlay.content_id.clone()))?;

    let scan::Triggers {
        registry,
        mut listeners,
    } = scan::triggers(document, &config.triggers, &sink)?;
    let index = scan::navigation(document, &config.triggers.navigate_attribute)?;
    tracing::debug!(
        triggers = registry.len(),
        anchors = index.len(),
        "page scanned"
    );

    let workflow = Rc::new(
        ModalWorkflow::new(
            Ports {
                transport: GlooTransport::new(config.csrf.clone()),
                surface: Rc::new(DomOverlay::new(
                    wrapper,
                    content.clone(),
                    &config.overlay,
                    sink.clone(),
                )),
                forms: Rc::new(DomForms::new(content, sink.clone())),
                page: DomPage::new(window.clone(), document.clone(), &config.photo.selector),
                clock: SystemClock,
            },
            registry,
            index,
        )
        .with_failure_notice(config.notice.failure.clone()),
    );
    sink.connect(&workflow);

    listeners.push(keyboard::listen(window.clone(), document, sink)?);

    Ok(WebClient {
        _workflow: workflow,
        _listeners: listeners,
    })
}
