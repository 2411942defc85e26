//! Routes DOM callbacks into the workflow.
//!
//! Listeners are created before the workflow exists (trigger ids are needed to
//! build it), so the sink is connected afterwards and holds a weak handle.

use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use gallery_app::event::UiEvent;
use wasm_bindgen_futures::spawn_local;

use crate::WebWorkflow;

#[derive(Clone, Default)]
pub(crate) struct EventSink {
    workflow: Rc<OnceCell<Weak<WebWorkflow>>>,
}

impl EventSink {
    pub(crate) fn connect(&self, workflow: &Rc<WebWorkflow>) {
        if self.workflow.set(Rc::downgrade(workflow)).is_err() {
            tracing::warn!("event sink already connected");
        }
    }

    /// Hand `event` to the workflow on the local executor.
    ///
    /// Each event runs as its own task so a pending request never blocks
    /// later clicks or key presses.
    pub(crate) fn emit(&self, event: UiEvent) {
        let Some(workflow) = self.workflow.get().and_then(Weak::upgrade) else {
            tracing::debug!(?event, "workflow not running, event dropped");
            return;
        };
        spawn_local(async move {
            workflow.handle(event).await;
        });
    }
}
