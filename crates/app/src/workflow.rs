//! Modal workflow: composes the services into the page's interaction layer.
//!
//! Adapters report [`UiEvent`]s; the workflow turns each into requests and
//! effects. It never returns errors: every failure is reported to the user
//! where the failing request resolved.

use std::cell::Cell;

use gallery_domain::error::GalleryError;
use gallery_domain::form::{FormSubmission, Request};
use gallery_domain::id::{BindingId, TriggerId};
use gallery_domain::navigation::{KeyPress, NavigationIndex};
use gallery_domain::photo::refreshed_source;
use gallery_domain::response::Flow;
use gallery_domain::trigger::FlowKind;

use crate::event::UiEvent;
use crate::ports::{Clock, FormHost, OverlaySurface, Page, Transport};
use crate::services::form_binder::FormBinder;
use crate::services::keyboard_navigator::KeyboardNavigator;
use crate::services::overlay_controller::OverlayController;
use crate::services::response_interpreter::{Applied, ResponseInterpreter};
use crate::services::trigger_registry::TriggerRegistry;

/// The port implementations a workflow runs on.
pub struct Ports<T, S, H, P, C> {
    pub transport: T,
    pub surface: S,
    pub forms: H,
    pub page: P,
    pub clock: C,
}

/// Result of activating a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// No trigger with that id is registered.
    Ignored,
    /// A fetch-display trigger ran; the response was applied.
    Modal(Applied),
    /// A fire-once action succeeded. `refreshed` is `false` when the page
    /// shows no photo to refresh.
    FireOnce { refreshed: bool },
    /// A fire-once action failed and the failure notice was shown.
    Failed,
}

/// The page's modal form lifecycle and keyboard navigation.
pub struct ModalWorkflow<T, S, H, P, C> {
    transport: T,
    overlay: OverlayController<S>,
    binder: FormBinder<H>,
    interpreter: ResponseInterpreter<P>,
    triggers: TriggerRegistry,
    keyboard: KeyboardNavigator<P>,
    page: P,
    clock: C,
    in_flight: Cell<Option<BindingId>>,
}

impl<T, S, H, P, C> ModalWorkflow<T, S, H, P, C>
where
    T: Transport,
    S: OverlaySurface,
    H: FormHost,
    P: Page + Clone,
    C: Clock,
{
    /// Wire the workflow. Called once per page.
    pub fn new(ports: Ports<T, S, H, P, C>, triggers: TriggerRegistry, index: NavigationIndex) -> Self {
        let Ports {
            transport,
            surface,
            forms,
            page,
            clock,
        } = ports;

        Self {
            transport,
            overlay: OverlayController::new(surface),
            binder: FormBinder::new(forms),
            interpreter: ResponseInterpreter::new(page.clone()),
            triggers,
            keyboard: KeyboardNavigator::new(index, page.clone()),
            page,
            clock,
            in_flight: Cell::new(None),
        }
    }

    /// Replace the failure notice text.
    #[must_use]
    pub fn with_failure_notice(mut self, notice: impl Into<String>) -> Self {
        self.interpreter = self.interpreter.with_notice(notice);
        self
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayController<S> {
        &self.overlay
    }

    #[must_use]
    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    /// Dispatch one UI event.
    pub async fn handle(&self, event: UiEvent) {
        match event {
            UiEvent::TriggerActivated(id) => {
                self.activate(id).await;
            }
            UiEvent::FormSubmitted {
                binding,
                submission,
            } => {
                self.submit(binding, submission).await;
            }
            UiEvent::Dismissed => {
                self.dismiss();
            }
            UiEvent::KeyPressed(press) => {
                self.key_pressed(&press);
            }
        }
    }

    /// Run the flow of trigger `id`.
    pub async fn activate(&self, id: TriggerId) -> Activation {
        let Some((kind, request)) = self.triggers.request_for(id) else {
            tracing::warn!(trigger = %id, "activation of unknown trigger ignored");
            return Activation::Ignored;
        };
        tracing::debug!(trigger = %id, %kind, url = %request.url, "trigger activated");

        match kind {
            FlowKind::FetchDisplay => {
                let result = self.transport.send(&request).await;
                Activation::Modal(self.interpreter.apply(
                    Flow::Fetch,
                    result,
                    &self.overlay,
                    &self.binder,
                ))
            }
            FlowKind::FireOnce => self.fire_once(&request).await,
        }
    }

    async fn fire_once(&self, request: &Request) -> Activation {
        match self.transport.send(request).await {
            Ok(_) => Activation::FireOnce {
                refreshed: self.refresh_photo(),
            },
            Err(err) => {
                let raw = err.diagnostic().to_owned();
                self.interpreter
                    .report_failure("fire_once", &GalleryError::from(err), &raw);
                Activation::Failed
            }
        }
    }

    fn refresh_photo(&self) -> bool {
        let Some(src) = self.page.photo_source() else {
            tracing::debug!("no photo on the page to refresh");
            return false;
        };
        let refreshed = refreshed_source(&src, self.clock.now());
        tracing::debug!(from = %src, to = %refreshed, "photo source refreshed");
        self.page.set_photo_source(&refreshed);
        true
    }

    /// Post the form bound as `binding` and apply the response.
    ///
    /// Returns `None` when the submission was not sent: the binding is not
    /// live, or a submission of the same binding is still in flight.
    pub async fn submit(&self, binding: BindingId, submission: FormSubmission) -> Option<Applied> {
        if self.in_flight.get() == Some(binding) {
            tracing::debug!(%binding, "submission already in flight, ignored");
            return None;
        }
        let request = match self.binder.prepare(&self.overlay, binding, submission) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(%binding, error = %err, "submission ignored");
                return None;
            }
        };

        self.in_flight.set(Some(binding));
        let result = self.transport.send(&request).await;
        // A newer binding may hold the guard by now.
        if self.in_flight.get() == Some(binding) {
            self.in_flight.set(None);
        }

        Some(
            self.interpreter
                .apply(Flow::Submit, result, &self.overlay, &self.binder),
        )
    }

    /// Close the overlay. Returns `false` when it was already closed.
    pub fn dismiss(&self) -> bool {
        self.binder.release();
        self.overlay.hide()
    }

    /// Navigate for a directional key press. Returns whether the page was
    /// sent somewhere.
    pub fn key_pressed(&self, press: &KeyPress) -> bool {
        self.keyboard.on_key(press)
    }
}
