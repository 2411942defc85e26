//! # gallery-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Transport`: send one request, get the raw body back
//!   - `OverlaySurface`: show / hide the single modal surface
//!   - `FormHost`: intercept the submission of the form inside the overlay
//!   - `Page`: navigate, notify failures, read/write the main photo source
//!   - `Clock`: current time for cache-busting
//! - Define the **services** of the modal lifecycle:
//!   - `OverlayController`: owns the modal session
//!   - `FormBinder`: binds each injected form exactly once
//!   - `ResponseInterpreter`: navigate / redisplay / fail
//!   - `TriggerRegistry`: declared triggers and their flows
//!   - `KeyboardNavigator`: arrow-key navigation
//! - Compose them in [`workflow::ModalWorkflow`], driven by [`event::UiEvent`]s
//!
//! ## Dependency rule
//! Depends on `gallery-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event;
pub mod ports;
pub mod services;
pub mod workflow;

#[cfg(test)]
mod fakes;
