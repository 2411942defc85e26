//! Trigger: a page affordance that starts a modal or fire-once flow.

use serde::{Deserialize, Serialize};

use crate::id::TriggerId;

/// What activating a trigger does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// `GET` a fragment and open it in the modal.
    FetchDisplay,
    /// `POST` once and refresh the displayed photo; no modal.
    FireOnce,
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchDisplay => f.write_str("fetch_display"),
            Self::FireOnce => f.write_str("fire_once"),
        }
    }
}

/// Static association between a page element and a flow.
///
/// Read once when the page loads and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerDescriptor {
    pub id: TriggerId,
    pub kind: FlowKind,
    pub target_url: String,
}

impl TriggerDescriptor {
    #[must_use]
    pub fn new(kind: FlowKind, target_url: impl Into<String>) -> Self {
        Self {
            id: TriggerId::new(),
            kind,
            target_url: target_url.into(),
        }
    }

    /// Shorthand for a [`FlowKind::FetchDisplay`] trigger.
    #[must_use]
    pub fn fetch_display(target_url: impl Into<String>) -> Self {
        Self::new(FlowKind::FetchDisplay, target_url)
    }

    /// Shorthand for a [`FlowKind::FireOnce`] trigger.
    #[must_use]
    pub fn fire_once(target_url: impl Into<String>) -> Self {
        Self::new(FlowKind::FireOnce, target_url)
    }
}
