//! UI events: what the page reports to the workflow.

use gallery_domain::form::FormSubmission;
use gallery_domain::id::{BindingId, TriggerId};
use gallery_domain::navigation::KeyPress;

/// A user interaction observed by an adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A declared trigger was activated (default navigation already prevented).
    TriggerActivated(TriggerId),
    /// The form bound as `binding` was submitted.
    FormSubmitted {
        binding: BindingId,
        submission: FormSubmission,
    },
    /// The overlay's dismiss control was activated.
    Dismissed,
    /// A directional key went down.
    KeyPressed(KeyPress),
}
