//! Trigger registry: the page's declared triggers and the flow each starts.

use gallery_domain::form::Request;
use gallery_domain::id::TriggerId;
use gallery_domain::trigger::{FlowKind, TriggerDescriptor};

/// Immutable set of triggers, collected once when the page loads.
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    triggers: Vec<TriggerDescriptor>,
}

impl TriggerRegistry {
    #[must_use]
    pub fn new(triggers: impl IntoIterator<Item = TriggerDescriptor>) -> Self {
        Self {
            triggers: triggers.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: TriggerId) -> Option<&TriggerDescriptor> {
        self.triggers.iter().find(|trigger| trigger.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TriggerDescriptor> {
        self.triggers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// The request that activating `id` issues, with the flow it belongs to.
    ///
    /// Fetch-display triggers `GET` their target; fire-once triggers `POST`
    /// to it with no body.
    #[must_use]
    pub fn request_for(&self, id: TriggerId) -> Option<(FlowKind, Request)> {
        self.get(id).map(|trigger| {
            let request = match trigger.kind {
                FlowKind::FetchDisplay => Request::get(trigger.target_url.as_str()),
                FlowKind::FireOnce => Request::post(trigger.target_url.as_str()),
            };
            (trigger.kind, request)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_domain::form::Method;

    #[test]
    fn should_fetch_for_display_triggers() {
        let trigger = TriggerDescriptor::fetch_display("/albums/5/edit/");
        let id = trigger.id;
        let registry = TriggerRegistry::new([trigger]);

        let (kind, request) = registry.request_for(id).unwrap();
        assert_eq!(kind, FlowKind::FetchDisplay);
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "/albums/5/edit/");
        assert!(request.form.is_none());
    }

    #[test]
    fn should_post_for_fire_once_triggers() {
        let trigger = TriggerDescriptor::fire_once("/photos/3/rotate.ajax/");
        let id = trigger.id;
        let registry = TriggerRegistry::new([trigger]);

        let (kind, request) = registry.request_for(id).unwrap();
        assert_eq!(kind, FlowKind::FireOnce);
        assert_eq!(request.method, Method::Post);
    }

    #[test]
    fn should_return_none_for_unknown_trigger() {
        let registry = TriggerRegistry::new([TriggerDescriptor::fetch_display("/a/")]);
        assert!(registry.request_for(TriggerId::new()).is_none());
        assert_eq!(registry.len(), 1);
    }
}
