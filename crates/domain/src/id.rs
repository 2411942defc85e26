//! Identifiers handed out while the page is alive.
//!
//! Nothing here is persisted or sent to the server; an id only has to be
//! unique for the lifetime of the page, so every value is a fresh v4 UUID.
//! `Display` prefixes the kind so log lines stay readable.

use std::fmt;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident => $prefix:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Issue an id no other value of this kind carries.
            #[must_use]
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0.simple())
            }
        }
    };
}

define_id!(
    /// One opening of the modal session.
    SessionId => "session"
);

define_id!(
    /// One binding of a form inside the modal content.
    ///
    /// A fresh value is issued on every bind, so a submission that carries an
    /// older value can be recognised as stale.
    BindingId => "binding"
);

define_id!(
    /// A [`TriggerDescriptor`](crate::trigger::TriggerDescriptor) found in the page.
    TriggerId => "trigger"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_issue_distinct_bindings() {
        let ids: Vec<_> = (0..16).map(|_| BindingId::new()).collect();
        for (i, a) in ids.iter().enumerate() {
            assert!(ids[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn should_prefix_kind_when_displayed() {
        assert!(SessionId::new().to_string().starts_with("session-"));
        assert!(BindingId::new().to_string().starts_with("binding-"));

        let trigger = TriggerId::new().to_string();
        assert_eq!(trigger.len(), "trigger-".len() + 32);
        assert!(!trigger.contains(char::is_whitespace));
    }
}
