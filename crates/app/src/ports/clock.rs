//! Clock port.

use std::rc::Rc;

use gallery_domain::time::{self, Timestamp};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

impl<T: Clock> Clock for Rc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}
