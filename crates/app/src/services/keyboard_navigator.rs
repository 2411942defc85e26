//! Keyboard navigator: arrow keys move between sibling photos and albums.

use gallery_domain::navigation::{KeyPress, NavigationIndex};

use crate::ports::Page;

/// Stateless per keystroke: resolves a press against the page's anchors.
pub struct KeyboardNavigator<P> {
    index: NavigationIndex,
    page: P,
}

impl<P: Page> KeyboardNavigator<P> {
    pub fn new(index: NavigationIndex, page: P) -> Self {
        Self { index, page }
    }

    /// Navigate for `press` if it resolves to a target. Returns whether the
    /// page was sent somewhere.
    pub fn on_key(&self, press: &KeyPress) -> bool {
        match self.index.resolve(press) {
            Some(target) => {
                tracing::info!(direction = %press.direction, url = target, "keyboard navigation");
                self.page.navigate(target);
                true
            }
            None => false,
        }
    }
}
