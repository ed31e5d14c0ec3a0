//! Mobile navigation menu state machine.
//!
//! Two states, `Closed` (initial) and `Open`. Every transition writes the
//! state through to the toggle control, the navigation list and the page
//! scroll lock, so the three never disagree.

use crate::ACTIVE_CLASS;
use crate::platform::{ClassList, ScrollLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Menu controller over a toggle control, a navigation list and the page.
#[derive(Debug)]
pub struct Menu<C, P> {
    toggle: C,
    list: C,
    page: P,
    state: MenuState,
}

impl<C: ClassList, P: ScrollLock> Menu<C, P> {
    /// Create a closed menu. The surfaces are left untouched until the first
    /// transition.
    pub fn new(toggle: C, list: C, page: P) -> Self {
        Self {
            toggle,
            list,
            page,
            state: MenuState::Closed,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) -> MenuState {
        let next = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.enter(next);
        next
    }

    /// Force the menu closed. Closing a closed menu still rewrites the
    /// closed state, so a stray scroll lock is released.
    pub fn close(&mut self) {
        self.enter(MenuState::Closed);
    }

    fn enter(&mut self, state: MenuState) {
        let open = state.is_open();
        tracing::trace!(?state, "menu transition");
        self.toggle.set_class(ACTIVE_CLASS, open);
        self.list.set_class(ACTIVE_CLASS, open);
        self.page.set_scroll_locked(open);
        self.state = state;
    }
}
