use crate::page::PageId;

/// Main window shell state: which page is currently visible.
///
/// Exactly one page is active at any time, and the active nav button is by
/// definition the one whose page equals [`ShellState::active`], so the two
/// can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    active: PageId,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            active: PageId::Home,
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> PageId {
        self.active
    }

    pub fn is_active(&self, page: PageId) -> bool {
        self.active == page
    }

    /// Make `page` the sole visible page. Returns `false` when `page` was
    /// already active, so repeat clicks on the same nav button are no-ops.
    pub fn switch_to(&mut self, page: PageId) -> bool {
        if self.active == page {
            return false;
        }
        tracing::debug!(from = %self.active, to = %page, "switching active page");
        self.active = page;
        true
    }
}
