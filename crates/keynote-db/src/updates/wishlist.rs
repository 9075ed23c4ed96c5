//! Wishlist entry edits. Any status may follow any other; last write wins.

use keynote_core::enums::{WishlistPriority, WishlistStatus};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct WishlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WishlistStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<WishlistPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Default)]
pub struct WishlistUpdateBuilder(WishlistUpdate);

impl WishlistUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(mut self, status: WishlistStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: WishlistPriority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> WishlistUpdate {
        self.0
    }
}
