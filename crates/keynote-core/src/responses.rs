//! Aggregate response types returned by dashboard and admin commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectStatus, WishlistStatus};

/// Catalog-wide figures for the admin overview.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_speakers: u64,
    pub total_requests: u64,
    /// Rounded mean speaker fee; zero for an empty catalog.
    pub average_fee: i64,
}

/// Per-status project counts for one owner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCounts {
    pub total: u64,
    pub planning: u64,
    pub active: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl ProjectCounts {
    pub const fn record(&mut self, status: ProjectStatus, count: u64) {
        self.total += count;
        match status {
            ProjectStatus::Planning => self.planning += count,
            ProjectStatus::Active => self.active += count,
            ProjectStatus::Completed => self.completed += count,
            ProjectStatus::Cancelled => self.cancelled += count,
        }
    }
}

/// Per-status wishlist counts across all of one owner's projects.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WishlistCounts {
    pub total: u64,
    pub interested: u64,
    pub contacted: u64,
    pub proposed: u64,
    pub confirmed: u64,
    pub declined: u64,
}

impl WishlistCounts {
    pub const fn record(&mut self, status: WishlistStatus, count: u64) {
        self.total += count;
        match status {
            WishlistStatus::Interested => self.interested += count,
            WishlistStatus::Contacted => self.contacted += count,
            WishlistStatus::Proposed => self.proposed += count,
            WishlistStatus::Confirmed => self.confirmed += count,
            WishlistStatus::Declined => self.declined += count,
        }
    }
}

/// Dashboard summary for the signed-in user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectStats {
    pub projects: ProjectCounts,
    pub speakers: WishlistCounts,
}
