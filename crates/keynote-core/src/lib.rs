//! # keynote-core
//!
//! Core types and pure workflow logic for the Keynote speaker directory.
//!
//! This crate provides the foundational types shared across all Keynote crates:
//! - Entity structs for speakers, testimonials, qualification requests,
//!   projects, wishlist entries, and accounts
//! - Closed enums for statuses, priorities, and selection vocabularies
//! - The speaker filter builder and its predicate
//! - Form state records with parallel error records (qualification wizard,
//!   speaker application, project, credentials)
//! - Wishlist defaults and the client-side duplicate guard
//! - ID prefix constants and cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod forms;
pub mod identity;
pub mod ids;
pub mod responses;
pub mod vocab;
pub mod wishlist;
