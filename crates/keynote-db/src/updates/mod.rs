//! Partial-update records for mutable entities.
//!
//! Only `Some` fields become `SET` clauses. Nullable columns use
//! `Option<Option<T>>` so "clear" (`Some(None)`) differs from "leave alone".

pub mod account;
pub mod project;
pub mod speaker;
pub mod wishlist;
