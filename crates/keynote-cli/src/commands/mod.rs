pub mod admin;
pub mod apply;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod project;
pub mod qualify;
pub mod shared;
pub mod speakers;
pub mod wishlist;

/// Shown when a backend call failed; details were already logged.
pub const RETRY_MESSAGE: &str = "something went wrong talking to the database. Please try again.";
